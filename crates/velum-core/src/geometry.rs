//! Geometric primitives for canvas layout and element positioning.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Velum uses the SVG coordinate convention: origin at the top-left corner,
//! X increasing rightward, Y increasing downward. One logical unit equals one
//! CSS pixel; themes derive their constants at 96 units per inch.

/// A 2D point in canvas coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }
}

/// The dimensions of an element or canvas, width by height.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}

/// A rectangular bounding box with minimum and maximum coordinates.
///
/// Every placed element resolves to absolute `Bounds` on its canvas; the
/// composer never stores relative positions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns true if the other bounds lies entirely inside this one,
    /// with a small tolerance for accumulated floating-point error.
    pub fn contains(&self, other: &Self) -> bool {
        const EPSILON: f32 = 0.01;
        other.min_x >= self.min_x - EPSILON
            && other.min_y >= self.min_y - EPSILON
            && other.max_x <= self.max_x + EPSILON
            && other.max_y <= self.max_y + EPSILON
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_size_scale() {
        let scaled = Size::new(100.0, 20.0).scale(0.5);
        assert_approx_eq!(f32, scaled.width(), 50.0);
        assert_approx_eq!(f32, scaled.height(), 10.0);
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        assert_approx_eq!(f32, bounds.max_x(), 40.0);
        assert_approx_eq!(f32, bounds.max_y(), 60.0);
        assert_approx_eq!(f32, bounds.width(), 30.0);
        assert_approx_eq!(f32, bounds.height(), 40.0);

        let center = bounds.center();
        assert_approx_eq!(f32, center.x(), 25.0);
        assert_approx_eq!(f32, center.y(), 40.0);
    }

    #[test]
    fn test_bounds_from_center() {
        let bounds = Bounds::new_from_center(Point::new(100.0, 50.0), Size::new(40.0, 20.0));
        assert_approx_eq!(f32, bounds.min_x(), 80.0);
        assert_approx_eq!(f32, bounds.min_y(), 40.0);
        assert_approx_eq!(f32, bounds.max_x(), 120.0);
        assert_approx_eq!(f32, bounds.max_y(), 60.0);
    }

    #[test]
    fn test_bounds_contains() {
        let outer = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        let inner = Bounds::new_from_top_left(Point::new(10.0, 10.0), Size::new(50.0, 50.0));
        let overlapping = Bounds::new_from_top_left(Point::new(60.0, 60.0), Size::new(50.0, 50.0));

        assert!(outer.contains(&inner));
        assert!(outer.contains(&outer));
        assert!(!outer.contains(&overlapping));
    }
}

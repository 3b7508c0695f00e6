//! Filled and stroked shapes placed on a canvas.
//!
//! A [`ShapeElement`] pairs a [`ShapeKind`] with bounds, an optional fill,
//! an optional stroke, and the layer it renders to. Shapes cover all the
//! rectangular chrome of a slide (backgrounds, bands, panels) as well as
//! decorative ovals, so the kind is a closed enum rather than a trait.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{LayeredOutput, RenderLayer, StrokeDefinition},
    geometry::Bounds,
};

/// The geometric form of a shape element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// Axis-aligned rectangle filling its bounds
    Rectangle,
    /// Rectangle with rounded corners of the given radius
    RoundedRectangle { radius: f32 },
    /// Ellipse inscribed in its bounds
    Oval,
}

/// A shape placed on a canvas.
///
/// # Examples
///
/// ```
/// # use velum_core::color::Color;
/// # use velum_core::draw::{RenderLayer, ShapeElement, ShapeKind};
/// # use velum_core::geometry::{Bounds, Point, Size};
/// let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(1280.0, 105.6));
/// let band = ShapeElement::new(ShapeKind::Rectangle, bounds, RenderLayer::Band)
///     .with_fill(Color::new("#006699").unwrap());
/// assert!(band.fill().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeElement {
    kind: ShapeKind,
    bounds: Bounds,
    fill: Option<Color>,
    stroke: Option<StrokeDefinition>,
    layer: RenderLayer,
}

impl ShapeElement {
    /// Creates a shape with no fill and no stroke on the given layer.
    pub fn new(kind: ShapeKind, bounds: Bounds, layer: RenderLayer) -> Self {
        Self {
            kind,
            bounds,
            fill: None,
            stroke: None,
            layer,
        }
    }

    /// Sets the fill color (builder style).
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets the stroke (builder style).
    pub fn with_stroke(mut self, stroke: StrokeDefinition) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Returns the geometric form of this shape.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the bounds of this shape.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the fill color, if set.
    pub fn fill(&self) -> Option<&Color> {
        self.fill.as_ref()
    }

    /// Returns the stroke, if set.
    pub fn stroke(&self) -> Option<&StrokeDefinition> {
        self.stroke.as_ref()
    }

    /// Returns the layer this shape renders to.
    pub fn layer(&self) -> RenderLayer {
        self.layer
    }

    /// Renders this shape to its layer.
    pub fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        match self.kind {
            ShapeKind::Rectangle => {
                let rect = self.apply_paint(
                    svg_element::Rectangle::new()
                        .set("x", self.bounds.min_x())
                        .set("y", self.bounds.min_y())
                        .set("width", self.bounds.width())
                        .set("height", self.bounds.height()),
                );
                output.add_to_layer(self.layer, Box::new(rect));
            }
            ShapeKind::RoundedRectangle { radius } => {
                let rect = self.apply_paint(
                    svg_element::Rectangle::new()
                        .set("x", self.bounds.min_x())
                        .set("y", self.bounds.min_y())
                        .set("width", self.bounds.width())
                        .set("height", self.bounds.height())
                        .set("rx", radius)
                        .set("ry", radius),
                );
                output.add_to_layer(self.layer, Box::new(rect));
            }
            ShapeKind::Oval => {
                let center = self.bounds.center();
                let ellipse = self.apply_paint(
                    svg_element::Ellipse::new()
                        .set("cx", center.x())
                        .set("cy", center.y())
                        .set("rx", self.bounds.width() / 2.0)
                        .set("ry", self.bounds.height() / 2.0),
                );
                output.add_to_layer(self.layer, Box::new(ellipse));
            }
        }

        output
    }

    // `set` is inherent to each element builder, so a generic body has to
    // go through `Node::assign` instead.
    fn apply_paint<T: svg::Node>(&self, mut node: T) -> T {
        match self.fill() {
            Some(fill) => {
                node.assign("fill", fill);
                node.assign("fill-opacity", fill.alpha());
            }
            None => node.assign("fill", "none"),
        }

        if let Some(stroke) = self.stroke() {
            node.assign("stroke", stroke.color().to_string());
            node.assign("stroke-opacity", stroke.color().alpha());
            node.assign("stroke-width", stroke.width());
            if let Some(dasharray) = stroke.style().to_svg_value() {
                node.assign("stroke-dasharray", dasharray);
            }
        }

        node
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::{Point, Size};

    use super::*;

    fn sample_bounds() -> Bounds {
        Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(100.0, 50.0))
    }

    fn render_string(shape: &ShapeElement) -> String {
        shape
            .render_to_layers()
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    #[test]
    fn test_shape_defaults_have_no_paint() {
        let shape = ShapeElement::new(ShapeKind::Rectangle, sample_bounds(), RenderLayer::Panel);
        assert!(shape.fill().is_none());
        assert!(shape.stroke().is_none());
        assert_eq!(shape.layer(), RenderLayer::Panel);
    }

    #[test]
    fn test_builder_sets_paint() {
        let shape = ShapeElement::new(ShapeKind::Oval, sample_bounds(), RenderLayer::Content)
            .with_fill(Color::new("teal").unwrap())
            .with_stroke(StrokeDefinition::solid(Color::new("black").unwrap(), 1.0));
        assert!(shape.fill().is_some());
        assert!(shape.stroke().is_some());
    }

    #[test]
    fn test_rectangle_renders_rect_node() {
        let fill = Color::new("#006699").unwrap();
        let shape = ShapeElement::new(ShapeKind::Rectangle, sample_bounds(), RenderLayer::Band)
            .with_fill(fill);
        let rendered = render_string(&shape);
        assert!(rendered.contains("<rect"));
        assert!(rendered.contains(&format!("fill=\"{fill}\"")));
    }

    #[test]
    fn test_rounded_rectangle_sets_corner_radius() {
        let shape = ShapeElement::new(
            ShapeKind::RoundedRectangle { radius: 8.0 },
            sample_bounds(),
            RenderLayer::Panel,
        );
        let rendered = render_string(&shape);
        assert!(rendered.contains("rx=\"8\""));
    }

    #[test]
    fn test_oval_renders_inscribed_ellipse() {
        let shape = ShapeElement::new(ShapeKind::Oval, sample_bounds(), RenderLayer::Content);
        let rendered = render_string(&shape);
        assert!(rendered.contains("<ellipse"));
        assert!(rendered.contains("cx=\"60\""));
        assert!(rendered.contains("cy=\"45\""));
        assert!(rendered.contains("rx=\"50\""));
    }

    #[test]
    fn test_stroked_shape_renders_stroke_attributes() {
        let shape = ShapeElement::new(
            ShapeKind::RoundedRectangle { radius: 4.0 },
            sample_bounds(),
            RenderLayer::Panel,
        )
        .with_fill(Color::new("white").unwrap())
        .with_stroke(StrokeDefinition::dashed(Color::new("#006699").unwrap(), 2.0));

        let stroke_color = Color::new("#006699").unwrap();
        let rendered = render_string(&shape);
        assert!(rendered.contains(&format!("stroke=\"{stroke_color}\"")));
        assert!(rendered.contains("stroke-width=\"2\""));
        assert!(rendered.contains("stroke-dasharray=\"5,5\""));
        assert!(rendered.contains("fill-opacity=\"1\""));
    }

    #[test]
    fn test_unfilled_shape_renders_fill_none() {
        let shape = ShapeElement::new(ShapeKind::Rectangle, sample_bounds(), RenderLayer::Panel);
        let rendered = render_string(&shape);
        assert!(rendered.contains("fill=\"none\""));
    }
}

//! Stroke and line-style definitions.
//!
//! A single stroke definition is shared by every drawable that outlines or
//! connects things: panel borders, divider rules, table grids, and arrows.
//!
//! # Quick Start
//!
//! ```
//! use velum_core::draw::{StrokeDefinition, StrokeStyle};
//! use velum_core::color::Color;
//!
//! // Thin panel border
//! let border = StrokeDefinition::solid(Color::new("#c8dcf0").unwrap(), 1.0);
//!
//! // Dashed guide line
//! let guide = StrokeDefinition::dashed(Color::new("gray").unwrap(), 1.0);
//! ```
//!
//! Use [`apply_stroke!`](crate::apply_stroke!) to set the corresponding SVG
//! attributes (`stroke`, `stroke-opacity`, `stroke-width`, `stroke-dasharray`)
//! on an element in one step.

use std::str::FromStr;

use crate::color::Color;

/// The dash pattern of a stroke.
///
/// Maps to the SVG `stroke-dasharray` attribute; `Solid` emits no attribute.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line with equal dash and gap lengths (5px dash, 5px gap)
    Dashed,
    /// Dotted line with small dots (2px dot, 3px gap)
    Dotted,
    /// Custom SVG dasharray pattern, e.g. `"10,5,2,5"`
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            // Any other value is treated as a custom dasharray pattern
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use velum_core::draw::{StrokeDefinition, StrokeStyle};
/// use velum_core::color::Color;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// assert_eq!(stroke.width(), 2.0);
///
/// let mut custom = StrokeDefinition::new(Color::new("red").unwrap(), 1.0);
/// custom.set_style(StrokeStyle::Custom("10,5".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width, solid by default.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::default(),
        }
    }

    /// Creates a solid stroke (convenience constructor).
    pub fn solid(color: Color, width: f32) -> Self {
        Self::new(color, width)
    }

    /// Creates a dashed stroke (convenience constructor).
    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke style.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets stroke color, opacity, width, and dash pattern (when not solid) on
/// any SVG element in one step.
///
/// # Examples
///
/// ```
/// use velum_core::draw::StrokeDefinition;
/// use velum_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::solid(Color::new("black").unwrap(), 2.0);
/// let rect = svg_element::Rectangle::new()
///     .set("width", 100)
///     .set("height", 50);
///
/// let rect = velum_core::apply_stroke!(rect, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_constructors() {
        let color = Color::new("red").unwrap();

        let solid = StrokeDefinition::solid(color, 2.0);
        assert_eq!(solid.width(), 2.0);
        assert_eq!(*solid.style(), StrokeStyle::Solid);

        let dashed = StrokeDefinition::dashed(color, 1.5);
        assert_eq!(*dashed.style(), StrokeStyle::Dashed);
    }

    #[test]
    fn test_stroke_style_svg_values() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value(), Some("5,5".to_string()));
        assert_eq!(StrokeStyle::Dotted.to_svg_value(), Some("2,3".to_string()));
        assert_eq!(
            StrokeStyle::Custom("8,2".to_string()).to_svg_value(),
            Some("8,2".to_string())
        );
    }

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!("solid".parse::<StrokeStyle>().unwrap(), StrokeStyle::Solid);
        assert_eq!(
            "dashed".parse::<StrokeStyle>().unwrap(),
            StrokeStyle::Dashed
        );
        assert_eq!(
            "3,1".parse::<StrokeStyle>().unwrap(),
            StrokeStyle::Custom("3,1".to_string())
        );
    }

    #[test]
    fn test_stroke_setters() {
        let mut stroke = StrokeDefinition::default();
        stroke.set_color(Color::new("green").unwrap());
        stroke.set_width(4.0);
        stroke.set_style(StrokeStyle::Dotted);

        assert_eq!(stroke.color(), Color::new("green").unwrap());
        assert_eq!(stroke.width(), 4.0);
        assert_eq!(*stroke.style(), StrokeStyle::Dotted);
    }
}

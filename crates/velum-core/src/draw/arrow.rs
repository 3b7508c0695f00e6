//! Straight connector arrows between two canvas points.
//!
//! An arrow renders as an SVG `<path>` on the [`Arrow`](RenderLayer::Arrow)
//! layer with a triangular head drawn by a marker. Markers are defined once
//! per color in the document's `<defs>` section (see
//! [`create_marker_definitions`]) and referenced by id from each path, so a
//! canvas full of same-colored arrows shares a single marker element.

use svg::node::element::{Definitions, Marker, Path};

use crate::{
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::Point,
};

/// Visual style for arrows: color and line width. The head always sits at
/// the end point and is filled with the line color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowDefinition {
    color: Color,
    width: f32,
}

impl ArrowDefinition {
    /// Creates a new ArrowDefinition with default values
    /// Use setter methods to configure the arrow properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the arrow color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Gets the arrow line width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Sets the arrow color
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the arrow line width
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }
}

impl Default for ArrowDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 2.0,
        }
    }
}

/// A directed connector from a start point to an end point.
///
/// Zero-length arrows (start equal to end) are permitted; they render a
/// degenerate path that shows only the head.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowElement {
    definition: ArrowDefinition,
    start: Point,
    end: Point,
}

impl ArrowElement {
    /// Creates an arrow pointing from `start` to `end`.
    pub fn new(definition: ArrowDefinition, start: Point, end: Point) -> Self {
        Self {
            definition,
            start,
            end,
        }
    }

    /// Returns the style of this arrow.
    pub fn definition(&self) -> &ArrowDefinition {
        &self.definition
    }

    /// Returns the tail point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the tip point, where the head is drawn.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Renders this arrow to the [`Arrow`](RenderLayer::Arrow) layer.
    ///
    /// The path references a per-color head marker by id; the matching
    /// definition must be emitted into the document via
    /// [`create_marker_definitions`].
    pub fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let path = Path::new()
            .set("d", create_path_data_from_points(self.start, self.end))
            .set("fill", "none")
            .set("stroke", self.definition.color().to_string())
            .set("stroke-width", self.definition.width())
            .set(
                "marker-end",
                format!("url(#{})", head_marker_id(&self.definition.color())),
            );

        output.add_to_layer(RenderLayer::Arrow, Box::new(path));
        output
    }
}

/// Create a path data string from two points
pub fn create_path_data_from_points(start: Point, end: Point) -> String {
    format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
}

/// Returns the marker element id for an arrowhead of the given color.
pub fn head_marker_id(color: &Color) -> String {
    format!("arrowhead-{}", color.to_id_safe_string())
}

/// Creates head marker definitions for the given set of arrow colors.
///
/// Call once per document with the distinct colors in use; duplicate colors
/// in the iterator produce duplicate markers.
pub fn create_marker_definitions<'a, I>(colors: I) -> Definitions
where
    I: Iterator<Item = &'a Color>,
{
    let mut defs = Definitions::new();

    for color in colors {
        let head = Marker::new()
            .set("id", head_marker_id(color))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string()),
            );

        defs = defs.add(head);
    }

    defs
}

//! SVG rendering for composed canvases.
//!
//! Rendering is in-memory: a [`Canvas`] becomes an [`svg::Document`] whose
//! string form the caller persists however it likes. Arrowhead markers are
//! collected from the canvas's arrow elements and emitted once per distinct
//! color into the document's `<defs>`.

use std::collections::HashSet;

use log::debug;
use svg::Document;
use svg::node::element::Rectangle;

use velum_core::{
    color::Color,
    draw::{Element, arrow},
};

use crate::canvas::Canvas;

/// Renders a canvas to a complete SVG document.
///
/// The optional background paints the full canvas behind every layer;
/// templates that draw their own background pass `None`.
pub fn render_canvas(canvas: &Canvas, background: Option<Color>) -> Document {
    let size = canvas.size();
    let mut document = Document::new()
        .set("width", size.width())
        .set("height", size.height())
        .set("viewBox", (0.0, 0.0, size.width(), size.height()));

    let arrow_colors: HashSet<Color> = canvas
        .elements()
        .iter()
        .filter_map(|element| match element {
            Element::Arrow(arrow) => Some(arrow.definition().color()),
            _ => None,
        })
        .collect();

    if !arrow_colors.is_empty() {
        debug!(colors = arrow_colors.len(); "Emitting arrowhead markers");
        document = document.add(arrow::create_marker_definitions(arrow_colors.iter()));
    }

    if let Some(background) = background {
        document = document.add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", size.width())
                .set("height", size.height())
                .set("fill", &background),
        );
    }

    for node in canvas.render_to_layers().render() {
        document = document.add(node);
    }

    document
}

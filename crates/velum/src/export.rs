//! Serialization backends for composed documents.

pub mod svg;

pub use svg::render_canvas;

//! Velum - a declarative slide and figure composer.
//!
//! Velum turns an ordered deck of slide specifications into a document of
//! canvases populated with positioned visual elements, and renders each
//! canvas to SVG. Composition is deterministic: the same deck and theme
//! always produce the same document.

pub mod config;

mod canvas;
mod compose;
mod error;
mod export;
mod images;
mod spec;
mod theme;

pub use velum_core::{color, draw, geometry};

pub use canvas::{Canvas, Document};
pub use compose::{
    PLACEHOLDER_TEXT, Pagination, compose_deck, compose_slide, place_arrow, place_block,
    place_picture, place_table,
};
pub use error::{SpecError, VelumError};
pub use images::{FsImageProvider, ImageAsset, ImageProvider, NoImages};
pub use spec::{BulletKind, Deck, SlideSpec};
pub use theme::{Theme, UNITS_PER_INCH, inches};

use log::{debug, info};

use config::AppConfig;

/// Builder for parsing, composing, and rendering decks.
///
/// # Examples
///
/// ```rust,no_run
/// use velum::{DeckBuilder, NoImages, config::AppConfig};
///
/// let source = r#"{"slides": [{"kind": "title", "title": "Velum"}]}"#;
///
/// let builder = DeckBuilder::new(AppConfig::default());
///
/// let deck = builder.parse(source).expect("Failed to parse");
/// let document = builder.compose(&deck, &NoImages).expect("Failed to compose");
/// let pages = builder.render_svg(&document);
/// assert_eq!(pages.len(), 1);
/// ```
#[derive(Default)]
pub struct DeckBuilder {
    config: AppConfig,
}

impl DeckBuilder {
    /// Create a new deck builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse and validate a JSON deck specification.
    ///
    /// # Errors
    ///
    /// Returns `VelumError` for malformed JSON or a specification contract
    /// violation (missing required field, ragged table rows).
    pub fn parse(&self, source: &str) -> Result<Deck, VelumError> {
        info!("Parsing deck");

        let deck = Deck::from_json(source).map_err(VelumError::Spec)?;

        debug!(slides = deck.len(); "Deck parsed successfully");
        Ok(deck)
    }

    /// Compose a deck into a document, one canvas per slide.
    ///
    /// # Errors
    ///
    /// Returns `VelumError` for configuration errors (invalid color
    /// overrides) or specification contract violations.
    pub fn compose(
        &self,
        deck: &Deck,
        images: &dyn ImageProvider,
    ) -> Result<Document, VelumError> {
        let theme = self.config.to_theme().map_err(VelumError::Config)?;
        let document = compose_deck(deck, &theme, images)?;
        Ok(document)
    }

    /// Render every canvas of a document to an SVG string, in page order.
    pub fn render_svg(&self, document: &Document) -> Vec<String> {
        let background = self
            .config
            .to_theme()
            .map(|theme| theme.background())
            .ok();

        let pages: Vec<String> = document
            .canvases()
            .iter()
            .map(|canvas| export::render_canvas(canvas, background).to_string())
            .collect();

        info!(pages = pages.len(); "SVG rendered successfully");
        pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_end_to_end() {
        let builder = DeckBuilder::default();
        let deck = builder
            .parse(r#"{"slides": [{"kind": "title", "title": "Velum"}]}"#)
            .unwrap();
        let document = builder.compose(&deck, &NoImages).unwrap();
        let pages = builder.render_svg(&document);

        assert_eq!(pages.len(), 1);
        assert!(pages[0].starts_with("<svg"));
        assert!(pages[0].contains("Velum"));
    }
}

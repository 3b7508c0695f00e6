//! Slide templates and the composition driver.
//!
//! Each template is a pure function from a specification, the shared
//! [`Theme`], and an [`ImageProvider`] to one populated [`Canvas`]. The
//! driver, [`compose_deck`], folds an ordered deck into a [`Document`] by
//! dispatching each slide to its template and threading a running 1-based
//! page index for pagination footers.
//!
//! Templates share only the placement primitives and the theme; no state
//! crosses canvas boundaries, so composing the same deck twice yields
//! structurally identical documents.

mod chrome;
mod content;
mod figure;
mod primitives;
mod results;
mod table;
mod title;

pub use chrome::Pagination;
pub use content::compose_content_slide;
pub use figure::compose_figure_slide;
pub use primitives::{PLACEHOLDER_TEXT, place_arrow, place_block, place_picture, place_table};
pub use results::compose_result_slide;
pub use table::compose_table_slide;
pub use title::compose_title_slide;

use log::{debug, info};

use crate::{
    canvas::{Canvas, Document},
    error::SpecError,
    images::ImageProvider,
    spec::{Deck, SlideSpec},
    theme::Theme,
};

/// Composes a full deck into a document, one canvas per slide in input
/// order.
///
/// # Errors
///
/// Returns the first [`SpecError`] encountered; composition stops at the
/// offending slide.
pub fn compose_deck(
    deck: &Deck,
    theme: &Theme,
    images: &dyn ImageProvider,
) -> Result<Document, SpecError> {
    info!(slides = deck.len(); "Composing deck");

    // Programmatically built decks bypass the parse-time check
    deck.validate()?;

    let mut document = Document::new();
    let total = deck.len();

    for (index, slide) in deck.slides().iter().enumerate() {
        let pagination = Pagination {
            page: index + 1,
            total,
            label: deck.footer(),
        };
        debug!(page = pagination.page, title = slide.title(); "Composing slide");
        document.push(compose_slide(slide, theme, images, pagination)?);
    }

    info!(canvases = document.len(); "Deck composed");
    Ok(document)
}

/// Composes a single slide under the given pagination context.
pub fn compose_slide(
    slide: &SlideSpec,
    theme: &Theme,
    images: &dyn ImageProvider,
    pagination: Pagination<'_>,
) -> Result<Canvas, SpecError> {
    match slide {
        SlideSpec::Title { title, subtitle } => Ok(compose_title_slide(
            title,
            subtitle.as_deref(),
            theme,
            pagination.page,
        )),
        SlideSpec::Content { title, bullets } => {
            Ok(compose_content_slide(title, bullets, theme, pagination))
        }
        SlideSpec::Table {
            title,
            headers,
            rows,
            footnote,
        } => compose_table_slide(title, headers, rows, footnote.as_deref(), theme, pagination),
        SlideSpec::Figure {
            title,
            image,
            captions,
            fullsize,
        } => Ok(compose_figure_slide(
            title,
            image.as_deref(),
            captions,
            *fullsize,
            theme,
            images,
            pagination,
        )),
        SlideSpec::Result {
            number,
            title,
            image,
            headers,
            rows,
            observations,
        } => compose_result_slide(
            *number,
            title,
            image.as_deref(),
            headers,
            rows,
            observations,
            theme,
            images,
            pagination,
        ),
    }
}

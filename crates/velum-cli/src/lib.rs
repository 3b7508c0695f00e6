//! CLI logic for the Velum slide composer.
//!
//! Reads a JSON deck specification, composes it into a document, and writes
//! one SVG file per slide into the output directory.

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::info;

use velum::{DeckBuilder, FsImageProvider, ImageProvider, NoImages, VelumError};

/// Run the Velum CLI application
///
/// Composes the input deck and writes the resulting SVG files, named
/// `slide-01.svg`, `slide-02.svg`, and so on, to the output directory.
///
/// # Errors
///
/// Returns `VelumError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Deck specification contract violations
pub fn run(args: &Args) -> Result<(), VelumError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Composing deck"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let images: Box<dyn ImageProvider> = match &args.images {
        Some(base) => Box::new(FsImageProvider::new(base)),
        None => Box::new(NoImages),
    };

    let builder = DeckBuilder::new(app_config);
    let deck = builder.parse(&source)?;
    let document = builder.compose(&deck, images.as_ref())?;
    let pages = builder.render_svg(&document);

    let output_dir = Path::new(&args.output);
    fs::create_dir_all(output_dir)?;

    for (index, page) in pages.iter().enumerate() {
        let file_name = format!("slide-{:02}.svg", index + 1);
        fs::write(output_dir.join(&file_name), page)?;
    }

    info!(pages = pages.len(), output_dir = args.output; "Deck exported successfully");

    Ok(())
}

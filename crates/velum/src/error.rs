//! Error types for Velum operations.
//!
//! The main error type is [`VelumError`]. Malformed deck specifications are
//! reported through the nested [`SpecError`], which pinpoints the offending
//! slide and field; missing image resources are deliberately NOT errors and
//! are handled by the placeholder policy in the composition layer.

use std::io;

use thiserror::Error;

use velum_core::draw::TableError;

/// A contract violation in a deck specification.
///
/// These are unrecoverable by the composer: it does not guess defaults for
/// required fields or pad mismatched table rows.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("slide {slide}: missing required field `{field}`")]
    MissingField { slide: usize, field: &'static str },

    #[error("slide {slide}: {source}")]
    Table {
        slide: usize,
        #[source]
        source: TableError,
    },

    #[error("malformed deck: {0}")]
    Json(#[from] serde_json::Error),
}

/// The main error type for Velum operations.
#[derive(Debug, Error)]
pub enum VelumError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("configuration error: {0}")]
    Config(String),
}

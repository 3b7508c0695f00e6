//! Deck specifications: the declarative input contract.
//!
//! A [`Deck`] is an ordered list of [`SlideSpec`]s, one per output canvas.
//! Specifications are fully self-contained: every template derives all
//! positions deterministically from its specification and the active
//! [`Theme`](crate::theme::Theme), never from state left by a previous
//! slide.
//!
//! Decks deserialize from JSON with a `kind` tag selecting the template:
//!
//! ```json
//! {
//!   "slides": [
//!     {"kind": "title", "title": "Velum", "subtitle": "Deck composition"},
//!     {"kind": "content", "title": "Agenda", "bullets": ["Intro", "   detail", ""]}
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::error::SpecError;

/// An ordered deck of slide specifications.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Deck {
    /// Label shown on the left of every footer band.
    #[serde(default)]
    footer: Option<String>,
    slides: Vec<SlideSpec>,
}

impl Deck {
    /// Creates a deck from an ordered list of specifications.
    pub fn new(slides: Vec<SlideSpec>) -> Self {
        Self {
            footer: None,
            slides,
        }
    }

    /// Sets the footer label (builder style).
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Returns the footer label, if set.
    pub fn footer(&self) -> Option<&str> {
        self.footer.as_deref()
    }

    /// Parses a deck from JSON and validates every slide.
    pub fn from_json(source: &str) -> Result<Self, SpecError> {
        let deck: Self = serde_json::from_str(source)?;
        deck.validate()?;
        Ok(deck)
    }

    /// Returns the slides in presentation order.
    pub fn slides(&self) -> &[SlideSpec] {
        &self.slides
    }

    /// Returns the number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Returns `true` if the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Checks every slide's contract, reporting the first violation.
    ///
    /// Required string fields must be non-empty, and every table row must
    /// match its header width. Missing optional fields are fine; they are
    /// skip-conditions for the templates, not errors.
    pub fn validate(&self) -> Result<(), SpecError> {
        for (index, slide) in self.slides.iter().enumerate() {
            slide.validate(index)?;
        }
        Ok(())
    }
}

/// A single slide specification, tagged by template kind.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SlideSpec {
    /// Full-bleed title card with optional subtitle.
    Title {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
    },
    /// Header, footer, and a bulleted body panel.
    Content {
        title: String,
        #[serde(default)]
        bullets: Vec<String>,
    },
    /// Header, footer, and a uniform-grid data table.
    Table {
        title: String,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        #[serde(default)]
        footnote: Option<String>,
    },
    /// Header, footer, and an image panel, optionally full-size.
    Figure {
        title: String,
        #[serde(default)]
        image: Option<String>,
        #[serde(default)]
        captions: Vec<String>,
        #[serde(default)]
        fullsize: bool,
    },
    /// Two-column result layout: badge and image left, table right, and an
    /// observations callout along the bottom.
    Result {
        number: u32,
        title: String,
        #[serde(default)]
        image: Option<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        #[serde(default)]
        observations: Vec<String>,
    },
}

impl SlideSpec {
    /// Returns the slide's title.
    pub fn title(&self) -> &str {
        match self {
            Self::Title { title, .. }
            | Self::Content { title, .. }
            | Self::Table { title, .. }
            | Self::Figure { title, .. }
            | Self::Result { title, .. } => title,
        }
    }

    fn validate(&self, index: usize) -> Result<(), SpecError> {
        if self.title().trim().is_empty() {
            return Err(SpecError::MissingField {
                slide: index,
                field: "title",
            });
        }

        match self {
            Self::Table { headers, rows, .. } | Self::Result { headers, rows, .. } => {
                validate_grid(index, headers, rows)
            }
            _ => Ok(()),
        }
    }
}

fn validate_grid(slide: usize, headers: &[String], rows: &[Vec<String>]) -> Result<(), SpecError> {
    // A fully empty grid means no table on the slide; only a headerless
    // grid with data rows is a violation
    if headers.is_empty() && !rows.is_empty() {
        return Err(SpecError::MissingField {
            slide,
            field: "headers",
        });
    }

    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != headers.len() {
            return Err(SpecError::Table {
                slide,
                source: velum_core::draw::TableError::ColumnMismatch {
                    row,
                    expected: headers.len(),
                    found: cells.len(),
                },
            });
        }
    }

    Ok(())
}

/// How a bullet line renders in the content template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletKind {
    /// Marker-prefixed top-level bullet
    Standard,
    /// Indented sub-bullet, selected by leading whitespace
    SubItem,
    /// Vertical gap with no marker
    Spacer,
}

impl BulletKind {
    /// Classifies a bullet line: empty strings are spacers, lines with three
    /// or more leading spaces are sub-items, everything else is a standard
    /// bullet.
    pub fn classify(line: &str) -> Self {
        if line.is_empty() {
            Self::Spacer
        } else if line.starts_with("   ") {
            Self::SubItem
        } else {
            Self::Standard
        }
    }
}

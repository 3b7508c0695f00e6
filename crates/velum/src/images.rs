//! Image resource resolution.
//!
//! Templates never touch the filesystem directly; they ask an
//! [`ImageProvider`] to resolve an image reference into an [`ImageAsset`].
//! Absence is not an error: a provider returns `None` for anything it cannot
//! resolve, and the composition layer substitutes a placeholder text element
//! in that case.

use std::path::{Path, PathBuf};

use log::debug;

use velum_core::geometry::Size;

/// A resolved image: an href the rendering backend can embed, plus the
/// image's intrinsic pixel dimensions for fit computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    href: String,
    pixel_size: Size,
}

impl ImageAsset {
    /// Creates an asset from an href and intrinsic pixel dimensions.
    pub fn new(href: impl Into<String>, pixel_size: Size) -> Self {
        Self {
            href: href.into(),
            pixel_size,
        }
    }

    /// Returns the href the rendering backend embeds.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns the intrinsic pixel dimensions.
    pub fn pixel_size(&self) -> Size {
        self.pixel_size
    }
}

/// Resolves image references for picture placement.
///
/// Implementations must not fail on an unresolvable reference; they return
/// `None` and leave the fallback policy to the caller.
pub trait ImageProvider {
    /// Resolves an image reference, or `None` if it cannot be resolved.
    fn resolve(&self, reference: &str) -> Option<ImageAsset>;
}

/// Resolves references as paths relative to a base directory, probing each
/// file's pixel dimensions.
#[derive(Debug, Clone)]
pub struct FsImageProvider {
    base: PathBuf,
}

impl FsImageProvider {
    /// Creates a provider rooted at the given directory.
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }
}

impl ImageProvider for FsImageProvider {
    fn resolve(&self, reference: &str) -> Option<ImageAsset> {
        let path = self.base.join(reference);

        match image::image_dimensions(&path) {
            Ok((width, height)) => Some(ImageAsset::new(
                path.to_string_lossy(),
                Size::new(width as f32, height as f32),
            )),
            Err(err) => {
                debug!(reference = reference, err:? = err; "Image reference did not resolve");
                None
            }
        }
    }
}

/// A provider that resolves nothing. Useful for tests and for composing
/// decks whose figures are all placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageProvider for NoImages {
    fn resolve(&self, _reference: &str) -> Option<ImageAsset> {
        None
    }
}

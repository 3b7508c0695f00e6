//! Raster image placements.
//!
//! Placement is resolved before the element is built: [`fit_bounds`] maps a
//! target box, the image's intrinsic pixel size, and a [`FitMode`] to final
//! canvas bounds, and a [`PictureElement`] then just carries an `href` plus
//! those bounds. This keeps the element itself trivially renderable and the
//! fit policy a pure, testable function.

use svg::node::element as svg_element;

use crate::{
    draw::{LayeredOutput, RenderLayer},
    geometry::{Bounds, Point, Size},
};

/// Policy for resolving an image's drawn bounds from a target box and the
/// image's intrinsic pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Use the box width; derive height from the image's aspect ratio. The
    /// result may be taller or shorter than the box.
    FixedWidth,
    /// Stretch the image to the exact box, ignoring aspect ratio.
    FixedBox,
    /// Scale to the largest aspect-preserving size that fits inside the box,
    /// centered within it.
    CenteredFit,
}

/// Resolves final drawn bounds for an image.
///
/// `anchor` is the top-left corner of the target box. Images with a
/// degenerate pixel size (zero width or height) fall back to
/// [`FixedBox`](FitMode::FixedBox) placement since no aspect ratio exists.
pub fn fit_bounds(anchor: Point, box_size: Size, pixel_size: Size, mode: FitMode) -> Bounds {
    if pixel_size.width() <= 0.0 || pixel_size.height() <= 0.0 {
        return Bounds::new_from_top_left(anchor, box_size);
    }

    let aspect = pixel_size.height() / pixel_size.width();

    match mode {
        FitMode::FixedWidth => Bounds::new_from_top_left(
            anchor,
            Size::new(box_size.width(), box_size.width() * aspect),
        ),
        FitMode::FixedBox => Bounds::new_from_top_left(anchor, box_size),
        FitMode::CenteredFit => {
            let scale = (box_size.width() / pixel_size.width())
                .min(box_size.height() / pixel_size.height());
            let fitted = pixel_size.scale(scale);
            let offset = Point::new(
                anchor.x() + (box_size.width() - fitted.width()) / 2.0,
                anchor.y() + (box_size.height() - fitted.height()) / 2.0,
            );
            Bounds::new_from_top_left(offset, fitted)
        }
    }
}

/// An image placed on a canvas at fully resolved bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct PictureElement {
    href: String,
    bounds: Bounds,
}

impl PictureElement {
    /// Creates a picture referencing an external image by href.
    pub fn new(href: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            href: href.into(),
            bounds,
        }
    }

    /// Returns the image reference.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns the drawn bounds.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Renders this picture to the [`Picture`](RenderLayer::Picture) layer.
    pub fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        // Bounds already encode the fit policy, so the viewer must not
        // re-fit the raster within them.
        let image = svg_element::Image::new()
            .set("href", self.href.as_str())
            .set("x", self.bounds.min_x())
            .set("y", self.bounds.min_y())
            .set("width", self.bounds.width())
            .set("height", self.bounds.height())
            .set("preserveAspectRatio", "none");

        output.add_to_layer(RenderLayer::Picture, Box::new(image));
        output
    }
}

//! Element placement primitives shared by all templates.
//!
//! Each primitive turns a declarative placement request into fully resolved
//! elements on a canvas. Out-of-bounds placement is permitted and simply
//! clips or overflows visually; only specification contracts (table column
//! counts) are enforced.

use log::warn;

use velum_core::{
    color::Color,
    draw::{
        ArrowDefinition, ArrowElement, FitMode, PictureElement, RenderLayer, ShapeElement,
        ShapeKind, TableElement, TableError, TableStyle, TextAlign, TextDefinition, TextElement,
        fit_bounds,
    },
    geometry::{Bounds, Point, Size},
};

use crate::{canvas::Canvas, images::ImageProvider, theme::Theme};

/// Text substituted when an image reference does not resolve.
pub const PLACEHOLDER_TEXT: &str = "[INSERT FIGURE]";

/// Places a shape with text centered inside it.
///
/// The text block spans the shape's width, so long labels wrap and stay
/// centered both horizontally and vertically.
pub fn place_block(
    canvas: &mut Canvas,
    center: Point,
    size: Size,
    kind: ShapeKind,
    fill: Color,
    text: &str,
    mut text_definition: TextDefinition,
) {
    let bounds = Bounds::new_from_center(center, size);
    canvas.push(ShapeElement::new(kind, bounds, RenderLayer::Content).with_fill(fill));

    text_definition.set_align(TextAlign::Center);
    let line_height = text_definition.line_height();

    // Measure the wrapped line count before anchoring vertically
    let probe = TextElement::new(text_definition.clone(), text, Point::new(0.0, 0.0))
        .with_width(size.width());
    let text_height = probe.lines().len() as f32 * line_height;

    let origin = Point::new(bounds.min_x(), center.y() - text_height / 2.0);
    canvas.push(TextElement::new(text_definition, text, origin).with_width(size.width()));
}

/// Places a directed arrow between two points. Zero-length arrows are
/// permitted and render as a point.
pub fn place_arrow(canvas: &mut Canvas, start: Point, end: Point, definition: ArrowDefinition) {
    canvas.push(ArrowElement::new(definition, start, end));
}

/// Places a uniform-grid table with its top-left corner at `top_left`.
///
/// # Errors
///
/// Returns [`TableError::ColumnMismatch`] when any row's cell count differs
/// from the header count.
pub fn place_table(
    canvas: &mut Canvas,
    top_left: Point,
    size: Size,
    headers: &[String],
    rows: &[Vec<String>],
    style: TableStyle,
) -> Result<(), TableError> {
    let table = TableElement::new(
        headers.to_vec(),
        rows.to_vec(),
        Bounds::new_from_top_left(top_left, size),
        style,
    )?;
    canvas.push(table);
    Ok(())
}

/// Places a picture fitted into a target box, or a placeholder when the
/// reference does not resolve.
///
/// An unresolvable reference is not a failure: the canvas gets exactly one
/// centered [`PLACEHOLDER_TEXT`] element instead of a picture, and the
/// condition is logged at warning level.
pub fn place_picture(
    canvas: &mut Canvas,
    top_left: Point,
    box_size: Size,
    reference: Option<&str>,
    mode: FitMode,
    images: &dyn ImageProvider,
    theme: &Theme,
) {
    let asset = reference.and_then(|reference| images.resolve(reference));

    match asset {
        Some(asset) => {
            let bounds = fit_bounds(top_left, box_size, asset.pixel_size(), mode);
            canvas.push(PictureElement::new(asset.href(), bounds));
        }
        None => {
            if let Some(reference) = reference {
                warn!(reference = reference; "Image missing, substituting placeholder");
            }

            let mut definition = TextDefinition::new();
            definition.set_font_family(theme.font_family());
            definition.set_font_size(18);
            definition.set_italic(true);
            definition.set_color(Some(theme.text()));
            definition.set_align(TextAlign::Center);

            let origin = Point::new(
                top_left.x(),
                top_left.y() + box_size.height() / 2.0 - definition.line_height() / 2.0,
            );
            canvas.push(
                TextElement::new(definition, PLACEHOLDER_TEXT, origin)
                    .with_width(box_size.width()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use velum_core::draw::Element;

    use crate::images::{ImageAsset, NoImages};

    use super::*;

    struct OneImage;

    impl ImageProvider for OneImage {
        fn resolve(&self, reference: &str) -> Option<ImageAsset> {
            (reference == "known.png")
                .then(|| ImageAsset::new("figs/known.png", Size::new(400.0, 300.0)))
        }
    }

    fn empty_canvas() -> Canvas {
        Canvas::new(Size::new(1280.0, 720.0), 1)
    }

    #[test]
    fn test_place_block_pairs_shape_and_text() {
        let mut canvas = empty_canvas();
        place_block(
            &mut canvas,
            Point::new(640.0, 360.0),
            Size::new(200.0, 100.0),
            ShapeKind::RoundedRectangle { radius: 8.0 },
            Color::default(),
            "Label",
            TextDefinition::new(),
        );

        assert_eq!(canvas.elements().len(), 2);
        assert!(matches!(canvas.elements()[0], Element::Shape(_)));
        assert!(matches!(canvas.elements()[1], Element::Text(_)));
    }

    #[test]
    fn test_place_block_centers_text_horizontally() {
        let mut canvas = empty_canvas();
        place_block(
            &mut canvas,
            Point::new(300.0, 200.0),
            Size::new(200.0, 100.0),
            ShapeKind::Rectangle,
            Color::default(),
            "Label",
            TextDefinition::new(),
        );

        let Element::Text(text) = &canvas.elements()[1] else {
            panic!("expected a text element");
        };
        assert_eq!(text.definition().align(), TextAlign::Center);
        assert_eq!(text.width(), Some(200.0));
        assert_eq!(text.origin().x(), 200.0);
    }

    #[test]
    fn test_place_table_rejects_ragged_rows() {
        let mut canvas = empty_canvas();
        let result = place_table(
            &mut canvas,
            Point::new(0.0, 0.0),
            Size::new(100.0, 100.0),
            &["A".into(), "B".into()],
            &[vec!["only".into()]],
            TableStyle::default(),
        );

        assert!(result.is_err());
        assert!(canvas.elements().is_empty());
    }

    #[test]
    fn test_missing_image_places_single_placeholder() {
        let mut canvas = empty_canvas();
        place_picture(
            &mut canvas,
            Point::new(100.0, 100.0),
            Size::new(400.0, 300.0),
            Some("absent.png"),
            FitMode::CenteredFit,
            &NoImages,
            &Theme::default(),
        );

        assert_eq!(canvas.elements().len(), 1);
        let Element::Text(text) = &canvas.elements()[0] else {
            panic!("expected placeholder text");
        };
        assert_eq!(text.content(), PLACEHOLDER_TEXT);
    }

    #[test]
    fn test_resolved_image_places_picture() {
        let mut canvas = empty_canvas();
        place_picture(
            &mut canvas,
            Point::new(0.0, 0.0),
            Size::new(400.0, 400.0),
            Some("known.png"),
            FitMode::CenteredFit,
            &OneImage,
            &Theme::default(),
        );

        assert_eq!(canvas.elements().len(), 1);
        assert!(matches!(canvas.elements()[0], Element::Picture(_)));
    }

    #[test]
    fn test_place_arrow_accepts_degenerate_span() {
        let mut canvas = empty_canvas();
        place_arrow(
            &mut canvas,
            Point::new(10.0, 10.0),
            Point::new(10.0, 10.0),
            ArrowDefinition::new(),
        );
        assert_eq!(canvas.elements().len(), 1);
    }
}

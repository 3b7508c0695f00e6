//! Figure template.
//!
//! Header and footer chrome plus a white image panel. In fullsize mode the
//! panel spans the body and the image is scaled to the panel's inner width,
//! centered horizontally; otherwise the panel occupies the upper body with
//! the image box-fitted inside it, and a light caption strip of classified
//! bullet lines sits below. A missing image becomes a placeholder per the
//! placement primitives.

use velum_core::{
    color::Color,
    draw::{
        FitMode, RenderLayer, ShapeElement, ShapeKind, StrokeDefinition, TextDefinition,
        TextElement,
    },
    geometry::{Bounds, Point, Size},
};

use crate::{
    canvas::Canvas,
    compose::{chrome, chrome::Pagination, primitives},
    images::ImageProvider,
    spec::BulletKind,
    theme::{Theme, inches},
};

const CAPTION_FONT_SIZE: u16 = 14;
const PANEL_INSET: f32 = 16.0;
const PANEL_GAP: f32 = 12.0;

/// Height of the image panel when a caption strip follows.
fn standard_panel_height() -> f32 {
    inches(4.5)
}

fn panel_border(theme: &Theme) -> StrokeDefinition {
    StrokeDefinition::solid(theme.primary().with_alpha(0.35), 1.0)
}

/// Composes a figure slide.
pub fn compose_figure_slide(
    title: &str,
    image: Option<&str>,
    captions: &[String],
    fullsize: bool,
    theme: &Theme,
    images: &dyn ImageProvider,
    pagination: Pagination<'_>,
) -> Canvas {
    let mut canvas = Canvas::new(theme.canvas_size(), pagination.page);
    chrome::add_header(&mut canvas, title, theme);
    chrome::add_footer(&mut canvas, pagination, theme);

    let body = theme.body_bounds();
    let white = Color::new("white").unwrap_or_default();

    let panel = if fullsize {
        body
    } else {
        Bounds::new_from_top_left(
            Point::new(body.min_x(), body.min_y() + PANEL_GAP),
            Size::new(body.width(), standard_panel_height()),
        )
    };
    canvas.push(
        ShapeElement::new(
            ShapeKind::RoundedRectangle { radius: 8.0 },
            panel,
            RenderLayer::Panel,
        )
        .with_fill(white)
        .with_stroke(panel_border(theme)),
    );

    let picture_top_left = Point::new(panel.min_x() + PANEL_INSET, panel.min_y() + PANEL_INSET);
    let picture_box = Size::new(
        panel.width() - PANEL_INSET * 2.0,
        panel.height() - PANEL_INSET * 2.0,
    );
    let mode = if fullsize {
        // Width-driven scaling; a tall image may overflow the panel bottom
        FitMode::FixedWidth
    } else {
        FitMode::FixedBox
    };
    primitives::place_picture(
        &mut canvas,
        picture_top_left,
        picture_box,
        image,
        mode,
        images,
        theme,
    );

    if fullsize {
        return canvas;
    }

    let strip = Bounds::new_from_top_left(
        Point::new(body.min_x(), panel.max_y() + PANEL_GAP),
        Size::new(body.width(), body.max_y() - panel.max_y() - PANEL_GAP),
    );
    canvas.push(
        ShapeElement::new(
            ShapeKind::RoundedRectangle { radius: 8.0 },
            strip,
            RenderLayer::Panel,
        )
        .with_fill(theme.light_background()),
    );

    let mut cursor = strip.min_y() + PANEL_INSET;
    for line in captions {
        let (content, indent) = match BulletKind::classify(line) {
            BulletKind::Standard => (format!("\u{2022} {line}"), 0.0),
            BulletKind::SubItem => (format!("\u{2013} {}", line.trim_start()), 28.0),
            BulletKind::Spacer => (String::new(), 0.0),
        };

        let mut definition = TextDefinition::new();
        definition.set_font_family(theme.font_family());
        definition.set_font_size(CAPTION_FONT_SIZE);
        definition.set_color(Some(theme.text()));
        let advance = if content.is_empty() {
            definition.line_height() / 2.0
        } else {
            definition.line_height() + 4.0
        };

        canvas.push(
            TextElement::new(
                definition,
                content,
                Point::new(strip.min_x() + PANEL_INSET + indent, cursor),
            )
            .with_width(strip.width() - PANEL_INSET * 2.0 - indent),
        );
        cursor += advance;
    }

    canvas
}

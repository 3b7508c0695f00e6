//! Header and footer chrome shared by the body templates.
//!
//! Every non-title slide carries the same frame: a primary-colored header
//! band holding the slide title, an accent rule separating it from the body,
//! and a primary footer band with an optional label on the left and the
//! `page / total` counter on the right.

use velum_core::{
    color::Color,
    draw::{
        FontWeight, RenderLayer, ShapeElement, ShapeKind, TextAlign, TextDefinition, TextElement,
    },
    geometry::{Bounds, Point, Size},
};

use crate::{canvas::Canvas, theme::Theme};

const TITLE_FONT_SIZE: u16 = 32;
const FOOTER_FONT_SIZE: u16 = 10;

/// Footer context threaded through the body templates: the slide's 1-based
/// page index, the deck's slide count, and the deck-wide footer label.
#[derive(Debug, Clone, Copy)]
pub struct Pagination<'a> {
    pub page: usize,
    pub total: usize,
    pub label: Option<&'a str>,
}

/// Adds the header band, slide title, and accent rule.
pub fn add_header(canvas: &mut Canvas, title: &str, theme: &Theme) {
    let header = theme.header_bounds();

    canvas.push(
        ShapeElement::new(ShapeKind::Rectangle, header, RenderLayer::Band)
            .with_fill(theme.primary()),
    );

    canvas.push(
        ShapeElement::new(
            ShapeKind::Rectangle,
            Bounds::new_from_top_left(
                Point::new(0.0, header.max_y()),
                Size::new(canvas.size().width(), theme.rule_height()),
            ),
            RenderLayer::Band,
        )
        .with_fill(theme.accent()),
    );

    let mut definition = title_definition(theme);
    let origin = Point::new(
        theme.margin(),
        header.center().y() - definition.line_height() / 2.0,
    );
    definition.set_align(TextAlign::Left);
    canvas.push(
        TextElement::new(definition, title, origin)
            .with_width(canvas.size().width() - theme.margin() * 2.0),
    );
}

/// Adds the footer band with the optional label on the left and the
/// `page / total` counter on the right.
pub fn add_footer(canvas: &mut Canvas, pagination: Pagination<'_>, theme: &Theme) {
    let footer = theme.footer_bounds();

    canvas.push(
        ShapeElement::new(ShapeKind::Rectangle, footer, RenderLayer::Band)
            .with_fill(theme.primary()),
    );

    let width = canvas.size().width() - theme.margin() * 2.0;
    let top = footer.center().y() - footer_definition(theme, TextAlign::Left).line_height() / 2.0;
    let origin = Point::new(theme.margin(), top);

    if let Some(label) = pagination.label {
        canvas.push(
            TextElement::new(footer_definition(theme, TextAlign::Left), label, origin)
                .with_width(width),
        );
    }

    let counter = format!("{} / {}", pagination.page, pagination.total);
    canvas.push(
        TextElement::new(footer_definition(theme, TextAlign::Right), counter, origin)
            .with_width(width),
    );
}

fn footer_definition(theme: &Theme, align: TextAlign) -> TextDefinition {
    let mut definition = TextDefinition::new();
    definition.set_font_family(theme.font_family());
    definition.set_font_size(FOOTER_FONT_SIZE);
    definition.set_color(Some(Color::new("white").unwrap_or_default()));
    definition.set_align(align);
    definition
}

fn title_definition(theme: &Theme) -> TextDefinition {
    let mut definition = TextDefinition::new();
    definition.set_font_family(theme.font_family());
    definition.set_font_size(TITLE_FONT_SIZE);
    definition.set_weight(FontWeight::Bold);
    definition.set_color(Some(Color::new("white").unwrap_or_default()));
    definition
}

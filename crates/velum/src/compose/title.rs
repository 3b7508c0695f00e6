//! Title card template.
//!
//! A full-bleed primary background with two translucent decorative ovals
//! overlapping the corners, the centered title and subtitle, and an accent
//! divider rule between them. Geometry is fixed; only word-wrap reacts to
//! the text length.

use velum_core::{
    color::Color,
    draw::{
        FontWeight, RenderLayer, ShapeElement, ShapeKind, TextAlign, TextDefinition, TextElement,
    },
    geometry::{Bounds, Point, Size},
};

use crate::{canvas::Canvas, theme::Theme};

const TITLE_FONT_SIZE: u16 = 48;
const SUBTITLE_FONT_SIZE: u16 = 22;
const OVAL_ALPHA: f32 = 0.18;

/// Composes a title card. Title cards carry a page index like every other
/// canvas but render no pagination footer.
pub fn compose_title_slide(
    title: &str,
    subtitle: Option<&str>,
    theme: &Theme,
    page: usize,
) -> Canvas {
    let mut canvas = Canvas::new(theme.canvas_size(), page);
    let size = canvas.size();

    canvas.push(
        ShapeElement::new(
            ShapeKind::Rectangle,
            theme.canvas_bounds(),
            RenderLayer::Background,
        )
        .with_fill(theme.primary()),
    );

    // Decorative backdrop: one oval spilling off each of two opposite corners
    canvas.push(decorative_oval(
        Point::new(size.width() * 0.85, size.height() * 0.1),
        Size::new(size.width() * 0.45, size.height() * 0.55),
        theme.secondary(),
    ));
    canvas.push(decorative_oval(
        Point::new(size.width() * 0.12, size.height() * 0.92),
        Size::new(size.width() * 0.4, size.height() * 0.45),
        theme.accent(),
    ));

    let white = Color::new("white").unwrap_or_default();

    let mut title_definition = TextDefinition::new();
    title_definition.set_font_family(theme.font_family());
    title_definition.set_font_size(TITLE_FONT_SIZE);
    title_definition.set_weight(FontWeight::Bold);
    title_definition.set_color(Some(white));
    title_definition.set_align(TextAlign::Center);

    let text_width = size.width() - theme.margin() * 4.0;
    let title_element = TextElement::new(
        title_definition.clone(),
        title,
        Point::new(theme.margin() * 2.0, 0.0),
    )
    .with_width(text_width);

    let title_height = title_element.lines().len() as f32 * title_definition.line_height();
    let title_top = size.height() * 0.38 - title_height / 2.0;
    canvas.push(
        TextElement::new(
            title_definition,
            title,
            Point::new(theme.margin() * 2.0, title_top),
        )
        .with_width(text_width),
    );

    // Accent divider between title and subtitle
    let rule_y = title_top + title_height + 20.0;
    let rule_width = size.width() * 0.25;
    canvas.push(
        ShapeElement::new(
            ShapeKind::Rectangle,
            Bounds::new_from_top_left(
                Point::new((size.width() - rule_width) / 2.0, rule_y),
                Size::new(rule_width, theme.rule_height()),
            ),
            RenderLayer::Content,
        )
        .with_fill(theme.accent()),
    );

    if let Some(subtitle) = subtitle {
        let mut subtitle_definition = TextDefinition::new();
        subtitle_definition.set_font_family(theme.font_family());
        subtitle_definition.set_font_size(SUBTITLE_FONT_SIZE);
        subtitle_definition.set_color(Some(white.with_alpha(0.85)));
        subtitle_definition.set_align(TextAlign::Center);

        canvas.push(
            TextElement::new(
                subtitle_definition,
                subtitle,
                Point::new(theme.margin() * 2.0, rule_y + 24.0),
            )
            .with_width(text_width),
        );
    }

    canvas
}

fn decorative_oval(center: Point, size: Size, color: Color) -> ShapeElement {
    ShapeElement::new(
        ShapeKind::Oval,
        Bounds::new_from_center(center, size),
        RenderLayer::Background,
    )
    .with_fill(color.with_alpha(OVAL_ALPHA))
}

#[cfg(test)]
mod tests {
    use velum_core::draw::Element;

    use super::*;

    #[test]
    fn test_title_slide_with_subtitle() {
        let canvas = compose_title_slide("Velum", Some("Deck composition"), &Theme::default(), 1);

        let shapes = canvas
            .elements()
            .iter()
            .filter(|element| matches!(element, Element::Shape(_)))
            .count();
        let texts = canvas
            .elements()
            .iter()
            .filter(|element| matches!(element, Element::Text(_)))
            .count();

        // Background, two ovals, divider rule
        assert_eq!(shapes, 4);
        assert_eq!(texts, 2);
    }

    #[test]
    fn test_subtitle_is_optional() {
        let canvas = compose_title_slide("Velum", None, &Theme::default(), 1);
        let texts = canvas
            .elements()
            .iter()
            .filter(|element| matches!(element, Element::Text(_)))
            .count();
        assert_eq!(texts, 1);
    }

    #[test]
    fn test_title_slide_keeps_page_index() {
        let canvas = compose_title_slide("Velum", None, &Theme::default(), 5);
        assert_eq!(canvas.page(), 5);
    }
}

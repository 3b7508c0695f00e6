//! Bulleted content template.
//!
//! Header and footer chrome, a light body panel, and the bullet lines laid
//! out top to bottom. Each line is classified by
//! [`BulletKind::classify`](crate::spec::BulletKind) into a standard bullet,
//! an indented sub-bullet, or a blank spacer.

use velum_core::{
    draw::{RenderLayer, ShapeElement, ShapeKind, TextDefinition, TextElement},
    geometry::{Bounds, Point, Size},
};

use crate::{
    canvas::Canvas,
    compose::chrome::{self, Pagination},
    spec::BulletKind,
    theme::Theme,
};

const BULLET_FONT_SIZE: u16 = 22;
const SUB_BULLET_FONT_SIZE: u16 = 20;
const BULLET_MARKER: &str = "\u{2022} ";
const SUB_BULLET_MARKER: &str = "\u{2013} ";
const PANEL_PADDING: f32 = 24.0;
const SUB_BULLET_INDENT: f32 = 36.0;
const LINE_GAP: f32 = 8.0;

/// Composes a content slide from its title and bullet lines.
pub fn compose_content_slide(
    title: &str,
    bullets: &[String],
    theme: &Theme,
    pagination: Pagination<'_>,
) -> Canvas {
    let mut canvas = Canvas::new(theme.canvas_size(), pagination.page);
    chrome::add_header(&mut canvas, title, theme);
    chrome::add_footer(&mut canvas, pagination, theme);

    let body = theme.body_bounds();
    let panel = Bounds::new_from_top_left(
        Point::new(body.min_x(), body.min_y() + PANEL_PADDING / 2.0),
        Size::new(body.width(), body.height() - PANEL_PADDING),
    );
    canvas.push(
        ShapeElement::new(
            ShapeKind::RoundedRectangle { radius: 8.0 },
            panel,
            RenderLayer::Panel,
        )
        .with_fill(theme.light_background()),
    );

    let text_width = panel.width() - PANEL_PADDING * 2.0 - SUB_BULLET_INDENT;
    let mut cursor = panel.min_y() + PANEL_PADDING;

    for line in bullets {
        let (element, advance) = render_bullet(line, panel, text_width, cursor, theme);
        canvas.push(element);
        cursor += advance;
    }

    canvas
}

fn render_bullet(
    line: &str,
    panel: Bounds,
    text_width: f32,
    cursor: f32,
    theme: &Theme,
) -> (TextElement, f32) {
    match BulletKind::classify(line) {
        BulletKind::Standard => {
            let definition = bullet_definition(theme, BULLET_FONT_SIZE);
            let content = format!("{BULLET_MARKER}{line}");
            let element = TextElement::new(
                definition.clone(),
                content,
                Point::new(panel.min_x() + PANEL_PADDING, cursor),
            )
            .with_width(text_width);
            let advance = element.lines().len() as f32 * definition.line_height() + LINE_GAP;
            (element, advance)
        }
        BulletKind::SubItem => {
            let definition = bullet_definition(theme, SUB_BULLET_FONT_SIZE);
            let content = format!("{SUB_BULLET_MARKER}{}", line.trim_start());
            let element = TextElement::new(
                definition.clone(),
                content,
                Point::new(panel.min_x() + PANEL_PADDING + SUB_BULLET_INDENT, cursor),
            )
            .with_width(text_width - SUB_BULLET_INDENT);
            let advance = element.lines().len() as f32 * definition.line_height() + LINE_GAP;
            (element, advance)
        }
        BulletKind::Spacer => {
            // An empty element keeps the 1:1 mapping from input lines
            let definition = bullet_definition(theme, BULLET_FONT_SIZE);
            let advance = definition.line_height() / 2.0;
            let element = TextElement::new(
                definition,
                "",
                Point::new(panel.min_x() + PANEL_PADDING, cursor),
            );
            (element, advance)
        }
    }
}

fn bullet_definition(theme: &Theme, font_size: u16) -> TextDefinition {
    let mut definition = TextDefinition::new();
    definition.set_font_family(theme.font_family());
    definition.set_font_size(font_size);
    definition.set_color(Some(theme.text()));
    definition
}

#[cfg(test)]
mod tests {
    use velum_core::draw::Element;

    use super::*;

    fn pagination(page: usize) -> Pagination<'static> {
        Pagination {
            page,
            total: 9,
            label: None,
        }
    }

    fn bullet_texts(canvas: &Canvas) -> Vec<&TextElement> {
        // Skip chrome: header title and footer page counter
        canvas
            .elements()
            .iter()
            .filter_map(|element| match element {
                Element::Text(text) => Some(text),
                _ => None,
            })
            .skip(2)
            .collect()
    }

    #[test]
    fn test_each_input_line_yields_one_element() {
        let bullets: Vec<String> = ["Title:", "   sub item", "", "Next point"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let canvas = compose_content_slide("Agenda", &bullets, &Theme::default(), pagination(2));

        let texts = bullet_texts(&canvas);
        assert_eq!(texts.len(), 4);
        assert_eq!(texts[0].content(), "\u{2022} Title:");
        assert_eq!(texts[1].content(), "\u{2013} sub item");
        assert_eq!(texts[2].content(), "");
        assert_eq!(texts[3].content(), "\u{2022} Next point");
    }

    #[test]
    fn test_sub_bullets_indent_deeper() {
        let bullets: Vec<String> = ["top", "   nested"].iter().map(|s| s.to_string()).collect();
        let canvas = compose_content_slide("Agenda", &bullets, &Theme::default(), pagination(1));

        let texts = bullet_texts(&canvas);
        assert!(texts[1].origin().x() > texts[0].origin().x());
    }

    #[test]
    fn test_bullets_flow_downward() {
        let bullets: Vec<String> = ["one", "two", "three"].iter().map(|s| s.to_string()).collect();
        let canvas = compose_content_slide("Agenda", &bullets, &Theme::default(), pagination(1));

        let texts = bullet_texts(&canvas);
        assert!(texts[0].origin().y() < texts[1].origin().y());
        assert!(texts[1].origin().y() < texts[2].origin().y());
    }

    #[test]
    fn test_no_bullets_is_just_chrome_and_panel() {
        let canvas = compose_content_slide("Agenda", &[], &Theme::default(), pagination(1));
        assert!(bullet_texts(&canvas).is_empty());
    }
}

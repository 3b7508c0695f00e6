//! Composite result template.
//!
//! The most structurally involved layout: a numbered accent badge and
//! heading at the top, a white bordered image panel in the left column, a
//! capped-height data table in the right column, and a full-width
//! observations callout along the bottom. The sub-layouts share fixed
//! column geometry so they never overlap.

use velum_core::{
    color::Color,
    draw::{
        FitMode, FontWeight, RenderLayer, ShapeElement, ShapeKind, StrokeDefinition,
        TextDefinition, TextElement,
    },
    geometry::{Bounds, Point, Size},
};

use crate::{
    canvas::Canvas,
    compose::{chrome, chrome::Pagination, primitives, table},
    error::SpecError,
    images::ImageProvider,
    theme::{Theme, inches},
};

const BADGE_FONT_SIZE: u16 = 14;
const HEADING_FONT_SIZE: u16 = 26;
const CALLOUT_HEADING_FONT_SIZE: u16 = 14;
const OBSERVATION_FONT_SIZE: u16 = 12;
const COLUMN_GAP: f32 = 24.0;
/// Pale green fill behind the observations callout.
const CALLOUT_FILL: &str = "#E8F5E9";

fn badge_diameter() -> f32 {
    inches(0.7)
}

/// Maximum height of the result table, regardless of row count.
fn table_height_cap() -> f32 {
    inches(3.5)
}

/// Height of one result-table row; denser than the full-width table slide.
fn row_unit() -> f32 {
    inches(0.45)
}

/// Composes a composite result slide.
///
/// # Errors
///
/// Returns a [`SpecError::Table`] contract violation when any row's cell
/// count differs from the header count.
#[allow(clippy::too_many_arguments)]
pub fn compose_result_slide(
    number: u32,
    title: &str,
    image: Option<&str>,
    headers: &[String],
    rows: &[Vec<String>],
    observations: &[String],
    theme: &Theme,
    images: &dyn ImageProvider,
    pagination: Pagination<'_>,
) -> Result<Canvas, SpecError> {
    let mut canvas = Canvas::new(theme.canvas_size(), pagination.page);
    chrome::add_header(&mut canvas, title, theme);
    chrome::add_footer(&mut canvas, pagination, theme);

    let body = theme.body_bounds();
    let badge = badge_diameter();

    // Badge and heading row
    let badge_center = Point::new(
        body.min_x() + badge / 2.0,
        body.min_y() + badge / 2.0 + 8.0,
    );

    let mut badge_text = TextDefinition::new();
    badge_text.set_font_family(theme.font_family());
    badge_text.set_font_size(BADGE_FONT_SIZE);
    badge_text.set_weight(FontWeight::Bold);
    badge_text.set_color(Some(Color::new("white").unwrap_or_default()));

    primitives::place_block(
        &mut canvas,
        badge_center,
        Size::new(badge, badge),
        ShapeKind::Oval,
        theme.accent(),
        &format!("RQ{number}"),
        badge_text,
    );

    let mut heading = TextDefinition::new();
    heading.set_font_family(theme.font_family());
    heading.set_font_size(HEADING_FONT_SIZE);
    heading.set_weight(FontWeight::Bold);
    heading.set_color(Some(theme.text()));

    canvas.push(
        TextElement::new(
            heading.clone(),
            title,
            Point::new(
                body.min_x() + badge + COLUMN_GAP,
                badge_center.y() - heading.line_height() / 2.0,
            ),
        )
        .with_width(body.width() - badge - COLUMN_GAP),
    );

    // Left column: white bordered panel around a box-fitted image
    let columns_top = body.min_y() + badge + 16.0;
    let panel = Bounds::new_from_top_left(
        Point::new(body.min_x(), columns_top),
        Size::new(inches(6.2), inches(3.7)),
    );
    canvas.push(
        ShapeElement::new(
            ShapeKind::RoundedRectangle { radius: 8.0 },
            panel,
            RenderLayer::Panel,
        )
        .with_fill(Color::new("white").unwrap_or_default())
        .with_stroke(StrokeDefinition::solid(
            theme.primary().with_alpha(0.35),
            1.0,
        )),
    );
    primitives::place_picture(
        &mut canvas,
        Point::new(panel.min_x() + inches(0.1), panel.min_y() + inches(0.1)),
        Size::new(inches(6.0), inches(3.5)),
        image,
        FitMode::FixedBox,
        images,
        theme,
    );

    // Right column: capped-height table, skipped when the grid is empty
    if !headers.is_empty() {
        let table_x = panel.max_x() + COLUMN_GAP;
        let table_width = body.max_x() - table_x;
        let natural_height = row_unit() * (rows.len() + 1) as f32;
        let table_height = natural_height.min(table_height_cap());

        primitives::place_table(
            &mut canvas,
            Point::new(table_x, columns_top),
            Size::new(table_width, table_height),
            headers,
            rows,
            table::table_style(theme),
        )
        .map_err(|source| SpecError::Table {
            slide: pagination.page - 1,
            source,
        })?;
    }

    let callout_top = panel.max_y() + 12.0;
    add_observations(&mut canvas, observations, body, callout_top, theme);

    Ok(canvas)
}

fn add_observations(
    canvas: &mut Canvas,
    observations: &[String],
    body: Bounds,
    callout_top: f32,
    theme: &Theme,
) {
    canvas.push(
        ShapeElement::new(
            ShapeKind::RoundedRectangle { radius: 8.0 },
            Bounds::new_from_top_left(
                Point::new(body.min_x(), callout_top),
                Size::new(body.width(), body.max_y() - callout_top),
            ),
            RenderLayer::Panel,
        )
        .with_fill(Color::new(CALLOUT_FILL).unwrap_or_default())
        .with_stroke(StrokeDefinition::solid(theme.accent(), 1.0)),
    );

    let mut heading = TextDefinition::new();
    heading.set_font_family(theme.font_family());
    heading.set_font_size(CALLOUT_HEADING_FONT_SIZE);
    heading.set_weight(FontWeight::Bold);
    heading.set_color(Some(theme.primary()));

    let mut cursor = callout_top + 10.0;
    canvas.push(
        TextElement::new(
            heading.clone(),
            "Key Observations",
            Point::new(body.min_x() + 18.0, cursor),
        )
        .with_width(body.width() - 36.0),
    );
    cursor += heading.line_height() + 4.0;

    let mut definition = TextDefinition::new();
    definition.set_font_family(theme.font_family());
    definition.set_font_size(OBSERVATION_FONT_SIZE);
    definition.set_color(Some(theme.text()));

    for observation in observations {
        canvas.push(
            TextElement::new(
                definition.clone(),
                format!("\u{2713} {observation}"),
                Point::new(body.min_x() + 18.0, cursor),
            )
            .with_width(body.width() - 36.0),
        );
        cursor += definition.line_height() + 4.0;
    }
}

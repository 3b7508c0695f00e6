//! Data table template.
//!
//! Header and footer chrome, then a table sized by row count: the grid
//! height is `row unit * (data rows + 1)`, counting the header row. A deck
//! with many rows overflows the body rather than compressing the grid. An
//! optional footnote anchors below the table's computed bottom edge.

use velum_core::{
    color::Color,
    draw::{StrokeDefinition, TableStyle, TextDefinition, TextElement},
    geometry::{Point, Size},
};

use crate::{
    canvas::Canvas,
    compose::{chrome, chrome::Pagination, primitives},
    error::SpecError,
    theme::{Theme, inches},
};

const FOOTNOTE_FONT_SIZE: u16 = 16;

/// Height of one table row in canvas units.
fn row_unit() -> f32 {
    inches(0.5)
}

fn footnote_gap() -> f32 {
    inches(0.3)
}

/// Builds the shared table styling from a theme.
pub(crate) fn table_style(theme: &Theme) -> TableStyle {
    TableStyle {
        header_fill: theme.primary(),
        header_text: Color::new("white").unwrap_or_default(),
        stripe_fill: theme.light_background(),
        body_text: theme.text(),
        border: StrokeDefinition::solid(theme.primary().with_alpha(0.35), 1.0),
        font_family: theme.font_family().to_string(),
        header_font_size: 14,
        body_font_size: 12,
    }
}

/// Composes a table slide.
///
/// # Errors
///
/// Returns a [`SpecError::Table`] contract violation when any row's cell
/// count differs from the header count.
pub fn compose_table_slide(
    title: &str,
    headers: &[String],
    rows: &[Vec<String>],
    footnote: Option<&str>,
    theme: &Theme,
    pagination: Pagination<'_>,
) -> Result<Canvas, SpecError> {
    let mut canvas = Canvas::new(theme.canvas_size(), pagination.page);
    chrome::add_header(&mut canvas, title, theme);
    chrome::add_footer(&mut canvas, pagination, theme);

    let body = theme.body_bounds();
    let table_top = Point::new(body.min_x(), body.min_y() + 24.0);
    // Fixed grid: height tracks the row count and may overflow the body
    let table_size = Size::new(body.width(), row_unit() * (rows.len() + 1) as f32);

    // An empty grid is an optional component, not a violation
    if !headers.is_empty() {
        primitives::place_table(
            &mut canvas,
            table_top,
            table_size,
            headers,
            rows,
            table_style(theme),
        )
        .map_err(|source| SpecError::Table {
            slide: pagination.page - 1,
            source,
        })?;
    }

    if let Some(footnote) = footnote {
        let mut definition = TextDefinition::new();
        definition.set_font_family(theme.font_family());
        definition.set_font_size(FOOTNOTE_FONT_SIZE);
        definition.set_italic(true);
        definition.set_color(Some(theme.text().with_alpha(0.75)));

        canvas.push(
            TextElement::new(
                definition,
                footnote,
                Point::new(
                    table_top.x(),
                    table_top.y() + table_size.height() + footnote_gap(),
                ),
            )
            .with_width(body.width()),
        );
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use velum_core::draw::Element;

    use super::*;

    fn pagination() -> Pagination<'static> {
        Pagination {
            page: 1,
            total: 4,
            label: None,
        }
    }

    fn grid() -> (Vec<String>, Vec<Vec<String>>) {
        (
            vec!["Metric".into(), "Value".into()],
            vec![
                vec!["Accuracy".into(), "0.92".into()],
                vec!["Recall".into(), "0.88".into()],
            ],
        )
    }

    #[test]
    fn test_table_height_tracks_row_count() {
        let (headers, rows) = grid();
        let canvas =
            compose_table_slide("Metrics", &headers, &rows, None, &Theme::default(), pagination()).unwrap();

        let table = canvas
            .elements()
            .iter()
            .find_map(|element| match element {
                Element::Table(table) => Some(table),
                _ => None,
            })
            .expect("table present");

        assert_approx_eq!(f32, table.bounds().height(), row_unit() * 3.0);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_tall_table_keeps_fixed_row_height() {
        let headers = vec!["A".into()];
        let rows: Vec<Vec<String>> = (0..40).map(|i| vec![format!("row {i}")]).collect();
        let theme = Theme::default();
        let canvas = compose_table_slide("Tall", &headers, &rows, None, &theme, pagination()).unwrap();

        let table = canvas
            .elements()
            .iter()
            .find_map(|element| match element {
                Element::Table(table) => Some(table),
                _ => None,
            })
            .expect("table present");

        // 40 data rows plus the header row, past the body bottom
        assert_approx_eq!(f32, table.bounds().height(), row_unit() * 41.0);
        assert!(table.bounds().max_y() > theme.body_bounds().max_y());
    }

    #[test]
    fn test_footnote_sits_below_table() {
        let (headers, rows) = grid();
        let canvas = compose_table_slide(
            "Metrics",
            &headers,
            &rows,
            Some("n = 120"),
            &Theme::default(),
            pagination(),
        )
        .unwrap();

        let footnote = canvas
            .elements()
            .iter()
            .filter_map(|element| match element {
                Element::Text(text) => Some(text),
                _ => None,
            })
            .find(|text| text.content() == "n = 120")
            .expect("footnote present");

        let table = canvas
            .elements()
            .iter()
            .find_map(|element| match element {
                Element::Table(table) => Some(table),
                _ => None,
            })
            .expect("table present");

        assert!(footnote.origin().y() > table.bounds().max_y());
    }

    #[test]
    fn test_empty_grid_composes_without_table() {
        let canvas =
            compose_table_slide("Metrics", &[], &[], Some("tbd"), &Theme::default(), pagination())
                .unwrap();

        let tables = canvas
            .elements()
            .iter()
            .filter(|element| matches!(element, Element::Table(_)))
            .count();
        assert_eq!(tables, 0);
    }

    #[test]
    fn test_column_mismatch_is_contract_violation() {
        let headers = vec!["A".into(), "B".into()];
        let rows = vec![vec!["lonely".into()]];
        let result = compose_table_slide("Bad", &headers, &rows, None, &Theme::default(), pagination());
        assert!(matches!(result, Err(SpecError::Table { .. })));
    }
}

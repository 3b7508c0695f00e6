//! Uniform-grid data tables.
//!
//! A table divides its bounds into a uniform grid: one header row plus one
//! row per body row, all of equal height, with equal-width columns. The
//! header row gets its own fill and text style; body rows alternate between
//! a plain and a striped fill.
//!
//! Construction is fallible: every body row must have exactly as many cells
//! as there are headers.

use svg::node::element as svg_element;
use thiserror::Error;

use crate::{
    apply_stroke,
    color::Color,
    draw::{
        LayeredOutput, RenderLayer, StrokeDefinition, TextAlign, TextDefinition, TextElement,
        text::FontWeight,
    },
    geometry::{Bounds, Point, Size},
};

/// Horizontal inset for left-aligned body cell text.
const CELL_TEXT_INSET: f32 = 8.0;

/// Errors from table construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("table row {row} has {found} cells, expected {expected}")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("table must have at least one column")]
    NoColumns,
}

/// Visual style for a table: fills, text colors, borders, and font sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct TableStyle {
    pub header_fill: Color,
    pub header_text: Color,
    pub stripe_fill: Color,
    pub body_text: Color,
    pub border: StrokeDefinition,
    pub font_family: String,
    pub header_font_size: u16,
    pub body_font_size: u16,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header_fill: Color::default(),
            header_text: Color::new("white").unwrap_or_default(),
            stripe_fill: Color::new("white").unwrap_or_default(),
            body_text: Color::default(),
            border: StrokeDefinition::default(),
            font_family: "Arial".to_string(),
            header_font_size: 14,
            body_font_size: 12,
        }
    }
}

/// A data table placed on a canvas.
///
/// # Examples
///
/// ```
/// # use velum_core::draw::{TableElement, TableStyle};
/// # use velum_core::geometry::{Bounds, Point, Size};
/// let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(600.0, 200.0));
/// let table = TableElement::new(
///     vec!["Metric".into(), "Value".into()],
///     vec![vec!["Accuracy".into(), "0.92".into()]],
///     bounds,
///     TableStyle::default(),
/// )
/// .unwrap();
/// assert_eq!(table.column_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableElement {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    bounds: Bounds,
    style: TableStyle,
}

impl TableElement {
    /// Creates a table, validating that every row matches the header width.
    pub fn new(
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        bounds: Bounds,
        style: TableStyle,
    ) -> Result<Self, TableError> {
        if headers.is_empty() {
            return Err(TableError::NoColumns);
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                return Err(TableError::ColumnMismatch {
                    row: index,
                    expected: headers.len(),
                    found: row.len(),
                });
            }
        }

        Ok(Self {
            headers,
            rows,
            bounds,
            style,
        })
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Returns the number of body rows, excluding the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the bounds of the table.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Returns the uniform row height. The header counts as one row.
    pub fn row_height(&self) -> f32 {
        self.bounds.height() / (self.rows.len() + 1) as f32
    }

    /// Returns the uniform column width.
    pub fn column_width(&self) -> f32 {
        self.bounds.width() / self.headers.len() as f32
    }

    /// Renders the grid to the [`Content`](RenderLayer::Content) layer and
    /// cell text to the [`Text`](RenderLayer::Text) layer.
    pub fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        for (column, header) in self.headers.iter().enumerate() {
            self.render_cell(
                &mut output,
                column,
                0,
                header,
                Some(&self.style.header_fill),
                self.header_text_definition(),
            );
        }

        for (row, cells) in self.rows.iter().enumerate() {
            // The first body row carries the stripe fill
            let fill = (row % 2 == 0).then_some(&self.style.stripe_fill);
            for (column, cell) in cells.iter().enumerate() {
                self.render_cell(&mut output, column, row + 1, cell, fill, self.body_text_definition());
            }
        }

        output
    }

    fn render_cell(
        &self,
        output: &mut LayeredOutput,
        column: usize,
        grid_row: usize,
        content: &str,
        fill: Option<&Color>,
        text_definition: TextDefinition,
    ) {
        let cell = self.cell_bounds(column, grid_row);

        let mut rect = svg_element::Rectangle::new()
            .set("x", cell.min_x())
            .set("y", cell.min_y())
            .set("width", cell.width())
            .set("height", cell.height());

        rect = match fill {
            Some(fill) => rect.set("fill", fill).set("fill-opacity", fill.alpha()),
            None => rect.set("fill", "none"),
        };
        rect = apply_stroke!(rect, self.style.border);

        output.add_to_layer(RenderLayer::Content, Box::new(rect));

        if content.is_empty() {
            return;
        }

        // Vertically center the single line of cell text
        let line_height = text_definition.line_height();
        let origin = Point::new(
            match text_definition.align() {
                TextAlign::Center => cell.min_x(),
                _ => cell.min_x() + CELL_TEXT_INSET,
            },
            cell.center().y() - line_height / 2.0,
        );

        let text = TextElement::new(text_definition, content, origin).with_width(cell.width());
        output.merge(text.render_to_layers());
    }

    fn cell_bounds(&self, column: usize, grid_row: usize) -> Bounds {
        Bounds::new_from_top_left(
            Point::new(
                self.bounds.min_x() + self.column_width() * column as f32,
                self.bounds.min_y() + self.row_height() * grid_row as f32,
            ),
            Size::new(self.column_width(), self.row_height()),
        )
    }

    fn header_text_definition(&self) -> TextDefinition {
        let mut definition = TextDefinition::new();
        definition.set_font_family(&self.style.font_family);
        definition.set_font_size(self.style.header_font_size);
        definition.set_weight(FontWeight::Bold);
        definition.set_color(Some(self.style.header_text));
        definition.set_align(TextAlign::Center);
        definition
    }

    fn body_text_definition(&self) -> TextDefinition {
        let mut definition = TextDefinition::new();
        definition.set_font_family(&self.style.font_family);
        definition.set_font_size(self.style.body_font_size);
        definition.set_color(Some(self.style.body_text));
        definition
    }
}

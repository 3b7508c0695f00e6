//! Visual element vocabulary for canvases.
//!
//! Every element renders itself into a [`LayeredOutput`], which assigns SVG
//! nodes to ordered [`RenderLayer`]s so stacking order is independent of the
//! order elements were placed.
//!
//! [`Element`] is the closed set of things a canvas can hold. The variants
//! share no behavior beyond rendering, so dispatch is a plain `match` rather
//! than a trait object.

pub mod arrow;
pub mod layer;
pub mod picture;
pub mod shape;
pub mod stroke;
pub mod table;
pub mod text;

pub use arrow::{ArrowDefinition, ArrowElement};
pub use layer::{LayeredOutput, RenderLayer};
pub use picture::{FitMode, PictureElement, fit_bounds};
pub use shape::{ShapeElement, ShapeKind};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use table::{TableElement, TableError, TableStyle};
pub use text::{FontWeight, TextAlign, TextDefinition, TextElement};

/// A single visual unit placed on a canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Shape(ShapeElement),
    Text(TextElement),
    Arrow(ArrowElement),
    Table(TableElement),
    Picture(PictureElement),
}

impl Element {
    /// Renders this element into layered SVG output.
    pub fn render_to_layers(&self) -> LayeredOutput {
        match self {
            Self::Shape(shape) => shape.render_to_layers(),
            Self::Text(text) => text.render_to_layers(),
            Self::Arrow(arrow) => arrow.render_to_layers(),
            Self::Table(table) => table.render_to_layers(),
            Self::Picture(picture) => picture.render_to_layers(),
        }
    }
}

impl From<ShapeElement> for Element {
    fn from(value: ShapeElement) -> Self {
        Self::Shape(value)
    }
}

impl From<TextElement> for Element {
    fn from(value: TextElement) -> Self {
        Self::Text(value)
    }
}

impl From<ArrowElement> for Element {
    fn from(value: ArrowElement) -> Self {
        Self::Arrow(value)
    }
}

impl From<TableElement> for Element {
    fn from(value: TableElement) -> Self {
        Self::Table(value)
    }
}

impl From<PictureElement> for Element {
    fn from(value: PictureElement) -> Self {
        Self::Picture(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::{Bounds, Point, Size};

    use super::*;

    #[test]
    fn test_element_dispatches_to_variant_renderer() {
        let shape: Element = ShapeElement::new(
            ShapeKind::Rectangle,
            Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0)),
            RenderLayer::Panel,
        )
        .into();
        let text: Element =
            TextElement::new(TextDefinition::new(), "hello", Point::new(0.0, 0.0)).into();

        let render_string = |element: &Element| -> String {
            element
                .render_to_layers()
                .render()
                .iter()
                .map(|node| node.to_string())
                .collect()
        };

        assert!(render_string(&shape).contains("<rect"));
        assert!(render_string(&text).contains("hello"));
    }
}

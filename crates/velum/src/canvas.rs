//! Canvases and documents: the composition output model.
//!
//! A [`Canvas`] is one output unit (a slide or standalone figure) holding
//! the elements a template placed on it, in placement order. A [`Document`]
//! is the ordered sequence of canvases produced from a deck; canvas order
//! matches specification order 1:1 and each canvas carries its 1-based page
//! index.

use velum_core::{
    draw::{Element, LayeredOutput},
    geometry::Size,
};

/// One output slide or figure with fixed logical dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: Size,
    page: usize,
    elements: Vec<Element>,
}

impl Canvas {
    /// Creates an empty canvas with the given dimensions and 1-based page
    /// index.
    pub fn new(size: Size, page: usize) -> Self {
        Self {
            size,
            page,
            elements: Vec::new(),
        }
    }

    /// Returns the canvas dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the 1-based page index of this canvas within its document.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Adds an element to the canvas. Placement order is preserved; stacking
    /// order is decided by each element's render layer, not placement order.
    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    /// Returns the placed elements in placement order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Renders all elements into layered SVG output.
    pub fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        for element in &self.elements {
            output.merge(element.render_to_layers());
        }
        output
    }
}

/// The ordered collection of canvases produced from a deck.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    canvases: Vec<Canvas>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a canvas, preserving composition order.
    pub fn push(&mut self, canvas: Canvas) {
        self.canvases.push(canvas);
    }

    /// Returns the canvases in presentation order.
    pub fn canvases(&self) -> &[Canvas] {
        &self.canvases
    }

    /// Returns the number of canvases.
    pub fn len(&self) -> usize {
        self.canvases.len()
    }

    /// Returns `true` if the document has no canvases.
    pub fn is_empty(&self) -> bool {
        self.canvases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use velum_core::{
        draw::{RenderLayer, ShapeElement, ShapeKind, TextDefinition, TextElement},
        geometry::{Bounds, Point},
    };

    use super::*;

    #[test]
    fn test_canvas_preserves_placement_order() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0), 1);
        canvas.push(TextElement::new(
            TextDefinition::new(),
            "first",
            Point::new(0.0, 0.0),
        ));
        canvas.push(ShapeElement::new(
            ShapeKind::Oval,
            Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0)),
            RenderLayer::Content,
        ));

        assert_eq!(canvas.elements().len(), 2);
        assert!(matches!(canvas.elements()[0], Element::Text(_)));
        assert!(matches!(canvas.elements()[1], Element::Shape(_)));
    }

    #[test]
    fn test_render_layers_stack_below_text() {
        let mut canvas = Canvas::new(Size::new(100.0, 100.0), 1);
        // Text placed before the shape must still render above it
        canvas.push(TextElement::new(
            TextDefinition::new(),
            "label",
            Point::new(0.0, 0.0),
        ));
        canvas.push(
            ShapeElement::new(
                ShapeKind::Rectangle,
                Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0)),
                RenderLayer::Panel,
            ),
        );

        let groups: Vec<String> = canvas
            .render_to_layers()
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();

        assert_eq!(groups.len(), 2);
        assert!(groups[0].contains("data-layer=\"panel\""));
        assert!(groups[1].contains("data-layer=\"text\""));
    }

    #[test]
    fn test_document_preserves_order() {
        let mut document = Document::new();
        document.push(Canvas::new(Size::new(10.0, 10.0), 1));
        document.push(Canvas::new(Size::new(10.0, 10.0), 2));

        assert_eq!(document.len(), 2);
        assert_eq!(document.canvases()[0].page(), 1);
        assert_eq!(document.canvases()[1].page(), 2);
    }
}

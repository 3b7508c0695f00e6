//! Layer-based rendering system for SVG output.
//!
//! Drawable elements specify which z-order layer their SVG nodes belong to;
//! [`LayeredOutput`] collects nodes and emits them grouped bottom-to-top so
//! that text always sits above panels, panels above bands, and so on,
//! regardless of the order in which templates place elements.
//!
//! # Example
//!
//! ```
//! # use velum_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::Rectangle;
//! let mut output = LayeredOutput::new();
//!
//! let band = Rectangle::new().set("fill", "#006699");
//! output.add_to_layer(RenderLayer::Band, Box::new(band));
//!
//! let label = svg::node::element::Text::new("Overview");
//! output.add_to_layer(RenderLayer::Text, Box::new(label));
//!
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Defines the rendering layers for SVG output.
///
/// Layers render bottom to top in declaration order; the `Ord` derive uses
/// that order, so the first variant renders first (bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Full-bleed canvas backgrounds and decorative backdrop shapes
    Background,
    /// Header and footer bands plus accent rules
    Band,
    /// Content panels behind bullets, figures, and callouts
    Panel,
    /// Foreground shapes such as badges and dividers - default layer
    Content,
    /// Placed images
    Picture,
    /// Arrows and connector lines
    Arrow,
    /// Text labels and table cell content
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Band => "band",
            Self::Panel => "panel",
            Self::Content => "content",
            Self::Picture => "picture",
            Self::Arrow => "arrow",
            Self::Text => "text",
        }
    }
}

/// SVG nodes grouped by rendering layer.
///
/// Collects nodes as elements render and, when consumed, emits one SVG `<g>`
/// per non-empty layer in z-order, each tagged with a `data-layer` attribute.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    ///
    /// Nodes within a layer keep the order they were added in.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Merges all layers from another `LayeredOutput` into this one.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if there are no nodes in any layer.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes an SVG `<g>` element with a `data-layer`
    /// attribute identifying the layer; empty layers are skipped. The sort is
    /// stable, so insertion order within a layer is preserved.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::Rectangle;

    use super::*;

    #[test]
    fn test_layered_output_starts_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_groups_by_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Band, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Band, Box::new(Rectangle::new()));

        // Two distinct layers produce two groups
        let nodes = output.render();
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_layered_output_merge_same_layer() {
        let mut output1 = LayeredOutput::new();
        output1.add_to_layer(RenderLayer::Panel, Box::new(Rectangle::new()));

        let mut output2 = LayeredOutput::new();
        output2.add_to_layer(RenderLayer::Panel, Box::new(Rectangle::new()));

        output1.merge(output2);

        let nodes = output1.render();
        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_render_layer_z_order() {
        assert!(RenderLayer::Background < RenderLayer::Band);
        assert!(RenderLayer::Band < RenderLayer::Panel);
        assert!(RenderLayer::Panel < RenderLayer::Picture);
        assert!(RenderLayer::Picture < RenderLayer::Text);
    }

    #[test]
    fn test_render_layer_names() {
        assert_eq!(RenderLayer::Background.name(), "background");
        assert_eq!(RenderLayer::Text.name(), "text");
    }
}

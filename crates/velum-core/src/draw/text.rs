//! Text element definitions and rendering.
//!
//! This module provides the types for styled text placed on a canvas. Text
//! renders as SVG `<text>` elements with one `<tspan>` per line.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style configuration
//! - [`TextElement`] - A placed text block combining content, style, and origin
//!
//! # Layout model
//!
//! A text element is anchored at the top-left corner of its block. An
//! optional block width serves two purposes: it positions centered and
//! right-aligned lines within the block, and it enables greedy word-wrap
//! for lines that measure wider than the block. Explicit newlines in the
//! content always start a new line.
//!
//! Measurement uses a shared cosmic-text font system so wrap decisions rest
//! on real font metrics rather than character-count heuristics.
//!
//! # Quick Start
//!
//! ```
//! # use velum_core::draw::{TextDefinition, TextElement};
//! # use velum_core::geometry::Point;
//! let mut style = TextDefinition::new();
//! style.set_font_size(22);
//!
//! let text = TextElement::new(style, "Problem Statement", Point::new(48.0, 24.0));
//! assert_eq!(text.lines(), vec!["Problem Statement"]);
//! ```

use std::sync::{Arc, Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::info;
use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::Color,
    draw::{LayeredOutput, RenderLayer},
    geometry::{Point, Size},
};

/// Ratio of line height to font size used for vertical spacing.
const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Baseline offset within a line, as a fraction of line height.
const BASELINE_FACTOR: f32 = 0.8;

/// Horizontal alignment of lines within a text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Lines start at the block's left edge (default)
    #[default]
    Left,
    /// Lines are centered within the block width
    Center,
    /// Lines end at the block's right edge
    Right,
}

impl TextAlign {
    /// Returns the SVG text-anchor value for this alignment.
    pub fn to_svg_anchor(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// Font weight for text rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the SVG font-weight value for this weight.
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }

    fn to_cosmic_weight(self) -> Weight {
        match self {
            Self::Normal => Weight::NORMAL,
            Self::Bold => Weight::BOLD,
        }
    }
}

/// Defines the visual style for text elements.
///
/// Multiple [`TextElement`]s can share (clones of) the same definition for
/// consistent styling across a canvas.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `15` |
/// | Weight | Normal |
/// | Italic | false |
/// | Color | `None` (SVG default, typically black) |
/// | Alignment | Left |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: u16,
    weight: FontWeight,
    italic: bool,
    color: Option<Color>,
    align: TextAlign,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    /// Sets the font family name (e.g. "Arial", "monospace").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font weight.
    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    /// Sets whether the text renders italic.
    pub fn set_italic(&mut self, italic: bool) {
        self.italic = italic;
    }

    /// Sets the text color. `None` uses the SVG default (typically black).
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Sets the horizontal alignment of lines within the block.
    pub fn set_align(&mut self, align: TextAlign) {
        self.align = align;
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    /// Returns the font family name.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Returns true if the text renders italic.
    pub fn italic(&self) -> bool {
        self.italic
    }

    /// Returns the text color, if set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Returns the horizontal alignment.
    pub fn align(&self) -> TextAlign {
        self.align
    }

    /// Returns the line height in canvas units for this definition.
    pub fn line_height(&self) -> f32 {
        self.font_size as f32 * LINE_HEIGHT_FACTOR
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 15,
            weight: FontWeight::default(),
            italic: false,
            color: None,
            align: TextAlign::default(),
        }
    }
}

/// A text block placed on a canvas.
///
/// Combines owned content with a [`TextDefinition`], a top-left origin, and
/// an optional block width (see the [module documentation](self) for the
/// layout model).
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    definition: TextDefinition,
    content: String,
    origin: Point,
    width: Option<f32>,
}

impl TextElement {
    /// Creates a new text element anchored at the given top-left origin.
    pub fn new(definition: TextDefinition, content: impl Into<String>, origin: Point) -> Self {
        Self {
            definition,
            content: content.into(),
            origin,
            width: None,
        }
    }

    /// Sets the block width (builder style), enabling alignment within the
    /// block and word-wrap of over-long lines.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the style definition of this element.
    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    /// Returns the top-left origin of the text block.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the block width, if set.
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// Returns the lines this element renders, after word-wrap.
    ///
    /// Explicit newlines are preserved; when a block width is set, each line
    /// wider than the block is wrapped greedily at word boundaries.
    pub fn lines(&self) -> Vec<String> {
        match self.width {
            Some(max_width) => self
                .content
                .lines()
                .flat_map(|line| wrap_line(line, &self.definition, max_width))
                .collect(),
            None => self.content.lines().map(str::to_string).collect(),
        }
    }

    /// Measures the rendered size of this text block.
    pub fn measured_size(&self) -> Size {
        let lines = self.lines();
        let manager = TEXT_MANAGER.get_or_init(TextManager::new);

        let mut max_width: f32 = 0.0;
        for line in &lines {
            let size = manager.measure(line, &self.definition);
            max_width = max_width.max(size.width());
        }

        Size::new(
            max_width,
            self.definition.line_height() * lines.len() as f32,
        )
    }

    /// Renders this text block to the [`Text`](RenderLayer::Text) layer.
    pub fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let line_height = self.definition.line_height();
        // Alignment positions each line's anchor within the block; without a
        // width the origin itself is the anchor.
        let anchor_x = match (self.definition.align(), self.width) {
            (TextAlign::Left, _) | (_, None) => self.origin.x(),
            (TextAlign::Center, Some(width)) => self.origin.x() + width / 2.0,
            (TextAlign::Right, Some(width)) => self.origin.x() + width,
        };

        let mut rendered = svg_element::Text::new("")
            .set("text-anchor", self.definition.align().to_svg_anchor())
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size());

        if self.definition.weight() == FontWeight::Bold {
            rendered = rendered.set("font-weight", self.definition.weight().to_svg_value());
        }

        if self.definition.italic() {
            rendered = rendered.set("font-style", "italic");
        }

        if let Some(color) = self.definition.color() {
            rendered = rendered
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
        }

        for (index, line) in self.lines().into_iter().enumerate() {
            let baseline = self.origin.y() + line_height * (index as f32 + BASELINE_FACTOR);
            let tspan = svg_element::TSpan::new("")
                .set("x", anchor_x)
                .set("y", baseline)
                .add(SvgText::new(line));
            rendered = rendered.add(tspan);
        }

        output.add_to_layer(RenderLayer::Text, Box::new(rendered));
        output
    }
}

/// Wraps a single line greedily at word boundaries so every output line
/// measures at most `max_width`, except single words wider than the block,
/// which stay intact and overflow.
fn wrap_line(line: &str, definition: &TextDefinition, max_width: f32) -> Vec<String> {
    if line.is_empty() {
        return vec![String::new()];
    }

    let manager = TEXT_MANAGER.get_or_init(TextManager::new);
    if manager.measure(line, definition).width() <= max_width {
        return vec![line.to_string()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if manager.measure(&candidate, definition).width() <= max_width {
            current = candidate;
        } else {
            wrapped.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        wrapped.push(current);
    }

    wrapped
}

/// TextManager handles text measurement using cosmic-text.
/// It maintains a reusable FontSystem instance to avoid expensive recreation.
struct TextManager {
    font_system: Arc<Mutex<FontSystem>>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Measures the rendered size of a single line of text in canvas units.
    ///
    /// Uses real font metrics and shaping, so kerning and ligatures are
    /// accounted for. Falls back to a width estimate proportional to the
    /// character count when no layout runs are produced (e.g. the font is
    /// unavailable in a minimal environment).
    fn measure(&self, text: &str, definition: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::new(0.0, definition.line_height());
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        // Points to pixels at standard DPI
        let font_size_px = definition.font_size() as f32 * 1.33;
        let metrics = Metrics::new(font_size_px, definition.line_height());

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new()
            .family(Family::Name(definition.font_family()))
            .weight(definition.weight().to_cosmic_weight());

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut measured = false;
        for run in buffer.layout_runs() {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
                measured = true;
            }
        }

        if !measured {
            max_width = text.len() as f32 * (font_size_px * 0.55);
        }

        Size::new(max_width, definition.line_height())
    }
}

// Shared measurement instance for the whole process
static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_text_definition_defaults() {
        let def = TextDefinition::new();
        assert_eq!(def.font_family(), "Arial");
        assert_eq!(def.font_size(), 15);
        assert_eq!(def.weight(), FontWeight::Normal);
        assert!(!def.italic());
        assert!(def.color().is_none());
        assert_eq!(def.align(), TextAlign::Left);
    }

    #[test]
    fn test_text_definition_setters() {
        let mut def = TextDefinition::new();
        def.set_font_size(32);
        def.set_font_family("Helvetica");
        def.set_weight(FontWeight::Bold);
        def.set_italic(true);
        def.set_color(Some(Color::new("white").unwrap()));
        def.set_align(TextAlign::Center);

        assert_eq!(def.font_size(), 32);
        assert_eq!(def.font_family(), "Helvetica");
        assert_eq!(def.weight(), FontWeight::Bold);
        assert!(def.italic());
        assert!(def.color().is_some());
        assert_eq!(def.align(), TextAlign::Center);
    }

    #[test]
    fn test_line_height_follows_font_size() {
        let mut def = TextDefinition::new();
        def.set_font_size(20);
        assert_approx_eq!(f32, def.line_height(), 24.0);
    }

    #[test]
    fn test_align_svg_anchor() {
        assert_eq!(TextAlign::Left.to_svg_anchor(), "start");
        assert_eq!(TextAlign::Center.to_svg_anchor(), "middle");
        assert_eq!(TextAlign::Right.to_svg_anchor(), "end");
    }

    #[test]
    fn test_lines_without_width_split_on_newlines() {
        let text = TextElement::new(
            TextDefinition::new(),
            "first\nsecond\nthird",
            Point::new(0.0, 0.0),
        );
        assert_eq!(text.lines(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_lines_wrap_at_block_width() {
        let text = TextElement::new(
            TextDefinition::new(),
            "alpha beta gamma delta epsilon zeta eta theta",
            Point::new(0.0, 0.0),
        )
        .with_width(120.0);

        let lines = text.lines();
        assert!(
            lines.len() > 1,
            "long content should wrap into multiple lines, got {lines:?}"
        );

        // No words lost or reordered
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, "alpha beta gamma delta epsilon zeta eta theta");
    }

    #[test]
    fn test_wrap_preserves_empty_lines() {
        let text = TextElement::new(TextDefinition::new(), "above\n\nbelow", Point::new(0.0, 0.0))
            .with_width(500.0);
        assert_eq!(text.lines(), vec!["above", "", "below"]);
    }

    #[test]
    fn test_measured_size_grows_with_content() {
        let def = TextDefinition::new();
        let short = TextElement::new(def.clone(), "Hi", Point::new(0.0, 0.0));
        let long = TextElement::new(def, "A considerably longer line", Point::new(0.0, 0.0));

        assert!(long.measured_size().width() > short.measured_size().width());
    }

    #[test]
    fn test_measured_size_height_counts_lines() {
        let def = TextDefinition::new();
        let two_lines = TextElement::new(def.clone(), "one\ntwo", Point::new(0.0, 0.0));
        assert_approx_eq!(
            f32,
            two_lines.measured_size().height(),
            def.line_height() * 2.0
        );
    }

    #[test]
    fn test_render_to_layers_has_text_layer() {
        let text = TextElement::new(TextDefinition::new(), "Hello", Point::new(10.0, 10.0));
        let output = text.render_to_layers();
        assert!(!output.is_empty());
    }
}

//! Shared styling and geometry for a whole deck.
//!
//! A [`Theme`] is built once, then shared read-only by every template call,
//! so header bands, fonts, and spacing stay consistent across the document.
//! Coordinates are logical canvas units at 96 units per inch; the default
//! canvas is a 16:9 slide, 1280 by 720 units.

use velum_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
};

/// Logical canvas units per inch.
pub const UNITS_PER_INCH: f32 = 96.0;

/// Converts a measurement in inches to logical canvas units.
pub fn inches(value: f32) -> f32 {
    value * UNITS_PER_INCH
}

fn theme_color(value: &str) -> Color {
    Color::new(value).unwrap_or_default()
}

/// Immutable styling and geometry configuration shared by all templates.
///
/// Construct via [`Theme::default`] or through
/// [`AppConfig::to_theme`](crate::config::AppConfig::to_theme) to apply
/// configuration overrides. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    primary: Color,
    secondary: Color,
    accent: Color,
    background: Color,
    light_background: Color,
    text: Color,
    canvas_size: Size,
    header_height: f32,
    footer_height: f32,
    margin: f32,
    rule_height: f32,
    font_family: String,
}

impl Theme {
    /// Returns the primary brand color, used for header bands and emphasis.
    pub fn primary(&self) -> Color {
        self.primary
    }

    /// Returns the secondary brand color, used for subtitles and accents.
    pub fn secondary(&self) -> Color {
        self.secondary
    }

    /// Returns the accent color, used for divider rules and arrows.
    pub fn accent(&self) -> Color {
        self.accent
    }

    /// Returns the canvas background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Returns the light panel fill, used for body panels and table stripes.
    pub fn light_background(&self) -> Color {
        self.light_background
    }

    /// Returns the body text color.
    pub fn text(&self) -> Color {
        self.text
    }

    /// Returns the fixed canvas dimensions.
    pub fn canvas_size(&self) -> Size {
        self.canvas_size
    }

    /// Returns the header band height.
    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Returns the footer band height.
    pub fn footer_height(&self) -> f32 {
        self.footer_height
    }

    /// Returns the horizontal margin between content and the canvas edge.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// Returns the thickness of accent divider rules.
    pub fn rule_height(&self) -> f32 {
        self.rule_height
    }

    /// Returns the font family used for all text.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the full canvas as bounds.
    pub fn canvas_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(Point::new(0.0, 0.0), self.canvas_size)
    }

    /// Returns the header band bounds at the top of the canvas.
    pub fn header_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(
            Point::new(0.0, 0.0),
            Size::new(self.canvas_size.width(), self.header_height),
        )
    }

    /// Returns the footer band bounds at the bottom of the canvas.
    pub fn footer_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(
            Point::new(0.0, self.canvas_size.height() - self.footer_height),
            Size::new(self.canvas_size.width(), self.footer_height),
        )
    }

    /// Returns the body region between the header and footer bands, inset
    /// by the horizontal margin.
    pub fn body_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(
            Point::new(self.margin, self.header_height + self.rule_height),
            Size::new(
                self.canvas_size.width() - self.margin * 2.0,
                self.canvas_size.height()
                    - self.header_height
                    - self.rule_height
                    - self.footer_height,
            ),
        )
    }

    pub(crate) fn set_primary(&mut self, color: Color) {
        self.primary = color;
    }

    pub(crate) fn set_secondary(&mut self, color: Color) {
        self.secondary = color;
    }

    pub(crate) fn set_accent(&mut self, color: Color) {
        self.accent = color;
    }

    pub(crate) fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    pub(crate) fn set_light_background(&mut self, color: Color) {
        self.light_background = color;
    }

    pub(crate) fn set_text(&mut self, color: Color) {
        self.text = color;
    }

    pub(crate) fn set_font_family(&mut self, family: String) {
        self.font_family = family;
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: theme_color("#006699"),
            secondary: theme_color("#0099CC"),
            accent: theme_color("#00A693"),
            background: theme_color("white"),
            light_background: theme_color("#F0F8FF"),
            text: theme_color("#212529"),
            canvas_size: Size::new(inches(13.333), inches(7.5)),
            header_height: inches(1.1),
            footer_height: inches(0.4),
            margin: inches(0.5),
            rule_height: inches(0.05),
            font_family: "Calibri".to_string(),
        }
    }
}

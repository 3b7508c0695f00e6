//! Color handling for Velum canvases.
//!
//! This module provides the [`Color`] type which wraps `DynamicColor` from
//! the `color` crate, adding the conveniences Velum needs: CSS string
//! parsing, alpha access, and ID-safe strings for SVG marker definitions.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a CSS color string such as `"#006699"`,
    /// `"rgb(0, 166, 147)"`, or `"aliceblue"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use velum_core::color::Color;
    ///
    /// let primary = Color::new("#006699").unwrap();
    /// let accent = Color::new("teal").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns a sanitized, ID-safe string representation of this color,
    /// suitable for SVG `id` attributes (e.g. arrowhead marker definitions).
    ///
    /// # Examples
    ///
    /// ```
    /// use velum_core::color::Color;
    ///
    /// let color = Color::new("#00a693").unwrap();
    /// let id = color.to_id_safe_string();
    /// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '_'));
    /// ```
    pub fn to_id_safe_string(self) -> String {
        let color_str = self.to_string();
        let mut sanitized = color_str
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';'], "_");

        // SVG IDs must start with a letter
        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }

    /// Creates a new color with the specified alpha value, typically between
    /// 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn with_alpha(self, alpha: f32) -> Self {
        Color {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component of this color as an `f32` in `0.0..=1.0`.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#006699").is_ok());
        assert!(Color::new("aliceblue").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_default_is_black() {
        assert_eq!(Color::default().to_string(), "black");
    }

    #[test]
    fn test_color_with_alpha() {
        let translucent = Color::new("teal").unwrap().with_alpha(0.25);
        assert!((translucent.alpha() - 0.25).abs() < 0.001);
    }

    #[test]
    fn test_color_to_id_safe_string() {
        let id = Color::new("#006699").unwrap().to_id_safe_string();
        assert!(!id.contains('#'));
        assert!(!id.contains('('));
        assert!(!id.contains(','));
        assert!(!id.contains(' '));
        assert!(!id.chars().next().unwrap().is_ascii_digit());
    }

    #[test]
    fn test_color_eq() {
        let a = Color::new("red").unwrap();
        let b = Color::new("red").unwrap();
        let c = Color::new("blue").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

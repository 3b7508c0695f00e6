//! Configuration types for deck composition.
//!
//! This module provides configuration structures that control how decks are
//! styled. All types implement [`serde::Deserialize`] for flexible loading
//! from external sources (the CLI loads them from a TOML file).
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Color role and font overrides, as strings.
//!
//! Unset fields fall back to the [`Theme`] defaults.
//!
//! # Example
//!
//! ```
//! # use velum::config::AppConfig;
//! let config = AppConfig::default();
//! let theme = config.to_theme().unwrap();
//! assert_eq!(theme.font_family(), "Calibri");
//! ```

use serde::Deserialize;

use velum_core::color::Color;

use crate::theme::Theme;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Builds a [`Theme`] by applying the configured overrides to the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error message if any configured color string cannot be
    /// parsed into a valid [`Color`].
    pub fn to_theme(&self) -> Result<Theme, String> {
        let mut theme = Theme::default();

        if let Some(color) = self.style.primary()? {
            theme.set_primary(color);
        }
        if let Some(color) = self.style.secondary()? {
            theme.set_secondary(color);
        }
        if let Some(color) = self.style.accent()? {
            theme.set_accent(color);
        }
        if let Some(color) = self.style.background()? {
            theme.set_background(color);
        }
        if let Some(color) = self.style.light_background()? {
            theme.set_light_background(color);
        }
        if let Some(color) = self.style.text()? {
            theme.set_text(color);
        }
        if let Some(family) = &self.style.font_family {
            theme.set_font_family(family.clone());
        }

        Ok(theme)
    }
}

/// Visual styling overrides for composed decks.
///
/// Every color role accepts any CSS color string. Fields that are not set
/// fall back to the built-in theme.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Primary brand color (header bands, emphasis), as a color string.
    #[serde(default)]
    primary: Option<String>,

    /// Secondary brand color (subtitles, accents), as a color string.
    #[serde(default)]
    secondary: Option<String>,

    /// Accent color (divider rules, arrows), as a color string.
    #[serde(default)]
    accent: Option<String>,

    /// Canvas background color, as a color string.
    #[serde(default)]
    background: Option<String>,

    /// Light panel fill, as a color string.
    #[serde(default)]
    light_background: Option<String>,

    /// Body text color, as a color string.
    #[serde(default)]
    text: Option<String>,

    /// Font family for all text.
    #[serde(default)]
    font_family: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed primary [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn primary(&self) -> Result<Option<Color>, String> {
        Self::parse_role(&self.primary, "primary")
    }

    /// Returns the parsed secondary [`Color`], or `None` if not configured.
    pub fn secondary(&self) -> Result<Option<Color>, String> {
        Self::parse_role(&self.secondary, "secondary")
    }

    /// Returns the parsed accent [`Color`], or `None` if not configured.
    pub fn accent(&self) -> Result<Option<Color>, String> {
        Self::parse_role(&self.accent, "accent")
    }

    /// Returns the parsed background [`Color`], or `None` if not configured.
    pub fn background(&self) -> Result<Option<Color>, String> {
        Self::parse_role(&self.background, "background")
    }

    /// Returns the parsed light background [`Color`], or `None` if not configured.
    pub fn light_background(&self) -> Result<Option<Color>, String> {
        Self::parse_role(&self.light_background, "light_background")
    }

    /// Returns the parsed text [`Color`], or `None` if not configured.
    pub fn text(&self) -> Result<Option<Color>, String> {
        Self::parse_role(&self.text, "text")
    }

    fn parse_role(value: &Option<String>, role: &str) -> Result<Option<Color>, String> {
        value
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid {role} color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_yields_default_theme() {
        let theme = AppConfig::default().to_theme().unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_overrides_apply() {
        let config: AppConfig = serde_json::from_str(
            r##"{"style": {"primary": "#336699", "font_family": "Georgia"}}"##,
        )
        .unwrap();

        let theme = config.to_theme().unwrap();
        assert_eq!(theme.primary(), Color::new("#336699").unwrap());
        assert_eq!(theme.font_family(), "Georgia");
        // Untouched roles keep their defaults
        assert_eq!(theme.accent(), Theme::default().accent());
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let config: AppConfig =
            serde_json::from_str(r#"{"style": {"accent": "not-a-color"}}"#).unwrap();
        assert!(config.to_theme().is_err());
    }
}

//! Configuration file loading for the Velum CLI.
//!
//! Configuration is TOML with an optional `[style]` section mirroring
//! [`velum::config::StyleConfig`]:
//!
//! ```toml
//! [style]
//! primary = "#006699"
//! accent = "#00A693"
//! font_family = "Calibri"
//! ```

use std::fs;

use log::{debug, info};

use velum::{VelumError, config::AppConfig};

/// Loads configuration from the given path, or defaults when no path is
/// supplied.
pub fn load_config(path: Option<&String>) -> Result<AppConfig, VelumError> {
    let Some(path) = path else {
        debug!("No configuration file supplied, using defaults");
        return Ok(AppConfig::default());
    };

    info!(path = path.as_str(); "Loading configuration");

    let contents = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&contents)
        .map_err(|err| VelumError::Config(format!("invalid configuration in {path}: {err}")))?;

    Ok(config)
}

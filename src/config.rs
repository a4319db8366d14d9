//! Configuration types and loading.
//!
//! This module provides the configuration structures that control how
//! the diagram is rendered, and the logic for finding and loading TOML
//! configuration files from various locations (explicit path, local
//! directory, platform config directory). Every field is defaulted, so
//! the tool runs with no configuration file at all.
//!
//! # Example
//!
//! ```toml
//! [render]
//! direction = "lr"
//! splines = "ortho"
//!
//! [style]
//! background_color = "#FFFFFF"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::StratusError;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

/// Top-level application configuration combining render and style
/// settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Rank direction of the rendered diagram.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Top to bottom (the reference architecture's native orientation)
    #[default]
    Tb,
    /// Left to right
    Lr,
}

impl Direction {
    /// Returns the DOT `rankdir` value.
    pub fn to_dot_value(&self) -> &'static str {
        match self {
            Self::Tb => "TB",
            Self::Lr => "LR",
        }
    }
}

/// Layout-related settings passed through to Graphviz.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Rank direction for the diagram.
    #[serde(default)]
    direction: Direction,

    /// DOT `splines` edge-routing mode.
    #[serde(default = "default_splines")]
    splines: String,
}

fn default_splines() -> String {
    "ortho".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            splines: default_splines(),
        }
    }
}

impl RenderConfig {
    /// Returns the configured rank [`Direction`].
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the DOT `splines` mode.
    pub fn splines(&self) -> &str {
        &self.splines
    }
}

/// Visual styling configuration for the rendered diagram.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Background color, passed through as the DOT `bgcolor` graph
    /// attribute. Graphviz validates its own color syntax.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the configured background color, or `None` for the
    /// renderer default (transparent/white depending on format).
    pub fn background_color(&self) -> Option<&str> {
        self.background_color.as_deref()
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (stratus/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns an error if an explicit path is provided but the file does
/// not exist, or if a found config file cannot be parsed.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, StratusError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("stratus/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "stratus", "stratus") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(&system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, StratusError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

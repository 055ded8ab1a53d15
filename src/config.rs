//! Configuration management for pestviz.
//!
//! Settings are layered with the following precedence:
//! 1. Environment variables (highest priority)
//! 2. JSON config file
//! 3. Default values (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::colormaps::recenter::{BoundsMode, DEFAULT_RESOLUTION};
use crate::error::{PestvizError, Result};
use crate::legend::MarkerScale;

/// Environment variable overriding the base colormap name
pub const ENV_COLORMAP: &str = "PESTVIZ_COLORMAP";
/// Environment variable overriding the remap resolution
pub const ENV_RESOLUTION: &str = "PESTVIZ_RESOLUTION";
/// Environment variable overriding the bounds mode
pub const ENV_BOUNDS_MODE: &str = "PESTVIZ_BOUNDS_MODE";
/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "PESTVIZ_LOG_LEVEL";

/// Recentering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecenterConfig {
    /// Name of the base gradient in the registry
    #[serde(default = "default_colormap")]
    pub colormap: String,

    /// Number of samples in the remapped gradient
    #[serde(default = "default_resolution")]
    pub resolution: usize,

    /// How the source slice is chosen
    #[serde(default)]
    pub bounds_mode: BoundsMode,

    /// Register the recentered gradient under this name
    #[serde(default)]
    pub register_as: Option<String>,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Recentering configuration
    #[serde(default)]
    pub recenter: RecenterConfig,

    /// Legend marker scaling
    #[serde(default)]
    pub markers: MarkerScale,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// Defaults, then the file at `config_path`, then `lookup` overrides
    fn load_with_env<F>(config_path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(path) = config_path {
            let file_config = Self::load_from_file(path)?;
            config.merge(file_config);
        }

        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.recenter.colormap = other.recenter.colormap;
        self.recenter.resolution = other.recenter.resolution;
        self.recenter.bounds_mode = other.recenter.bounds_mode;
        if other.recenter.register_as.is_some() {
            self.recenter.register_as = other.recenter.register_as;
        }
        self.markers = other.markers;
        self.log_level = other.log_level;
    }

    /// Apply overrides from an environment lookup
    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(colormap) = lookup(ENV_COLORMAP) {
            self.recenter.colormap = colormap;
        }
        if let Some(resolution) = lookup(ENV_RESOLUTION) {
            self.recenter.resolution =
                resolution
                    .trim()
                    .parse()
                    .map_err(|e| PestvizError::Config {
                        message: format!("Invalid {}: {} ({})", ENV_RESOLUTION, resolution, e),
                    })?;
        }
        if let Some(mode) = lookup(ENV_BOUNDS_MODE) {
            self.recenter.bounds_mode = mode.parse().map_err(|e| PestvizError::Config {
                message: format!("Invalid {}: {}", ENV_BOUNDS_MODE, e),
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = level;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.recenter.colormap.trim().is_empty() {
            return Err(PestvizError::Config {
                message: "Colormap name cannot be empty".to_string(),
            });
        }

        if self.recenter.resolution < 2 {
            return Err(PestvizError::Config {
                message: format!(
                    "Resolution must be at least 2, got {}",
                    self.recenter.resolution
                ),
            });
        }

        if let Some(name) = &self.recenter.register_as {
            if name.trim().is_empty() {
                return Err(PestvizError::Config {
                    message: "Registration name cannot be empty".to_string(),
                });
            }
        }

        if !(self.markers.minimum_size >= 0.0 && self.markers.scale > 0.0) {
            return Err(PestvizError::Config {
                message: format!(
                    "Marker scale must be positive and minimum size non-negative, got {:?}",
                    self.markers
                ),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(PestvizError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recenter: RecenterConfig::default(),
            markers: MarkerScale::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for RecenterConfig {
    fn default() -> Self {
        Self {
            colormap: default_colormap(),
            resolution: default_resolution(),
            bounds_mode: BoundsMode::default(),
            register_as: None,
        }
    }
}

// Default value functions for serde
fn default_colormap() -> String {
    "coolwarm".to_string()
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

fn default_log_level() -> String {
    "info".to_string()
}

//! Color output configuration.
//!
//! The color switch is process-wide and fixed at startup: set it once with
//! [`set_color_enabled`] (or [`Config::apply`]) before rendering anything.
//! The first render freezes the default, which is enabled.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static COLOR_ENABLED: OnceCell<bool> = OnceCell::new();

/// Environment variable that disables color when set to a non-empty value.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Fix the process-wide color switch.
///
/// Fails with [`Error::ColorAlreadyConfigured`] if the switch was already
/// set or already read by a render.
pub fn set_color_enabled(enabled: bool) -> Result<()> {
    COLOR_ENABLED
        .set(enabled)
        .map_err(|_| Error::ColorAlreadyConfigured)?;
    tracing::debug!(enabled, "color output configured");
    Ok(())
}

/// Whether rendering emits escape sequences.
pub fn color_enabled() -> bool {
    *COLOR_ENABLED.get_or_init(|| true)
}

/// When to emit color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Always,
    Never,
}

/// File-backed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color: ColorMode,
}

impl Config {
    /// Default config file location: `<config_dir>/colorstr/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("colorstr").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply the `NO_COLOR` convention from the process environment.
    #[must_use]
    pub fn with_env(self) -> Self {
        let value = std::env::var(NO_COLOR_ENV).ok();
        self.with_no_color(value.as_deref())
    }

    /// Force color off when `no_color` holds a non-empty value.
    #[must_use]
    pub fn with_no_color(mut self, no_color: Option<&str>) -> Self {
        if no_color.is_some_and(|value| !value.is_empty()) {
            self.color = ColorMode::Never;
        }
        self
    }

    /// Push this config into the process-wide color switch.
    pub fn apply(&self) -> Result<()> {
        set_color_enabled(self.color == ColorMode::Always)
    }
}

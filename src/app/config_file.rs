//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/filetree/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FiletreeError, Result};

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// General settings
    pub general: GeneralConfig,
    /// Path filtering
    pub filter: FilterConfig,
    /// UI display settings
    pub ui: UiConfig,
}

/// General application settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable Nerd Font icons
    pub enable_icons: bool,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enable_icons: true,
            mouse_enabled: true,
        }
    }
}

/// Path filtering settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Apply the built-in noise patterns
    pub use_default_patterns: bool,
    /// Additional exclusion regexes
    pub extra_patterns: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            use_default_patterns: true,
            extra_patterns: Vec::new(),
        }
    }
}

/// UI display settings
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Show the status bar under the tree
    pub show_status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_status_bar: true,
        }
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/filetree)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("filetree"))
    }

    /// Get the config file path (~/.config/filetree/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config file");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
                Self::default()
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| FiletreeError::config(format!("{}: {}", path.display(), e)))
    }
}

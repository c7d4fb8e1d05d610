//! Configuration file support
//!
//! Loads settings from ~/.cbhl.toml (or %USERPROFILE%\.cbhl.toml on Windows)
//!
//! Example:
//! ```toml
//! # cbhl configuration
//! target = "latex"
//! style = "sphinx"
//! line-numbers = true
//! syntax-dir = "/usr/share/cbhl/syntaxes"
//!
//! [style-overrides]
//! Comment = "italic #408090"
//! Keyword = "bold #007020"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BridgeError, Result};
use crate::format::RenderTarget;

const CONFIG_FILE: &str = ".cbhl.toml";

/// Bridge settings, fixed at construction
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct BridgeConfig {
    /// Markup to render into
    pub target: RenderTarget,
    /// Style name: a built-in style or a bundled engine theme
    pub style: String,
    /// Default for the line-numbers flag when the caller doesn't choose
    pub line_numbers: bool,
    /// Whether to load the highlighting engine at all
    pub highlighting: bool,
    /// Extra `.sublime-syntax` definitions to load
    pub syntax_dir: Option<PathBuf>,
    /// Per-category overrides of a built-in style
    pub style_overrides: BTreeMap<String, String>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            target: RenderTarget::Html,
            style: "sphinx".to_string(),
            line_numbers: false,
            highlighting: true,
            syntax_dir: None,
            style_overrides: BTreeMap::new(),
        }
    }
}

impl BridgeConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }
    }

    /// Load the default config file; defaults if there is none
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents).map_err(|e| match e {
            BridgeError::Config(msg) => BridgeError::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| BridgeError::Config(e.to_string()))
    }
}

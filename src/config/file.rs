//! Configuration file support for persistent defaults.
//!
//! Settings are read from a TOML file located at
//! `~/.config/path-size/config.toml` (or the platform-specific equivalent).
//! Values found there act as defaults that command-line flags override.
//!
//! # Layering
//!
//! The precedence order is: **CLI flag > config file > built-in default**.
//!
//! # Example config
//!
//! ```toml
//! [traversal]
//! all = true
//! recursive = true
//!
//! [output]
//! human = true
//! json = false
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use super::{OutputOptions, TraversalOptions};

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so that absent keys fall through to the
/// built-in defaults instead of overriding them.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Traversal defaults
    #[serde(default)]
    pub traversal: FileTraversalConfig,

    /// Output defaults
    #[serde(default)]
    pub output: FileOutputConfig,
}

/// Traversal options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileTraversalConfig {
    /// Include hidden entries
    pub all: Option<bool>,

    /// Descend into subdirectories
    pub recursive: Option<bool>,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Human-readable sizes
    pub human: Option<bool>,

    /// JSON output
    pub json: Option<bool>,
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// `None` when the platform configuration directory cannot be determined.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("path-size").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// A missing file yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or contains
    /// invalid TOML or unknown keys.
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML deserialization error for malformed input.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Traversal options with built-in defaults filled in for absent keys.
    #[must_use]
    pub fn traversal_options(&self) -> TraversalOptions {
        TraversalOptions {
            include_hidden: self.traversal.all.unwrap_or(false),
            recursive: self.traversal.recursive.unwrap_or(false),
        }
    }

    /// Output options with built-in defaults filled in for absent keys.
    #[must_use]
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            human: self.output.human.unwrap_or(false),
            json: self.output.json.unwrap_or(false),
        }
    }
}

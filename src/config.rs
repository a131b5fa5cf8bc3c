//! TOML configuration file
//!
//! # Example bintrace.toml
//!
//! ```toml
//! format = "text"
//! diagrams = true
//!
//! [[preset]]
//! name = "primes"
//! values = "2, 3, 5, 7, 11, 13"
//! target = "11"
//! description = "Small primes, find 11"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::presets::Preset;

/// Root configuration for bintrace.toml
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output format when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Draw pointer diagrams in text and HTML output
    #[serde(default = "default_diagrams")]
    pub diagrams: bool,

    /// Extra examples, merged into the built-in gallery
    #[serde(default)]
    pub preset: Vec<Preset>,
}

fn default_diagrams() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            diagrams: default_diagrams(),
            preset: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// ```no_run
    /// use bintrace::config::Config;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::from_file("bintrace.toml")?;
    /// println!("Loaded {} presets", config.preset.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML")
    }
}

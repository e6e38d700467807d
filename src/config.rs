use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration for the `reading` subcommand.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BaziConfig {
    /// Reading output settings.
    #[serde(default)]
    pub reading: ReadingToml,
}

/// Controls which sections the reading document includes.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadingToml {
    /// Include the day-master element profile section.
    #[serde(default = "default_true")]
    pub include_profile: bool,
    /// Include the pillar interaction section.
    #[serde(default = "default_true")]
    pub include_interactions: bool,
    /// Pretty-print the JSON document.
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for ReadingToml {
    fn default() -> Self {
        Self {
            include_profile: true,
            include_interactions: true,
            pretty: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Loads configuration from a TOML file, or defaults if no path given.
pub fn load(path: Option<&Path>) -> Result<BaziConfig> {
    let Some(path) = path else {
        return Ok(BaziConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

//! Console configuration, read from an optional TOML file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings for the interactive console.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search depth in move pairs.
    pub depth: u32,
    /// Where the game transcript is written when a game ends.
    pub transcript_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth: 2,
            transcript_path: "game_transcript.json".to_string(),
        }
    }
}

impl Config {
    /// Loads the config from `path`, falling back to defaults when the
    /// file does not exist. A present-but-broken file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

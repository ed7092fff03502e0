//! Game transcript saved as JSON when a game ends.

use std::path::Path;

use anyhow::{Context, Result};
use cozy_chess::{Board, Move};
use serde::{Deserialize, Serialize};

/// The moves of one game, in order, with the starting position and the
/// final result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub starting_fen: String,
    pub moves: Vec<String>,
    pub result: String,
}

impl Transcript {
    pub fn new(start: &Board) -> Self {
        Self {
            starting_fen: start.to_string(),
            moves: Vec::new(),
            result: String::new(),
        }
    }

    pub fn record(&mut self, mv: Move) {
        self.moves.push(mv.to_string());
    }

    pub fn set_result(&mut self, result: &str) {
        self.result = result.to_string();
    }

    /// Writes the transcript as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize transcript")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

#[cfg(test)]
#[path = "transcript_tests.rs"]
mod transcript_tests;

//! Match results storage and reporting.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Outcome of a single game from one engine's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// Aggregate outcome of a match from engine 1's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Match score with draws counting half a point.
    pub fn score(&self) -> f64 {
        self.wins as f64 + self.draws as f64 * 0.5
    }

    pub fn score_percent(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            50.0
        } else {
            self.score() / games as f64 * 100.0
        }
    }
}

/// Serializable subset of the match configuration, embedded in reports
/// and loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSettings {
    pub num_games: u32,
    pub depth: u8,
    pub max_moves: u32,
    pub opening_plies: u32,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 1,
            max_moves: 200,
            opening_plies: 4,
        }
    }
}

impl MatchSettings {
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// Full report for one match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub settings: MatchSettings,
    pub result: MatchResult,
}

impl MatchReport {
    pub fn new(engine1: &str, engine2: &str, settings: MatchSettings, result: MatchResult) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            settings,
            result,
        }
    }

    /// Save the report to a JSON file.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Load a report from a JSON file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(io::Error::other)
    }

    /// One-line summary from engine 1's perspective.
    pub fn summary(&self) -> String {
        format!(
            "{} vs {}: {}-{}-{} ({:.1}%)",
            self.engine1,
            self.engine2,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score_percent()
        )
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;

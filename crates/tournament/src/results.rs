//! Match and tournament results, and reporting

use serde::{Deserialize, Serialize};
use ttt_core::{Move, Outcome};

/// Result of a single game from one engine's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flipped(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// A finished game, kept in memory only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub outcome: Outcome,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub engine1: String,
    pub engine2: String,
    pub result: MatchResult,
}

/// Per-engine totals across the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Standing {
    pub engine: String,
    pub result: MatchResult,
    /// Win = 1, draw = 0.5
    pub points: f64,
}

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating engines
    pub participants: Vec<String>,
    /// All match results (indexed by participant pairs)
    pub matches: Vec<MatchEntry>,
    pub games_per_match: u32,
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, games_per_match: u32) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            games_per_match,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, engine1: &str, engine2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            result,
        });
    }

    /// Totals per participant, best first. Ties keep participant order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut standings: Vec<Standing> = self
            .participants
            .iter()
            .map(|name| {
                let mut total = MatchResult::new();
                for entry in &self.matches {
                    let r = &entry.result;
                    if &entry.engine1 == name {
                        total.wins += r.wins;
                        total.losses += r.losses;
                        total.draws += r.draws;
                    } else if &entry.engine2 == name {
                        total.wins += r.losses;
                        total.losses += r.wins;
                        total.draws += r.draws;
                    }
                }
                let points = total.wins as f64 + 0.5 * total.draws as f64;
                Standing {
                    engine: name.clone(),
                    result: total,
                    points,
                }
            })
            .collect();
        standings.sort_by(|a, b| b.points.total_cmp(&a.points));
        standings
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!("Config: {} games/match\n\n", self.games_per_match));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
            "Engine 1", "Engine 2", "W", "L", "D"
        ));
        report.push_str(&"-".repeat(60));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5}-{:<5}\n",
                entry.engine1,
                entry.engine2,
                entry.result.wins,
                entry.result.losses,
                entry.result.draws
            ));
        }

        report.push_str("\nStandings:\n");
        for (rank, standing) in self.standings().iter().enumerate() {
            report.push_str(&format!(
                "{:>2}. {:<20} {:>5.1} pts  ({}-{}-{})\n",
                rank + 1,
                standing.engine,
                standing.points,
                standing.result.wins,
                standing.result.losses,
                standing.result.draws
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;

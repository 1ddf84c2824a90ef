//! Match runner for playing games between engines.

use chess12_core::{Board, Color, Engine, SearchLimits};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::{debug, info};

use crate::openings::play_random_opening;
use crate::results::{GameResult, MatchResult, MatchSettings};

/// Configuration for a match.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines; full-width search over this board's
    /// branching factor is expensive, so deeper search is opt-in
    pub depth: u8,
    /// Maximum time per move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Games longer than this are scored as draws
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during the match
    pub verbose: bool,
    /// Random plies played before the engines take over
    pub opening_plies: u32,
    /// Base seed for opening randomization; the game index is mixed in
    pub opening_seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 1,
            time_per_move: None,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
            opening_plies: 4,
            opening_seed: 0,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config.
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::depth(self.depth),
        }
    }

    /// Serializable subset for reports.
    pub fn settings(&self) -> MatchSettings {
        MatchSettings {
            num_games: self.num_games,
            depth: self.depth,
            max_moves: self.max_moves,
            opening_plies: self.opening_plies,
        }
    }
}

/// Runs matches between two engines.
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines.
    ///
    /// Returns the result from engine 1's perspective.
    pub fn run_match(&self, engine1: &mut dyn Engine, engine2: &mut dyn Engine) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2, game_num)
            } else {
                // Flip result since engine1 is black
                match self.play_game(engine2, engine1, game_num) {
                    GameResult::Win => GameResult::Loss,
                    GameResult::Loss => GameResult::Win,
                    GameResult::Draw => GameResult::Draw,
                }
            };

            result.record(game_result);
            info!(
                game = game_num + 1,
                outcome = ?game_result,
                "game finished"
            );

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game; the result is from White's perspective.
    fn play_game(&self, white: &mut dyn Engine, black: &mut dyn Engine, game_num: u32) -> GameResult {
        let mut board = Board::startpos();
        white.new_game();
        black.new_game();

        if self.config.opening_plies > 0 {
            let mut rng =
                StdRng::seed_from_u64(self.config.opening_seed.wrapping_add(game_num as u64));
            play_random_opening(&mut board, self.config.opening_plies, &mut rng);
        }

        for _ in 0..self.config.max_moves {
            if board.is_game_over() {
                break;
            }

            // Fresh search limits for each move (resets the clock)
            let limits = self.config.search_limits();
            let result = if board.turn() == Color::White {
                white.search(&board, limits)
            } else {
                black.search(&board, limits)
            };

            let Some(mv) = result.best_move else {
                // The game-over flag only trips on checkmate, so a side
                // without candidate moves simply ends the game undecided.
                debug!(side = ?board.turn(), "no candidate moves, scoring a draw");
                break;
            };
            if let Err(err) = board.move_piece(mv.from, mv.to) {
                debug!(%err, "engine move rejected, scoring a draw");
                break;
            }
        }

        match board.winner() {
            Some(Color::White) => GameResult::Win,
            Some(Color::Black) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }
}

/// Quick utility to run a single match.
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

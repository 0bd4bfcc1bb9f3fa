//! Squadro Tournament - Bot-versus-bot game playing
//!
//! This crate drives complete games with the random bot:
//! - Run configuration (seed, turn cap, player names)
//! - Single game runner
//! - Parallel batch matches with aggregate statistics
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 2: play_match (phases)
//! - Level 3: GameRunner::play_game (steps)
//! - Level 4: configuration

mod config;
mod game_runner;
mod match_play;

pub use config::{RunConfig, DEFAULT_MAX_TURNS};
pub use game_runner::{GameOutcome, GameRunner};
pub use match_play::{play_match, MatchError, MatchResult};

//! Squadro Core - Rule engine
//!
//! This crate provides the core game logic for Squadro:
//! - Track geometry (positions 0 to 12, folded lane crossings)
//! - Lane speeds for both seats
//! - Game state, move validation and chained captures
//! - ASCII board rendering
//! - Game records exchanged with the game server
//! - A random-move bot

pub mod board;
pub mod pieces;
pub mod error;
pub mod game;
pub mod render;
pub mod record;
pub mod ai;

// Re-exports for convenient access
pub use board::{Lane, NUM_LANES, START, TURNAROUND, FINISH};
pub use pieces::{Side, Speed, lane_speed};
pub use error::{MoveError, ValidationError};
pub use game::{GameState, Player, PlayerSpec, WINNING_FINISHED_PIECES};
pub use record::{GameList, GameRecord, GameSummary};
pub use ai::RandomBot;

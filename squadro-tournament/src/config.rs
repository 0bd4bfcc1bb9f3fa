//! Configuration types for bot games
//!
//! Level 4 - Utilities and configuration

use squadro_core::{GameState, ValidationError};

/// Default cap on turns before a game is abandoned
pub const DEFAULT_MAX_TURNS: u32 = 400;

/// Configuration for running bot games
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Random seed for reproducibility (None = 42)
    pub seed: Option<u64>,
    /// Turns (single moves) before the game is called unfinished
    pub max_turns: u32,
    /// Name of the player moving along rows
    pub first_player: String,
    /// Name of the player moving along columns
    pub second_player: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_turns: DEFAULT_MAX_TURNS,
            first_player: "player1".to_string(),
            second_player: "player2".to_string(),
        }
    }
}

impl RunConfig {
    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set turn cap
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set both player names
    pub fn with_players(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.first_player = first.into();
        self.second_player = second.into();
        self
    }

    /// Fresh game between the configured players
    pub fn initial_state(&self) -> Result<GameState, ValidationError> {
        GameState::new(self.first_player.as_str(), self.second_player.as_str())
    }
}

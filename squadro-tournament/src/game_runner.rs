//! Game runner - executes single games
//!
//! Level 3 - Step-level implementation

use squadro_core::{GameState, MoveError, RandomBot, Side};

use crate::config::RunConfig;

/// Outcome of a single game
#[derive(Clone, Debug)]
pub struct GameOutcome {
    /// Seat of the winner (None if the turn cap was hit)
    pub winning_side: Option<Side>,
    /// Name of the winner
    pub winner: Option<String>,
    /// Number of moves played
    pub turns: u32,
    /// Move history as (player, piece)
    pub moves: Vec<(String, usize)>,
    /// Board when the game stopped
    pub final_state: GameState,
}

impl GameOutcome {
    /// Check if the game ended without a winner
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Game runner that plays games between two random bots
pub struct GameRunner {
    config: RunConfig,
    /// Random seed counter
    seed_counter: u64,
}

impl GameRunner {
    /// Create a new game runner
    pub fn new(config: RunConfig) -> Self {
        let seed_counter = config.seed.unwrap_or(squadro_core::ai::DEFAULT_SEED);
        Self {
            config,
            seed_counter,
        }
    }

    /// Play a single game from `initial`, `to_move` taking the first turn
    pub fn play_game(&mut self, initial: GameState, to_move: Side) -> Result<GameOutcome, MoveError> {
        let mut bots = [
            RandomBot::with_seed(self.next_seed()),
            RandomBot::with_seed(self.next_seed()),
        ];
        let mut state = initial;
        let mut side = to_move;
        let mut moves = Vec::new();

        while !state.is_finished() && (moves.len() as u32) < self.config.max_turns {
            let name = state.player(side).name.clone();
            match bots[side.index()].play_turn(&mut state, &name)? {
                Some((player, piece)) => {
                    tracing::debug!("{} moves piece {}", player, piece);
                    moves.push((player, piece));
                }
                None => break,
            }
            side = side.opponent();
        }

        let winning_side = state.winner().and_then(|name| state.side_of(name));
        Ok(GameOutcome {
            winning_side,
            winner: state.winner().map(str::to_string),
            turns: moves.len() as u32,
            moves,
            final_state: state,
        })
    }

    /// Get next seed and increment counter
    fn next_seed(&mut self) -> u64 {
        let seed = self.seed_counter;
        self.seed_counter = self.seed_counter.wrapping_add(1);
        seed
    }

    /// Reset seed counter
    pub fn reset_seed(&mut self, seed: u64) {
        self.seed_counter = seed;
    }

    /// Get configuration
    pub fn config(&self) -> &RunConfig {
        &self.config
    }
}

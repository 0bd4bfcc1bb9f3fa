//! Random-move bot

use crate::error::MoveError;
use crate::game::GameState;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Seed used when none is given
pub const DEFAULT_SEED: u64 = 42;

/// Bot that plays a uniformly random unfinished piece
pub struct RandomBot {
    rng: ChaCha8Rng,
}

impl RandomBot {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Pick a piece (1-based) for the named player without moving it.
    ///
    /// Returns `Ok(None)` once the game is over.
    pub fn choose_piece(&mut self, state: &GameState, name: &str) -> Result<Option<usize>, MoveError> {
        let side = state
            .side_of(name)
            .ok_or_else(|| MoveError::UnknownPlayer(name.to_string()))?;
        Ok(select_random_piece(&state.movable_pieces(side), &mut self.rng))
    }

    /// Play one turn for the named player.
    ///
    /// Returns the player and the piece moved, or `None` if the game was
    /// already over.
    pub fn play_turn(
        &mut self,
        state: &mut GameState,
        name: &str,
    ) -> Result<Option<(String, usize)>, MoveError> {
        if state.is_finished() {
            return Ok(None);
        }
        let piece = match self.choose_piece(state, name)? {
            Some(piece) => piece,
            None => return Ok(None),
        };
        state.apply_move(name, piece)?;
        Ok(Some((name.to_string(), piece)))
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

/// Select a piece uniformly from the candidates
pub fn select_random_piece<R: Rng>(pieces: &[usize], rng: &mut R) -> Option<usize> {
    pieces.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerSpec;
    use crate::pieces::Side;

    fn spec(name: &str, pieces: [i64; 5]) -> PlayerSpec {
        PlayerSpec::Full {
            name: name.into(),
            pieces: pieces.to_vec(),
        }
    }

    #[test]
    fn test_never_picks_finished_piece() {
        let state = GameState::new(spec("alice", [12, 12, 0, 12, 5]), "bob").unwrap();
        let mut bot = RandomBot::with_seed(7);
        for _ in 0..100 {
            let piece = bot.choose_piece(&state, "alice").unwrap().unwrap();
            assert!(piece == 3 || piece == 5, "picked {}", piece);
        }
    }

    #[test]
    fn test_seeded_bots_agree() {
        let state = GameState::new("alice", "bob").unwrap();
        let mut a = RandomBot::with_seed(99);
        let mut b = RandomBot::with_seed(99);
        for _ in 0..20 {
            assert_eq!(
                a.choose_piece(&state, "alice").unwrap(),
                b.choose_piece(&state, "alice").unwrap()
            );
        }
    }

    #[test]
    fn test_play_turn_moves_one_piece() {
        let mut state = GameState::new("alice", "bob").unwrap();
        let mut bot = RandomBot::new();
        let (name, piece) = bot.play_turn(&mut state, "bob").unwrap().unwrap();
        assert_eq!(name, "bob");
        assert_ne!(state.player(Side::Second).pieces[piece - 1], 0);
        assert_eq!(state.player(Side::First).pieces, [0; 5]);
    }

    #[test]
    fn test_play_turn_after_game_over() {
        let mut state = GameState::new(spec("alice", [12, 12, 12, 12, 0]), "bob").unwrap();
        let before = state.clone();
        let mut bot = RandomBot::new();
        assert_eq!(bot.play_turn(&mut state, "bob").unwrap(), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_play_turn_unknown_player() {
        let mut state = GameState::new("alice", "bob").unwrap();
        let mut bot = RandomBot::new();
        assert_eq!(
            bot.play_turn(&mut state, "mallory"),
            Err(MoveError::UnknownPlayer("mallory".into()))
        );
    }

    #[test]
    fn test_select_random_piece_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(select_random_piece(&[], &mut rng), None);
        assert_eq!(select_random_piece(&[4], &mut rng), Some(4));
    }
}

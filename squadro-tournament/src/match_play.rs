//! Match play - many seeded games between two random bots
//!
//! Level 2 - Phase-level implementation

use rayon::prelude::*;
use squadro_core::{MoveError, Side, ValidationError};

use crate::config::RunConfig;
use crate::game_runner::{GameOutcome, GameRunner};

/// Error raised while playing a match
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("invalid starting position: {0}")]
    Setup(#[from] ValidationError),
    #[error("bot made an illegal move: {0}")]
    Move(#[from] MoveError),
}

/// Result of a match (multiple games)
#[derive(Clone, Debug)]
pub struct MatchResult {
    /// Wins for the first player
    pub first_wins: u32,
    /// Wins for the second player
    pub second_wins: u32,
    /// Games that hit the turn cap
    pub unfinished: u32,
    /// Average game length in turns
    pub avg_turns: f32,
    /// Total games played
    pub games_played: u32,
    /// Individual game outcomes, in game order
    pub outcomes: Vec<GameOutcome>,
}

impl MatchResult {
    /// Create empty result
    pub fn empty() -> Self {
        Self {
            first_wins: 0,
            second_wins: 0,
            unfinished: 0,
            avg_turns: 0.0,
            games_played: 0,
            outcomes: Vec::new(),
        }
    }

    fn rate(&self, count: u32) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            count as f32 / self.games_played as f32
        }
    }

    /// Get win rate for the first player
    pub fn first_win_rate(&self) -> f32 {
        self.rate(self.first_wins)
    }

    /// Get win rate for the second player
    pub fn second_win_rate(&self) -> f32 {
        self.rate(self.second_wins)
    }

    /// Share of games that never finished
    pub fn unfinished_rate(&self) -> f32 {
        self.rate(self.unfinished)
    }
}

/// Play a match of `games` games in parallel (Level 2 phase)
///
/// Game `n` is seeded with `base_seed + n` and opens with the first player,
/// so the result only depends on the configuration.
pub fn play_match(config: &RunConfig, games: usize) -> Result<MatchResult, MatchError> {
    if games == 0 {
        return Ok(MatchResult::empty());
    }

    let initial = config.initial_state()?;
    let base_seed = config.seed.unwrap_or(squadro_core::ai::DEFAULT_SEED);

    let outcomes = (0..games)
        .into_par_iter()
        .map(|game_index| {
            let seed = base_seed.wrapping_add(game_index as u64);
            play_single_game(config, initial.clone(), game_index, seed)
        })
        .collect::<Result<Vec<_>, MoveError>>()?;

    Ok(aggregate_results(outcomes))
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Play one seeded game of the match
fn play_single_game(
    config: &RunConfig,
    initial: squadro_core::GameState,
    game_index: usize,
    seed: u64,
) -> Result<GameOutcome, MoveError> {
    let mut runner = GameRunner::new(config.clone().with_seed(seed));
    let outcome = runner.play_game(initial, Side::First)?;
    tracing::info!(
        "game {} finished after {} turns, winner: {}",
        game_index + 1,
        outcome.turns,
        outcome.winner.as_deref().unwrap_or("none")
    );
    Ok(outcome)
}

/// Aggregate game outcomes into match result
fn aggregate_results(outcomes: Vec<GameOutcome>) -> MatchResult {
    let mut result = MatchResult::empty();
    let mut total_turns = 0u64;

    for outcome in &outcomes {
        match outcome.winning_side {
            Some(Side::First) => result.first_wins += 1,
            Some(Side::Second) => result.second_wins += 1,
            None => result.unfinished += 1,
        }
        total_turns += outcome.turns as u64;
    }

    result.games_played = outcomes.len() as u32;
    result.avg_turns = total_turns as f32 / result.games_played.max(1) as f32;
    result.outcomes = outcomes;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_match() {
        let result = play_match(&RunConfig::default(), 0).unwrap();
        assert_eq!(result.games_played, 0);
        assert_eq!(result.first_win_rate(), 0.0);
        assert_eq!(result.unfinished_rate(), 0.0);
    }

    #[test]
    fn test_match_counts_add_up() {
        let result = play_match(&RunConfig::default().with_seed(5), 20).unwrap();
        assert_eq!(result.games_played, 20);
        assert_eq!(result.outcomes.len(), 20);
        assert_eq!(
            result.first_wins + result.second_wins + result.unfinished,
            result.games_played
        );
        assert!(result.avg_turns > 0.0);
        let rates = result.first_win_rate() + result.second_win_rate() + result.unfinished_rate();
        assert!((rates - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_match_is_deterministic() {
        let config = RunConfig::default().with_seed(1234);
        let a = play_match(&config, 8).unwrap();
        let b = play_match(&config, 8).unwrap();
        assert_eq!(a.first_wins, b.first_wins);
        assert_eq!(a.second_wins, b.second_wins);
        for (x, y) in a.outcomes.iter().zip(&b.outcomes) {
            assert_eq!(x.moves, y.moves);
        }
    }

    #[test]
    fn test_turn_cap_counts_unfinished() {
        let config = RunConfig::default().with_max_turns(4);
        let result = play_match(&config, 6).unwrap();
        assert_eq!(result.unfinished, 6);
        assert_eq!(result.avg_turns, 4.0);
    }

    #[test]
    fn test_duplicate_player_names_rejected() {
        let config = RunConfig::default().with_players("same", "same");
        assert!(matches!(
            play_match(&config, 3),
            Err(MatchError::Setup(ValidationError::DuplicateName(_)))
        ));
    }
}

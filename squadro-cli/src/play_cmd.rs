//! Play command - one random-bot game, printed move by move
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_start(), play_game(), report_game()
//! - Level 3: replay_moves(), next_to_move()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use squadro_core::{GameRecord, GameState, Side};
use squadro_tournament::{GameOutcome, GameRunner, RunConfig, DEFAULT_MAX_TURNS};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Resume from a saved game record (JSON)
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Maximum turns before the game is abandoned
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    pub max_turns: u32,

    /// Print the final game record as JSON
    #[arg(long)]
    pub json: bool,

    /// Only print the result
    #[arg(long)]
    pub quiet: bool,
}

/// Where a game starts from
struct Start {
    id: String,
    state: GameState,
    to_move: Side,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Load or create the starting position
/// 2. Let two random bots play it out
/// 3. Report the game
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let start = load_start(&args)?;

    tracing::info!(
        "Starting game {} with {} to move",
        start.id,
        start.state.player(start.to_move).name
    );

    let outcome = play_game(&start, &args, seed)?;

    report_game(&start, &outcome, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Read the record file, or set up a fresh game
fn load_start(args: &PlayArgs) -> Result<Start> {
    let Some(path) = &args.state else {
        let config = RunConfig::default();
        return Ok(Start {
            id: "local".to_string(),
            state: config.initial_state()?,
            to_move: Side::First,
        });
    };

    let record = GameRecord::load(path)
        .with_context(|| format!("Failed to load game record: {}", path.display()))?;
    let state = record
        .to_game()
        .with_context(|| format!("Invalid game state in {}", path.display()))?;
    let to_move = state
        .side_of(&record.next_player)
        .with_context(|| format!("Next player {:?} is not in the game", record.next_player))?;

    Ok(Start {
        id: record.id,
        state,
        to_move,
    })
}

/// Play the game out with seeded bots
fn play_game(start: &Start, args: &PlayArgs, seed: Option<u64>) -> Result<GameOutcome> {
    let mut config = RunConfig::default().with_max_turns(args.max_turns);
    config.seed = seed;
    let mut runner = GameRunner::new(config);
    let outcome = runner.play_game(start.state.clone(), start.to_move)?;
    Ok(outcome)
}

/// Print boards, winner or final record
fn report_game(start: &Start, outcome: &GameOutcome, args: &PlayArgs) -> Result<()> {
    if args.json {
        let next = next_to_move(start.to_move, outcome.turns);
        let next_player = &outcome.final_state.player(next).name;
        let record = GameRecord::from_game(start.id.as_str(), next_player.as_str(), &outcome.final_state);
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    if !args.quiet {
        println!("{}\n", start.state);
        for (turn, (player, piece), board) in replay_moves(&start.state, &outcome.moves)? {
            println!("{}", format_move(turn, &player, piece));
            println!("{}\n", board);
        }
    }
    println!("{}", format_result(outcome));
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Rebuild each intermediate board from the move list
fn replay_moves(
    initial: &GameState,
    moves: &[(String, usize)],
) -> Result<Vec<(usize, (String, usize), GameState)>> {
    let mut state = initial.clone();
    let mut boards = Vec::with_capacity(moves.len());
    for (i, (player, piece)) in moves.iter().enumerate() {
        state = state.after_move(player, *piece)?;
        boards.push((i + 1, (player.clone(), *piece), state.clone()));
    }
    Ok(boards)
}

/// Side to move after `turns` alternating moves
fn next_to_move(first: Side, turns: u32) -> Side {
    if turns % 2 == 0 {
        first
    } else {
        first.opponent()
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn format_move(turn: usize, player: &str, piece: usize) -> String {
    format!("Turn {}: {} moves piece {}", turn, player, piece)
}

fn format_result(outcome: &GameOutcome) -> String {
    match &outcome.winner {
        Some(winner) => format!("Winner: {} after {} turns", winner, outcome.turns),
        None => format!("No winner after {} turns", outcome.turns),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_to_move() {
        assert_eq!(next_to_move(Side::First, 0), Side::First);
        assert_eq!(next_to_move(Side::First, 3), Side::Second);
        assert_eq!(next_to_move(Side::Second, 4), Side::Second);
    }

    #[test]
    fn test_replay_matches_final_state() {
        let initial = GameState::new("alice", "bob").unwrap();
        let mut runner = GameRunner::new(RunConfig::default().with_seed(8));
        let outcome = runner.play_game(initial.clone(), Side::First).unwrap();

        let boards = replay_moves(&initial, &outcome.moves).unwrap();
        assert_eq!(boards.len(), outcome.moves.len());
        assert_eq!(boards[0].0, 1);
        assert_eq!(boards.last().unwrap().2, outcome.final_state);
    }

    #[test]
    fn test_replay_rejects_bad_move() {
        let initial = GameState::new("alice", "bob").unwrap();
        let moves = vec![("mallory".to_string(), 1)];
        assert!(replay_moves(&initial, &moves).is_err());
    }

    #[test]
    fn test_format_result() {
        let state = GameState::new("alice", "bob").unwrap();
        let outcome = GameOutcome {
            winning_side: None,
            winner: None,
            turns: 7,
            moves: vec![],
            final_state: state,
        };
        assert_eq!(format_result(&outcome), "No winner after 7 turns");
        assert_eq!(format_move(2, "bob", 4), "Turn 2: bob moves piece 4");
    }
}

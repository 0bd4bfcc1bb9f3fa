//! Match command - many seeded random-bot games
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_match(), report_results()
//! - Level 3: build_json_output()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use squadro_tournament::{MatchResult, RunConfig, DEFAULT_MAX_TURNS};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Maximum turns per game
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    pub max_turns: u32,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    let mut config = RunConfig::default().with_max_turns(args.max_turns);
    config.seed = seed;

    tracing::info!(
        "Starting match: {} games, max {} turns",
        args.games,
        args.max_turns
    );

    let results = play_match(&config, args.games)?;

    report_results(&results, &config, &args)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn play_match(config: &RunConfig, games: usize) -> Result<MatchResult> {
    Ok(squadro_tournament::play_match(config, games)?)
}

fn report_results(results: &MatchResult, config: &RunConfig, args: &MatchArgs) -> Result<()> {
    if args.json {
        let output = build_json_output(results, config);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text_results(results, config);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

#[derive(Serialize)]
struct JsonGame {
    game_number: usize,
    winner: Option<String>,
    turns: u32,
}

#[derive(Serialize)]
struct JsonOutput {
    total_games: u32,
    first_player: String,
    second_player: String,
    first_wins: u32,
    second_wins: u32,
    unfinished: u32,
    avg_turns: f32,
    first_win_rate: f32,
    games: Vec<JsonGame>,
}

fn build_json_output(results: &MatchResult, config: &RunConfig) -> JsonOutput {
    JsonOutput {
        total_games: results.games_played,
        first_player: config.first_player.clone(),
        second_player: config.second_player.clone(),
        first_wins: results.first_wins,
        second_wins: results.second_wins,
        unfinished: results.unfinished,
        avg_turns: results.avg_turns,
        first_win_rate: results.first_win_rate(),
        games: results
            .outcomes
            .iter()
            .enumerate()
            .map(|(i, g)| JsonGame {
                game_number: i + 1,
                winner: g.winner.clone(),
                turns: g.turns,
            })
            .collect(),
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn percent(rate: f32) -> f32 {
    rate * 100.0
}

/// Print results as text
fn print_text_results(results: &MatchResult, config: &RunConfig) {
    println!("\n=== Match Results ===");
    println!("Total games: {}", results.games_played);
    println!(
        "{} wins: {} ({:.1}%)",
        config.first_player,
        results.first_wins,
        percent(results.first_win_rate())
    );
    println!(
        "{} wins: {} ({:.1}%)",
        config.second_player,
        results.second_wins,
        percent(results.second_win_rate())
    );
    println!(
        "Unfinished:   {} ({:.1}%)",
        results.unfinished,
        percent(results.unfinished_rate())
    );
    println!("Avg turns:    {:.1}", results.avg_turns);

    println!("\nGame details:");
    for (i, game) in results.outcomes.iter().enumerate() {
        println!(
            "  Game {}: {} in {} turns",
            i + 1,
            game.winner.as_deref().unwrap_or("no winner"),
            game.turns
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================

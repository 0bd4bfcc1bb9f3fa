//! Squadro CLI - Command-line interface
//!
//! Commands:
//! - play: Bot-versus-bot game from a fresh or saved position
//! - match: Batch of seeded bot games with statistics
//! - show: Render a saved game record
//! - list: Numbered history of games

mod list_cmd;
mod match_cmd;
mod play_cmd;
mod show_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "squadro")]
#[command(about = "Squadro rule engine and random-bot runner")]
struct Cli {
    /// Random seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single bot-versus-bot game
    Play(play_cmd::PlayArgs),
    /// Play many games and report statistics
    Match(match_cmd::MatchArgs),
    /// Print the board of a saved game
    Show(show_cmd::ShowArgs),
    /// Print a numbered list of games
    List(list_cmd::ListArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG overrides)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
        Commands::Show(args) => show_cmd::run(args),
        Commands::List(args) => list_cmd::run(args),
    }
}

//! Show command - print a saved game

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use squadro_core::GameRecord;

#[derive(Args)]
pub struct ShowArgs {
    /// Game record JSON file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Run show command
pub fn run(args: ShowArgs) -> Result<()> {
    let record = GameRecord::load(&args.file)
        .with_context(|| format!("Failed to load game record: {}", args.file.display()))?;
    println!("{}", describe(&record)?);
    Ok(())
}

/// Header line and board for a record
fn describe(record: &GameRecord) -> Result<String> {
    let state = record
        .to_game()
        .with_context(|| format!("Invalid game state in record {}", record.id))?;
    let status = match state.winner() {
        Some(winner) => format!("winner: {}", winner),
        None => format!("next: {}", record.next_player),
    };
    Ok(format!("Game {} ({})\n\n{}", record.id, status, state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use squadro_core::GameState;

    #[test]
    fn test_describe_running_game() {
        let state = GameState::new("alice", "bob").unwrap();
        let record = GameRecord::from_game("g7", "bob", &state);
        let text = describe(&record).unwrap();
        assert!(text.starts_with("Game g7 (next: bob)\n\n"));
        assert!(text.ends_with(&state.to_string()));
    }

    #[test]
    fn test_describe_rejects_duplicate_names() {
        let mut record = GameRecord::from_game("g8", "alice", &GameState::new("alice", "bob").unwrap());
        record.state[1].name = "alice".to_string();
        assert!(describe(&record).is_err());
    }
}

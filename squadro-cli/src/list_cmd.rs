//! List command - numbered history of games

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use squadro_core::{GameList, GameSummary};

#[derive(Args)]
pub struct ListArgs {
    /// JSON array of game summaries
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let content = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read game list: {}", args.file.display()))?;
    let games = parse_summaries(&content)
        .with_context(|| format!("Invalid game list in {}", args.file.display()))?;

    tracing::debug!("{} games listed", games.len());
    print!("{}", GameList(&games));
    Ok(())
}

fn parse_summaries(content: &str) -> Result<Vec<GameSummary>> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_listing() {
        let games = parse_summaries(
            r#"[
                {"id": "a1", "date": "2020-03-01", "joueurs": ["alice", "robot"], "gagnant": "robot"},
                {"id": "a2", "date": "2020-03-02", "players": ["alice", "bob"]}
            ]"#,
        )
        .unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(
            GameList(&games).to_string(),
            "1 : 2020-03-01, alice vs robot, winner: robot\n2 : 2020-03-02, alice vs bob\n"
        );
    }

    #[test]
    fn test_parse_rejects_non_list() {
        assert!(parse_summaries(r#"{"id": "a1"}"#).is_err());
    }
}

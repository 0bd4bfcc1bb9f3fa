//! Game records as exchanged with the game server

use crate::error::ValidationError;
use crate::game::{GameState, Player};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A game as the server describes it: id, whose turn it is, and the state
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    #[serde(alias = "prochain_joueur")]
    pub next_player: String,
    #[serde(alias = "état")]
    pub state: [Player; 2],
    #[serde(default, alias = "gagnant", skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

impl GameRecord {
    /// Capture a running game
    pub fn from_game(id: impl Into<String>, next_player: impl Into<String>, game: &GameState) -> Self {
        let (first, second) = game.snapshot();
        Self {
            id: id.into(),
            next_player: next_player.into(),
            state: [first, second],
            winner: game.winner().map(str::to_string),
        }
    }

    /// Rebuild the engine state
    pub fn to_game(&self) -> Result<GameState, ValidationError> {
        let [first, second] = self.state.clone();
        GameState::from_players(first, second)
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let record: GameRecord = serde_json::from_str(&content)?;
        Ok(record)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// One line of a player's game history
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: String,
    pub date: String,
    #[serde(alias = "joueurs")]
    pub players: [String; 2],
    #[serde(default, alias = "gagnant")]
    pub winner: Option<String>,
}

/// Numbered listing of games, one per line
pub struct GameList<'a>(pub &'a [GameSummary]);

impl fmt::Display for GameList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, game) in self.0.iter().enumerate() {
            let sep = if i < 9 { " : " } else { ": " };
            write!(
                f,
                "{}{}{}, {} vs {}",
                i + 1,
                sep,
                game.date,
                game.players[0],
                game.players[1]
            )?;
            if let Some(winner) = &game.winner {
                write!(f, ", winner: {}", winner)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

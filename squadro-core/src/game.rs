//! Game state, move validation and the capture mechanic

use crate::board::{
    is_outbound, is_valid_position, lane_cell, on_crossing, reset_position, Lane, FINISH,
    NUM_LANES, START, TURNAROUND,
};
use crate::error::{MoveError, ValidationError};
use crate::pieces::{lane_speed, Side};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Finished pieces a player needs to win the game
pub const WINNING_FINISHED_PIECES: usize = 4;

// ============================================================================
// CORE TYPES
// ============================================================================

/// A player and the positions of their five pieces
///
/// Deserializing goes through [`PlayerSpec`], so a bare name is accepted and
/// positions are range checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Player {
    pub name: String,
    pub pieces: [u8; NUM_LANES],
}

impl Player {
    /// New player with every piece at the start
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pieces: [START; NUM_LANES],
        }
    }

    /// Number of pieces back home
    pub fn finished_count(&self) -> usize {
        self.pieces.iter().filter(|&&p| p == FINISH).count()
    }

    /// Position of a piece (1-based)
    pub fn piece(&self, piece: usize) -> Option<u8> {
        piece.checked_sub(1).and_then(|i| self.pieces.get(i)).copied()
    }
}

impl TryFrom<Value> for Player {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        PlayerSpec::from_value(&value)?.into_player()
    }
}

/// How a player is described when a game is created
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerSpec {
    /// Fresh player, all pieces at the start
    Name(String),
    /// Player resumed with explicit positions (checked on construction)
    Full { name: String, pieces: Vec<i64> },
}

impl PlayerSpec {
    /// Read a spec from loosely typed JSON.
    ///
    /// Accepts a string, or an object with `name`/`pieces` (or the
    /// `nom`/`pions` keys used by the game server).
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        let map = match value {
            Value::String(name) => return Ok(PlayerSpec::Name(name.clone())),
            Value::Object(map) => map,
            _ => return Err(ValidationError::InvalidSpec),
        };

        let name = map.get("name").or_else(|| map.get("nom"));
        let pieces = map.get("pieces").or_else(|| map.get("pions"));
        let (name, pieces) = match (name, pieces) {
            (Some(name), Some(pieces)) => (name, pieces),
            _ => return Err(ValidationError::InvalidSpec),
        };

        let name = name.as_str().ok_or(ValidationError::NameNotText)?;
        let pieces = pieces.as_array().ok_or(ValidationError::PiecesNotList)?;
        if pieces.len() != NUM_LANES {
            return Err(ValidationError::WrongPieceCount(pieces.len()));
        }

        let pieces = pieces
            .iter()
            .map(|p| match (p.as_i64(), p.as_u64()) {
                (Some(position), _) => Ok(position),
                (None, Some(big)) => Err(ValidationError::PositionOutOfRange(big.into())),
                (None, None) => Err(ValidationError::NonIntegerPosition),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PlayerSpec::Full {
            name: name.to_string(),
            pieces,
        })
    }

    /// Name of the described player
    pub fn name(&self) -> &str {
        match self {
            PlayerSpec::Name(name) => name,
            PlayerSpec::Full { name, .. } => name,
        }
    }

    /// Validate and build the player
    pub fn into_player(self) -> Result<Player, ValidationError> {
        match self {
            PlayerSpec::Name(name) => Ok(Player::new(name)),
            PlayerSpec::Full { name, pieces } => {
                if pieces.len() != NUM_LANES {
                    return Err(ValidationError::WrongPieceCount(pieces.len()));
                }
                let mut positions = [START; NUM_LANES];
                for (slot, &position) in positions.iter_mut().zip(&pieces) {
                    if !is_valid_position(position) {
                        return Err(ValidationError::PositionOutOfRange(position.into()));
                    }
                    *slot = position as u8;
                }
                Ok(Player {
                    name,
                    pieces: positions,
                })
            }
        }
    }
}

impl From<&str> for PlayerSpec {
    fn from(name: &str) -> Self {
        PlayerSpec::Name(name.to_string())
    }
}

impl From<String> for PlayerSpec {
    fn from(name: String) -> Self {
        PlayerSpec::Name(name)
    }
}

impl From<Player> for PlayerSpec {
    fn from(player: Player) -> Self {
        PlayerSpec::Full {
            name: player.name,
            pieces: player.pieces.iter().map(|&p| p as i64).collect(),
        }
    }
}

/// Every piece of a built player must still be on the track
fn check_positions(player: &Player) -> Result<(), ValidationError> {
    match player.pieces.iter().find(|&&p| p > FINISH) {
        Some(&position) => Err(ValidationError::PositionOutOfRange(position.into())),
        None => Ok(()),
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Authoritative state of one game
///
/// Only [`GameState::apply_move`] mutates it. Readers get shared references
/// or copies through [`GameState::snapshot`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    players: [Player; 2],
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a game from two player specs, first player first
    pub fn new(
        first: impl Into<PlayerSpec>,
        second: impl Into<PlayerSpec>,
    ) -> Result<Self, ValidationError> {
        let first = first.into().into_player()?;
        let second = second.into().into_player()?;
        Self::from_players(first, second)
    }

    /// Create a game from two loosely typed JSON specs
    pub fn from_json(first: &Value, second: &Value) -> Result<Self, ValidationError> {
        Self::new(PlayerSpec::from_value(first)?, PlayerSpec::from_value(second)?)
    }

    /// Create a game from two already built players
    pub fn from_players(first: Player, second: Player) -> Result<Self, ValidationError> {
        check_positions(&first)?;
        check_positions(&second)?;
        if first.name == second.name {
            return Err(ValidationError::DuplicateName(first.name));
        }
        Ok(Self {
            players: [first, second],
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Independent copy of both players
    pub fn snapshot(&self) -> (Player, Player) {
        let [first, second] = self.players.clone();
        (first, second)
    }

    /// Both players, first player first
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Player in a seat
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Seat of the named player
    pub fn side_of(&self, name: &str) -> Option<Side> {
        if self.players[0].name == name {
            Some(Side::First)
        } else if self.players[1].name == name {
            Some(Side::Second)
        } else {
            None
        }
    }

    /// Name of the winner, if any
    pub fn winner(&self) -> Option<&str> {
        self.players
            .iter()
            .find(|p| p.finished_count() >= WINNING_FINISHED_PIECES)
            .map(|p| p.name.as_str())
    }

    /// Check if the game is over
    pub fn is_finished(&self) -> bool {
        self.winner().is_some()
    }

    /// Pieces (1-based) a side may still move
    pub fn movable_pieces(&self, side: Side) -> Vec<usize> {
        if self.is_finished() {
            return vec![];
        }
        self.player(side)
            .pieces
            .iter()
            .enumerate()
            .filter(|(_, &p)| p < FINISH)
            .map(|(i, _)| i + 1)
            .collect()
    }

    // ========================================================================
    // APPLY MOVE
    // ========================================================================

    /// Move a piece (1-based) of the named player.
    ///
    /// Every check runs before the board is touched, so a rejected move
    /// leaves the state unchanged.
    pub fn apply_move(&mut self, name: &str, piece: usize) -> Result<(), MoveError> {
        let side = self.validate_move(name, piece)?;
        self.advance_piece(side, piece as Lane);
        Ok(())
    }

    /// Apply move, return new state
    pub fn after_move(&self, name: &str, piece: usize) -> Result<Self, MoveError> {
        let mut new_state = self.clone();
        new_state.apply_move(name, piece)?;
        Ok(new_state)
    }

    fn validate_move(&self, name: &str, piece: usize) -> Result<Side, MoveError> {
        if !(1..=NUM_LANES).contains(&piece) {
            return Err(MoveError::InvalidPieceIndex(piece));
        }

        let side = self
            .side_of(name)
            .ok_or_else(|| MoveError::UnknownPlayer(name.to_string()))?;

        if let Some(winner) = self.winner() {
            return Err(MoveError::GameAlreadyFinished {
                winner: winner.to_string(),
            });
        }

        if self.player(side).pieces[piece - 1] >= FINISH {
            return Err(MoveError::PieceAlreadyHome(piece));
        }

        Ok(side)
    }

    /// Walk a piece forward one unit at a time, capturing on crossings.
    ///
    /// Stops early at the turnaround (when the move started outbound), at
    /// home, or right after a capture.
    fn advance_piece(&mut self, side: Side, lane: Lane) {
        let index = lane as usize - 1;
        let [first, second] = &mut self.players;
        let (mover, opponent) = match side {
            Side::First => (first, second),
            Side::Second => (second, first),
        };

        let position = &mut mover.pieces[index];
        let started_outbound = is_outbound(*position);
        let steps = lane_speed(side, lane).steps_from(*position);

        for _ in 0..steps {
            *position += 1;

            let mut captured = false;
            while let Some(cell) = lane_cell(*position) {
                let other = &mut opponent.pieces[cell as usize - 1];
                if !on_crossing(*other, lane) {
                    break;
                }
                *other = reset_position(*other);
                *position += 1;
                captured = true;
            }

            if started_outbound && *position >= TURNAROUND {
                *position = TURNAROUND;
                break;
            }
            if *position >= FINISH {
                *position = FINISH;
                break;
            }
            if captured {
                break;
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

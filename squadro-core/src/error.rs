//! Error types for game construction and moves

/// Malformed player specification at construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("player must be a name or an object with a name and pieces")]
    InvalidSpec,

    #[error("player name must be a string")]
    NameNotText,

    #[error("pieces must be a list")]
    PiecesNotList,

    #[error("pieces must hold exactly 5 positions, got {0}")]
    WrongPieceCount(usize),

    #[error("piece positions must be integers")]
    NonIntegerPosition,

    #[error("piece positions must be between 0 and 12 inclusive, got {0}")]
    PositionOutOfRange(i128),

    #[error("both players are named {0:?}")]
    DuplicateName(String),
}

/// Rejected move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no player named {0:?} in this game")]
    UnknownPlayer(String),

    #[error("piece number must be between 1 and 5 inclusive, got {0}")]
    InvalidPieceIndex(usize),

    #[error("game is already over, {winner} won")]
    GameAlreadyFinished { winner: String },

    #[error("piece {0} has already reached home")]
    PieceAlreadyHome(usize),
}

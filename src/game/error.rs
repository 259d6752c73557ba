//! Error types for game module
//!
//! Provides custom error types for square construction, piece placement and
//! question selection.

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// File/rank or index outside the board
    #[error("Invalid coordinate: {message}")]
    InvalidCoordinate { message: String },

    /// Malformed algebraic notation
    #[error("Invalid square notation {notation:?}: {reason}")]
    InvalidNotation { notation: String, reason: String },

    /// Name that does not map to any piece type
    #[error("Unknown piece type: {name:?}")]
    UnknownPieceType { name: String },

    /// No square on the board is reachable by exactly one piece
    #[error("No singular square available on the current board")]
    NoSingularSquare,

    /// Operation requires a posed question but none exists yet
    #[error("No question has been posed yet")]
    NoQuestion,
}

impl GameError {
    pub(crate) fn notation(notation: &str, reason: impl Into<String>) -> Self {
        GameError::InvalidNotation {
            notation: notation.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

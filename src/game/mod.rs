//! Game logic module - the board/move/selection engine
//!
//! Pure, synchronous game logic with the random source injected by the
//! caller. Nothing here performs I/O.
//!
//! # Module Organization
//!
//! - `types` - Square coordinates, notation and color
//! - `rules` - Piece movement and board reach queries
//! - `session` - The [`Game`] progression state machine
//! - `outcome` - Phase and per-round results
//! - `error` - [`GameError`] and [`GameResult`]

pub mod error;
pub mod outcome;
pub mod rules;
pub mod session;
pub mod types;

// Re-export the main entry points
pub use error::{GameError, GameResult};
pub use outcome::{GamePhase, RoundOutcome};
pub use rules::{Board, Piece, PieceType};
pub use session::{Game, LEVELS, MAX_LEVEL, QUESTIONS_PER_LEVEL, WIN_SCORE};
pub use types::{Square, SquareColor};

//! Chess rules module - pure movement logic and board queries
//!
//! Implements piece movement and board reach queries as plain data and
//! functions, with no I/O and no randomness, so every rule is unit-testable.
//!
//! # Module Structure
//!
//! - `piece_moves` - Piece types, direction tables, sliding and stepping generation
//! - `board_state` - Board representation, occupancy and singular-square queries

pub mod board_state;
pub mod piece_moves;


// Re-export commonly used items
pub use board_state::Board;
pub use piece_moves::{get_possible_moves, Direction, Movement, Piece, PieceType};

//! Chess piece movement rules
//!
//! Every piece type maps to a fixed direction table and one of two movement
//! strategies. Sliding pieces cast rays until the board edge or the first
//! occupied square; stepping pieces look at exactly one square per direction.
//! Occupied squares are never reachable, there are no captures.

use std::fmt;
use std::str::FromStr;

use super::board_state::Board;
use crate::game::error::{GameError, GameResult};
use crate::game::types::Square;

/// A movement vector in (file, rank) steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub file: i32,
    pub rank: i32,
}

impl Direction {
    pub const fn new(file: i32, rank: i32) -> Self {
        Direction { file, rank }
    }
}

pub const NORTH: Direction = Direction::new(0, -1);
pub const SOUTH: Direction = Direction::new(0, 1);
pub const WEST: Direction = Direction::new(-1, 0);
pub const EAST: Direction = Direction::new(1, 0);
pub const NORTH_WEST: Direction = Direction::new(-1, -1);
pub const NORTH_EAST: Direction = Direction::new(-1, 1);
pub const SOUTH_WEST: Direction = Direction::new(1, -1);
pub const SOUTH_EAST: Direction = Direction::new(1, 1);

pub const ORTHOGONAL: [Direction; 4] = [NORTH, SOUTH, WEST, EAST];
pub const DIAGONAL: [Direction; 4] = [NORTH_WEST, NORTH_EAST, SOUTH_WEST, SOUTH_EAST];
pub const COMBINED: [Direction; 8] = [
    NORTH, SOUTH, WEST, EAST, NORTH_WEST, NORTH_EAST, SOUTH_WEST, SOUTH_EAST,
];
pub const KNIGHT_JUMPS: [Direction; 8] = [
    Direction::new(-1, -2),
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, 2),
    Direction::new(1, -2),
    Direction::new(2, -1),
    Direction::new(2, 1),
    Direction::new(1, 2),
];

/// The piece types that can appear on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Bishop,
    Knight,
    Rook,
    King,
    Queen,
}

/// How a piece follows its directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Repeat each direction until blocked
    Sliding,
    /// Take each direction exactly once
    Stepping,
}

impl PieceType {
    pub const ALL: [PieceType; 5] = [
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::King,
        PieceType::Queen,
    ];

    /// Direction table for this piece type
    pub fn directions(self) -> &'static [Direction] {
        match self {
            PieceType::Bishop => &DIAGONAL,
            PieceType::Rook => &ORTHOGONAL,
            PieceType::Queen | PieceType::King => &COMBINED,
            PieceType::Knight => &KNIGHT_JUMPS,
        }
    }

    pub fn movement(self) -> Movement {
        match self {
            PieceType::Bishop | PieceType::Rook | PieceType::Queen => Movement::Sliding,
            PieceType::Knight | PieceType::King => Movement::Stepping,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceType::Bishop => "Bishop",
            PieceType::Knight => "Knight",
            PieceType::Rook => "Rook",
            PieceType::King => "King",
            PieceType::Queen => "Queen",
        }
    }

    /// Single-letter abbreviation used in algebraic notation
    pub fn abbreviation(self) -> char {
        match self {
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Rook => 'R',
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
        }
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PieceType {
    type Err = GameError;

    /// Accepts full names ("rook") or abbreviations ("R"), any case
    fn from_str(s: &str) -> GameResult<Self> {
        let wanted = s.trim();
        let mut chars = wanted.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c.to_ascii_uppercase()),
            _ => None,
        };

        PieceType::ALL
            .into_iter()
            .find(|piece_type| {
                piece_type.name().eq_ignore_ascii_case(wanted)
                    || letter == Some(piece_type.abbreviation())
            })
            .ok_or_else(|| GameError::UnknownPieceType {
                name: s.to_string(),
            })
    }
}

/// A piece standing on the board
///
/// The type is fixed at creation; the square changes as the piece moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    piece_type: PieceType,
    square: Square,
}

impl Piece {
    pub fn new(piece_type: PieceType, square: Square) -> Self {
        Piece { piece_type, square }
    }

    pub fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    /// Squares this piece can move to on `board`
    pub fn moves(&self, board: &Board) -> Vec<Square> {
        get_possible_moves(self.piece_type, self.square, board)
    }
}

/// Get all squares a piece of `piece_type` standing on `from` can reach
pub fn get_possible_moves(piece_type: PieceType, from: Square, board: &Board) -> Vec<Square> {
    match piece_type.movement() {
        Movement::Sliding => sliding_moves(from, piece_type.directions(), board),
        Movement::Stepping => stepping_moves(from, piece_type.directions(), board),
    }
}

/// Cast a ray along each direction, stopping before the edge or a blocker
fn sliding_moves(from: Square, directions: &[Direction], board: &Board) -> Vec<Square> {
    let mut moves = Vec::new();

    for direction in directions {
        let mut current = from;
        while let Some(next) = current.offset(direction.file, direction.rank) {
            if board.occupied(next) {
                break;
            }
            moves.push(next);
            current = next;
        }
    }

    moves
}

/// One candidate per direction, kept if on the board and empty
fn stepping_moves(from: Square, directions: &[Direction], board: &Board) -> Vec<Square> {
    directions
        .iter()
        .filter_map(|direction| from.offset(direction.file, direction.rank))
        .filter(|square| !board.occupied(*square))
        .collect()
}

//! Board state: the pieces in play and the reach queries built on them

use std::collections::HashMap;

use tracing::debug;

use super::piece_moves::{Piece, PieceType};
use crate::game::error::GameResult;
use crate::game::types::{Square, FILE_NUM};

/// Unordered collection of pieces, listed in insertion order
///
/// The board does not stop two pieces from sharing a square; callers check
/// [`Board::occupied`] before placing or moving.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pieces: Vec<Piece>,
}

impl Board {
    pub fn new() -> Self {
        Board {
            pieces: Vec::with_capacity(FILE_NUM as usize),
        }
    }

    /// Remove all pieces from the board
    pub fn reset(&mut self) {
        self.pieces.clear();
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Check if a given square is already occupied by a piece
    pub fn occupied(&self, square: Square) -> bool {
        self.pieces
            .iter()
            .any(|piece| piece.square().index() == square.index())
    }

    /// Add a piece to the board, returning its position in board order
    pub fn add_piece(&mut self, piece_type: PieceType, square: Square) -> usize {
        debug!("[BOARD] Adding {} at {}", piece_type, square);
        self.pieces.push(Piece::new(piece_type, square));
        self.pieces.len() - 1
    }

    /// Add a piece named by text ("Rook", "r", ...)
    pub fn add_piece_named(&mut self, name: &str, square: Square) -> GameResult<usize> {
        let piece_type = name.parse::<PieceType>()?;
        Ok(self.add_piece(piece_type, square))
    }

    /// Move the piece at `index` onto `to`
    ///
    /// The piece keeps its position in board order. Returns `false` if there
    /// is no piece at `index`.
    pub fn move_piece(&mut self, index: usize, to: Square) -> bool {
        match self.pieces.get_mut(index) {
            Some(piece) => {
                debug!("[BOARD] Moving {} {} -> {}", piece.piece_type(), piece.square(), to);
                piece.set_square(to);
                true
            }
            None => false,
        }
    }

    /// Moves of the piece at `index` (empty if there is none)
    pub fn moves_for(&self, index: usize) -> Vec<Square> {
        self.pieces
            .get(index)
            .map(|piece| piece.moves(self))
            .unwrap_or_default()
    }

    /// Squares that exactly one piece can move to, in ascending index order
    pub fn singular_squares(&self) -> Vec<Square> {
        let mut reach: HashMap<usize, (Square, usize)> = HashMap::new();

        for piece in &self.pieces {
            for square in piece.moves(self) {
                reach.entry(square.index()).or_insert((square, 0)).1 += 1;
            }
        }

        let mut singular: Vec<Square> = reach
            .into_values()
            .filter(|(_, count)| *count == 1)
            .map(|(square, _)| square)
            .collect();
        singular.sort_by_key(|square| square.index());
        singular
    }

    /// Index of the first piece (in board order) that can reach `square`
    pub fn piece_that_reaches_square(&self, square: Square) -> Option<usize> {
        self.pieces
            .iter()
            .position(|piece| piece.moves(self).contains(&square))
    }

    /// Distinct piece types on the board, in order of first appearance
    pub fn piece_types(&self) -> Vec<PieceType> {
        let mut types = Vec::new();
        for piece in &self.pieces {
            if !types.contains(&piece.piece_type()) {
                types.push(piece.piece_type());
            }
        }
        types
    }
}

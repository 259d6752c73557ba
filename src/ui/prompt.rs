//! Question rendering and answer parsing for the console

use thiserror::Error;

use crate::game::rules::Piece;
use crate::game::types::Square;

/// Reasons a line typed by the player is not a usable answer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("Answer should be a number corresponding to the piece from available options")]
    NotANumber,

    #[error("Answer should be a number between 0 and {max} (inclusive)")]
    OutOfRange { max: usize },
}

/// Parse a typed option index, accepting `0..num_options`
pub fn parse_answer(line: &str, num_options: usize) -> Result<usize, AnswerError> {
    let choice: usize = line.trim().parse().map_err(|_| AnswerError::NotANumber)?;

    if choice >= num_options {
        return Err(AnswerError::OutOfRange {
            max: num_options.saturating_sub(1),
        });
    }
    Ok(choice)
}

/// "Which piece can go to e4 (0. Knight, 1. Bishop):"
pub fn format_question(square: Square, pieces: &[Piece]) -> String {
    let options: Vec<String> = pieces
        .iter()
        .enumerate()
        .map(|(idx, piece)| format!("{}. {}", idx, piece.piece_type()))
        .collect();

    format!("Which piece can go to {} ({}):", square, options.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rules::PieceType;

    #[test]
    fn test_parse_answer_accepts_valid_index() {
        assert_eq!(parse_answer("0", 2), Ok(0));
        assert_eq!(parse_answer(" 1\n", 2), Ok(1));
    }

    #[test]
    fn test_parse_answer_rejects_text() {
        assert_eq!(parse_answer("knight", 2), Err(AnswerError::NotANumber));
        assert_eq!(parse_answer("", 2), Err(AnswerError::NotANumber));
        assert_eq!(parse_answer("-1", 2), Err(AnswerError::NotANumber));
    }

    #[test]
    fn test_parse_answer_rejects_out_of_range() {
        assert_eq!(parse_answer("2", 2), Err(AnswerError::OutOfRange { max: 1 }));
        assert_eq!(
            AnswerError::OutOfRange { max: 1 }.to_string(),
            "Answer should be a number between 0 and 1 (inclusive)"
        );
    }

    #[test]
    fn test_format_question() {
        let pieces = vec![
            Piece::new(PieceType::Knight, Square::from_notation("b1").unwrap()),
            Piece::new(PieceType::Bishop, Square::from_notation("a1").unwrap()),
        ];
        let square = Square::from_notation("d2").unwrap();

        assert_eq!(
            format_question(square, &pieces),
            "Which piece can go to d2 (0. Knight, 1. Bishop):"
        );
    }
}

//! Game phase and round outcome tracking
//!
//! [`GamePhase`] records where a session is in its lifecycle and
//! [`RoundOutcome`] reports what a single answered question did to it.
//!
//! # Phase Transitions
//!
//! ```text
//! PreGame → Play → GameOver (wrong answer, or no singular square left)
//!                → Win      (score reached WIN_SCORE)
//! PreGame → GameOver        (no singular square to start with)
//! ```
//!
//! `GameOver` and `Win` are terminal until the next `setup_pre_game`: no
//! question is held and answering fails with `NoQuestion`.

use super::rules::PieceType;
use super::types::Square;

/// Lifecycle phase of a [`Game`](super::session::Game)
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GamePhase {
    /// Board is set up, no question posed yet
    #[default]
    PreGame,

    /// A question is waiting for an answer
    Play,

    /// The last answer was wrong, or the board ran out of singular squares
    GameOver,

    /// Every level was cleared
    Win,
}

impl GamePhase {
    /// Check if the game has ended
    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Win)
    }

    /// Human-readable description of the phase
    pub fn message(&self) -> &str {
        match self {
            GamePhase::PreGame => "Waiting to start",
            GamePhase::Play => "Game in progress",
            GamePhase::GameOver => "Game over!",
            GamePhase::Win => "You won!",
        }
    }
}

/// Result of answering one question
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RoundOutcome {
    /// Correct answer, next question posed
    Continue,

    /// Correct answer that completed a level; a new piece joined the board
    LevelUp { piece_type: PieceType, square: Square },

    /// Correct answer that reached the win score; no further question
    Win,

    /// Wrong answer, the game is over
    Wrong { expected: PieceType },
}

impl RoundOutcome {
    /// Whether this round added a new piece
    pub fn is_level_up(&self) -> bool {
        matches!(self, RoundOutcome::LevelUp { .. })
    }

    /// Whether the game ends with this round
    pub fn ends_game(&self) -> bool {
        matches!(self, RoundOutcome::Win | RoundOutcome::Wrong { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_default() {
        //! Verifies GamePhase defaults to PreGame
        let phase = GamePhase::default();
        assert_eq!(phase, GamePhase::PreGame);
        assert!(!phase.is_finished());
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::GameOver.is_finished());
        assert!(GamePhase::Win.is_finished());
        assert!(!GamePhase::Play.is_finished());
    }

    #[test]
    fn test_phase_messages() {
        assert_eq!(GamePhase::Play.message(), "Game in progress");
        assert_eq!(GamePhase::Win.message(), "You won!");
    }

    #[test]
    fn test_round_outcome_flags() {
        let square = Square::from_notation("e4").unwrap();
        let level_up = RoundOutcome::LevelUp {
            piece_type: PieceType::Rook,
            square,
        };

        assert!(level_up.is_level_up());
        assert!(!level_up.ends_game());
        assert!(!RoundOutcome::Continue.is_level_up());
        assert!(RoundOutcome::Win.ends_game());
        assert!(RoundOutcome::Wrong {
            expected: PieceType::Knight
        }
        .ends_game());
    }
}

//! Game progression: setup, questions, scoring and levels
//!
//! A [`Game`] owns the board and its random source. Each round poses a
//! question (a singular square and the piece that reaches it); a correct
//! answer moves that piece onto the square and advances the score. Every
//! [`QUESTIONS_PER_LEVEL`] correct answers a new piece type joins the board,
//! following [`LEVELS`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::error::{GameError, GameResult};
use super::outcome::{GamePhase, RoundOutcome};
use super::rules::{Board, Piece, PieceType};
use super::types::{Square, SQUARE_NUM};

/// Piece added at each level up, in order
pub const LEVELS: [PieceType; 5] = [
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
    PieceType::King,
    PieceType::Queen,
];

pub const MAX_LEVEL: u32 = LEVELS.len() as u32;

pub const QUESTIONS_PER_LEVEL: u32 = 10;

/// Score that ends the game with a win (the score starts from 0)
pub const WIN_SCORE: u32 = MAX_LEVEL * QUESTIONS_PER_LEVEL + 1;

/// Placement attempts that must leave at least one singular square before
/// any free square is accepted
const PLACEMENT_ATTEMPTS: usize = 64;

/// The currently posed question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Question {
    square: Square,
    piece: usize,
}

/// Central state of one play session
pub struct Game<R: Rng = StdRng> {
    board: Board,
    phase: GamePhase,
    level: u32,
    score: u32,
    question: Option<Question>,
    level_up_piece: Option<usize>,
    rng: R,
}

impl Game<StdRng> {
    /// Game with a deterministic random source
    pub fn from_seed(seed: u64) -> Self {
        Game::new(StdRng::seed_from_u64(seed))
    }

    /// Game seeded from the operating system
    pub fn from_entropy() -> Self {
        Game::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn new(rng: R) -> Self {
        Game::from_position(Board::new(), rng)
    }

    /// Game starting from pieces the caller has already placed
    ///
    /// [`start_game`](Self::start_game) poses the first question on `board`
    /// as is; [`setup_pre_game`](Self::setup_pre_game) would replace it.
    pub fn from_position(board: Board, rng: R) -> Self {
        Game {
            board,
            phase: GamePhase::PreGame,
            level: 0,
            score: 0,
            question: None,
            level_up_piece: None,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Pieces in board order, the answer options shown to the player
    pub fn board_pieces(&self) -> &[Piece] {
        self.board.pieces()
    }

    pub fn piece_types(&self) -> Vec<PieceType> {
        self.board.piece_types()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current level, counted from 1
    pub fn level(&self) -> u32 {
        self.level + 1
    }

    /// Piece added by the most recent level up
    pub fn level_up_piece(&self) -> Option<&Piece> {
        self.level_up_piece.and_then(|index| self.board.piece(index))
    }

    /// The piece expected to answer and the square it must reach
    pub fn question_piece_and_square(&self) -> Option<(&Piece, Square)> {
        let question = self.question?;
        self.board
            .piece(question.piece)
            .map(|piece| (piece, question.square))
    }

    /// Whether `piece_type` is the correct answer to the current question
    pub fn check_answer(&self, piece_type: PieceType) -> bool {
        self.question_piece_and_square()
            .is_some_and(|(piece, _)| piece.piece_type() == piece_type)
    }

    /// Reset the board and place the two starting pieces
    pub fn setup_pre_game(&mut self) {
        self.phase = GamePhase::PreGame;
        self.level = 0;
        self.score = 0;
        self.question = None;
        self.level_up_piece = None;

        self.board.reset();

        let knight_square = self.random_square();
        let mut bishop_square = self.random_square();
        let mut attempts = 0;
        while bishop_square == knight_square
            || (attempts < PLACEMENT_ATTEMPTS
                && !leaves_singular_square(&self.board, knight_square, bishop_square))
        {
            bishop_square = self.random_square();
            attempts += 1;
        }

        self.board.add_piece(PieceType::Knight, knight_square);
        self.board.add_piece(PieceType::Bishop, bishop_square);

        info!(
            "[GAME] New game: Knight at {}, Bishop at {}",
            knight_square, bishop_square
        );
    }

    /// Pose the first question
    ///
    /// A board without a singular square ends the game at once.
    pub fn start_game(&mut self) -> GameResult<()> {
        if let Err(e) = self.choose_square_and_piece() {
            self.phase = GamePhase::GameOver;
            return Err(e);
        }
        self.phase = GamePhase::Play;
        Ok(())
    }

    /// Pick a random singular square and the piece that reaches it
    pub fn choose_square_and_piece(&mut self) -> GameResult<()> {
        let squares = self.board.singular_squares();
        if squares.is_empty() {
            warn!("[GAME] No singular square left on the board");
            self.question = None;
            return Err(GameError::NoSingularSquare);
        }

        let square = squares[self.rng.random_range(0..squares.len())];
        let piece = self
            .board
            .piece_that_reaches_square(square)
            .ok_or(GameError::NoSingularSquare)?;

        debug!(
            "[GAME] Question: {} (answer {})",
            square,
            self.board.pieces()[piece].piece_type()
        );
        self.question = Some(Question { square, piece });
        Ok(())
    }

    /// Advance the board after a correct answer
    ///
    /// Moves the answering piece onto the question square, updates the score
    /// and level, and poses the next question unless the game was won.
    ///
    /// When the new position has no singular square the game ends in
    /// [`GamePhase::GameOver`] with `NoSingularSquare`. Score, level and
    /// [`level_up_piece`](Self::level_up_piece) keep the round's progress.
    pub fn set_next_position(&mut self) -> GameResult<RoundOutcome> {
        if self.phase.is_finished() {
            return Err(GameError::NoQuestion);
        }
        let question = self.question.ok_or(GameError::NoQuestion)?;
        if !self.board.move_piece(question.piece, question.square) {
            return Err(GameError::NoQuestion);
        }

        let outcome = self.update_score();
        if outcome == RoundOutcome::Win {
            self.question = None;
            self.phase = GamePhase::Win;
            info!("[GAME] Won with score {}", self.score);
            return Ok(outcome);
        }

        if let Err(e) = self.choose_square_and_piece() {
            self.phase = GamePhase::GameOver;
            info!(
                "[GAME] Board exhausted after {:?}, final score {}",
                outcome, self.score
            );
            return Err(e);
        }
        Ok(outcome)
    }

    /// Check `piece_type` against the question and advance on success
    pub fn answer(&mut self, piece_type: PieceType) -> GameResult<RoundOutcome> {
        if self.phase.is_finished() {
            return Err(GameError::NoQuestion);
        }
        let (expected, _) = self
            .question_piece_and_square()
            .ok_or(GameError::NoQuestion)?;
        let expected = expected.piece_type();

        if expected != piece_type {
            info!(
                "[GAME] Wrong answer {} (expected {}), final score {}",
                piece_type, expected, self.score
            );
            self.phase = GamePhase::GameOver;
            self.question = None;
            return Ok(RoundOutcome::Wrong { expected });
        }

        self.set_next_position()
    }

    fn update_score(&mut self) -> RoundOutcome {
        self.score += 1;

        if self.score == WIN_SCORE {
            return RoundOutcome::Win;
        }

        if self.score % QUESTIONS_PER_LEVEL != 0 {
            return RoundOutcome::Continue;
        }

        let Some(&piece_type) = LEVELS.get(self.level as usize) else {
            return RoundOutcome::Continue;
        };

        let square = self.free_square_for(piece_type);
        let index = self.board.add_piece(piece_type, square);
        self.level_up_piece = Some(index);
        self.level += 1;

        info!(
            "[GAME] Level {} reached: {} added at {}",
            self.level(),
            piece_type,
            square
        );
        RoundOutcome::LevelUp { piece_type, square }
    }

    /// Random unoccupied square, preferring ones that keep a singular square
    fn free_square_for(&mut self, piece_type: PieceType) -> Square {
        let mut fallback = None;
        for _ in 0..PLACEMENT_ATTEMPTS {
            let square = self.random_free_square();
            let mut trial = self.board.clone();
            trial.add_piece(piece_type, square);
            if !trial.singular_squares().is_empty() {
                return square;
            }
            fallback.get_or_insert(square);
        }
        fallback.unwrap_or_else(|| self.random_free_square())
    }

    fn random_free_square(&mut self) -> Square {
        loop {
            let square = self.random_square();
            if !self.board.occupied(square) {
                return square;
            }
        }
    }

    fn random_square(&mut self) -> Square {
        Square::from_index_wrapping(self.rng.random_range(0..SQUARE_NUM as usize))
    }
}

fn leaves_singular_square(board: &Board, knight: Square, bishop: Square) -> bool {
    let mut trial = board.clone();
    trial.add_piece(PieceType::Knight, knight);
    trial.add_piece(PieceType::Bishop, bishop);
    !trial.singular_squares().is_empty()
}

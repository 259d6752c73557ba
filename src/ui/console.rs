//! Line-based console session
//!
//! Drives a [`Game`] from a text reader and writer: prints the starting
//! position, counts down while the player memorises it, clears the screen,
//! then asks questions until the player answers wrongly, wins, or closes the
//! input. Invalid lines are reported and the question is asked again.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use super::prompt::{format_question, parse_answer};
use crate::core::GameSettings;
use crate::game::{Game, GameError, RoundOutcome};
use crate::game::rules::PieceType;

/// ANSI sequence that clears the terminal and homes the cursor
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

/// Errors that abort a console session
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Console I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A wrong answer; carries the expected piece type
    WrongAnswer { expected: PieceType },
    /// Every level was cleared
    Won,
    /// No square was reachable by exactly one piece
    BoardExhausted,
    /// The input stream ended before the game did
    InputClosed,
}

/// Final state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub end: SessionEnd,
    pub score: u32,
    pub level: u32,
}

/// Presentation options taken from [`GameSettings`]
#[derive(Debug, Clone, Copy)]
pub struct ConsoleOptions {
    pub countdown_secs: u64,
    pub clear_screen: bool,
}

impl From<&GameSettings> for ConsoleOptions {
    fn from(settings: &GameSettings) -> Self {
        ConsoleOptions {
            countdown_secs: settings.countdown_secs,
            clear_screen: settings.clear_screen,
        }
    }
}

/// Console front end over any reader/writer pair
pub struct Console<I, O> {
    input: I,
    output: O,
    options: ConsoleOptions,
}

impl<I: BufRead, O: Write> Console<I, O> {
    pub fn new(input: I, output: O, options: ConsoleOptions) -> Self {
        Console {
            input,
            output,
            options,
        }
    }

    /// Consume the console, returning the writer (used by tests)
    pub fn into_output(self) -> O {
        self.output
    }

    /// Play one full game from a fresh starting position
    pub fn run<R: Rng>(&mut self, game: &mut Game<R>) -> Result<SessionSummary, ConsoleError> {
        game.setup_pre_game();
        self.run_from_position(game)
    }

    /// Play a game whose pieces are already on the board
    pub fn run_from_position<R: Rng>(
        &mut self,
        game: &mut Game<R>,
    ) -> Result<SessionSummary, ConsoleError> {
        writeln!(self.output, "Starting position")?;
        for piece in game.board_pieces() {
            writeln!(self.output, "{} at {}", piece.piece_type(), piece.square())?;
        }
        self.countdown()?;

        let end = match game.start_game() {
            Ok(()) => self.ask_questions(game)?,
            Err(GameError::NoSingularSquare) => SessionEnd::BoardExhausted,
            Err(e) => return Err(e.into()),
        };

        let summary = SessionSummary {
            end,
            score: game.score(),
            level: game.level(),
        };
        self.report(&summary)?;
        info!("[CLI] Session ended: {:?}", summary);
        Ok(summary)
    }

    fn ask_questions<R: Rng>(&mut self, game: &mut Game<R>) -> Result<SessionEnd, ConsoleError> {
        let mut line = String::new();

        loop {
            let Some((_, square)) = game.question_piece_and_square() else {
                return Ok(SessionEnd::BoardExhausted);
            };

            writeln!(self.output, "{}", format_question(square, game.board_pieces()))?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(SessionEnd::InputClosed);
            }

            let choice = match parse_answer(&line, game.board_pieces().len()) {
                Ok(choice) => choice,
                Err(e) => {
                    debug!("[CLI] Rejected answer {:?}: {}", line.trim(), e);
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };
            let chosen = game.board_pieces()[choice].piece_type();

            match game.answer(chosen) {
                Ok(RoundOutcome::Continue) => {}
                Ok(RoundOutcome::LevelUp { piece_type, square }) => {
                    writeln!(
                        self.output,
                        "Level up! A new {} was added to {}",
                        piece_type, square
                    )?;
                }
                Ok(RoundOutcome::Win) => return Ok(SessionEnd::Won),
                Ok(RoundOutcome::Wrong { expected }) => {
                    return Ok(SessionEnd::WrongAnswer { expected })
                }
                Err(GameError::NoSingularSquare) => return Ok(SessionEnd::BoardExhausted),
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Count down with the position still visible, then hide it
    fn countdown(&mut self) -> io::Result<()> {
        if self.options.countdown_secs == 0 {
            return Ok(());
        }

        for remaining in (1..=self.options.countdown_secs).rev() {
            writeln!(self.output, "Starting in {}...", remaining)?;
            self.output.flush()?;
            thread::sleep(Duration::from_secs(1));
        }
        if self.options.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn report(&mut self, summary: &SessionSummary) -> io::Result<()> {
        match summary.end {
            SessionEnd::WrongAnswer { expected } => {
                writeln!(self.output, "Game over! (correct piece was {})", expected)?
            }
            SessionEnd::Won => writeln!(self.output, "You won! Every level cleared.")?,
            SessionEnd::BoardExhausted => {
                writeln!(self.output, "No square is reachable by exactly one piece.")?
            }
            SessionEnd::InputClosed => writeln!(self.output, "Input closed.")?,
        }
        writeln!(
            self.output,
            "Final score: {} (level {})",
            summary.score, summary.level
        )?;
        self.output.flush()
    }
}

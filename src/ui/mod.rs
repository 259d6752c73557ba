//! UI module - text console front end
//!
//! - **prompt**: question formatting and answer validation
//! - **console**: the interactive session loop over any `BufRead`/`Write` pair

pub mod console;
pub mod prompt;

// Re-export commonly used items
pub use console::{Console, ConsoleError, ConsoleOptions, SessionEnd, SessionSummary};
pub use prompt::{format_question, parse_answer, AnswerError};

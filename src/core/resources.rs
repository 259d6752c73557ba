//! User-tunable settings for the console game

use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreResult};

/// Longest countdown accepted before the first question
pub const MAX_COUNTDOWN_SECS: u64 = 60;

/// Settings that can be changed from the settings file or the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Seconds to count down before the first question (0 disables it)
    pub countdown_secs: u64,

    /// Whether to clear the terminal once the countdown ends
    pub clear_screen: bool,

    /// Fixed random seed, for reproducible games
    pub seed: Option<u64>,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            countdown_secs: 3,
            clear_screen: true,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameSettings {
    /// Reject values the game cannot run with
    pub fn validate(&self) -> CoreResult<()> {
        if self.countdown_secs > MAX_COUNTDOWN_SECS {
            return Err(CoreError::InvalidSetting {
                name: "countdown_secs",
                message: format!(
                    "{} exceeds the maximum of {MAX_COUNTDOWN_SECS}",
                    self.countdown_secs
                ),
            });
        }
        if self.log_level.trim().is_empty() {
            return Err(CoreError::InvalidSetting {
                name: "log_level",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

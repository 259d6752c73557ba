//! Core module - application infrastructure around the game engine
//!
//! # Contents
//!
//! - [`GameSettings`] - User preferences (countdown, screen clearing, seed, log level)
//! - `settings_persistence` - Loading and saving settings as JSON
//! - [`CoreError`] - Errors raised while handling settings

pub mod error;
pub mod resources;
pub mod settings_persistence;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use resources::GameSettings;

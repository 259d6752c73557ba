//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! Settings are stored as `settings.json` in the user's configuration
//! directory, falling back to the current directory when none exists.
//!
//! # Error Handling
//!
//! [`load_settings`] and [`save_settings`] report errors to the caller. The
//! binary logs a load failure and carries on with default settings.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::info;

use super::error::CoreResult;
use super::resources::GameSettings;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Helper to resolve the default settings file path
///
/// E.g. ~/.config/blind_chess/settings.json on Linux. Falls back to a local
/// "settings.json" if the system config dir cannot be found.
pub fn default_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "blind_chess", "blind_chess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and validate settings from `path`
pub fn load_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Write `settings` to `path` as pretty JSON, creating parent directories
pub fn save_settings(settings: &GameSettings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

mod config;
pub mod database;
mod snapshot;

pub use config::{Config, Preset, SoundConfig, TimerConfig};
pub use database::Database;
pub use snapshot::{StateStore, STATE_KEY};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/pomoduo[-dev]/` based on POMODUO_ENV.
///
/// Set POMODUO_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("POMODUO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("pomoduo-dev")
    } else {
        base_dir.join("pomoduo")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

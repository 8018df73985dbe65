mod config;
pub mod database;
mod memory;
pub mod migrations;

pub use config::{Config, RetentionConfig, StreakConfig};
pub use database::Database;
pub use memory::{MemoryAchievementLog, MemoryStreakStore};

use std::path::PathBuf;

use crate::error::Result;

/// Returns `~/.config/deepwork[-dev]/` based on DEEPWORK_ENV.
///
/// Set DEEPWORK_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DEEPWORK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("deepwork-dev")
    } else {
        base_dir.join("deepwork")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

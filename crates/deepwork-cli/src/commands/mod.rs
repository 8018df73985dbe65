pub mod achieve;
pub mod config;
pub mod log;
pub mod streak;

use std::path::PathBuf;

use chrono::NaiveDate;
use deepwork_core::storage::{data_dir, Config, Database};
use deepwork_core::{local_today, parse_date_key, ValidationError};

/// Where the CLI keeps its database and config file.
pub struct Context {
    dir: PathBuf,
}

impl Context {
    /// Use `dir` if given, otherwise the standard data directory.
    pub fn new(dir: Option<PathBuf>) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = match dir {
            Some(dir) => {
                std::fs::create_dir_all(&dir)?;
                dir
            }
            None => data_dir()?,
        };
        Ok(Self { dir })
    }

    pub fn database(&self) -> Result<Database, Box<dyn std::error::Error>> {
        Ok(Database::open_at(&self.dir.join("deepwork.db"))?)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join("config.toml")
    }

    pub fn config(&self) -> Result<Config, Box<dyn std::error::Error>> {
        Ok(Config::load_from(&self.config_path())?)
    }
}

/// clap value parser for `YYYY-MM-DD` arguments.
pub fn parse_day(raw: &str) -> Result<NaiveDate, String> {
    parse_date_key(raw)
        .ok_or_else(|| ValidationError::InvalidDateKey(raw.to_string()).to_string())
}

/// The given day, or today in the local calendar.
pub fn day_or_today(day: Option<NaiveDate>) -> NaiveDate {
    day.unwrap_or_else(local_today)
}

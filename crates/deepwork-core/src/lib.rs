//! # Deepwork Core Library
//!
//! This library provides the core logic for the Deepwork session tracker:
//! the log of confirmed deep-work sessions and the workday streak derived
//! from it. The `deepwork` CLI is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Calendar**: workday and `YYYY-MM-DD` day-key helpers in the local calendar
//! - **Achievements**: append-only, day-keyed log of completed sessions
//! - **Streak**: a full recomputation of the workday streak on every call,
//!   with a one-missed-day tolerance and a persisted longest-streak record
//! - **Storage**: SQLite and in-memory stores, TOML configuration
//!
//! ## Key Components
//!
//! - [`StreakEngine`]: recompute-and-persist entry point
//! - [`walk_back`]: the pure streak computation
//! - [`Database`]: SQLite-backed achievement log and record store
//! - [`Config`]: Application configuration management

pub mod achievements;
pub mod calendar;
pub mod error;
pub mod storage;
pub mod streak;

pub use achievements::{Achievement, AchievementLog, DaySummary};
pub use calendar::{date_key, is_workday, local_today, parse_date_key};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use storage::{Config, Database, MemoryAchievementLog, MemoryStreakStore};
pub use streak::{walk_back, StreakEngine, StreakRecord, StreakStore, WalkPolicy};

//! # pactally
//!
//! Score store and statistics engine for arcade maze game results.
//!
//! This crate provides:
//! - Level scoring constants (dot counts, fruit bonuses, optimal scores)
//! - A day-keyed score store with upsert/delete semantics
//! - Tallied statistics: rankings, daily averages, streaks, per-level bests
//! - Filtered and ranked queries over the tallied data
//! - Flat-file persistence and CSV/JSON export

pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod level;
pub mod manager;
pub mod prelude;
pub mod query;
pub mod score;
pub mod stats;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{TrackerConfig, TrackerConfigBuilder};
pub use error::{Error, Result};
pub use export::{CsvExporter, ExportFormat, JsonExporter, ScoreJson, StatsSummary};
pub use level::{Level, LevelCatalog};
pub use manager::{SharedStatManager, StatManager};
pub use query::{
    DailySummary, DateRange, DisplayStats, FilterPreference, FilterRequest, ScoreSort,
    percentile, percentile_label, rank_label,
};
pub use score::{DeleteOutcome, ImportReport, Score, ScoreStore, UpsertOutcome};
pub use stats::{DailyStats, Stats, Streak, Streaks, tally};
pub use storage::{ScoreFile, ScoreRow, format_csv, parse_csv, parse_date};

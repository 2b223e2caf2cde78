//! Prelude module for convenient imports
//!
//! ```ignore
//! use pactally::prelude::*;
//! ```

pub use crate::config::TrackerConfig;
pub use crate::error::{Error, Result};
pub use crate::export::ExportFormat;
pub use crate::level::{Level, LevelCatalog};
pub use crate::manager::{SharedStatManager, StatManager};
pub use crate::query::{DateRange, FilterPreference, ScoreSort};
pub use crate::score::{Score, ScoreStore};
pub use crate::stats::{DailyStats, Stats, Streak};

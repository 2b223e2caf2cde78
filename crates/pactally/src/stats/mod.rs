//! Aggregates derived from the score store.
//!
//! [`Stats`] is rebuilt as a whole by [`tally`]; nothing in it is updated
//! incrementally. Read access lives in [`crate::query`].

mod daily;
mod streak;
mod tally;

pub use daily::{DailyStats, MIN_GAMES_FOR_AVERAGE, ROLLING_WINDOW_DAYS};
pub use streak::*;
pub use tally::*;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::score::Score;

/// Snapshot of every derived view over the store
#[derive(Debug, Clone, Default)]
pub struct Stats {
    pub(crate) single_games_count: usize,
    pub(crate) total_score: u64,
    pub(crate) average: Option<Score>,
    pub(crate) high: Option<Score>,
    pub(crate) low: Option<Score>,
    pub(crate) level_counts: BTreeMap<i32, u32>,
    pub(crate) optimals: Vec<Option<Score>>,
    pub(crate) optimals_daily: Vec<Option<Score>>,
    pub(crate) by_date: Vec<Score>,
    pub(crate) by_high: Vec<Score>,
    pub(crate) by_low: Vec<Score>,
    pub(crate) daily: BTreeMap<NaiveDate, DailyStats>,
    pub(crate) daily_ranked: Vec<NaiveDate>,
    pub(crate) averages: BTreeMap<NaiveDate, Score>,
    pub(crate) avg_by_date: Vec<Score>,
    pub(crate) avg_high: Vec<Score>,
    pub(crate) avg_low: Vec<Score>,
    pub(crate) streaks: Streaks,
}

impl Stats {
    pub fn single_games_count(&self) -> usize {
        self.single_games_count
    }

    pub fn total_score(&self) -> u64 {
        self.total_score
    }

    /// Mean of every single game, as a synthetic averaged score
    pub fn average(&self) -> Option<&Score> {
        self.average.as_ref()
    }

    pub fn high_score(&self) -> Option<&Score> {
        self.high.as_ref()
    }

    pub fn low_score(&self) -> Option<&Score> {
        self.low.as_ref()
    }

    /// Number of games per level index (`-1` collects invalid levels)
    pub fn level_counts(&self) -> &BTreeMap<i32, u32> {
        &self.level_counts
    }

    /// Best single game at `level`
    pub fn optimal_for(&self, level: i32) -> Option<&Score> {
        usize::try_from(level)
            .ok()
            .and_then(|i| self.optimals.get(i))
            .and_then(Option::as_ref)
    }

    /// Best daily average whose rounded level is `level`
    pub fn optimal_daily_for(&self, level: i32) -> Option<&Score> {
        usize::try_from(level)
            .ok()
            .and_then(|i| self.optimals_daily.get(i))
            .and_then(Option::as_ref)
    }

    /// Levels that have a best single game, with that game
    pub fn optimals(&self) -> impl Iterator<Item = &Score> {
        self.optimals.iter().flatten()
    }

    pub fn optimals_daily(&self) -> impl Iterator<Item = &Score> {
        self.optimals_daily.iter().flatten()
    }

    /// Daily summaries in chronological order
    pub fn daily_stats(&self) -> impl Iterator<Item = &DailyStats> {
        self.daily.values()
    }

    /// Daily summaries from best to worst average
    pub fn daily_stats_ranked(&self) -> impl Iterator<Item = &DailyStats> {
        self.daily_ranked.iter().filter_map(|d| self.daily.get(d))
    }

    pub fn daily_stats_for(&self, date: NaiveDate) -> Option<&DailyStats> {
        self.daily.get(&date)
    }

    /// Latest daily average on or before `date`
    pub fn average_on_or_before(&self, date: NaiveDate) -> Option<&Score> {
        self.averages.range(..=date).next_back().map(|(_, s)| s)
    }

    /// Earliest daily average strictly after `date`
    pub fn average_after(&self, date: NaiveDate) -> Option<&Score> {
        self.averages
            .range((std::ops::Bound::Excluded(date), std::ops::Bound::Unbounded))
            .next()
            .map(|(_, s)| s)
    }

    pub fn streaks(&self) -> &Streaks {
        &self.streaks
    }

    pub fn recent_streak(&self) -> &Streak {
        &self.streaks.recent
    }

    pub fn longest_streak(&self) -> &Streak {
        &self.streaks.longest
    }
}

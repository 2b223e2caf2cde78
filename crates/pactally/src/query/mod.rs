//! Read-side queries over tallied [`Stats`].

mod filter;
mod percentile;

pub use filter::*;
pub use percentile::*;

use chrono::NaiveDate;
use serde::Serialize;
use strum::{Display, EnumString};

use crate::score::Score;
use crate::stats::{DailyStats, Stats};

/// The six materialized score orderings
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    EnumString,
    Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum ScoreSort {
    /// Single games, newest first
    #[default]
    Date,
    /// Single games, best first
    High,
    /// Single games, worst first
    Low,
    /// Daily averages, newest first
    AvgDate,
    /// Daily averages, best first
    AvgHigh,
    /// Daily averages, worst first
    AvgLow,
}

impl ScoreSort {
    pub fn is_averaged(&self) -> bool {
        matches!(self, Self::AvgDate | Self::AvgHigh | Self::AvgLow)
    }
}

/// A requested day together with the best and worst days overall
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct DailySummary<'a> {
    pub requested: Option<&'a DailyStats>,
    pub high: Option<&'a DailyStats>,
    pub low: Option<&'a DailyStats>,
}

/// Rank of a score among its peers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayStats {
    pub rank: usize,
    pub total: usize,
    pub percentile: f64,
    pub label: String,
}

impl Stats {
    pub fn scores(&self, sorted_by: ScoreSort) -> &[Score] {
        match sorted_by {
            ScoreSort::Date => &self.by_date,
            ScoreSort::High => &self.by_high,
            ScoreSort::Low => &self.by_low,
            ScoreSort::AvgDate => &self.avg_by_date,
            ScoreSort::AvgHigh => &self.avg_high,
            ScoreSort::AvgLow => &self.avg_low,
        }
    }

    pub fn daily_stats_summary(&self, date: NaiveDate) -> DailySummary<'_> {
        DailySummary {
            requested: self.daily.get(&date),
            high: self.daily_ranked.first().and_then(|d| self.daily.get(d)),
            low: self.daily_ranked.last().and_then(|d| self.daily.get(d)),
        }
    }

    /// Rank `score` among single games, or among daily averages when it is
    /// an averaged record.
    ///
    /// Equal scores share a rank. Returns `None` if the score is not in the
    /// tallied data.
    pub fn display_stats(&self, score: &Score) -> Option<DisplayStats> {
        let view = if score.is_averaged() {
            &self.avg_high
        } else {
            &self.by_high
        };
        if !view
            .iter()
            .any(|s| s.date == score.date && s.same_entry(score))
        {
            return None;
        }

        let rank = view.iter().take_while(|s| s.score > score.score).count() + 1;
        let total = view.len();
        Some(DisplayStats {
            rank,
            total,
            percentile: percentile(rank, total),
            label: rank_label(rank, total),
        })
    }
}

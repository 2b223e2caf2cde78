use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::score::Score;
use crate::stats::Stats;

use super::ScoreSort;

/// Which scores a list shows and in what order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FilterPreference {
    #[default]
    Recents,
    HighsHighFirst,
    HighsNewFirst,
    LowsLowFirst,
    LowsNewFirst,
    AvgRecents,
    AvgHighsHighFirst,
    AvgHighsNewFirst,
    AvgLowsLowFirst,
    AvgLowsNewFirst,
}

impl FilterPreference {
    pub fn is_averaged(&self) -> bool {
        matches!(
            self,
            Self::AvgRecents
                | Self::AvgHighsHighFirst
                | Self::AvgHighsNewFirst
                | Self::AvgLowsLowFirst
                | Self::AvgLowsNewFirst
        )
    }

    /// View the selection is taken from
    pub fn base_sort(&self) -> ScoreSort {
        match self {
            Self::Recents => ScoreSort::Date,
            Self::HighsHighFirst | Self::HighsNewFirst => ScoreSort::High,
            Self::LowsLowFirst | Self::LowsNewFirst => ScoreSort::Low,
            Self::AvgRecents => ScoreSort::AvgDate,
            Self::AvgHighsHighFirst | Self::AvgHighsNewFirst => ScoreSort::AvgHigh,
            Self::AvgLowsLowFirst | Self::AvgLowsNewFirst => ScoreSort::AvgLow,
        }
    }

    /// The selection is re-sorted newest first
    pub fn new_first(&self) -> bool {
        matches!(
            self,
            Self::HighsNewFirst
                | Self::LowsNewFirst
                | Self::AvgHighsNewFirst
                | Self::AvgLowsNewFirst
        )
    }

    fn date_sort(&self) -> ScoreSort {
        if self.is_averaged() {
            ScoreSort::AvgDate
        } else {
            ScoreSort::Date
        }
    }
}

/// How much history a list covers
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    Week,
    Month,
    Year,
    #[default]
    All,
    /// Limited by an explicit count or percentage instead of dates
    Unspecified,
}

impl DateRange {
    /// Days before today covered by the range
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::Year => Some(365),
            Self::All | Self::Unspecified => None,
        }
    }
}

/// Parameters for [`Stats::filter`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterRequest {
    pub preference: FilterPreference,
    pub range: DateRange,
    /// Number of scores to keep, used with [`DateRange::Unspecified`]
    pub count: Option<usize>,
    /// Percentage of scores to keep, used with [`DateRange::Unspecified`]
    /// when `count` is absent
    pub percent: Option<f64>,
}

/// Entries kept for an unspecified range, at least 1 when any exist.
pub fn unspecified_count(len: usize, count: Option<usize>, percent: Option<f64>) -> usize {
    if len == 0 {
        return 0;
    }
    let wanted = match (count, percent) {
        (Some(count), _) => count,
        (None, Some(percent)) => (len as f64 * percent / 100.0).round() as usize,
        (None, None) => len,
    };
    wanted.clamp(1, len)
}

impl Stats {
    /// Select scores for a list.
    ///
    /// Date ranges keep entries less than the range's day count before
    /// `today` from the newest-first view, then reorder them to match the
    /// preference.
    pub fn filter(&self, request: &FilterRequest, today: NaiveDate) -> Vec<Score> {
        let preference = request.preference;
        let base = preference.base_sort();

        let mut selected: Vec<Score> = match request.range.days() {
            Some(days) => {
                let mut picked: Vec<Score> = self
                    .scores(preference.date_sort())
                    .iter()
                    .take_while(|s| (today - s.date).num_days() < days)
                    .copied()
                    .collect();
                match base {
                    ScoreSort::High | ScoreSort::AvgHigh => {
                        picked.sort_by(|a, b| b.score.cmp(&a.score))
                    }
                    ScoreSort::Low | ScoreSort::AvgLow => picked.sort_by_key(|s| s.score),
                    ScoreSort::Date | ScoreSort::AvgDate => {}
                }
                picked
            }
            None => {
                let view = self.scores(base);
                let keep = match request.range {
                    DateRange::Unspecified => {
                        unspecified_count(view.len(), request.count, request.percent)
                    }
                    _ => view.len(),
                };
                view[..keep].to_vec()
            }
        };

        if preference.new_first() {
            selected.sort_by(|a, b| b.date.cmp(&a.date));
        }
        selected
    }
}

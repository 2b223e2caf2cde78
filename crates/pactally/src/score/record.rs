use chrono::NaiveDate;
use serde::Serialize;

use crate::level::Level;

/// One game result, or a synthesized average of several games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub date: NaiveDate,
    pub score: u32,
    pub level: Level,
    /// 1 for a single game, otherwise the number of games averaged
    pub averaged_game_count: u32,
}

impl Score {
    /// Single game result
    pub fn new(date: NaiveDate, score: u32, level: Level) -> Self {
        Self {
            date,
            score,
            level,
            averaged_game_count: 1,
        }
    }

    /// Synthetic record standing for the average of `games` results
    pub fn averaged(date: NaiveDate, score: u32, level: Level, games: u32) -> Self {
        debug_assert!(games >= 1, "an average needs at least one game");
        Self {
            date,
            score,
            level,
            averaged_game_count: games.max(1),
        }
    }

    pub fn is_single(&self) -> bool {
        self.averaged_game_count == 1
    }

    pub fn is_averaged(&self) -> bool {
        self.averaged_game_count > 1
    }

    /// Upsert identity: same score value at the same level, regardless of date.
    pub fn same_entry(&self, other: &Score) -> bool {
        self.score == other.score && self.level.num == other.level.num
    }

    /// Arcade scores always end in zero; averages are exempt.
    pub fn has_valid_value(&self) -> bool {
        !self.is_single() || self.score % 10 == 0
    }

    /// Fraction of the best possible score for reaching this level.
    ///
    /// `None` for invalid levels.
    pub fn optimal_ratio(&self) -> Option<f64> {
        if !self.level.is_valid() || self.level.optimal_score_cumulative == 0 {
            return None;
        }
        Some(self.score as f64 / self.level.optimal_score_cumulative as f64)
    }
}

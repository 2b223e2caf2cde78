use chrono::NaiveDate;
use serde::Serialize;

use crate::stats::{DailyStats, Stats, Streak};

use super::ScoreJson;

/// Streak with its derived fields spelled out
#[derive(Debug, Clone, Serialize)]
pub struct StreakJson {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub length: u32,
    pub current: bool,
}

impl StreakJson {
    fn new(streak: &Streak, today: NaiveDate) -> Self {
        Self {
            start: streak.start,
            end: streak.end,
            length: streak.length(),
            current: streak.is_current(today),
        }
    }
}

/// Serializable snapshot of the headline statistics
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub games: usize,
    pub days_with_averages: usize,
    pub high: Option<ScoreJson>,
    pub low: Option<ScoreJson>,
    pub average: Option<ScoreJson>,
    pub recent_streak: StreakJson,
    pub longest_streak: StreakJson,
    pub best_day: Option<DailyStats>,
    pub worst_day: Option<DailyStats>,
    /// Best single game per level
    pub optimals: Vec<ScoreJson>,
    /// Best daily average per level
    pub optimals_daily: Vec<ScoreJson>,
}

impl StatsSummary {
    pub fn new(stats: &Stats, today: NaiveDate) -> Self {
        let summary = stats.daily_stats_summary(today);
        Self {
            games: stats.single_games_count(),
            days_with_averages: stats.daily_stats().count(),
            high: stats.high_score().map(ScoreJson::from),
            low: stats.low_score().map(ScoreJson::from),
            average: stats.average().map(ScoreJson::from),
            recent_streak: StreakJson::new(stats.recent_streak(), today),
            longest_streak: StreakJson::new(stats.longest_streak(), today),
            best_day: summary.high.cloned(),
            worst_day: summary.low.cloned(),
            optimals: stats.optimals().map(ScoreJson::from).collect(),
            optimals_daily: stats.optimals_daily().map(ScoreJson::from).collect(),
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelCatalog;
    use crate::score::ScoreStore;
    use crate::stats::tally;
    use crate::storage::parse_csv;

    #[test]
    fn test_summary_json() {
        let mut catalog = LevelCatalog::new();
        let mut store = ScoreStore::new();
        store.import(
            parse_csv("01/01/24,100,0\n01/01/24,200,0\n01/02/24,500,1"),
            &mut catalog,
        );
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let stats = tally(&store, &catalog, today, None);

        let summary = StatsSummary::new(&stats, today);
        assert_eq!(summary.games, 3);
        assert_eq!(summary.days_with_averages, 1);
        assert_eq!(summary.recent_streak.length, 2);
        assert!(summary.recent_streak.current);
        assert_eq!(summary.optimals.len(), 2);
        assert_eq!(summary.optimals_daily.len(), 1);

        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(value["high"]["score"], 500);
        assert_eq!(value["best_day"]["average_score"], 150);
        assert_eq!(value["best_day"]["rank"][0], 1);
    }

    #[test]
    fn test_empty_summary() {
        let catalog = LevelCatalog::with_max_level(2);
        let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let stats = tally(&ScoreStore::new(), &catalog, today, None);

        let summary = StatsSummary::new(&stats, today);
        assert_eq!(summary.games, 0);
        assert!(summary.high.is_none());
        assert!(summary.best_day.is_none());
        assert_eq!(summary.recent_streak.length, 0);
    }
}

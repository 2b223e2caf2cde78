use std::collections::{BTreeMap, VecDeque};

use chrono::NaiveDate;
use serde::Serialize;

use crate::level::{INVALID_LEVEL_NUM, Level, LevelCatalog};
use crate::score::{Score, ScoreStore};

/// Days included in the rolling average
pub const ROLLING_WINDOW_DAYS: usize = 7;
/// Fewer games than this on a day produce no daily average
pub const MIN_GAMES_FOR_AVERAGE: usize = 2;

/// Summary of one day with at least two games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    /// Truncated mean score
    pub average_score: u32,
    /// Rounded mean level index, `-1` if no game had a valid level
    pub average_level: i32,
    pub games_played: u32,
    /// `(position, total)` among all days, 1 being the best average
    pub rank: (usize, usize),
    /// Mean of this and up to six earlier daily averages
    pub seven_day_average: u32,
    /// Games per level index
    pub levels_reached: BTreeMap<i32, u32>,
}

impl DailyStats {
    pub fn is_high(&self) -> bool {
        self.rank.0 == 1
    }

    pub fn is_low(&self) -> bool {
        self.rank.1 > 0 && self.rank.0 == self.rank.1
    }

    fn from_games(date: NaiveDate, games: &[&Score]) -> Self {
        let count = games.len() as u64;
        let total: u64 = games.iter().map(|s| s.score as u64).sum();

        let mut levels_reached = BTreeMap::new();
        let mut level_sum = 0u64;
        let mut level_games = 0u64;
        for game in games {
            *levels_reached.entry(game.level.num).or_insert(0) += 1;
            if game.level.is_valid() {
                level_sum += game.level.num as u64;
                level_games += 1;
            }
        }
        let average_level = if level_games == 0 {
            INVALID_LEVEL_NUM
        } else {
            (level_sum as f64 / level_games as f64).round() as i32
        };

        Self {
            date,
            average_score: (total / count) as u32,
            average_level,
            games_played: count as u32,
            rank: (0, 0),
            seven_day_average: 0,
            levels_reached,
        }
    }
}

/// Everything the daily pass derives
#[derive(Debug, Clone, Default)]
pub(crate) struct DailyTables {
    pub by_date: BTreeMap<NaiveDate, DailyStats>,
    /// Dates ordered by rank, best first
    pub ranked: Vec<NaiveDate>,
    /// Date to averaged score, for nearest-day lookups
    pub averages: BTreeMap<NaiveDate, Score>,
    pub avg_by_date: Vec<Score>,
    pub avg_high: Vec<Score>,
    pub avg_low: Vec<Score>,
}

/// Build daily summaries and fold the best daily averages into
/// `optimals_daily`.
pub(crate) fn tally_days(
    store: &ScoreStore,
    catalog: &LevelCatalog,
    optimals_daily: &mut [Option<Score>],
) -> DailyTables {
    let mut window: VecDeque<u32> = VecDeque::with_capacity(ROLLING_WINDOW_DAYS + 1);
    let mut days: Vec<DailyStats> = Vec::new();

    for (date, scores) in store.day_buckets() {
        let games: Vec<&Score> = scores.iter().filter(|s| s.is_single()).collect();
        if games.len() < MIN_GAMES_FOR_AVERAGE {
            continue;
        }

        let mut daily = DailyStats::from_games(date, &games);
        window.push_back(daily.average_score);
        if window.len() > ROLLING_WINDOW_DAYS {
            window.pop_front();
        }
        let window_total: u64 = window.iter().map(|&v| v as u64).sum();
        daily.seven_day_average = (window_total / window.len() as u64) as u32;
        days.push(daily);
    }

    days.sort_by(|a, b| {
        b.average_score
            .cmp(&a.average_score)
            .then(b.date.cmp(&a.date))
    });
    let total = days.len();

    let mut tables = DailyTables::default();
    for (position, mut daily) in days.into_iter().enumerate() {
        daily.rank = (position + 1, total);

        let level = catalog
            .get(daily.average_level)
            .copied()
            .unwrap_or(Level::INVALID);
        let average = Score::averaged(
            daily.date,
            daily.average_score,
            level,
            daily.games_played,
        );

        if let Some(slot) = usize::try_from(daily.average_level)
            .ok()
            .and_then(|i| optimals_daily.get_mut(i))
        {
            if slot.is_none_or(|best| average.score > best.score) {
                *slot = Some(average);
            }
        }

        tables.ranked.push(daily.date);
        tables.avg_high.push(average);
        tables.averages.insert(daily.date, average);
        tables.by_date.insert(daily.date, daily);
    }

    tables.avg_low = tables.avg_high.iter().rev().copied().collect();
    tables.avg_by_date = tables.averages.values().rev().copied().collect();
    tables
}

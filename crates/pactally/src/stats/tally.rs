use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::level::{Level, LevelCatalog};
use crate::score::{Score, ScoreStore};

use super::daily::tally_days;
use super::{Stats, Streaks};

/// Recompute every aggregate from `store`.
///
/// Only single games are tallied. When `previous_streaks` is given and its
/// recent streak already includes `today`, the streaks are carried over
/// instead of rescanning every played day; callers must only pass them when
/// the set of played days is unchanged.
pub fn tally(
    store: &ScoreStore,
    catalog: &LevelCatalog,
    today: NaiveDate,
    previous_streaks: Option<&Streaks>,
) -> Stats {
    let level_count = catalog.len();
    let mut optimals: Vec<Option<Score>> = vec![None; level_count];
    let mut optimals_daily: Vec<Option<Score>> = vec![None; level_count];

    let mut chronological: Vec<Score> = Vec::with_capacity(store.len());
    let mut total_score = 0u64;
    let mut level_sum = 0u64;
    let mut level_games = 0u64;
    let mut level_counts: BTreeMap<i32, u32> = BTreeMap::new();
    let mut high: Option<Score> = None;
    let mut low: Option<Score> = None;

    for score in store.iter().filter(|s| s.is_single()) {
        total_score += score.score as u64;
        *level_counts.entry(score.level.num).or_insert(0) += 1;

        // Later games win ties since days are visited in order
        if high.is_none_or(|h| score.score >= h.score) {
            high = Some(*score);
        }
        if low.is_none_or(|l| score.score <= l.score) {
            low = Some(*score);
        }

        if score.level.is_valid() {
            level_sum += score.level.num as u64;
            level_games += 1;
            if let Some(slot) = optimals.get_mut(score.level.num as usize) {
                if slot.is_none_or(|best| score.score > best.score) {
                    *slot = Some(*score);
                }
            }
        }

        chronological.push(*score);
    }

    let single_games_count = chronological.len();
    let average = chronological.last().map(|latest| {
        let level = if level_games == 0 {
            Level::INVALID
        } else {
            let mean = (level_sum as f64 / level_games as f64).round() as i32;
            catalog.get(mean).copied().unwrap_or(Level::INVALID)
        };
        Score::averaged(
            latest.date,
            (total_score / single_games_count as u64) as u32,
            level,
            single_games_count as u32,
        )
    });

    let by_date: Vec<Score> = chronological.into_iter().rev().collect();
    let mut by_high = by_date.clone();
    by_high.sort_by(|a, b| b.score.cmp(&a.score));
    let mut by_low = by_date.clone();
    by_low.sort_by_key(|s| s.score);

    let daily = tally_days(store, catalog, &mut optimals_daily);

    let streaks = match previous_streaks {
        Some(previous) if previous.recent.is_current(today) => {
            debug!("Recent streak already includes today, skipping streak scan");
            *previous
        }
        _ => Streaks::from_days(store.days()),
    };

    debug!(
        "Tallied {} games over {} days ({} with averages)",
        single_games_count,
        store.day_count(),
        daily.by_date.len()
    );

    Stats {
        single_games_count,
        total_score,
        average,
        high,
        low,
        level_counts,
        optimals,
        optimals_daily,
        by_date,
        by_high,
        by_low,
        daily: daily.by_date,
        daily_ranked: daily.ranked,
        averages: daily.averages,
        avg_by_date: daily.avg_by_date,
        avg_high: daily.avg_high,
        avg_low: daily.avg_low,
        streaks,
    }
}

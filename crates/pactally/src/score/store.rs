use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::{error, warn};

use crate::error::{Error, Result};
use crate::level::LevelCatalog;
use crate::storage::ScoreRow;

use super::Score;

/// What an upsert did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// First score recorded for its day
    NewDay,
    Appended,
    Replaced,
}

/// What a delete did to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    NotFound,
    Removed,
    /// The last score of its day was removed, so the day is gone too
    DayRemoved,
}

impl DeleteOutcome {
    pub fn removed(&self) -> bool {
        !matches!(self, Self::NotFound)
    }
}

/// Counts from a bulk import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

/// Scores grouped by calendar day.
///
/// Days iterate in chronological order; scores within a day keep insertion
/// order. A day never maps to an empty list.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    days: BTreeMap<NaiveDate, Vec<Score>>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `score`, replacing an entry with the same score and level on
    /// the same day.
    pub fn upsert(&mut self, score: Score) -> Result<UpsertOutcome> {
        if !score.is_single() {
            error!("Rejected averaged score {} on {}", score.score, score.date);
            return Err(Error::AveragedScore {
                score: score.score,
                date: score.date,
            });
        }
        if !score.has_valid_value() {
            error!("Rejected single-game score {} on {}", score.score, score.date);
            return Err(Error::InvalidScore { score: score.score });
        }

        let Some(bucket) = self.days.get_mut(&score.date) else {
            self.days.insert(score.date, vec![score]);
            return Ok(UpsertOutcome::NewDay);
        };

        match bucket.iter_mut().find(|existing| existing.same_entry(&score)) {
            Some(existing) => {
                *existing = score;
                Ok(UpsertOutcome::Replaced)
            }
            None => {
                bucket.push(score);
                Ok(UpsertOutcome::Appended)
            }
        }
    }

    /// Remove the first entry matching `score` on its day.
    pub fn delete(&mut self, score: &Score) -> DeleteOutcome {
        let Some(bucket) = self.days.get_mut(&score.date) else {
            return DeleteOutcome::NotFound;
        };
        let Some(index) = bucket.iter().position(|s| s.same_entry(score)) else {
            return DeleteOutcome::NotFound;
        };

        bucket.remove(index);
        if bucket.is_empty() {
            self.days.remove(&score.date);
            DeleteOutcome::DayRemoved
        } else {
            DeleteOutcome::Removed
        }
    }

    /// Scores recorded on `day`, empty if none.
    pub fn scores_for(&self, day: NaiveDate) -> &[Score] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Upsert parsed rows as single games.
    ///
    /// Rows that fail validation are skipped and logged so a partially
    /// corrupt history still loads.
    pub fn import<I>(&mut self, rows: I, catalog: &mut LevelCatalog) -> ImportReport
    where
        I: IntoIterator<Item = ScoreRow>,
    {
        let mut report = ImportReport::default();
        for row in rows {
            let score = Score::new(row.date, row.score, catalog.level(row.level));
            match self.upsert(score) {
                Ok(_) => report.imported += 1,
                Err(e) => {
                    warn!("Skipping imported row {:?}: {}", row, e);
                    report.skipped += 1;
                }
            }
        }
        report
    }

    /// All scores, chronologically by day
    pub fn iter(&self) -> impl Iterator<Item = &Score> {
        self.days.values().flatten()
    }

    /// Days with at least one score, ascending
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.keys().copied()
    }

    pub fn day_buckets(&self) -> impl Iterator<Item = (NaiveDate, &[Score])> {
        self.days.iter().map(|(day, scores)| (*day, scores.as_slice()))
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of stored scores
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn score(d: u32, value: u32, level: i32, catalog: &mut LevelCatalog) -> Score {
        Score::new(day(d), value, catalog.level(level))
    }

    #[test]
    fn test_upsert_new_day_and_append() {
        let mut catalog = LevelCatalog::with_max_level(10);
        let mut store = ScoreStore::new();

        let first = score(1, 1000, 2, &mut catalog);
        let second = score(1, 2000, 3, &mut catalog);
        assert_eq!(store.upsert(first).unwrap(), UpsertOutcome::NewDay);
        assert_eq!(store.upsert(second).unwrap(), UpsertOutcome::Appended);

        assert_eq!(store.scores_for(day(1)), &[first, second]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.day_count(), 1);
    }

    #[test]
    fn test_upsert_replaces_matching_entry_in_place() {
        let mut catalog = LevelCatalog::with_max_level(10);
        let mut store = ScoreStore::new();

        store.upsert(score(1, 1000, 2, &mut catalog)).unwrap();
        store.upsert(score(1, 3000, 4, &mut catalog)).unwrap();
        let again = score(1, 1000, 2, &mut catalog);
        assert_eq!(store.upsert(again).unwrap(), UpsertOutcome::Replaced);

        let bucket = store.scores_for(day(1));
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket[0].score, 1000);
        assert_eq!(bucket[1].score, 3000);
    }

    #[test]
    fn test_upsert_rejects_non_multiple_of_ten() {
        let mut store = ScoreStore::new();
        let bad = Score::new(day(1), 1234, Level::INVALID);
        assert!(matches!(
            store.upsert(bad),
            Err(Error::InvalidScore { score: 1234 })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_upsert_rejects_averaged_record() {
        let mut catalog = LevelCatalog::with_max_level(10);
        let mut store = ScoreStore::new();
        store.upsert(score(1, 1000, 2, &mut catalog)).unwrap();

        let average = Score::averaged(day(1), 1555, catalog.level(2), 3);
        assert!(matches!(
            store.upsert(average),
            Err(Error::AveragedScore { score: 1555, .. })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_prunes_empty_day() {
        let mut catalog = LevelCatalog::with_max_level(10);
        let mut store = ScoreStore::new();
        let a = score(1, 1000, 2, &mut catalog);
        let b = score(1, 2000, 2, &mut catalog);
        store.upsert(a).unwrap();
        store.upsert(b).unwrap();

        assert_eq!(store.delete(&a), DeleteOutcome::Removed);
        assert!(!store.scores_for(day(1)).iter().any(|s| s.same_entry(&a)));
        assert_eq!(store.delete(&b), DeleteOutcome::DayRemoved);
        assert_eq!(store.day_count(), 0);
        assert!(store.scores_for(day(1)).is_empty());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut catalog = LevelCatalog::with_max_level(10);
        let mut store = ScoreStore::new();
        store.upsert(score(1, 1000, 2, &mut catalog)).unwrap();

        assert_eq!(
            store.delete(&score(2, 1000, 2, &mut catalog)),
            DeleteOutcome::NotFound
        );
        assert_eq!(
            store.delete(&score(1, 1000, 3, &mut catalog)),
            DeleteOutcome::NotFound
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_import_skips_invalid_rows() {
        let mut catalog = LevelCatalog::with_max_level(10);
        let mut store = ScoreStore::new();
        let rows = vec![
            ScoreRow { date: day(1), score: 1000, level: 1 },
            ScoreRow { date: day(1), score: 1005, level: 1 },
            ScoreRow { date: day(2), score: 500, level: -1 },
        ];

        let report = store.import(rows, &mut catalog);
        assert_eq!(report, ImportReport { imported: 2, skipped: 1 });
        assert_eq!(store.scores_for(day(2))[0].level, Level::INVALID);
    }

    #[test]
    fn test_iter_is_chronological() {
        let mut catalog = LevelCatalog::with_max_level(10);
        let mut store = ScoreStore::new();
        store.upsert(score(5, 500, 1, &mut catalog)).unwrap();
        store.upsert(score(2, 200, 1, &mut catalog)).unwrap();
        store.upsert(score(9, 900, 1, &mut catalog)).unwrap();

        let values: Vec<u32> = store.iter().map(|s| s.score).collect();
        assert_eq!(values, vec![200, 500, 900]);
        assert_eq!(store.days().collect::<Vec<_>>(), vec![day(2), day(5), day(9)]);
    }
}

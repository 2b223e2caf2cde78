//! Owner of the store, the catalog and the tallied statistics.
//!
//! [`StatManager`] is the single writer: every mutation, save and re-tally
//! goes through `&mut self`. Hosts that share it across threads wrap it in
//! [`SharedStatManager`], which serializes all access behind one mutex so
//! two saves can never overlap.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::level::{Level, LevelCatalog};
use crate::query::{
    DailySummary, DateRange, DisplayStats, FilterPreference, FilterRequest, ScoreSort,
};
use crate::score::{DeleteOutcome, ImportReport, Score, ScoreStore, UpsertOutcome};
use crate::stats::{Stats, Streaks, tally};
use crate::storage::{ScoreFile, format_csv, parse_csv};

pub struct StatManager {
    config: TrackerConfig,
    catalog: LevelCatalog,
    store: ScoreStore,
    file: Option<ScoreFile>,
    clock: Box<dyn Clock>,
    stats: Stats,
    /// Aggregates no longer match the store
    dirty: bool,
    /// The set of played days changed since streaks were last computed
    days_changed: bool,
    preference: FilterPreference,
}

impl StatManager {
    /// In-memory manager with no backing file
    pub fn new(config: TrackerConfig) -> Self {
        let catalog = LevelCatalog::with_max_level(config.max_level);
        let preference = config.preference;
        Self {
            config,
            catalog,
            store: ScoreStore::new(),
            file: None,
            clock: Box::new(SystemClock),
            stats: Stats::default(),
            dirty: true,
            days_changed: true,
            preference,
        }
    }

    /// Manager backed by `config.data_file`, loading whatever it holds.
    pub fn open(config: TrackerConfig) -> Result<Self> {
        let file = ScoreFile::new(&config.data_file);
        let mut manager = Self::new(config);
        let (store, report) = file.load(&mut manager.catalog)?;
        if report.skipped > 0 {
            warn!("Skipped {} invalid scores while loading", report.skipped);
        }
        manager.store = store;
        manager.file = Some(file);
        Ok(manager)
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self.dirty = true;
        self
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    /// Resolve a level index through the catalog
    pub fn level(&mut self, num: i32) -> Level {
        self.catalog.level(num)
    }

    pub fn store(&self) -> &ScoreStore {
        &self.store
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn preference(&self) -> FilterPreference {
        self.preference
    }

    pub fn set_preference(&mut self, preference: FilterPreference) {
        self.preference = preference;
    }

    fn mark_dirty(&mut self, days_changed: bool) {
        self.dirty = true;
        self.days_changed |= days_changed;
    }

    /// Add or replace a score and persist the store.
    pub fn upsert(&mut self, score: Score) -> Result<UpsertOutcome> {
        let outcome = self.store.upsert(score)?;
        debug!("Upserted {} on {}: {:?}", score.score, score.date, outcome);
        self.mark_dirty(outcome == UpsertOutcome::NewDay);
        if self.config.autosave {
            self.persist();
        }
        Ok(outcome)
    }

    /// Record a single game from raw values
    pub fn add(&mut self, date: NaiveDate, value: u32, level: i32) -> Result<Score> {
        let score = Score::new(date, value, self.catalog.level(level));
        self.upsert(score)?;
        Ok(score)
    }

    /// Replace `old` with `new`, saving once.
    pub fn update(&mut self, old: &Score, new: Score) -> Result<UpsertOutcome> {
        if !new.is_single() || !new.has_valid_value() {
            // Validate before removing anything so a bad edit loses nothing
            return self.store.upsert(new);
        }
        let removed = self.store.delete(old);
        self.mark_dirty(removed == DeleteOutcome::DayRemoved);
        self.upsert(new)
    }

    /// Remove a score. Does not save; call [`StatManager::save`] once a
    /// batch of deletes is done.
    pub fn delete(&mut self, score: &Score) -> DeleteOutcome {
        let outcome = self.store.delete(score);
        if outcome.removed() {
            self.mark_dirty(outcome == DeleteOutcome::DayRemoved);
        }
        outcome
    }

    /// Remove several scores and save once. Returns how many were found.
    pub fn delete_many<'a, I>(&mut self, scores: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Score>,
    {
        let removed = scores
            .into_iter()
            .filter(|score| self.delete(score).removed())
            .count();
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    /// Bulk import `date,score,level` lines as single games.
    pub fn import_csv(&mut self, content: &str) -> ImportReport {
        let report = self.store.import(parse_csv(content), &mut self.catalog);
        info!(
            "Imported {} scores ({} skipped)",
            report.imported, report.skipped
        );
        if report.imported > 0 {
            self.mark_dirty(true);
            if self.config.autosave {
                self.persist();
            }
        }
        report
    }

    /// Every score in the persisted text form, newest first
    pub fn export_csv(&mut self) -> String {
        format_csv(self.scores(ScoreSort::Date))
    }

    /// Write the store to its file, if it has one.
    pub fn save(&self) -> Result<()> {
        match &self.file {
            Some(file) => file.save(&self.store),
            None => Ok(()),
        }
    }

    /// Save, logging failures. The in-memory store stays authoritative.
    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!("Failed to save scores: {}", e);
        }
    }

    /// Recompute aggregates if the store changed since the last tally.
    pub fn tally(&mut self) {
        if !self.dirty {
            return;
        }
        let today = self.clock.today();
        let previous = (!self.days_changed).then_some(&self.stats.streaks);
        let stats = tally(&self.store, &self.catalog, today, previous);

        self.stats = stats;
        self.days_changed = false;
        self.dirty = false;
    }

    /// Up-to-date aggregates
    pub fn stats(&mut self) -> &Stats {
        self.tally();
        &self.stats
    }

    pub fn scores(&mut self, sorted_by: ScoreSort) -> &[Score] {
        self.stats().scores(sorted_by)
    }

    pub fn scores_for(&self, day: NaiveDate) -> &[Score] {
        self.store.scores_for(day)
    }

    pub fn daily_stats_summary(&mut self, date: NaiveDate) -> DailySummary<'_> {
        self.stats().daily_stats_summary(date)
    }

    pub fn display_stats(&mut self, score: &Score) -> Option<DisplayStats> {
        self.stats().display_stats(score)
    }

    pub fn streaks(&mut self) -> Streaks {
        *self.stats().streaks()
    }

    /// Scores for a list using the current preference.
    ///
    /// `refresh` forces a full re-tally even if nothing changed.
    pub fn filter_all(
        &mut self,
        refresh: bool,
        range: DateRange,
        count: Option<usize>,
        percent: Option<f64>,
    ) -> Vec<Score> {
        if refresh {
            self.dirty = true;
        }
        let request = FilterRequest {
            preference: self.preference,
            range,
            count,
            percent,
        };
        let today = self.clock.today();
        self.stats().filter(&request, today)
    }
}

/// [`StatManager`] shared between threads.
///
/// Every call holds the one lock for its whole mutate-and-save sequence.
#[derive(Clone)]
pub struct SharedStatManager {
    inner: Arc<Mutex<StatManager>>,
}

impl SharedStatManager {
    pub fn new(manager: StatManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StatManager> {
        // A panic mid-mutation leaves the store usable; the dirty flag forces
        // a fresh tally on the next query
        self.inner.lock().unwrap_or_else(|poisoned| {
            let mut guard = poisoned.into_inner();
            guard.dirty = true;
            guard
        })
    }

    /// Run `f` with exclusive access
    pub fn with<R>(&self, f: impl FnOnce(&mut StatManager) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn upsert(&self, score: Score) -> Result<UpsertOutcome> {
        self.with(|manager| manager.upsert(score))
    }

    pub fn delete_many(&self, scores: &[Score]) -> Result<usize> {
        self.with(|manager| manager.delete_many(scores))
    }

    pub fn save(&self) -> Result<()> {
        self.with(|manager| manager.save())
    }

    pub fn streaks(&self) -> Streaks {
        self.with(|manager| manager.streaks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::Error;
    use std::thread;
    use tempfile::TempDir;

    fn ymd(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn manager() -> StatManager {
        StatManager::new(TrackerConfig::builder().max_level(20).build())
            .with_clock(FixedClock(ymd(1, 10)))
    }

    #[test]
    fn test_tally_is_gated_by_dirty_flag() {
        let mut manager = manager();
        assert!(manager.is_dirty());
        manager.tally();
        assert!(!manager.is_dirty());

        manager.add(ymd(1, 1), 100, 0).unwrap();
        assert!(manager.is_dirty());
        assert_eq!(manager.stats().single_games_count(), 1);
        assert!(!manager.is_dirty());
    }

    #[test]
    fn test_invalid_score_does_not_dirty() {
        let mut manager = manager();
        manager.tally();
        assert!(matches!(
            manager.add(ymd(1, 1), 105, 0),
            Err(Error::InvalidScore { .. })
        ));
        assert!(!manager.is_dirty());
    }

    #[test]
    fn test_delete_then_lookup() {
        let mut manager = manager();
        let score = manager.add(ymd(1, 1), 100, 0).unwrap();
        manager.add(ymd(1, 1), 200, 0).unwrap();

        assert_eq!(manager.delete(&score), DeleteOutcome::Removed);
        assert!(!manager.scores_for(ymd(1, 1)).iter().any(|s| s.same_entry(&score)));
        assert_eq!(manager.stats().single_games_count(), 1);
    }

    #[test]
    fn test_update_replaces_score() {
        let mut manager = manager();
        let old = manager.add(ymd(1, 1), 100, 0).unwrap();
        let new = Score::new(ymd(1, 2), 300, manager.level(1));

        manager.update(&old, new).unwrap();
        assert!(manager.scores_for(ymd(1, 1)).is_empty());
        assert_eq!(manager.scores_for(ymd(1, 2)), &[new]);

        let bad = Score::new(ymd(1, 2), 301, manager.level(1));
        assert!(manager.update(&new, bad).is_err());
        assert_eq!(manager.scores_for(ymd(1, 2)), &[new]);
    }

    #[test]
    fn test_streaks_follow_day_changes() {
        let mut manager = manager();
        manager.add(ymd(1, 9), 100, 0).unwrap();
        let today = manager.add(ymd(1, 10), 100, 0).unwrap();
        assert_eq!(manager.streaks().recent.length(), 2);

        // Filling a gap while the recent streak is current still rescans
        manager.add(ymd(1, 7), 100, 0).unwrap();
        assert_eq!(manager.streaks().longest.length(), 2);
        manager.add(ymd(1, 8), 100, 0).unwrap();
        assert_eq!(manager.streaks().recent.length(), 4);

        manager.delete(&today);
        let streaks = manager.streaks();
        assert_eq!(streaks.recent.end, Some(ymd(1, 9)));
        assert!(streaks.recent.is_at_risk(manager.today()));
    }

    #[test]
    fn test_filter_all_uses_preference() {
        let mut manager = manager();
        manager.import_csv("01/01/24,300,0\n01/05/24,100,0\n01/09/24,200,0\n");

        manager.set_preference(FilterPreference::HighsHighFirst);
        let highs: Vec<u32> = manager
            .filter_all(false, DateRange::All, None, None)
            .iter()
            .map(|s| s.score)
            .collect();
        assert_eq!(highs, vec![300, 200, 100]);

        let week: Vec<u32> = manager
            .filter_all(true, DateRange::Week, None, None)
            .iter()
            .map(|s| s.score)
            .collect();
        assert_eq!(week, vec![200, 100]);
    }

    #[test]
    fn test_open_persists_on_upsert_not_delete() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.csv");
        let config = TrackerConfig::builder().data_file(&path).max_level(20).build();

        let mut manager = StatManager::open(config.clone()).unwrap();
        let score = manager.add(ymd(1, 1), 100, 0).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "01/01/24,100,0\n");

        manager.delete(&score);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "01/01/24,100,0\n");
        manager.save().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");

        let reopened = StatManager::open(config).unwrap();
        assert!(reopened.store().is_empty());
    }

    #[test]
    fn test_averaged_record_is_not_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.csv");
        let config = TrackerConfig::builder().data_file(&path).max_level(20).build();

        let mut manager = StatManager::open(config.clone()).unwrap();
        let single = manager.add(ymd(1, 1), 1000, 2).unwrap();
        let average = Score::averaged(ymd(1, 1), 1555, manager.level(2), 3);
        assert!(matches!(
            manager.upsert(average),
            Err(Error::AveragedScore { score: 1555, .. })
        ));
        assert!(manager.update(&single, average).is_err());

        assert_eq!(manager.store().len(), 1);
        assert_eq!(manager.export_csv(), "01/01/24,1000,2\n");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "01/01/24,1000,2\n");

        let reopened = StatManager::open(config).unwrap();
        assert_eq!(reopened.store().len(), 1);
    }

    #[test]
    fn test_delete_many_saves_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("scores.csv");
        let config = TrackerConfig::builder().data_file(&path).build();

        let mut manager = StatManager::open(config).unwrap();
        let a = manager.add(ymd(1, 1), 100, 0).unwrap();
        let b = manager.add(ymd(1, 2), 200, 0).unwrap();
        let stray = Score::new(ymd(1, 3), 300, manager.level(0));

        assert_eq!(manager.delete_many([&a, &b, &stray]).unwrap(), 2);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut manager = manager();
        manager.import_csv("01/01/24,100,0\n01/01/24,200,0\n01/02/24,500,1\n01/03/24,70,x\n");
        let exported = manager.export_csv();

        let mut copy = self::manager();
        copy.import_csv(&exported);

        let mut before: Vec<(NaiveDate, u32, i32)> = manager
            .store()
            .iter()
            .map(|s| (s.date, s.score, s.level.num))
            .collect();
        let mut after: Vec<(NaiveDate, u32, i32)> = copy
            .store()
            .iter()
            .map(|s| (s.date, s.score, s.level.num))
            .collect();
        before.sort();
        after.sort();
        assert_eq!(before, after);
        assert_eq!(before.len(), 4);
    }

    #[test]
    fn test_shared_manager_serializes_writers() {
        let shared = SharedStatManager::new(manager());
        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25u32 {
                        let date = ymd(2, 1 + t);
                        shared
                            .with(|m| m.add(date, (i + 1) * 10, 0))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let count = shared.with(|m| m.stats().single_games_count());
        assert_eq!(count, 100);
        assert_eq!(shared.streaks().recent.length(), 4);
    }
}

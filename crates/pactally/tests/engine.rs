use chrono::{Days, NaiveDate};
use pactally::{
    FixedClock, ScoreSort, StatManager, TrackerConfig, format_csv, parse_csv, tally,
};
use pactally::{LevelCatalog, ScoreStore};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn manager(today: NaiveDate) -> StatManager {
    StatManager::new(TrackerConfig::default()).with_clock(FixedClock(today))
}

#[test]
fn concrete_import_scenario() {
    let mut manager = manager(ymd(2024, 1, 2));
    let report = manager.import_csv("01/01/24,100,0\n01/01/24,200,0\n01/02/24,500,1");
    assert_eq!(report.imported, 3);

    let stats = manager.stats();
    assert_eq!(stats.single_games_count(), 3);
    assert_eq!(stats.high_score().unwrap().score, 500);
    assert_eq!(stats.low_score().unwrap().score, 100);

    let days: Vec<_> = stats.daily_stats().collect();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date, ymd(2024, 1, 1));
    assert_eq!(days[0].average_score, 150);
    assert_eq!(days[0].games_played, 2);
}

#[test]
fn streak_with_gap() {
    let d = ymd(2024, 3, 1);
    let days = [0u64, 1, 2, 10].map(|offset| d.checked_add_days(Days::new(offset)).unwrap());

    let mut manager = manager(days[3]);
    for day in days {
        manager.add(day, 1000, 2).unwrap();
    }

    let streaks = manager.streaks();
    assert_eq!(streaks.recent.length(), 1);
    assert_eq!(streaks.recent.start, Some(days[3]));
    assert_eq!(streaks.longest.length(), 3);
    assert!(streaks.recent.is_current(days[3]));
}

#[test]
fn ranking_extremes_among_distinct_scores() {
    let mut manager = manager(ymd(2024, 4, 30));
    let values = [1230, 45_670, 8_900, 23_450, 670, 99_990, 12_000];
    for (i, value) in values.iter().enumerate() {
        manager.add(ymd(2024, 4, 1 + i as u32), *value, i as i32).unwrap();
    }

    let best = *manager.stats().high_score().unwrap();
    let worst = *manager.stats().low_score().unwrap();

    let top = manager.display_stats(&best).unwrap();
    assert_eq!(top.rank, 1);
    assert_eq!(top.label, "★");

    let bottom = manager.display_stats(&worst).unwrap();
    assert_eq!(bottom.rank, values.len());
    assert_eq!(bottom.label, "LOW");
}

#[test]
fn export_reimport_preserves_triples() {
    let history = "\
02/01/24,1000,0
02/01/24,2000,1
02/01/24,2000,2
02/03/24,15000,4
02/04/24,300,junk
02/07/24,76540,9
";
    let mut catalog = LevelCatalog::new();
    let mut original = ScoreStore::new();
    original.import(parse_csv(history), &mut catalog);

    let stats = tally(&original, &catalog, ymd(2024, 2, 7), None);
    let exported = format_csv(stats.scores(ScoreSort::Date));

    let mut copy = ScoreStore::new();
    copy.import(parse_csv(&exported), &mut catalog);

    let triples = |store: &ScoreStore| {
        let mut all: Vec<(NaiveDate, u32, i32)> = store
            .iter()
            .map(|s| (s.date, s.score, s.level.num))
            .collect();
        all.sort();
        all
    };
    assert_eq!(triples(&original), triples(&copy));
    assert_eq!(triples(&copy).len(), 6);
}

#[test]
fn deleted_score_is_gone_from_its_day() {
    let mut manager = manager(ymd(2024, 5, 5));
    let kept = manager.add(ymd(2024, 5, 5), 3000, 1).unwrap();
    let removed = manager.add(ymd(2024, 5, 5), 4000, 2).unwrap();

    manager.delete(&removed);
    let remaining = manager.scores_for(ymd(2024, 5, 5));
    assert!(!remaining.iter().any(|s| s.same_entry(&removed)));
    assert!(remaining.iter().any(|s| s.same_entry(&kept)));
}

#[test]
fn level_catalog_recurrence_and_idempotence() {
    let mut catalog = LevelCatalog::with_max_level(0);
    let mut previous = catalog.level(0);
    assert_eq!(previous.optimal_score_cumulative, previous.optimal_score as u64);

    for n in 1..60 {
        let level = catalog.level(n);
        assert_eq!(
            level.optimal_score_cumulative,
            previous.optimal_score_cumulative + level.optimal_score as u64
        );
        assert_eq!(catalog.level(n), level);
        previous = level;
    }
}

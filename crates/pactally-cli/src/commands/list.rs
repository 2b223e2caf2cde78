//! List scores by sort order or filter preference.

use anyhow::Result;
use pactally::{DateRange, FilterPreference, Score, ScoreSort, StatManager};

use crate::format;

pub fn run(
    manager: &mut StatManager,
    sort: Option<ScoreSort>,
    filter: Option<FilterPreference>,
    range: Option<DateRange>,
    count: Option<usize>,
    percent: Option<f64>,
) -> Result<()> {
    let scores: Vec<Score> = match sort {
        Some(sort) => {
            let view = manager.scores(sort);
            let keep = count.unwrap_or(view.len()).min(view.len());
            view[..keep].to_vec()
        }
        None => {
            if let Some(preference) = filter {
                manager.set_preference(preference);
            }
            let range = range.unwrap_or(manager.config().date_range);
            manager.filter_all(false, range, count, percent)
        }
    };

    if scores.is_empty() {
        println!("{}", format::NONE);
        return Ok(());
    }
    for score in &scores {
        let display = manager.display_stats(score);
        println!("{}", format::score_line(score, display.as_ref()));
    }
    Ok(())
}

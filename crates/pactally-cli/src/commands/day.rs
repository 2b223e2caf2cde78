//! Statistics for a single day.

use anyhow::Result;
use pactally::{StatManager, parse_date};

use crate::format;

pub fn run(manager: &mut StatManager, date: &str) -> Result<()> {
    let date = parse_date(date)?;

    let games = manager.scores_for(date).to_vec();
    if games.is_empty() {
        println!("No games on {}", date);
        return Ok(());
    }
    for game in &games {
        let display = manager.display_stats(game);
        println!("{}", format::score_line(game, display.as_ref()));
    }

    let stats = manager.stats();
    let summary = stats.daily_stats_summary(date);
    println!("{}", format::daily(summary.requested));
    if let Some(daily) = summary.requested {
        for (level, count) in &daily.levels_reached {
            println!("  level {:>3}: {} game(s)", level, count);
        }
    }

    if let Some(average) = stats.average_on_or_before(date.pred_opt().unwrap_or(date)) {
        println!("{}", format::average_line("Previous", average));
    }
    if let Some(average) = stats.average_after(date) {
        println!("{}", format::average_line("Next", average));
    }
    Ok(())
}

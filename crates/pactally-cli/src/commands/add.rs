//! Record a single game.

use anyhow::{Context, Result};
use pactally::{StatManager, parse_date};

use crate::format;

pub fn run(manager: &mut StatManager, score: u32, level: i32, date: Option<&str>) -> Result<()> {
    let date = match date {
        Some(d) => parse_date(d)?,
        None => manager.today(),
    };

    let added = manager
        .add(date, score, level)
        .context("Score was not recorded")?;
    if !manager.config().autosave {
        manager.save()?;
    }
    let display = manager.display_stats(&added);
    println!("{}", format::score_line(&added, display.as_ref()));

    if let Some(ratio) = added.optimal_ratio() {
        println!("{:.1}% of the optimal score through this level", ratio * 100.0);
    }
    Ok(())
}

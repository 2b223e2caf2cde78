//! Remove a single game.

use anyhow::{Result, bail};
use pactally::{Score, StatManager, parse_date};

pub fn run(manager: &mut StatManager, score: u32, level: i32, date: &str) -> Result<()> {
    let date = parse_date(date)?;
    let target = Score::new(date, score, manager.level(level));

    if manager.delete_many([&target])? == 0 {
        bail!("No score {} at level {} on {}", score, level, date);
    }
    eprintln!("Deleted {} from {}", score, date);
    Ok(())
}

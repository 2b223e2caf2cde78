//! Play streaks.

use anyhow::Result;
use owo_colors::OwoColorize;
use pactally::StatManager;

use crate::format;

pub fn run(manager: &mut StatManager) -> Result<()> {
    let today = manager.today();
    let streaks = manager.streaks();

    println!("Recent:  {}", format::streak(&streaks.recent));
    println!("Longest: {}", format::streak(&streaks.longest));

    if streaks.recent.is_current(today) {
        println!("{}", "Played today".green());
    } else if streaks.recent.is_at_risk(today) {
        println!(
            "{}",
            format!("Play today to keep a {}-day streak", streaks.recent.length()).yellow()
        );
    }
    Ok(())
}

//! Level scoring table.

use anyhow::Result;
use pactally::LevelCatalog;

pub fn run(max: u32) -> Result<()> {
    let catalog = LevelCatalog::with_max_level(max);

    println!(
        "{:>5}  {:<12} {:>4} {:>5} {:>6} {:>8} {:>11}",
        "level", "name", "maze", "dots", "fruit", "optimal", "cumulative"
    );
    for level in catalog.iter() {
        println!(
            "{:>5}  {:<12} {:>4} {:>5} {:>6} {:>8} {:>11}",
            level.num,
            level.name(),
            level.maze,
            level.dot_count,
            level.fruit_score,
            level.optimal_score,
            level.optimal_score_cumulative
        );
    }
    Ok(())
}

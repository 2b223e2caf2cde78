//! Headline statistics.

use anyhow::Result;
use owo_colors::OwoColorize;
use pactally::{StatManager, StatsSummary};

use crate::format;

pub fn run(manager: &mut StatManager, json: bool) -> Result<()> {
    let today = manager.today();
    let stats = manager.stats();

    if json {
        println!("{}", StatsSummary::new(stats, today).to_json()?);
        return Ok(());
    }

    let summary = stats.daily_stats_summary(today);
    println!("{}", "Games".bold());
    println!("  played:   {}", stats.single_games_count());
    println!("  high:     {}", format::optional_score(stats.high_score()));
    println!("  low:      {}", format::optional_score(stats.low_score()));
    println!("  average:  {}", format::optional_score(stats.average()));
    println!("{}", "Days".bold());
    println!("  today:    {}", format::daily(summary.requested));
    println!("  best:     {}", format::daily(summary.high));
    println!("  worst:    {}", format::daily(summary.low));
    println!("{}", "Streaks".bold());
    println!("  recent:   {}", format::streak(stats.recent_streak()));
    println!("  longest:  {}", format::streak(stats.longest_streak()));

    println!("{}", "Best per level".bold());
    let mut any = false;
    for best in stats.optimals() {
        any = true;
        let ratio = best
            .optimal_ratio()
            .map(|r| format!("{:.1}%", r * 100.0))
            .unwrap_or_else(|| format::NOT_AVAILABLE.to_string());
        let daily = stats
            .optimal_daily_for(best.level.num)
            .map(|d| d.score.to_string())
            .unwrap_or_else(|| format::NOT_AVAILABLE.to_string());
        println!(
            "  {:<12} {:>8}  {:>6} of optimal, best daily avg {}",
            best.level.name(),
            best.score,
            ratio,
            daily
        );
    }
    if !any {
        println!("  {}", format::NONE);
    }
    Ok(())
}

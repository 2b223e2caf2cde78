//! Console formatting helpers.

use owo_colors::OwoColorize;
use pactally::{DailyStats, DisplayStats, Score, Streak};
use pactally::storage::format_date;

/// Placeholder for values that do not exist yet
pub const NOT_AVAILABLE: &str = "-na-";
pub const NONE: &str = "none";

pub fn score_line(score: &Score, display: Option<&DisplayStats>) -> String {
    let games = if score.is_averaged() {
        format!(" ({} games)", score.averaged_game_count)
    } else {
        String::new()
    };
    let rank = match display {
        Some(d) => format!("  #{}/{} {}", d.rank, d.total, d.label.yellow()),
        None => String::new(),
    };
    format!(
        "{}  {:>8}  {:<12}{}{}",
        format_date(score.date),
        score.score.bold(),
        score.level.name(),
        games.dimmed(),
        rank
    )
}

pub fn optional_score(score: Option<&Score>) -> String {
    match score {
        Some(s) => format!("{} on {} ({})", s.score, format_date(s.date), s.level.name()),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Neighbouring daily average, e.g. "Previous average: 1550 on 01/02/24"
pub fn average_line(label: &str, average: &Score) -> String {
    format!(
        "{} average: {} on {}",
        label,
        average.score,
        format_date(average.date)
    )
}

pub fn streak(streak: &Streak) -> String {
    match (streak.start, streak.end) {
        (Some(start), Some(end)) => format!(
            "{} day(s), {} - {}",
            streak.length(),
            format_date(start),
            format_date(end)
        ),
        _ => NONE.to_string(),
    }
}

pub fn daily(daily: Option<&DailyStats>) -> String {
    let Some(d) = daily else {
        return NOT_AVAILABLE.to_string();
    };
    format!(
        "{}  avg {} over {} games, level {}, rank {}/{}, 7-day avg {}",
        format_date(d.date),
        d.average_score.bold(),
        d.games_played,
        d.average_level,
        d.rank.0,
        d.rank.1,
        d.seven_day_average
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pactally::Level;

    #[test]
    fn test_placeholders() {
        assert_eq!(optional_score(None), "-na-");
        assert_eq!(streak(&Streak::default()), "none");
        assert_eq!(daily(None), "-na-");
    }

    #[test]
    fn test_streak_text() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(streak(&Streak::starting(day)), "1 day(s), 01/01/24 - 01/01/24");
    }

    #[test]
    fn test_optional_score_text() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let score = Score::new(day, 1200, Level::INVALID);
        assert_eq!(optional_score(Some(&score)), "1200 on 01/01/24 (-na-)");
    }

    #[test]
    fn test_average_line_uses_table_date_format() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let average = Score::averaged(day, 1555, Level::INVALID, 3);
        assert_eq!(
            average_line("Previous", &average),
            "Previous average: 1555 on 01/02/24"
        );
    }
}

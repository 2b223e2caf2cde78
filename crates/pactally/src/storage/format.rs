use chrono::NaiveDate;
use tracing::warn;

use crate::error::{Error, Result};
use crate::level::INVALID_LEVEL_NUM;
use crate::score::Score;

/// Date format of the persisted table
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// Additional formats accepted when reading dates
const LENIENT_DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// One parsed `date,score,level` record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRow {
    pub date: NaiveDate,
    pub score: u32,
    /// `-1` when the level column was missing or malformed
    pub level: i32,
}

impl From<&Score> for ScoreRow {
    fn from(score: &Score) -> Self {
        Self {
            date: score.date,
            score: score.score,
            level: score.level.num,
        }
    }
}

/// Parse a date in the persisted format, also accepting four-digit years and
/// ISO dates.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    std::iter::once(DATE_FORMAT)
        .chain(LENIENT_DATE_FORMATS)
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .ok_or_else(|| Error::InvalidDate(s.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse one line. Blank lines yield `None`.
///
/// A missing or unparseable level becomes `-1`; a bad date or score is an
/// error.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<ScoreRow>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(',').map(str::trim);
    let date_field = fields.next().unwrap_or_default();
    let score_field = fields.next().ok_or_else(|| Error::ParseRow {
        line: line_no,
        message: "missing score column".to_string(),
    })?;

    let date = parse_date(date_field).map_err(|e| Error::ParseRow {
        line: line_no,
        message: e.to_string(),
    })?;
    let score = score_field.parse::<u32>().map_err(|e| Error::ParseRow {
        line: line_no,
        message: format!("invalid score {:?}: {}", score_field, e),
    })?;
    let level = fields
        .next()
        .and_then(|f| f.parse::<i32>().ok())
        .filter(|&n| n >= 0)
        .unwrap_or(INVALID_LEVEL_NUM);

    Ok(Some(ScoreRow { date, score, level }))
}

/// Parse a whole table, skipping lines that cannot be read.
pub fn parse_csv(content: &str) -> Vec<ScoreRow> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| match parse_line(line, i + 1) {
            Ok(row) => row,
            Err(e) => {
                warn!("{}", e);
                None
            }
        })
        .collect()
}

pub fn format_row(row: &ScoreRow) -> String {
    format!("{},{},{}", format_date(row.date), row.score, row.level)
}

/// Format scores as a table, one line per score with a trailing newline.
pub fn format_csv<'a, I>(scores: I) -> String
where
    I: IntoIterator<Item = &'a Score>,
{
    let mut output = String::new();
    for score in scores {
        output.push_str(&format_row(&ScoreRow::from(score)));
        output.push('\n');
    }
    output
}

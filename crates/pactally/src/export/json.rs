//! JSON export format implementation

use chrono::NaiveDate;
use serde::Serialize;

use crate::score::Score;

use super::format::ExportFormat;

/// JSON exporter (one object per line, NDJSON format)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter;

impl ExportFormat for JsonExporter {
    fn header(&self) -> Option<String> {
        None
    }

    fn format_row(&self, score: &Score) -> String {
        // Plain data with string keys always serializes
        serde_json::to_string(&ScoreJson::from(score)).unwrap_or_default()
    }
}

/// Flattened score for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct ScoreJson {
    pub date: NaiveDate,
    pub score: u32,
    pub level: i32,
    pub level_name: String,
    pub averaged_game_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimal_ratio: Option<f64>,
}

impl From<&Score> for ScoreJson {
    fn from(score: &Score) -> Self {
        Self {
            date: score.date,
            score: score.score,
            level: score.level.num,
            level_name: score.level.name(),
            averaged_game_count: score.averaged_game_count,
            optimal_ratio: score.optimal_ratio(),
        }
    }
}

//! CSV export in the persisted table format

use crate::score::Score;
use crate::storage::{ScoreRow, format_row};

use super::format::ExportFormat;

/// Headerless `date,score,level` rows, readable by the importer
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl ExportFormat for CsvExporter {
    fn header(&self) -> Option<String> {
        None
    }

    fn format_row(&self, score: &Score) -> String {
        format_row(&ScoreRow::from(score))
    }
}

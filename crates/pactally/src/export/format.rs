//! ExportFormat trait definition

use crate::score::Score;

/// Common interface for score export formats
pub trait ExportFormat {
    /// Header line, if the format has one
    fn header(&self) -> Option<String>;

    /// Format a single score
    fn format_row(&self, score: &Score) -> String;

    /// Format multiple scores, one per line
    fn format_rows(&self, scores: &[Score]) -> String {
        let mut output = String::new();
        if let Some(header) = self.header() {
            output.push_str(&header);
            output.push('\n');
        }
        for score in scores {
            output.push_str(&self.format_row(score));
            output.push('\n');
        }
        output
    }
}

//! Export all scores.

use std::path::Path;

use anyhow::Result;
use pactally::{CsvExporter, ExportFormat as _, JsonExporter, ScoreSort, StatManager};

use crate::cli::ExportFormat;

pub fn run(manager: &mut StatManager, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let scores = manager.scores(ScoreSort::Date);
    let content = match format {
        ExportFormat::Csv => CsvExporter.format_rows(scores),
        ExportFormat::Json => JsonExporter.format_rows(scores),
    };

    if let Some(path) = output {
        std::fs::write(path, &content)?;
        eprintln!("Exported {} scores to {}", scores.len(), path.display());
    } else {
        print!("{}", content);
    }
    Ok(())
}

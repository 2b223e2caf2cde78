//! Bulk import from a CSV file.

use std::path::Path;

use anyhow::{Context, Result};
use pactally::StatManager;

pub fn run(manager: &mut StatManager, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let report = manager.import_csv(&content);
    if !manager.config().autosave {
        manager.save()?;
    }
    eprintln!(
        "Imported {} scores from {} ({} skipped)",
        report.imported,
        file.display(),
        report.skipped
    );
    Ok(())
}

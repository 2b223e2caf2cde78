use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::level::LevelCatalog;
use crate::score::{ImportReport, ScoreStore};

use super::{format_csv, parse_csv};

/// The on-disk score table
#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the table into a fresh store. A missing file is an empty store.
    pub fn load(&self, catalog: &mut LevelCatalog) -> Result<(ScoreStore, ImportReport)> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No score file at {}, starting empty", self.path.display());
                return Ok((ScoreStore::new(), ImportReport::default()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut store = ScoreStore::new();
        let report = store.import(parse_csv(&content), catalog);
        info!(
            "Loaded {} scores over {} days from {}",
            store.len(),
            store.day_count(),
            self.path.display()
        );
        Ok((store, report))
    }

    /// Overwrite the file with the full contents of `store`.
    pub fn save(&self, store: &ScoreStore) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format_csv(store.iter()))?;
        debug!("Saved {} scores to {}", store.len(), self.path.display());
        Ok(())
    }
}

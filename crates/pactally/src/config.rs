//! Tracker configuration.
//!
//! Settings come from an optional TOML file; every field has a default so a
//! partial file (or none at all) is valid:
//!
//! ```toml
//! data_file = "scores.csv"
//! max_level = 255
//! preference = "highs-high-first"
//! date_range = "month"
//! autosave = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::level::{DEFAULT_MAX_LEVEL, LEVEL_LIMIT};
use crate::query::{DateRange, FilterPreference};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Score table location
    pub data_file: PathBuf,
    /// Levels precomputed by the catalog
    pub max_level: u32,
    /// Default list selection
    pub preference: FilterPreference,
    /// Default list range
    pub date_range: DateRange,
    /// Save after every added score
    pub autosave: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("scores.csv"),
            max_level: DEFAULT_MAX_LEVEL,
            preference: FilterPreference::default(),
            date_range: DateRange::default(),
            autosave: true,
        }
    }
}

impl TrackerConfig {
    pub fn builder() -> TrackerConfigBuilder {
        TrackerConfigBuilder::default()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load `path`, falling back to defaults if it is missing or invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) if e.is_not_found() => Self::default(),
            Err(e) => {
                warn!("Failed to load config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.max_level > LEVEL_LIMIT {
            return Err(Error::Config(format!(
                "max_level {} exceeds {}",
                self.max_level, LEVEL_LIMIT
            )));
        }
        if self.data_file.as_os_str().is_empty() {
            return Err(Error::Config("data_file is empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for [`TrackerConfig`]
#[derive(Debug, Clone, Default)]
pub struct TrackerConfigBuilder {
    data_file: Option<PathBuf>,
    max_level: Option<u32>,
    preference: Option<FilterPreference>,
    date_range: Option<DateRange>,
    autosave: Option<bool>,
}

impl TrackerConfigBuilder {
    pub fn data_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.data_file = Some(path.into());
        self
    }

    pub fn max_level(mut self, max_level: u32) -> Self {
        self.max_level = Some(max_level);
        self
    }

    pub fn preference(mut self, preference: FilterPreference) -> Self {
        self.preference = Some(preference);
        self
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn autosave(mut self, enabled: bool) -> Self {
        self.autosave = Some(enabled);
        self
    }

    pub fn build(self) -> TrackerConfig {
        let default = TrackerConfig::default();
        TrackerConfig {
            data_file: self.data_file.unwrap_or(default.data_file),
            max_level: self.max_level.unwrap_or(default.max_level),
            preference: self.preference.unwrap_or(default.preference),
            date_range: self.date_range.unwrap_or(default.date_range),
            autosave: self.autosave.unwrap_or(default.autosave),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builder_overrides() {
        let config = TrackerConfig::builder()
            .data_file("mine.csv")
            .max_level(40)
            .autosave(false)
            .build();
        assert_eq!(config.data_file, PathBuf::from("mine.csv"));
        assert_eq!(config.max_level, 40);
        assert!(!config.autosave);
        assert_eq!(config.preference, FilterPreference::Recents);
    }

    #[test]
    fn test_partial_toml() {
        let config = TrackerConfig::from_toml_str(
            "preference = \"avg-highs-new-first\"\ndate_range = \"week\"\n",
        )
        .unwrap();
        assert_eq!(config.preference, FilterPreference::AvgHighsNewFirst);
        assert_eq!(config.date_range, DateRange::Week);
        assert_eq!(config.max_level, DEFAULT_MAX_LEVEL);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            TrackerConfig::from_toml_str("max_level = \"lots\""),
            Err(Error::Toml(_))
        ));
        assert!(matches!(
            TrackerConfig::from_toml_str("max_level = 100000"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_load_or_default() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "autosave = false\n").unwrap();
        assert!(!TrackerConfig::load_or_default(file.path()).autosave);

        let missing = file.path().with_extension("missing");
        assert_eq!(TrackerConfig::load_or_default(missing), TrackerConfig::default());
    }
}

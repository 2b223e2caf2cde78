//! Default file locations.
//!
//! Priority for each file:
//! 1. Command line / environment
//! 2. Platform config or data directory
//! 3. Current directory

use std::path::PathBuf;

const APP_DIR: &str = "pactally";

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("pactally.toml"))
}

pub fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join("scores.csv"))
        .unwrap_or_else(|| PathBuf::from("scores.csv"))
}

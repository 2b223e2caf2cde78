use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid score {score}: single-game scores must be a multiple of 10")]
    InvalidScore { score: u32 },

    #[error("Averaged score {score} on {date} is derived and cannot be stored")]
    AveragedScore { score: u32, date: chrono::NaiveDate },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Failed to parse line {line}: {message}")]
    ParseRow { line: usize, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

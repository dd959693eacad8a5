//! Error handling for the ATS scorer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document's bytes could not be consumed.
    #[error("Read error: {0}")]
    Read(std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AtsScorerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for AtsScorerError {
    fn from(err: anyhow::Error) -> Self {
        AtsScorerError::InvalidInput(err.to_string())
    }
}

impl AtsScorerError {
    /// True when the failure came from reading the document itself.
    pub fn is_read_error(&self) -> bool {
        matches!(self, AtsScorerError::Read(_))
    }
}

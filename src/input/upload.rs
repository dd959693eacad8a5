//! Upload checks applied before a document is scored

use crate::config::UploadConfig;
use crate::error::{AtsScorerError, Result};
use crate::input::document::ResumeDocument;
use crate::input::file_detector::MediaType;

pub struct UploadPolicy {
    allowed: Vec<MediaType>,
    max_size_bytes: u64,
}

impl UploadPolicy {
    pub fn from_config(config: &UploadConfig) -> Self {
        Self {
            allowed: config.allowed_media_types.iter().map(|m| MediaType::from_mime(m)).collect(),
            max_size_bytes: config.max_size_bytes,
        }
    }

    pub fn validate(&self, document: &ResumeDocument) -> Result<()> {
        if !self.allowed.contains(document.media_type()) {
            return Err(AtsScorerError::InvalidInput(format!(
                "Invalid file type for {}: {}. Allowed: {}",
                document.file_name(),
                document.media_type(),
                self.allowed.iter().map(|m| m.mime()).collect::<Vec<_>>().join(", ")
            )));
        }

        if document.size() > self.max_size_bytes {
            return Err(AtsScorerError::InvalidInput(format!(
                "File too large: {} is {} bytes, limit is {} bytes",
                document.file_name(),
                document.size(),
                self.max_size_bytes
            )));
        }

        Ok(())
    }
}

//! Resume documents handed to the scorer

use crate::error::{AtsScorerError, Result};
use crate::input::file_detector::MediaType;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Where a document's bytes live.
#[derive(Debug, Clone)]
pub enum DocumentBody {
    /// Bytes already held in memory, e.g. an upload.
    Bytes(Vec<u8>),
    /// A file read lazily when text is extracted.
    File(PathBuf),
}

/// Raw document plus the metadata the caller declared for it.
#[derive(Debug, Clone)]
pub struct DocumentHandle {
    pub file_name: String,
    pub media_type: MediaType,
    pub size: u64,
    pub body: DocumentBody,
}

impl DocumentHandle {
    pub fn from_bytes(file_name: impl Into<String>, media_type: MediaType, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type,
            size: bytes.len() as u64,
            body: DocumentBody::Bytes(bytes),
        }
    }

    /// Build a handle from file metadata. The file itself is not read yet.
    pub async fn from_path(path: &Path, media_type: Option<MediaType>) -> Result<Self> {
        let metadata = fs::metadata(path).await.map_err(AtsScorerError::Read)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            file_name,
            media_type: media_type.unwrap_or_else(|| MediaType::from_path(path)),
            size: metadata.len(),
            body: DocumentBody::File(path.to_path_buf()),
        })
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        match &self.body {
            DocumentBody::Bytes(bytes) => Ok(bytes.clone()),
            DocumentBody::File(path) => fs::read(path).await.map_err(AtsScorerError::Read),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match &self.body {
            DocumentBody::File(path) => Some(path),
            DocumentBody::Bytes(_) => None,
        }
    }
}

/// A resume, tagged by whether its bytes are decodable as text.
#[derive(Debug, Clone)]
pub enum ResumeDocument {
    PlainText(DocumentHandle),
    Binary(DocumentHandle),
}

impl ResumeDocument {
    pub fn new(handle: DocumentHandle) -> Self {
        if handle.media_type.is_text() {
            ResumeDocument::PlainText(handle)
        } else {
            ResumeDocument::Binary(handle)
        }
    }

    pub fn from_bytes(file_name: impl Into<String>, media_type: MediaType, bytes: Vec<u8>) -> Self {
        Self::new(DocumentHandle::from_bytes(file_name, media_type, bytes))
    }

    pub fn from_text(file_name: impl Into<String>, text: &str) -> Self {
        Self::from_bytes(file_name, MediaType::PlainText, text.as_bytes().to_vec())
    }

    pub async fn from_path(path: &Path, media_type: Option<MediaType>) -> Result<Self> {
        Ok(Self::new(DocumentHandle::from_path(path, media_type).await?))
    }

    pub fn handle(&self) -> &DocumentHandle {
        match self {
            ResumeDocument::PlainText(handle) | ResumeDocument::Binary(handle) => handle,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.handle().file_name
    }

    pub fn media_type(&self) -> &MediaType {
        &self.handle().media_type
    }

    pub fn size(&self) -> u64 {
        self.handle().size
    }
}

//! Media type detection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const MIME_PLAIN_TEXT: &str = "text/plain";
pub const MIME_MARKDOWN: &str = "text/markdown";
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_WORD: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_LEGACY_WORD: &str = "application/msword";

/// Declared media type of an uploaded resume.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    PlainText,
    Markdown,
    Pdf,
    Word,
    LegacyWord,
    Other(String),
}

impl MediaType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "txt" | "text" => MediaType::PlainText,
            "md" | "markdown" => MediaType::Markdown,
            "pdf" => MediaType::Pdf,
            "docx" => MediaType::Word,
            "doc" => MediaType::LegacyWord,
            other => MediaType::Other(format!("application/x-{}", other)),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => MediaType::Other("application/octet-stream".to_string()),
        }
    }

    pub fn from_mime(mime: &str) -> Self {
        // Parameters such as "; charset=utf-8" do not affect the type.
        let essence = mime.split(';').next().unwrap_or_default().trim().to_lowercase();
        match essence.as_str() {
            MIME_PLAIN_TEXT => MediaType::PlainText,
            MIME_MARKDOWN | "text/x-markdown" => MediaType::Markdown,
            MIME_PDF => MediaType::Pdf,
            MIME_WORD => MediaType::Word,
            MIME_LEGACY_WORD => MediaType::LegacyWord,
            _ => MediaType::Other(essence),
        }
    }

    pub fn mime(&self) -> &str {
        match self {
            MediaType::PlainText => MIME_PLAIN_TEXT,
            MediaType::Markdown => MIME_MARKDOWN,
            MediaType::Pdf => MIME_PDF,
            MediaType::Word => MIME_WORD,
            MediaType::LegacyWord => MIME_LEGACY_WORD,
            MediaType::Other(mime) => mime,
        }
    }

    /// Whether the raw bytes can be decoded as text verbatim.
    pub fn is_text(&self) -> bool {
        match self {
            MediaType::PlainText | MediaType::Markdown => true,
            MediaType::Other(mime) => mime.starts_with("text/"),
            _ => false,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

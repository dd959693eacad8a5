//! Input manager routing documents to extractors

use crate::error::{AtsScorerError, Result};
use crate::input::document::ResumeDocument;
use crate::input::file_detector::MediaType;
use crate::input::text_extractor::{PlainTextExtractor, SyntheticTextExtractor, TextExtractor};
use log::{info, warn};
use std::collections::HashMap;
use std::time::SystemTime;
use tokio::fs;

type CacheKey = (String, u64, Option<SystemTime>, MediaType);

/// Extracts text from resume documents.
///
/// Plain-text documents are decoded verbatim. Binary documents go to `B`,
/// which defaults to the synthetic stand-in.
pub struct InputManager<B = SyntheticTextExtractor> {
    binary_extractor: B,
    cache: HashMap<CacheKey, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            binary_extractor: SyntheticTextExtractor,
            cache: HashMap::new(),
            enable_cache: true,
        }
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: TextExtractor> InputManager<B> {
    pub fn with_binary_extractor<E: TextExtractor>(self, extractor: E) -> InputManager<E> {
        InputManager {
            binary_extractor: extractor,
            cache: self.cache,
            enable_cache: self.enable_cache,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, document: &ResumeDocument) -> Result<String> {
        let handle = document.handle();
        // Only file-backed documents are cached; uploads are read once.
        let key = match (self.enable_cache, handle.path()) {
            (true, Some(path)) => {
                let metadata = fs::metadata(path).await.map_err(AtsScorerError::Read)?;
                Some((
                    path.display().to_string(),
                    metadata.len(),
                    metadata.modified().ok(),
                    handle.media_type.clone(),
                ))
            }
            _ => None,
        };

        if self.enable_cache {
            if let Some(cached_text) = key.as_ref().and_then(|k| self.cache.get(k)) {
                info!("Using cached text for: {}", handle.file_name);
                return Ok(cached_text.clone());
            }
        }

        let text = match document {
            ResumeDocument::PlainText(handle) => {
                info!("Reading plain text document: {}", handle.file_name);
                PlainTextExtractor.extract(handle).await?
            }
            ResumeDocument::Binary(handle) => {
                warn!(
                    "No text decoder for {} ({}); using fallback extractor",
                    handle.file_name, handle.media_type
                );
                self.binary_extractor.extract(handle).await?
            }
        };

        if self.enable_cache {
            if let Some(key) = key {
                self.cache.insert(key, text.clone());
            }
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

//! Configuration management for the ATS scorer

use crate::error::{AtsScorerError, Result};
use crate::input::file_detector::{MIME_LEGACY_WORD, MIME_MARKDOWN, MIME_PDF, MIME_PLAIN_TEXT, MIME_WORD};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub upload: UploadConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    pub max_size_bytes: u64,
    pub allowed_media_types: Vec<String>,
    pub enforce: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
    pub detailed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: 5 * 1024 * 1024,
            allowed_media_types: vec![
                MIME_PDF.to_string(),
                MIME_LEGACY_WORD.to_string(),
                MIME_WORD.to_string(),
                MIME_PLAIN_TEXT.to_string(),
                MIME_MARKDOWN.to_string(),
            ],
            enforce: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            pretty_json: true,
            detailed: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload: UploadConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults if the file is missing.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| AtsScorerError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-ats-scorer")
            .join("config.toml")
    }

    /// Set a value by dotted key, e.g. `upload.max_size_bytes`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "upload.max_size_bytes" => self.upload.max_size_bytes = parse_value(key, value)?,
            "upload.enforce" => self.upload.enforce = parse_value(key, value)?,
            "upload.allowed_media_types" => {
                self.upload.allowed_media_types = value
                    .split(',')
                    .map(|m| m.trim().to_string())
                    .filter(|m| !m.is_empty())
                    .collect();
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value).map_err(AtsScorerError::Configuration)?;
            }
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            "output.pretty_json" => self.output.pretty_json = parse_value(key, value)?,
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            _ => {
                return Err(AtsScorerError::Configuration(format!("Unknown configuration key: {}", key)));
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AtsScorerError::Configuration(format!("Invalid value for {}: {}", key, value)))
}

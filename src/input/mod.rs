//! Input processing module
//! Handles media type detection, documents, text extraction, and upload checks

pub mod document;
pub mod file_detector;
pub mod manager;
pub mod text_extractor;
pub mod upload;

pub use document::{DocumentBody, DocumentHandle, ResumeDocument};
pub use file_detector::MediaType;
pub use manager::InputManager;

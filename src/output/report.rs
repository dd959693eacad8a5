//! Report structures wrapping a scoring result for presentation

use crate::input::document::ResumeDocument;
use crate::processing::scorer::AtsAnalysis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse rating of an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ScoreBand::Good,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Good => "GOOD",
            ScoreBand::Fair => "FAIR",
            ScoreBand::Poor => "NEEDS WORK",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsReport {
    /// File name of the scored resume
    pub document: String,

    /// Declared media type
    pub media_type: String,

    pub size_bytes: u64,

    /// True when text came from the fallback extractor rather than the file
    pub synthetic_text: bool,

    pub generated_at: DateTime<Utc>,

    pub band: ScoreBand,

    pub analysis: AtsAnalysis,

    pub scorer_version: String,
}

impl AtsReport {
    pub fn new(document: &ResumeDocument, analysis: AtsAnalysis) -> Self {
        Self {
            document: document.file_name().to_string(),
            media_type: document.media_type().to_string(),
            size_bytes: document.size(),
            synthetic_text: matches!(document, ResumeDocument::Binary(_)),
            generated_at: Utc::now(),
            band: ScoreBand::from_score(analysis.feedback.score),
            analysis,
            scorer_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn score(&self) -> u8 {
        self.analysis.feedback.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::file_detector::MediaType;
    use crate::processing::scorer::analyze_text;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(80), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(79), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Poor);
    }

    #[test]
    fn test_report_metadata() {
        let document = ResumeDocument::from_bytes("cv.pdf", MediaType::Pdf, vec![0; 12]);
        let report = AtsReport::new(&document, analyze_text("", None));
        assert_eq!(report.document, "cv.pdf");
        assert_eq!(report.media_type, "application/pdf");
        assert_eq!(report.size_bytes, 12);
        assert!(report.synthetic_text);
        assert_eq!(report.score(), 48);
        assert_eq!(report.band, ScoreBand::Poor);
    }
}

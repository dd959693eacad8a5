//! Findings and sub-scores shared by every analyzer

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    Strength,
    Weakness,
    Suggestion,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    pub fn strength(message: impl Into<String>) -> Self {
        Self { kind: FindingKind::Strength, message: message.into() }
    }

    pub fn weakness(message: impl Into<String>) -> Self {
        Self { kind: FindingKind::Weakness, message: message.into() }
    }

    pub fn suggestion(message: impl Into<String>) -> Self {
        Self { kind: FindingKind::Suggestion, message: message.into() }
    }
}

/// One analyzer's 0-100 judgment along its dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubScore(u8);

impl SubScore {
    pub const MAX: SubScore = SubScore(100);

    /// Clamps into 0..=100.
    pub fn new(value: i64) -> Self {
        SubScore(value.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for SubScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOutcome {
    pub sub_score: SubScore,
    pub findings: Vec<Finding>,
}

impl AnalyzerOutcome {
    pub fn messages(&self, kind: FindingKind) -> impl Iterator<Item = &str> {
        self.findings
            .iter()
            .filter(move |f| f.kind == kind)
            .map(|f| f.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_score_clamps() {
        assert_eq!(SubScore::new(-20).value(), 0);
        assert_eq!(SubScore::new(140).value(), 100);
        assert_eq!(SubScore::new(73).value(), 73);
    }

    #[test]
    fn test_messages_filter_by_kind() {
        let outcome = AnalyzerOutcome {
            sub_score: SubScore::new(60),
            findings: vec![Finding::weakness("a"), Finding::suggestion("b"), Finding::weakness("c")],
        };
        let weaknesses: Vec<&str> = outcome.messages(FindingKind::Weakness).collect();
        assert_eq!(weaknesses, vec!["a", "c"]);
    }
}

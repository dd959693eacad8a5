//! Word count classification

use crate::processing::findings::{AnalyzerOutcome, Finding, SubScore};
use serde::{Deserialize, Serialize};

pub const MIN_WORDS: usize = 200;
pub const MAX_WORDS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthTier {
    TooBrief,
    Appropriate,
    TooLong,
}

impl LengthTier {
    pub fn classify(word_count: usize) -> Self {
        if word_count < MIN_WORDS {
            LengthTier::TooBrief
        } else if word_count > MAX_WORDS {
            LengthTier::TooLong
        } else {
            LengthTier::Appropriate
        }
    }

    pub fn sub_score(self) -> SubScore {
        match self {
            LengthTier::TooBrief => SubScore::new(60),
            LengthTier::Appropriate => SubScore::MAX,
            LengthTier::TooLong => SubScore::new(80),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthAnalysis {
    pub outcome: AnalyzerOutcome,
    pub word_count: usize,
    pub tier: LengthTier,
}

pub struct LengthAnalyzer;

impl LengthAnalyzer {
    /// Whitespace-separated tokens; empty or blank text has zero words.
    pub fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }

    pub fn analyze(text: &str) -> LengthAnalysis {
        let word_count = Self::word_count(text);
        let tier = LengthTier::classify(word_count);

        let findings = match tier {
            LengthTier::TooBrief => vec![
                Finding::weakness("Resume content may be too brief"),
                Finding::suggestion("Add more details about your experience and skills"),
            ],
            LengthTier::TooLong => vec![
                Finding::weakness("Resume may be too lengthy for ATS scanning"),
                Finding::suggestion("Consider condensing content to focus on the most relevant information"),
            ],
            LengthTier::Appropriate => vec![Finding::strength("Resume length is appropriate")],
        };

        LengthAnalysis {
            outcome: AnalyzerOutcome {
                sub_score: tier.sub_score(),
                findings,
            },
            word_count,
            tier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_word_count() {
        assert_eq!(LengthAnalyzer::word_count(""), 0);
        assert_eq!(LengthAnalyzer::word_count("   \n\t "), 0);
        assert_eq!(LengthAnalyzer::word_count("  one\ttwo\n\nthree  "), 3);
    }

    #[test]
    fn test_tier_boundaries() {
        for (count, tier, score) in [
            (0, LengthTier::TooBrief, 60),
            (199, LengthTier::TooBrief, 60),
            (200, LengthTier::Appropriate, 100),
            (1000, LengthTier::Appropriate, 100),
            (1001, LengthTier::TooLong, 80),
        ] {
            let analysis = LengthAnalyzer::analyze(&words(count));
            assert_eq!(analysis.word_count, count);
            assert_eq!(analysis.tier, tier);
            assert_eq!(analysis.outcome.sub_score.value(), score);
        }
    }

    #[test]
    fn test_findings_per_tier() {
        let brief = LengthAnalyzer::analyze("short");
        assert_eq!(brief.outcome.findings[0], Finding::weakness("Resume content may be too brief"));
        assert_eq!(brief.outcome.findings.len(), 2);

        let fine = LengthAnalyzer::analyze(&words(500));
        assert_eq!(fine.outcome.findings, vec![Finding::strength("Resume length is appropriate")]);

        let long = LengthAnalyzer::analyze(&words(1500));
        assert_eq!(long.outcome.findings[0], Finding::weakness("Resume may be too lengthy for ATS scanning"));
    }
}

//! Conventional section heading detection

use crate::processing::findings::{AnalyzerOutcome, Finding, SubScore};
use aho_corasick::AhoCorasick;
use std::sync::LazyLock;

pub const SECTION_TOKENS: &[&str] = &["education", "experience", "skills", "work", "employment", "projects"];

static SECTION_MATCHER: LazyLock<AhoCorasick> = LazyLock::new(|| {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(SECTION_TOKENS)
        .expect("section tokens build a valid automaton")
});

pub struct SectionAnalyzer;

impl SectionAnalyzer {
    /// Any token anywhere in the text counts, including inside longer words.
    pub fn has_standard_sections(text: &str) -> bool {
        SECTION_MATCHER.is_match(text)
    }

    pub fn analyze(text: &str) -> AnalyzerOutcome {
        if Self::has_standard_sections(text) {
            AnalyzerOutcome {
                sub_score: SubScore::MAX,
                findings: vec![Finding::strength("Contains standard section headers")],
            }
        } else {
            AnalyzerOutcome {
                sub_score: SubScore::new(60),
                findings: vec![
                    Finding::weakness("May be missing standard section headers"),
                    Finding::suggestion(
                        "Include clear section headers like \"Experience\", \"Education\", and \"Skills\"",
                    ),
                ],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_headers_any_case() {
        assert!(SectionAnalyzer::has_standard_sections("EDUCATION\nBSc"));
        assert!(SectionAnalyzer::has_standard_sections("Work History"));
        assert!(SectionAnalyzer::has_standard_sections("Side Projects"));
    }

    #[test]
    fn test_substring_counts() {
        assert!(SectionAnalyzer::has_standard_sections("networking"));
    }

    #[test]
    fn test_missing_headers() {
        let outcome = SectionAnalyzer::analyze("Jane Doe\njane@example.com");
        assert_eq!(outcome.sub_score.value(), 60);
        assert_eq!(outcome.findings.len(), 2);
        assert_eq!(outcome.findings[0], Finding::weakness("May be missing standard section headers"));
    }

    #[test]
    fn test_present_headers() {
        let outcome = SectionAnalyzer::analyze("Skills: Rust");
        assert_eq!(outcome.sub_score, SubScore::MAX);
        assert_eq!(outcome.findings, vec![Finding::strength("Contains standard section headers")]);
    }
}

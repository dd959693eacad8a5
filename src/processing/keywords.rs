//! Keyword coverage against a fixed ATS vocabulary

use crate::processing::findings::{AnalyzerOutcome, Finding, SubScore};
use regex::Regex;
use std::sync::LazyLock;

/// Terms commonly screened for by applicant tracking systems.
///
/// Includes `experience` as well as `experienced`: an "Experience" heading
/// is a match.
pub const ATS_KEYWORDS: &[&str] = &[
    // action verbs and soft skills
    "experienced", "experience", "managed", "developed", "implemented", "skills",
    "leadership", "project", "team", "created", "built", "designed", "analyzed",
    "solved", "improved", "increased", "decreased", "achieved", "coordinated",
    "led", "collaborated", "organized", "certified",
    // technical
    "javascript", "react", "node", "typescript", "python", "java", "c++", "aws",
    "cloud", "agile", "scrum", "git", "api", "database", "sql", "nosql", "mongodb",
    "frontend", "backend", "fullstack",
];

/// Distinct matches needed for a full keyword score.
pub const FULL_COVERAGE_MATCHES: usize = 15;

/// More matches than this earns the keyword strength.
pub const STRENGTH_THRESHOLD: usize = 10;

struct KeywordPattern {
    term: &'static str,
    regex: Regex,
}

// Word characters are ASCII-only so boundaries behave the same for "c++" and "sql".
const NOT_WORD: &str = "[^0-9A-Za-z_]";

static KEYWORD_PATTERNS: LazyLock<Vec<KeywordPattern>> = LazyLock::new(|| {
    ATS_KEYWORDS
        .iter()
        .map(|&term| KeywordPattern {
            term,
            regex: Regex::new(&format!(
                "(?i)(?:^|{not_word}){}(?:{not_word}|$)",
                regex::escape(term),
                not_word = NOT_WORD
            ))
            .expect("keyword pattern is valid"),
        })
        .collect()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordAnalysis {
    pub outcome: AnalyzerOutcome,
    pub matched: Vec<&'static str>,
}

pub struct KeywordAnalyzer;

impl KeywordAnalyzer {
    /// Terms from the vocabulary that occur as whole words, in table order.
    pub fn matched_keywords(text: &str) -> Vec<&'static str> {
        KEYWORD_PATTERNS
            .iter()
            .filter(|pattern| pattern.regex.is_match(text))
            .map(|pattern| pattern.term)
            .collect()
    }

    pub fn score(matches: usize) -> SubScore {
        let ratio = matches as f64 / FULL_COVERAGE_MATCHES as f64;
        SubScore::new((ratio * 100.0).round() as i64)
    }

    pub fn analyze(text: &str) -> KeywordAnalysis {
        let matched = Self::matched_keywords(text);

        let findings = if matched.len() > STRENGTH_THRESHOLD {
            vec![Finding::strength("Good use of industry keywords")]
        } else {
            vec![
                Finding::weakness("Limited use of relevant keywords"),
                Finding::suggestion("Consider adding more industry-specific terms and skills"),
            ]
        };

        KeywordAnalysis {
            outcome: AnalyzerOutcome {
                sub_score: Self::score(matched.len()),
                findings,
            },
            matched,
        }
    }
}

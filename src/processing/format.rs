//! Textual patterns that degrade ATS parsing

use crate::processing::findings::{AnalyzerOutcome, Finding, SubScore};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatIssue {
    WordDocument,
    MidSentenceLineBreak,
    Tab,
    NonBreakingSpace,
    ImagePlaceholder,
}

impl FormatIssue {
    pub fn description(self) -> &'static str {
        match self {
            FormatIssue::WordDocument => "DOCX format may have compatibility issues with some ATS systems",
            FormatIssue::MidSentenceLineBreak => "Line breaks within sentences may be parsed incorrectly",
            FormatIssue::Tab => "Tabs can cause formatting issues with ATS systems",
            FormatIssue::NonBreakingSpace => "Non-breaking spaces can cause parsing issues",
            FormatIssue::ImagePlaceholder => "Image placeholders are not parsed by ATS systems",
        }
    }
}

pub const ISSUE_PENALTY: i64 = 20;

const DOCX_PATTERN: &str = r"(?i)\.docx$";

struct FormatRule {
    issue: FormatIssue,
    regex: Regex,
}

// Evaluation order determines weakness order.
static FORMAT_RULES: LazyLock<Vec<FormatRule>> = LazyLock::new(|| {
    [
        (FormatIssue::WordDocument, DOCX_PATTERN),
        (FormatIssue::MidSentenceLineBreak, r"\S\n\S"),
        (FormatIssue::Tab, r"\t"),
        (FormatIssue::NonBreakingSpace, "\u{00A0}"),
        (FormatIssue::ImagePlaceholder, r"(?i)\[\s*image\s*\]"),
    ]
    .into_iter()
    .map(|(issue, pattern)| FormatRule {
        issue,
        regex: Regex::new(pattern).expect("format pattern is valid"),
    })
    .collect()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatAnalysis {
    pub outcome: AnalyzerOutcome,
    pub issues: Vec<FormatIssue>,
}

pub struct FormatAnalyzer;

impl FormatAnalyzer {
    /// Issues present in the text. The docx rule also checks `file_name`.
    pub fn detect(text: &str, file_name: Option<&str>) -> Vec<FormatIssue> {
        FORMAT_RULES
            .iter()
            .filter(|rule| {
                rule.regex.is_match(text)
                    || (rule.issue == FormatIssue::WordDocument
                        && file_name.is_some_and(|name| rule.regex.is_match(name)))
            })
            .map(|rule| rule.issue)
            .collect()
    }

    pub fn score(issue_count: usize) -> SubScore {
        SubScore::new(100 - issue_count as i64 * ISSUE_PENALTY)
    }

    pub fn analyze(text: &str, file_name: Option<&str>) -> FormatAnalysis {
        let issues = Self::detect(text, file_name);

        let mut findings: Vec<Finding> = issues
            .iter()
            .map(|issue| Finding::weakness(issue.description()))
            .collect();

        if issues.is_empty() {
            findings.push(Finding::strength("Resume format is ATS-friendly"));
        } else {
            findings.push(Finding::suggestion("Consider using a simpler format with standard headings"));
        }

        FormatAnalysis {
            outcome: AnalyzerOutcome {
                sub_score: Self::score(issues.len()),
                findings,
            },
            issues,
        }
    }
}

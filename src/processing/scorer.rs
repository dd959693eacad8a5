//! Weighted aggregation of analyzer results into ATS feedback

use crate::error::Result;
use crate::input::document::ResumeDocument;
use crate::input::manager::InputManager;
use crate::input::text_extractor::{SyntheticTextExtractor, TextExtractor};
use crate::processing::findings::{AnalyzerOutcome, FindingKind, SubScore};
use crate::processing::format::{FormatAnalyzer, FormatIssue};
use crate::processing::keywords::KeywordAnalyzer;
use crate::processing::length::{LengthAnalyzer, LengthTier};
use crate::processing::sections::SectionAnalyzer;
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const KEYWORD_WEIGHT: f64 = 0.40;
pub const FORMAT_WEIGHT: f64 = 0.30;
pub const LENGTH_WEIGHT: f64 = 0.15;
pub const SECTION_WEIGHT: f64 = 0.15;

/// Result of one scoring call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsFeedback {
    pub score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword: SubScore,
    pub format: SubScore,
    pub length: SubScore,
    pub section: SubScore,
}

impl ScoreBreakdown {
    pub fn overall(&self) -> u8 {
        let weighted = f64::from(self.keyword.value()) * KEYWORD_WEIGHT
            + f64::from(self.format.value()) * FORMAT_WEIGHT
            + f64::from(self.length.value()) * LENGTH_WEIGHT
            + f64::from(self.section.value()) * SECTION_WEIGHT;
        weighted.round().clamp(0.0, 100.0) as u8
    }
}

/// Feedback plus the signals behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsAnalysis {
    pub feedback: AtsFeedback,
    pub breakdown: ScoreBreakdown,
    pub word_count: usize,
    pub length_tier: LengthTier,
    pub matched_keywords: Vec<String>,
    pub format_issues: Vec<FormatIssue>,
}

/// Combine outcomes given in keyword, format, length, section order.
pub fn aggregate(
    keyword: &AnalyzerOutcome,
    format: &AnalyzerOutcome,
    length: &AnalyzerOutcome,
    section: &AnalyzerOutcome,
) -> (AtsFeedback, ScoreBreakdown) {
    let breakdown = ScoreBreakdown {
        keyword: keyword.sub_score,
        format: format.sub_score,
        length: length.sub_score,
        section: section.sub_score,
    };

    let ordered = [keyword, format, length, section];
    let collect = |kind: FindingKind| -> Vec<String> {
        ordered
            .iter()
            .flat_map(|outcome| outcome.messages(kind))
            .map(str::to_string)
            .collect()
    };

    let feedback = AtsFeedback {
        score: breakdown.overall(),
        strengths: collect(FindingKind::Strength),
        weaknesses: collect(FindingKind::Weakness),
        suggestions: collect(FindingKind::Suggestion),
    };

    (feedback, breakdown)
}

/// Run every analyzer over `text`. `file_name` feeds the docx check.
pub fn analyze_text(text: &str, file_name: Option<&str>) -> AtsAnalysis {
    let keyword = KeywordAnalyzer::analyze(text);
    let format = FormatAnalyzer::analyze(text, file_name);
    let length = LengthAnalyzer::analyze(text);
    let section = SectionAnalyzer::analyze(text);

    debug!(
        "Sub-scores: keyword={} ({} matches), format={} ({} issues), length={} ({} words), section={}",
        keyword.outcome.sub_score,
        keyword.matched.len(),
        format.outcome.sub_score,
        format.issues.len(),
        length.outcome.sub_score,
        length.word_count,
        section.sub_score
    );

    let (feedback, breakdown) = aggregate(&keyword.outcome, &format.outcome, &length.outcome, &section);

    AtsAnalysis {
        feedback,
        breakdown,
        word_count: length.word_count,
        length_tier: length.tier,
        matched_keywords: keyword.matched.iter().map(|k| k.to_string()).collect(),
        format_issues: format.issues,
    }
}

pub fn score_text(text: &str) -> AtsFeedback {
    analyze_text(text, None).feedback
}

/// Scores resume documents end to end.
pub struct ScoringEngine<B = SyntheticTextExtractor> {
    input: InputManager<B>,
}

impl ScoringEngine {
    /// Engine that reads the document afresh on every call.
    pub fn new() -> Self {
        Self {
            input: InputManager::new().with_cache(false),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: TextExtractor> ScoringEngine<B> {
    pub fn with_input_manager(input: InputManager<B>) -> Self {
        Self { input }
    }

    pub fn input_manager(&self) -> &InputManager<B> {
        &self.input
    }

    pub async fn analyze_resume(&mut self, document: &ResumeDocument) -> Result<AtsAnalysis> {
        let text = self.input.extract_text(document).await?;
        let analysis = analyze_text(&text, Some(document.file_name()));
        info!("Scored {}: {}", document.file_name(), analysis.feedback.score);
        Ok(analysis)
    }

    pub async fn score_resume(&mut self, document: &ResumeDocument) -> Result<AtsFeedback> {
        Ok(self.analyze_resume(document).await?.feedback)
    }
}

/// Score a single document with a fresh engine.
pub async fn score_resume(document: &ResumeDocument) -> Result<AtsFeedback> {
    ScoringEngine::new().score_resume(document).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::findings::Finding;

    fn outcome(score: i64, findings: Vec<Finding>) -> AnalyzerOutcome {
        AnalyzerOutcome { sub_score: SubScore::new(score), findings }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let total = KEYWORD_WEIGHT + FORMAT_WEIGHT + LENGTH_WEIGHT + SECTION_WEIGHT;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_overall_rounding() {
        let breakdown = ScoreBreakdown {
            keyword: SubScore::new(100),
            format: SubScore::new(100),
            length: SubScore::new(60),
            section: SubScore::new(100),
        };
        assert_eq!(breakdown.overall(), 94);

        let breakdown = ScoreBreakdown {
            keyword: SubScore::new(0),
            format: SubScore::new(100),
            length: SubScore::new(60),
            section: SubScore::new(60),
        };
        assert_eq!(breakdown.overall(), 48);
    }

    #[test]
    fn test_findings_keep_analyzer_order() {
        let (feedback, _) = aggregate(
            &outcome(0, vec![Finding::weakness("k"), Finding::suggestion("k-s")]),
            &outcome(80, vec![Finding::weakness("f"), Finding::suggestion("f-s")]),
            &outcome(100, vec![Finding::strength("l")]),
            &outcome(60, vec![Finding::weakness("s"), Finding::suggestion("s-s")]),
        );
        assert_eq!(feedback.strengths, vec!["l"]);
        assert_eq!(feedback.weaknesses, vec!["k", "f", "s"]);
        assert_eq!(feedback.suggestions, vec!["k-s", "f-s", "s-s"]);
    }

    #[test]
    fn test_brief_keyword_rich_resume() {
        let text = "Experience Education Skills. Implemented and led projects. JavaScript React Node TypeScript AWS Agile Scrum Git API Database SQL";
        let analysis = analyze_text(text, None);

        assert_eq!(analysis.matched_keywords.len(), 15);
        assert_eq!(analysis.breakdown.keyword.value(), 100);
        assert_eq!(analysis.breakdown.format.value(), 100);
        assert_eq!(analysis.breakdown.length.value(), 60);
        assert_eq!(analysis.breakdown.section.value(), 100);
        assert_eq!(analysis.feedback.score, 94);
        assert_eq!(
            analysis.feedback.strengths,
            vec![
                "Good use of industry keywords",
                "Resume format is ATS-friendly",
                "Contains standard section headers",
            ]
        );
        assert_eq!(analysis.feedback.weaknesses, vec!["Resume content may be too brief"]);
    }

    #[test]
    fn test_empty_text() {
        let feedback = score_text("");
        assert_eq!(feedback.score, 48);
        assert_eq!(feedback.strengths, vec!["Resume format is ATS-friendly"]);
        assert_eq!(
            feedback.weaknesses,
            vec![
                "Limited use of relevant keywords",
                "Resume content may be too brief",
                "May be missing standard section headers",
            ]
        );
        assert_eq!(feedback.suggestions.len(), 3);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let text = "Work Experience\nLed the backend team.\tShipped [image] features.";
        let first = analyze_text(text, Some("cv.docx"));
        let second = analyze_text(text, Some("cv.docx"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_score_resume_plain_text() {
        let document = ResumeDocument::from_text("resume.txt", "");
        let feedback = score_resume(&document).await.unwrap();
        assert_eq!(feedback.score, 48);
    }
}

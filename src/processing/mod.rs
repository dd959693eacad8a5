//! Resume analysis: independent analyzers and the score aggregator

pub mod findings;
pub mod format;
pub mod keywords;
pub mod length;
pub mod scorer;
pub mod sections;

pub use findings::{AnalyzerOutcome, Finding, FindingKind, SubScore};
pub use scorer::{analyze_text, score_resume, score_text, AtsAnalysis, AtsFeedback, ScoreBreakdown, ScoringEngine};

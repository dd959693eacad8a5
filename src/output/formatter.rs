//! Output formatters for ATS reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{AtsReport, ScoreBand};
use crate::processing::format::FormatIssue;
use crate::processing::length::LengthTier;
use crate::processing::scorer::{FORMAT_WEIGHT, KEYWORD_WEIGHT, LENGTH_WEIGHT, SECTION_WEIGHT};
use colored::{Color, Colorize};
use pulldown_cmark::{html, Options, Parser};
use std::path::{Path, PathBuf};

/// Trait for formatting ATS reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML rendered from the Markdown report
pub struct HtmlFormatter {
    include_styles: bool,
    markdown: MarkdownFormatter,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Good => Color::Green,
        ScoreBand::Fair => Color::Yellow,
        ScoreBand::Poor => Color::Red,
    }
}

fn length_label(tier: LengthTier) -> &'static str {
    match tier {
        LengthTier::TooBrief => "too brief",
        LengthTier::Appropriate => "appropriate",
        LengthTier::TooLong => "too long",
    }
}

fn issue_list(issues: &[FormatIssue]) -> String {
    issues.iter().map(|issue| format!("{:?}", issue)).collect::<Vec<_>>().join(", ")
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn format_score_badge(&self, band: ScoreBand) -> String {
        if self.use_colors {
            format!("[{}]", band.label().color(band_color(band)).bold())
        } else {
            format!("[{}]", band.label())
        }
    }

    fn format_list(&self, output: &mut String, title: &str, items: &[String], empty: &str, color: Color) {
        output.push_str(&self.format_header(title));
        if items.is_empty() {
            output.push_str(&format!("  {}\n", self.colorize(empty, Color::BrightBlack)));
        }
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let feedback = &report.analysis.feedback;
        let mut output = String::new();

        output.push_str(&self.format_header("ATS COMPATIBILITY SCORE"));
        output.push_str(&format!("Resume: {} ({}, {} bytes)\n", report.document, report.media_type, report.size_bytes));
        if report.synthetic_text {
            output.push_str(&self.colorize(
                "Note: text could not be extracted from this format; score is based on placeholder content\n",
                Color::Yellow,
            ));
        }
        output.push_str(&format!(
            "\nOverall Score: {}% {}\n",
            self.colorize(&feedback.score.to_string(), band_color(report.band)),
            self.format_score_badge(report.band)
        ));

        if self.detailed {
            let breakdown = &report.analysis.breakdown;
            output.push_str(&self.format_header("Score Breakdown"));
            output.push_str(&format!(
                "  Keywords: {}% (weight {:.0}%) - {} matched\n",
                breakdown.keyword,
                KEYWORD_WEIGHT * 100.0,
                report.analysis.matched_keywords.len()
            ));
            output.push_str(&format!(
                "  Format:   {}% (weight {:.0}%) - {} issue(s)\n",
                breakdown.format,
                FORMAT_WEIGHT * 100.0,
                report.analysis.format_issues.len()
            ));
            output.push_str(&format!(
                "  Length:   {}% (weight {:.0}%) - {} words, {}\n",
                breakdown.length,
                LENGTH_WEIGHT * 100.0,
                report.analysis.word_count,
                length_label(report.analysis.length_tier)
            ));
            output.push_str(&format!(
                "  Sections: {}% (weight {:.0}%)\n",
                breakdown.section,
                SECTION_WEIGHT * 100.0
            ));
            if !report.analysis.matched_keywords.is_empty() {
                output.push_str(&format!("  Matched keywords: {}\n", report.analysis.matched_keywords.join(", ")));
            }
        }

        self.format_list(&mut output, "Strengths", &feedback.strengths, "No strengths detected", Color::Green);
        self.format_list(&mut output, "Areas to Improve", &feedback.weaknesses, "No issues detected", Color::Red);
        self.format_list(&mut output, "Suggestions", &feedback.suggestions, "No suggestions", Color::Cyan);

        output.push_str(&format!(
            "\n{} Generated {} by resume-ats-scorer v{}\n",
            self.colorize("ℹ", Color::Blue),
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.scorer_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn push_list(output: &mut String, title: &str, items: &[String], empty: &str) {
        output.push_str(&format!("## {}\n\n", title));
        if items.is_empty() {
            output.push_str(&format!("_{}_\n", empty));
        }
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let feedback = &report.analysis.feedback;
        let breakdown = &report.analysis.breakdown;
        let mut output = String::new();

        output.push_str("# ATS Compatibility Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Resume:** `{}` | **Type:** {} | **Generated:** {}\n\n",
                report.document,
                report.media_type,
                report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        output.push_str(&format!("**Overall Score:** {}% ({})\n\n", feedback.score, report.band));

        output.push_str("| Component | Score | Weight |\n");
        output.push_str("|-----------|-------|--------|\n");
        for (name, score, weight) in [
            ("Keywords", breakdown.keyword, KEYWORD_WEIGHT),
            ("Format", breakdown.format, FORMAT_WEIGHT),
            ("Length", breakdown.length, LENGTH_WEIGHT),
            ("Sections", breakdown.section, SECTION_WEIGHT),
        ] {
            output.push_str(&format!("| {} | {}% | {:.0}% |\n", name, score, weight * 100.0));
        }
        output.push('\n');

        Self::push_list(&mut output, "Strengths", &feedback.strengths, "No strengths detected");
        Self::push_list(&mut output, "Areas to Improve", &feedback.weaknesses, "No issues detected");
        Self::push_list(&mut output, "Suggestions", &feedback.suggestions, "No suggestions");

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*{} words; format issues: {}*\n",
                report.analysis.word_count,
                if report.analysis.format_issues.is_empty() {
                    "none".to_string()
                } else {
                    issue_list(&report.analysis.format_issues)
                }
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

const HTML_STYLES: &str = "body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; \
max-width: 800px; margin: 0 auto; padding: 20px; color: #333; } \
table { border-collapse: collapse; } th, td { border: 1px solid #dee2e6; padding: 6px 12px; }";

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self {
            include_styles,
            markdown: MarkdownFormatter::new(true),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AtsReport) -> Result<String> {
        let markdown = self.markdown.format_report(report)?;

        let mut body = String::new();
        html::push_html(&mut body, Parser::new_ext(&markdown, Options::ENABLE_TABLES));

        let styles = if self.include_styles {
            format!("<style>{}</style>\n", HTML_STYLES)
        } else {
            String::new()
        };

        Ok(format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>ATS Compatibility Report</title>\n{}</head>\n<body>\n{}</body>\n</html>\n",
            styles, body
        ))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn generate_report(&self, report: &AtsReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_ats{}.{}", base_name, timestamp_suffix, extension)
}

/// Where `--save` writes: a directory gets a suggested file name inside it.
pub fn resolve_report_path(save: &Path, format: &OutputFormat, resume_name: &str) -> PathBuf {
    if save.is_dir() {
        save.join(suggest_filename(format, resume_name, true))
    } else {
        save.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::document::ResumeDocument;
    use crate::processing::scorer::analyze_text;

    fn sample_report() -> AtsReport {
        let text = "Experience Education Skills. Implemented and led projects. JavaScript React Node TypeScript AWS Agile Scrum Git API Database SQL";
        let document = ResumeDocument::from_text("jane.txt", text);
        AtsReport::new(&document, analyze_text(text, Some("jane.txt")))
    }

    #[test]
    fn test_console_plain_output() {
        let output = ConsoleFormatter::new(false, true).format_report(&sample_report()).unwrap();
        assert!(output.contains("Overall Score: 94% [GOOD]"));
        assert!(output.contains("  • Good use of industry keywords"));
        assert!(output.contains("Resume content may be too brief"));
        assert!(output.contains("Keywords: 100%"));
    }

    #[test]
    fn test_console_empty_strengths() {
        let document = ResumeDocument::from_text("tab.txt", "\t");
        let report = AtsReport::new(&document, analyze_text("\t", None));
        let output = ConsoleFormatter::new(false, false).format_report(&report).unwrap();
        assert!(output.contains("No strengths detected"));
        assert!(output.contains("Overall Score: 42% [NEEDS WORK]"));
    }

    #[test]
    fn test_json_carries_feedback() {
        let output = JsonFormatter::new(false).format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["analysis"]["feedback"]["score"], 94);
        assert_eq!(value["analysis"]["breakdown"]["length"], 60);
        assert_eq!(value["band"], "Good");
    }

    #[test]
    fn test_markdown_table_and_lists() {
        let output = MarkdownFormatter::new(false).format_report(&sample_report()).unwrap();
        assert!(output.contains("**Overall Score:** 94% (GOOD)"));
        assert!(output.contains("| Keywords | 100% | 40% |"));
        assert!(output.contains("- Contains standard section headers"));
    }

    #[test]
    fn test_html_renders_markdown() {
        let output = HtmlFormatter::new(false).format_report(&sample_report()).unwrap();
        assert!(output.starts_with("<!DOCTYPE html>"));
        assert!(output.contains("<h1>ATS Compatibility Report</h1>"));
        assert!(output.contains("<table>"));
        assert!(!output.contains("<style>"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, false, false, false);
        let report = sample_report();
        let json = generator.generate_report(&report, &OutputFormat::Json).unwrap();
        assert!(json.starts_with('{'));
        let markdown = generator.generate_report(&report, &OutputFormat::Markdown).unwrap();
        assert!(markdown.starts_with("# ATS Compatibility Report"));
        assert_eq!(HtmlFormatter::new(true).supports_format(), OutputFormat::Html);
        assert_eq!(ConsoleFormatter::new(false, false).supports_format(), OutputFormat::Console);
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "resumes/jane.pdf", false), "jane_ats.json");
        assert_eq!(suggest_filename(&OutputFormat::Html, "jane.txt", false), "jane_ats.html");
    }

    #[test]
    fn test_save_into_directory_uses_suggested_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = resolve_report_path(dir.path(), &OutputFormat::Markdown, "jane.pdf");
        assert_eq!(path.parent(), Some(dir.path()));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("jane_ats_"));
        assert!(name.ends_with(".md"));

        let explicit = dir.path().join("report.json");
        assert_eq!(resolve_report_path(&explicit, &OutputFormat::Json, "jane.pdf"), explicit);
    }
}

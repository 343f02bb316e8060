//! Console, JSON, Markdown and HTML renderings of an analysis report

use crate::config::OutputFormat;
use crate::error::{Result, ScanError};
use crate::output::report::AnalysisReport;
use crate::processing::keyword::{KeywordResult, Significance};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Colored terminal output
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Self-contained HTML page
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

struct KeywordRow {
    text: String,
    category: &'static str,
    significance: &'static str,
    significance_class: &'static str,
    status: &'static str,
    status_class: &'static str,
    count_in_jd: usize,
    count_in_resume: usize,
    reason: String,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Keyword Match Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header { text-align: center; margin-bottom: 30px; }
        .score { font-size: 3em; font-weight: bold; }
        .score-excellent { color: #28a745; }
        .score-good { color: #17a2b8; }
        .score-fair { color: #ffc107; }
        .score-poor { color: #dc3545; }
        table { width: 100%; border-collapse: collapse; margin: 15px 0; }
        th, td { padding: 8px 10px; border-bottom: 1px solid #e9ecef; text-align: left; }
        th { background: #f1f3f5; }
        .critical { color: #dc3545; font-weight: bold; }
        .high { color: #fd7e14; }
        .normal { color: #6c757d; }
        .found { color: #28a745; }
        .missing { color: #dc3545; }
        .metadata { font-size: 0.85em; color: #6c757d; margin-top: 30px; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Resume Keyword Match Report</h1>
            <p>Generated {{ generated_at }}</p>
            <div class="score {{ score_class }}">{{ score }}%</div>
            <p><strong>{{ verdict }}</strong></p>
            <p>{{ matched_keywords }} of {{ total_jd_keywords }} job description terms found</p>
        </div>

        <div class="section">
            <h2>Score Breakdown</h2>
            <table>
                <tr><th>Component</th><th>Score</th><th>Weight</th></tr>
                <tr><td>Core Competencies</td><td>{{ hard_skills_score }}%</td><td>{{ hard_skill_weight }}</td></tr>
                <tr><td>Work Style</td><td>{{ soft_signals_score }}%</td><td>{{ soft_signal_weight }}</td></tr>
                <tr><td>Industry Terms</td><td>{{ phrases_score }}%</td><td>{{ phrase_weight }}</td></tr>
            </table>
        </div>

        <div class="section">
            <h2>Keywords</h2>
            <table>
                <tr><th>Term</th><th>Type</th><th>Importance</th><th>Status</th><th>JD</th><th>Resume</th><th>Reason</th></tr>
                {% for row in rows %}
                <tr>
                    <td>{{ row.text }}</td>
                    <td>{{ row.category }}</td>
                    <td class="{{ row.significance_class }}">{{ row.significance }}</td>
                    <td class="{{ row.status_class }}">{{ row.status }}</td>
                    <td>{{ row.count_in_jd }}</td>
                    <td>{{ row.count_in_resume }}</td>
                    <td>{{ row.reason }}</td>
                </tr>
                {% endfor %}
            </table>
        </div>

        {% if !near_misses.is_empty() %}
        <div class="section">
            <h2>Possible Spelling Variants</h2>
            <ul>
                {% for hint in near_misses %}
                <li>{{ hint.0 }}: your resume says <em>{{ hint.1 }}</em></li>
                {% endfor %}
            </ul>
        </div>
        {% endif %}

        <div class="section">
            <h2>Writing Impact: {{ impact_score }}%</h2>
            {% if weak_words.is_empty() %}
            <p>No weak verbs found.</p>
            {% else %}
            <ul>
                {% for word in weak_words %}
                <li>Replace <em>{{ word.0 }}</em> with <strong>{{ word.1 }}</strong></li>
                {% endfor %}
            </ul>
            {% endif %}
        </div>

        {% if has_insights %}
        <div class="section">
            <h2>Recruiter Perspective</h2>
            <blockquote>{{ executive_summary }}</blockquote>
            {% for trap in interview_traps %}
            <h4>{{ trap.0 }}</h4>
            <p>{{ trap.1 }}</p>
            {% endfor %}
        </div>
        {% endif %}

        <div class="metadata">
            <p>resume-scan v{{ version }}</p>
            <p>Resume: {{ resume_source }} | Job: {{ job_source }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    score: u8,
    score_class: &'static str,
    verdict: String,
    matched_keywords: usize,
    total_jd_keywords: usize,
    hard_skills_score: u8,
    soft_signals_score: u8,
    phrases_score: u8,
    hard_skill_weight: String,
    soft_signal_weight: String,
    phrase_weight: String,
    rows: Vec<KeywordRow>,
    near_misses: Vec<(String, String)>,
    impact_score: u8,
    weak_words: Vec<(String, String)>,
    has_insights: bool,
    executive_summary: String,
    interview_traps: Vec<(String, String)>,
    version: String,
    resume_source: String,
    job_source: String,
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

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_significance(&self, significance: Significance) -> String {
        let (icon, color) = match significance {
            Significance::Critical => ("[!]", Color::Red),
            Significance::High => ("[*]", Color::Yellow),
            Significance::Normal => ("[-]", Color::White),
        };
        self.colorize(&format!("{} {:<9}", icon, significance.label()), color)
    }

    fn format_keyword(&self, result: &KeywordResult) -> String {
        let status = if result.is_present() {
            self.colorize("✓ Found  ", Color::Green)
        } else {
            self.colorize("✗ Missing", Color::Red)
        };

        let mut line = format!(
            "  {} {} {:<28} {}",
            self.format_significance(result.significance),
            status,
            result.text,
            self.colorize(result.category.label(), Color::BrightBlack)
        );

        if self.detailed {
            line.push_str(&format!(
                " (JD: {}, resume: {}) {}",
                result.count_in_jd, result.count_in_resume, result.significance_reason
            ));
        }
        line.push('\n');
        line
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let summary = &report.summary;
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME KEYWORD MATCH", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&format!(
            "Resume: {} | Job: {}\n",
            report.metadata.resume_source, report.metadata.job_source
        ));

        output.push_str(&self.format_header("Match Score", 2));
        output.push_str(&format!(
            "{}% {}\n{}\n",
            self.colorize(&summary.score.to_string(), Color::Cyan),
            self.format_score_badge(summary.score),
            report.verdict
        ));
        output.push_str(&format!(
            "{} of {} job description terms found\n",
            summary.matched_keywords, summary.total_jd_keywords
        ));

        let breakdown = &summary.calculation_breakdown;
        let weights = &report.metadata.weights;
        output.push_str(&format!(
            "  Core competencies: {:>3}% (weight {:.0}%)\n",
            breakdown.hard_skills_score,
            weights.hard_skill_weight * 100.0
        ));
        output.push_str(&format!(
            "  Work style:        {:>3}% (weight {:.0}%)\n",
            breakdown.soft_signals_score,
            weights.soft_signal_weight * 100.0
        ));
        output.push_str(&format!(
            "  Industry terms:    {:>3}% (weight {:.0}%)\n",
            breakdown.phrases_score,
            weights.phrase_weight * 100.0
        ));

        output.push_str(&self.format_header("Keywords", 2));
        if summary.results.is_empty() {
            output.push_str("  No recognized terms in the job description.\n");
        }
        for result in &summary.results {
            output.push_str(&self.format_keyword(result));
        }

        if !report.near_misses.is_empty() {
            output.push_str(&self.format_header("Possible Spelling Variants", 3));
            for hint in &report.near_misses {
                output.push_str(&format!(
                    "  {} -> your resume says '{}' ({:.0}% similar)\n",
                    self.colorize(&hint.term, Color::Yellow),
                    hint.closest,
                    hint.similarity * 100.0
                ));
            }
        }

        output.push_str(&self.format_header("Writing Impact", 2));
        output.push_str(&format!(
            "{}% {}\n",
            summary.impact_score,
            self.format_score_badge(summary.impact_score)
        ));
        for weak in &summary.weak_words_found {
            output.push_str(&format!(
                "  Replace '{}' with '{}'\n",
                self.colorize(&weak.found, Color::Red),
                self.colorize(&weak.suggested, Color::Green)
            ));
        }

        if let Some(insights) = &report.insights {
            output.push_str(&self.format_header("Recruiter Perspective", 2));
            output.push_str(&format!("{}\n", insights.executive_summary));

            if !insights.interview_traps.is_empty() {
                output.push_str(&self.format_header("Interview Traps", 3));
                for (i, trap) in insights.interview_traps.iter().enumerate() {
                    output.push_str(&format!("  {}. {}\n", i + 1, trap.question));
                    if self.detailed {
                        output.push_str(&format!("     Why: {}\n", trap.reason));
                        output.push_str(&format!("     Answer: {}\n", trap.suggested_answer));
                    }
                }
            }
        }

        if self.detailed {
            let vocabulary = &report.metadata.vocabulary;
            output.push_str(&format!(
                "\nVocabulary: {} skills, {} signals, {} phrases | resume-scan v{}\n",
                vocabulary.hard_skills,
                vocabulary.soft_signals,
                vocabulary.phrases,
                report.metadata.version
            ));
        }

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
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
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

    fn markdown_score_badge(score: u8) -> &'static str {
        match score {
            90..=100 => "🟢 Excellent",
            80..=89 => "🟡 Very Good",
            70..=79 => "🟠 Good",
            60..=69 => "🔴 Fair",
            50..=59 => "🔴 Below Average",
            _ => "🔴 Poor",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let summary = &report.summary;
        let mut output = String::new();

        output.push_str("# Resume Keyword Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {}\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
            output.push_str(&format!(
                "**Resume:** `{}` | **Job:** `{}`\n\n",
                report.metadata.resume_source, report.metadata.job_source
            ));
        }

        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "**Match Score:** {}% {}\n\n",
            summary.score,
            Self::markdown_score_badge(summary.score)
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict));
        output.push_str(&format!(
            "**Terms found:** {} of {}\n\n",
            summary.matched_keywords, summary.total_jd_keywords
        ));

        let breakdown = &summary.calculation_breakdown;
        let weights = &report.metadata.weights;
        output.push_str("| Component | Score | Weight |\n");
        output.push_str("|-----------|-------|--------|\n");
        output.push_str(&format!(
            "| Core Competencies | {}% | {:.0}% |\n",
            breakdown.hard_skills_score,
            weights.hard_skill_weight * 100.0
        ));
        output.push_str(&format!(
            "| Work Style | {}% | {:.0}% |\n",
            breakdown.soft_signals_score,
            weights.soft_signal_weight * 100.0
        ));
        output.push_str(&format!(
            "| Industry Terms | {}% | {:.0}% |\n\n",
            breakdown.phrases_score,
            weights.phrase_weight * 100.0
        ));

        output.push_str("## Keywords\n\n");
        output.push_str("| Term | Type | Importance | Status | JD | Resume |\n");
        output.push_str("|------|------|------------|--------|----|--------|\n");
        for result in &summary.results {
            output.push_str(&format!(
                "| `{}` | {} | {} | {} | {} | {} |\n",
                result.text,
                result.category.label(),
                result.significance.label(),
                result.status().label(),
                result.count_in_jd,
                result.count_in_resume
            ));
        }
        output.push('\n');

        let gaps = summary.critical_gaps();
        if !gaps.is_empty() {
            output.push_str("### 🚨 Required Terms Missing\n\n");
            for gap in gaps {
                output.push_str(&format!("- `{}` ({})\n", gap.text, gap.significance_reason));
            }
            output.push('\n');
        }

        if !report.near_misses.is_empty() {
            output.push_str("### Possible Spelling Variants\n\n");
            for hint in &report.near_misses {
                output.push_str(&format!(
                    "- `{}`: your resume says `{}`\n",
                    hint.term, hint.closest
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!("## Writing Impact: {}%\n\n", summary.impact_score));
        if summary.weak_words_found.is_empty() {
            output.push_str("No weak verbs found.\n\n");
        } else {
            for weak in &summary.weak_words_found {
                output.push_str(&format!(
                    "- Replace *{}* with **{}**\n",
                    weak.found, weak.suggested
                ));
            }
            output.push('\n');
        }

        if let Some(insights) = &report.insights {
            output.push_str("## Recruiter Perspective\n\n");
            output.push_str(&format!("> {}\n\n", insights.executive_summary));
            for (i, trap) in insights.interview_traps.iter().enumerate() {
                output.push_str(&format!("{}. **{}**\n   {}\n", i + 1, trap.question, trap.reason));
            }
            if !insights.interview_traps.is_empty() {
                output.push('\n');
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by resume-scan v{}*\n", report.metadata.version));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let summary = &report.summary;
        let score_class = match summary.score {
            90..=100 => "score-excellent",
            70..=89 => "score-good",
            60..=69 => "score-fair",
            _ => "score-poor",
        };

        let rows = summary
            .results
            .iter()
            .map(|r| KeywordRow {
                text: r.text.clone(),
                category: r.category.label(),
                significance: r.significance.label(),
                significance_class: match r.significance {
                    Significance::Critical => "critical",
                    Significance::High => "high",
                    Significance::Normal => "normal",
                },
                status: r.status().label(),
                status_class: if r.is_present() { "found" } else { "missing" },
                count_in_jd: r.count_in_jd,
                count_in_resume: r.count_in_resume,
                reason: r.significance_reason.clone(),
            })
            .collect();

        let weights = &report.metadata.weights;
        let (executive_summary, interview_traps) = match &report.insights {
            Some(insights) => (
                insights.executive_summary.clone(),
                insights
                    .interview_traps
                    .iter()
                    .map(|t| (t.question.clone(), t.reason.clone()))
                    .collect(),
            ),
            None => (String::new(), Vec::new()),
        };

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            score: summary.score,
            score_class,
            verdict: report.verdict.clone(),
            matched_keywords: summary.matched_keywords,
            total_jd_keywords: summary.total_jd_keywords,
            hard_skills_score: summary.calculation_breakdown.hard_skills_score,
            soft_signals_score: summary.calculation_breakdown.soft_signals_score,
            phrases_score: summary.calculation_breakdown.phrases_score,
            hard_skill_weight: format!("{:.0}%", weights.hard_skill_weight * 100.0),
            soft_signal_weight: format!("{:.0}%", weights.soft_signal_weight * 100.0),
            phrase_weight: format!("{:.0}%", weights.phrase_weight * 100.0),
            rows,
            near_misses: report
                .near_misses
                .iter()
                .map(|h| (h.term.clone(), h.closest.clone()))
                .collect(),
            impact_score: summary.impact_score,
            weak_words: summary
                .weak_words_found
                .iter()
                .map(|w| (w.found.clone(), w.suggested.clone()))
                .collect(),
            has_insights: report.insights.is_some(),
            executive_summary,
            interview_traps,
            version: report.metadata.version.clone(),
            resume_source: report.metadata.resume_source.clone(),
            job_source: report.metadata.job_source.clone(),
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ScanError::OutputFormatting(format!("HTML rendering failed: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
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
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
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
    format!("{}_keywords{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::report::{find_near_misses, ReportMetadata};
    use crate::processing::analyzer::MatchEngine;

    fn sample_report() -> AnalysisReport {
        let engine = MatchEngine::with_defaults().unwrap();
        let resume = "Experienced with React.js and Postgres. Helped the team ship.";
        let job = "React.js required. PostgreSQL is a plus.";
        let summary = engine.analyze(resume, job).unwrap();
        let hints = find_near_misses(&summary, resume, engine.normalizer(), 0.88);
        let metadata = ReportMetadata::new(
            "resume.txt",
            "job.txt",
            engine.vocabulary().stats(),
            *engine.weights(),
        );
        AnalysisReport::new(summary, hints, metadata)
    }

    #[test]
    fn test_console_without_colors() {
        let output = ConsoleFormatter::new(false, true)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.contains("RESUME KEYWORD MATCH"));
        assert!(output.contains("react.js"));
        assert!(output.contains("✗ Missing"));
        assert!(output.contains("Replace 'helped' with 'orchestrated'"));
        assert!(output.contains("your resume says 'postgres'"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_includes_status() {
        let output = JsonFormatter::new(false)
            .format_report(&sample_report())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let results = value["summary"]["results"].as_array().unwrap();
        let react = results.iter().find(|r| r["text"] == "react.js").unwrap();
        assert_eq!(react["status"], "Present");
        assert_eq!(react["significance"], "Critical");
        assert!(value.get("insights").is_none());
    }

    #[test]
    fn test_markdown_lists_required_gaps() {
        let output = MarkdownFormatter::new(false)
            .format_report(&sample_report())
            .unwrap();

        assert!(output.starts_with("# Resume Keyword Match Report"));
        assert!(output.contains("| `postgresql` | Core Competency | Mentioned | Missing |"));
        assert!(!output.contains("**Generated:**"));
    }

    #[test]
    fn test_html_escapes_and_renders_rows() {
        let mut report = sample_report();
        report.metadata.resume_source = "<script>.txt".to_string();
        let output = HtmlFormatter::new(false).format_report(&report).unwrap();

        assert!(output.contains("<td>react.js</td>"));
        assert!(output.contains("&#60;script&#62;.txt"));
        assert!(!output.contains("<script>"));
        assert!(!output.contains("<style>"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(OutputFormat::Markdown, "docs/jane_resume.pdf", false),
            "jane_resume_keywords.md"
        );
        assert!(suggest_filename(OutputFormat::Json, "cv.txt", true).ends_with(".json"));
    }
}

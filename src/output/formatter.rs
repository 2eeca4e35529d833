//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::history::History;
use crate::output::report::{MatchReport, ScoreBand};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter;

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
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

    fn format_score_badge(&self, score: f64) -> String {
        let band = ScoreBand::from_score(score);
        let color = match band {
            ScoreBand::Excellent => Color::Green,
            ScoreBand::Good => Color::BrightGreen,
            ScoreBand::Fair => Color::Yellow,
            ScoreBand::Poor => Color::Red,
        };

        if self.use_colors {
            format!("[{}]", band.label().color(color).bold())
        } else {
            format!("[{}]", band.label())
        }
    }

    /// Render stored history entries, newest first
    pub fn format_history(&self, history: &History) -> String {
        let mut output = self.format_header("Recent Matches");
        if history.history.is_empty() {
            output.push_str("  No matches recorded yet.\n");
            return output;
        }

        for (i, entry) in history.history.iter().enumerate() {
            output.push_str(&format!(
                "  {}. {} | {} | {:.2}% {}\n",
                i + 1,
                entry.date,
                entry.filename,
                entry.score,
                self.format_score_badge(entry.score)
            ));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = self.format_header("RESUME MATCH");
        output.push_str(&format!("Resume: {}\n", report.source_name));

        if let Some(message) = &report.error {
            output.push_str(&format!("{}\n", self.colorize(message, Color::Red)));
            return Ok(output);
        }

        if let Some(score) = report.score {
            output.push_str(&format!(
                "Match Score: {:.2}% {}\n",
                score,
                self.format_score_badge(score)
            ));
        }

        if report.missing_keywords.is_empty() {
            output.push_str(&format!(
                "\n{}\n",
                self.colorize("No missing keywords found.", Color::Green)
            ));
        } else {
            output.push_str(&self.format_header("Missing Keywords"));
            for keyword in &report.missing_keywords {
                output.push_str(&format!("  • {}\n", self.colorize(keyword, Color::Yellow)));
            }
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
    fn format_report(&self, report: &MatchReport) -> Result<String> {
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
    /// Render stored history entries as a table, newest first
    pub fn format_history(&self, history: &History) -> String {
        let mut output = String::from("# Recent Matches\n\n");
        if history.history.is_empty() {
            output.push_str("_No matches recorded yet._\n");
            return output;
        }

        output.push_str("| # | Date | File | Score |\n|---|------|------|-------|\n");
        for (i, entry) in history.history.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | `{}` | {:.2}% ({}) |\n",
                i + 1,
                entry.date,
                entry.filename,
                entry.score,
                ScoreBand::from_score(entry.score).label()
            ));
        }
        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::from("# Resume Match Report\n\n");
        output.push_str(&format!(
            "**Resume:** `{}` | **Generated:** {}\n\n",
            report.source_name,
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if let Some(message) = &report.error {
            output.push_str(&format!("> **Error:** {}\n", message));
            return Ok(output);
        }

        if let Some(score) = report.score {
            output.push_str(&format!(
                "**Match Score:** {:.2}% ({})\n\n",
                score,
                ScoreBand::from_score(score).label()
            ));
        }

        output.push_str("## Missing Keywords\n\n");
        if report.missing_keywords.is_empty() {
            output.push_str("_None_\n");
        } else {
            for keyword in &report.missing_keywords {
                output.push_str(&format!("- `{}`\n", keyword));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn with_options(use_colors: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter,
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }

    pub fn generate_history(&self, history: &History, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(history)?),
            OutputFormat::Console => Ok(self.console_formatter.format_history(history)),
            OutputFormat::Markdown => Ok(self.markdown_formatter.format_history(history)),
        }
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

//! Human-readable rendering of an analysis

use crate::types::{AnalysisResult, Issue, Severity};
use colored::*;

pub const PASS_MESSAGE: &str = "No obvious issues detected by the heuristic checker.";

/// Text formatter with optional color support
pub struct TextFormatter {
    /// Enable colored output
    pub colored: bool,
    /// Show the summary and metrics footer
    pub show_stats: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            colored: true,
            show_stats: true,
        }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable colors
    pub fn without_color(mut self) -> Self {
        self.colored = false;
        self
    }

    pub fn without_stats(mut self) -> Self {
        self.show_stats = false;
        self
    }

    fn severity_label(&self, severity: Severity) -> String {
        let label = severity.as_str().to_uppercase();
        if !self.colored {
            return label;
        }
        match severity {
            Severity::Error => label.red().bold().to_string(),
            Severity::Warn => label.yellow().bold().to_string(),
            Severity::Info => label.blue().to_string(),
        }
    }

    /// `SEVERITY (line N): message`, plus an indented suggestion line
    pub fn format_issue(&self, issue: &Issue) -> String {
        let mut output = self.severity_label(issue.severity);
        if let Some(line) = issue.line {
            output.push_str(&format!(" (line {line})"));
        }
        output.push_str(": ");
        output.push_str(&issue.message);

        if let Some(suggestion) = &issue.suggestion {
            let label = if self.colored {
                "Suggestion:".bold().to_string()
            } else {
                "Suggestion:".to_string()
            };
            output.push_str(&format!("\n  {label} {suggestion}"));
        }
        output
    }

    pub fn format(&self, result: &AnalysisResult) -> String {
        let mut output = String::new();

        if result.is_empty() {
            let pass = if self.colored {
                "PASS".green().bold().to_string()
            } else {
                "PASS".to_string()
            };
            output.push_str(&format!("{pass}: {PASS_MESSAGE}\n"));
        } else {
            for issue in &result.issues {
                output.push_str(&self.format_issue(issue));
                output.push('\n');
            }
        }

        if self.show_stats {
            output.push('\n');
            output.push_str(&format!(
                "{} error(s), {} warning(s), {} info\n",
                result.error_count(),
                result.warning_count(),
                result.info_count()
            ));
            output.push_str(&format!(
                "tokens: {}  shorthand hits: {}  comparative tokens: {}  non-empty lines: {}\n",
                result.estimated_token_count,
                result.keyword_style_hit_count,
                result.comparative_token_count,
                result.non_empty_line_count
            ));
        }

        output
    }
}

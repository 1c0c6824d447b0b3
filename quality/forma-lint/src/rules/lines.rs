//! Per-line rules - tabs, indentation granularity, line length

use crate::config::AnalyzerConfig;
use crate::types::Issue;

/// Split source into physical lines on `\n`, tolerating `\r\n`
///
/// Text ending in a newline yields a final empty line, and a last line
/// without a terminator still counts.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count()
}

/// Evaluate every line rule on every line
pub fn check_lines(lines: &[&str], config: &AnalyzerConfig) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let line_no = index + 1;

        if line.contains('\t') {
            issues.push(
                Issue::error("Tab characters detected; FORMA uses spaces for indentation.")
                    .at_line(line_no)
                    .with_suggestion("Replace tab characters with spaces."),
            );
        }

        if !is_blank(line) && leading_spaces(line) % config.indent_width != 0 {
            issues.push(
                Issue::warn(format!(
                    "Indentation is not a multiple of {} spaces.",
                    config.indent_width
                ))
                .at_line(line_no)
                .with_suggestion(format!(
                    "Normalize indentation to consistent {}-space levels.",
                    config.indent_width
                )),
            );
        }

        if line.chars().count() > config.max_line_length {
            issues.push(
                Issue::warn("Very long line; readability and diff quality may degrade.")
                    .at_line(line_no)
                    .with_suggestion("Break expressions across multiple lines."),
            );
        }
    }

    issues
}

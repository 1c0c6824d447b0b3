//! Whole-document rules - entrypoint presence, keyword style, size metrics

use crate::config::{AnalyzerConfig, ConfigError};
use crate::keywords::KeywordStyle;
use crate::types::{Issue, Metrics};
use regex::Regex;

/// Matches `f <entrypoint>(` with flexible spacing
///
/// The leading boundary is ASCII-only, so `éf main()` still declares `main`.
#[derive(Debug, Clone)]
pub struct EntrypointPattern {
    name: String,
    regex: Regex,
}

impl EntrypointPattern {
    pub fn new(name: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(&format!(r"(?-u:\b)f\s+{}\s*\(", regex::escape(name)))?;
        Ok(Self {
            name: name.to_string(),
            regex,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_declared_in(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Issues and metrics produced from the whole text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCheck {
    pub issues: Vec<Issue>,
    pub metrics: Metrics,
}

/// `ceil(chars / chars_per_token)`
pub fn estimate_tokens(char_count: usize, chars_per_token: usize) -> usize {
    char_count.div_ceil(chars_per_token)
}

/// `round(tokens / ratio)`, halves rounding up
pub fn comparative_tokens(estimated: usize, ratio: f64) -> usize {
    (estimated as f64 / ratio).round() as usize
}

pub fn check_document(
    text: &str,
    entrypoint: &EntrypointPattern,
    config: &AnalyzerConfig,
) -> DocumentCheck {
    let mut issues = Vec::new();

    if !entrypoint.is_declared_in(text) {
        issues.push(
            Issue::warn(format!("No {} entrypoint found.", entrypoint.name()))
                .with_suggestion(format!(
                    "Add `f {}()` as the program entrypoint.",
                    entrypoint.name()
                )),
        );
    }

    let shorthand_hits = KeywordStyle::Shorthand.count_in(text);
    let longform_hits = KeywordStyle::Longform.count_in(text);
    if longform_hits > 0 {
        issues.push(
            Issue::info("Detected long-form keywords. FORMA shorthand can reduce token usage.")
                .with_suggestion(
                    "Prefer `f`, `s`, `e`, `m`, `wh`, `ret`, `as`, `sp`, `aw` where appropriate.",
                ),
        );
    }

    let estimated = estimate_tokens(text.chars().count(), config.chars_per_token);
    DocumentCheck {
        issues,
        metrics: Metrics {
            estimated_token_count: estimated,
            comparative_token_count: comparative_tokens(estimated, config.comparative_token_ratio),
            keyword_style_hit_count: shorthand_hits,
        },
    }
}

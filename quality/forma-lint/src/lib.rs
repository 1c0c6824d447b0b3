//! FORMA heuristic diagnostics library
//!
//! Instant, approximate feedback on FORMA source text without lexing,
//! parsing, or type checking it:
//! - Delimiter balance (`()`, `{}`, `[]`)
//! - Per-line style rules (tabs, 4-space indentation, line length)
//! - Document rules (`f main()` entrypoint, long-form keyword usage)
//! - Token size estimates
//!
//! Findings are advisory. `forma check` remains the authority.
//!
//! # Example
//!
//! ```
//! use forma_lint::{analyze, project};
//!
//! let result = analyze("f main()\n    print(\"Hello, World!\")\n");
//! assert!(result.is_empty());
//! assert!(project(&result).is_ok());
//! ```

pub mod config;
pub mod keywords;
pub mod output;
pub mod report;
pub mod rules;
pub mod simulate;
mod types;

pub use config::{AnalyzerConfig, ConfigError};
pub use keywords::KeywordStyle;
pub use output::TextFormatter;
pub use report::{project, DiagnosticReport, ReportKind, ReportLocation, ReportMetrics};
pub use rules::{scan_delimiters, DelimiterImbalance, ImbalanceKind};
pub use simulate::{simulate_output, Simulation};
pub use types::{AnalysisResult, Issue, Metrics, Position, Severity};

use log::debug;
use rules::EntrypointPattern;

/// Main analysis engine
///
/// Holds only configuration; every call to [`Analyzer::analyze`] is
/// independent.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    entrypoint: EntrypointPattern,
}

impl Analyzer {
    /// Create an analyzer with the default thresholds
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
            .expect("default configuration is valid")
    }

    /// Create an analyzer with custom thresholds
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let entrypoint = EntrypointPattern::new(&config.entrypoint)?;
        Ok(Self { config, entrypoint })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run every rule on `text`
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let lines = rules::split_lines(text);
        let non_empty_line_count = lines.iter().filter(|l| !rules::lines::is_blank(l)).count();

        let mut issues = rules::check_lines(&lines, &self.config);
        let document = rules::check_document(text, &self.entrypoint, &self.config);
        issues.extend(document.issues);
        issues.extend(rules::check_delimiters(text));

        debug!(
            "analyzed {} line(s): {} issue(s), ~{} tokens",
            lines.len(),
            issues.len(),
            document.metrics.estimated_token_count
        );

        AnalysisResult {
            non_empty_line_count,
            estimated_token_count: document.metrics.estimated_token_count,
            comparative_token_count: document.metrics.comparative_token_count,
            keyword_style_hit_count: document.metrics.keyword_style_hit_count,
            issues,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyze `text` with the default thresholds
pub fn analyze(text: &str) -> AnalysisResult {
    Analyzer::new().analyze(text)
}

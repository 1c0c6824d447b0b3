//! Single-issue diagnostic report
//!
//! Reduces an [`AnalysisResult`] to the one finding most worth showing, in
//! the JSON shape tools consume:
//!
//! ```text
//! { "status": "ok", "message", "metrics": {..}, "next_step_hint" }
//! { "status": "needs_attention", "error_kind", "message", "location", "suggestion" }
//! ```
//!
//! `info` issues never reach the report.

use crate::types::{AnalysisResult, Issue, Severity};
use serde::{Deserialize, Serialize};

pub const OK_MESSAGE: &str = "No heuristic issues detected.";
pub const NEXT_STEP_HINT: &str = "forma check --partial playground.forma";
pub const FALLBACK_SUGGESTION: &str =
    "Run `forma check --error-format json` for compiler-verified diagnostics.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    HeuristicParseError,
    HeuristicWarning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetrics {
    pub estimated_token_count: usize,
    pub comparative_token_count: usize,
    pub keyword_style_hit_count: usize,
    pub non_empty_line_count: usize,
}

/// Column is always 1; the report has line granularity only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLocation {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiagnosticReport {
    Ok {
        message: String,
        metrics: ReportMetrics,
        next_step_hint: String,
    },
    NeedsAttention {
        error_kind: ReportKind,
        message: String,
        location: ReportLocation,
        suggestion: String,
    },
}

impl DiagnosticReport {
    pub fn is_ok(&self) -> bool {
        matches!(self, DiagnosticReport::Ok { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            DiagnosticReport::Ok { .. } => "ok",
            DiagnosticReport::NeedsAttention { .. } => "needs_attention",
        }
    }
}

/// First error and first warning, in issue order
fn first_by_severity(issues: &[Issue]) -> (Option<&Issue>, Option<&Issue>) {
    issues
        .iter()
        .fold((None, None), |(error, warn), issue| match issue.severity {
            Severity::Error if error.is_none() => (Some(issue), warn),
            Severity::Warn if warn.is_none() => (error, Some(issue)),
            _ => (error, warn),
        })
}

/// Project an analysis onto the single-issue report
pub fn project(result: &AnalysisResult) -> DiagnosticReport {
    let (first_error, first_warn) = first_by_severity(&result.issues);

    match first_error.or(first_warn) {
        None => DiagnosticReport::Ok {
            message: OK_MESSAGE.to_string(),
            metrics: ReportMetrics {
                estimated_token_count: result.estimated_token_count,
                comparative_token_count: result.comparative_token_count,
                keyword_style_hit_count: result.keyword_style_hit_count,
                non_empty_line_count: result.non_empty_line_count,
            },
            next_step_hint: NEXT_STEP_HINT.to_string(),
        },
        Some(issue) => DiagnosticReport::NeedsAttention {
            error_kind: if issue.severity == Severity::Error {
                ReportKind::HeuristicParseError
            } else {
                ReportKind::HeuristicWarning
            },
            message: issue.message.clone(),
            location: ReportLocation {
                line: issue.line.unwrap_or(1),
                column: 1,
            },
            suggestion: issue
                .suggestion
                .clone()
                .unwrap_or_else(|| FALLBACK_SUGGESTION.to_string()),
        },
    }
}

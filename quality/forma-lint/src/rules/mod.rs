//! Heuristic rules for FORMA source text

pub mod delimiters;
pub mod document;
pub mod lines;

pub use delimiters::{check_delimiters, scan_delimiters, DelimiterImbalance, ImbalanceKind};
pub use document::{check_document, DocumentCheck, EntrypointPattern};
pub use lines::{check_lines, split_lines};

//! Delimiter balance - `()`, `{}` and `[]` must nest and close
//!
//! The scan is lexically naive: delimiters inside string literals and
//! comments are checked like any other character.

use crate::types::{Issue, Position};
use log::trace;

const UNMATCHED_SUGGESTION: &str = "Check parentheses, brackets, and braces.";
const UNCLOSED_SUGGESTION: &str = "Close all opened delimiters before running.";

/// Opening delimiter for a closing one
fn opener_for(closer: char) -> Option<char> {
    match closer {
        ')' => Some('('),
        '}' => Some('{'),
        ']' => Some('['),
        _ => None,
    }
}

fn is_opener(ch: char) -> bool {
    matches!(ch, '(' | '{' | '[')
}

/// An opening delimiter waiting for its partner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DelimiterFrame {
    character: char,
    position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImbalanceKind {
    /// A closer with no opener, or with the wrong one
    UnmatchedClosing,
    /// An opener still open at the end of the text
    Unclosed,
}

/// The first delimiter imbalance found in a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterImbalance {
    pub kind: ImbalanceKind,
    /// The offending character
    pub character: char,
    pub position: Position,
}

impl DelimiterImbalance {
    pub fn message(&self) -> String {
        match self.kind {
            ImbalanceKind::UnmatchedClosing => {
                format!("Unmatched delimiter \"{}\"", self.character)
            }
            ImbalanceKind::Unclosed => {
                format!("Missing closing delimiter for \"{}\"", self.character)
            }
        }
    }

    /// Issue for the aggregated list; only the line survives
    pub fn to_issue(&self) -> Issue {
        let suggestion = match self.kind {
            ImbalanceKind::UnmatchedClosing => UNMATCHED_SUGGESTION,
            ImbalanceKind::Unclosed => UNCLOSED_SUGGESTION,
        };
        Issue::error(self.message())
            .at_line(self.position.line)
            .with_suggestion(suggestion)
    }
}

/// Scan `text` once and report the first imbalance
///
/// A bad closer stops the scan immediately. If the text ends with openers
/// still on the stack, the innermost one is reported.
pub fn scan_delimiters(text: &str) -> Option<DelimiterImbalance> {
    let mut stack: Vec<DelimiterFrame> = Vec::new();
    let mut line = 1;
    let mut column = 0;

    for ch in text.chars() {
        if ch == '\n' {
            line += 1;
            column = 0;
            continue;
        }
        column += 1;

        if is_opener(ch) {
            stack.push(DelimiterFrame {
                character: ch,
                position: Position::new(line, column),
            });
            continue;
        }

        if let Some(expected) = opener_for(ch) {
            match stack.pop() {
                Some(frame) if frame.character == expected => {}
                _ => {
                    trace!("unmatched {ch:?} at {line}:{column}");
                    return Some(DelimiterImbalance {
                        kind: ImbalanceKind::UnmatchedClosing,
                        character: ch,
                        position: Position::new(line, column),
                    });
                }
            }
        }
    }

    stack.pop().map(|frame| DelimiterImbalance {
        kind: ImbalanceKind::Unclosed,
        character: frame.character,
        position: frame.position,
    })
}

/// Delimiter rule as an issue producer
pub fn check_delimiters(text: &str) -> Option<Issue> {
    scan_delimiters(text).map(|imbalance| imbalance.to_issue())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn test_balanced() {
        for text in [
            "",
            "no delimiters at all",
            "f main()\n    print([1, 2, {3}])\n",
            "((([[[{{{}}}]]])))",
            "f a()\nf b()\n",
        ] {
            assert_eq!(scan_delimiters(text), None, "{text:?}");
        }
    }

    #[test]
    fn test_crossed_delimiters() {
        let imbalance = scan_delimiters("(a, [b)]").unwrap();

        assert_eq!(imbalance.kind, ImbalanceKind::UnmatchedClosing);
        assert_eq!(imbalance.character, ')');
        assert_eq!(imbalance.position, Position::new(1, 7));
        assert_eq!(imbalance.message(), "Unmatched delimiter \")\"");
    }

    #[test]
    fn test_closer_on_empty_stack() {
        let imbalance = scan_delimiters("x\n  y)").unwrap();

        assert_eq!(imbalance.kind, ImbalanceKind::UnmatchedClosing);
        assert_eq!(imbalance.position, Position::new(2, 4));
    }

    #[test]
    fn test_unclosed_reports_innermost() {
        let imbalance = scan_delimiters("(a, (b").unwrap();

        assert_eq!(imbalance.kind, ImbalanceKind::Unclosed);
        assert_eq!(imbalance.character, '(');
        assert_eq!(imbalance.position, Position::new(1, 5));
        assert_eq!(imbalance.message(), "Missing closing delimiter for \"(\"");
    }

    #[test]
    fn test_first_mismatch_wins() {
        // the `]` on line 1 stops the scan; the unclosed `{` is never seen
        let imbalance = scan_delimiters("]\n{").unwrap();

        assert_eq!(imbalance.character, ']');
        assert_eq!(imbalance.position.line, 1);
    }

    #[test]
    fn test_multiline_positions() {
        let imbalance = scan_delimiters("f main()\n    print(\"x\"\n").unwrap();

        assert_eq!(imbalance.kind, ImbalanceKind::Unclosed);
        assert_eq!(imbalance.position, Position::new(2, 10));
    }

    #[test]
    fn test_delimiters_in_strings_are_not_excluded() {
        // the `)` inside the string closes `print(`, leaving the real one unmatched
        let imbalance = scan_delimiters("print(\"smile :)\")").unwrap();

        assert_eq!(imbalance.kind, ImbalanceKind::UnmatchedClosing);
        assert_eq!(imbalance.character, ')');
        assert_eq!(imbalance.position, Position::new(1, 17));
    }

    #[test]
    fn test_issue_conversion() {
        let issue = check_delimiters("x\n{").unwrap();

        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.line, Some(2));
        assert_eq!(issue.message, "Missing closing delimiter for \"{\"");
        assert_eq!(
            issue.suggestion.as_deref(),
            Some("Close all opened delimiters before running.")
        );
        assert!(check_delimiters("()").is_none());
    }
}

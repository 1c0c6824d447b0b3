//! FORMA keyword vocabularies
//!
//! FORMA accepts two spellings for the same constructs: the shorthand form
//! (`f`, `wh`, `ret`, ...) and the long form familiar from other languages
//! (`fn`, `while`, `return`, ...). Both are plain word lists; counting is
//! shared.

use regex::Regex;
use std::sync::LazyLock;

pub const SHORTHAND_KEYWORDS: &[&str] = &[
    "f", "s", "e", "t", "i", "m", "us", "wh", "lp", "br", "ct", "ret", "as", "sp", "aw",
];

pub const LONGFORM_KEYWORDS: &[&str] = &[
    "fn", "struct", "enum", "trait", "impl", "match", "use", "while", "loop", "break",
    "continue", "return", "async", "spawn", "await",
];

static SHORTHAND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| whole_word_pattern(KeywordStyle::Shorthand.words()));

static LONGFORM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| whole_word_pattern(KeywordStyle::Longform.words()));

fn whole_word_pattern(words: &[&str]) -> Regex {
    let alternation = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?-u:\b)(?:{alternation})(?-u:\b)")).unwrap()
}

/// Which vocabulary a keyword belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordStyle {
    Shorthand,
    Longform,
}

impl KeywordStyle {
    pub const ALL: [KeywordStyle; 2] = [KeywordStyle::Shorthand, KeywordStyle::Longform];

    pub fn words(self) -> &'static [&'static str] {
        match self {
            KeywordStyle::Shorthand => SHORTHAND_KEYWORDS,
            KeywordStyle::Longform => LONGFORM_KEYWORDS,
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            KeywordStyle::Shorthand => LazyLock::force(&SHORTHAND_REGEX),
            KeywordStyle::Longform => LazyLock::force(&LONGFORM_REGEX),
        }
    }

    /// Count whole-word occurrences of this vocabulary in `text`
    ///
    /// Matching is purely textual, so keywords inside strings and comments
    /// count too.
    pub fn count_in(self, text: &str) -> usize {
        self.pattern().find_iter(text).count()
    }
}

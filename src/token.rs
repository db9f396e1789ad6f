//! Pattern token table shared by the custom parser and formatter
//!
//! Custom format patterns are built from a small alphabetic vocabulary
//! (`YYYY`, `MM`, `D`, `mm`, `SSS`, ...). Several tokens are prefixes of
//! longer ones, so both the parser and the formatter scan this table in
//! length-descending order: `YYYY` must win before `YY` or `Y`-adjacent text
//! gets a chance to partially consume it.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Calendar field a token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    /// Full four-digit year.
    Year,
    /// Two-digit year, interpreted as `2000 + value` when parsing.
    ShortYear,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Milli,
}

/// One entry of the pattern vocabulary.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Token {
    pub text: &'static str,
    pub field: Field,
    /// Zero-pad width when formatting; 0 means unpadded.
    pub pad: usize,
    /// Minimum digits the token consumes when parsing.
    pub min_digits: usize,
    /// Maximum digits the token consumes when parsing.
    pub max_digits: usize,
}

const fn tok(text: &'static str, field: Field, pad: usize, min: usize, max: usize) -> Token {
    Token { text, field, pad, min_digits: min, max_digits: max }
}

/// All tokens, longest first. Two-character tokens are mutually disjoint so
/// their relative order does not matter; the length ordering does.
pub(crate) const TOKENS: &[Token] = &[
    tok("YYYY", Field::Year, 4, 4, 4),
    tok("SSS", Field::Milli, 3, 3, 3),
    tok("YY", Field::ShortYear, 2, 2, 2),
    tok("MM", Field::Month, 2, 2, 2),
    tok("DD", Field::Day, 2, 2, 2),
    tok("HH", Field::Hour, 2, 2, 2),
    tok("mm", Field::Minute, 2, 2, 2),
    tok("ss", Field::Second, 2, 2, 2),
    tok("SS", Field::Milli, 2, 2, 2),
    tok("M", Field::Month, 0, 1, 2),
    tok("D", Field::Day, 0, 1, 2),
    tok("H", Field::Hour, 0, 1, 2),
    tok("m", Field::Minute, 0, 1, 2),
    tok("s", Field::Second, 0, 1, 2),
    tok("S", Field::Milli, 0, 1, 3),
];

/// Find the longest token starting at the head of `rest`, if any.
pub(crate) fn match_token(rest: &str) -> Option<&'static Token> {
    TOKENS.iter().find(|t| rest.starts_with(t.text))
}

impl Token {
    /// Render the field value of `dt` for this token.
    pub(crate) fn render(&self, dt: &NaiveDateTime) -> String {
        let value = match self.field {
            Field::Year => dt.year(),
            Field::ShortYear => dt.year().rem_euclid(100),
            Field::Month => dt.month() as i32,
            Field::Day => dt.day() as i32,
            Field::Hour => dt.hour() as i32,
            Field::Minute => dt.minute() as i32,
            Field::Second => dt.second() as i32,
            Field::Milli => (dt.nanosecond() / 1_000_000) as i32,
        };
        if self.pad > 0 {
            format!("{value:0width$}", width = self.pad)
        } else {
            value.to_string()
        }
    }
}

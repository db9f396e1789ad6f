//! Date string parsing
//!
//! Two entry points: [`parse_date`] tries a fixed, ordered list of common
//! templates and falls back to a flexible chrono-based chain, while
//! [`parse_custom_date`] matches against one explicit token pattern. Both
//! return `None` for unparseable input rather than panicking; callers that
//! want a diagnostic use [`parse_date_strict`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::token::{match_token, Field, Token};
use crate::value::{self, DateValue};

/// Why a date string failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDateError {
    #[error("empty date string")]
    Empty,
    #[error("`{0}` does not match any supported date format")]
    UnrecognizedFormat(String),
}

/// A token pattern compiled into a sequence of matchable segments.
#[derive(Debug, Clone)]
pub(crate) struct CompiledPattern {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(char),
    Field(&'static Token),
}

/// Working set of calendar fields captured from a pattern match.
///
/// Missing fields default to the Unix epoch's: year 1970, January 1st,
/// midnight.
#[derive(Debug, Clone, Copy)]
struct CapturedFields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    milli: u32,
}

impl Default for CapturedFields {
    fn default() -> Self {
        Self { year: 1970, month: 1, day: 1, hour: 0, minute: 0, second: 0, milli: 0 }
    }
}

impl CapturedFields {
    fn set(&mut self, field: Field, raw: u32) {
        match field {
            Field::Year => self.year = raw as i32,
            // No 19xx windowing: `24` is always 2024.
            Field::ShortYear => self.year = 2000 + raw as i32,
            Field::Month => self.month = raw,
            Field::Day => self.day = raw,
            Field::Hour => self.hour = raw,
            Field::Minute => self.minute = raw,
            Field::Second => self.second = raw,
            Field::Milli => self.milli = raw,
        }
    }

    fn build(&self) -> Option<NaiveDateTime> {
        value::from_civil_fields(self.year, self.month, self.day, self.hour, self.minute, self.second, self.milli)
    }
}

impl CompiledPattern {
    /// Translate a pattern string into segments, consuming the longest
    /// matching token at every position so `YYYY` is never split into two
    /// `YY` captures. Characters outside the vocabulary become literals.
    pub(crate) fn compile(pattern: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = pattern;
        while !rest.is_empty() {
            if let Some(token) = match_token(rest) {
                segments.push(Segment::Field(token));
                rest = &rest[token.text.len()..];
            } else {
                let mut chars = rest.chars();
                if let Some(ch) = chars.next() {
                    segments.push(Segment::Literal(ch));
                }
                rest = chars.as_str();
            }
        }
        Self { segments }
    }

    /// Match `input` from start to end against the compiled segments.
    ///
    /// Out-of-range captures (month 13, day 32) are not rejected here; they
    /// roll over through [`value::from_civil_fields`].
    pub(crate) fn apply(&self, input: &str) -> Option<NaiveDateTime> {
        let mut fields = CapturedFields::default();
        let mut chars = input.chars().peekable();
        for segment in &self.segments {
            match segment {
                Segment::Literal(expected) => {
                    if chars.next() != Some(*expected) {
                        return None;
                    }
                }
                Segment::Field(token) => {
                    let mut digits = String::new();
                    while digits.len() < token.max_digits {
                        match chars.peek() {
                            Some(c) if c.is_ascii_digit() => {
                                digits.push(*c);
                                chars.next();
                            }
                            _ => break,
                        }
                    }
                    if digits.len() < token.min_digits {
                        return None;
                    }
                    fields.set(token.field, digits.parse().ok()?);
                }
            }
        }
        // Anchored match: trailing input means the template does not fit.
        if chars.next().is_some() {
            return None;
        }
        fields.build()
    }
}

/// One entry of the ordered template list tried by [`parse_date`].
enum Template {
    Tokens(CompiledPattern),
    /// RFC 3339 / ISO 8601 with zone designator, with or without fractional
    /// seconds. Offsets are normalized to UTC civil time.
    Rfc3339,
}

/// Templates tried in order; the first match wins. `MM/DD/YYYY` is tried
/// before `DD/MM/YYYY`, so ambiguous slash dates resolve American-style and
/// the day-first template only catches strings the month-first one cannot.
static TEMPLATES: Lazy<Vec<Template>> = Lazy::new(|| {
    let tokens = |p: &str| Template::Tokens(CompiledPattern::compile(p));
    vec![
        tokens("YYYY-MM-DD"),
        tokens("MM/DD/YYYY"),
        tokens("DD/MM/YYYY"),
        tokens("YYYY/MM/DD"),
        tokens("MM-DD-YYYY"),
        tokens("DD-MM-YYYY"),
        Template::Rfc3339,
        tokens("YYYY-MM-DD HH:mm:ss"),
        tokens("MM/DD/YYYY HH:mm:ss"),
    ]
});

/// Formats attempted by the flexible fallback once every template has failed,
/// mirroring the chained parse strategies used for datetime display strings.
const FALLBACK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const FALLBACK_DATE_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%d %B %Y"];

/// Parse a date value, trying the fixed template list first and a flexible
/// chrono-based chain second.
///
/// Accepts anything coercible to a [`DateValue`]; non-string inputs resolve
/// directly. Returns `None` when nothing matches.
pub fn parse_date(value: impl Into<DateValue>) -> Option<NaiveDateTime> {
    value.into().resolve()
}

/// Like [`parse_date`] for strings, but reports why parsing failed.
pub fn parse_date_strict(input: &str) -> Result<NaiveDateTime, ParseDateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseDateError::Empty);
    }
    parse_str(trimmed).ok_or_else(|| ParseDateError::UnrecognizedFormat(trimmed.to_string()))
}

/// Parse a string against one explicit token pattern.
///
/// The pattern vocabulary is `YYYY YY MM M DD D HH H mm m ss s SSS SS S`;
/// anything else in the pattern is matched literally.
pub fn parse_custom_date(input: &str, pattern: &str) -> Option<NaiveDateTime> {
    CompiledPattern::compile(pattern).apply(input.trim())
}

/// String resolution used by [`DateValue::resolve`].
pub(crate) fn parse_str(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    for template in TEMPLATES.iter() {
        let parsed = match template {
            Template::Tokens(pattern) => pattern.apply(trimmed),
            Template::Rfc3339 => DateTime::parse_from_rfc3339(trimmed).ok().map(|dt| dt.naive_utc()),
        };
        if parsed.is_some() {
            return parsed;
        }
    }
    debug!("no date template matched {trimmed:?}, trying flexible fallback");
    parse_flexible(trimmed)
}

fn parse_flexible(input: &str) -> Option<NaiveDateTime> {
    for fmt in FALLBACK_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt);
        }
    }
    for fmt in FALLBACK_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(input, fmt) {
            return Some(NaiveDateTime::from(d));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_prefers_longest_token() {
        let pattern = CompiledPattern::compile("YYYYMM");
        let dt = pattern.apply("202403").unwrap();
        assert_eq!(dt.to_string(), "2024-03-01 00:00:00");
    }

    #[test]
    fn literal_mismatch_fails() {
        let pattern = CompiledPattern::compile("YYYY-MM-DD");
        assert!(pattern.apply("2024/03/05").is_none());
    }

    #[test]
    fn trailing_input_fails() {
        let pattern = CompiledPattern::compile("YYYY-MM-DD");
        assert!(pattern.apply("2024-03-05T10:00").is_none());
    }

    #[test]
    fn variable_width_tokens() {
        let pattern = CompiledPattern::compile("M/D/YYYY");
        let dt = pattern.apply("3/5/2024").unwrap();
        assert_eq!(dt.date(), chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        let dt = pattern.apply("12/31/2024").unwrap();
        assert_eq!(dt.date(), chrono::NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }
}

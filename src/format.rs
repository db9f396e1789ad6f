//! Date formatting
//!
//! Renders a date value as a string per a [`FormatOptions`] value: numeric
//! short form, spelled-out long form, humanized relative time, strict ISO
//! 8601, or a custom token pattern. Formatting an unresolvable value always
//! yields the literal `"Invalid Date"`; that string and `"just now"` are the
//! two sentinels callers may match against.

use chrono::{Local, Locale, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::token::match_token;
use crate::value::{self, DateValue};

/// Returned whenever the input cannot be resolved to a date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Named output style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// Numeric month/day/year, plus `HH:MM` when time is included.
    #[default]
    Short,
    /// Weekday and spelled-out month, plus `HH:MM:SS` when time is included.
    Long,
    /// Humanized offset from a reference instant ("2 hours ago", "in 3 days").
    Relative,
    /// Strict ISO 8601 with milliseconds and `Z` suffix.
    Iso,
    /// Token pattern substitution via [`format_custom`].
    Custom,
}

/// Options controlling [`format_date`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub style: FormatStyle,
    /// Append the time of day to short/long output.
    pub include_time: bool,
    /// Token pattern for [`FormatStyle::Custom`]; defaults to `YYYY-MM-DD`.
    pub pattern: Option<String>,
    /// Locale tag (e.g. `fr_FR`) for short/long output. Unknown tags fall
    /// back to the default locale.
    pub locale: Option<String>,
    /// Reference instant for relative output. Defaults to the ambient clock;
    /// inject a fixed value to keep output deterministic.
    pub now: Option<NaiveDateTime>,
}

impl FormatOptions {
    /// Options for the given style, everything else defaulted.
    pub fn style(style: FormatStyle) -> Self {
        Self { style, ..Self::default() }
    }
}

/// Relative-time buckets, largest first. The year and month sizes are fixed
/// 365-day and 30-day approximations, deliberately not calendar-accurate.
const RELATIVE_BUCKETS: &[(&str, i64)] = &[
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
    ("second", 1),
];

/// Format a date value per the given options.
pub fn format_date(value: impl Into<DateValue>, options: &FormatOptions) -> String {
    let Some(dt) = value::resolve(value) else {
        return INVALID_DATE.to_string();
    };
    match options.style {
        FormatStyle::Short => {
            let fmt = if options.include_time { "%m/%d/%Y %H:%M" } else { "%m/%d/%Y" };
            format_with_locale(&dt, fmt, options.locale.as_deref())
        }
        FormatStyle::Long => {
            let fmt = if options.include_time {
                "%A, %B %-d, %Y %H:%M:%S"
            } else {
                "%A, %B %-d, %Y"
            };
            format_with_locale(&dt, fmt, options.locale.as_deref())
        }
        FormatStyle::Relative => relative_from(dt, options.now),
        FormatStyle::Iso => dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        FormatStyle::Custom => {
            let pattern = options.pattern.as_deref().unwrap_or("YYYY-MM-DD");
            render_pattern(&dt, pattern)
        }
    }
}

/// Humanize the offset between a date value and a reference instant.
///
/// Walks the bucket table top-down and reports the first unit with a floored
/// count of at least one, pluralized, prefixed with `in` for future values or
/// suffixed with `ago` for past ones. Offsets under one second collapse to
/// the literal `"just now"`.
pub fn relative_time(value: impl Into<DateValue>, options: &FormatOptions) -> String {
    match value::resolve(value) {
        Some(dt) => relative_from(dt, options.now),
        None => INVALID_DATE.to_string(),
    }
}

fn relative_from(target: NaiveDateTime, now: Option<NaiveDateTime>) -> String {
    let now = now.unwrap_or_else(|| Local::now().naive_local());
    let delta_seconds = now.signed_duration_since(target).num_seconds();
    let magnitude = delta_seconds.abs();

    for (label, seconds_per_unit) in RELATIVE_BUCKETS {
        let count = magnitude / seconds_per_unit;
        if count >= 1 {
            let noun = if count == 1 { (*label).to_string() } else { format!("{label}s") };
            return if delta_seconds < 0 {
                format!("in {count} {noun}")
            } else {
                format!("{count} {noun} ago")
            };
        }
    }
    "just now".to_string()
}

/// Substitute token-pattern placeholders with the value's calendar fields.
///
/// Uses the same vocabulary as the parser; at every position the longest
/// matching token wins, so `YYYY` is never half-consumed as `YY`. Characters
/// outside the vocabulary pass through untouched.
pub fn format_custom(value: impl Into<DateValue>, pattern: &str) -> String {
    match value::resolve(value) {
        Some(dt) => render_pattern(&dt, pattern),
        None => INVALID_DATE.to_string(),
    }
}

fn render_pattern(dt: &NaiveDateTime, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while !rest.is_empty() {
        if let Some(token) = match_token(rest) {
            out.push_str(&token.render(dt));
            rest = &rest[token.text.len()..];
        } else {
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                out.push(ch);
            }
            rest = chars.as_str();
        }
    }
    out
}

fn format_with_locale(dt: &NaiveDateTime, fmt: &str, locale: Option<&str>) -> String {
    match locale.and_then(|tag| Locale::try_from(tag).ok()) {
        // `format_localized` lives on zoned values only; the UTC attachment
        // does not affect output since only civil fields are rendered.
        Some(locale) => dt.and_utc().format_localized(fmt, locale).to_string(),
        None => dt.format(fmt).to_string(),
    }
}

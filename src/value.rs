//! Input coercion for date values
//!
//! Every public function in this crate accepts anything that can stand in for
//! a point in civil time: an already-built `NaiveDateTime`, a calendar date,
//! a millisecond epoch timestamp, or a string that still needs parsing.
//! [`DateValue`] is the funnel all of those go through.

use chrono::{DateTime, Duration, Local, Months, NaiveDate, NaiveDateTime, Utc};

use crate::parse;

/// A value that can be resolved into a civil date-time.
///
/// Resolution of the `Text` variant runs the full parser from [`crate::parse`],
/// so an unparseable string resolves to `None` rather than panicking. Callers
/// check validity before use.
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    /// An already-resolved civil date-time.
    DateTime(NaiveDateTime),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// A date string in one of the supported formats.
    Text(String),
}

impl DateValue {
    /// Resolve to a concrete `NaiveDateTime`, or `None` if the value is
    /// unparseable or out of the representable range.
    pub fn resolve(&self) -> Option<NaiveDateTime> {
        match self {
            DateValue::DateTime(dt) => Some(*dt),
            DateValue::EpochMillis(ms) => DateTime::from_timestamp_millis(*ms).map(|dt| dt.naive_utc()),
            DateValue::Text(s) => parse::parse_str(s),
        }
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(dt: NaiveDateTime) -> Self {
        DateValue::DateTime(dt)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(d: NaiveDate) -> Self {
        // Midnight at the start of the day.
        DateValue::DateTime(NaiveDateTime::from(d))
    }
}

impl From<DateTime<Local>> for DateValue {
    fn from(dt: DateTime<Local>) -> Self {
        DateValue::DateTime(dt.naive_local())
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(dt: DateTime<Utc>) -> Self {
        DateValue::DateTime(dt.naive_utc())
    }
}

impl From<i64> for DateValue {
    fn from(ms: i64) -> Self {
        DateValue::EpochMillis(ms)
    }
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        DateValue::Text(s.to_string())
    }
}

impl From<String> for DateValue {
    fn from(s: String) -> Self {
        DateValue::Text(s)
    }
}

/// Convenience wrapper: coerce and resolve in one step.
pub(crate) fn resolve(value: impl Into<DateValue>) -> Option<NaiveDateTime> {
    value.into().resolve()
}

/// Build a date-time from raw calendar fields, rolling excess values into the
/// next larger field instead of rejecting them.
///
/// Month 13 carries into January of the following year, day 32 into the next
/// month, hour 25 into the next day, and so on. This mirrors what a
/// field-based host date constructor does with out-of-range input and is the
/// behavior the parser deliberately exposes: out-of-range fields are computed
/// through, not validated away.
pub(crate) fn from_civil_fields(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    milli: u32,
) -> Option<NaiveDateTime> {
    let month0 = i64::from(month) - 1;
    let base = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let date = if month0 >= 0 {
        base.checked_add_months(Months::new(u32::try_from(month0).ok()?))?
    } else {
        base.checked_sub_months(Months::new(u32::try_from(-month0).ok()?))?
    };
    let date = date.checked_add_signed(Duration::try_days(i64::from(day) - 1)?)?;

    let clock_ms = i64::from(hour) * 3_600_000
        + i64::from(minute) * 60_000
        + i64::from(second) * 1_000
        + i64::from(milli);
    date.and_hms_opt(0, 0, 0)?.checked_add_signed(Duration::try_milliseconds(clock_ms)?)
}

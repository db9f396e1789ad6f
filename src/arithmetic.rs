//! Calendar arithmetic
//!
//! Unit-aware offsets, period boundaries, differences, and business-day
//! stepping. Everything operates on civil local time with no timezone entity;
//! inputs go through [`DateValue`] coercion and invalid inputs yield `None`.
//!
//! Month and year offsets are calendar-field additions, not fixed durations:
//! Jan 31 + 1 month clamps to the last day of February. The clamp makes
//! month/year round trips lossy, which callers accept; the fixed-size units
//! (millisecond through week) round-trip exactly.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::value::{self, DateValue};

/// Fine-grained unit for offsets and differences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Coarse bucket for start/end boundary queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// Add `amount` of `unit` to a date value.
pub fn add_time(value: impl Into<DateValue>, amount: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let dt = value::resolve(value)?;
    match unit {
        TimeUnit::Millisecond => dt.checked_add_signed(Duration::try_milliseconds(amount)?),
        TimeUnit::Second => dt.checked_add_signed(Duration::try_seconds(amount)?),
        TimeUnit::Minute => dt.checked_add_signed(Duration::try_minutes(amount)?),
        TimeUnit::Hour => dt.checked_add_signed(Duration::try_hours(amount)?),
        TimeUnit::Day => dt.checked_add_signed(Duration::try_days(amount)?),
        TimeUnit::Week => dt.checked_add_signed(Duration::try_weeks(amount)?),
        TimeUnit::Month => add_months_signed(dt, amount),
        TimeUnit::Year => add_months_signed(dt, amount.checked_mul(12)?),
    }
}

/// Subtract `amount` of `unit` from a date value.
pub fn subtract_time(value: impl Into<DateValue>, amount: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    add_time(value, amount.checked_neg()?, unit)
}

fn add_months_signed(dt: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    if months >= 0 {
        dt.checked_add_months(Months::new(u32::try_from(months).ok()?))
    } else {
        dt.checked_sub_months(Months::new(u32::try_from(months.checked_neg()?).ok()?))
    }
}

/// First instant (00:00:00.000) of the period containing the given value.
///
/// Weeks are ISO-style: they start on Monday.
pub fn start_of_period(value: impl Into<DateValue>, period: Period) -> Option<NaiveDateTime> {
    let dt = value::resolve(value)?;
    let date = match period {
        Period::Day => dt.date(),
        Period::Week => {
            let back = i64::from(dt.weekday().num_days_from_monday());
            dt.date().checked_sub_signed(Duration::try_days(back)?)?
        }
        Period::Month => NaiveDate::from_ymd_opt(dt.year(), dt.month(), 1)?,
        Period::Quarter => {
            let quarter_start = (dt.month0() / 3) * 3 + 1;
            NaiveDate::from_ymd_opt(dt.year(), quarter_start, 1)?
        }
        Period::Year => NaiveDate::from_ymd_opt(dt.year(), 1, 1)?,
    };
    date.and_hms_opt(0, 0, 0)
}

/// Last instant (23:59:59.999) of the period containing the given value.
///
/// The week end is computed from the value's own weekday, not from the start
/// boundary, and lands on Sunday for every weekday input including Sunday.
pub fn end_of_period(value: impl Into<DateValue>, period: Period) -> Option<NaiveDateTime> {
    let dt = value::resolve(value)?;
    let date = match period {
        Period::Day => dt.date(),
        Period::Week => {
            let forward = i64::from(6 - dt.weekday().num_days_from_monday());
            dt.date().checked_add_signed(Duration::try_days(forward)?)?
        }
        Period::Month => last_day_of_month(dt.year(), dt.month())?,
        Period::Quarter => {
            let quarter_end = (dt.month0() / 3) * 3 + 3;
            last_day_of_month(dt.year(), quarter_end)?
        }
        Period::Year => NaiveDate::from_ymd_opt(dt.year(), 12, 31)?,
    };
    date.and_hms_milli_opt(23, 59, 59, 999)
}

// First day of the following month, stepped back one day.
fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    next.checked_sub_signed(Duration::try_days(1)?)
}

/// Signed difference `b - a` expressed in the given unit.
///
/// Fixed-size units divide the millisecond delta with truncation toward zero,
/// so partial units are dropped. Month and year differences are pure
/// calendar-field subtraction: Jan 31 to Feb 1 is one month even though only
/// one day elapsed. Callers rely on that bucketing, not on elapsed time.
pub fn date_difference(a: impl Into<DateValue>, b: impl Into<DateValue>, unit: TimeUnit) -> Option<i64> {
    let a = value::resolve(a)?;
    let b = value::resolve(b)?;
    let delta = b.signed_duration_since(a);
    let diff = match unit {
        TimeUnit::Millisecond => delta.num_milliseconds(),
        TimeUnit::Second => delta.num_seconds(),
        TimeUnit::Minute => delta.num_minutes(),
        TimeUnit::Hour => delta.num_hours(),
        TimeUnit::Day => delta.num_days(),
        TimeUnit::Week => delta.num_weeks(),
        TimeUnit::Month => i64::from(b.year() - a.year()) * 12 + (i64::from(b.month()) - i64::from(a.month())),
        TimeUnit::Year => i64::from(b.year() - a.year()),
    };
    Some(diff)
}

/// Number of days in the given month (1-based).
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = last_day_of_month(year, month)?;
    Some((last.signed_duration_since(first).num_days() + 1) as u32)
}

/// 1-indexed ordinal day of the year (January 1st is day 1).
pub fn day_of_year(value: impl Into<DateValue>) -> Option<u32> {
    Some(value::resolve(value)?.ordinal())
}

/// ISO 8601 week number, consistent with the Monday-start week convention
/// used by the period boundaries.
pub fn week_of_year(value: impl Into<DateValue>) -> Option<u32> {
    Some(value::resolve(value)?.iso_week().week())
}

/// Every calendar date from `start` through `end`, inclusive of both ends.
/// Empty when either bound is invalid or `start` is after `end`.
pub fn generate_date_range(start: impl Into<DateValue>, end: impl Into<DateValue>) -> Vec<NaiveDate> {
    let (Some(start), Some(end)) = (value::resolve(start), value::resolve(end)) else {
        return Vec::new();
    };
    let mut dates = Vec::new();
    let mut current = start.date();
    while current <= end.date() {
        dates.push(current);
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Whether the value falls on a weekday (Monday through Friday).
pub fn is_business_day(value: impl Into<DateValue>) -> bool {
    match value::resolve(value) {
        Some(dt) => !matches!(dt.weekday(), Weekday::Sat | Weekday::Sun),
        None => false,
    }
}

/// Count of business days from `start` through `end`, inclusive of both ends.
pub fn business_days(start: impl Into<DateValue>, end: impl Into<DateValue>) -> i64 {
    generate_date_range(start, end)
        .into_iter()
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .count() as i64
}

/// The next calendar date after the value that is a business day.
pub fn next_business_day(value: impl Into<DateValue>) -> Option<NaiveDate> {
    let mut date = value::resolve(value)?.date();
    loop {
        date = date.succ_opt()?;
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return Some(date);
        }
    }
}

/// The closest calendar date before the value that is a business day.
pub fn previous_business_day(value: impl Into<DateValue>) -> Option<NaiveDate> {
    let mut date = value::resolve(value)?.date();
    loop {
        date = date.pred_opt()?;
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return Some(date);
        }
    }
}

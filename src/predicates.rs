//! Range checks and calendar predicates
//!
//! Every predicate is total: invalid input never panics, it just answers
//! `false` (or `None` for [`age`]). Each clock-dependent predicate has an
//! `*_at` variant taking an explicit reference instant; the short forms read
//! the ambient clock at the call site and delegate. Tests use the `*_at`
//! forms to stay deterministic.

use chrono::{Datelike, Duration, Local, NaiveDateTime};

use crate::value::{self, DateValue};

/// Whether `value` lies within `[start, end]`, inclusive on both bounds.
pub fn is_within_range(
    value: impl Into<DateValue>,
    start: impl Into<DateValue>,
    end: impl Into<DateValue>,
) -> bool {
    match (value::resolve(value), value::resolve(start), value::resolve(end)) {
        (Some(v), Some(start), Some(end)) => start <= v && v <= end,
        _ => false,
    }
}

/// Whether the value falls on the same calendar date as `now`, ignoring
/// time-of-day.
pub fn is_today_at(value: impl Into<DateValue>, now: NaiveDateTime) -> bool {
    value::resolve(value).is_some_and(|dt| dt.date() == now.date())
}

/// Whether the value falls on the calendar date before `now`.
pub fn is_yesterday_at(value: impl Into<DateValue>, now: NaiveDateTime) -> bool {
    value::resolve(value).is_some_and(|dt| dt.date() == (now - Duration::days(1)).date())
}

/// Whether the value falls on the calendar date after `now`.
pub fn is_tomorrow_at(value: impl Into<DateValue>, now: NaiveDateTime) -> bool {
    value::resolve(value).is_some_and(|dt| dt.date() == (now + Duration::days(1)).date())
}

/// Whether the value is strictly before `now`.
pub fn is_past_at(value: impl Into<DateValue>, now: NaiveDateTime) -> bool {
    value::resolve(value).is_some_and(|dt| dt < now)
}

/// Whether the value is strictly after `now`.
pub fn is_future_at(value: impl Into<DateValue>, now: NaiveDateTime) -> bool {
    value::resolve(value).is_some_and(|dt| dt > now)
}

/// [`is_today_at`] against the ambient local clock.
pub fn is_today(value: impl Into<DateValue>) -> bool {
    is_today_at(value, Local::now().naive_local())
}

/// [`is_yesterday_at`] against the ambient local clock.
pub fn is_yesterday(value: impl Into<DateValue>) -> bool {
    is_yesterday_at(value, Local::now().naive_local())
}

/// [`is_tomorrow_at`] against the ambient local clock.
pub fn is_tomorrow(value: impl Into<DateValue>) -> bool {
    is_tomorrow_at(value, Local::now().naive_local())
}

/// [`is_past_at`] against the ambient local clock.
pub fn is_past(value: impl Into<DateValue>) -> bool {
    is_past_at(value, Local::now().naive_local())
}

/// [`is_future_at`] against the ambient local clock.
pub fn is_future(value: impl Into<DateValue>) -> bool {
    is_future_at(value, Local::now().naive_local())
}

/// Age in whole years at the reference instant: the raw year difference,
/// minus one when the reference (month, day) is still before the birth
/// (month, day) that year.
pub fn age_at(birth: impl Into<DateValue>, today: NaiveDateTime) -> Option<i32> {
    let birth = value::resolve(birth)?;
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    Some(years)
}

/// [`age_at`] against the ambient local clock.
pub fn age(birth: impl Into<DateValue>) -> Option<i32> {
    age_at(birth, Local::now().naive_local())
}

//! Datewise - civil date/time utilities for dashboard UIs
//!
//! This library provides the date handling a data-heavy frontend needs:
//! lightweight string parsing, calendar arithmetic, period boundaries,
//! human-readable relative formatting, and calendar predicates. Everything
//! operates on civil local time (`chrono::NaiveDateTime`) with no timezone
//! entity; every function is a pure, single-shot computation, and the
//! clock-dependent ones accept an injectable reference instant so they stay
//! deterministic under test.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`value`] - Coercion of strings, epoch timestamps, and chrono types into date values
//! * [`parse`] - Template-driven and custom-pattern date string parsing
//! * [`arithmetic`] - Unit offsets, period boundaries, differences, business days
//! * [`format`] - Short/long/relative/ISO/custom string rendering
//! * [`predicates`] - Range containment, today/past/future checks, age
//!
//! Invalid input never panics: parsing yields `None`, formatting yields the
//! literal `"Invalid Date"`, and predicates answer `false`.

/// Calendar arithmetic: offsets, boundaries, differences, business days
pub mod arithmetic;

/// String rendering: short, long, relative, ISO, and custom token patterns
pub mod format;

/// Date string parsing against ordered templates or an explicit pattern
pub mod parse;

/// Calendar predicates and range helpers
pub mod predicates;

/// Shared pattern token vocabulary
mod token;

/// Input coercion into resolvable date values
pub mod value;

pub use arithmetic::{
    add_time, business_days, date_difference, day_of_year, days_in_month, end_of_period,
    generate_date_range, is_business_day, next_business_day, previous_business_day, start_of_period,
    subtract_time, week_of_year, Period, TimeUnit,
};
pub use format::{format_custom, format_date, relative_time, FormatOptions, FormatStyle, INVALID_DATE};
pub use parse::{parse_custom_date, parse_date, parse_date_strict, ParseDateError};
pub use predicates::{
    age, age_at, is_future, is_future_at, is_past, is_past_at, is_today, is_today_at, is_tomorrow,
    is_tomorrow_at, is_within_range, is_yesterday, is_yesterday_at,
};
pub use value::DateValue;

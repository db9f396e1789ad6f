use chrono::{NaiveDate, Timelike};
use datewise::{parse_custom_date, parse_date, parse_date_strict, DateValue, ParseDateError};

#[test]
fn test_parse_iso_date() {
    let dt = parse_date("2024-03-05").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert_eq!(dt.time().num_seconds_from_midnight(), 0);
}

#[test]
fn test_parse_us_slash_date() {
    let dt = parse_date("03/05/2024").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
}

#[test]
fn test_parse_slash_ymd_date() {
    let dt = parse_date("2024/03/05").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
}

#[test]
fn test_parse_dash_mdy_date() {
    let dt = parse_date("03-05-2024").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
}

#[test]
fn test_parse_datetime_with_seconds() {
    let dt = parse_date("2024-03-05 10:30:45").unwrap();
    assert_eq!(dt, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(10, 30, 45).unwrap());
}

#[test]
fn test_parse_us_datetime_with_seconds() {
    let dt = parse_date("03/05/2024 10:30:45").unwrap();
    assert_eq!(dt, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(10, 30, 45).unwrap());
}

#[test]
fn test_parse_rfc3339_with_zone() {
    let dt = parse_date("2024-03-05T10:30:00Z").unwrap();
    assert_eq!(dt, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(10, 30, 0).unwrap());
}

#[test]
fn test_parse_rfc3339_with_millis_and_offset() {
    // Offsets normalize to UTC civil time.
    let dt = parse_date("2024-03-05T10:30:00.250+02:00").unwrap();
    assert_eq!(
        dt,
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_milli_opt(8, 30, 0, 250).unwrap()
    );
}

#[test]
fn test_parse_iso_without_zone_falls_back() {
    let dt = parse_date("2024-03-05T10:30:00").unwrap();
    assert_eq!(dt, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(10, 30, 0).unwrap());
}

#[test]
fn test_parse_month_name_fallback() {
    let dt = parse_date("March 5, 2024").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
}

#[test]
fn test_parse_invalid_returns_none() {
    assert_eq!(parse_date("not-a-date"), None);
    assert_eq!(parse_date(""), None);
    assert_eq!(parse_date("   "), None);
}

#[test]
fn test_parse_strict_errors() {
    assert_eq!(parse_date_strict("  "), Err(ParseDateError::Empty));
    assert_eq!(
        parse_date_strict("garbage"),
        Err(ParseDateError::UnrecognizedFormat("garbage".to_string()))
    );
    assert!(parse_date_strict("2024-03-05").is_ok());
}

#[test]
fn test_parse_epoch_millis() {
    let dt = parse_date(0i64).unwrap();
    assert_eq!(dt, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap());

    let dt = parse_date(86_400_000i64).unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(1970, 1, 2).unwrap());
}

#[test]
fn test_parse_custom_basic() {
    let dt = parse_custom_date("2024-03-05", "YYYY-MM-DD").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
}

#[test]
fn test_parse_custom_with_time() {
    let dt = parse_custom_date("05/03/2024 10:30:45.123", "DD/MM/YYYY HH:mm:ss.SSS").unwrap();
    assert_eq!(
        dt,
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_milli_opt(10, 30, 45, 123).unwrap()
    );
}

#[test]
fn test_parse_custom_two_digit_year() {
    // YY is always 2000 + value, no 19xx windowing.
    let dt = parse_custom_date("24-03-05", "YY-MM-DD").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());

    let dt = parse_custom_date("99-01-01", "YY-MM-DD").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2099, 1, 1).unwrap());
}

#[test]
fn test_parse_custom_single_letter_tokens() {
    let dt = parse_custom_date("3/5/2024 9:5:7", "M/D/YYYY H:m:s").unwrap();
    assert_eq!(dt, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 5, 7).unwrap());
}

#[test]
fn test_parse_custom_out_of_range_rolls_over() {
    // Month 13 carries into January of the next year.
    let dt = parse_custom_date("2024-13-01", "YYYY-MM-DD").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());

    // Day 32 of January carries into February.
    let dt = parse_custom_date("2024-01-32", "YYYY-MM-DD").unwrap();
    assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());

    // Hour 25 carries into the next day.
    let dt = parse_custom_date("2024-03-05 25:00:00", "YYYY-MM-DD HH:mm:ss").unwrap();
    assert_eq!(dt, NaiveDate::from_ymd_opt(2024, 3, 6).unwrap().and_hms_opt(1, 0, 0).unwrap());
}

#[test]
fn test_parse_custom_shape_mismatch() {
    assert_eq!(parse_custom_date("2024/03/05", "YYYY-MM-DD"), None);
    assert_eq!(parse_custom_date("2024-03", "YYYY-MM-DD"), None);
    assert_eq!(parse_custom_date("2024-03-05 extra", "YYYY-MM-DD"), None);
}

#[test]
fn test_date_value_resolution() {
    let native = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(12, 0, 0).unwrap();
    assert_eq!(DateValue::from(native).resolve(), Some(native));
    assert_eq!(DateValue::from("bogus").resolve(), None);
    assert!(DateValue::from(1_700_000_000_000i64).resolve().is_some());
}

//! Day One timestamp handling.
//!
//! Day One exports store creation dates as UTC strings in the form
//! `2024-03-01T09:30:00Z`. Charts are drawn in the user's wall-clock time,
//! so timestamps are converted to the local zone once at load time and kept
//! as naive datetimes from then on.

use chrono::{DateTime, Datelike, Local, NaiveDateTime, TimeZone, Timelike, Utc};

/// Timestamp format used by Day One JSON exports.
pub const DAY_ONE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Seconds in a day, for time-of-day fractions.
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parse a Day One timestamp string into a UTC datetime.
pub fn parse_day_one(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let naive = NaiveDateTime::parse_from_str(value, DAY_ONE_FORMAT)?;
    Ok(Utc.from_utc_datetime(&naive))
}

/// Convert a UTC datetime to the local wall-clock time, dropping zone info.
pub fn to_local_naive(utc: DateTime<Utc>) -> NaiveDateTime {
    utc.with_timezone(&Local).naive_local()
}

/// Format a datetime back into the Day One export format.
pub fn format_day_one(utc: DateTime<Utc>) -> String {
    utc.format(DAY_ONE_FORMAT).to_string()
}

/// Day number of a datetime, counted from the calendar epoch.
///
/// Used as the dot plot's x coordinate; only differences between day
/// numbers matter to the renderer.
pub fn day_number(dt: NaiveDateTime) -> i32 {
    dt.date().num_days_from_ce()
}

/// Day number of today in local time.
pub fn today_day_number() -> i32 {
    Local::now().date_naive().num_days_from_ce()
}

/// Fraction of the day elapsed at this time, in `0.0..1.0`.
///
/// Midnight maps to `0.0`, noon to `0.5`.
pub fn time_of_day_fraction(dt: NaiveDateTime) -> f64 {
    dt.time().num_seconds_from_midnight() as f64 / SECONDS_PER_DAY
}

/// Short `MM/DD/YY` label for a day number, for x-axis tick marks.
pub fn day_label(day: i32) -> String {
    match chrono::NaiveDate::from_num_days_from_ce_opt(day) {
        Some(date) => date.format("%m/%d/%y").to_string(),
        None => String::new(),
    }
}

/// `12 AM` / `2 PM` style label for an hour of the day.
pub fn hour_label(hour: u32) -> String {
    match hour % 24 {
        0 => "12 AM".to_string(),
        h @ 1..=11 => format!("{} AM", h),
        12 => "12 PM".to_string(),
        h => format!("{} PM", h - 12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDateTime::new(
            NaiveDate::from_ymd_opt(y, mo, d).unwrap(),
            NaiveTime::from_hms_opt(h, mi, s).unwrap(),
        )
    }

    #[test]
    fn test_parse_day_one_valid() {
        let dt = parse_day_one("2024-03-01T09:30:15Z").unwrap();
        assert_eq!(dt.naive_utc(), naive(2024, 3, 1, 9, 30, 15));
    }

    #[test]
    fn test_parse_day_one_invalid() {
        assert!(parse_day_one("not a date").is_err());
        assert!(parse_day_one("2024-03-01 09:30:15").is_err()); // Missing T/Z
        assert!(parse_day_one("2024-13-01T09:30:15Z").is_err()); // Bad month
        assert!(parse_day_one("").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        let raw = "2023-12-31T23:59:59Z";
        let dt = parse_day_one(raw).unwrap();
        assert_eq!(format_day_one(dt), raw);
    }

    #[test]
    fn test_time_of_day_fraction() {
        assert_eq!(time_of_day_fraction(naive(2024, 1, 1, 0, 0, 0)), 0.0);
        assert_eq!(time_of_day_fraction(naive(2024, 1, 1, 12, 0, 0)), 0.5);
        assert_eq!(time_of_day_fraction(naive(2024, 1, 1, 18, 0, 0)), 0.75);
        assert!(time_of_day_fraction(naive(2024, 1, 1, 23, 59, 59)) < 1.0);
    }

    #[test]
    fn test_day_number_consecutive_days() {
        let a = day_number(naive(2024, 2, 28, 10, 0, 0));
        let b = day_number(naive(2024, 2, 29, 10, 0, 0)); // Leap day
        let c = day_number(naive(2024, 3, 1, 10, 0, 0));
        assert_eq!(b - a, 1);
        assert_eq!(c - b, 1);
    }

    #[test]
    fn test_day_number_ignores_time() {
        let morning = day_number(naive(2024, 5, 5, 0, 0, 1));
        let night = day_number(naive(2024, 5, 5, 23, 59, 59));
        assert_eq!(morning, night);
    }

    #[test]
    fn test_day_label() {
        let day = day_number(naive(2024, 3, 1, 0, 0, 0));
        assert_eq!(day_label(day), "03/01/24");
    }

    #[test]
    fn test_hour_label() {
        assert_eq!(hour_label(0), "12 AM");
        assert_eq!(hour_label(1), "1 AM");
        assert_eq!(hour_label(11), "11 AM");
        assert_eq!(hour_label(12), "12 PM");
        assert_eq!(hour_label(13), "1 PM");
        assert_eq!(hour_label(23), "11 PM");
        assert_eq!(hour_label(24), "12 AM"); // Wraps
    }
}

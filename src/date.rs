//! Gregorian date and time rendering for Persian-script display.
//!
//! Output stays on the Gregorian calendar: dates render as `YYYY/MM/DD`
//! with the digits localized, and the fixed label tables carry the Dari
//! names for Gregorian months and weekdays. Converting to the Jalali
//! (solar) calendar is a known gap and intentionally not attempted here.
//!
//! Parse failures degrade instead of raising: date and date-time
//! formatters return an empty string, and the time formatter returns its
//! input unchanged. Callers render these results directly into display
//! text without guarding.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::digits::to_persian_digits;

/// Dari weekday names, indexed by days since Sunday.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
    "شنبه",
];

/// Dari names for the twelve Gregorian months, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "جنوری",
    "فبروری",
    "مارچ",
    "اپریل",
    "می",
    "جون",
    "جولای",
    "اگست",
    "سپتمبر",
    "اکتوبر",
    "نومبر",
    "دسمبر",
];

/// A date argument accepted by [`format_date`] and [`format_datetime`].
///
/// Callers hold dates in several shapes, from raw ISO-8601 text straight
/// out of an API payload to already parsed chrono values. The `From`
/// impls let each of them flow into the formatters directly.
#[derive(Debug, Clone, Copy)]
pub enum DateInput<'a> {
    /// An ISO-8601 date or date-time string, not yet parsed.
    Text(&'a str),
    /// A calendar date; midnight is assumed for the time portion.
    Date(NaiveDate),
    /// A date and time without zone information.
    DateTime(NaiveDateTime),
    /// A UTC instant, rendered using its UTC calendar fields.
    Utc(DateTime<Utc>),
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<NaiveDate> for DateInput<'a> {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<'a> From<NaiveDateTime> for DateInput<'a> {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl<'a> From<DateTime<Utc>> for DateInput<'a> {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Utc(value)
    }
}

impl DateInput<'_> {
    /// Resolves the input to its calendar fields, parsing text inputs as
    /// strict ISO-8601.
    fn resolve(self) -> Option<NaiveDateTime> {
        match self {
            DateInput::Text(text) => parse_iso(text),
            DateInput::Date(date) => Some(date.and_time(NaiveTime::MIN)),
            DateInput::DateTime(datetime) => Some(datetime),
            DateInput::Utc(datetime) => Some(datetime.naive_utc()),
        }
    }
}

/// Parses an ISO-8601 date or date-time string.
///
/// Accepts, in order: RFC 3339 date-times (fields are read in the offset
/// they were written with), naive `YYYY-MM-DDTHH:MM:SS` date-times, and
/// bare `YYYY-MM-DD` dates taken as midnight. Anything else is a parse
/// failure.
fn parse_iso(text: &str) -> Option<NaiveDateTime> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.naive_local());
    }
    if let Ok(datetime) = text.parse::<NaiveDateTime>() {
        return Some(datetime);
    }
    if let Ok(date) = text.parse::<NaiveDate>() {
        return Some(date.and_time(NaiveTime::MIN));
    }
    tracing::debug!(input = text, "date text failed ISO-8601 parsing");
    None
}

/// Renders a date as `YYYY/MM/DD` with Persian digits.
///
/// On parse failure the result is an empty string, never an error.
pub fn format_date<'a>(value: impl Into<DateInput<'a>>) -> String {
    match value.into().resolve() {
        Some(datetime) => to_persian_digits(datetime.format("%Y/%m/%d")),
        None => String::new(),
    }
}

/// Localizes the hour and minute segments of an `HH:MM[:SS]` string.
///
/// Seconds, when present, are dropped from the output. Input with fewer
/// than two `:`-separated segments is returned unchanged.
pub fn format_time(time: &str) -> String {
    let segments: Vec<&str> = time.split(':').collect();
    if segments.len() < 2 {
        return time.to_string();
    }

    format!(
        "{}:{}",
        to_persian_digits(segments[0]),
        to_persian_digits(segments[1])
    )
}

/// Renders a date-time as `YYYY/MM/DD - HH:MM` with Persian digits.
///
/// On parse failure the result is an empty string, never an error.
pub fn format_datetime<'a>(value: impl Into<DateInput<'a>>) -> String {
    match value.into().resolve() {
        Some(datetime) => format!(
            "{} - {}",
            to_persian_digits(datetime.format("%Y/%m/%d")),
            to_persian_digits(datetime.format("%H:%M"))
        ),
        None => String::new(),
    }
}

/// Returns the Dari weekday name for a date.
pub fn weekday_name(date: impl Datelike) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Returns the Dari name of a date's Gregorian month.
pub fn month_name(date: impl Datelike) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_from_plain_date_string() {
        assert_eq!(format_date("2024-03-15"), "۲۰۲۴/۰۳/۱۵");
    }

    #[test]
    fn test_format_date_from_rfc3339_string() {
        assert_eq!(format_date("2024-03-15T10:30:00Z"), "۲۰۲۴/۰۳/۱۵");
    }

    #[test]
    fn test_format_date_from_rfc3339_with_fractional_seconds() {
        assert_eq!(format_date("2024-03-15T10:30:00.123456Z"), "۲۰۲۴/۰۳/۱۵");
    }

    #[test]
    fn test_format_date_uses_fields_as_written_in_offset() {
        assert_eq!(format_date("2024-03-15T22:30:00+04:30"), "۲۰۲۴/۰۳/۱۵");
    }

    #[test]
    fn test_format_date_from_naive_datetime_string() {
        assert_eq!(format_date("2024-03-15T10:30:00"), "۲۰۲۴/۰۳/۱۵");
    }

    #[test]
    fn test_format_date_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "۲۰۲۴/۰۱/۰۵");
    }

    #[test]
    fn test_format_date_from_naive_datetime_value() {
        let datetime = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(format_date(datetime), "۲۰۲۴/۰۳/۱۵");
    }

    #[test]
    fn test_format_date_from_utc_value() {
        let datetime = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
            .and_utc();
        assert_eq!(format_date(datetime), "۲۰۲۴/۰۳/۱۵");
    }

    #[test]
    fn test_format_date_invalid_text_returns_empty() {
        assert_eq!(format_date("not-a-date"), "");
    }

    #[test]
    fn test_format_date_out_of_range_month_returns_empty() {
        assert_eq!(format_date("2024-13-01"), "");
    }

    #[test]
    fn test_format_date_empty_string_returns_empty() {
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_time_drops_seconds() {
        assert_eq!(format_time("14:30:00"), "۱۴:۳۰");
    }

    #[test]
    fn test_format_time_hour_minute_only() {
        assert_eq!(format_time("09:05"), "۰۹:۰۵");
    }

    #[test]
    fn test_format_time_single_segment_unchanged() {
        assert_eq!(format_time("14"), "14");
    }

    #[test]
    fn test_format_time_empty_string_unchanged() {
        assert_eq!(format_time(""), "");
    }

    #[test]
    fn test_format_time_keeps_segment_widths() {
        // Segments are localized as-is, no padding is added
        assert_eq!(format_time("8:5:20"), "۸:۵");
    }

    #[test]
    fn test_format_time_non_numeric_segments() {
        assert_eq!(format_time("ab:cd"), "ab:cd");
    }

    #[test]
    fn test_format_datetime_from_rfc3339_string() {
        assert_eq!(
            format_datetime("2024-03-15T14:30:00Z"),
            "۲۰۲۴/۰۳/۱۵ - ۱۴:۳۰"
        );
    }

    #[test]
    fn test_format_datetime_plain_date_renders_midnight() {
        assert_eq!(format_datetime("2024-03-15"), "۲۰۲۴/۰۳/۱۵ - ۰۰:۰۰");
    }

    #[test]
    fn test_format_datetime_invalid_text_returns_empty() {
        assert_eq!(format_datetime("not-a-date"), "");
    }

    #[test]
    fn test_weekday_name_known_sunday() {
        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(weekday_name(sunday), "یکشنبه");
    }

    #[test]
    fn test_weekday_name_known_saturday() {
        let saturday = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(weekday_name(saturday), "شنبه");
    }

    #[test]
    fn test_weekday_name_known_friday() {
        let friday = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(weekday_name(friday), "جمعه");
    }

    #[test]
    fn test_weekday_name_covers_full_week() {
        // 2024-03-10 was a Sunday; the following days walk the table in order
        for (i, expected) in WEEKDAY_NAMES.iter().enumerate() {
            let date = NaiveDate::from_ymd_opt(2024, 3, 10 + i as u32).unwrap();
            assert_eq!(weekday_name(date), *expected);
        }
    }

    #[test]
    fn test_weekday_name_accepts_datetime() {
        let datetime = NaiveDate::from_ymd_opt(2024, 3, 10)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(weekday_name(datetime), "یکشنبه");
    }

    #[test]
    fn test_month_name_january() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(month_name(date), "جنوری");
    }

    #[test]
    fn test_month_name_december() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(month_name(date), "دسمبر");
    }

    #[test]
    fn test_month_name_covers_all_months() {
        for (i, expected) in MONTH_NAMES.iter().enumerate() {
            let date = NaiveDate::from_ymd_opt(2024, i as u32 + 1, 1).unwrap();
            assert_eq!(month_name(date), *expected);
        }
    }
}

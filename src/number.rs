//! Locale numeral formatting and parsing.
//!
//! Numbers are displayed with `,` thousands grouping and Persian digits,
//! and parsed back from whatever mix of Persian and Western digits a user
//! types. Parsing never fails hard: malformed input yields the NaN
//! sentinel and callers decide how to present the degraded value.

use std::fmt::Display;

use crate::digits::{to_persian_digits, to_western_digits};

/// Formats a number (or numeric string) with thousands grouping and
/// Persian digits.
///
/// The text is split at the first decimal point; the integer part is
/// grouped in threes from the least-significant digit and the fractional
/// part is carried over verbatim. A leading sign stays ahead of the first
/// group with no separator next to it.
///
/// # Example
///
/// ```ignore
/// use maktab_locale::number::format_number;
///
/// assert_eq!(format_number(1234567), "۱,۲۳۴,۵۶۷");
/// assert_eq!(format_number("-1234.56"), "-۱,۲۳۴.۵۶");
/// ```
#[must_use]
pub fn format_number(value: impl Display) -> String {
    let text = value.to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let grouped = group_thousands(integer);
    let rejoined = match fraction {
        Some(fraction) => format!("{}.{}", grouped, fraction),
        None => grouped,
    };

    to_persian_digits(rejoined)
}

/// Parses a locale numeral into an `f64`.
///
/// Persian digits are converted to Western, grouping separators are
/// stripped, and the remainder is parsed as a standard decimal. Returns
/// [`f64::NAN`] when the cleaned text is not a valid decimal literal, so
/// callers must check [`f64::is_nan`] before using the value.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let cleaned = normalize_numeral(text);
    match cleaned.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(input = text, "numeral text failed to parse");
            f64::NAN
        }
    }
}

/// Rewrites a numeral to Western digits with grouping separators removed.
pub(crate) fn normalize_numeral(text: &str) -> String {
    to_western_digits(text).replace(',', "")
}

/// Inserts `,` every three digits into a plain digit run, counting from
/// the right. Text that is not a signed digit run is returned unchanged.
fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => match integer.strip_prefix('+') {
            Some(rest) => ("+", rest),
            None => ("", integer),
        },
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return integer.to_string();
    }

    let mut grouped = String::with_capacity(integer.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

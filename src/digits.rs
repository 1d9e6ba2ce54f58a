//! Digit conversion between Western Arabic and Persian glyphs.
//!
//! The mapping is a total bijection over exactly twenty characters: the
//! Western Arabic digits `0`-`9` and the Persian digits `۰`-`۹` (U+06F0
//! through U+06F9). Every other character passes through conversion
//! untouched, so both directions preserve character count and position.
//!
//! # Example
//!
//! ```ignore
//! use maktab_locale::digits::{to_persian_digits, to_western_digits};
//!
//! let localized = to_persian_digits("Grade 7B");
//! assert_eq!(localized, "Grade ۷B");
//!
//! let restored = to_western_digits(&localized);
//! assert_eq!(restored, "Grade 7B");
//! ```

use std::fmt::Display;

/// The ten Persian digit characters, indexed by numeric value.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// The ten Western Arabic digit characters, indexed by numeric value.
pub const WESTERN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Replaces every Western Arabic digit in the rendered value with its
/// Persian counterpart.
///
/// Accepts anything displayable (numbers included) so callers can pass
/// raw values straight through. Non-digit characters are kept in place,
/// and applying the conversion twice yields the same result as once.
#[must_use]
pub fn to_persian_digits(value: impl Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c {
            '0'..='9' => PERSIAN_DIGITS[(c as u8 - b'0') as usize],
            other => other,
        })
        .collect()
}

/// Replaces every Persian digit with its Western Arabic counterpart.
///
/// Only the ten Persian digit characters are touched; grouping separators,
/// Arabic-Indic digits, and all other text pass through unchanged.
#[must_use]
pub fn to_western_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '۰'..='۹' => WESTERN_DIGITS[(c as u32 - '۰' as u32) as usize],
            other => other,
        })
        .collect()
}

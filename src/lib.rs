//! # Maktab Locale
//!
//! Persian (Dari) locale conversions for the Maktab student-information
//! system: digit mapping, numeral grouping and parsing, and Gregorian
//! date/time rendering with Dari labels.
//!
//! ## Overview
//!
//! Maktab serves Afghan schools, where the interface shows numbers and
//! dates in Persian script while the backend stores plain ASCII numerals
//! and ISO-8601 timestamps. This crate is the boundary between the two:
//! pure, stateless functions that presentation code calls on every render
//! and every form submission.
//!
//! - [`digits`]: Western Arabic to Persian digit mapping and back
//! - [`number`]: thousands grouping and locale numeral parsing
//! - [`date`]: `YYYY/MM/DD` and `HH:MM` rendering plus Dari weekday and
//!   Gregorian month labels
//! - [`serde`]: deserializers for form fields holding locale numerals
//!
//! ## Degradation contract
//!
//! Conversion output feeds directly into display text with no guard logic
//! around the call sites, so parse failures degrade instead of raising:
//!
//! | Failure | Result |
//! |---------|--------|
//! | Malformed date or date-time text | empty string |
//! | Time text with no `:` separator | input returned unchanged |
//! | Malformed numeral text | `f64::NAN` sentinel |
//!
//! ## Example
//!
//! ```ignore
//! use maktab_locale::{format_date, format_number, parse_number};
//!
//! // Group and localize a number for display
//! assert_eq!(format_number(1234567), "۱,۲۳۴,۵۶۷");
//!
//! // Render an API timestamp
//! assert_eq!(format_date("2024-03-15T10:30:00Z"), "۲۰۲۴/۰۳/۱۵");
//!
//! // Parse user input typed with a Persian keyboard
//! let score = parse_number("۲۸۵.۵");
//! assert!(!score.is_nan());
//! ```
//!
//! ## Calendar note
//!
//! Dates stay on the Gregorian calendar; only digits and the fixed label
//! tables are localized. True Jalali (solar) calendar conversion is a
//! known gap, not an implemented feature.
//!
//! ## Workspace
//!
//! Two companion crates live in this workspace: `maktab-i18n` (the
//! embedded Dari message catalog) and `maktab-cli` (terminal access to
//! the conversions).

pub mod date;
pub mod digits;
pub mod number;
pub mod serde;

// Re-export the conversion surface at crate root
pub use date::{
    DateInput, MONTH_NAMES, WEEKDAY_NAMES, format_date, format_datetime, format_time, month_name,
    weekday_name,
};
pub use digits::{PERSIAN_DIGITS, WESTERN_DIGITS, to_persian_digits, to_western_digits};
pub use number::{format_number, parse_number};

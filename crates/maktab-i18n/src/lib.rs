//! # Maktab I18n
//!
//! Embedded Dari (fa) message catalog for the Maktab student-information
//! system.
//!
//! Messages are addressed by dot-separated key paths and may carry
//! `{name}` placeholders:
//!
//! ```ignore
//! use maktab_i18n::{translate, translate_with};
//!
//! assert_eq!(translate("common.save"), "ذخیره");
//!
//! let message = translate_with("validation.passwordMinLength", &[("min", "۸")]);
//! assert_eq!(message, "رمز عبور باید حداقل ۸ کاراکتر باشد");
//! ```
//!
//! Lookups never fail: a missing key falls back to the key itself so
//! callers always have something to render.

pub mod catalog;

pub use catalog::{translate, translate_with};

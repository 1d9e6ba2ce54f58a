use serde::{Deserialize, Deserializer};

use crate::number::{normalize_numeral, parse_number};

/// Deserializes an optional string field holding a locale numeral into an
/// optional i64.
///
/// Form and query payloads may carry values typed with Persian digits and
/// grouping separators, or an empty string when the field was left blank
/// (treated as `None`).
pub fn deserialize_optional_locale_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => normalize_numeral(&s)
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Deserializes an optional string field holding a locale numeral into an
/// optional f64.
///
/// Same tolerance as [`deserialize_optional_locale_i64`], with a decimal
/// point allowed.
pub fn deserialize_optional_locale_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => {
            let value = parse_number(&s);
            if value.is_nan() {
                return Err(serde::de::Error::custom(format!(
                    "invalid locale numeral: {}",
                    s
                )));
            }
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

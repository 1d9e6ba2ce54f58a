//! Message catalog lookup and placeholder interpolation.
//!
//! The fa catalog ships embedded in the binary and is parsed once on
//! first use. Keys are dot-separated paths into the nested JSON groups
//! (`"auth.loginTitle"`); values are the Dari display strings.

use serde_json::Value;
use std::sync::OnceLock;

static CATALOG: OnceLock<Value> = OnceLock::new();

const FA_MESSAGES: &str = include_str!("../locales/fa.json");

/// Returns the parsed message catalog, loading it on first use
fn catalog() -> &'static Value {
    CATALOG.get_or_init(|| {
        serde_json::from_str(FA_MESSAGES).expect("embedded fa catalog must be valid JSON")
    })
}

/// Walks a dot-separated key path through the nested catalog groups.
fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a str> {
    let mut current = root;
    for segment in key.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    current.as_str()
}

/// Returns the catalog message for a dot-separated key.
///
/// Missing keys, and keys addressing a group rather than a message, fall
/// back to the key itself.
pub fn translate(key: &str) -> String {
    match lookup(catalog(), key) {
        Some(message) => message.to_string(),
        None => key.to_string(),
    }
}

/// Returns the catalog message for a key with `{name}` placeholders
/// replaced by the given parameter values.
///
/// Placeholders with no matching parameter are left intact.
pub fn translate_with(key: &str, params: &[(&str, &str)]) -> String {
    let mut message = translate(key);
    for (name, value) in params {
        message = message.replace(&format!("{{{}}}", name), value);
    }
    message
}

//! Submitted-form decoding.
//!
//! Form fields become a JSON object keyed by field name. A name ending in
//! `[]` (for example `roles[]` checkboxes) collects every value into an array
//! under the bare name; any other repeated name keeps the last value.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Fold `(name, value)` pairs into a JSON object.
pub fn entries_to_json<I, K, V>(entries: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut out = Map::new();
    for (key, value) in entries {
        let key = key.as_ref();
        let value = Value::String(value.into());
        if let Some(list_key) = key.strip_suffix("[]") {
            match out.get_mut(list_key) {
                Some(Value::Array(items)) => items.push(value),
                _ => {
                    out.insert(list_key.to_owned(), Value::Array(vec![value]));
                }
            }
        } else {
            out.insert(key.to_owned(), value);
        }
    }
    out
}

/// Decode `(name, value)` pairs into a typed request body.
///
/// # Errors
///
/// Returns the serde error when a required field is missing.
pub fn decode_entries<T, I, K, V>(entries: I) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    serde_json::from_value(Value::Object(entries_to_json(entries)))
}

/// Read the string-valued entries of a `<form>`; file inputs are skipped.
#[cfg(feature = "hydrate")]
pub fn form_entries(form: &web_sys::HtmlFormElement) -> Vec<(String, String)> {
    let Ok(data) = web_sys::FormData::new_with_form(form) else {
        return Vec::new();
    };
    let Ok(Some(iter)) = js_sys::try_iter(&data) else {
        return Vec::new();
    };
    iter.flatten()
        .filter_map(|entry| {
            let pair = js_sys::Array::from(&entry);
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

/// Decode a `<form>` into a typed request body.
///
/// # Errors
///
/// Returns the serde error when a required field is missing.
#[cfg(feature = "hydrate")]
pub fn decode_form<T: DeserializeOwned>(form: &web_sys::HtmlFormElement) -> Result<T, serde_json::Error> {
    decode_entries(form_entries(form))
}

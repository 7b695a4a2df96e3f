//! Cache Key Derivation Module
//!
//! Builds deterministic cache keys from request parameters so that
//! equivalent requests hit the same entry regardless of how callers
//! assembled their parameter sets.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{KeyError, Result};

/// Separator between the prefix and the parameter pairs.
const PREFIX_SEPARATOR: char = ':';

/// Separator between `name=value` pairs.
const PAIR_SEPARATOR: char = '&';

// == Generate Key ==
/// Derives a cache key from a prefix and a parameter set.
///
/// Parameters are serialized to JSON, sorted by name, rendered as
/// `name=value` pairs (values in their JSON form) joined with `&`, and
/// prepended with `prefix` and `:`. Equal `(prefix, params)` always produce
/// the same string, regardless of the order fields were declared or
/// inserted in; any difference in a name or value produces a different
/// string.
///
/// `params` must serialize to a JSON object (a struct, a map, or
/// `serde_json::json!({..})`); anything else is a [`KeyError`].
///
/// Caller contract, not checked here: parameter values must serialize
/// deterministically (primitives, ordered arrays, and nested objects all
/// do; `serde_json` objects iterate in sorted key order), and parameter
/// names must not contain `=`, `&`, or `:`.
///
/// # Example
/// ```
/// use api_cache::generate_key;
/// use serde_json::json;
///
/// let key = generate_key("products", &json!({ "limit": 20, "sort": "asc" })).unwrap();
/// assert_eq!(key, r#"products:limit=20&sort="asc""#);
/// ```
pub fn generate_key<P: Serialize>(prefix: &str, params: &P) -> Result<String> {
    let value = serde_json::to_value(params)?;
    let object = match value {
        Value::Object(map) => map,
        other => return Err(KeyError::NonObjectParams(json_type_name(&other))),
    };

    // BTreeMap iteration gives the sorted-by-name order the determinism
    // guarantee relies on, independent of serde_json's map backing.
    let sorted: BTreeMap<&String, &Value> = object.iter().collect();

    let mut pairs = Vec::with_capacity(sorted.len());
    for (name, value) in sorted {
        pairs.push(format!("{}={}", name, serde_json::to_string(value)?));
    }

    Ok(format!(
        "{}{}{}",
        prefix,
        PREFIX_SEPARATOR,
        pairs.join(&PAIR_SEPARATOR.to_string())
    ))
}

/// Human-readable JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Recursive key normalization for decoded JSON values.
//!
//! The API escapes reserved field names with a leading underscore (`_id`) and
//! uses hyphens inside some names. Both are awkward to address, so every key
//! is rewritten before a record is surfaced.

use serde_json::{Map, Value};

/// Rewrite every object key in `value`, at any depth: hyphens become
/// underscores, then one leading underscore is stripped.
///
/// Consumes the input and returns a new tree; scalars pass through unchanged.
/// When two original keys normalize to the same name, the later-processed one
/// wins (implementation-defined, follows the map's iteration order).
#[must_use]
pub fn reshape_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut reshaped = Map::new();
            for (key, value) in map {
                reshaped.insert(reshape_key(&key), reshape_keys(value));
            }
            Value::Object(reshaped)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(reshape_keys).collect()),
        other => other,
    }
}

fn reshape_key(key: &str) -> String {
    let key = key.replace('-', "_");
    match key.strip_prefix('_') {
        Some(stripped) => stripped.to_string(),
        None => key,
    }
}

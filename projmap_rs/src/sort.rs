//! Canonical (sorted-key) rewriting of JSON values.
//!
//! `serde_json` is built with `preserve_order`, so object key order reflects
//! insertion order and this pass is what makes two outputs comparable.

use serde_json::Value;

/// Rebuild a value with every object's keys in ascending lexicographic order.
/// Scalars pass through, arrays keep their element order. Idempotent.
pub fn sort_object_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(sort_object_keys).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_object_keys(value)))
                    .collect(),
            )
        }
        scalar => scalar,
    }
}

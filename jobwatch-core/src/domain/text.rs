//! Lenient text fields
//!
//! The jobs API is loose about field types: ids arrive as numbers or strings,
//! results may be `null` or nested objects. Each such field is kept as the
//! text it is displayed as.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Converts a JSON value into its display text
///
/// Strings are taken verbatim, numbers and booleans use their JSON text,
/// `null` becomes the empty string and composite values are serialized as
/// compact JSON.
pub fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_json::to_string(&other).unwrap_or_default(),
    }
}

/// Deserializes any JSON value as opaque display text
///
/// Intended for `#[serde(default, deserialize_with = "...")]` so a missing
/// field also ends up as the empty string.
pub fn opaque<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_to_text)
}

//! JSON record options.

use serde_json::Value;

use crate::error::InvalidOptionError;

/// Default option payload: a JSON object with arbitrary keys.
pub type Record = serde_json::Map<String, Value>;

/// Build a record with `label` and `value` keys.
pub fn record(label: impl Into<String>, value: impl Into<String>) -> Record {
    let mut map = Record::new();
    map.insert("label".to_string(), Value::String(label.into()));
    map.insert("value".to_string(), Value::String(value.into()));
    map
}

/// Read a string field from a record.
///
/// Non-string fields are rejected rather than coerced; a number where a label
/// is expected means the extractors and the data disagree.
pub fn record_field(record: &Record, field: &str) -> Result<String, InvalidOptionError> {
    match record.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(InvalidOptionError::not_a_string(field, json_type(other))),
        None => Err(InvalidOptionError::missing(field)),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

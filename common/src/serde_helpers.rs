//! Lenient deserializers for the loosely typed catalog payloads.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// `null` and missing both become `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a string or a number and keeps its textual form.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| value_to_text(&value)))
}

/// Same as [`string_or_number`] but never absent.
pub fn required_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_or_number(deserializer)?.unwrap_or_default())
}

/// Accepts a JSON array of scalars or a comma separated string.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let list = match value {
        Some(Value::Array(items)) => items.iter().filter_map(value_to_text).collect(),
        Some(Value::String(s)) => split_comma_list(&s),
        _ => Vec::new(),
    };
    Ok(list)
}

/// Metadata arrives either as an object or as a JSON-encoded string of one.
/// Anything unparseable is treated as absent.
pub fn embedded_json_object<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(decode_json_object))
}

pub fn decode_json_object(value: Value) -> Option<Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        Value::String(s) => match serde_json::from_str::<Value>(&s) {
            Ok(Value::Object(map)) => Some(map),
            _ => None,
        },
        _ => None,
    }
}

pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Splits on commas, trims, drops empty pieces.
pub fn split_comma_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metadata_string_is_decoded() {
        let decoded = decode_json_object(json!("{\"source\": \"WHO\"}")).expect("object");
        assert_eq!(decoded.get("source"), Some(&json!("WHO")));
    }

    #[test]
    fn malformed_metadata_is_absent() {
        assert_eq!(decode_json_object(json!("{not json")), None);
        assert_eq!(decode_json_object(json!("[1, 2]")), None);
        assert_eq!(decode_json_object(json!(42)), None);
    }

    #[test]
    fn comma_list_is_trimmed() {
        assert_eq!(split_comma_list(" amr, , surveillance ,genomics"), vec!["amr", "surveillance", "genomics"]);
        assert!(split_comma_list("  ").is_empty());
    }
}

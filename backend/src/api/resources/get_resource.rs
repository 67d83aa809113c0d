//! Single resource lookup for the detail viewer.

use common::{catalog_api::endpoints, resource::Resource};
use reqwest::StatusCode;
use serde_json::Value;

use crate::http_utils::catalog_http::catalog_get;

/// `Ok(None)` when the catalog has no such resource or answers with an empty payload.
pub async fn get_resource(id: String) -> anyhow::Result<Option<Resource>> {
    let id = id.trim();
    if id.is_empty() {
        return Ok(None);
    }
    let path = format!("{}/{}", endpoints::RESOURCE, encode_path_segment(id));
    let response = catalog_get(&path, &[]).await?;
    if response.status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let payload: Value = response.json()?;
    resource_from_payload(payload)
}

fn resource_from_payload(payload: Value) -> anyhow::Result<Option<Resource>> {
    match &payload {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        Value::Object(map) if map.len() == 1 && map.contains_key("error") => Ok(None),
        Value::Object(_) => Ok(Some(serde_json::from_value(payload)?)),
        other => anyhow::bail!("Invalid resource payload: {:#?}", other),
    }
}

fn encode_path_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_payloads_mean_absent() {
        assert!(resource_from_payload(Value::Null).expect("null").is_none());
        assert!(resource_from_payload(json!({})).expect("empty").is_none());
        assert!(resource_from_payload(json!({"error": "not found"})).expect("error").is_none());
        assert!(resource_from_payload(json!([1])).is_err());
    }

    #[test]
    fn resource_payload_is_decoded() {
        let resource = resource_from_payload(json!({"data_source_id": 3, "name": "WHONET"})).expect("payload").expect("resource");
        assert_eq!(resource.id(), Some("3"));
    }

    #[test]
    fn ids_are_percent_encoded() {
        assert_eq!(encode_path_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_path_segment("AMR-01"), "AMR-01");
    }
}

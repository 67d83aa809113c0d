//! Catalog resource model as returned by the catalog service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::field_path::FieldPath;
use crate::serde_helpers::{embedded_json_object, null_as_default, split_comma_list, string_list, string_or_number};

/// Separator used when a classification path is shown as one string.
pub const CLASSIFICATION_SEPARATOR: &str = " > ";

/// One catalog entry (dataset, tool, system...). Every field is optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Resource {
    #[serde(deserialize_with = "string_or_number")]
    pub data_source_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub resource_type: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub data_type: Option<String>,
    pub level5: Option<String>,
    #[serde(deserialize_with = "string_list")]
    pub countries_list: Vec<String>,
    #[serde(deserialize_with = "string_list")]
    pub domains_list: Vec<String>,
    #[serde(deserialize_with = "embedded_json_object")]
    pub metadata: Option<Map<String, Value>>,
    pub repository: Option<String>,
    pub repository_url: Option<String>,
    pub data_resolution: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub year_start: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub year_end: Option<String>,
    pub keywords: Option<String>,
    pub last_updated: Option<String>,
    pub contact_information: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub related_resources: Vec<Value>,
}

impl Resource {
    pub fn id(&self) -> Option<&str> {
        self.data_source_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn field(&self, field: FieldPath) -> Option<&str> {
        field.value_of(self)
    }

    /// Display title: the name when present, else the id.
    pub fn title(&self) -> String {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.id())
            .unwrap_or("Untitled resource")
            .to_string()
    }

    pub fn keyword_list(&self) -> Vec<String> {
        self.keywords.as_deref().map(split_comma_list).unwrap_or_default()
    }

    /// Non-empty classification fields from level 1 to 5.
    pub fn classification_segments(&self) -> Vec<&str> {
        FieldPath::ALL
            .iter()
            .filter_map(|field| self.field(*field))
            .filter(|value| !value.trim().is_empty())
            .collect()
    }

    pub fn classification_path(&self) -> Option<String> {
        let segments = self.classification_segments();
        if segments.is_empty() {
            return None;
        }
        Some(segments.join(CLASSIFICATION_SEPARATOR))
    }

    /// Year end as an integer; missing or unparseable is 0.
    pub fn year_end_number(&self) -> i64 {
        parse_year(self.year_end.as_deref())
    }
}

pub fn parse_year(value: Option<&str>) -> i64 {
    value.and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(0)
}

//! View model and load state for the resource detail overlay.

use serde_json::Value;

use crate::error::CatalogError;
use crate::resource::Resource;
use crate::serde_helpers::value_to_text;

#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelatedResourceLink {
    pub id: Option<String>,
    pub label: String,
}

/// Only fields present on the resource end up in the view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceDetailView {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub general_info: Vec<DetailField>,
    pub classification_path: Option<String>,
    pub countries: Vec<String>,
    pub domains: Vec<String>,
    pub keywords: Vec<String>,
    pub repository_url: Option<String>,
    pub related_metadata: Vec<DetailField>,
    pub related_resources: Vec<RelatedResourceLink>,
}

fn present(value: &Option<String>) -> Option<String> {
    value.as_ref().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl ResourceDetailView {
    pub fn from_resource(resource: &Resource) -> Self {
        let mut general_info = Vec::new();
        let mut push = |label: &str, value: &Option<String>| {
            if let Some(value) = present(value) {
                general_info.push(DetailField { label: label.to_string(), value });
            }
        };
        push("ID", &resource.data_source_id);
        push("Repository", &resource.repository);
        push("Data resolution", &resource.data_resolution);
        push("Year start", &resource.year_start);
        push("Year end", &resource.year_end);
        push("Last updated", &resource.last_updated);
        push("Contact", &resource.contact_information);

        Self {
            id: resource.id().map(str::to_string),
            title: resource.title(),
            description: present(&resource.description),
            general_info,
            classification_path: resource.classification_path(),
            countries: resource.countries_list.clone(),
            domains: resource.domains_list.clone(),
            keywords: resource.keyword_list(),
            repository_url: present(&resource.repository_url),
            related_metadata: metadata_fields(resource),
            related_resources: resource.related_resources.iter().filter_map(related_link).collect(),
        }
    }
}

fn metadata_fields(resource: &Resource) -> Vec<DetailField> {
    let Some(metadata) = &resource.metadata else { return Vec::new() };
    metadata
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| DetailField {
            label: metadata_label(key),
            value: value_to_text(value).unwrap_or_else(|| value.to_string()),
        })
        .collect()
}

/// `update_frequency` -> `Update frequency`.
fn metadata_label(key: &str) -> String {
    let spaced = key.replace(['_', '-'], " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => key.to_string(),
    }
}

fn related_link(value: &Value) -> Option<RelatedResourceLink> {
    match value {
        Value::Object(map) => {
            let id = map
                .get("data_source_id")
                .or_else(|| map.get("id"))
                .and_then(value_to_text);
            let label = map
                .get("name")
                .or_else(|| map.get("text"))
                .and_then(value_to_text)
                .or_else(|| id.clone())?;
            Some(RelatedResourceLink { id, label })
        }
        other => value_to_text(other).map(|id| RelatedResourceLink { id: Some(id.clone()), label: id }),
    }
}

/// Overlay state. Loading always ends in `Loaded` or `Failed`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Loading { id: String },
    Loaded(ResourceDetailView),
    Failed { id: String, message: String },
}

impl DetailState {
    pub fn open(&mut self, id: impl Into<String>) {
        *self = DetailState::Loading { id: id.into() };
    }

    pub fn close(&mut self) {
        *self = DetailState::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, DetailState::Closed)
    }

    /// Applies a fetch result; responses for an id no longer loading are dropped.
    pub fn resolve(&mut self, id: &str, result: Result<Option<Resource>, String>) {
        match self {
            DetailState::Loading { id: loading } if loading == id => {}
            _ => return,
        }
        *self = match result {
            Ok(Some(resource)) => DetailState::Loaded(ResourceDetailView::from_resource(&resource)),
            Ok(None) => DetailState::Failed {
                id: id.to_string(),
                message: CatalogError::ResourceNotFound(id.to_string()).to_string(),
            },
            Err(message) => DetailState::Failed { id: id.to_string(), message },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Resource {
        serde_json::from_value(json!({
            "data_source_id": "r-1",
            "name": "GLASS",
            "resource_type": "Surveillance Systems",
            "category": "Human",
            "subcategory": "",
            "data_type": "Phenotypic",
            "countries_list": ["Ghana"],
            "keywords": " amr,glass , ",
            "metadata": {"license": "CC-BY", "notes": null},
            "related_resources": [{"data_source_id": "r-2", "name": "WHONET"}, "r-3"],
            "repository_url": "https://example.org/glass"
        }))
        .expect("resource")
    }

    #[test]
    fn view_keeps_only_present_fields() {
        let view = ResourceDetailView::from_resource(&sample());
        assert_eq!(view.title, "GLASS");
        assert_eq!(view.general_info, vec![DetailField { label: "ID".to_string(), value: "r-1".to_string() }]);
        assert_eq!(view.classification_path.as_deref(), Some("Surveillance Systems > Human > Phenotypic"));
        assert_eq!(view.keywords, vec!["amr", "glass"]);
        assert_eq!(view.related_metadata, vec![DetailField { label: "License".to_string(), value: "CC-BY".to_string() }]);
        assert_eq!(view.related_resources.len(), 2);
        assert_eq!(view.related_resources[0].label, "WHONET");
        assert_eq!(view.related_resources[1].id.as_deref(), Some("r-3"));
        assert!(view.description.is_none());
    }

    #[test]
    fn metadata_keys_become_labels() {
        assert_eq!(metadata_label("update_frequency"), "Update frequency");
        assert_eq!(metadata_label("access-type"), "Access type");
    }

    #[test]
    fn missing_payload_fails_instead_of_loading_forever() {
        let mut state = DetailState::default();
        state.open("r-9");
        state.resolve("r-9", Ok(None));
        assert!(matches!(state, DetailState::Failed { ref id, .. } if id == "r-9"));

        state.open("r-9");
        state.resolve("r-9", Err("500: boom".to_string()));
        assert_eq!(state, DetailState::Failed { id: "r-9".to_string(), message: "500: boom".to_string() });
    }

    #[test]
    fn stale_responses_are_ignored() {
        let mut state = DetailState::default();
        state.open("a");
        state.open("b");
        state.resolve("a", Ok(Some(sample())));
        assert_eq!(state, DetailState::Loading { id: "b".to_string() });
        state.resolve("b", Ok(Some(sample())));
        assert!(matches!(state, DetailState::Loaded(_)));
    }
}

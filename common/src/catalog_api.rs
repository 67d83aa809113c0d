//! Request and response shapes of the catalog service endpoints.

use serde::{Deserialize, Serialize};

use crate::hierarchy::HierarchyDescriptor;
use crate::serde_helpers::{null_as_default, required_string_or_number};

pub mod endpoints {
    pub const FILTER_RESOURCES: &str = "/api/filter-resources";
    pub const RESOURCE: &str = "/api/resource";
    pub const RESOURCE_HIERARCHY: &str = "/api/resource-hierarchy";
    pub const MAIN_CATEGORIES: &str = "/api/main-categories";
    pub const SEARCH_RESOURCES: &str = "/api/search-resources";
    pub const AI_CHAT: &str = "/api/ai-chat";
    pub const NETWORK_DATA: &str = "/api/network-data";
}

/// Body of `POST /api/filter-resources`. Empty lists are left out of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FilterResourcesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(rename = "resourceTypes", skip_serializing_if = "Option::is_none")]
    pub resource_types: Option<Vec<String>>,
}

impl FilterResourcesRequest {
    pub fn is_unfiltered(&self) -> bool {
        [&self.countries, &self.domains, &self.resource_types]
            .iter()
            .all(|list| list.as_ref().map(|l| l.is_empty()).unwrap_or(true))
    }
}

/// `GET /api/main-categories`. Either list may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MainCategories {
    #[serde(rename = "Country", deserialize_with = "null_as_default")]
    pub countries: Vec<String>,
    #[serde(rename = "Domain", deserialize_with = "null_as_default")]
    pub domains: Vec<String>,
}

/// One type-ahead hit of `GET /api/search-resources?q=`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSuggestion {
    #[serde(deserialize_with = "required_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub text: String,
}

/// Everything the filter sidebar needs: flat lists plus the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FilterOptions {
    pub main_categories: MainCategories,
    pub hierarchy: HierarchyDescriptor,
}

impl FilterOptions {
    /// Resource types are the hierarchy's level-1 names.
    pub fn resource_types(&self) -> Vec<String> {
        self.hierarchy.resource_types()
    }
}

/// Queries shorter than this are not sent to the type-ahead endpoint.
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_body_omits_absent_lists() {
        let request = FilterResourcesRequest {
            countries: Some(vec!["Ghana".to_string()]),
            resource_types: Some(vec!["Datasets".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).expect("json"),
            json!({"countries": ["Ghana"], "resourceTypes": ["Datasets"]})
        );
        assert!(FilterResourcesRequest::default().is_unfiltered());
        assert!(!request.is_unfiltered());
    }

    #[test]
    fn main_categories_tolerate_missing_lists() {
        let categories: MainCategories = serde_json::from_value(json!({"Country": ["Peru"], "Domain": null})).expect("categories");
        assert_eq!(categories.countries, vec!["Peru"]);
        assert!(categories.domains.is_empty());
    }

    #[test]
    fn suggestion_ids_may_be_numbers() {
        let hits: Vec<SearchSuggestion> = serde_json::from_value(json!([{"id": 5, "text": "GLASS"}])).expect("hits");
        assert_eq!(hits[0].id, "5");
    }
}

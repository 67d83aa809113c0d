//! Local hierarchy filter applied on top of the server-side category query.

use serde::{Deserialize, Serialize};

use crate::field_path::FieldPath;
use crate::resource::Resource;

/// Path constraint of a hierarchy selection. `None` fields do not constrain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HierarchyPath {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

impl HierarchyPath {
    /// Fields the filter is allowed to constrain; `level5` never is.
    pub const FILTER_FIELDS: [FieldPath; 4] = [
        FieldPath::ResourceType,
        FieldPath::Category,
        FieldPath::Subcategory,
        FieldPath::DataType,
    ];

    /// Takes the first four segments of a root-to-node path.
    pub fn from_node_path(path: &[String]) -> Self {
        let segment = |index: usize| path.get(index).cloned();
        Self {
            resource_type: segment(0),
            category: segment(1),
            subcategory: segment(2),
            data_type: segment(3),
        }
    }

    pub fn get(&self, field: FieldPath) -> Option<&str> {
        match field {
            FieldPath::ResourceType => self.resource_type.as_deref(),
            FieldPath::Category => self.category.as_deref(),
            FieldPath::Subcategory => self.subcategory.as_deref(),
            FieldPath::DataType => self.data_type.as_deref(),
            FieldPath::Level5 => None,
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        Self::FILTER_FIELDS.iter().all(|field| self.get(*field).is_none())
    }

    /// Exact, case-sensitive equality on every constrained field.
    pub fn matches(&self, resource: &Resource) -> bool {
        Self::FILTER_FIELDS.iter().all(|field| match self.get(*field) {
            Some(expected) => resource.field(*field) == Some(expected),
            None => true,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterOutcome {
    /// One flag per input resource, same order.
    pub row_visible: Vec<bool>,
    pub visible_count: usize,
}

impl FilterOutcome {
    pub fn is_visible(&self, index: usize) -> bool {
        self.row_visible.get(index).copied().unwrap_or(false)
    }
}

pub fn apply_hierarchy_filter(resources: &[Resource], filter: Option<&HierarchyPath>) -> FilterOutcome {
    let row_visible: Vec<bool> = match filter {
        None => vec![true; resources.len()],
        Some(filter) => resources.iter().map(|resource| filter.matches(resource)).collect(),
    };
    let visible_count = row_visible.iter().filter(|visible| **visible).count();
    FilterOutcome { row_visible, visible_count }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(resource_type: &str, category: &str, subcategory: Option<&str>) -> Resource {
        Resource {
            resource_type: Some(resource_type.to_string()),
            category: Some(category.to_string()),
            subcategory: subcategory.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn no_filter_shows_everything() {
        let resources = vec![resource("A", "x", None), Resource::default()];
        let outcome = apply_hierarchy_filter(&resources, None);
        assert_eq!(outcome.row_visible, vec![true, true]);
        assert_eq!(outcome.visible_count, 2);
    }

    #[test]
    fn every_set_field_must_match_exactly() {
        let resources = vec![
            resource("Datasets", "Human", Some("Clinical")),
            resource("Datasets", "Human", Some("clinical")),
            resource("Datasets", "Animal", Some("Clinical")),
            resource("Tools", "Human", Some("Clinical")),
        ];
        let filter = HierarchyPath {
            resource_type: Some("Datasets".to_string()),
            category: Some("Human".to_string()),
            subcategory: Some("Clinical".to_string()),
            ..Default::default()
        };
        let outcome = apply_hierarchy_filter(&resources, Some(&filter));
        assert_eq!(outcome.row_visible, vec![true, false, false, false]);
        assert_eq!(outcome.visible_count, 1);
    }

    #[test]
    fn missing_resource_field_does_not_match() {
        let filter = HierarchyPath { subcategory: Some("Clinical".to_string()), ..Default::default() };
        assert!(!filter.matches(&resource("Datasets", "Human", None)));
    }

    #[test]
    fn node_path_keeps_four_levels() {
        let path: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        let filter = HierarchyPath::from_node_path(&path);
        assert_eq!(filter.data_type.as_deref(), Some("d"));
        assert_eq!(filter.get(FieldPath::Level5), None);
        assert!(HierarchyPath::from_node_path(&[]).is_unconstrained());
    }
}

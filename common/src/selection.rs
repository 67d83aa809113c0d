//! Active filters: multi-select flat categories plus at most one hierarchy pick.

use serde::{Deserialize, Serialize};

use crate::catalog_api::FilterResourcesRequest;
use crate::result_filter::HierarchyPath;

/// Flat categories backed by checkboxes and sent to the server query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FlatCategory {
    Country,
    Domain,
    ResourceType,
}

impl FlatCategory {
    pub const ALL: [FlatCategory; 3] = [FlatCategory::Country, FlatCategory::Domain, FlatCategory::ResourceType];

    pub fn display_name(self) -> &'static str {
        match self {
            FlatCategory::Country => "Country",
            FlatCategory::Domain => "Domain",
            FlatCategory::ResourceType => "Resource type",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SelectionKind {
    Flat(FlatCategory),
    Hierarchy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEntry {
    pub kind: SelectionKind,
    pub value: String,
    /// Hierarchy level of the node, 0 for flat entries.
    pub level: u8,
    pub path: HierarchyPath,
}

impl SelectionEntry {
    pub fn hierarchy(value: impl Into<String>, level: u8, path: HierarchyPath) -> Self {
        Self { kind: SelectionKind::Hierarchy, value: value.into(), level, path }
    }

    pub fn tag(&self) -> ActiveFilterTag {
        ActiveFilterTag { kind: self.kind, value: self.value.clone() }
    }
}

/// Removable chip shown for every active filter; unique per `(kind, value)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActiveFilterTag {
    pub kind: SelectionKind,
    pub value: String,
}

impl ActiveFilterTag {
    pub fn label(&self) -> String {
        match self.kind {
            SelectionKind::Flat(category) => format!("{}: {}", category.display_name(), self.value),
            SelectionKind::Hierarchy => format!("Hierarchy: {}", self.value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectionState {
    countries: Vec<String>,
    domains: Vec<String>,
    resource_types: Vec<String>,
    hierarchy: Option<SelectionEntry>,
}

impl SelectionState {
    fn values_mut(&mut self, category: FlatCategory) -> &mut Vec<String> {
        match category {
            FlatCategory::Country => &mut self.countries,
            FlatCategory::Domain => &mut self.domains,
            FlatCategory::ResourceType => &mut self.resource_types,
        }
    }

    pub fn values(&self, category: FlatCategory) -> &[String] {
        match category {
            FlatCategory::Country => &self.countries,
            FlatCategory::Domain => &self.domains,
            FlatCategory::ResourceType => &self.resource_types,
        }
    }

    pub fn contains(&self, category: FlatCategory, value: &str) -> bool {
        self.values(category).iter().any(|v| v == value)
    }

    /// No-op when the value is already selected.
    pub fn add(&mut self, category: FlatCategory, value: &str) {
        if self.contains(category, value) {
            return;
        }
        self.values_mut(category).push(value.to_string());
    }

    /// No-op when the value is not selected.
    pub fn remove(&mut self, category: FlatCategory, value: &str) {
        self.values_mut(category).retain(|v| v != value);
    }

    pub fn toggle(&mut self, category: FlatCategory, value: &str) {
        if self.contains(category, value) {
            self.remove(category, value);
        } else {
            self.add(category, value);
        }
    }

    /// True iff no country, domain or resource type is selected.
    pub fn is_empty(&self) -> bool {
        FlatCategory::ALL.iter().all(|category| self.values(*category).is_empty())
    }

    pub fn explore_enabled(&self) -> bool {
        !self.is_empty()
    }

    /// Replaces any previous hierarchy pick.
    pub fn select_hierarchy(&mut self, entry: SelectionEntry) {
        self.hierarchy = Some(entry);
    }

    pub fn clear_hierarchy(&mut self) {
        self.hierarchy = None;
    }

    pub fn hierarchy(&self) -> Option<&SelectionEntry> {
        self.hierarchy.as_ref()
    }

    pub fn hierarchy_filter(&self) -> Option<&HierarchyPath> {
        self.hierarchy.as_ref().map(|entry| &entry.path)
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Flat tags in selection order, then the hierarchy tag.
    pub fn tags(&self) -> Vec<ActiveFilterTag> {
        let mut tags: Vec<ActiveFilterTag> = Vec::new();
        for category in FlatCategory::ALL {
            for value in self.values(category) {
                let tag = ActiveFilterTag { kind: SelectionKind::Flat(category), value: value.clone() };
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
        if let Some(entry) = &self.hierarchy {
            tags.push(entry.tag());
        }
        tags
    }

    pub fn remove_tag(&mut self, tag: &ActiveFilterTag) {
        match tag.kind {
            SelectionKind::Flat(category) => self.remove(category, &tag.value),
            SelectionKind::Hierarchy => {
                if self.hierarchy.as_ref().map(|entry| entry.value == tag.value).unwrap_or(false) {
                    self.hierarchy = None;
                }
            }
        }
    }

    /// Body for the server-side category query.
    pub fn filter_request(&self) -> FilterResourcesRequest {
        let list = |values: &[String]| if values.is_empty() { None } else { Some(values.to_vec()) };
        FilterResourcesRequest {
            countries: list(&self.countries),
            domains: list(&self.domains),
            resource_types: list(&self.resource_types),
        }
    }

    /// Sets the flat selection from a query loaded from the URL; the hierarchy pick is kept.
    pub fn load_flat_filters(&mut self, request: &FilterResourcesRequest) {
        let pairs = [
            (FlatCategory::Country, &request.countries),
            (FlatCategory::Domain, &request.domains),
            (FlatCategory::ResourceType, &request.resource_types),
        ];
        for (category, values) in pairs {
            self.values_mut(category).clear();
            for value in values.iter().flatten() {
                self.add(category, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_is_idempotent() {
        let mut selection = SelectionState::default();
        selection.add(FlatCategory::Country, "Kenya");
        selection.add(FlatCategory::Country, "Kenya");
        let tags = selection.tags();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].label(), "Country: Kenya");
    }

    #[test]
    fn remove_absent_value_is_a_no_op() {
        let mut selection = SelectionState::default();
        selection.add(FlatCategory::Domain, "Human");
        selection.remove(FlatCategory::Domain, "Animal");
        selection.remove(FlatCategory::Country, "Human");
        assert_eq!(selection.values(FlatCategory::Domain), ["Human".to_string()]);
    }

    #[test]
    fn explore_tracks_emptiness() {
        let mut selection = SelectionState::default();
        assert!(selection.is_empty());
        assert!(!selection.explore_enabled());
        selection.toggle(FlatCategory::ResourceType, "Datasets");
        assert!(selection.explore_enabled());
        selection.toggle(FlatCategory::ResourceType, "Datasets");
        assert!(selection.is_empty());
    }

    #[test]
    fn hierarchy_does_not_count_towards_emptiness() {
        let mut selection = SelectionState::default();
        selection.select_hierarchy(SelectionEntry::hierarchy("Human", 2, HierarchyPath::default()));
        assert!(selection.is_empty());
        assert_eq!(selection.tags().len(), 1);
    }

    #[test]
    fn second_hierarchy_pick_replaces_the_first() {
        let mut selection = SelectionState::default();
        selection.select_hierarchy(SelectionEntry::hierarchy("Human", 2, HierarchyPath::default()));
        selection.select_hierarchy(SelectionEntry::hierarchy("Animal", 2, HierarchyPath::default()));
        let hierarchy_tags: Vec<_> = selection.tags().into_iter().filter(|t| t.kind == SelectionKind::Hierarchy).collect();
        assert_eq!(hierarchy_tags.len(), 1);
        assert_eq!(hierarchy_tags[0].value, "Animal");
    }

    #[test]
    fn removing_tags_updates_the_selection() {
        let mut selection = SelectionState::default();
        selection.add(FlatCategory::Country, "Peru");
        selection.select_hierarchy(SelectionEntry::hierarchy("Tools", 1, HierarchyPath::default()));
        for tag in selection.tags() {
            selection.remove_tag(&tag);
        }
        assert!(selection.tags().is_empty());
        assert!(selection.hierarchy().is_none());
    }

    #[test]
    fn filter_request_round_trips_through_load() {
        let mut selection = SelectionState::default();
        selection.add(FlatCategory::Domain, "Environment");
        selection.add(FlatCategory::Country, "Chile");
        let request = selection.filter_request();
        assert_eq!(request.resource_types, None);

        let mut loaded = SelectionState::default();
        loaded.add(FlatCategory::ResourceType, "stale");
        loaded.load_flat_filters(&request);
        assert_eq!(loaded.filter_request(), request);
    }
}

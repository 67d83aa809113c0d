//! Explicit UI state owned by the top-level controller and shared by reference
//! with every component.

use std::collections::BTreeSet;

use crate::chat::ChatTranscript;
use crate::hierarchy::{HierarchyDescriptor, HierarchyTree, NodePath};
use crate::resource::Resource;
use crate::resource_detail::DetailState;
use crate::result_filter::HierarchyPath;
use crate::results_table::{ResultsView, SortColumn, SortState};
use crate::selection::{ActiveFilterTag, FlatCategory, SelectionEntry, SelectionState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    pub selection: SelectionState,
    /// Current server-filtered result list.
    pub resources: Vec<Resource>,
    pub descriptor: HierarchyDescriptor,
    pub tree: HierarchyTree,
    /// Expansion is tracked apart from selection; everything starts collapsed.
    pub expanded: BTreeSet<NodePath>,
    pub sort: SortState,
    pub detail: DetailState,
    pub chat: ChatTranscript,
    /// Resource ids passed to the chat as context.
    pub chat_context: BTreeSet<String>,
}

impl UiState {
    /// New result set: the tree is rebuilt from scratch.
    pub fn replace_results(&mut self, resources: Vec<Resource>) {
        self.resources = resources;
        self.rebuild_tree();
    }

    pub fn set_descriptor(&mut self, descriptor: HierarchyDescriptor) {
        self.descriptor = descriptor;
        self.rebuild_tree();
    }

    fn rebuild_tree(&mut self) {
        self.tree = HierarchyTree::build(&self.descriptor, &self.resources);
    }

    /// Hierarchy click: the node becomes the only hierarchy selection.
    /// Returns false when the path is not in the tree.
    pub fn select_node(&mut self, path: &[String]) -> bool {
        let Some(node) = self.tree.find(path) else { return false };
        let entry = SelectionEntry::hierarchy(node.name(), node.level(), HierarchyPath::from_node_path(node.path()));
        self.selection.select_hierarchy(entry);
        true
    }

    pub fn is_node_selected(&self, path: &[String]) -> bool {
        let Some(entry) = self.selection.hierarchy() else { return false };
        path.last().map(|name| name == &entry.value).unwrap_or(false)
            && entry.path == HierarchyPath::from_node_path(path)
            && usize::from(entry.level) == path.len()
    }

    pub fn toggle_expanded(&mut self, path: &[String]) {
        if !self.expanded.remove(path) {
            self.expanded.insert(path.to_vec());
        }
    }

    pub fn is_expanded(&self, path: &[String]) -> bool {
        self.expanded.contains(path)
    }

    pub fn toggle_flat(&mut self, category: FlatCategory, value: &str) {
        self.selection.toggle(category, value);
    }

    pub fn remove_tag(&mut self, tag: &ActiveFilterTag) {
        self.selection.remove_tag(tag);
    }

    pub fn clear_filters(&mut self) {
        self.selection.clear_all();
    }

    pub fn click_sort(&mut self, column: SortColumn) {
        self.sort.click(column);
    }

    pub fn results_view(&self) -> ResultsView {
        ResultsView::build(&self.resources, self.selection.hierarchy_filter(), &self.sort)
    }

    pub fn toggle_chat_context(&mut self, id: &str) {
        if !self.chat_context.remove(id) {
            self.chat_context.insert(id.to_string());
        }
    }

    pub fn chat_context_ids(&self) -> Vec<String> {
        self.chat_context.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state() -> UiState {
        let descriptor: HierarchyDescriptor = serde_json::from_value(json!({
            "Datasets": {"level": 1, "sub_categories": {"Human": {"level": 2}, "Animal": {"level": 2}}},
            "Tools": {"level": 1}
        }))
        .expect("descriptor");
        let resources: Vec<Resource> = serde_json::from_value(json!([
            {"data_source_id": "1", "resource_type": "Datasets", "category": "Human"},
            {"data_source_id": "2", "resource_type": "Datasets", "category": "Animal"},
            {"data_source_id": "3", "resource_type": "Tools"}
        ]))
        .expect("resources");
        let mut state = UiState::default();
        state.set_descriptor(descriptor);
        state.replace_results(resources);
        state
    }

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn hierarchy_click_keeps_a_single_selection() {
        let mut state = state();
        assert!(state.select_node(&path(&["Datasets", "Human"])));
        assert!(state.select_node(&path(&["Datasets", "Animal"])));
        let view = state.results_view();
        assert_eq!(view.visible_count, 1);
        assert!(state.is_node_selected(&path(&["Datasets", "Animal"])));
        assert!(!state.is_node_selected(&path(&["Datasets", "Human"])));
        assert!(!state.select_node(&path(&["Nope"])));
    }

    #[test]
    fn new_results_rebuild_counts() {
        let mut state = state();
        assert_eq!(state.tree.find(&path(&["Datasets"])).map(|n| n.count()), Some(2));
        state.replace_results(Vec::new());
        assert_eq!(state.tree.find(&path(&["Datasets"])).map(|n| n.count()), Some(0));
        assert!(state.results_view().empty_message().is_some());
    }

    #[test]
    fn expansion_is_independent_of_selection() {
        let mut state = state();
        let datasets = path(&["Datasets"]);
        assert!(!state.is_expanded(&datasets));
        state.toggle_expanded(&datasets);
        assert!(state.is_expanded(&datasets));
        assert!(state.selection.hierarchy().is_none());
        state.toggle_expanded(&datasets);
        assert!(!state.is_expanded(&datasets));
    }

    #[test]
    fn chat_context_toggles() {
        let mut state = state();
        state.toggle_chat_context("2");
        state.toggle_chat_context("1");
        assert_eq!(state.chat_context_ids(), vec!["1", "2"]);
        state.toggle_chat_context("2");
        assert_eq!(state.chat_context_ids(), vec!["1"]);
    }
}

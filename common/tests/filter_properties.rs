use common::resource::Resource;
use common::result_filter::{HierarchyPath, apply_hierarchy_filter};
use common::selection::{FlatCategory, SelectionEntry, SelectionState};
use proptest::prelude::*;

fn field() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(prop_oneof![Just("Human".to_string()), Just("human".to_string()), Just("Animal".to_string()), ".{0,6}"])
}

prop_compose! {
    fn resource()(resource_type in field(), category in field(), subcategory in field(), data_type in field()) -> Resource {
        Resource { resource_type, category, subcategory, data_type, ..Default::default() }
    }
}

proptest! {
    #[test]
    fn category_only_filter_matches_on_category_alone(
        resources in proptest::collection::vec(resource(), 0..40),
        category in prop_oneof![Just("Human".to_string()), ".{0,6}"],
    ) {
        let filter = HierarchyPath { category: Some(category.clone()), ..Default::default() };
        let outcome = apply_hierarchy_filter(&resources, Some(&filter));
        for (resource, visible) in resources.iter().zip(&outcome.row_visible) {
            prop_assert_eq!(*visible, resource.category.as_deref() == Some(category.as_str()));
        }
        prop_assert_eq!(outcome.visible_count, outcome.row_visible.iter().filter(|v| **v).count());
    }

    #[test]
    fn hierarchy_selection_never_exceeds_one(values in proptest::collection::vec("[a-z]{1,5}", 1..20)) {
        let mut selection = SelectionState::default();
        for (level, value) in values.iter().enumerate() {
            let path = HierarchyPath { resource_type: Some(value.clone()), ..Default::default() };
            selection.select_hierarchy(SelectionEntry::hierarchy(value.clone(), (level % 5) as u8 + 1, path));
            prop_assert!(selection.hierarchy().is_some());
        }
        prop_assert_eq!(selection.hierarchy().map(|e| e.value.clone()), values.last().cloned());
    }

    #[test]
    fn repeated_adds_yield_one_tag_per_pair(values in proptest::collection::vec("[A-Z][a-z]{0,4}", 0..20)) {
        let mut selection = SelectionState::default();
        for value in values.iter().chain(values.iter()) {
            selection.add(FlatCategory::Country, value);
        }
        let mut distinct = values.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(selection.tags().len(), distinct.len());
        prop_assert_eq!(selection.is_empty(), values.is_empty());
    }
}

//! Grouping of results into per-type tables, column sorting, and the
//! combined view the results panel renders.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::resource::{Resource, parse_year};
use crate::result_filter::{FilterOutcome, HierarchyPath, apply_hierarchy_filter};

/// Group name for resources without a resource type.
pub const OTHER_GROUP: &str = "Other";

pub const NO_RESOURCES_MESSAGE: &str = "No resources found matching your filters.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    pub name: String,
    /// Indices into the resource list, in input order.
    pub rows: Vec<usize>,
}

pub fn group_name(resource: &Resource) -> &str {
    resource
        .resource_type
        .as_deref()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(OTHER_GROUP)
}

fn is_system_group(name: &str) -> bool {
    name.to_lowercase().contains("system")
}

/// "system" groups first, then the rest; alphabetical within each band.
pub fn compare_group_names(a: &str, b: &str) -> Ordering {
    is_system_group(b)
        .cmp(&is_system_group(a))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

pub fn group_by_resource_type(resources: &[Resource]) -> Vec<ResourceGroup> {
    let mut groups: Vec<ResourceGroup> = Vec::new();
    for (index, resource) in resources.iter().enumerate() {
        let name = group_name(resource);
        match groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.rows.push(index),
            None => groups.push(ResourceGroup { name: name.to_string(), rows: vec![index] }),
        }
    }
    groups.sort_by(|a, b| compare_group_names(&a.name, &b.name));
    groups
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    Id,
    Name,
    Category,
    Subcategory,
    DataType,
    Countries,
    YearStart,
    YearEnd,
}

impl SortColumn {
    pub const ALL: [SortColumn; 8] = [
        SortColumn::Id,
        SortColumn::Name,
        SortColumn::Category,
        SortColumn::Subcategory,
        SortColumn::DataType,
        SortColumn::Countries,
        SortColumn::YearStart,
        SortColumn::YearEnd,
    ];

    pub fn header(self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Name => "Name",
            SortColumn::Category => "Category",
            SortColumn::Subcategory => "Subcategory",
            SortColumn::DataType => "Data type",
            SortColumn::Countries => "Countries",
            SortColumn::YearStart => "Start",
            SortColumn::YearEnd => "End",
        }
    }

    /// Text shown in the cell; also the sort key for textual columns.
    pub fn cell_text(self, resource: &Resource) -> String {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        match self {
            SortColumn::Id => resource.id().unwrap_or_default().to_string(),
            SortColumn::Name => resource.title(),
            SortColumn::Category => text(&resource.category),
            SortColumn::Subcategory => text(&resource.subcategory),
            SortColumn::DataType => text(&resource.data_type),
            SortColumn::Countries => resource.countries_list.join(", "),
            SortColumn::YearStart => text(&resource.year_start),
            SortColumn::YearEnd => text(&resource.year_end),
        }
    }

    pub fn compare(self, a: &Resource, b: &Resource) -> Ordering {
        match self {
            SortColumn::YearEnd => parse_year(a.year_end.as_deref()).cmp(&parse_year(b.year_end.as_deref())),
            _ => self.cell_text(a).to_lowercase().cmp(&self.cell_text(b).to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Only one header carries a sort indicator at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub active: Option<(SortColumn, SortDirection)>,
}

impl SortState {
    /// First click on a column sorts descending, later clicks toggle.
    pub fn click(&mut self, column: SortColumn) {
        let direction = match self.active {
            Some((current, direction)) if current == column => direction.flipped(),
            _ => SortDirection::Descending,
        };
        self.active = Some((column, direction));
    }

    pub fn direction_of(&self, column: SortColumn) -> Option<SortDirection> {
        match self.active {
            Some((current, direction)) if current == column => Some(direction),
            _ => None,
        }
    }
}

/// Stable sort of row indices.
pub fn sort_rows(rows: &mut [usize], resources: &[Resource], column: SortColumn, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = column.compare(&resources[*a], &resources[*b]);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub index: usize,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSection {
    pub name: String,
    pub rows: Vec<ResultRow>,
    pub visible_count: usize,
}

impl ResultSection {
    /// Sections with no visible row are hidden entirely.
    pub fn is_visible(&self) -> bool {
        self.visible_count > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultsView {
    pub sections: Vec<ResultSection>,
    pub total_count: usize,
    pub visible_count: usize,
}

impl ResultsView {
    pub fn build(resources: &[Resource], filter: Option<&HierarchyPath>, sort: &SortState) -> Self {
        let FilterOutcome { row_visible, visible_count } = apply_hierarchy_filter(resources, filter);
        let sections = group_by_resource_type(resources)
            .into_iter()
            .map(|mut group| {
                if let Some((column, direction)) = sort.active {
                    sort_rows(&mut group.rows, resources, column, direction);
                }
                let rows: Vec<ResultRow> = group
                    .rows
                    .iter()
                    .map(|index| ResultRow { index: *index, visible: row_visible[*index] })
                    .collect();
                let visible_count = rows.iter().filter(|row| row.visible).count();
                ResultSection { name: group.name, rows, visible_count }
            })
            .collect();
        Self { sections, total_count: resources.len(), visible_count }
    }

    /// An empty result list gets a message, never an empty table.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.total_count == 0 { Some(NO_RESOURCES_MESSAGE) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(resource_type: Option<&str>) -> Resource {
        Resource { resource_type: resource_type.map(str::to_string), ..Default::default() }
    }

    fn named(name: &str, year_end: Option<&str>) -> Resource {
        Resource {
            name: Some(name.to_string()),
            year_end: year_end.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn system_groups_come_first() {
        let resources = vec![typed(Some("Systems A")), typed(Some("Archive")), typed(Some("systems B"))];
        let names: Vec<String> = group_by_resource_type(&resources).into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Systems A", "systems B", "Archive"]);
    }

    #[test]
    fn missing_type_goes_to_other() {
        let resources = vec![typed(None), typed(Some("  ")), typed(Some("Datasets"))];
        let groups = group_by_resource_type(&resources);
        assert_eq!(groups[0].name, "Datasets");
        assert_eq!(groups[1].name, OTHER_GROUP);
        assert_eq!(groups[1].rows, vec![0, 1]);
    }

    #[test]
    fn first_click_sorts_descending_then_toggles() {
        let mut sort = SortState::default();
        sort.click(SortColumn::Name);
        assert_eq!(sort.direction_of(SortColumn::Name), Some(SortDirection::Descending));
        sort.click(SortColumn::Name);
        assert_eq!(sort.direction_of(SortColumn::Name), Some(SortDirection::Ascending));
        sort.click(SortColumn::YearEnd);
        assert_eq!(sort.direction_of(SortColumn::Name), None);
        assert_eq!(sort.direction_of(SortColumn::YearEnd), Some(SortDirection::Descending));
    }

    #[test]
    fn second_click_reverses_the_row_order() {
        let resources = vec![named("beta", None), named("Alpha", None), named("gamma", None)];
        let mut sort = SortState::default();

        sort.click(SortColumn::Name);
        let first = ResultsView::build(&resources, None, &sort);
        let first: Vec<usize> = first.sections[0].rows.iter().map(|r| r.index).collect();
        assert_eq!(first, vec![2, 0, 1]);

        sort.click(SortColumn::Name);
        let second = ResultsView::build(&resources, None, &sort);
        let mut second: Vec<usize> = second.sections[0].rows.iter().map(|r| r.index).collect();
        assert_eq!(second, vec![1, 0, 2]);
        second.reverse();
        assert_eq!(second, first);
    }

    #[test]
    fn year_end_sorts_numerically() {
        let resources = vec![named("a", Some("2020")), named("b", Some("unknown")), named("c", Some("999")), named("d", None)];
        let mut rows = vec![0, 1, 2, 3];
        sort_rows(&mut rows, &resources, SortColumn::YearEnd, SortDirection::Ascending);
        assert_eq!(rows, vec![1, 3, 2, 0]);
    }

    #[test]
    fn sections_without_visible_rows_are_hidden() {
        let resources = vec![typed(Some("Tools")), typed(Some("Datasets"))];
        let filter = HierarchyPath { resource_type: Some("Tools".to_string()), ..Default::default() };
        let view = ResultsView::build(&resources, Some(&filter), &SortState::default());
        let datasets = view.sections.iter().find(|s| s.name == "Datasets").expect("section");
        let tools = view.sections.iter().find(|s| s.name == "Tools").expect("section");
        assert!(!datasets.is_visible());
        assert!(tools.is_visible());
        assert_eq!(view.visible_count, 1);
    }

    #[test]
    fn empty_results_render_a_message() {
        let view = ResultsView::build(&[], None, &SortState::default());
        assert!(view.sections.is_empty());
        assert_eq!(view.empty_message(), Some(NO_RESOURCES_MESSAGE));
    }
}

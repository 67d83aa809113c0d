//! Result sets grouped by resource type, one sortable table per group.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdInfo;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

use common::resource::Resource;
use common::results_table::{ResultSection, SortColumn};

use crate::data_definitions::ui_state_control::use_ui_state;

#[component]
pub fn ResultsTables() -> Element {
    let state = use_ui_state().state;
    let view = use_memo(move || state.read().results_view());

    if let Some(message) = view.read().empty_message() {
        return rsx! {
            div {
                id: "x-results-empty",
                style: "padding: 30px; font-size: 18px; color: #6B7280; text-align: center;",
                "{message}"
            }
        };
    }

    let total = view.read().total_count;
    let visible = view.read().visible_count;
    rsx! {
        div {
            id: "x-results-tables",
            style: "display:flex; flex-direction: column; gap: 22px;",
            div {
                style: "font-size: 14px; color: #374151;",
                "Showing {visible} of {total} resources"
            }
            for section in view.read().sections.iter().cloned() {
                ResultSectionTable {
                    key: "{section.name}",
                    section,
                }
            }
        }
    }
}

#[component]
fn ResultSectionTable(section: ReadSignal<ResultSection>) -> Element {
    let state = use_ui_state().state;
    let current = section.read().clone();
    // sections without visible rows stay in the tree but are hidden
    let display = if current.is_visible() { "block" } else { "none" };
    let rows: Vec<(usize, bool, Resource)> = {
        let state = state.read();
        current
            .rows
            .iter()
            .filter_map(|row| state.resources.get(row.index).map(|r| (row.index, row.visible, r.clone())))
            .collect()
    };

    rsx! {
        div {
            class: "x-result-section",
            "data-resource-type": "{current.name}",
            style: "display: {display};",
            h3 {
                style: "font-size: 18px; font-weight: 600; margin: 0px 0px 8px 0px;",
                "{current.name} ({current.visible_count})"
            }
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px; background: white;",
                thead {
                    tr {
                        th { style: "width: 32px; border-bottom: 2px solid #D1D5DB;", title: "Chat context" }
                        for column in SortColumn::ALL {
                            SortableHeader { key: "{column.header()}", column }
                        }
                        th { style: "width: 40px; border-bottom: 2px solid #D1D5DB;" }
                    }
                }
                tbody {
                    for (index, visible, resource) in rows {
                        ResultTableRow {
                            key: "{index}",
                            resource,
                            visible,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SortableHeader(column: SortColumn) -> Element {
    let mut state = use_ui_state().state;
    let indicator = use_memo(move || {
        state.read().sort.direction_of(column).map(|d| d.indicator()).unwrap_or_default()
    });

    rsx! {
        th {
            style: "
                text-align: left;
                padding: 6px 8px;
                border-bottom: 2px solid #D1D5DB;
                cursor: pointer;
                user-select: none;
                white-space: nowrap;
            ",
            onclick: move |_| state.write().click_sort(column),
            "{column.header()} {indicator}"
        }
    }
}

#[component]
fn ResultTableRow(resource: ReadSignal<Resource>, visible: bool) -> Element {
    let control = use_ui_state();
    let mut state = control.state;
    let open_detail = control.open_detail;
    let id = use_memo(move || resource.read().id().map(str::to_string));
    let in_context = use_memo(move || {
        id.read().as_ref().map(|id| state.read().chat_context.contains(id)).unwrap_or(false)
    });
    let display = if visible { "table-row" } else { "none" };
    let id_attr = id.read().clone().unwrap_or_default();

    rsx! {
        tr {
            class: "x-result-row",
            "data-resource-id": "{id_attr}",
            style: "display: {display}; border-bottom: 1px solid #E5E7EB;",
            td {
                style: "padding: 6px 8px; cursor: pointer;",
                title: "Use as chat context",
                onclick: move |_| {
                    if let Some(id) = id.read().clone() {
                        state.write().toggle_chat_context(&id);
                    }
                },
                if in_context() {
                    Icon { icon: MdCheckBox, style: "width: 18px; height: 18px; color: rgb(28, 33, 45);" }
                } else {
                    Icon { icon: MdCheckBoxOutlineBlank, style: "width: 18px; height: 18px;" }
                }
            }
            for column in SortColumn::ALL {
                td {
                    key: "{column.header()}",
                    style: "padding: 6px 8px; vertical-align: top;",
                    "{column.cell_text(&resource.read())}"
                }
            }
            td {
                style: "padding: 6px 8px;",
                if let Some(id) = id.read().clone() {
                    button {
                        title: "Show details",
                        style: "border: none; background: transparent; cursor: pointer; display:flex;",
                        onclick: move |_| open_detail(id.clone()),
                        Icon { icon: MdInfo, style: "width: 18px; height: 18px; color: #4F46E5;" }
                    }
                }
            }
        }
    }
}

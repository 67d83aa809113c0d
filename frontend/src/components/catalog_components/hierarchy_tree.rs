//! Clickable classification tree with live counts.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::{MdChevronRight, MdExpandMore};

use common::hierarchy::DisplayNode;

use crate::data_definitions::ui_state_control::use_ui_state;

#[component]
pub fn HierarchyTreeView() -> Element {
    let state = use_ui_state().state;
    let roots = use_memo(move || state.read().tree.roots.clone());

    rsx! {
        div {
            id: "x-hierarchy-tree",
            style: "display:flex; flex-direction: column; font-size: 14px;",
            if roots.read().is_empty() {
                div { style: "color: #6B7280; font-size: 13px;", "No hierarchy available" }
            }
            for node in roots.read().iter().cloned() {
                HierarchyNodeView {
                    key: "{node.path().join(\"/\")}",
                    node,
                }
            }
        }
    }
}

#[component]
fn HierarchyNodeView(node: ReadSignal<DisplayNode>) -> Element {
    let mut state = use_ui_state().state;
    let is_expanded = use_memo(move || state.read().is_expanded(node.read().path()));
    let is_selected = use_memo(move || state.read().is_node_selected(node.read().path()));
    let current = node.read().clone();
    let label = current.label().to_string();
    let count = current.count();
    let indent = (usize::from(current.level()).saturating_sub(1)) * 14;
    let background = if is_selected() { "#E0E7FF" } else { "transparent" };
    let font_weight = if is_selected() { 600 } else { 400 };
    let toggle_title = if is_expanded() { "Collapse" } else { "Expand" };

    rsx! {
        div {
            class: "x-hierarchy-node",
            "data-level": "{current.level()}",
            style: "
                display:flex;
                flex-direction: row;
                align-items: center;
                gap: 4px;
                padding: 2px 4px 2px {indent}px;
                border-radius: 4px;
                background: {background};
            ",
            if current.is_expandable() {
                button {
                    title: "{toggle_title}",
                    style: "border: none; background: transparent; cursor: pointer; padding: 0px; display:flex;",
                    onclick: move |_| {
                        let path = node.read().path().clone();
                        state.write().toggle_expanded(&path);
                    },
                    if is_expanded() {
                        Icon { icon: MdExpandMore, style: "width: 18px; height: 18px;" }
                    } else {
                        Icon { icon: MdChevronRight, style: "width: 18px; height: 18px;" }
                    }
                }
            } else {
                span { style: "width: 18px; flex-shrink: 0;" }
            }
            span {
                style: "cursor: pointer; font-weight: {font_weight}; flex: 1 1 auto; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                title: "{current.field().display_name()}: {label}",
                onclick: move |_| {
                    let path = node.read().path().clone();
                    if !state.write().select_node(&path) {
                        tracing::warn!("hierarchy node {:?} is no longer in the tree", path);
                    }
                },
                "{label}"
            }
            span {
                class: "x-hierarchy-count",
                style: "font-size: 12px; color: #374151; background: #F3F4F6; border-radius: 1000px; padding: 0px 8px;",
                "{count}"
            }
        }
        if current.is_expandable() && is_expanded() {
            for child in current.children().iter().cloned() {
                HierarchyNodeView {
                    key: "{child.path().join(\"/\")}",
                    node: child,
                }
            }
        }
    }
}

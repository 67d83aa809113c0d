use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use common::selection::{ActiveFilterTag, SelectionKind};

use crate::data_definitions::ui_state_control::use_ui_state;

/// Removable chips for every active filter. Removing a flat tag calls
/// `on_flat_removed` so the page can re-query; hierarchy tags filter locally.
#[component]
pub fn ActiveFilterTags(on_flat_removed: Callback<()>) -> Element {
    let state = use_ui_state().state;
    let tags = use_memo(move || state.read().selection.tags());

    rsx! {
        div {
            id: "x-active-filter-tags",
            style: "display:flex; flex-direction: row; flex-wrap: wrap; gap: 8px; min-height: 30px; align-items: center;",
            if tags.read().is_empty() {
                span { style: "font-size: 13px; color: #6B7280;", "No active filters" }
            }
            for tag in tags.read().iter().cloned() {
                FilterTagChip {
                    key: "{tag.label()}",
                    tag,
                    on_flat_removed,
                }
            }
        }
    }
}

#[component]
fn FilterTagChip(tag: ReadSignal<ActiveFilterTag>, on_flat_removed: Callback<()>) -> Element {
    let mut state = use_ui_state().state;
    let label = use_memo(move || tag.read().label());
    let background = if tag.read().kind == SelectionKind::Hierarchy { "#EEF2FF" } else { "#F3F4F6" };

    rsx! {
        span {
            class: "x-filter-tag",
            style: "
                display: inline-flex;
                align-items: center;
                gap: 4px;
                padding: 4px 6px 4px 10px;
                border-radius: 1000px;
                border: 1px solid #D1D5DB;
                background: {background};
                font-size: 13px;
            ",
            "{label}"
            button {
                title: "Remove filter",
                style: "border: none; background: transparent; cursor: pointer; display:flex; padding: 0px;",
                onclick: move |_| {
                    let tag = tag.read().clone();
                    state.write().remove_tag(&tag);
                    if matches!(tag.kind, SelectionKind::Flat(_)) {
                        on_flat_removed(());
                    }
                },
                Icon { icon: MdClose, style: "width: 14px; height: 14px; color: #374151;" }
            }
        }
    }
}

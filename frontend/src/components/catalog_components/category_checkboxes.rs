use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

use common::selection::FlatCategory;

use crate::data_definitions::ui_state_control::use_ui_state;

/// One checkbox per option of a flat category. An empty option list renders
/// an empty group.
#[component]
pub fn CategoryCheckboxes(category: FlatCategory, options: ReadSignal<Vec<String>>, on_change: Callback<()>) -> Element {
    rsx! {
        div {
            class: "x-category-checkboxes",
            style: "display:flex; flex-direction: column; gap: 2px; margin-bottom: 14px;",
            div {
                style: "font-size: 15px; font-weight: 600; color: #1C212D; margin-bottom: 4px;",
                "{category.display_name()}"
            }
            if options.read().is_empty() {
                div { style: "font-size: 13px; color: #6B7280;", "No options available" }
            }
            for option in options.read().iter().cloned() {
                CategoryCheckbox {
                    key: "{option}",
                    category,
                    value: option,
                    on_change,
                }
            }
        }
    }
}

#[component]
fn CategoryCheckbox(category: FlatCategory, value: ReadSignal<String>, on_change: Callback<()>) -> Element {
    let mut state = use_ui_state().state;
    let is_checked = use_memo(move || state.read().selection.contains(category, &value.read()));

    rsx! {
        div {
            class: "x-category-checkbox",
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                cursor: pointer;
                padding: 2px 4px;
                align-items: center;
            ",
            onclick: move |_e| {
                let value = value.read().clone();
                state.write().toggle_flat(category, &value);
                on_change(());
            },

            if is_checked() {
                Icon { icon: MdCheckBox, style: "width: 20px; height: 20px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 20px; height: 20px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 14px;
                    line-height: 20px;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{value}"
            }
        }
    }
}

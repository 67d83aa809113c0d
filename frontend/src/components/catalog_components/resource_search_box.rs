//! Type-ahead search; picking a suggestion opens the detail overlay.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdSearch;

use common::catalog_api::MIN_SEARCH_QUERY_LEN;

use crate::api::catalog_api::search_resources;
use crate::components::error_boundary::InlineErrorMessage;
use crate::data_definitions::ui_state_control::use_ui_state;

#[cfg(target_arch = "wasm32")]
const SEARCH_DEBOUNCE_MS: u32 = 250;

#[component]
pub fn ResourceSearchBox() -> Element {
    let open_detail = use_ui_state().open_detail;
    let mut search_q = use_signal(String::new);

    // a new keystroke restarts the resource, dropping the pending request
    let suggestions = use_resource(move || {
        let q = search_q.read().trim().to_string();
        async move {
            if q.chars().count() < MIN_SEARCH_QUERY_LEN {
                return Ok(Vec::new());
            }
            #[cfg(target_arch = "wasm32")]
            gloo_timers::future::TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            search_resources(q).await
        }
    });

    rsx! {
        div {
            id: "x-resource-search-box",
            style: "position: relative; width: 100%; max-width: 520px;",
            div {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 10px;
                    background-color: white;
                    border: 1px solid #D1D5DB;
                    border-radius: 9999px;
                    padding: 6px 14px;
                    height: 36px;
                    color: #111827;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
                input {
                    r#type: "text",
                    placeholder: "Search resources",
                    value: "{search_q}",
                    style: "
                        flex:1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 14px;
                    ",
                    oninput: move |e| {
                        *search_q.write() = e.value();
                    },
                }
            }
            match &*suggestions.read() {
                Some(Ok(items)) if !items.is_empty() => rsx! {
                    ul {
                        style: "
                            position: absolute;
                            top: 44px;
                            left: 0px;
                            right: 0px;
                            margin: 0px;
                            padding: 4px 0px;
                            list-style: none;
                            background: white;
                            border: 1px solid #D1D5DB;
                            border-radius: 10px;
                            box-shadow: 0 6px 16px rgba(0,0,0,0.08);
                            max-height: 320px;
                            overflow-y: auto;
                            z-index: 900;
                        ",
                        for item in items.iter().cloned() {
                            li {
                                key: "{item.id}-{item.text}",
                                style: "padding: 6px 14px; cursor: pointer; font-size: 14px;",
                                onclick: {
                                    let id = item.id.clone();
                                    move |_| {
                                        search_q.set(String::new());
                                        open_detail(id.clone());
                                    }
                                },
                                "{item.text}"
                            }
                        }
                    }
                },
                Some(Err(e)) => rsx! {
                    InlineErrorMessage { message: format!("Search failed: {e}") }
                },
                _ => rsx! {},
            }
        }
    }
}

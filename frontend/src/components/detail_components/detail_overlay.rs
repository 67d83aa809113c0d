use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use common::resource_detail::DetailState;

use crate::components::detail_components::resource_detail_body::ResourceDetailBody;
use crate::components::error_boundary::InlineErrorMessage;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::ui_state_control::use_ui_state;

/// Modal over the current page, driven by `UiState::detail`.
#[component]
pub fn DetailOverlay() -> Element {
    let mut state = use_ui_state().state;
    let detail = use_memo(move || state.read().detail.clone());

    if !detail.read().is_open() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-detail-overlay-backdrop",
            style: "
                position: fixed;
                top: 0px;
                left: 0px;
                width: 100vw;
                height: 100vh;
                background-color: rgba(0,0,0,0.35);
                z-index: 2000;
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            onclick: move |_| state.write().detail.close(),
            div {
                id: "x-detail-overlay",
                style: "
                    position: relative;
                    background: white;
                    border-radius: 14px;
                    width: min(860px, calc(100vw - 60px));
                    max-height: calc(100vh - 80px);
                    overflow-y: auto;
                    padding: 24px 28px;
                    box-shadow: 0 12px 32px rgba(0,0,0,0.2);
                ",
                onclick: move |e| e.stop_propagation(),
                button {
                    title: "Close",
                    style: "position: absolute; top: 12px; right: 12px; border: none; background: transparent; cursor: pointer;",
                    onclick: move |_| state.write().detail.close(),
                    Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                }
                match detail.read().clone() {
                    DetailState::Closed => rsx! {},
                    DetailState::Loading { .. } => rsx! { LoadingIndicator {} },
                    DetailState::Failed { id, message } => rsx! {
                        h2 { style: "margin-top: 0px;", "Resource {id}" }
                        InlineErrorMessage { message: format!("Could not load resource details: {message}") }
                    },
                    DetailState::Loaded(view) => rsx! { ResourceDetailBody { view } },
                }
            }
        }
    }
}

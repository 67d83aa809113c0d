use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdExplore;
use dioxus_free_icons::icons::md_communication_icons::MdChat;
use dioxus_free_icons::icons::md_social_icons::MdShare;
use dioxus_free_icons::Icon;

use crate::components::catalog_components::active_filter_tags::ActiveFilterTags;
use crate::components::catalog_components::filter_options_panel::FilterOptionsPanel;
use crate::components::catalog_components::resource_search_box::ResourceSearchBox;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::ui_state_control::use_ui_state;
use crate::routes::Route;


/// Home page: pick flat filters, then explore the matching resources.
#[component]
pub fn HomePage() -> Element {
    // flat filters only re-query from the catalog page
    let noop = use_callback(|_: ()| {});
    rsx! {
        Title { "Resource Catalog - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow: auto;
            ",

            MainTitle {}
            ResourceSearchBox {}

            // Cards Row
            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                div {
                    id: "x-card-filters",
                    style: "
                        display:flex;
                        flex-direction: column;
                        gap: 14px;
                        width: 520px;
                        border-radius: 22px;
                        padding: 22px;
                        background: white;
                        border: 1px solid #E5E7EB;
                        box-shadow: 0 6px 16px rgba(0,0,0,0.06);
                    ",
                    div { style: "font-size: 26px; font-weight: 500;", "Filter the catalog" }
                    SuspendWrapper {
                        FilterOptionsPanel { on_change: noop }
                    }
                    ActiveFilterTags { on_flat_removed: noop }
                    ExploreButton {}
                }
                div {
                    style: "display:flex; flex-direction: column; gap: 20px;",
                    LinkCard {
                        to: Route::ChatPage {},
                        title: "Ask the catalog",
                        text: "Chat with an assistant about the resources. Tick resources in the result tables to give it context.",
                        background: "linear-gradient(135deg, #0B7A2B 0%, #23A340 60%, #178E35 100%)",
                        Icon { icon: MdChat, style: "width: 24px; height: 24px;" }
                    }
                    LinkCard {
                        to: Route::NetworkPage {},
                        title: "Relationship network",
                        text: "See how systems, datasets and tools connect to each other.",
                        background: "linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%)",
                        Icon { icon: MdShare, style: "width: 24px; height: 24px;" }
                    }
                }
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            span { "Resource" }
            span { style: "color:#4F46E5;", "Catalog" }
        }
    }
}

/// Enabled only while at least one flat filter is selected.
#[component]
fn ExploreButton() -> Element {
    let state = use_ui_state().state;
    let n2 = navigator();
    let enabled = use_memo(move || state.read().selection.explore_enabled());
    let (background, cursor) = if enabled() { ("#4F46E5", "pointer") } else { ("#9CA3AF", "not-allowed") };

    rsx! {
        button {
            id: "x-explore-button",
            disabled: !enabled(),
            style: "
                display:flex;
                align-items:center;
                justify-content:center;
                gap: 8px;
                height: 40px;
                border-radius: 10px;
                border: none;
                background: {background};
                color: white;
                font-size: 16px;
                cursor: {cursor};
            ",
            onclick: move |_| {
                if !enabled() {
                    return;
                }
                let request = state.read().selection.filter_request();
                n2.push(Route::catalog_page_from_query(request));
            },
            Icon { icon: MdExplore, style: "width: 20px; height: 20px;" }
            "Explore resources"
        }
    }
}

#[component]
fn LinkCard(to: Route, title: String, text: String, background: String, children: Element) -> Element {
    rsx! {
        Link {
            to,
            div {
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 12px;
                    width: 420px;
                    border-radius: 22px;
                    padding: 22px;
                    background: {background};
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                ",
                div {
                    style: "display:flex; align-items:center; gap: 10px; font-size: 24px; font-weight: 500;",
                    {children}
                    "{title}"
                }
                div { style: "font-size: 17px; line-height: 1.5; color: rgba(255,255,255,0.94);", "{text}" }
            }
        }
    }
}

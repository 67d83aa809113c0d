//! Catalog page: filter sidebar and hierarchy tree on the left, grouped result
//! tables on the right. The flat filters live in the URL; the hierarchy pick
//! filters the loaded rows locally.

use dioxus::logger::tracing;
use dioxus::prelude::*;

use common::catalog_api::FilterResourcesRequest;

use crate::api::catalog_api::filter_resources;
use crate::components::catalog_components::active_filter_tags::ActiveFilterTags;
use crate::components::catalog_components::filter_options_panel::FilterOptionsPanel;
use crate::components::catalog_components::hierarchy_tree::HierarchyTreeView;
use crate::components::catalog_components::resource_search_box::ResourceSearchBox;
use crate::components::catalog_components::results_tables::ResultsTables;
use crate::components::error_boundary::{ComponentErrorBoundary, ComponentErrorDisplay};
use crate::components::suspend_boundary::{LoadingIndicator, SuspendWrapper};
use crate::data_definitions::ui_state_control::{ResultsLoad, use_ui_state};
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;

#[component]
pub fn CatalogPage(query: UrlParam<FilterResourcesRequest>) -> Element {
    rsx! {
        Title { "Resource Catalog - Explore" }
        CatalogPageRootComponent { query: query.0.clone() }
    }
}

#[component]
fn CatalogPageRootComponent(query: ReadSignal<FilterResourcesRequest>) -> Element {
    let mut state = use_ui_state().state;

    // the URL is the source of truth for the flat filters
    use_effect(move || {
        let q = query.read().clone();
        state.write().selection.load_flat_filters(&q);
    });

    let mut results = use_resource(move || {
        let q = query.read().clone();
        filter_resources(q)
    });
    // when the query changes, drop the old rows and fetch again
    use_effect(move || {
        let _ = query.read();
        results.clear();
        results.restart();
    });
    use_effect(move || {
        if let Some(Ok(resources)) = &*results.read() {
            tracing::info!("loaded {} resources", resources.len());
            state.write().replace_results(resources.clone());
        }
    });
    let load = use_memo(move || match &*results.read() {
        None => ResultsLoad::Loading,
        Some(Ok(_)) => ResultsLoad::Ready,
        Some(Err(e)) => ResultsLoad::Failed(e.to_string()),
    });

    // checkbox and tag changes become a new query
    let requery = use_callback(move |_: ()| {
        let request = state.read().selection.filter_request();
        if request != *query.peek() {
            navigator().push(Route::catalog_page_from_query(request));
        }
    });
    let clear_filters = move |_: Event<MouseData>| {
        state.write().clear_filters();
        navigator().push(Route::catalog_page_from_query(FilterResourcesRequest::default()));
    };

    rsx! {
        div {
            id: "x-catalog-container",
            style: "
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
                background: #F5F6F8;
            ",

            div {
                id: "x-catalog-sidebar",
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 12px;
                    width: 320px;
                    flex-shrink: 0;
                    height: 100%;
                    overflow-y: auto;
                    padding: 18px;
                    box-sizing: border-box;
                    background: white;
                    border-right: 1px solid #E5E7EB;
                ",
                SuspendWrapper {
                    FilterOptionsPanel { on_change: requery }
                }
                div { style: "font-size: 15px; font-weight: 600; color: #1C212D;", "Hierarchy" }
                ComponentErrorBoundary {
                    HierarchyTreeView {}
                }
            }

            div {
                id: "x-catalog-main",
                style: "
                    display:flex;
                    flex-direction: column;
                    gap: 14px;
                    flex-grow: 1;
                    min-width: 0px;
                    height: 100%;
                    overflow-y: auto;
                    padding: 18px 24px;
                    box-sizing: border-box;
                ",
                div {
                    style: "display:flex; flex-direction: row; gap: 12px; align-items: center;",
                    ResourceSearchBox {}
                    button {
                        id: "x-clear-filters",
                        style: "
                            height: 34px;
                            padding: 0 12px;
                            font-size: 14px;
                            border-radius: 8px;
                            background: white;
                            color: #111827;
                            border: 1px solid #D1D5DB;
                            cursor: pointer;
                            flex-shrink: 0;
                        ",
                        onclick: clear_filters,
                        "Clear filters"
                    }
                }
                ActiveFilterTags { on_flat_removed: requery }
                match load() {
                    ResultsLoad::Loading => rsx! { LoadingIndicator {} },
                    ResultsLoad::Failed(e) => rsx! { ComponentErrorDisplay { error_txt: e } },
                    ResultsLoad::Ready => rsx! {
                        ComponentErrorBoundary { ResultsTables {} }
                    },
                }
            }
        }
    }
}

//! Sidebar navigation and the page layout around the router outlet.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdExplore, MdHome};
use dioxus_free_icons::icons::md_communication_icons::MdChat;
use dioxus_free_icons::icons::md_social_icons::MdShare;
use dioxus_free_icons::{Icon, IconShape};

use common::catalog_api::FilterResourcesRequest;

use crate::components::detail_components::detail_overlay::DetailOverlay;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

/// Shared layout: icon sidebar, page outlet and the detail overlay.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id:"x-nav-container",
            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 24px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                    box-sizing: border-box;
                    align-items: center;
                ",
                IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
                IconLink { to: Route::catalog_page_from_query(FilterResourcesRequest::default()), icon: MdExplore, label: "Catalog" }
                IconLink { to: Route::ChatPage {}, icon: MdChat, label: "Chat" }
                IconLink { to: Route::NetworkPage {}, icon: MdShare, label: "Network" }
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px; height: 100%; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }

            DetailOverlay {}
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white; display:flex;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}

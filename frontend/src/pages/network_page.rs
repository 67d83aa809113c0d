use dioxus::prelude::*;

use crate::components::network_components::network_panel::NetworkPanel;
use crate::components::suspend_boundary::SuspendWrapper;

#[component]
pub fn NetworkPage() -> Element {
    rsx! {
        Title { "Resource Catalog - Network" }
        div {
            id: "x-network-page",
            style: "width: 100%; height: 100%; overflow-y: auto; padding: 28px 36px; box-sizing: border-box;",
            div { style: "font-size: 30px; font-weight: 500; color: #0F172A; margin-bottom: 16px;", "Relationship network" }
            SuspendWrapper {
                NetworkPanel {}
            }
        }
    }
}

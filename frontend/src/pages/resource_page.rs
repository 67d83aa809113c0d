use dioxus::prelude::*;

use common::resource_detail::ResourceDetailView;

use crate::api::catalog_api::get_resource;
use crate::components::detail_components::resource_detail_body::ResourceDetailBody;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::SuspendWrapper;

/// Stand-alone, linkable detail page for one resource.
#[component]
pub fn ResourcePage(resource_id: String) -> Element {
    rsx! {
        Title { "Resource Catalog - {resource_id}" }
        div {
            style: "width: 100%; height: 100%; overflow-y: auto; padding: 28px 36px; box-sizing: border-box;",
            SuspendWrapper {
                ResourcePageBody { resource_id }
            }
        }
    }
}

#[component]
fn ResourcePageBody(resource_id: ReadSignal<String>) -> Element {
    let resource = use_resource(move || {
        let id = resource_id.read().clone();
        get_resource(id)
    })
    .suspend()?
    .cloned();

    match resource {
        Err(e) => rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(None) => rsx! { ComponentErrorDisplay { error_txt: format!("Resource {} was not found", resource_id.read()) } },
        Ok(Some(resource)) => rsx! { ResourceDetailBody { view: ResourceDetailView::from_resource(&resource) } },
    }
}

use dioxus::prelude::*;

use common::selection::FlatCategory;

use crate::api::catalog_api::load_filter_options;
use crate::components::catalog_components::category_checkboxes::CategoryCheckboxes;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::data_definitions::ui_state_control::use_ui_state;

/// Checkbox groups for country, domain and resource type. Loading the options
/// also installs the hierarchy descriptor into the shared state.
#[component]
pub fn FilterOptionsPanel(on_change: Callback<()>) -> Element {
    let mut state = use_ui_state().state;
    let options = use_resource(move || async move {
        let options = load_filter_options().await?;
        state.write().set_descriptor(options.hierarchy.clone());
        Ok::<_, ServerFnError>(options)
    })
    .suspend()?
    .cloned();
    let options = match options {
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Ok(o) => o,
    };
    let resource_types = options.resource_types();

    rsx! {
        div {
            id: "x-filter-options-panel",
            style: "display:flex; flex-direction: column;",
            CategoryCheckboxes {
                category: FlatCategory::Country,
                options: options.main_categories.countries.clone(),
                on_change,
            }
            CategoryCheckboxes {
                category: FlatCategory::Domain,
                options: options.main_categories.domains.clone(),
                on_change,
            }
            CategoryCheckboxes {
                category: FlatCategory::ResourceType,
                options: resource_types,
                on_change,
            }
        }
    }
}

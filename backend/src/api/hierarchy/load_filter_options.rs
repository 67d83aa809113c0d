//! Everything the filter sidebar needs, fetched concurrently.

use common::catalog_api::FilterOptions;

use super::{get_main_categories, get_resource_hierarchy};

pub async fn load_filter_options() -> anyhow::Result<FilterOptions> {
    let (main_categories, hierarchy) = futures::try_join!(get_main_categories(), get_resource_hierarchy())?;
    Ok(FilterOptions { main_categories, hierarchy })
}

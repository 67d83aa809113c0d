use common::{catalog_api::endpoints, hierarchy::HierarchyDescriptor};

use crate::http_utils::catalog_http::catalog_get_json;

pub async fn get_resource_hierarchy() -> anyhow::Result<HierarchyDescriptor> {
    let descriptor: Option<HierarchyDescriptor> = catalog_get_json(endpoints::RESOURCE_HIERARCHY).await?;
    Ok(descriptor.unwrap_or_default())
}

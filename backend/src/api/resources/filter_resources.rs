//! Server-side category filter.

use common::{catalog_api::{FilterResourcesRequest, endpoints}, resource::Resource};
use tracing::info;

use crate::http_utils::catalog_http::catalog_post_json;

pub async fn filter_resources(request: FilterResourcesRequest) -> anyhow::Result<Vec<Resource>> {
    let resources: Option<Vec<Resource>> = catalog_post_json(endpoints::FILTER_RESOURCES, &request).await?;
    let resources = resources.unwrap_or_default();
    info!("filter_resources: {} resources for {:?}", resources.len(), request);
    Ok(resources)
}

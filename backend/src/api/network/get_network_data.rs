use common::{catalog_api::endpoints, network::NetworkData};
use tracing::info;

use crate::http_utils::catalog_http::catalog_get_json;

pub async fn get_network_data() -> anyhow::Result<NetworkData> {
    let network: Option<NetworkData> = catalog_get_json(endpoints::NETWORK_DATA).await?;
    let network = network.unwrap_or_default();
    info!("network: {} nodes, {} edges", network.nodes.len(), network.edges.len());
    Ok(network)
}

//! Client API calls for the catalog endpoints.

use common::{
    catalog_api::{FilterOptions, FilterResourcesRequest, SearchSuggestion},
    chat::{ChatRequest, ChatResponse},
    network::NetworkData,
    resource::Resource,
};
use dioxus::prelude::*;

#[cfg(feature = "server")]
fn server_error(e: anyhow::Error) -> ServerFnError {
    ServerFnError::ServerError { message: e.to_string(), code: 500, details: None }
}

#[server]
pub async fn filter_resources(input: FilterResourcesRequest) -> Result<Vec<Resource>, ServerFnError> {
    backend::api::resources::filter_resources(input).await.map_err(server_error)
}

#[server]
pub async fn get_resource(resource_id: String) -> Result<Option<Resource>, ServerFnError> {
    backend::api::resources::get_resource(resource_id).await.map_err(server_error)
}

#[server]
pub async fn search_resources(query: String) -> Result<Vec<SearchSuggestion>, ServerFnError> {
    backend::api::resources::search_resources(query).await.map_err(server_error)
}

#[server]
pub async fn load_filter_options() -> Result<FilterOptions, ServerFnError> {
    backend::api::hierarchy::load_filter_options().await.map_err(server_error)
}

#[server]
pub async fn ai_chat(request: ChatRequest) -> Result<ChatResponse, ServerFnError> {
    backend::api::chat::ai_chat(request).await.map_err(server_error)
}

#[server]
pub async fn get_network_data() -> Result<NetworkData, ServerFnError> {
    backend::api::network::get_network_data().await.map_err(server_error)
}

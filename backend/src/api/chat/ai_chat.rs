//! Relay to the AI chat endpoint.

use common::{catalog_api::endpoints, chat::{ChatRequest, ChatResponse, validate_query}};
use tracing::info;

use crate::http_utils::catalog_http::catalog_post;

pub async fn ai_chat(request: ChatRequest) -> anyhow::Result<ChatResponse> {
    validate_query(&request.query)?;
    info!("ai_chat: {} chars, {} context resources", request.query.len(), request.selected_resource_ids.len());
    let response = catalog_post(endpoints::AI_CHAT, &request).await?;
    // error statuses usually still carry an `{error}` body worth showing
    if response.is_error() {
        if let Ok(parsed) = serde_json::from_str::<ChatResponse>(&response.body) {
            if parsed.error.is_some() {
                return Ok(parsed);
            }
        }
    }
    response.json()
}

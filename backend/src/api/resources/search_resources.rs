//! Type-ahead search.

use common::catalog_api::{MIN_SEARCH_QUERY_LEN, SearchSuggestion, endpoints};

use crate::http_utils::catalog_http::catalog_get;

pub async fn search_resources(query: String) -> anyhow::Result<Vec<SearchSuggestion>> {
    let query = query.trim();
    if query.chars().count() < MIN_SEARCH_QUERY_LEN {
        return Ok(Vec::new());
    }
    let suggestions: Option<Vec<SearchSuggestion>> = catalog_get(endpoints::SEARCH_RESOURCES, &[("q", query)]).await?.json()?;
    Ok(suggestions.unwrap_or_default())
}

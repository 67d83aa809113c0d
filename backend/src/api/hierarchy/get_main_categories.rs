use common::catalog_api::{MainCategories, endpoints};

use crate::http_utils::catalog_http::catalog_get_json;

pub async fn get_main_categories() -> anyhow::Result<MainCategories> {
    let categories: Option<MainCategories> = catalog_get_json(endpoints::MAIN_CATEGORIES).await?;
    Ok(categories.unwrap_or_default())
}

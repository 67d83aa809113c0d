//! Catalog service location and client settings, read from the environment.

use std::time::Duration;

pub const DEFAULT_CATALOG_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub base_url: String,
    /// No timeout unless `CATALOG_API_TIMEOUT_SECS` is set.
    pub timeout: Option<Duration>,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("CATALOG_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_CATALOG_API_URL.to_string());
        let timeout = lookup("CATALOG_API_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Self { base_url, timeout }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let config = CatalogConfig::from_lookup(|_| None);
        assert_eq!(config.base_url, DEFAULT_CATALOG_API_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = CatalogConfig::from_lookup(|key| match key {
            "CATALOG_API_URL" => Some("https://catalog.example.org/".to_string()),
            "CATALOG_API_TIMEOUT_SECS" => Some("30".to_string()),
            _ => None,
        });
        assert_eq!(config.endpoint("/api/main-categories"), "https://catalog.example.org/api/main-categories");
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn bad_timeout_is_ignored() {
        let config = CatalogConfig::from_lookup(|key| (key == "CATALOG_API_TIMEOUT_SECS").then(|| "soon".to_string()));
        assert_eq!(config.timeout, None);
    }
}

use std::sync::OnceLock;

use reqwest::{RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{info, warn};

use crate::config::CatalogConfig;

static CATALOG_CONFIG: OnceLock<CatalogConfig> = OnceLock::new();
static CATALOG_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

pub fn get_catalog_config() -> &'static CatalogConfig {
    CATALOG_CONFIG.get_or_init(CatalogConfig::from_env)
}

pub fn get_catalog_client() -> &'static reqwest::Client {
    CATALOG_CLIENT.get_or_init(|| {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = get_catalog_config().timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().unwrap_or_else(|e| {
            warn!("falling back to default catalog client: {e}");
            reqwest::Client::new()
        })
    })
}

/// Raw response of one catalog call.
pub struct CatalogResponse {
    pub status: StatusCode,
    pub body: String,
}

impl CatalogResponse {
    pub fn is_error(&self) -> bool {
        self.status.is_client_error() || self.status.is_server_error()
    }

    /// Bails with `"{status}: {body}"` on non-2xx.
    pub fn json<T: DeserializeOwned>(self) -> anyhow::Result<T> {
        if self.is_error() {
            anyhow::bail!("Error: {}: {}", self.status, self.body);
        }
        Ok(serde_json::from_str(&self.body)?)
    }
}

async fn send(label: &str, request: RequestBuilder) -> anyhow::Result<CatalogResponse> {
    let t0 = std::time::Instant::now();
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    let dt_ms = t0.elapsed().as_millis();
    if status.is_success() {
        info!("CATALOG {label}: {status} len = {} ({dt_ms}ms)", body.len());
    } else {
        warn!("CATALOG {label}: {status} ({dt_ms}ms): {body}");
    }
    Ok(CatalogResponse { status, body })
}

pub async fn catalog_get(path: &str, query: &[(&str, &str)]) -> anyhow::Result<CatalogResponse> {
    let url = get_catalog_config().endpoint(path);
    let request = get_catalog_client().get(&url).query(query);
    send(&format!("GET {path}"), request).await
}

pub async fn catalog_post<B: Serialize + ?Sized>(path: &str, body: &B) -> anyhow::Result<CatalogResponse> {
    let url = get_catalog_config().endpoint(path);
    let request = get_catalog_client().post(&url).json(body);
    send(&format!("POST {path}"), request).await
}

pub async fn catalog_get_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    catalog_get(path, &[]).await?.json()
}

pub async fn catalog_post_json<B: Serialize + ?Sized, T: DeserializeOwned>(path: &str, body: &B) -> anyhow::Result<T> {
    catalog_post(path, body).await?.json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_status_keeps_the_body() {
        let response = CatalogResponse { status: StatusCode::BAD_GATEWAY, body: "upstream down".to_string() };
        let err = response.json::<serde_json::Value>().expect_err("error status");
        assert_eq!(err.to_string(), "Error: 502 Bad Gateway: upstream down");
    }

    #[test]
    fn success_body_is_decoded() {
        let response = CatalogResponse { status: StatusCode::OK, body: "{\"Country\": [\"Chad\"]}".to_string() };
        let categories: common::catalog_api::MainCategories = response.json().expect("json");
        assert_eq!(categories.countries, vec!["Chad"]);
    }

    async fn serve_once(raw_response: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(raw_response.as_bytes()).await.expect("write");
            socket.shutdown().await.ok();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn send_reports_not_found_with_body() {
        let base = serve_once("HTTP/1.1 404 Not Found\r\ncontent-length: 9\r\nconnection: close\r\n\r\nnot found").await;
        let request = reqwest::Client::new().get(format!("{base}/api/resource/x"));
        let response = send("GET /api/resource/x", request).await.expect("response");
        assert!(response.is_error());
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, "not found");
    }

    #[tokio::test]
    async fn send_returns_success_body() {
        let base = serve_once("HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 2\r\nconnection: close\r\n\r\n[]").await;
        let request = reqwest::Client::new().post(format!("{base}/api/filter-resources")).json(&serde_json::json!({}));
        let response = send("POST /api/filter-resources", request).await.expect("response");
        let rows: Vec<serde_json::Value> = response.json().expect("json");
        assert!(rows.is_empty());
    }
}

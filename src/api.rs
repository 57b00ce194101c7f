//! Remote Catalog Bindings
//!
//! Browser-side transport for the character listing endpoint.

use async_trait::async_trait;
use catalog_core::{
    fetch_page, Action, CatalogConfig, CatalogError, CatalogResult, FetchRequest, HttpResponse, Transport,
};
use gloo_timers::future::TimeoutFuture;

/// `reqwest` over the browser fetch API
#[derive(Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> CatalogResult<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Run a fetch the reducer asked for and turn the outcome into an action
pub async fn fetch_characters(config: &CatalogConfig, request: &FetchRequest) -> Action {
    let url = request.params.to_url(config);
    log::debug!("[API] GET {}", url);
    let timer = TimeoutFuture::new(u32::try_from(config.timeout_ms).unwrap_or(u32::MAX));
    let outcome = fetch_page(&HttpTransport::default(), &url, timer, config.timeout_ms).await;
    if let Err(e) = &outcome {
        log::error!("[API] Request #{} failed: {}", request.id.0, e);
    }
    Action::from_fetch(request.id, outcome)
}

/// Config baked in at build time (`CATALOG_API_URL`, `CATALOG_TIMEOUT_MS`)
pub fn load_config() -> CatalogConfig {
    config_from(option_env!("CATALOG_API_URL"), option_env!("CATALOG_TIMEOUT_MS"))
}

fn config_from(api_url: Option<&str>, timeout_ms: Option<&str>) -> CatalogConfig {
    let mut config = CatalogConfig::default();
    if let Some(url) = api_url {
        config.api_url = url.trim().to_string();
    }
    if let Some(raw) = timeout_ms {
        match raw.trim().parse() {
            Ok(ms) => config.timeout_ms = ms,
            Err(_) => log::warn!("[API] Ignoring invalid CATALOG_TIMEOUT_MS={:?}", raw),
        }
    }
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("[API] {}; falling back to defaults", e);
            CatalogConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_overrides() {
        let config = config_from(Some("http://localhost:8080/character"), Some("2500"));
        assert_eq!(config.api_url, "http://localhost:8080/character");
        assert_eq!(config.timeout_ms, 2500);
    }

    #[test]
    fn test_invalid_config_falls_back() {
        assert_eq!(config_from(Some("  "), None), CatalogConfig::default());
        assert_eq!(config_from(None, Some("soon")).timeout_ms, CatalogConfig::default().timeout_ms);
        assert_eq!(config_from(None, Some("0")), CatalogConfig::default());
    }
}

//! Catalog Client
//!
//! Contract with the remote paginated character listing. The actual HTTP
//! call sits behind `Transport` so the browser supplies it and tests can
//! fake it.

use std::future::Future;

use async_trait::async_trait;
use futures::future::{self, Either};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::config::{CatalogConfig, PageSize};
use crate::error::{CatalogError, CatalogResult};

/// Server-side query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParams {
    pub page: u32,
    pub page_size: PageSize,
    pub search: String,
}

impl FetchParams {
    pub fn to_url(&self, config: &CatalogConfig) -> String {
        let mut url = format!(
            "{}?page={}&pageSize={}",
            config.api_url.trim_end_matches('/'),
            self.page.max(1),
            self.page_size.get()
        );
        let term = self.search.trim();
        if !term.is_empty() {
            url.push_str(&format!(
                "&{}={}",
                config.search_param,
                utf8_percent_encode(term, NON_ALPHANUMERIC)
            ));
        }
        url
    }
}

/// Monotonic tag of an issued request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// A fetch the reducer wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub params: FetchParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Single GET against the remote source
///
/// Not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> CatalogResult<HttpResponse>;
}

/// Status and body -> raw records
///
/// A body that parses but lacks an array `data` field yields no records.
pub fn parse_page(status: u16, body: &str) -> CatalogResult<Vec<Value>> {
    if !(200..300).contains(&status) {
        return Err(CatalogError::Status(status));
    }
    let json: Value = serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;
    match json {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(records)) => Ok(records),
            _ => Ok(Vec::new()),
        },
        _ => Ok(Vec::new()),
    }
}

/// Perform one request, failing with `Timeout` if `timer` completes first
pub async fn fetch_page<T, F>(transport: &T, url: &str, timer: F, timeout_ms: u64) -> CatalogResult<Vec<Value>>
where
    T: Transport + ?Sized,
    F: Future<Output = ()>,
{
    let request = transport.get(url);
    futures::pin_mut!(timer);
    match future::select(request, timer).await {
        Either::Left((response, _)) => {
            let response = response?;
            parse_page(response.status, &response.body)
        }
        Either::Right(((), _)) => Err(CatalogError::Timeout(timeout_ms)),
    }
}

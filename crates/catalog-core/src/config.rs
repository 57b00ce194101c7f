//! Catalog Configuration
//!
//! Where to fetch from and how long to wait.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

pub const DEFAULT_API_URL: &str = "https://api.disneyapi.dev/character";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Allowed page sizes of the remote listing endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PageSize {
    #[default]
    Twelve,
    TwentyFour,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Twelve,
        PageSize::TwentyFour,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn get(self) -> u32 {
        match self {
            PageSize::Twelve => 12,
            PageSize::TwentyFour => 24,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = CatalogError;

    fn try_from(value: u32) -> CatalogResult<Self> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(CatalogError::InvalidPageSize(value))
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> u32 {
        size.get()
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.get())
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_search_param() -> String {
    "name".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Character listing endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout; a request still pending after this fails with `Timeout`
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub default_page_size: PageSize,
    /// Query parameter carrying the name search term
    #[serde(default = "default_search_param")]
    pub search_param: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_ms: default_timeout_ms(),
            default_page_size: PageSize::default(),
            search_param: default_search_param(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json(raw: &str) -> CatalogResult<Self> {
        let config: CatalogConfig =
            serde_json::from_str(raw).map_err(|e| CatalogError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(CatalogError::Config("api_url must not be empty".to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(CatalogError::Config("timeout_ms must be positive".to_string()));
        }
        if self.search_param.trim().is_empty() {
            return Err(CatalogError::Config("search_param must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_accepts_only_allowed_values() {
        assert_eq!(PageSize::try_from(24).unwrap(), PageSize::TwentyFour);
        assert_eq!(PageSize::try_from(13), Err(CatalogError::InvalidPageSize(13)));
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config = CatalogConfig::from_json(r#"{"timeout_ms": 2500}"#).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout_ms, 2500);
        assert_eq!(config.default_page_size, PageSize::Twelve);
        assert_eq!(config.search_param, "name");
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(matches!(
            CatalogConfig::from_json(r#"{"timeout_ms": 0}"#),
            Err(CatalogError::Config(_))
        ));
        assert!(matches!(
            CatalogConfig::from_json(r#"{"default_page_size": 7}"#),
            Err(CatalogError::Config(_))
        ));
    }
}

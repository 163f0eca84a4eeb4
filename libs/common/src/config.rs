//! Configuration module for the catalog client
//!
//! Settings are built from defaults overlaid with `CATALOG_*` environment
//! variables.

use serde::Deserialize;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration struct
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the remote catalog service
    pub api_base_url: String,
    /// Base URL that relative image paths are resolved against
    pub asset_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Create a new ClientConfig from environment variables
    ///
    /// # Environment Variables
    /// - `CATALOG_API_BASE_URL`: catalog service URL (default: "http://localhost:3000")
    /// - `CATALOG_ASSET_BASE_URL`: image host (default: same as the API URL)
    /// - `CATALOG_REQUEST_TIMEOUT_SECS`: request timeout (default: 30)
    ///
    /// ```rust,no_run
    /// use common::config::ClientConfig;
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let config = ClientConfig::from_env()?;
    ///     println!("Catalog service: {}", config.api_base_url);
    ///     Ok(())
    /// }
    /// ```
    pub fn from_env() -> ClientResult<Self> {
        let settings = config::Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)
            .and_then(|b| b.set_default("asset_base_url", ""))
            .and_then(|b| {
                b.set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)
            })
            .map_err(|e| ClientError::Configuration(e.to_string()))?
            .add_source(config::Environment::with_prefix("CATALOG").try_parsing(true))
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        let mut config: ClientConfig = settings
            .try_deserialize()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        if config.asset_base_url.is_empty() {
            config.asset_base_url = config.api_base_url.clone();
        }
        config.asset_base_url = config.asset_base_url.trim_end_matches('/').to_string();

        config.validate()?;
        Ok(config)
    }

    /// Check that the loaded values are usable
    pub fn validate(&self) -> ClientResult<()> {
        for (name, url) in [
            ("api_base_url", &self.api_base_url),
            ("asset_base_url", &self.asset_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ClientError::Configuration(format!(
                    "{} must be an http(s) URL, got {:?}",
                    name, url
                )));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err(ClientError::Configuration(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            asset_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

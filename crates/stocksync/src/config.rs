//! Configuration management

use crate::error::{Result, SyncError};
use crate::storage::StorageConfig;

// ============================================================================
// Configuration Constants
// ============================================================================

/// Shopify Admin API version used for every request.
pub const API_VERSION: &str = "2025-01";

/// Default name for the local CSV export file.
pub const DEFAULT_EXPORT_FILE: &str = "inventory.csv";

/// Process-wide configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Shop domain, e.g. "my-store.myshopify.com"
    pub shop: String,
    /// Shopify Admin API access token
    pub access_token: String,
    /// Optional override for the Admin API base URL (tests, local mocks)
    pub api_url: Option<String>,
    /// Local CSV export file name, written to the working directory
    pub export_file: String,
    /// Object storage settings
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from environment and defaults
    ///
    /// Environment variables:
    /// - `SHOPIFY_SHOP_NAME`: shop domain (required unless `SHOPIFY_API_URL` is set)
    /// - `SHOPIFY_ACCESS_TOKEN`: Admin API access token (required)
    /// - `SHOPIFY_API_URL`: full Admin API base URL override (optional)
    /// - `S3_BUCKET_NAME`: target bucket (required)
    /// - `AWS_DEFAULT_REGION`: storage region (default "us-east-1")
    /// - `S3_ENDPOINT`: custom storage endpoint (optional)
    /// - `S3_PATH_STYLE`: use path-style addressing (optional, default false)
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            shop: std::env::var("SHOPIFY_SHOP_NAME").unwrap_or_default(),
            access_token: std::env::var("SHOPIFY_ACCESS_TOKEN").unwrap_or_default(),
            api_url: std::env::var("SHOPIFY_API_URL").ok(),
            export_file: DEFAULT_EXPORT_FILE.to_string(),
            storage: StorageConfig::from_env(),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    ///
    /// Missing required values fail here, at startup, rather than surfacing
    /// later as an opaque API or upload error.
    pub fn validate(&self) -> Result<()> {
        if self.shop.is_empty() && self.api_url.is_none() {
            return Err(SyncError::config("SHOPIFY_SHOP_NAME must be set"));
        }

        if self.access_token.is_empty() {
            return Err(SyncError::config("SHOPIFY_ACCESS_TOKEN must be set"));
        }

        if self.storage.bucket.is_empty() {
            return Err(SyncError::config("S3_BUCKET_NAME must be set"));
        }

        if self.export_file.is_empty() {
            return Err(SyncError::config("Export file name cannot be empty"));
        }

        Ok(())
    }

    /// Base URL for Admin API requests
    pub fn admin_api_url(&self) -> String {
        match &self.api_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}/admin/api/{}", self.shop, API_VERSION),
        }
    }
}

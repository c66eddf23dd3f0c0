//! Shopify Admin API client
//!
//! Fetches inventory levels from the versioned Admin REST API. This is the
//! pipeline's single fail-soft boundary: [`fetch_inventory`] converts any
//! fetch failure into an empty result so that the run exits cleanly with
//! "nothing to do" instead of aborting.

use crate::config::Config;
use crate::error::{Result, SyncError};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

// ============================================================================
// API Client Constants
// ============================================================================

/// Header carrying the Admin API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Request timeout for Admin API calls in seconds.
const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// One inventory-level record: quantity available for one inventory item
/// at one location
///
/// Field order matches the CSV column order of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLevel {
    pub location_id: i64,
    pub inventory_item_id: i64,
    /// Quantity available; null when the item is untracked at the location
    pub available: Option<i64>,
    /// Timestamp string as returned by the platform, passed through verbatim
    pub updated_at: String,
}

/// Envelope for the inventory levels collection endpoint
#[derive(Debug, Deserialize)]
struct InventoryLevelsResponse {
    inventory_levels: Vec<InventoryLevel>,
}

/// API client for the Shopify Admin API
pub struct ShopifyClient {
    client: reqwest::Client,
    base_url: String,
}

impl ShopifyClient {
    /// Create a new client against the given Admin API base URL
    ///
    /// The access token is attached to every request as a default header.
    pub fn new(base_url: impl Into<String>, access_token: &str) -> Result<Self> {
        let mut token = HeaderValue::from_str(access_token).map_err(|_| {
            SyncError::config("SHOPIFY_ACCESS_TOKEN contains invalid header characters")
        })?;
        token.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, token);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(DEFAULT_API_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Retrieve the complete collection of inventory levels
    ///
    /// Single request; records come back in whatever order the platform
    /// returns them. No client-side paging or sorting.
    pub async fn inventory_levels(&self) -> Result<Vec<InventoryLevel>> {
        let url = format!("{}/inventory_levels.json", self.base_url);

        debug!(url = %url, "Requesting inventory levels");

        let response = self.client.get(&url).send().await?.error_for_status()?;

        let body: InventoryLevelsResponse = response.json().await?;

        Ok(body.inventory_levels)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Fetch all inventory levels, converting any failure into an empty result
///
/// Session setup errors and retrieval errors are logged and swallowed here.
/// The caller cannot distinguish "zero inventory" from "fetch failed"; both
/// surface as an empty vector.
pub async fn fetch_inventory(config: &Config) -> Vec<InventoryLevel> {
    let client = match ShopifyClient::new(config.admin_api_url(), &config.access_token) {
        Ok(client) => {
            info!(api_url = %client.base_url(), "Shopify API client initialized");
            client
        },
        Err(err) => {
            error!(error = %err, "Failed to initialize Shopify API client");
            return Vec::new();
        },
    };

    match client.inventory_levels().await {
        Ok(levels) => {
            info!(count = levels.len(), "Retrieved inventory levels");
            levels
        },
        Err(err) => {
            error!(error = %err, "Error retrieving inventory levels");
            Vec::new()
        },
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_EXPORT_FILE;
    use crate::storage::StorageConfig;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(api_url: String) -> Config {
        Config {
            shop: "test-store.myshopify.com".to_string(),
            access_token: "shpat_test_token".to_string(),
            api_url: Some(api_url),
            export_file: DEFAULT_EXPORT_FILE.to_string(),
            storage: StorageConfig {
                endpoint: None,
                region: "us-east-1".to_string(),
                bucket: "inventory-exports".to_string(),
                path_style: false,
            },
        }
    }

    fn inventory_body() -> serde_json::Value {
        serde_json::json!({
            "inventory_levels": [
                {
                    "inventory_item_id": 100,
                    "location_id": 1,
                    "available": 5,
                    "updated_at": "2025-01-01T00:00:00Z",
                    "admin_graphql_api_id": "gid://shopify/InventoryLevel/100?inventory_item_id=1"
                },
                {
                    "inventory_item_id": 101,
                    "location_id": 1,
                    "available": null,
                    "updated_at": "2025-01-02T00:00:00Z"
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_inventory_levels_sends_token_and_decodes() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/inventory_levels.json"))
            .and(header(ACCESS_TOKEN_HEADER, "shpat_test_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(inventory_body()))
            .mount(&server)
            .await;

        let client = ShopifyClient::new(server.uri(), "shpat_test_token").unwrap();
        let levels = client.inventory_levels().await.unwrap();

        assert_eq!(levels.len(), 2);
        assert_eq!(
            levels[0],
            InventoryLevel {
                location_id: 1,
                inventory_item_id: 100,
                available: Some(5),
                updated_at: "2025-01-01T00:00:00Z".to_string(),
            }
        );
        // Untracked items come back with a null quantity
        assert_eq!(levels[1].available, None);
    }

    #[tokio::test]
    async fn test_inventory_levels_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/inventory_levels.json"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let client = ShopifyClient::new(server.uri(), "bad-token").unwrap();
        assert!(client.inventory_levels().await.is_err());
    }

    #[tokio::test]
    async fn test_fetch_inventory_fails_soft_to_empty() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/inventory_levels.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = test_config(server.uri());
        let levels = fetch_inventory(&config).await;

        assert!(levels.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_inventory_preserves_order() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/inventory_levels.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(inventory_body()))
            .mount(&server)
            .await;

        let config = test_config(server.uri());
        let levels = fetch_inventory(&config).await;

        let ids: Vec<i64> = levels.iter().map(|l| l.inventory_item_id).collect();
        assert_eq!(ids, vec![100, 101]);
    }

    #[test]
    fn test_new_rejects_invalid_token() {
        assert!(ShopifyClient::new("http://localhost", "bad\ntoken").is_err());
    }
}

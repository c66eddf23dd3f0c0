use std::env;

/// Default storage region when `AWS_DEFAULT_REGION` is unset.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Object storage settings
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Custom endpoint (e.g. MinIO); None for AWS S3
    pub endpoint: Option<String>,
    pub region: String,
    pub bucket: String,
    /// Path-style addressing, required by most S3-compatible servers
    pub path_style: bool,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("S3_ENDPOINT").ok(),
            region: env::var("AWS_DEFAULT_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            bucket: env::var("S3_BUCKET_NAME").unwrap_or_default(),
            path_style: env::var("S3_PATH_STYLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

//! Error types for the inventory sync job

use thiserror::Error;

/// Result type alias for sync operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Error type covering every stage of the export pipeline
///
/// The upload stage distinguishes three failure kinds: a missing local
/// export file, absent storage credentials, and a rejection from the
/// storage service itself.
#[derive(Error, Debug)]
pub enum SyncError {
    /// Local export file is missing at upload time
    #[error("Export file not found: '{0}'. The CSV export must exist before upload.")]
    FileNotFound(String),

    /// No usable AWS credentials in the environment or credential chain
    #[error("Storage credentials not available. Set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY or configure a credentials provider.")]
    NoCredentials,

    /// Storage service rejected the request
    #[error("Storage service error: {0}")]
    Storage(String),

    /// HTTP request to the Shopify Admin API failed
    #[error("Network request failed: {0}. Check your internet connection and shop domain.")]
    Http(#[from] reqwest::Error),

    /// CSV serialization or write failed
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables.")]
    Config(String),
}

impl SyncError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a storage service error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

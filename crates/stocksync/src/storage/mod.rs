//! S3 upload of the export file
//!
//! Each run uploads under a key derived from the wall-clock time at upload,
//! so successive runs never overwrite each other. Credentials come from the
//! AWS default provider chain (environment, profile, instance metadata).

use crate::error::{Result, SyncError};
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::{config::Region, primitives::ByteStream, Client};
use chrono::{DateTime, Local};
use std::io::ErrorKind;
use tracing::{debug, info, instrument};

pub mod config;

pub use config::StorageConfig;

/// Storage client bound to one bucket
pub struct Storage {
    client: Client,
    bucket: String,
}

impl Storage {
    /// Build a storage client from the default credentials chain
    ///
    /// Credentials are resolved up front so that "no credentials" surfaces
    /// as its own error kind instead of an opaque request failure.
    pub async fn new(config: &StorageConfig) -> Result<Self> {
        debug!(bucket = %config.bucket, region = %config.region, "Initializing storage client");

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        let provider = sdk_config
            .credentials_provider()
            .ok_or(SyncError::NoCredentials)?;
        provider
            .provide_credentials()
            .await
            .map_err(|_| SyncError::NoCredentials)?;

        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.path_style)
            .build();
        let client = Client::from_conf(s3_config);

        info!(bucket = %config.bucket, "Storage client initialized");

        Ok(Self {
            client,
            bucket: config.bucket.clone(),
        })
    }

    /// Upload a local file under a timestamped key
    ///
    /// Returns the object key on success. A missing local file and a
    /// service-side rejection are reported as distinct error kinds.
    #[instrument(skip(self))]
    pub async fn upload_file(&self, file_name: &str) -> Result<String> {
        let data = tokio::fs::read(file_name).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                SyncError::FileNotFound(file_name.to_string())
            } else {
                SyncError::Io(err)
            }
        })?;

        let key = export_key(Local::now());

        debug!(
            bytes = data.len(),
            "Uploading to s3://{}/{}", self.bucket, key
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type("text/csv")
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|err| SyncError::storage(err.to_string()))?;

        info!(
            file = %file_name,
            "Uploaded to s3://{}/{}", self.bucket, key
        );

        Ok(key)
    }
}

/// Object key for one export run
///
/// Key generation uses local wall-clock time at the moment of upload, so
/// two runs collide only if they upload within the same second.
pub fn export_key(timestamp: DateTime<Local>) -> String {
    format!("inventory_{}.csv", timestamp.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_storage() -> Storage {
        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        Storage {
            client: Client::from_conf(s3_config),
            bucket: "test-bucket".to_string(),
        }
    }

    #[test]
    fn test_export_key_format() {
        let ts = Local.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(export_key(ts), "inventory_20250101_120000.csv");
    }

    #[test]
    fn test_export_key_pattern() {
        let key = export_key(Local::now());

        let middle = key
            .strip_prefix("inventory_")
            .and_then(|s| s.strip_suffix(".csv"))
            .unwrap();
        let (date, time) = middle.split_once('_').unwrap();

        assert_eq!(date.len(), 8);
        assert_eq!(time.len(), 6);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
        assert!(time.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_export_key_distinct_seconds() {
        let a = Local.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let b = Local.with_ymd_and_hms(2025, 1, 1, 12, 0, 1).unwrap();
        assert_ne!(export_key(a), export_key(b));
    }

    #[tokio::test]
    async fn test_upload_missing_file() {
        let storage = test_storage();
        let result = storage.upload_file("no-such-file.csv").await;

        assert!(matches!(result, Err(SyncError::FileNotFound(_))));
    }
}

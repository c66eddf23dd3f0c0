//! Run orchestration
//!
//! Fetch, export, upload, strictly in that order. An empty fetch result
//! ends the run successfully without writing or uploading anything; export
//! and upload failures propagate and terminate the run.

use crate::config::Config;
use crate::error::Result;
use crate::export;
use crate::shopify;
use crate::storage::Storage;
use tracing::{error, info, warn};

/// Execute one sync run
pub async fn run(config: &Config) -> Result<()> {
    info!(shop = %config.shop, "Starting inventory sync");

    let levels = shopify::fetch_inventory(config).await;

    if levels.is_empty() {
        // Normal outcome, nothing to export. A failed fetch lands here too.
        warn!("No inventory levels retrieved");
        return Ok(());
    }

    let file_name = export::write_csv(&levels, &config.export_file).inspect_err(
        |err| error!(error = %err, file = %config.export_file, "Failed to export inventory"),
    )?;

    let storage = Storage::new(&config.storage)
        .await
        .inspect_err(|err| error!(error = %err, "Failed to initialize storage"))?;

    let key = storage.upload_file(&file_name).await.inspect_err(
        |err| error!(error = %err, bucket = %config.storage.bucket, "Failed to upload export"),
    )?;

    info!(
        records = levels.len(),
        bucket = %config.storage.bucket,
        key = %key,
        "Inventory sync finished"
    );

    Ok(())
}

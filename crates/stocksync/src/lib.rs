//! Stocksync - Shopify inventory export job
//!
//! Fetches the current inventory levels from a Shopify shop's Admin API,
//! writes them to a local CSV file, and uploads that file to an S3 bucket
//! under a timestamped key. One linear pass per invocation; scheduling is
//! left to an external cron/runner.
//!
//! # Example
//!
//! ```no_run
//! use stocksync::{config::Config, pipeline};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     pipeline::run(&config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod shopify;
pub mod storage;

// Re-export commonly used types
pub use error::{Result, SyncError};
pub use shopify::InventoryLevel;

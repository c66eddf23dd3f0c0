//! Stocksync Common Library
//!
//! Shared infrastructure for the stocksync workspace, currently the
//! process-wide logging facility.

pub mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};

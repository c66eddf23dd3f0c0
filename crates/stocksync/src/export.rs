//! CSV export of inventory levels
//!
//! Writes one row per record under a fixed four-column header, in the order
//! the records were fetched. Unlike the fetch stage, failures here are
//! fatal to the run.

use crate::error::Result;
use crate::shopify::InventoryLevel;
use tracing::info;

/// Write inventory levels to a local CSV file
///
/// Produces the header `location_id,inventory_item_id,available,updated_at`
/// followed by one row per record. An existing file of the same name is
/// overwritten. A `None` quantity serializes as an empty field.
///
/// Returns the file name written. A partially written file is left on disk
/// if the write fails mid-way.
pub fn write_csv(levels: &[InventoryLevel], file_name: &str) -> Result<String> {
    let mut writer = csv::Writer::from_path(file_name)?;

    for level in levels {
        writer.serialize(level)?;
    }

    writer.flush()?;

    info!(file = %file_name, rows = levels.len(), "Inventory data saved");

    Ok(file_name.to_string())
}

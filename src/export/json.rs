//! JSON snapshots of items and reports.
//! Lets a storage layer hand item collections in and take results out as JSON.

use crate::error::Result;
use crate::models::ReviewItem;
use serde::Serialize;

/// Serializes items as a pretty-printed JSON array.
pub fn items_to_json(items: &[ReviewItem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Parses a JSON array of item records.
/// Missing or null scheduling fields are read as absent.
pub fn items_from_json(json: &str) -> Result<Vec<ReviewItem>> {
    let items: Vec<ReviewItem> = serde_json::from_str(json)?;
    tracing::debug!("Imported {} items", items.len());
    Ok(items)
}

/// Serializes any report (statistics, batch outcome) as JSON.
pub fn report_to_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string(report)?)
}

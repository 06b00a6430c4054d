//! Error types for the scheduling engine.

use crate::models::ItemId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Grade outside 1..=5
    #[error("Invalid grade {0}: must be between 1 and 5")]
    InvalidGrade(i32),
    /// Graded id missing from the supplied items
    #[error("Not found in provided list")]
    ItemNotFound(ItemId),
    #[error("No items to update")]
    EmptyBatch,
    /// Two supplied items share one id
    #[error("Item {0} appears more than once in provided list")]
    DuplicateItem(ItemId),
    /// Recall date falls outside the representable calendar
    #[error("Recall date out of range for an interval of {0} days")]
    DateOverflow(u32),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

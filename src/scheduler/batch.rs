//! Grading many items in one call.
//!
//! Per-item problems (bad grade, unknown id, date overflow) are recorded in
//! `errors` and the rest of the batch carries on; the batch still reports
//! success. Only an empty grade map or a failure outside the per-item loop
//! makes the whole batch fail. Callers commit once, after the batch returns.

use super::Scheduler;
use crate::clock::Clock;
use crate::error::{Result, ScheduleError};
use crate::models::{Grade, ItemId, ReviewItem};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// What one successfully graded item now looks like.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemUpdateSummary {
    pub id: ItemId,
    pub next_review: NaiveDate,
    pub interval: u32,
    pub easiness: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatchOutcome {
    pub success: bool,
    pub updated_count: usize,
    pub updated_items: Vec<ItemUpdateSummary>,
    pub errors: Vec<String>,
    pub message: String,
}

impl BatchOutcome {
    fn failed(message: String, errors: Vec<String>) -> Self {
        Self {
            success: false,
            updated_count: 0,
            updated_items: Vec::new(),
            errors,
            message,
        }
    }

    /// The message followed by any per-item errors, for showing to a learner.
    pub fn summary(&self) -> String {
        if self.errors.is_empty() {
            self.message.clone()
        } else {
            format!("{} Errors: {}", self.message, self.errors.join(", "))
        }
    }
}

/// Maps each id to its position. An id shared by several items is only an
/// error when it is graded, since the item to update would be ambiguous.
fn index_by_id(
    items: &[ReviewItem],
    grades: &BTreeMap<ItemId, i32>,
) -> Result<HashMap<ItemId, usize>> {
    let mut lookup = HashMap::with_capacity(items.len());
    let mut shared = HashSet::new();
    for (idx, item) in items.iter().enumerate() {
        if lookup.insert(item.id, idx).is_some() {
            shared.insert(item.id);
        }
    }
    match grades.keys().find(|id| shared.contains(*id)) {
        Some(&id) => Err(ScheduleError::DuplicateItem(id)),
        None => Ok(lookup),
    }
}

impl<C: Clock> Scheduler<C> {
    /// Applies `grades` to the matching `items` in place.
    ///
    /// An empty `grades` map fails the batch, while a map whose every entry is
    /// rejected still succeeds with all entries listed in `errors`. Hosts rely
    /// on this split, so it is kept as is.
    pub fn apply_batch(
        &self,
        items: &mut [ReviewItem],
        grades: &BTreeMap<ItemId, i32>,
    ) -> BatchOutcome {
        if grades.is_empty() {
            tracing::warn!("batch update called without grades");
            return BatchOutcome::failed(ScheduleError::EmptyBatch.to_string(), Vec::new());
        }

        match self.grade_items(items, grades) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Batch update failed: {}", e);
                BatchOutcome::failed(format!("Batch update failed: {e}"), Vec::new())
            }
        }
    }

    fn grade_items(
        &self,
        items: &mut [ReviewItem],
        grades: &BTreeMap<ItemId, i32>,
    ) -> Result<BatchOutcome> {
        let lookup = index_by_id(items, grades)?;
        // One timestamp for the whole batch
        let now = self.clock.now();

        let mut updated_items = Vec::new();
        let mut errors = Vec::new();

        for (&id, &grade) in grades {
            match self.grade_one(items, &lookup, id, grade, now) {
                Ok(summary) => updated_items.push(summary),
                Err(e) => {
                    tracing::warn!("Failed to grade item {}: {}", id, e);
                    errors.push(format!("Item {id}: {e}"));
                }
            }
        }

        tracing::info!(
            updated = updated_items.len(),
            failed = errors.len(),
            "batch update finished"
        );

        Ok(BatchOutcome {
            success: true,
            updated_count: updated_items.len(),
            message: format!("Successfully updated {} items", updated_items.len()),
            updated_items,
            errors,
        })
    }

    fn grade_one(
        &self,
        items: &mut [ReviewItem],
        lookup: &HashMap<ItemId, usize>,
        id: ItemId,
        grade: i32,
        now: NaiveDateTime,
    ) -> Result<ItemUpdateSummary> {
        // Grade is checked before the lookup
        let grade = Grade::new(grade)?;
        let item = lookup
            .get(&id)
            .and_then(|&idx| items.get_mut(idx))
            .ok_or(ScheduleError::ItemNotFound(id))?;

        let update = self.next_state_at(item, grade, now)?;
        item.apply(&update);

        Ok(ItemUpdateSummary {
            id,
            next_review: update.recall_date.date(),
            interval: update.interval,
            easiness: update.easiness_factor,
        })
    }
}

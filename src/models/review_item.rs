//! Scheduling view of a question/answer item.
//!
//! Items are owned by the storage layer. The scheduler reads their scheduling
//! fields and hands back a [`ReviewUpdate`] that the caller persists.

use super::Grade;
use super::sm2::{DEFAULT_EASINESS, DEFAULT_INTERVAL, DEFAULT_REPETITIONS};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub type ItemId = i64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: ItemId,
    pub easiness_factor: Option<f64>,
    pub repetitions: Option<u32>,
    pub interval: Option<u32>,
    pub last_grade: Option<Grade>,
    /// Absent until the first review
    pub revised_date: Option<NaiveDateTime>,
    /// Absent means due now
    pub recall_date: Option<NaiveDateTime>,
}

impl ReviewItem {
    /// Creates a never-reviewed item with the SM-2 starting values.
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            easiness_factor: Some(DEFAULT_EASINESS),
            repetitions: Some(DEFAULT_REPETITIONS),
            interval: Some(DEFAULT_INTERVAL),
            last_grade: None,
            revised_date: None,
            recall_date: None,
        }
    }

    pub fn is_new(&self) -> bool {
        self.revised_date.is_none()
    }

    /// Due when never scheduled or scheduled for `today` or earlier.
    pub fn is_due_on(&self, today: NaiveDate) -> bool {
        match self.recall_date {
            None => true,
            Some(recall) => recall.date() <= today,
        }
    }

    /// Days from `today` until the recall date; negative when overdue.
    pub fn days_until_review(&self, today: NaiveDate) -> i64 {
        self.recall_date
            .map(|recall| (recall.date() - today).num_days())
            .unwrap_or(0)
    }

    pub fn apply(&mut self, update: &ReviewUpdate) {
        self.revised_date = Some(update.revised_date);
        self.recall_date = Some(update.recall_date);
        self.easiness_factor = Some(update.easiness_factor);
        self.repetitions = Some(update.repetitions);
        self.interval = Some(update.interval);
        self.last_grade = Some(update.last_grade);
    }
}

/// Scheduling fields produced by one review.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    pub revised_date: NaiveDateTime,
    pub recall_date: NaiveDateTime,
    pub easiness_factor: f64,
    pub repetitions: u32,
    pub interval: u32,
    pub last_grade: Grade,
}

//! Stateless scheduling service.
//!
//! A [`Scheduler`] holds only its configuration and a clock. Every operation
//! works on items handed to it by the caller; persisting the results is left
//! to the storage layer.

mod batch;
mod due;
mod stats;

pub use batch::{BatchOutcome, ItemUpdateSummary};
pub use stats::StudyStatistics;

use crate::clock::{Clock, SystemClock};
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::models::{Grade, ReviewItem, ReviewUpdate, sm2};

#[derive(Clone, Debug, Default)]
pub struct Scheduler<C: Clock = SystemClock> {
    config: SchedulerConfig,
    clock: C,
}

impl Scheduler<SystemClock> {
    pub fn new(config: SchedulerConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Scheduler<C> {
    pub fn with_clock(config: SchedulerConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Computes the state `item` moves to when graded now.
    ///
    /// Fails with `InvalidGrade` for grades outside 1..=5; the item is only
    /// read, never changed.
    pub fn compute_next_state(&self, item: &ReviewItem, grade: i32) -> Result<ReviewUpdate> {
        let grade = Grade::new(grade)?;
        self.next_state_at(item, grade, self.clock.now())
    }

    /// Grades `item` in place and returns the values written to it.
    pub fn review(&self, item: &mut ReviewItem, grade: i32) -> Result<ReviewUpdate> {
        let update = self.compute_next_state(item, grade)?;
        item.apply(&update);
        Ok(update)
    }

    fn next_state_at(
        &self,
        item: &ReviewItem,
        grade: Grade,
        now: chrono::NaiveDateTime,
    ) -> Result<ReviewUpdate> {
        let update = sm2::calculate_next_review(item, grade, now, &self.config)?;
        tracing::debug!(
            item = item.id,
            grade = grade.value(),
            interval = update.interval,
            repetitions = update.repetitions,
            easiness = update.easiness_factor,
            "computed next review"
        );
        Ok(update)
    }
}

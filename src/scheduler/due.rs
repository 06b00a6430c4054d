//! Due-item selection and study ordering.

use super::Scheduler;
use crate::clock::Clock;
use crate::models::ReviewItem;

/// Never-scheduled and most overdue first, ties broken by id.
fn sort_by_priority(items: &mut [&ReviewItem]) {
    items.sort_by(|a, b| {
        a.recall_date
            .cmp(&b.recall_date)
            .then_with(|| a.id.cmp(&b.id))
    });
}

impl<C: Clock> Scheduler<C> {
    /// Items never scheduled or scheduled for today or earlier, in input order.
    pub fn select_due<'a>(&self, items: &'a [ReviewItem]) -> Vec<&'a ReviewItem> {
        let today = self.clock.today();
        items.iter().filter(|item| item.is_due_on(today)).collect()
    }

    /// Items that have never been reviewed.
    pub fn select_new<'a>(&self, items: &'a [ReviewItem]) -> Vec<&'a ReviewItem> {
        items.iter().filter(|item| item.is_new()).collect()
    }

    /// Due items in study order, optionally capped at `limit`.
    ///
    /// A limit of zero is treated like no limit.
    pub fn study_batch<'a>(
        &self,
        items: &'a [ReviewItem],
        limit: Option<usize>,
    ) -> Vec<&'a ReviewItem> {
        let mut due = self.select_due(items);
        sort_by_priority(&mut due);
        if let Some(limit) = limit.filter(|&limit| limit > 0) {
            due.truncate(limit);
        }
        due
    }

    /// Due items in study order, always capped at `batch_size` (or the
    /// configured batch size when none is given).
    pub fn next_review_batch<'a>(
        &self,
        items: &'a [ReviewItem],
        batch_size: Option<usize>,
    ) -> Vec<&'a ReviewItem> {
        let mut due = self.select_due(items);
        sort_by_priority(&mut due);
        due.truncate(batch_size.unwrap_or(self.config.batch_size));
        due
    }
}

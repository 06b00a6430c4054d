//! Study statistics over a collection of items.

use super::Scheduler;
use crate::clock::Clock;
use crate::models::ReviewItem;
use crate::models::sm2::round_to;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StudyStatistics {
    pub total_count: usize,
    pub due_count: usize,
    pub new_count: usize,
    pub studied_count: usize,
    /// Mean easiness over studied items, two decimals
    pub average_easiness: f64,
    /// Share of studied items, one decimal
    pub completion_rate_percent: f64,
}

impl<C: Clock> Scheduler<C> {
    /// Aggregates counts and averages. An empty collection yields zero counts
    /// and the default easiness rather than an error.
    pub fn statistics(&self, items: &[ReviewItem]) -> StudyStatistics {
        let default_easiness = self.config.default_easiness;
        if items.is_empty() {
            return StudyStatistics {
                total_count: 0,
                due_count: 0,
                new_count: 0,
                studied_count: 0,
                average_easiness: default_easiness,
                completion_rate_percent: 0.0,
            };
        }

        let studied: Vec<f64> = items
            .iter()
            .filter(|item| !item.is_new())
            .map(|item| item.easiness_factor.unwrap_or(default_easiness))
            .collect();

        let average_easiness = if studied.is_empty() {
            default_easiness
        } else {
            round_to(studied.iter().sum::<f64>() / studied.len() as f64, 2)
        };

        StudyStatistics {
            total_count: items.len(),
            due_count: self.select_due(items).len(),
            new_count: self.select_new(items).len(),
            studied_count: studied.len(),
            average_easiness,
            completion_rate_percent: round_to(
                studied.len() as f64 / items.len() as f64 * 100.0,
                1,
            ),
        }
    }
}

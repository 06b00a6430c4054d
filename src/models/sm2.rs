//! SM-2 (SuperMemo 2) spaced repetition algorithm implementation.
//!
//! The SM-2 algorithm calculates review intervals based on recall quality:
//! - Each item has an easiness factor (EF) that adjusts based on performance
//! - Grades 1-2: Reset interval and repetitions (item needs relearning)
//! - Grades 3-5: Increase interval progressively (1 day → 6 days → EF multiplier)
//! - EF is adjusted after every review and never falls below the configured floor
//! - EF is stored with two decimals so it does not drift across many reviews

use super::{Grade, ReviewItem, ReviewUpdate};
use crate::config::SchedulerConfig;
use crate::error::{Result, ScheduleError};
use chrono::{NaiveDateTime, TimeDelta};

pub const DEFAULT_EASINESS: f64 = 2.5;
pub const DEFAULT_REPETITIONS: u32 = 0;
pub const DEFAULT_INTERVAL: u32 = 1;
pub const MIN_EASINESS: f64 = 1.3;
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Rounds to a fixed number of decimal digits, ties to even.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round_ties_even() / scale
}

/// EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02)), floored at `min_easiness`
pub fn next_easiness(easiness: f64, grade: Grade, min_easiness: f64) -> f64 {
    let miss = f64::from(Grade::MAX - grade.value());
    (easiness + (0.1 - miss * (0.08 + miss * 0.02))).max(min_easiness)
}

/// Interval for a passing review, given the repetition count it produces.
pub fn next_interval(repetitions: u32, previous_interval: u32, easiness: f64) -> u32 {
    match repetitions {
        0 | 1 => 1,
        2 => 6,
        // Ties go to even, so 22.5 days becomes 22
        _ => (f64::from(previous_interval) * easiness)
            .round_ties_even()
            .clamp(1.0, f64::from(u32::MAX)) as u32,
    }
}

/// Scheduling values with missing or zero fields replaced by defaults.
fn resolve(item: &ReviewItem, config: &SchedulerConfig) -> (f64, u32, u32) {
    let easiness = item
        .easiness_factor
        .filter(|ef| *ef != 0.0 && !ef.is_nan())
        .unwrap_or(config.default_easiness);
    let repetitions = item.repetitions.unwrap_or(config.default_repetitions);
    let interval = item
        .interval
        .filter(|days| *days > 0)
        .unwrap_or(config.default_interval);
    (easiness, repetitions, interval)
}

/// Calculates the next scheduling state for `item` reviewed at `now`.
pub fn calculate_next_review(
    item: &ReviewItem,
    grade: Grade,
    now: NaiveDateTime,
    config: &SchedulerConfig,
) -> Result<ReviewUpdate> {
    let (easiness, repetitions, interval) = resolve(item, config);

    let new_easiness = next_easiness(easiness, grade, config.min_easiness);

    let (new_interval, new_repetitions) = if grade.is_passing() {
        let reps = repetitions.saturating_add(1);
        (next_interval(reps, interval, new_easiness), reps)
    } else {
        // Failed recall restarts the learning sequence
        (1, 0)
    };

    let recall_date = TimeDelta::try_days(i64::from(new_interval))
        .and_then(|delta| now.checked_add_signed(delta))
        .ok_or(ScheduleError::DateOverflow(new_interval))?;

    Ok(ReviewUpdate {
        revised_date: now,
        recall_date,
        easiness_factor: round_to(new_easiness, 2),
        repetitions: new_repetitions,
        interval: new_interval,
        last_grade: grade,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn item(easiness: f64, repetitions: u32, interval: u32) -> ReviewItem {
        ReviewItem {
            easiness_factor: Some(easiness),
            repetitions: Some(repetitions),
            interval: Some(interval),
            ..ReviewItem::new(1)
        }
    }

    fn grade(value: i32) -> Grade {
        Grade::new(value).unwrap()
    }

    fn review(item: &ReviewItem, value: i32) -> ReviewUpdate {
        calculate_next_review(item, grade(value), now(), &SchedulerConfig::default()).unwrap()
    }

    #[test]
    fn test_first_review() {
        let next = review(&item(2.5, 0, 1), 4);
        assert_eq!(next.repetitions, 1);
        assert_eq!(next.interval, 1);
        assert_eq!(next.easiness_factor, 2.5);
        assert_eq!(next.revised_date, now());
        assert_eq!(next.recall_date, now() + TimeDelta::days(1));
        assert_eq!(next.last_grade, grade(4));
    }

    #[test]
    fn test_second_review() {
        let first = review(&item(2.5, 0, 1), 5);
        assert_eq!(first.easiness_factor, 2.6);

        let next = review(&item(first.easiness_factor, 1, first.interval), 5);
        assert_eq!(next.repetitions, 2);
        assert_eq!(next.interval, 6);
        assert_eq!(next.recall_date, now() + TimeDelta::days(6));
    }

    #[test]
    fn test_interval_grows_by_new_easiness() {
        // EF 2.0 graded 5 becomes 2.1, so 10 days grows to 21
        let next = review(&item(2.0, 3, 10), 5);
        assert_eq!(next.repetitions, 4);
        assert_eq!(next.easiness_factor, 2.1);
        assert_eq!(next.interval, 21);

        let next = review(&item(2.5, 2, 6), 4);
        assert_eq!(next.repetitions, 3);
        assert_eq!(next.interval, 15);
    }

    #[test]
    fn test_grade_below_3_resets() {
        let next = review(&item(2.0, 3, 10), 2);
        assert_eq!(next.repetitions, 0);
        assert_eq!(next.interval, 1);
        // EF should still be updated
        assert_eq!(next.easiness_factor, 1.68);
    }

    #[test]
    fn test_ef_floor() {
        for value in 1..=5 {
            let next = review(&item(1.3, 4, 20), value);
            assert!(next.easiness_factor >= 1.3);
        }
        assert_eq!(review(&item(1.5, 3, 10), 1).easiness_factor, 1.3);
    }

    #[test]
    fn test_easiness_per_grade() {
        let expected = [(1, 1.96), (2, 2.18), (3, 2.36), (4, 2.5), (5, 2.6)];
        for (value, ef) in expected {
            assert_eq!(review(&item(2.5, 0, 1), value).easiness_factor, ef);
        }
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let bare = ReviewItem {
            easiness_factor: None,
            repetitions: None,
            interval: Some(0),
            ..ReviewItem::new(9)
        };
        let next = review(&bare, 3);
        assert_eq!(next.repetitions, 1);
        assert_eq!(next.interval, 1);
        assert_eq!(next.easiness_factor, 2.36);
    }

    #[test]
    fn test_ties_round_to_even() {
        assert_eq!(next_interval(3, 5, 2.5), 12);
        assert_eq!(next_interval(3, 7, 2.5), 18);
    }

    #[test]
    fn test_recall_date_overflow() {
        let huge = item(2.5, 5, u32::MAX);
        let result = calculate_next_review(&huge, grade(5), now(), &SchedulerConfig::default());
        assert!(matches!(result, Err(ScheduleError::DateOverflow(_))));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.0533, 2), 2.05);
        assert_eq!(round_to(33.3333, 1), 33.3);
    }

    #[test]
    fn test_round_to_ties_even() {
        assert_eq!(round_to(2.125, 2), 2.12);
        assert_eq!(round_to(2.375, 2), 2.38);
        assert_eq!(round_to(0.25, 1), 0.2);
    }

    #[test]
    fn test_stored_easiness_ties_to_even() {
        // Grade 4 leaves EF unchanged, so 2.125 is stored as 2.12
        let next = review(&item(2.125, 3, 10), 4);
        assert_eq!(next.easiness_factor, 2.12);
    }

    #[test]
    fn test_negative_easiness_is_floored_not_defaulted() {
        let next = review(&item(-1.0, 3, 10), 5);
        assert_eq!(next.easiness_factor, 1.3);
        assert_eq!(next.interval, 13);
    }

    #[test]
    fn test_nan_easiness_uses_default() {
        let next = review(&item(f64::NAN, 0, 1), 5);
        assert_eq!(next.easiness_factor, 2.6);
    }
}

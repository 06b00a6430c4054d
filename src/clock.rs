//! Time sources for the scheduler.
//!
//! The scheduler never reads wall-clock time directly. It asks a [`Clock`],
//! so hosts can simulate days and tests can pin "now".

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};
use std::cell::Cell;

pub trait Clock {
    /// Current local timestamp
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Local wall-clock time
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Settable clock that only moves when told to.
#[derive(Clone, Debug)]
pub struct SimulatedClock {
    current: Cell<NaiveDateTime>,
}

impl SimulatedClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.current.set(now);
    }

    /// Advances current time by 24 hours
    pub fn advance_day(&self) -> bool {
        self.advance_days(1)
    }

    /// Moves the clock by `days`. Returns false, leaving the clock unchanged,
    /// when the result falls outside the calendar.
    pub fn advance_days(&self, days: i64) -> bool {
        match TimeDelta::try_days(days)
            .and_then(|delta| self.current.get().checked_add_signed(delta))
        {
            Some(next) => {
                self.current.set(next);
                true
            }
            None => false,
        }
    }
}

impl Clock for SimulatedClock {
    fn now(&self) -> NaiveDateTime {
        self.current.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

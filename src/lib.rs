pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod scheduler;

pub use clock::{Clock, SimulatedClock, SystemClock};
pub use config::SchedulerConfig;
pub use error::{Result, ScheduleError};
pub use models::{Grade, ItemId, ReviewItem, ReviewUpdate};
pub use scheduler::{BatchOutcome, ItemUpdateSummary, Scheduler, StudyStatistics};

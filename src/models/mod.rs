pub mod grade;
pub mod review_item;
pub mod sm2;

pub use grade::Grade;
pub use review_item::{ItemId, ReviewItem, ReviewUpdate};

//! Recall quality supplied by the learner after attempting an item.
use crate::error::{Result, ScheduleError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grade in 1..=5 (1 = no recall, 5 = perfect recall)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "u8")]
pub struct Grade(u8);

impl Grade {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    /// Lowest grade that counts as a successful recall
    pub const PASSING: u8 = 3;

    pub fn new(value: i32) -> Result<Self> {
        if (i32::from(Self::MIN)..=i32::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ScheduleError::InvalidGrade(value))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_passing(self) -> bool {
        self.0 >= Self::PASSING
    }
}

impl TryFrom<i32> for Grade {
    type Error = ScheduleError;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Grade> for u8 {
    fn from(grade: Grade) -> u8 {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_one_through_five() {
        for value in 1..=5 {
            assert_eq!(Grade::new(value).unwrap().value() as i32, value);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        for value in [-1, 0, 6, 9, i32::MAX] {
            assert!(matches!(
                Grade::new(value),
                Err(ScheduleError::InvalidGrade(v)) if v == value
            ));
        }
    }

    #[test]
    fn test_passing_threshold() {
        assert!(!Grade::new(2).unwrap().is_passing());
        assert!(Grade::new(3).unwrap().is_passing());
    }

    #[test]
    fn test_serde_validates() {
        let grade: Grade = serde_json::from_str("4").unwrap();
        assert_eq!(grade.value(), 4);
        assert_eq!(serde_json::to_string(&grade).unwrap(), "4");
        assert!(serde_json::from_str::<Grade>("7").is_err());
    }
}

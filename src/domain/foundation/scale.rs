//! ScaleRating value object for 1-5 slider questions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A respondent-selected point on a 1 (lowest) to 5 (highest) scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ScaleRating {
    One = 1,
    Two = 2,
    #[default]
    Three = 3,
    Four = 4,
    Five = 5,
}

/// Lower bound of the scale.
pub const SCALE_MIN: u8 = 1;

/// Upper bound of the scale.
pub const SCALE_MAX: u8 = 5;

impl ScaleRating {
    /// All ratings in ascending order.
    pub const ALL: [ScaleRating; 5] = [
        ScaleRating::One,
        ScaleRating::Two,
        ScaleRating::Three,
        ScaleRating::Four,
        ScaleRating::Five,
    ];

    /// Creates a ScaleRating from an integer, returning error if out of range.
    pub fn try_from_i64(step: &'static str, value: i64) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(ScaleRating::One),
            2 => Ok(ScaleRating::Two),
            3 => Ok(ScaleRating::Three),
            4 => Ok(ScaleRating::Four),
            5 => Ok(ScaleRating::Five),
            _ => Err(ValidationError::OutOfRange {
                step,
                min: SCALE_MIN,
                max: SCALE_MAX,
                actual: value,
            }),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for ScaleRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

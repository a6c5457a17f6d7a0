// CreatorScope - core/range.rs
//
// Closed numeric ranges and follower-count normalisation.
//
// The followers range is expressed in thousands of followers. Every comparison
// against it goes through `followers_in_thousands` so raw counts are never
// compared against a thousands-scaled bound.

use crate::util::constants::FOLLOWERS_UNIT;
use crate::util::error::FilterError;
use serde::{Deserialize, Serialize};

/// Convert a raw follower count into thousands. Absent counts are zero.
pub fn followers_in_thousands(raw_followers: Option<f64>) -> f64 {
    raw_followers.unwrap_or(0.0) / FOLLOWERS_UNIT
}

/// Inclusive interval `[min, max]`.
///
/// Fields are private so the `min <= max` invariant holds for every value;
/// construct with [`NumericRange::new`]. Serialised as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct NumericRange {
    min: f64,
    max: f64,
}

impl NumericRange {
    /// Build a range, rejecting NaN bounds and inverted intervals.
    pub fn new(min: f64, max: f64) -> Result<Self, FilterError> {
        if min.is_nan() {
            return Err(FilterError::NotANumber { bound: "lower" });
        }
        if max.is_nan() {
            return Err(FilterError::NotANumber { bound: "upper" });
        }
        if min > max {
            return Err(FilterError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Range from zero to the largest finite value. Admits every non-negative
    /// number, which is every price and follower count.
    pub fn full() -> Self {
        Self {
            min: 0.0,
            max: f64::MAX,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// True when this range admits at least everything `other` admits.
    pub fn covers(&self, other: &NumericRange) -> bool {
        self.min <= other.min && self.max >= other.max
    }
}

impl TryFrom<[f64; 2]> for NumericRange {
    type Error = FilterError;

    fn try_from([min, max]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<NumericRange> for [f64; 2] {
    fn from(range: NumericRange) -> Self {
        [range.min, range.max]
    }
}

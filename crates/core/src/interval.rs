use std::fmt;

use thiserror::Error;

/// Errors that can occur when creating an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint: {value}")]
    NonFinite { value: f64 },
}

/// A closed interval `[low, high]` with finite, ordered endpoints.
///
/// An interval may be degenerate (`low == high`), which represents a single
/// point such as an exact zero found while scanning.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Creates an interval, ordering the endpoints if they are reversed.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::NonFinite` if either endpoint is `NaN` or infinite.
    pub fn new(a: f64, b: f64) -> Result<Self, IntervalError> {
        if !a.is_finite() {
            return Err(IntervalError::NonFinite { value: a });
        }
        if !b.is_finite() {
            return Err(IntervalError::NonFinite { value: b });
        }

        if a <= b {
            Ok(Self { low: a, high: b })
        } else {
            Ok(Self { low: b, high: a })
        }
    }

    /// Creates the degenerate interval `[x, x]`.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::NonFinite` if `x` is `NaN` or infinite.
    pub fn point(x: f64) -> Result<Self, IntervalError> {
        Self::new(x, x)
    }

    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns the endpoints as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.low, self.high]
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the midpoint of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    /// Returns true if the interval is a single point.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from([a, b]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(a, b)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

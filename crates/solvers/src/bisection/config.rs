use crate::{ConfigError, Criterion};

/// Configuration for the bisection solver.
///
/// There is no iteration cap: the loop bound is computed from the bracket
/// width and `tol`, see [`iteration_bound`](super::iteration_bound).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub tol: f64,
    pub criterion: Criterion,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            criterion: Criterion::Either,
        }
    }
}

impl Config {
    /// Creates a config with the given tolerance and the default criterion.
    #[must_use]
    pub fn with_tol(tol: f64) -> Self {
        Self {
            tol,
            ..Self::default()
        }
    }

    /// Validates that the tolerance is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` is non-positive or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        Ok(())
    }
}

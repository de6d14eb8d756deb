use crate::{ConfigError, Criterion};

/// Configuration for the regula falsi solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub tol: f64,
    pub max_iters: usize,
    pub criterion: Criterion,

    /// Smallest `|f(high) - f(low)|` accepted as a secant slope.
    pub slope_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iters: 50,
            criterion: Criterion::Residual,
            slope_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a config with the given tolerance and defaults for the rest.
    #[must_use]
    pub fn with_tol(tol: f64) -> Self {
        Self {
            tol,
            ..Self::default()
        }
    }

    /// Validates the config.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` or `slope_tol` is non-positive or
    /// non-finite, or if `max_iters` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !self.slope_tol.is_finite() || self.slope_tol <= 0.0 {
            return Err(ConfigError::SlopeTol);
        }
        Ok(())
    }
}

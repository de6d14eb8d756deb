use crate::ConfigError;

use super::AitkenWindow;

/// Configuration for fixed-point iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub tol: f64,
    pub max_iters: usize,

    /// Apply Aitken's Δ² extrapolation once `window` has enough history.
    pub aitken: bool,

    pub window: AitkenWindow,

    /// Smallest Δ² denominator magnitude for which an estimate is used.
    pub aitken_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iters: 100,
            aitken: false,
            window: AitkenWindow::Consecutive,
            aitken_tol: 1e-12,
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

    /// Returns this config with Aitken acceleration turned on.
    #[must_use]
    pub fn accelerated(self) -> Self {
        Self {
            aitken: true,
            ..self
        }
    }

    /// Validates the config.
    ///
    /// # Errors
    ///
    /// Returns an error if `tol` or `aitken_tol` is non-positive or
    /// non-finite, or if `max_iters` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !self.aitken_tol.is_finite() || self.aitken_tol <= 0.0 {
            return Err(ConfigError::AitkenTol);
        }
        Ok(())
    }
}

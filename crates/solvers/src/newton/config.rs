use crate::ConfigError;

/// Configuration for the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Convergence threshold on `|x_next - x|`.
    pub tol: f64,
    pub max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iters: 20,
        }
    }
}

impl Config {
    /// Creates a config with the given tolerance and the default iteration cap.
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
    /// Returns an error if `tol` is non-positive or non-finite, or if
    /// `max_iters` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            return Err(ConfigError::Tol);
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(())
    }
}

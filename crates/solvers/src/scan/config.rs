use thiserror::Error;

/// Configuration for the bracket scanner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    step: f64,
    zero_tol: f64,
    decimals: u8,
}

/// Errors that can occur when building a scanner config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step must be finite and positive")]
    Step,

    #[error("zero_tol must be finite and positive")]
    ZeroTol,

    #[error("decimals must be at most {max}", max = Config::MAX_DECIMALS)]
    Decimals,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(0.1).unwrap()
    }
}

impl Config {
    /// Largest supported rounding precision for exact roots.
    pub const MAX_DECIMALS: u8 = 15;

    /// Creates a config with the given sample step, a zero tolerance of
    /// `1e-8`, and exact roots rounded to 6 decimals.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is non-positive or non-finite.
    pub fn new(step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }

        Ok(Self {
            step,
            zero_tol: 1e-8,
            decimals: 6,
        })
    }

    /// Sets the magnitude below which a sample counts as an exact root.
    ///
    /// # Errors
    ///
    /// Returns an error if `zero_tol` is non-positive or non-finite.
    pub fn with_zero_tol(self, zero_tol: f64) -> Result<Self, ConfigError> {
        if !zero_tol.is_finite() || zero_tol <= 0.0 {
            return Err(ConfigError::ZeroTol);
        }
        Ok(Self { zero_tol, ..self })
    }

    /// Sets the number of decimals exact roots are rounded to before
    /// deduplication.
    ///
    /// # Errors
    ///
    /// Returns an error if `decimals` exceeds [`Self::MAX_DECIMALS`].
    pub fn with_decimals(self, decimals: u8) -> Result<Self, ConfigError> {
        if decimals > Self::MAX_DECIMALS {
            return Err(ConfigError::Decimals);
        }
        Ok(Self { decimals, ..self })
    }

    /// Returns the distance between samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the exact-root threshold on `|f(x)|`.
    #[must_use]
    pub fn zero_tol(&self) -> f64 {
        self.zero_tol
    }

    /// Returns the rounding precision for exact roots.
    #[must_use]
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Rounds `x` to the configured number of decimals.
    ///
    /// Negative zero is normalized to zero.
    pub(crate) fn round(&self, x: f64) -> f64 {
        let scale = 10_f64.powi(i32::from(self.decimals));
        let scaled = x * scale;
        if !scaled.is_finite() {
            // Already coarser than the requested precision.
            return x;
        }
        scaled.round() / scale + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_samples_every_tenth() {
        let config = Config::default();
        assert_relative_eq!(config.step(), 0.1);
        assert_relative_eq!(config.zero_tol(), 1e-8);
        assert_eq!(config.decimals(), 6);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(Config::new(0.0), Err(ConfigError::Step));
        assert_eq!(Config::new(-0.5), Err(ConfigError::Step));
        assert_eq!(Config::new(f64::NAN), Err(ConfigError::Step));

        let config = Config::default();
        assert_eq!(config.with_zero_tol(0.0), Err(ConfigError::ZeroTol));
        assert_eq!(config.with_decimals(16), Err(ConfigError::Decimals));
    }

    #[test]
    fn rounds_and_normalizes_sign() {
        let config = Config::default();
        assert_relative_eq!(config.round(1.000_000_000_000_000_4), 1.0);
        assert_relative_eq!(config.round(0.123_456_7), 0.123_457);
        assert!(config.round(-1e-12).is_sign_positive());

        let coarse = config.with_decimals(1).expect("valid decimals");
        assert_relative_eq!(coarse.round(-2.04), -2.0);
    }

    #[test]
    fn rounding_huge_values_keeps_them_finite() {
        let config = Config::default();
        assert_eq!(config.round(1e303), 1e303);
        assert_eq!(config.round(-f64::MAX), -f64::MAX);
    }
}

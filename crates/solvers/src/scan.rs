//! Fixed-step discovery of sign-change brackets and exact roots.
//!
//! The scanner samples `f` at `low + k·step` across a domain and reports:
//!
//! - every sample where `|f(x)|` is below the zero tolerance, as an exact root
//!   rounded to a fixed number of decimals and deduplicated;
//! - every pair of adjacent defined samples, neither an exact root, whose
//!   values have opposite signs, as a bracket `[x1, x2]`.
//!
//! Undefined samples break the chain: no bracket is reported across them.
//!
//! # Limitations
//!
//! Scanning is a heuristic. An even number of roots between two samples
//! leaves no sign change and is invisible, and a pole between two samples
//! looks like a root. Choose `step` from the expected root spacing.

mod config;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};

use std::collections::HashSet;

use rootsweep_core::{Function, Interval};
use thiserror::Error;

/// The default scan domain, `[-10, 10]`.
pub const DEFAULT_DOMAIN: [f64; 2] = [-10.0, 10.0];

/// Largest number of samples a single scan will take.
pub const MAX_SAMPLES: usize = 10_000_000;

/// Errors that can occur when scanning a domain.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ScanError {
    #[error("scan domain is a single point: {x}")]
    DegenerateDomain { x: f64 },

    #[error("scan would need {samples} samples, more than the limit of {max}", max = MAX_SAMPLES)]
    TooManySamples { samples: f64 },
}

/// What a scan found.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scan {
    /// Sign-change brackets, in scan order.
    pub intervals: Vec<Interval>,

    /// Rounded exact roots, in scan order, without duplicates.
    pub exact_roots: Vec<f64>,
}

impl Scan {
    /// Returns true if the scan found neither brackets nor exact roots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty() && self.exact_roots.is_empty()
    }
}

/// Scans `domain` for sign changes and exact roots of `f`.
///
/// Finding nothing is not an error: the returned [`Scan`] is empty.
///
/// # Errors
///
/// Returns an error if `domain` has zero width or would need more than
/// [`MAX_SAMPLES`] samples.
pub fn scan<F>(f: &F, domain: Interval, config: &Config) -> Result<Scan, ScanError>
where
    F: Function + ?Sized,
{
    if domain.is_degenerate() {
        return Err(ScanError::DegenerateDomain { x: domain.low() });
    }

    // The small allowance keeps `high` itself when the width is a multiple
    // of `step` up to rounding.
    let last = (domain.width() / config.step() + 1e-9).floor();
    if last >= MAX_SAMPLES as f64 {
        return Err(ScanError::TooManySamples { samples: last + 1.0 });
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let last = last as usize;

    let mut found = Scan::default();
    let mut seen = HashSet::new();
    let mut previous: Option<(f64, f64)> = None;

    for k in 0..=last {
        #[allow(clippy::cast_precision_loss)]
        let x = (domain.low() + k as f64 * config.step()).min(domain.high());

        let Some(fx) = f.evaluate(x).value() else {
            previous = None;
            continue;
        };

        if fx.abs() < config.zero_tol() {
            let root = config.round(x);
            if seen.insert(root.to_bits()) {
                found.exact_roots.push(root);
            }
            previous = None;
            continue;
        }

        if let Some((x_prev, f_prev)) = previous
            && f_prev * fx < 0.0
            && let Ok(bracket) = Interval::new(x_prev, x)
        {
            found.intervals.push(bracket);
        }
        previous = Some((x, fx));
    }

    Ok(found)
}

/// Which three iterates feed each Aitken estimate.
///
/// Both windows end in `g(x_i)`, the value the plain iteration would step to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AitkenWindow {
    /// `(x_{i-1}, x_i, g(x_i))`: three consecutive terms of the sequence,
    /// available from the second iteration on.
    #[default]
    Consecutive,

    /// `(x_{i-2}, x_{i-1}, g(x_i))`: skips the current iterate, available
    /// from the third iteration on.
    ///
    /// The terms are not consecutive, so the estimate is not exact for
    /// geometric sequences and can converge more slowly than plain
    /// iteration.
    Lagged,
}

impl AitkenWindow {
    /// Returns the estimate for this window, if enough history exists.
    pub(crate) fn estimate(
        self,
        earlier: Option<f64>,
        previous: Option<f64>,
        x: f64,
        gx: f64,
        denom_tol: f64,
    ) -> Option<f64> {
        match self {
            Self::Consecutive => previous.and_then(|x0| extrapolate(x0, x, gx, denom_tol)),
            Self::Lagged => earlier
                .zip(previous)
                .and_then(|(x0, x1)| extrapolate(x0, x1, gx, denom_tol)),
        }
    }
}

/// Aitken's Δ² estimate of the limit of three consecutive iterates.
///
/// Computes `x2 - (x2 - x1)² / (x2 - 2·x1 + x0)`. Returns `None` when the
/// denominator magnitude is below `denom_tol` or the estimate is not finite.
#[must_use]
pub fn extrapolate(x0: f64, x1: f64, x2: f64, denom_tol: f64) -> Option<f64> {
    let denom = x2 - 2.0 * x1 + x0;
    if denom.abs() < denom_tol {
        return None;
    }

    let estimate = x2 - (x2 - x1).powi(2) / denom;
    estimate.is_finite().then_some(estimate)
}

/// One iteration of a solver run.
///
/// Records are appended before the termination check, so a run's trace
/// always holds exactly one record per counted iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Method-specific state at this iteration.
    pub step: Step,

    /// Error estimate for this iteration.
    ///
    /// - Bisection: `|mid - previous mid|`, or half the bracket width on the
    ///   first iteration.
    /// - Regula falsi: `|f(xi)|`.
    /// - Newton-Raphson and fixed point: `|x_next - x|`.
    pub error: f64,
}

/// Solver state captured in an [`IterationRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// A bracketing step: the bracket before the update and its new iterate.
    Bracket { low: f64, high: f64, x: f64, fx: f64 },

    /// A Newton-Raphson step from `x` to `next`.
    Newton { x: f64, fx: f64, dfx: f64, next: f64 },

    /// A fixed-point step, with the Aitken estimate when one was accepted.
    FixedPoint { x: f64, gx: f64, aitken: Option<f64> },
}

impl IterationRecord {
    /// Returns the point evaluated at this iteration.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self.step {
            Step::Bracket { x, .. } | Step::Newton { x, .. } | Step::FixedPoint { x, .. } => x,
        }
    }

    /// Returns the residual at [`x`](Self::x).
    ///
    /// For fixed-point steps this is `x - g(x)`, which equals `f(x)` when
    /// `g(x) = x - f(x)`.
    #[must_use]
    pub fn residual(&self) -> f64 {
        match self.step {
            Step::Bracket { fx, .. } | Step::Newton { fx, .. } => fx,
            Step::FixedPoint { x, gx, .. } => x - gx,
        }
    }
}

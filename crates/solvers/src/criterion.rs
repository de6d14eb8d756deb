/// Termination test for the bracketing solvers.
///
/// `Residual` stops when `|f(x)| < tol`. `Step` stops when consecutive
/// iterates are closer than `tol`, which needs at least two iterates. `Either`
/// stops on whichever comes first. An exact zero always stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Criterion {
    Residual,
    Step,
    #[default]
    Either,
}

impl Criterion {
    /// Returns true if an iterate with residual `fx` and distance `step` from
    /// the previous iterate (if any) meets the criterion.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_met(self, fx: f64, step: Option<f64>, tol: f64) -> bool {
        let residual_met = fx.abs() < tol;
        let step_met = step.is_some_and(|step| step < tol);

        match self {
            Self::Residual => residual_met,
            Self::Step => step_met || fx == 0.0,
            Self::Either => residual_met || step_met,
        }
    }
}

use std::fmt;

use rootsweep_core::Interval;

use crate::IterationRecord;

/// The root finding methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Bisection,
    RegulaFalsi,
    NewtonRaphson,
    FixedPoint,
}

impl Method {
    /// All methods, in declaration order.
    pub const ALL: [Method; 4] = [
        Method::Bisection,
        Method::RegulaFalsi,
        Method::NewtonRaphson,
        Method::FixedPoint,
    ];
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bisection => "bisection",
            Self::RegulaFalsi => "regula falsi",
            Self::NewtonRaphson => "Newton-Raphson",
            Self::FixedPoint => "fixed-point iteration",
        };
        f.write_str(name)
    }
}

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a solver run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootResult {
    /// Root estimate.
    pub root: f64,

    /// Iteration count when the solver finished.
    pub iterations: usize,

    /// The bracket the solver worked on, or `[x0, x0]` for seeded runs.
    pub interval: Interval,

    /// Final solver status.
    pub status: Status,

    /// The method that produced this result.
    pub method: Method,

    /// One record per iteration.
    pub trace: Vec<IterationRecord>,
}

impl RootResult {
    /// Creates a zero-iteration converged result at `root`.
    pub(crate) fn immediate(method: Method, interval: Interval, root: f64) -> Self {
        Self {
            root,
            iterations: 0,
            interval,
            status: Status::Converged,
            method,
            trace: Vec::new(),
        }
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }
}

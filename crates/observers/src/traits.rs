//! Capability traits for cross-solver observers.
//!
//! These traits abstract over event and action types so an observer can be
//! written once and used with any solver whose types implement them.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that carry a 1-based iteration counter
//! - [`HasIterate`]: events that carry the point evaluated
//! - [`HasResidual`]: events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootsweep_core::Observer;
//! use rootsweep_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use rootsweep_solvers::{Action, Event};

/// An event that carries an iteration counter.
pub trait HasIteration {
    /// Returns the 1-based iteration this event reports.
    fn iteration(&self) -> usize;
}

/// An event that carries the point evaluated.
pub trait HasIterate {
    /// Returns the point evaluated at this iteration.
    fn iterate(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual at the evaluated point.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIteration for Event<'_> {
    fn iteration(&self) -> usize {
        self.record.iter
    }
}

impl HasIterate for Event<'_> {
    fn iterate(&self) -> f64 {
        self.record.x()
    }
}

impl HasResidual for Event<'_> {
    fn residual(&self) -> f64 {
        self.record.residual()
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

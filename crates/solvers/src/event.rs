use crate::{IterationRecord, Method};

/// Iteration event emitted by every solver.
///
/// The event is emitted after the iteration's record is built and before the
/// termination check, so an observer sees every iteration, including the
/// last one.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The method being run.
    pub method: Method,

    /// The record for this iteration.
    pub record: &'a IterationRecord,
}

/// Control actions supported by the solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the current iterate.
    StopEarly,
}

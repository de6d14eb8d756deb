//! Reusable observers for rootsweep solvers.
//!
//! Every solver in `rootsweep-solvers` reports each iteration as an
//! [`Event`] and accepts an [`Action`] back. The observers here work with any
//! event and action types that implement the capability traits in
//! [`traits`].
//!
//! # Observers
//!
//! - [`LogObserver`]: writes one `log` record per iteration
//! - [`Deadline`]: stops the solver once a wall-clock deadline has passed
//!
//! [`Event`]: rootsweep_solvers::Event
//! [`Action`]: rootsweep_solvers::Action

mod deadline;
mod logging;

pub mod traits;

pub use deadline::Deadline;
pub use logging::LogObserver;

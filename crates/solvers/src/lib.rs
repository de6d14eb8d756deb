//! Bracket scanning and classical root finding for functions of one variable.
//!
//! A [`Function`] is scanned for sign changes with [`scan`], and each
//! bracket it finds is handed to one of four solvers:
//!
//! - [`bisection`]: halves the bracket, with an iteration bound known up front
//! - [`regula_falsi`]: false position by linear interpolation between endpoints
//! - [`newton`]: Newton-Raphson from a Fourier-valid endpoint or a seed
//! - [`fixed_point`]: iteration of `g(x) = x - f(x)`, optionally with Aitken's Δ²
//!
//! [`roots::find_all_roots`] ties the two together. Every solver returns a
//! [`RootResult`] that carries the full iteration trace, and every solver
//! emits one [`Event`] per iteration to an [`Observer`] that may stop it early.
//!
//! [`Function`]: rootsweep_core::Function
//! [`Observer`]: rootsweep_core::Observer

mod bracket;
mod criterion;
mod error;
mod event;
mod record;
mod run;
mod solution;

pub mod bisection;
pub mod descartes;
pub mod fixed_point;
pub mod newton;
pub mod regula_falsi;
pub mod roots;
pub mod scan;

pub use criterion::Criterion;
pub use error::{ConfigError, Error};
pub use event::{Action, Event};
pub use record::{IterationRecord, Step};
pub use solution::{Method, RootResult, Status};

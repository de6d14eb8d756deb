//! Core traits and types for rootsweep.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Evaluation`]: the outcome of evaluating a function at a point, either
//!   a finite value or undefined
//! - [`Function`] and [`Differentiable`]: real functions of one variable,
//!   optionally with first and second derivatives
//! - [`Expression`]: a [`Function`] parsed from text in the variable `x`
//! - [`Interval`]: a closed, finite interval of the real line
//! - [`Observer`]: receives solver events and optionally returns control actions

mod evaluation;
mod expression;
mod function;
mod interval;
mod observer;

pub use evaluation::Evaluation;
pub use expression::{Expression, ExpressionError};
pub use function::{Analytic, Differentiable, FiniteDifference, Function};
pub use interval::{Interval, IntervalError};
pub use observer::Observer;

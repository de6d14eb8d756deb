//! Newton-Raphson iteration.
//!
//! # Starting Point
//!
//! [`Start::Bracket`] picks the starting point with [`fourier_start`]: the
//! first endpoint where `f(x) * f''(x) > 0`. [`Start::Seed`] starts from a
//! caller-supplied point and makes no such guarantee.
//!
//! # Termination
//!
//! The solver stops when `|x_next - x| < tol` and returns `x_next`. A
//! vanishing derivative ends the run with [`Error::ZeroDerivative`], as does a
//! derivative so small that the step overflows.
//!
//! # Observer Events
//!
//! One [`Event`] per Newton step, carrying `x`, `f(x)`, `f'(x)`, and the next
//! iterate.

mod config;
mod fourier;


pub use config::Config;
pub use fourier::fourier_start;

use rootsweep_core::{Differentiable, Interval, Observer};

use crate::{
    Action, Error, Event, Method, RootResult, Status, Step, bracket::resolve_point,
    error::defined, run::Run,
};

/// Where a Newton-Raphson run begins.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Start {
    /// Start from the Fourier-valid endpoint of a bracket.
    Bracket(Interval),

    /// Start from the given point.
    Seed(f64),
}

/// Finds a root of `f` using Newton-Raphson.
///
/// For a degenerate [`Start::Bracket`] the zero-width policy of the
/// bracketing solvers applies. Seeded runs report `[x0, x0]` as their
/// interval.
///
/// # Errors
///
/// Returns an error if the config is invalid, the seed is non-finite, no
/// endpoint satisfies the Fourier condition, the derivative vanishes, or `f`
/// is undefined at an iterate.
pub fn solve<F, Obs>(
    f: &F,
    start: Start,
    config: &Config,
    observer: Obs,
) -> Result<RootResult, Error>
where
    F: Differentiable + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;

    let (interval, mut x) = match start {
        Start::Bracket(interval) if interval.is_degenerate() => {
            return resolve_point(f, interval, config.tol, Method::NewtonRaphson);
        }
        Start::Bracket(interval) => (interval, fourier_start(f, interval)?),
        Start::Seed(x0) => (Interval::point(x0)?, x0),
    };

    let mut run = Run::new(Method::NewtonRaphson, interval, observer);

    for _ in 0..config.max_iters {
        let fx = defined(f.evaluate(x), x)?;
        let dfx = defined(f.first_derivative(x), x)?;

        let next = x - fx / dfx;
        if !next.is_finite() {
            return Err(Error::ZeroDerivative { x });
        }
        let error = (next - x).abs();

        if let Some(Action::StopEarly) = run.push(Step::Newton { x, fx, dfx, next }, error) {
            return Ok(run.finish(next, Status::StoppedByObserver));
        }

        if error < config.tol {
            return Ok(run.finish(next, Status::Converged));
        }

        x = next;
    }

    Ok(run.finish(x, Status::MaxIters))
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, the seed is non-finite, no
/// endpoint satisfies the Fourier condition, the derivative vanishes, or `f`
/// is undefined at an iterate.
pub fn solve_unobserved<F>(f: &F, start: Start, config: &Config) -> Result<RootResult, Error>
where
    F: Differentiable + ?Sized,
{
    solve(f, start, config, ())
}

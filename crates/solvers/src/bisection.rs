//! Bisection on a bracketed interval.
//!
//! # Algorithm
//!
//! Each iteration evaluates the midpoint of the bracket and keeps the half in
//! which `f` still changes sign. The bracket halves every iteration, so the
//! number of iterations needed to reach a width of `tol` is known before the
//! first evaluation; that bound is the loop limit.
//!
//! # Termination
//!
//! Controlled by [`Config::criterion`]: by default the solver stops when
//! `|f(mid)| < tol` or, from the second iteration on, when
//! `|mid - previous mid| < tol`.
//!
//! # Observer Events
//!
//! One [`Event`] per midpoint evaluation. Returning [`Action::StopEarly`]
//! ends the run with [`Status::StoppedByObserver`] at that midpoint.

mod config;


pub use config::Config;

use std::f64::consts::LN_2;

use rootsweep_core::{Function, Interval, Observer};

use crate::{
    Action, Error, Event, Method, RootResult, Status,
    bracket::{Bracket, resolve_point},
    error::defined,
    run::Run,
};

/// Finds a root in `interval` using bisection.
///
/// A zero-width interval succeeds immediately if `|f(x)| < tol` there. An
/// endpoint that already meets the criterion is returned with zero
/// iterations.
///
/// # Errors
///
/// Returns an error if the config is invalid, the endpoints do not bracket a
/// sign change, or `f` is undefined at an evaluated point.
pub fn solve<F, Obs>(
    f: &F,
    interval: Interval,
    config: &Config,
    observer: Obs,
) -> Result<RootResult, Error>
where
    F: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;

    if interval.is_degenerate() {
        return resolve_point(f, interval, config.tol, Method::Bisection);
    }

    let mut bracket = Bracket::evaluate(f, interval)?;
    if let Some(root) = bracket.endpoint_root(config.criterion, config.tol) {
        return Ok(RootResult::immediate(Method::Bisection, interval, root));
    }
    bracket.check_sign()?;

    let max_iters = iteration_bound(interval.width(), config.tol);
    let mut run = Run::new(Method::Bisection, interval, observer);
    let mut previous: Option<f64> = None;
    let mut mid = bracket.midpoint();

    for _ in 0..max_iters {
        mid = bracket.midpoint();
        let f_mid = defined(f.evaluate(mid), mid)?;

        let step = previous.map(|prev| (mid - prev).abs());
        let error = step.unwrap_or(0.5 * bracket.width());

        if let Some(Action::StopEarly) = run.push(bracket.step(mid, f_mid), error) {
            return Ok(run.finish(mid, Status::StoppedByObserver));
        }

        if config.criterion.is_met(f_mid, step, config.tol) {
            return Ok(run.finish(mid, Status::Converged));
        }

        bracket.shrink(mid, f_mid);
        previous = Some(mid);
    }

    Ok(run.finish(mid, Status::MaxIters))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, the endpoints do not bracket a
/// sign change, or `f` is undefined at an evaluated point.
pub fn solve_unobserved<F>(f: &F, interval: Interval, config: &Config) -> Result<RootResult, Error>
where
    F: Function + ?Sized,
{
    solve(f, interval, config, ())
}

/// Returns the number of halvings needed to shrink `width` below `tol`.
///
/// Computes `ceil((ln(width) - ln(tol)) / ln(2))`, and at least one.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn iteration_bound(width: f64, tol: f64) -> usize {
    let bound = ((width.ln() - tol.ln()) / LN_2).ceil();
    if bound.is_finite() && bound >= 1.0 {
        bound as usize
    } else {
        1
    }
}

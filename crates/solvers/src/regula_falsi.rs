//! False position (regula falsi) on a bracketed interval.
//!
//! Each iterate is where the secant through `(low, f(low))` and
//! `(high, f(high))` crosses zero. The bracket is then shrunk to the side that
//! keeps the sign change, exactly as in [`bisection`](crate::bisection).
//!
//! Unlike bisection one endpoint can stay fixed for many iterations, so the
//! run is capped by [`Config::max_iters`] rather than a computed bound. The
//! default criterion is [`Criterion::Residual`](crate::Criterion::Residual).
//!
//! A secant flatter than [`Config::slope_tol`] is reported as
//! [`Error::DegenerateSlope`] before it can produce a non-finite iterate. The
//! slope is checked before the sign test, so `f(low) == f(high)` is always a
//! slope error.

mod config;


pub use config::Config;

use rootsweep_core::{Function, Interval, Observer};

use crate::{
    Action, Error, Event, Method, RootResult, Status,
    bracket::{Bracket, resolve_point},
    error::defined,
    run::Run,
};

/// Finds a root in `interval` using regula falsi.
///
/// # Errors
///
/// Returns an error if the config is invalid, the secant slope vanishes, the
/// endpoints do not bracket a sign change, or `f` is undefined at an
/// evaluated point.
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
        return resolve_point(f, interval, config.tol, Method::RegulaFalsi);
    }

    let mut bracket = Bracket::evaluate(f, interval)?;
    if let Some(root) = bracket.endpoint_root(config.criterion, config.tol) {
        return Ok(RootResult::immediate(Method::RegulaFalsi, interval, root));
    }
    let mut x = bracket.false_position(config.slope_tol)?;
    bracket.check_sign()?;

    let mut run = Run::new(Method::RegulaFalsi, interval, observer);
    let mut previous: Option<f64> = None;

    for _ in 0..config.max_iters {
        x = bracket.false_position(config.slope_tol)?;
        let fx = defined(f.evaluate(x), x)?;

        if let Some(Action::StopEarly) = run.push(bracket.step(x, fx), fx.abs()) {
            return Ok(run.finish(x, Status::StoppedByObserver));
        }

        let step = previous.map(|prev| (x - prev).abs());
        if config.criterion.is_met(fx, step, config.tol) {
            return Ok(run.finish(x, Status::Converged));
        }

        bracket.shrink(x, fx);
        previous = Some(x);
    }

    Ok(run.finish(x, Status::MaxIters))
}

/// Runs regula falsi without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, the secant slope vanishes, the
/// endpoints do not bracket a sign change, or `f` is undefined at an
/// evaluated point.
pub fn solve_unobserved<F>(f: &F, interval: Interval, config: &Config) -> Result<RootResult, Error>
where
    F: Function + ?Sized,
{
    solve(f, interval, config, ())
}

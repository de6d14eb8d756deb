//! Fixed-point iteration with optional Aitken acceleration.
//!
//! [`solve`] looks for a root of `f` by iterating `g(x) = x - f(x)`, see
//! [`FixedPointMap`]. [`iterate`] runs the same loop on any map `g` whose
//! fixed point is wanted directly.
//!
//! # Acceleration
//!
//! With [`Config::aitken`] set, each iteration applies [`extrapolate`] to
//! three values chosen by [`Config::window`]. The default,
//! [`AitkenWindow::Consecutive`], uses the previous iterate, the current
//! iterate, and `g` of the current iterate, starting on the second iteration.
//! [`AitkenWindow::Lagged`] uses the two previous iterates and `g` of the
//! current one, starting on the third. The estimate replaces `g(x)` as the
//! next iterate. It is skipped for that iteration when the Δ² denominator is
//! smaller than [`Config::aitken_tol`].
//!
//! # Termination
//!
//! Converged when `|g(x) - x| < tol`, or when an Aitken estimate lies within
//! `tol` of `x`. Cycling maps, and diverging maps whose iterates stay finite,
//! run to [`Config::max_iters`] and report [`Status::MaxIters`]. A map that
//! overflows is undefined at the overflowing iterate, and the run ends with
//! [`Error::UndefinedEvaluation`].

mod aitken;
mod config;


pub use aitken::{AitkenWindow, extrapolate};
pub use config::Config;

use rootsweep_core::{Evaluation, Function, Interval, Observer};

use crate::{Action, Error, Event, Method, RootResult, Status, Step, error::defined, run::Run};

/// The map `g(x) = x - f(x)`, whose fixed points are the roots of `f`.
#[derive(Debug, Clone, Copy)]
pub struct FixedPointMap<'a, F: ?Sized> {
    f: &'a F,
}

impl<'a, F: Function + ?Sized> FixedPointMap<'a, F> {
    pub fn new(f: &'a F) -> Self {
        Self { f }
    }
}

impl<F: Function + ?Sized> Function for FixedPointMap<'_, F> {
    fn evaluate(&self, x: f64) -> Evaluation {
        match self.f.evaluate(x) {
            Evaluation::Defined(fx) => Evaluation::from_value(x - fx),
            Evaluation::Undefined => Evaluation::Undefined,
        }
    }
}

/// Finds a root of `f` by iterating `g(x) = x - f(x)` from `x0`.
///
/// The result's interval is `[x0, x0]`.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is non-finite, or `f` is
/// undefined at an iterate.
pub fn solve<F, Obs>(f: &F, x0: f64, config: &Config, observer: Obs) -> Result<RootResult, Error>
where
    F: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    iterate(&FixedPointMap::new(f), x0, config, observer)
}

/// Runs fixed-point iteration on `f` without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is non-finite, or `f` is
/// undefined at an iterate.
pub fn solve_unobserved<F>(f: &F, x0: f64, config: &Config) -> Result<RootResult, Error>
where
    F: Function + ?Sized,
{
    solve(f, x0, config, ())
}

/// Finds a fixed point `x = g(x)` by iterating `g` from `x0`.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is non-finite, or `g` is
/// undefined at an iterate.
pub fn iterate<G, Obs>(g: &G, x0: f64, config: &Config, observer: Obs) -> Result<RootResult, Error>
where
    G: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    config.validate()?;

    let mut run = Run::new(Method::FixedPoint, Interval::point(x0)?, observer);
    let mut earlier: Option<f64> = None;
    let mut previous: Option<f64> = None;
    let mut x = x0;

    for _ in 0..config.max_iters {
        let gx = defined(g.evaluate(x), x)?;

        let aitken = if config.aitken {
            config
                .window
                .estimate(earlier, previous, x, gx, config.aitken_tol)
        } else {
            None
        };
        let next = aitken.unwrap_or(gx);

        let step = Step::FixedPoint { x, gx, aitken };
        if let Some(Action::StopEarly) = run.push(step, (next - x).abs()) {
            return Ok(run.finish(next, Status::StoppedByObserver));
        }

        let settled = (gx - x).abs() < config.tol
            || aitken.is_some_and(|estimate| (estimate - x).abs() < config.tol);
        if settled {
            return Ok(run.finish(next, Status::Converged));
        }

        earlier = previous;
        previous = Some(x);
        x = next;
    }

    Ok(run.finish(x, Status::MaxIters))
}

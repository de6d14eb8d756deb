//! Finding every root in a domain.
//!
//! [`find_all_roots`] scans the domain once, runs one [`Solver`] on every
//! bracket the scan found, and adds a zero-iteration result for every exact
//! root. Results come back in scan order.
//!
//! A solver error only drops that bracket: it is logged at `warn` level and
//! the remaining brackets are still solved. Results that ran out of
//! iterations are kept, logged at `info` level, and left for the caller to
//! judge through [`RootResult::status`].
//!
//! No deduplication happens beyond the scanner's own: two brackets that
//! converge to the same root yield two results.

use rootsweep_core::{Differentiable, Expression, Interval, Observer};

use crate::{
    Action, Error, Event, Method, RootResult, Status, bisection, fixed_point, newton,
    regula_falsi,
    scan::{self, Scan, ScanError},
};

/// A root finding method together with its configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Solver {
    Bisection(bisection::Config),
    RegulaFalsi(regula_falsi::Config),

    /// Starts each bracket from its Fourier-valid endpoint.
    NewtonRaphson(newton::Config),

    /// Seeds each bracket at its midpoint.
    FixedPoint(fixed_point::Config),
}

impl Solver {
    /// Creates a solver for `method` with tolerance `tol` and default settings
    /// otherwise.
    #[must_use]
    pub fn new(method: Method, tol: f64) -> Self {
        match method {
            Method::Bisection => Self::Bisection(bisection::Config::with_tol(tol)),
            Method::RegulaFalsi => Self::RegulaFalsi(regula_falsi::Config::with_tol(tol)),
            Method::NewtonRaphson => Self::NewtonRaphson(newton::Config::with_tol(tol)),
            Method::FixedPoint => Self::FixedPoint(fixed_point::Config::with_tol(tol)),
        }
    }

    /// Returns the method this solver runs.
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            Self::Bisection(_) => Method::Bisection,
            Self::RegulaFalsi(_) => Method::RegulaFalsi,
            Self::NewtonRaphson(_) => Method::NewtonRaphson,
            Self::FixedPoint(_) => Method::FixedPoint,
        }
    }

    /// Solves `f` on one bracket.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying solver.
    pub fn solve<F>(&self, f: &F, interval: Interval) -> Result<RootResult, Error>
    where
        F: Differentiable + ?Sized,
    {
        self.solve_observed(f, interval, ())
    }

    /// Solves `f` on one bracket, reporting each iteration to `observer`.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying solver.
    pub fn solve_observed<F, Obs>(
        &self,
        f: &F,
        interval: Interval,
        observer: Obs,
    ) -> Result<RootResult, Error>
    where
        F: Differentiable + ?Sized,
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        match self {
            Self::Bisection(config) => bisection::solve(f, interval, config, observer),
            Self::RegulaFalsi(config) => regula_falsi::solve(f, interval, config, observer),
            Self::NewtonRaphson(config) => {
                newton::solve(f, newton::Start::Bracket(interval), config, observer)
            }
            Self::FixedPoint(config) => {
                fixed_point::solve(f, interval.midpoint(), config, observer)
            }
        }
    }
}

/// Finds every root of `f` that a scan of `domain` reveals.
///
/// # Errors
///
/// Returns an error only if the scan itself fails. Per-bracket solver errors
/// are logged and skipped.
pub fn find_all_roots<F>(
    f: &F,
    domain: Interval,
    scan_config: &scan::Config,
    solver: &Solver,
) -> Result<Vec<RootResult>, ScanError>
where
    F: Differentiable + ?Sized,
{
    let found = scan::scan(f, domain, scan_config)?;
    let solved = found
        .intervals
        .iter()
        .map(|&interval| solve_logged(f, interval, solver))
        .collect();

    Ok(assemble(&found, solved, solver.method()))
}

/// Parses `text` as a function of `x` and finds its roots in `domain`.
///
/// Derivatives for Newton-Raphson come from central differences.
///
/// # Errors
///
/// Returns `Error::InvalidExpression` if `text` does not parse as a function
/// of `x`, or `Error::Scan` if the scan fails.
pub fn find_all_roots_in(
    text: &str,
    domain: Interval,
    scan_config: &scan::Config,
    solver: &Solver,
) -> Result<Vec<RootResult>, Error> {
    let expression = Expression::parse(text)?;
    Ok(find_all_roots(&expression, domain, scan_config, solver)?)
}

/// Like [`find_all_roots`], with brackets solved on the rayon thread pool.
///
/// Returns the same results in the same order.
///
/// # Errors
///
/// Returns an error only if the scan itself fails.
#[cfg(feature = "parallel")]
pub fn find_all_roots_par<F>(
    f: &F,
    domain: Interval,
    scan_config: &scan::Config,
    solver: &Solver,
) -> Result<Vec<RootResult>, ScanError>
where
    F: Differentiable + Sync + ?Sized,
{
    use rayon::prelude::*;

    let found = scan::scan(f, domain, scan_config)?;
    let solved = found
        .intervals
        .par_iter()
        .map(|&interval| solve_logged(f, interval, solver))
        .collect();

    Ok(assemble(&found, solved, solver.method()))
}

fn solve_logged<F>(f: &F, interval: Interval, solver: &Solver) -> Option<RootResult>
where
    F: Differentiable + ?Sized,
{
    let method = solver.method();
    match solver.solve(f, interval) {
        Ok(result) => {
            if result.status != Status::Converged {
                log::info!(
                    "{method} on {interval} stopped after {} iterations without converging",
                    result.iterations
                );
            }
            Some(result)
        }
        Err(error) => {
            log::warn!("{method} failed on {interval}: {error}");
            None
        }
    }
}

/// Merges solved brackets and exact roots, ordered by where the scan found
/// them.
fn assemble(found: &Scan, solved: Vec<Option<RootResult>>, method: Method) -> Vec<RootResult> {
    let brackets = found
        .intervals
        .iter()
        .zip(solved)
        .filter_map(|(interval, result)| Some((interval.low(), result?)));

    let exact = found.exact_roots.iter().filter_map(|&root| {
        let point = Interval::point(root).ok()?;
        Some((root, RootResult::immediate(method, point, root)))
    });

    let mut ordered: Vec<(f64, RootResult)> = brackets.chain(exact).collect();
    ordered.sort_by(|(a, _), (b, _)| a.total_cmp(b));
    ordered.into_iter().map(|(_, result)| result).collect()
}

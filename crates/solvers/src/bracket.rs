use rootsweep_core::{Function, Interval};

use crate::{Criterion, Error, Method, RootResult, Step, error::defined};

/// Current bracket bounds and their function values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bracket {
    low: f64,
    high: f64,
    f_low: f64,
    f_high: f64,
}

impl Bracket {
    /// Evaluates the function at both ends of `interval`.
    ///
    /// # Errors
    ///
    /// Returns `Error::UndefinedEvaluation` if either endpoint is undefined.
    pub(crate) fn evaluate<F>(f: &F, interval: Interval) -> Result<Self, Error>
    where
        F: Function + ?Sized,
    {
        let [low, high] = interval.as_array();
        Ok(Self {
            low,
            high,
            f_low: defined(f.evaluate(low), low)?,
            f_high: defined(f.evaluate(high), high)?,
        })
    }

    /// Returns an endpoint that already meets the criterion, if any.
    pub(crate) fn endpoint_root(&self, criterion: Criterion, tol: f64) -> Option<f64> {
        if criterion.is_met(self.f_low, None, tol) {
            Some(self.low)
        } else if criterion.is_met(self.f_high, None, tol) {
            Some(self.high)
        } else {
            None
        }
    }

    /// Checks that the endpoint values do not share a sign.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSignChange` if `f(low) * f(high) > 0`.
    pub(crate) fn check_sign(&self) -> Result<(), Error> {
        if self.f_low * self.f_high > 0.0 {
            return Err(Error::NoSignChange {
                low: self.low,
                high: self.high,
                f_low: self.f_low,
                f_high: self.f_high,
            });
        }
        Ok(())
    }

    /// Returns the midpoint of the bracket.
    pub(crate) fn midpoint(&self) -> f64 {
        0.5 * (self.low + self.high)
    }

    /// Returns the bracket width.
    pub(crate) fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the false position iterate, the root of the secant through
    /// both endpoints.
    ///
    /// # Errors
    ///
    /// Returns `Error::DegenerateSlope` if `|f(high) - f(low)| < slope_tol`.
    #[allow(clippy::float_cmp)]
    pub(crate) fn false_position(&self, slope_tol: f64) -> Result<f64, Error> {
        let rise = self.f_high - self.f_low;
        if rise.abs() < slope_tol || rise == 0.0 {
            return Err(Error::DegenerateSlope {
                low: self.low,
                high: self.high,
            });
        }
        Ok((self.low * self.f_high - self.high * self.f_low) / rise)
    }

    /// Builds the trace step for a new iterate inside this bracket.
    pub(crate) fn step(&self, x: f64, fx: f64) -> Step {
        Step::Bracket {
            low: self.low,
            high: self.high,
            x,
            fx,
        }
    }

    /// Shrinks the bracket to the half that keeps the sign change.
    ///
    /// If `f(low) * f(x) < 0` the root lies in `[low, x]`, otherwise in `[x, high]`.
    pub(crate) fn shrink(&mut self, x: f64, fx: f64) {
        if self.f_low * fx < 0.0 {
            self.high = x;
            self.f_high = fx;
        } else {
            self.low = x;
            self.f_low = fx;
        }
    }
}

/// Resolves a zero-width interval: a root iff `|f(x)| < tol` there.
///
/// # Errors
///
/// Returns `Error::UndefinedEvaluation` if `f(x)` is undefined, or
/// `Error::DegenerateIntervalNoRoot` if `x` is not a root.
pub(crate) fn resolve_point<F>(
    f: &F,
    interval: Interval,
    tol: f64,
    method: Method,
) -> Result<RootResult, Error>
where
    F: Function + ?Sized,
{
    let x = interval.low();
    let fx = defined(f.evaluate(x), x)?;
    if fx.abs() < tol {
        Ok(RootResult::immediate(method, interval, x))
    } else {
        Err(Error::DegenerateIntervalNoRoot { x, fx })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bracket(low: f64, high: f64, f_low: f64, f_high: f64) -> Bracket {
        Bracket {
            low,
            high,
            f_low,
            f_high,
        }
    }

    #[test]
    fn evaluate_rejects_undefined_endpoint() {
        let interval = Interval::new(-1.0, 1.0).expect("finite endpoints");
        let result = Bracket::evaluate(&|x: f64| x.ln(), interval);
        assert!(matches!(result, Err(Error::UndefinedEvaluation { x }) if x == -1.0));
    }

    #[test]
    fn check_sign_accepts_zero_endpoint() {
        assert!(bracket(0.0, 1.0, 0.0, 2.0).check_sign().is_ok());
        assert!(bracket(0.0, 1.0, -1.0, 2.0).check_sign().is_ok());
        assert!(matches!(
            bracket(0.0, 1.0, 1.0, 2.0).check_sign(),
            Err(Error::NoSignChange { .. })
        ));
    }

    #[test]
    fn endpoint_root_prefers_low() {
        let both = bracket(0.0, 1.0, 1e-9, -1e-9);
        assert_eq!(both.endpoint_root(Criterion::Residual, 1e-6), Some(0.0));

        let high = bracket(0.0, 1.0, 1.0, -1e-9);
        assert_eq!(high.endpoint_root(Criterion::Either, 1e-6), Some(1.0));
        assert_eq!(high.endpoint_root(Criterion::Step, 1e-6), None);
    }

    #[test]
    fn false_position_interpolates() {
        // Secant through (0, -1) and (2, 3) crosses zero at 0.5.
        let x = bracket(0.0, 2.0, -1.0, 3.0)
            .false_position(1e-12)
            .expect("non-degenerate slope");
        assert_relative_eq!(x, 0.5);
    }

    #[test]
    fn false_position_rejects_flat_secant() {
        assert!(matches!(
            bracket(0.0, 2.0, -1.0, -1.0).false_position(1e-12),
            Err(Error::DegenerateSlope { .. })
        ));
    }

    #[test]
    fn shrink_keeps_sign_change() {
        let mut b = bracket(0.0, 2.0, -1.0, 3.0);

        b.shrink(1.0, 0.5);
        assert_relative_eq!(b.low, 0.0);
        assert_relative_eq!(b.high, 1.0);

        b.shrink(0.5, -0.25);
        assert_relative_eq!(b.low, 0.5);
        assert_relative_eq!(b.high, 1.0);
        assert_relative_eq!(b.f_low, -0.25);
        assert_relative_eq!(b.width(), 0.5);
        assert_relative_eq!(b.midpoint(), 0.75);
    }

    #[test]
    fn resolve_point_requires_root() {
        let f = |x: f64| x * x - 4.0;
        let root = Interval::point(2.0).expect("finite point");
        let result = resolve_point(&f, root, 1e-6, Method::Bisection).expect("root at 2");
        assert_eq!(result.iterations, 0);
        assert!(result.trace.is_empty());
        assert_relative_eq!(result.root, 2.0);

        let miss = Interval::point(1.0).expect("finite point");
        assert!(matches!(
            resolve_point(&f, miss, 1e-6, Method::Bisection),
            Err(Error::DegenerateIntervalNoRoot { .. })
        ));
    }
}

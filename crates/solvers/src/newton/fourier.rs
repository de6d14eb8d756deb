use rootsweep_core::{Differentiable, Interval};

use crate::Error;

/// Picks a Newton starting point from the ends of a bracket.
///
/// Returns the first endpoint, `low` before `high`, where the Fourier
/// condition `f(x) * f''(x) > 0` holds. Newton iterates from such a point
/// approach the root monotonically without leaving the bracket, provided `f'`
/// and `f''` keep their signs on it. Endpoints where `f` or `f''` is undefined
/// are skipped.
///
/// # Errors
///
/// Returns `Error::NoValidFourierStart` if neither endpoint qualifies.
pub fn fourier_start<F>(f: &F, interval: Interval) -> Result<f64, Error>
where
    F: Differentiable + ?Sized,
{
    for x in interval.as_array() {
        if let (Some(fx), Some(d2fx)) = (f.evaluate(x).value(), f.second_derivative(x).value())
            && fx * d2fx > 0.0
        {
            return Ok(x);
        }
    }

    Err(Error::NoValidFourierStart {
        low: interval.low(),
        high: interval.high(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootsweep_core::{Analytic, FiniteDifference};

    #[test]
    fn picks_high_for_convex_increasing() {
        let f = Analytic::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, |_: f64| 2.0);
        let interval = Interval::new(0.0, 2.0).expect("finite endpoints");

        assert_relative_eq!(fourier_start(&f, interval).expect("valid start"), 2.0);
    }

    #[test]
    fn prefers_low_when_both_qualify() {
        // f'' > 0 everywhere and f > 0 at both ends of [-3, 3].
        let f = Analytic::new(|x: f64| x * x - 1.0, |x: f64| 2.0 * x, |_: f64| 2.0);
        let interval = Interval::new(-3.0, 3.0).expect("finite endpoints");

        assert_relative_eq!(fourier_start(&f, interval).expect("valid start"), -3.0);
    }

    #[test]
    fn works_with_numeric_derivatives() {
        let f = FiniteDifference::new(|x: f64| x.cos() - x);
        let interval = Interval::new(0.0, 1.0).expect("finite endpoints");

        // f'' = -cos(x) < 0, so the endpoint with f < 0 qualifies.
        assert_relative_eq!(fourier_start(&f, interval).expect("valid start"), 1.0);
    }

    #[test]
    fn rejects_inflection_bracket() {
        let f = Analytic::new(
            |x: f64| x.powi(3) - x,
            |x: f64| 3.0 * x * x - 1.0,
            |x: f64| 6.0 * x,
        );
        let interval = Interval::new(-0.5, 0.5).expect("finite endpoints");

        assert!(matches!(
            fourier_start(&f, interval),
            Err(Error::NoValidFourierStart { low, high }) if low == -0.5 && high == 0.5
        ));
    }

    #[test]
    fn skips_undefined_endpoint() {
        // ln(x) is undefined at 0 and f'' = -1/x² < 0 where f < 0.
        let f = Analytic::new(|x: f64| x.ln(), |x: f64| 1.0 / x, |x: f64| -1.0 / (x * x));
        let interval = Interval::new(0.0, 0.5).expect("finite endpoints");

        assert_relative_eq!(fourier_start(&f, interval).expect("valid start"), 0.5);
    }
}

use crate::Evaluation;

/// A real function of one real variable.
///
/// Closures of type `Fn(f64) -> f64` implement `Function` automatically,
/// with non-finite results reported as [`Evaluation::Undefined`].
pub trait Function {
    /// Evaluates the function at `x`.
    fn evaluate(&self, x: f64) -> Evaluation;
}

/// Blanket implementation for plain closures.
impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, x: f64) -> Evaluation {
        Evaluation::from_value(self(x))
    }
}

/// A [`Function`] that can also evaluate its first and second derivatives.
pub trait Differentiable: Function {
    /// Evaluates `f'(x)`.
    fn first_derivative(&self, x: f64) -> Evaluation;

    /// Evaluates `f''(x)`.
    fn second_derivative(&self, x: f64) -> Evaluation;
}

/// A function bundled with closed-form first and second derivatives.
///
/// # Example
///
/// ```
/// use rootsweep_core::{Analytic, Differentiable, Evaluation, Function};
///
/// let f = Analytic::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, |_: f64| 2.0);
///
/// assert_eq!(f.evaluate(2.0), Evaluation::Defined(2.0));
/// assert_eq!(f.first_derivative(2.0), Evaluation::Defined(4.0));
/// assert_eq!(f.second_derivative(2.0), Evaluation::Defined(2.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Analytic<F, D1, D2> {
    function: F,
    first: D1,
    second: D2,
}

impl<F, D1, D2> Analytic<F, D1, D2>
where
    F: Function,
    D1: Function,
    D2: Function,
{
    /// Bundles a function with its first and second derivatives.
    pub fn new(function: F, first: D1, second: D2) -> Self {
        Self {
            function,
            first,
            second,
        }
    }
}

impl<F: Function, D1, D2> Function for Analytic<F, D1, D2> {
    fn evaluate(&self, x: f64) -> Evaluation {
        self.function.evaluate(x)
    }
}

impl<F, D1, D2> Differentiable for Analytic<F, D1, D2>
where
    F: Function,
    D1: Function,
    D2: Function,
{
    fn first_derivative(&self, x: f64) -> Evaluation {
        self.first.evaluate(x)
    }

    fn second_derivative(&self, x: f64) -> Evaluation {
        self.second.evaluate(x)
    }
}

/// Numeric derivatives of any [`Function`] by central differences.
///
/// Step sizes scale with `max(1, |x|)`: `ε^(1/3)` for the first derivative
/// and `ε^(1/4)` for the second, which balance truncation against rounding.
#[derive(Debug, Clone, Copy)]
pub struct FiniteDifference<F> {
    function: F,
}

impl<F: Function> FiniteDifference<F> {
    /// Wraps a function to give it numeric derivatives.
    pub fn new(function: F) -> Self {
        Self { function }
    }

    /// Returns the wrapped function.
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F: Function> Function for FiniteDifference<F> {
    fn evaluate(&self, x: f64) -> Evaluation {
        self.function.evaluate(x)
    }
}

impl<F: Function> Differentiable for FiniteDifference<F> {
    fn first_derivative(&self, x: f64) -> Evaluation {
        central_first(&self.function, x)
    }

    fn second_derivative(&self, x: f64) -> Evaluation {
        central_second(&self.function, x)
    }
}

/// Central difference approximation of `f'(x)`.
pub(crate) fn central_first<F: Function + ?Sized>(f: &F, x: f64) -> Evaluation {
    let h = f64::EPSILON.cbrt() * x.abs().max(1.0);
    let (Some(forward), Some(backward)) = (f.evaluate(x + h).value(), f.evaluate(x - h).value())
    else {
        return Evaluation::Undefined;
    };
    Evaluation::from_value((forward - backward) / (2.0 * h))
}

/// Central difference approximation of `f''(x)`.
pub(crate) fn central_second<F: Function + ?Sized>(f: &F, x: f64) -> Evaluation {
    let h = f64::EPSILON.powf(0.25) * x.abs().max(1.0);
    let (Some(forward), Some(center), Some(backward)) = (
        f.evaluate(x + h).value(),
        f.evaluate(x).value(),
        f.evaluate(x - h).value(),
    ) else {
        return Evaluation::Undefined;
    };
    Evaluation::from_value((forward - 2.0 * center + backward) / (h * h))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn defined(evaluation: Evaluation) -> f64 {
        evaluation.value().expect("should be defined")
    }

    #[test]
    fn closures_map_non_finite_to_undefined() {
        let ln = |x: f64| x.ln();
        assert_eq!(ln.evaluate(-1.0), Evaluation::Undefined);
        assert_eq!(ln.evaluate(0.0), Evaluation::Undefined);
        assert_relative_eq!(defined(ln.evaluate(1.0)), 0.0);
    }

    #[test]
    fn finite_difference_of_cubic() {
        // f(x) = x³ - x, f'(x) = 3x² - 1, f''(x) = 6x
        let f = FiniteDifference::new(|x: f64| x.powi(3) - x);

        assert_relative_eq!(defined(f.first_derivative(2.0)), 11.0, epsilon = 1e-6);
        assert_relative_eq!(defined(f.second_derivative(2.0)), 12.0, epsilon = 1e-4);
        assert_relative_eq!(defined(f.first_derivative(0.0)), -1.0, epsilon = 1e-6);
    }

    #[test]
    fn finite_difference_undefined_near_singularity() {
        let f = FiniteDifference::new(|x: f64| x.sqrt());
        assert_eq!(f.first_derivative(0.0), Evaluation::Undefined);
        assert_eq!(f.second_derivative(-1.0), Evaluation::Undefined);
    }

    #[test]
    fn analytic_uses_supplied_derivatives() {
        let f = Analytic::new(|x: f64| x.sin(), |x: f64| x.cos(), |x: f64| -x.sin());

        assert_relative_eq!(defined(f.evaluate(0.5)), 0.5_f64.sin());
        assert_relative_eq!(defined(f.first_derivative(0.5)), 0.5_f64.cos());
        assert_relative_eq!(defined(f.second_derivative(0.5)), -(0.5_f64.sin()));
    }
}

//! Polynomials and Descartes' rule of signs.
//!
//! The number of positive real roots of a polynomial, counted with
//! multiplicity, is at most the number of sign changes in its coefficient
//! sequence, and differs from it by an even number. Applying the rule to
//! `p(-x)` bounds the negative roots. Zero coefficients are skipped when
//! counting.
//!
//! These bounds tell a caller how many roots a scan could possibly find, and
//! so whether a finer step is worth trying.

use rootsweep_core::{Differentiable, Evaluation, Function};

/// A real polynomial, stored as coefficients from the highest degree down.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from coefficients, highest degree first.
    ///
    /// Leading zeros are dropped, so `[0, 1, -2]` is `x - 2`. An empty or
    /// all-zero sequence is the zero polynomial.
    ///
    /// ```
    /// use rootsweep_solvers::descartes::Polynomial;
    ///
    /// // x³ - x - 2
    /// let p = Polynomial::new([1.0, 0.0, -1.0, -2.0]);
    /// assert_eq!(p.degree(), Some(3));
    /// assert_eq!(p.max_positive_roots(), 1);
    /// assert_eq!(p.max_negative_roots(), 2);
    /// ```
    pub fn new(coefficients: impl Into<Vec<f64>>) -> Self {
        let mut coefficients = coefficients.into();
        let leading = coefficients
            .iter()
            .position(|&c| c != 0.0)
            .unwrap_or(coefficients.len());
        coefficients.drain(..leading);
        Self { coefficients }
    }

    /// Returns the coefficients, highest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Evaluates the polynomial at `x` with Horner's scheme.
    #[must_use]
    pub fn value(&self, x: f64) -> f64 {
        horner(self.coefficients.iter().copied(), x)
    }

    /// Returns the derivative polynomial.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(derivative_terms(&self.coefficients).collect::<Vec<_>>())
    }

    /// Returns the upper bound on positive real roots.
    #[must_use]
    pub fn max_positive_roots(&self) -> usize {
        sign_changes(self.coefficients.iter().copied())
    }

    /// Returns the upper bound on negative real roots, from `p(-x)`.
    #[must_use]
    pub fn max_negative_roots(&self) -> usize {
        let degree = self.coefficients.len().saturating_sub(1);
        let reflected = self
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| if (degree - i) % 2 == 1 { -c } else { c });
        sign_changes(reflected)
    }
}

impl Function for Polynomial {
    fn evaluate(&self, x: f64) -> Evaluation {
        Evaluation::from_value(self.value(x))
    }
}

impl Differentiable for Polynomial {
    fn first_derivative(&self, x: f64) -> Evaluation {
        Evaluation::from_value(horner(derivative_terms(&self.coefficients), x))
    }

    fn second_derivative(&self, x: f64) -> Evaluation {
        let first = self.derivative();
        Evaluation::from_value(horner(derivative_terms(&first.coefficients), x))
    }
}

fn horner(coefficients: impl Iterator<Item = f64>, x: f64) -> f64 {
    coefficients.fold(0.0, |acc, c| acc * x + c)
}

/// Coefficients of the derivative, highest degree first.
#[allow(clippy::cast_precision_loss)]
fn derivative_terms(coefficients: &[f64]) -> impl Iterator<Item = f64> + '_ {
    let degree = coefficients.len().saturating_sub(1);
    coefficients[..degree]
        .iter()
        .enumerate()
        .map(move |(i, &c)| c * (degree - i) as f64)
}

fn sign_changes(coefficients: impl Iterator<Item = f64>) -> usize {
    let mut previous: Option<bool> = None;
    let mut changes = 0;
    for c in coefficients.filter(|&c| c != 0.0) {
        let positive = c > 0.0;
        if previous.is_some_and(|p| p != positive) {
            changes += 1;
        }
        previous = Some(positive);
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootsweep_core::Interval;

    use crate::{Status, newton};

    #[test]
    fn drops_leading_zeros() {
        let p = Polynomial::new(vec![0.0, 0.0, 1.0, -2.0]);
        assert_eq!(p.coefficients(), &[1.0, -2.0]);
        assert_eq!(p.degree(), Some(1));

        let zero = Polynomial::new([0.0, 0.0]);
        assert_eq!(zero.degree(), None);
        assert_relative_eq!(zero.value(3.0), 0.0);
    }

    #[test]
    fn evaluates_with_derivatives() {
        // 2x³ - 3x + 1
        let p = Polynomial::new([2.0, 0.0, -3.0, 1.0]);

        assert_relative_eq!(p.value(2.0), 11.0);
        assert_eq!(p.first_derivative(2.0), Evaluation::Defined(21.0));
        assert_eq!(p.second_derivative(2.0), Evaluation::Defined(24.0));
        assert_eq!(p.derivative(), Polynomial::new([6.0, 0.0, -3.0]));

        let constant = Polynomial::new([5.0]);
        assert_eq!(constant.first_derivative(1.0), Evaluation::Defined(0.0));
        assert_eq!(constant.second_derivative(1.0), Evaluation::Defined(0.0));
    }

    #[test]
    fn counts_sign_changes() {
        // (x - 1)(x - 2)(x + 3) = x³ - 7x + 6
        let p = Polynomial::new([1.0, 0.0, -7.0, 6.0]);
        assert_eq!(p.max_positive_roots(), 2);
        assert_eq!(p.max_negative_roots(), 1);

        // x² + 1 has no real roots at all.
        let q = Polynomial::new([1.0, 0.0, 1.0]);
        assert_eq!(q.max_positive_roots(), 0);
        assert_eq!(q.max_negative_roots(), 0);
    }

    #[test]
    fn zero_coefficients_do_not_hide_changes() {
        // x⁴ - 1: the zeros between 1 and -1 are skipped.
        let p = Polynomial::new([1.0, 0.0, 0.0, 0.0, -1.0]);
        assert_eq!(p.max_positive_roots(), 1);
        assert_eq!(p.max_negative_roots(), 1);
    }

    #[test]
    fn newton_uses_exact_derivatives() {
        let p = Polynomial::new([1.0, 0.0, -2.0]);
        let start = newton::Start::Bracket(Interval::new(0.0, 2.0).expect("finite endpoints"));

        let result = newton::solve_unobserved(&p, start, &newton::Config::default())
            .expect("should solve");

        assert_eq!(result.status, Status::Converged);
        assert_eq!(result.iterations, 5);
        assert_relative_eq!(result.root, 2.0_f64.sqrt(), epsilon = 1e-12);
    }
}

use rootsweep_core::{Evaluation, ExpressionError, IntervalError};
use thiserror::Error;

use crate::scan::ScanError;

/// Errors that can occur while finding a root.
///
/// Running out of iterations is not an error: the solver returns its last
/// iterate with [`Status::MaxIters`](crate::Status::MaxIters) instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid expression")]
    InvalidExpression(#[from] ExpressionError),

    #[error("invalid interval")]
    InvalidInterval(#[from] IntervalError),

    #[error("invalid config")]
    InvalidConfig(#[from] ConfigError),

    #[error("scan failed")]
    Scan(#[from] ScanError),

    #[error("no sign change on [{low}, {high}]: f(low) = {f_low}, f(high) = {f_high}")]
    NoSignChange {
        low: f64,
        high: f64,
        f_low: f64,
        f_high: f64,
    },

    #[error("zero-width interval at {x} is not a root: f(x) = {fx}")]
    DegenerateIntervalNoRoot { x: f64, fx: f64 },

    #[error("false position slope vanishes on [{low}, {high}]")]
    DegenerateSlope { low: f64, high: f64 },

    #[error("derivative vanishes at x = {x}")]
    ZeroDerivative { x: f64 },

    #[error("neither endpoint of [{low}, {high}] satisfies f(x) * f''(x) > 0")]
    NoValidFourierStart { low: f64, high: f64 },

    #[error("function is undefined at x = {x}")]
    UndefinedEvaluation { x: f64 },
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tol must be finite and positive")]
    Tol,

    #[error("max_iters must be at least one")]
    MaxIters,

    #[error("slope_tol must be finite and positive")]
    SlopeTol,

    #[error("aitken_tol must be finite and positive")]
    AitkenTol,
}

/// Unwraps a defined evaluation or reports where it was undefined.
pub(crate) fn defined(evaluation: Evaluation, x: f64) -> Result<f64, Error> {
    evaluation
        .value()
        .ok_or(Error::UndefinedEvaluation { x })
}

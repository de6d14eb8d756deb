use std::{fmt, str::FromStr};

use meval::{Context, Expr};
use thiserror::Error;

use crate::{
    Differentiable, Evaluation, Function,
    function::{central_first, central_second},
};

/// The variable every expression is written in.
const VARIABLE: &str = "x";

/// Errors that can occur when parsing an [`Expression`].
#[derive(Debug, Error)]
pub enum ExpressionError {
    /// The text is not a well-formed expression.
    #[error("failed to parse `{text}`")]
    Parse {
        text: String,
        #[source]
        source: meval::Error,
    },

    /// The expression refers to something other than `x` and the built-ins.
    #[error("`{text}` is not a function of `x` alone")]
    NotUnivariate {
        text: String,
        #[source]
        source: meval::Error,
    },
}

/// A function of `x` parsed from text.
///
/// Supports the usual arithmetic operators, `^` for powers, the constants
/// `pi` and `e`, and the built-in functions `sqrt`, `exp`, `ln`, `abs`,
/// `sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `sinh`, `cosh`, `tanh`,
/// `floor`, `ceil`, `round`, `signum`, `max`, `min`, and `atan2`.
///
/// Derivatives are exact when pre-differentiated expressions are attached
/// with [`Expression::with_derivatives`] and fall back to central
/// differences otherwise.
///
/// # Example
///
/// ```
/// use rootsweep_core::{Evaluation, Expression, Function};
///
/// let f = Expression::parse("x^2 - 2").unwrap();
/// assert_eq!(f.evaluate(2.0), Evaluation::Defined(2.0));
///
/// let g = Expression::parse("sqrt(x)").unwrap();
/// assert_eq!(g.evaluate(-1.0), Evaluation::Undefined);
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    text: String,
    expr: Expr,
    derivatives: Option<Box<[Expr; 2]>>,
}

impl Expression {
    /// Parses `text` as a function of `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse, or if it references a
    /// variable or function other than `x` and the built-ins.
    pub fn parse(text: &str) -> Result<Self, ExpressionError> {
        Ok(Self {
            text: text.to_owned(),
            expr: parse_univariate(text)?,
            derivatives: None,
        })
    }

    /// Returns true if `text` is a well-formed function of `x`.
    #[must_use]
    pub fn validate(text: &str) -> bool {
        parse_univariate(text).is_ok()
    }

    /// Attaches the first and second derivatives as expressions.
    ///
    /// # Errors
    ///
    /// Returns an error if either derivative fails to parse.
    pub fn with_derivatives(mut self, first: &str, second: &str) -> Result<Self, ExpressionError> {
        let first = parse_univariate(first)?;
        let second = parse_univariate(second)?;
        self.derivatives = Some(Box::new([first, second]));
        Ok(self)
    }

    /// Returns the source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if exact derivative expressions are attached.
    #[must_use]
    pub fn has_derivatives(&self) -> bool {
        self.derivatives.is_some()
    }
}

impl Function for Expression {
    fn evaluate(&self, x: f64) -> Evaluation {
        eval_at(&self.expr, x)
    }
}

impl Differentiable for Expression {
    fn first_derivative(&self, x: f64) -> Evaluation {
        match &self.derivatives {
            Some(derivatives) => eval_at(&derivatives[0], x),
            None => central_first(self, x),
        }
    }

    fn second_derivative(&self, x: f64) -> Evaluation {
        match &self.derivatives {
            Some(derivatives) => eval_at(&derivatives[1], x),
            None => central_second(self, x),
        }
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn parse_univariate(text: &str) -> Result<Expr, ExpressionError> {
    let expr: Expr = text.parse().map_err(|source| ExpressionError::Parse {
        text: text.to_owned(),
        source,
    })?;

    // Binding checks every name resolves to `x` or a built-in.
    expr.clone()
        .bind(VARIABLE)
        .map_err(|source| ExpressionError::NotUnivariate {
            text: text.to_owned(),
            source,
        })?;

    Ok(expr)
}

fn eval_at(expr: &Expr, x: f64) -> Evaluation {
    let mut context = Context::new();
    context.var(VARIABLE, x);
    match expr.eval_with_context(context) {
        Ok(value) => Evaluation::from_value(value),
        Err(_) => Evaluation::Undefined,
    }
}

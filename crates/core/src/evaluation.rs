/// The outcome of evaluating a function at a single point.
///
/// Domain errors, non-real results, and overflow all collapse into
/// [`Evaluation::Undefined`], so failure is an ordinary value that solvers
/// can branch on rather than an error that escapes the algorithm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Evaluation {
    /// The function is defined at the point and has this finite value.
    Defined(f64),
    /// The function is undefined at the point.
    Undefined,
}

impl Evaluation {
    /// Classifies a raw value, mapping `NaN` and infinities to `Undefined`.
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value.is_finite() {
            Self::Defined(value)
        } else {
            Self::Undefined
        }
    }

    /// Returns the value if defined.
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Defined(value) => Some(value),
            Self::Undefined => None,
        }
    }

    /// Returns true if the function is defined at the point.
    #[must_use]
    pub fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl From<f64> for Evaluation {
    fn from(value: f64) -> Self {
        Self::from_value(value)
    }
}

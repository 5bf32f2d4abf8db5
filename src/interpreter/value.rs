use crate::{ast::LiteralValue, util::num::i64_to_f64_checked};

/// Represents a runtime value in the interpreter.
///
/// The language is purely numeric: every expression evaluates to either an
/// integer or a real. Comparisons and logical operators encode their results
/// as the integers 1 and 0. Values are immutable payloads; provenance (source
/// span, owning context) is threaded separately through evaluation and error
/// construction, never attached to the value itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A 64-bit floating-point value.
    Real(f64),
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<LiteralValue> for Value {
    fn from(value: LiteralValue) -> Self {
        match value {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl Value {
    /// Converts the value to an `f64` if that is lossless.
    ///
    /// Reals convert as-is. Integers convert only when exactly representable;
    /// an integer beyond the safe range yields `None` rather than a silently
    /// rounded result.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), Some(10.0));
    /// assert_eq!(Value::Real(2.5).as_real(), Some(2.5));
    /// ```
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(r) => Some(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, ()).ok(),
        }
    }

    /// Whether the value counts as true for the logical operators.
    ///
    /// Truthiness is nonzero-ness: `0` and `0.0` are false, everything else
    /// is true.
    ///
    /// # Example
    /// ```
    /// use numera::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(5).is_truthy());
    /// assert!(!Value::Real(0.0).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

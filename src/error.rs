/// Lexical and syntactic errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: illegal characters, malformed operators, and grammar violations.
/// Every error is anchored at a precise source span.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error type raised during evaluation: undefined variables,
/// division by zero, and overflowing arithmetic. Runtime errors carry the
/// dynamic context chain for traceback rendering.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{RuntimeError, RuntimeErrorKind, TraceFrame};

use crate::position::Span;

/// Any error a run can surface: either a lex/parse failure or an evaluation
/// failure.
///
/// Every error is fatal to the run it occurred in; propagation is strictly
/// first-error-wins at every stage, so the value carried here is always the
/// first failure encountered.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpretError {
    /// The source failed to lex or parse.
    Parse(ParseError),
    /// The source lexed and parsed, but evaluation failed.
    Runtime(RuntimeError),
}

impl InterpretError {
    /// The source span the error is anchored at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Parse(error) => error.span(),
            Self::Runtime(error) => error.span,
        }
    }
}

impl std::fmt::Display for InterpretError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(error) => error.fmt(f),
            Self::Runtime(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for InterpretError {}

impl From<ParseError> for InterpretError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for InterpretError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

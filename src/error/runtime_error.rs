use crate::position::Span;

/// One frame of the dynamic context chain, recorded for traceback rendering.
///
/// The innermost frame carries the line of the failing expression; enclosing
/// frames carry the line at which their child context was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFrame {
    /// The display name of the execution context (e.g. `<program>`).
    pub display_name: String,
    /// The 0-based source line associated with this frame.
    pub line:         usize,
}

/// Represents a failure raised while evaluating the AST.
///
/// Unlike lexical and syntactic errors, a runtime error additionally carries a
/// snapshot of the dynamic context chain active when it was raised, innermost
/// frame first, so it can be rendered as a traceback.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeError {
    /// What went wrong.
    pub kind:  RuntimeErrorKind,
    /// The source span of the smallest expression the failure is attributed
    /// to.
    pub span:  Span,
    /// The context chain, innermost first. Never empty.
    pub trace: Vec<TraceFrame>,
}

/// The failure modes of evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// Tried to read a variable that is bound nowhere in the scope chain.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow,
    /// An integer operand was too large to be promoted to a real without
    /// losing precision.
    LiteralTooLarge,
}

impl RuntimeError {
    /// Creates a runtime error from its kind, location and context chain.
    #[must_use]
    pub const fn new(kind: RuntimeErrorKind, span: Span, trace: Vec<TraceFrame>) -> Self {
        Self { kind, span, trace }
    }

    /// The human-readable detail message, without the kind prefix.
    #[must_use]
    pub fn details(&self) -> String {
        match &self.kind {
            RuntimeErrorKind::UnknownVariable { name } => {
                format!("Variable '{name}' is not defined")
            },
            RuntimeErrorKind::DivisionByZero => "Division by zero is not possible".to_string(),
            RuntimeErrorKind::Overflow => {
                "Integer overflow while trying to compute result".to_string()
            },
            RuntimeErrorKind::LiteralTooLarge => "Literal is too large".to_string(),
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Runtime Error: {}", self.details())
    }
}

impl std::error::Error for RuntimeError {}

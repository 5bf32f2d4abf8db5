use crate::position::Span;

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw, constant numbers that can appear directly in
/// source code. The INT/FLOAT distinction made by the lexer is preserved here
/// and carries through to runtime values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` is a closed union over the five expression forms the language has:
/// number literals, variable accesses, variable assignments, and unary and
/// binary operations. Every variant carries the source [`Span`] it was built
/// from, derived from its tokens and children, so any node can be located in
/// the source without re-walking the tree. Nodes are immutable once built and
/// owned exclusively by their parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal.
    Number {
        /// The constant value.
        value: LiteralValue,
        /// Location in the source code.
        span:  Span,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Location in the source code.
        span: Span,
    },
    /// A variable declaration/assignment using `variable`.
    Assign {
        /// The name being bound.
        name:  String,
        /// The expression whose result is bound.
        value: Box<Self>,
        /// Location in the source code, from the `variable` keyword to the
        /// end of the value expression.
        span:  Span,
    },
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Location in the source code.
        span: Span,
    },
    /// A binary operation (addition, comparison, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Location in the source code, covering both operands.
        span:  Span,
    },
}

impl Expr {
    /// Gets the source span from `self`.
    ///
    /// # Example
    /// ```
    /// use numera::{ast::Expr, position::Span};
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             span: Span::default(), };
    ///
    /// assert_eq!(expr.span(), Span::default());
    /// ```
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Number { span, .. }
            | Self::Variable { span, .. }
            | Self::Assign { span, .. }
            | Self::UnaryOp { span, .. }
            | Self::BinaryOp { span, .. } => *span,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logical connectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
///
/// Unary operators are the prefix signs and logical NOT.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix plus (e.g. `+x`); the identity on numbers.
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `not x`).
    Not,
}

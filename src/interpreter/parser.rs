/// Core parsing logic and the parse entry point.
///
/// Contains the top-level `parse` function, the full-expression rule, and
/// variable declaration parsing.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative precedence levels (logical, comparison,
/// additive, multiplicative) through one shared combinator.
pub mod binary;

/// Unary and atomic expression parsing.
///
/// Handles prefix signs, right-associative exponentiation, literals,
/// variable accesses, and parenthesized expressions.
pub mod unary;

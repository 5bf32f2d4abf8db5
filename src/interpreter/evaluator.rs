/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, and error
/// construction with tracebacks.
pub mod core;

/// Unary operator evaluation logic.
///
/// Implements the prefix operators: identity, arithmetic negation, and
/// logical NOT.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, comparisons, and logical operators.
pub mod binary;

//! # numera
//!
//! numera is a small numeric expression interpreter written in Rust.
//! It lexes, parses, and evaluates arithmetic expressions with support for
//! variables, comparisons, logical operators, and precise positioned errors.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::InterpretError,
    interpreter::{evaluator::core::Context, lexer::tokenize, parser::core::parse, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all language constructs.
/// - Attaches source spans to AST nodes for error reporting.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing, or
/// evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and source
/// locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source spans and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Source positions and spans.
///
/// Declares the `Position` and `Span` types that every token, AST node, and
/// error carries, so that failures can point at the exact offending region of
/// the source.
pub mod position;
/// Renders errors for display.
///
/// Formats parse and runtime errors into the user-facing reports printed by
/// the shell: headline, file and line, traceback for runtime errors, and an
/// underlined source snippet.
pub mod report;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers and conversion routines that are used
/// throughout the interpreter, parser, and evaluator. These include safe
/// conversions between integer and floating-point types, and any
/// general-purpose functions not specific to a single phase.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
/// - Provide general utility functions used in multiple modules.
pub mod util;

/// Runs one source string through the full pipeline and returns its value.
///
/// The source is tokenized, parsed into a single expression, and evaluated
/// against the given context. The context is the caller's: variables bound by
/// the run stay bound, which is what gives an interactive session its memory.
///
/// # Parameters
/// - `source`: The source text to interpret; must hold exactly one expression.
/// - `context`: The evaluation context to run against.
///
/// # Returns
/// The value the expression evaluated to.
///
/// # Errors
/// The first failure of any stage, as an [`InterpretError`]. The context is
/// never modified by a failed run unless an assignment completed before the
/// failure.
///
/// # Examples
/// ```
/// use numera::{interpreter::{evaluator::core::Context, value::Value}, run};
///
/// let mut context = Context::root("<program>");
///
/// assert_eq!(run("1 + 2 * 3", &mut context).unwrap(), Value::Integer(7));
///
/// run("variable x = 5", &mut context).unwrap();
/// assert_eq!(run("x ^ 2", &mut context).unwrap(), Value::Integer(25));
/// ```
pub fn run(source: &str, context: &mut Context) -> Result<Value, InterpretError> {
    let tokens = tokenize(source)?;
    let expr = parse(&tokens)?;
    let value = context.eval(&expr)?;

    Ok(value)
}

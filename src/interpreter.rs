/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions, performs
/// arithmetic, comparison and logical operations, manages variable state, and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variable access and assignment through the runtime context.
/// - Reports runtime errors such as division by zero or undefined variables,
///   carrying a traceback.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric literals, identifiers, keywords, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions. This enables
/// the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Supports arithmetic, comparisons, logic, and variable declarations.
pub mod parser;
/// The symbol table module stores variable bindings.
///
/// Bindings live in a chain of scopes: lookups walk outward through enclosing
/// scopes while writes always target the innermost one.
///
/// # Responsibilities
/// - Maps variable names to their current values.
/// - Resolves reads through the parent chain.
/// - Supports rebinding and removal in the local scope.
pub mod symbol_table;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution: integers and
/// reals. It also provides truthiness and safe promotion from integer to real.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variants.
/// - Implements conversion, truthiness, and display.
/// - Provides safe promotion between numeric types (e.g., integer to real).
pub mod value;

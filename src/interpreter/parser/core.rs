use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::binary::parse_logical,
    },
    position::Span,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token stream into a single expression.
///
/// This is the entry point for parsing. It parses exactly one expression and
/// then requires the stream to be fully consumed: the current token must be
/// the end-of-input marker, otherwise the leftover token is reported as an
/// "Expected a valid operator" syntax error anchored at its span.
///
/// # Parameters
/// - `tokens`: The positioned token sequence produced by
///   [`crate::interpreter::lexer::tokenize`].
///
/// # Returns
/// The root of the parsed AST.
///
/// # Errors
/// The first grammar violation encountered; parsing never recovers or
/// backtracks past an error.
///
/// # Example
/// ```
/// use numera::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// assert!(parse(&tokens).is_ok());
///
/// let tokens = tokenize("1 2").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, Span)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.peek() {
        Some((Token::Eof, _)) | None => Ok(expr),
        Some((_, span)) => Err(ParseError::TrailingTokens { span: *span }),
    }
}

/// Parses a full expression.
///
/// This is the lowest-precedence rule. It first checks for a variable
/// declaration introduced by the `variable` keyword; otherwise it descends
/// into the logical (`and`/`or`) level.
///
/// Grammar:
/// ```text
///     expression := "variable" IDENTIFIER "=" expression
///                 | logical
/// ```
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    if let Some((Token::Variable, keyword_span)) = tokens.peek() {
        let keyword_span = *keyword_span;
        tokens.next();
        return parse_declaration(tokens, keyword_span);
    }

    parse_logical(tokens)
}

/// Parses the remainder of a variable declaration, after the `variable`
/// keyword has been consumed.
///
/// Each expectation is checked in order and violated expectations are
/// reported immediately, anchored at the offending token:
/// the name must be an identifier, the identifier must be followed by `=`,
/// and the right-hand side is a full (possibly again declaring) expression.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `variable` keyword.
/// - `keyword_span`: Span of the consumed keyword; the declaration node's
///   span starts here.
///
/// # Returns
/// An [`Expr::Assign`] node binding the name to the value expression.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>, keyword_span: Span) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let name = match tokens.peek() {
        Some((Token::Identifier(name), _)) => {
            let name = name.clone();
            tokens.next();
            name
        },
        Some((_, span)) => return Err(ParseError::ExpectedIdentifier { span: *span }),
        None => return Err(ParseError::UnexpectedEndOfInput { span: keyword_span }),
    };

    match tokens.peek() {
        Some((Token::Equals, _)) => {
            tokens.next();
        },
        Some((_, span)) => return Err(ParseError::ExpectedAssignment { span: *span }),
        None => return Err(ParseError::UnexpectedEndOfInput { span: keyword_span }),
    }

    let value = parse_expression(tokens)?;
    let span = keyword_span.to(value.span());

    Ok(Expr::Assign { name,
                      value: Box::new(value),
                      span })
}

use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
    position::Span,
};

/// Parses a factor: a signed sub-expression or a power.
///
/// The prefix signs are right-associative, so `--x` parses as `-(-x)`. Note
/// that the sign binds looser than `^` on the left (`-2 ^ 2` is `-(2 ^ 2)`)
/// while the right operand of `^` re-enters here, which is what makes
/// `2 ^ -2` legal.
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor
///             | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power expression.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    if let Some((Token::Plus, sign_span)) = tokens.peek() {
        let sign_span = *sign_span;
        tokens.next();

        let operand = parse_factor(tokens)?;
        let span = sign_span.to(operand.span());

        Ok(Expr::UnaryOp { op:   UnaryOperator::Plus,
                           expr: Box::new(operand),
                           span })
    } else if let Some((Token::Minus, sign_span)) = tokens.peek() {
        let sign_span = *sign_span;
        tokens.next();

        let operand = parse_factor(tokens)?;
        let span = sign_span.to(operand.span());

        Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                           expr: Box::new(operand),
                           span })
    } else {
        parse_power(tokens)
    }
}

/// Parses an exponentiation expression.
///
/// The right operand re-enters at factor level, which gives `^` its
/// right-associativity: `2 ^ 3 ^ 2` parses as `2 ^ (3 ^ 2)`.
///
/// Grammar: `power := atom ("^" factor)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An exponentiation node, or the bare atom when no `^` follows.
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let base = parse_atom(tokens)?;

    if let Some((Token::Caret, _)) = tokens.peek() {
        tokens.next();

        let exponent = parse_factor(tokens)?;
        let span = base.span().to(exponent.span());

        return Ok(Expr::BinaryOp { left: Box::new(base),
                                   op: BinaryOperator::Pow,
                                   right: Box::new(exponent),
                                   span });
    }

    Ok(base)
}

/// Parses an atomic expression.
///
/// Atoms form the base of the expression grammar:
/// - integer and float literals,
/// - variable accesses,
/// - parenthesized expressions.
///
/// A parenthesized expression is returned as-is (no wrapper node); a missing
/// `)` is reported at the current token, which for unterminated input is the
/// end-of-input marker's position. Any token that cannot start an atom is an
/// "Expected an int, float, identifier, ..." syntax error at that token.
///
/// Grammar: `atom := INT | FLOAT | IDENTIFIER | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an atom.
///
/// # Returns
/// The parsed atomic [`Expr`].
pub(crate) fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    let (token, span) = match tokens.peek() {
        Some((token, span)) => (token, *span),
        None => return Err(ParseError::UnexpectedEndOfInput { span: Span::default() }),
    };

    match token {
        Token::Int(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Number { value: value.into(),
                              span })
        },
        Token::Float(value) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Number { value: value.into(),
                              span })
        },
        Token::Identifier(name) => {
            let name = name.clone();
            tokens.next();
            Ok(Expr::Variable { name, span })
        },
        Token::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            match tokens.peek() {
                Some((Token::RParen, _)) => {
                    tokens.next();
                    Ok(expr)
                },
                Some((_, close_span)) => {
                    Err(ParseError::ExpectedClosingParen { span: *close_span })
                },
                None => Err(ParseError::UnexpectedEndOfInput { span }),
            }
        },
        _ => Err(ParseError::ExpectedExpression { span }),
    }
}

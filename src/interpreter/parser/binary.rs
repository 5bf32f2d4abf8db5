use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_factor},
    },
    position::Span,
};

/// The operators accepted at the logical level.
const LOGICAL_OPS: &[BinaryOperator] = &[BinaryOperator::And, BinaryOperator::Or];
/// The operators accepted at the comparison level.
const COMPARISON_OPS: &[BinaryOperator] = &[BinaryOperator::Equal,
                                            BinaryOperator::NotEqual,
                                            BinaryOperator::Less,
                                            BinaryOperator::Greater,
                                            BinaryOperator::LessEqual,
                                            BinaryOperator::GreaterEqual];
/// The operators accepted at the additive level.
const ADDITIVE_OPS: &[BinaryOperator] = &[BinaryOperator::Add, BinaryOperator::Sub];
/// The operators accepted at the multiplicative level.
const MULTIPLICATIVE_OPS: &[BinaryOperator] = &[BinaryOperator::Mul, BinaryOperator::Div];

/// Parses logical connective expressions.
///
/// Handles left-associative chains of `and` and `or`, which share one
/// precedence level.
///
/// Grammar: `logical := comparison (("and" | "or") comparison)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, Span)` pairs.
///
/// # Returns
/// A binary expression tree combining comparison-level nodes.
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_binary_level(tokens, parse_comparison, LOGICAL_OPS)
}

/// Parses comparison expressions and prefix `not`.
///
/// `not` is right-associative and recursively consumes another comparison, so
/// `not not x` parses as `not (not x)`. Without a leading `not`, the rule is
/// a left-associative chain of the six comparators over additive expressions.
///
/// Grammar:
/// ```text
///     comparison := "not" comparison
///                 | additive (("==" | "!=" | "<" | ">" | "<=" | ">=") additive)*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A comparison expression tree, or a `not` node wrapping one.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    if let Some((Token::Not, not_span)) = tokens.peek() {
        let not_span = *not_span;
        tokens.next();

        let operand = parse_comparison(tokens)?;
        let span = not_span.to(operand.span());

        return Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                                  expr: Box::new(operand),
                                  span });
    }

    parse_binary_level(tokens, parse_additive, COMPARISON_OPS)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree combining multiplicative-level nodes.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_binary_level(tokens, parse_multiplicative, ADDITIVE_OPS)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative binary operators: `*` and `/`.
///
/// Grammar: `multiplicative := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone
{
    parse_binary_level(tokens, parse_factor, MULTIPLICATIVE_OPS)
}

/// The generic binary-operator combinator shared by every binary precedence
/// level.
///
/// Parses one sub-expression, then loops while the current token maps to one
/// of the acceptable operators, folding left-associatively into
/// [`Expr::BinaryOp`] nodes whose spans cover both operands.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `sub_rule`: The next-higher-precedence rule, used for both operands.
/// - `ops`: The operators this level accepts.
///
/// # Returns
/// The folded expression tree; just the sub-expression when no operator
/// matched.
fn parse_binary_level<'a, I, F>(tokens: &mut Peekable<I>,
                                mut sub_rule: F,
                                ops: &[BinaryOperator])
                                -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, Span)> + Clone,
          F: FnMut(&mut Peekable<I>) -> ParseResult<Expr>
{
    let mut left = sub_rule(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && ops.contains(&op)
        {
            tokens.next();
            let right = sub_rule(tokens)?;
            let span = left.span().to(right.span());
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    span };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `^`, the six comparators, `and`, `or`). Returns
/// `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use numera::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        _ => None,
    }
}

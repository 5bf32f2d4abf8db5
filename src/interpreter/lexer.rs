use logos::Logos;

use crate::{
    error::ParseError,
    position::{Position, Span},
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Floating-point literal tokens, such as `3.14`, `.5` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    #[regex(r"\.[0-9]+", parse_real)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// `variable`
    #[token("variable")]
    Variable,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// Identifier tokens; variable names such as `x` or `total`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// Line breaks advance the line counter but produce no token.
    #[regex(r"\r?\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,

    /// End of input. Never produced by the scanner itself; [`tokenize`]
    /// appends exactly one `Eof` token carrying the final position.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset of the current line's
/// first character, so token byte spans can be converted into line/column
/// positions. Updated as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized, starting at 0.
    pub line:       usize,
    /// Byte offset at which the current line begins.
    pub line_start: usize,
}

/// Scans the entire source into a positioned token sequence.
///
/// The scan is fail-fast: the first lexical error aborts it and discards all
/// tokens collected so far. On success the sequence always ends with exactly
/// one [`Token::Eof`] carrying a zero-width span at the end of input.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The token sequence as `(Token, Span)` pairs, or the first lexical error.
///
/// # Errors
/// - `ParseError::ExpectedCharacter` for a `!` not followed by `=`.
/// - `ParseError::IllegalCharacter` for any other unrecognized character,
///   spanning exactly that character.
///
/// # Example
/// ```
/// use numera::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2").unwrap();
///
/// assert!(matches!(tokens[0].0, Token::Int(1)));
/// assert!(matches!(tokens[1].0, Token::Plus));
/// assert!(matches!(tokens.last().unwrap().0, Token::Eof));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, ParseError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras::default());
    let mut tokens = Vec::new();

    while let Some(scanned) = lexer.next() {
        let span = current_span(&lexer);
        match scanned {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                return Err(match lexer.slice() {
                    "!" => ParseError::ExpectedCharacter { span },
                    other => {
                        ParseError::IllegalCharacter { character: other.chars()
                                                                       .next()
                                                                       .unwrap_or_default(),
                                                       span }
                    },
                });
            },
        }
    }

    let end = Position { index:  source.len(),
                         line:   lexer.extras.line,
                         column: source.len() - lexer.extras.line_start, };
    tokens.push((Token::Eof, Span::new(end, end)));
    Ok(tokens)
}

/// Converts the lexer's current byte span into a positioned [`Span`].
///
/// Tokens never cross line breaks, so both endpoints share the line recorded
/// in the lexer extras.
fn current_span(lexer: &logos::Lexer<Token>) -> Span {
    let range = lexer.span();
    let line = lexer.extras.line;
    let line_start = lexer.extras.line_start;

    Span::new(Position { index:  range.start,
                         line,
                         column: range.start - line_start, },
              Position { index:  range.end,
                         line,
                         column: range.end - line_start, })
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_real(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice is not a valid integer.
fn parse_integer(lex: &mut logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

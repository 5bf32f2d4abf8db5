use crate::position::Span;

/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant is anchored at the exact source [`Span`] that violated an
/// expectation, so callers can render an excerpt with a caret underneath.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The lexer met a character that starts no token.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// The source span of exactly that character.
        span:      Span,
    },
    /// A `!` was not followed by `=`.
    ExpectedCharacter {
        /// The source span of the `!`.
        span: Span,
    },
    /// An atom was required but the current token cannot start one.
    ExpectedExpression {
        /// The source span of the offending token.
        span: Span,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source span of the token found instead.
        span: Span,
    },
    /// The `variable` keyword was not followed by an identifier.
    ExpectedIdentifier {
        /// The source span of the token found instead.
        span: Span,
    },
    /// A declared variable name was not followed by `=`.
    ExpectedAssignment {
        /// The source span of the token found instead.
        span: Span,
    },
    /// Found extra tokens after one full expression was parsed.
    TrailingTokens {
        /// The source span of the first unconsumed token.
        span: Span,
    },
    /// Reached the end of input where the token stream should have continued.
    /// Defensive: a well-formed stream always ends with an explicit Eof token,
    /// which the other variants anchor to instead.
    UnexpectedEndOfInput {
        /// The source span where input ended.
        span: Span,
    },
}

impl ParseError {
    /// The public error-kind name, as shown in rendered reports.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::IllegalCharacter { .. } => "Illegal Character",
            Self::ExpectedCharacter { .. } => "Expected Character",
            Self::ExpectedExpression { .. }
            | Self::ExpectedClosingParen { .. }
            | Self::ExpectedIdentifier { .. }
            | Self::ExpectedAssignment { .. }
            | Self::TrailingTokens { .. }
            | Self::UnexpectedEndOfInput { .. } => "Invalid Syntax",
        }
    }

    /// The human-readable detail message, without the kind prefix.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::IllegalCharacter { character, .. } => format!("'{character}'"),
            Self::ExpectedCharacter { .. } => "'=' (after '!')".to_string(),
            Self::ExpectedExpression { .. } => {
                "Expected an int, float, identifier, '+', '-', 'not' or '('".to_string()
            },
            Self::ExpectedClosingParen { .. } => "Expected a closing bracket ')'".to_string(),
            Self::ExpectedIdentifier { .. } => {
                "Expected an identifier after 'variable'".to_string()
            },
            Self::ExpectedAssignment { .. } => "Expected '=' after the variable name".to_string(),
            Self::TrailingTokens { .. } => "Expected a valid operator".to_string(),
            Self::UnexpectedEndOfInput { .. } => "Unexpected end of input".to_string(),
        }
    }

    /// The source span the error is anchored at.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::IllegalCharacter { span, .. }
            | Self::ExpectedCharacter { span }
            | Self::ExpectedExpression { span }
            | Self::ExpectedClosingParen { span }
            | Self::ExpectedIdentifier { span }
            | Self::ExpectedAssignment { span }
            | Self::TrailingTokens { span }
            | Self::UnexpectedEndOfInput { span } => *span,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name(), self.details())
    }
}

impl std::error::Error for ParseError {}

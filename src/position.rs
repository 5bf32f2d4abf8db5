/// A cursor into source text.
///
/// Positions are value-semantic snapshots: once attached to a token, AST node,
/// or error they are never shared mutably. `line` and `column` are 0-based;
/// anything user-facing adds 1 when rendering (see [`crate::report`]).
///
/// # Example
/// ```
/// use numera::position::Position;
///
/// let position = Position { index:  4,
///                           line:   0,
///                           column: 4, };
///
/// assert_eq!(position.line, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub index:  usize,
    /// Line number, starting at 0.
    pub line:   usize,
    /// Column number within the line, starting at 0.
    pub column: usize,
}

/// A half-open region of source text delimited by two [`Position`]s.
///
/// Every token, AST node, and error carries a span so it can be located in the
/// source without re-walking anything. `end` is exclusive; a zero-width span
/// (such as the one on the end-of-input token) has `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Where the region begins.
    pub start: Position,
    /// First position past the region.
    pub end:   Position,
}

impl Span {
    /// Creates a span from two positions.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns the smallest span covering both `self` and `other`.
    ///
    /// Used to derive the span of a composite AST node from the spans of its
    /// children.
    ///
    /// # Example
    /// ```
    /// use numera::position::{Position, Span};
    ///
    /// let a = Span::new(Position { index:  0,
    ///                              line:   0,
    ///                              column: 0, },
    ///                   Position { index:  1,
    ///                              line:   0,
    ///                              column: 1, });
    /// let b = Span::new(Position { index:  4,
    ///                              line:   0,
    ///                              column: 4, },
    ///                   Position { index:  5,
    ///                              line:   0,
    ///                              column: 5, });
    ///
    /// assert_eq!(a.to(b).start.index, 0);
    /// assert_eq!(a.to(b).end.index, 5);
    /// ```
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self { start: self.start,
               end:   other.end, }
    }
}

use crate::{error::InterpretError, position::Span};

/// Renders the offending source line(s) with a caret row underneath.
///
/// Each line covered by `span` is emitted followed by a row of `^` marking the
/// covered columns. A zero-width span (such as the end-of-input marker's)
/// still produces a single caret, so an error always points somewhere.
///
/// # Parameters
/// - `source`: The full source text the span refers to.
/// - `span`: The region to underline.
///
/// # Returns
/// The annotated snippet, without a trailing newline.
///
/// # Example
/// ```
/// use numera::{
///     position::{Position, Span},
///     report::underline,
/// };
///
/// let span = Span::new(Position { index: 4, line: 0, column: 4 },
///                      Position { index: 5, line: 0, column: 5 });
/// assert_eq!(underline("10 / 0", span), "10 / 0\n    ^");
/// ```
#[must_use]
pub fn underline(source: &str, span: Span) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let mut rendered = String::new();

    for line in span.start.line..=span.end.line {
        let Some(text) = lines.get(line) else {
            break;
        };

        let col_start = if line == span.start.line { span.start.column } else { 0 };
        let col_end = if line == span.end.line { span.end.column } else { text.len() };

        // Span columns are byte offsets; the caret row is built from character
        // counts so a multi-byte character neither shifts nor widens the
        // marker.
        let prefix = text.get(..col_start).map_or(col_start, |p| p.chars().count());
        let width = text.get(col_start..col_end)
                        .map_or_else(|| col_end.saturating_sub(col_start), |m| m.chars().count())
                        .max(1);

        if !rendered.is_empty() {
            rendered.push('\n');
        }
        rendered.push_str(text);
        rendered.push('\n');
        rendered.push_str(&" ".repeat(prefix));
        rendered.push_str(&"^".repeat(width));
    }

    rendered
}

/// Renders a full error report for display to the user.
///
/// Parse errors produce a headline, the file and one-based line number, and
/// the underlined source region:
///
/// ```text
/// ERROR: Invalid Syntax: Expected a valid operator
/// File: <stdin>, Line: 1
///
/// 1 2
///   ^
/// ```
///
/// Runtime errors are prefixed with a traceback listing the context chain,
/// innermost frame first:
///
/// ```text
/// Traceback (most recent call last):
///   File: <stdin>, Line: 1, in <program>
/// ERROR: Runtime Error: Division by zero is not possible
///
/// 10 / 0
///      ^
/// ```
///
/// # Parameters
/// - `source_name`: Display name of the source (a file path, or `<stdin>`).
/// - `source`: The source text, for the underlined snippet.
/// - `error`: The failure to render.
///
/// # Returns
/// The complete report, ready for printing to stderr.
#[must_use]
pub fn render_error(source_name: &str, source: &str, error: &InterpretError) -> String {
    let snippet = underline(source, error.span());

    match error {
        InterpretError::Parse(parse_error) => {
            format!("ERROR: {parse_error}\nFile: {source_name}, Line: {}\n\n{snippet}",
                    error.span().start.line + 1)
        },
        InterpretError::Runtime(runtime_error) => {
            let mut report = String::from("Traceback (most recent call last):\n");
            for frame in &runtime_error.trace {
                report.push_str(&format!("  File: {source_name}, Line: {}, in {}\n",
                                         frame.line + 1,
                                         frame.display_name));
            }
            report.push_str(&format!("ERROR: {runtime_error}\n\n{snippet}"));
            report
        },
    }
}

use std::fmt;

use serde::Serialize;

use crate::error::ParseError;

/// A location in the source buffer. `offset` counts Unicode scalar values
/// from the start of the input; `line` and `column` are one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn origin() -> Position {
        Position { offset: 0, line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

pub fn merge_span(left: Span, right: Span) -> Span {
    Span { start: left.start, end: right.end }
}

/// Renders a parse failure the way the CLI reports it.
pub fn render_parse_error(path: &str, error: &ParseError) -> String {
    let position = error.position();
    format!(
        "error[{}] {}:{}:{} {}",
        error.code(),
        path,
        position.line,
        position.column,
        error
    )
}

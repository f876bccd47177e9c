use crate::diagnostics::Position;

/// Parsing is all-or-nothing: every failure mode carries the position it
/// was detected at and nothing else survives the attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No grammar alternative matched. `position` is the deepest point any
    /// alternative reached; `expected` lists the rules attempted there.
    #[error("expected {}", .expected.join(" or "))]
    Syntax { position: Position, expected: Vec<String> },
    #[error("unexpected trailing input")]
    UnexpectedTrailingInput { position: Position },
    #[error("nesting exceeds the depth limit of {limit}")]
    RecursionLimitExceeded { position: Position, limit: usize },
}

impl ParseError {
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::Syntax { .. } => "E0001",
            ParseError::UnexpectedTrailingInput { .. } => "E0002",
            ParseError::RecursionLimitExceeded { .. } => "E0003",
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::Syntax { position, .. }
            | ParseError::UnexpectedTrailingInput { position }
            | ParseError::RecursionLimitExceeded { position, .. } => *position,
        }
    }
}

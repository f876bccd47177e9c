//! Character-level recursive-descent parser. The grammar is not
//! lexer-friendly (`./ab` is an import while `.ab` is field selection,
//! block comments nest, interpolation re-enters the expression grammar), so
//! there is no token stream: rules match directly against the decoded
//! character buffer and backtrack through mark/reset checkpoints.

use num_bigint::{BigInt, BigUint};
use ordered_float::OrderedFloat;
use url::Url;

use crate::ast::{
    Builtin, Const, Expr, FilePrefix, Import, ImportLocation, ImportMode, Label, Op, RemoteImport,
    TextPart,
};
use crate::diagnostics::{merge_span, Position, Span};
use crate::error::ParseError;
use crate::syntax;

/// Default bound on structural nesting depth. Each unit of depth costs a
/// handful of unoptimized stack frames on the way down to a primitive, so
/// the default is sized to stay well inside the 2 MiB stacks that test
/// threads get. Callers with deeper input and a bigger stack can raise it
/// through [`parse_complete_with_limit`].
pub const DEFAULT_DEPTH_LIMIT: usize = 64;

/// Parses a complete program: leading whitespace, one expression, end of
/// input.
pub fn parse_complete(input: &str) -> Result<Expr, ParseError> {
    parse_complete_with_limit(input, DEFAULT_DEPTH_LIMIT)
}

pub fn parse_complete_with_limit(input: &str, depth_limit: usize) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(input, depth_limit);
    parser.skip_whitespace();
    let expr = parser.parse_expression();
    if let Some(fatal) = parser.fatal.take() {
        return Err(fatal);
    }
    match expr {
        Some(expr) if parser.at_end() => Ok(expr),
        Some(_) => Err(ParseError::UnexpectedTrailingInput { position: parser.position() }),
        None => Err(parser.syntax_error()),
    }
}

/// Parses a single expression for embedded contexts. Trailing input is left
/// alone; the returned offset (in Unicode scalar values) says how far the
/// expression reached.
pub fn parse_expression(input: &str) -> Result<(Expr, usize), ParseError> {
    let mut parser = Parser::new(input, DEFAULT_DEPTH_LIMIT);
    parser.skip_whitespace();
    let expr = parser.parse_expression();
    if let Some(fatal) = parser.fatal.take() {
        return Err(fatal);
    }
    match expr {
        Some(expr) => Ok((expr, parser.pos)),
        None => Err(parser.syntax_error()),
    }
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    /// Whether whitespace was consumed immediately before the current
    /// position. Application-term separation and binary `+` require it.
    prev_ws: bool,
    /// End of the most recently matched token, before its trailing
    /// whitespace; node spans stop here.
    last_token_end: Position,
    depth: usize,
    depth_limit: usize,
    /// Latched fatal error; backtracking never retries past it.
    fatal: Option<ParseError>,
    /// Deepest position any alternative failed at, with the rules attempted
    /// there.
    furthest: Position,
    expected: Vec<String>,
}

/// Everything `reset` must restore. Depth and the failure bookkeeping are
/// deliberately not part of it.
#[derive(Clone, Copy)]
struct Mark {
    pos: usize,
    line: usize,
    column: usize,
    prev_ws: bool,
    last_token_end: Position,
}

impl Parser {
    fn new(input: &str, depth_limit: usize) -> Parser {
        Parser {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            prev_ws: false,
            last_token_end: Position::origin(),
            depth: 0,
            depth_limit,
            fatal: None,
            furthest: Position::origin(),
            expected: Vec::new(),
        }
    }

    fn syntax_error(&mut self) -> ParseError {
        let expected = if self.expected.is_empty() {
            vec!["an expression".to_string()]
        } else {
            std::mem::take(&mut self.expected)
        };
        ParseError::Syntax { position: self.furthest, expected }
    }
}

include!("parser/chars.rs");
include!("parser/whitespace.rs");
include!("parser/labels.rs");
include!("parser/numbers.rs");
include!("parser/text.rs");
include!("parser/imports.rs");
include!("parser/operators.rs");
include!("parser/structures.rs");
include!("parser/records.rs");

#[cfg(test)]
mod tests;

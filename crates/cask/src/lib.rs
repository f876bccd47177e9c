//! Parser for the Cask configuration language: a small, total, strongly
//! typed configuration language with string interpolation, multi-line
//! strings, integrity-hashed imports and a fixed binary-operator grammar.
//!
//! The grammar is context-sensitive at the character level (`./ab` is an
//! import while `.ab` is field selection, block comments nest, text
//! interpolation re-enters the expression grammar), so there is no separate
//! lexer: parsing happens directly over the decoded character stream with
//! explicit mark/reset backtracking. Parsing is all-or-nothing; a failure
//! yields a [`ParseError`] and no tree.

pub mod ast;
pub mod diagnostics;
mod error;
mod parser;
pub mod syntax;

pub use diagnostics::{render_parse_error, Position, Span};
pub use error::ParseError;
pub use parser::{parse_complete, parse_complete_with_limit, parse_expression, DEFAULT_DEPTH_LIMIT};

//! Recursive descent parser for Flame.
//!
//! Walks a [`TokenList`] with a [`Cursor`] and builds the syntax tree for one
//! source unit. Statements dispatch on their leading token; expressions use
//! precedence climbing over [`Precedence`](flame_ir::Precedence) tiers.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{CursorError, ParseError};

use flame_ir::{Program, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser positioned at the first token.
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse the whole stream as a top-level statement block.
    ///
    /// Like any block, the top level ends at a `}` or the end of the stream;
    /// tokens after a stray top-level `}` are not parsed.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let body = self.parse_block()?;
        Ok(Program { body })
    }
}

/// Parse a token stream into a [`Program`].
pub fn parse(tokens: &TokenList) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

//! Token cursor for navigating the token stream.
//!
//! Provides bounded lookahead/lookbehind, relative seeking, and consuming
//! reads. The cursor is [`Copy`]: a copy shares the underlying stream but
//! moves independently.

use flame_ir::{Token, TokenKind, TokenList};
use tracing::trace;

use crate::CursorError;

/// A movable read position over a [`TokenList`].
///
/// # Invariant
///
/// `0 <= pos < tokens.len()`. Every move that would break this fails with
/// [`CursorError::StreamExhausted`] and leaves the position unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position in the token stream.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Token at the current position.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Check if the current token matches the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// True when the cursor sits on the end-of-stream sentinel.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.current().is_eof()
    }

    /// Token at `offset` from the current position, without moving.
    ///
    /// `peek(0)` is the current token, `peek(1)` the next, `peek(-1)` the
    /// previous one.
    pub fn peek(&self, offset: isize) -> Result<&'a Token, CursorError> {
        let index = self.index_at(offset)?;
        Ok(&self.tokens[index])
    }

    /// Move by `offset` and return the token at the new position.
    pub fn seek(&mut self, offset: isize) -> Result<&'a Token, CursorError> {
        self.pos = self.index_at(offset)?;
        Ok(self.current())
    }

    /// Consume the current token: move forward one and return the token
    /// just left behind.
    ///
    /// Fails on the sentinel, which can never be consumed.
    pub fn advance(&mut self) -> Result<&'a Token, CursorError> {
        self.seek(1)?;
        self.peek(-1)
    }

    /// Consume one token, failing unless it has the given kind.
    ///
    /// The token is consumed even when its kind does not match.
    pub fn expect(&mut self, kind: TokenKind) -> Result<&'a Token, CursorError> {
        let token = self.advance()?;
        if token.kind == kind {
            Ok(token)
        } else {
            trace!(expected = %kind, found = %token.kind, pos = self.pos, "unexpected token");
            Err(CursorError::UnexpectedToken {
                expected: kind,
                found: token.kind,
                span: token.span,
            })
        }
    }

    /// Consume and return the current token only if it has the given kind.
    pub fn expect_optional(&mut self, kind: TokenKind) -> Option<&'a Token> {
        if self.check(kind) {
            self.advance().ok()
        } else {
            None
        }
    }

    fn index_at(&self, offset: isize) -> Result<usize, CursorError> {
        self.pos
            .checked_add_signed(offset)
            .filter(|&index| index < self.tokens.len())
            .ok_or(CursorError::StreamExhausted {
                position: self.pos,
                offset,
            })
    }
}

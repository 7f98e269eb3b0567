//! Parse error types.
//!
//! Cursor movement failures ([`CursorError`]) are kept distinct from grammar
//! failures so callers can tell "ran off the end of the stream" apart from
//! "found the wrong token".

use flame_ir::{Span, TokenKind};

/// Failure to move or read through a token stream.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CursorError {
    /// A read or move landed outside the stream.
    #[error("reached end of input (offset {offset} from position {position})")]
    StreamExhausted { position: usize, offset: isize },
    /// `expect` consumed a token of the wrong kind.
    #[error("expected {expected} but found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        span: Span,
    },
}

/// A syntax error in a source unit.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Cursor(#[from] CursorError),
    /// The current token starts no statement form.
    #[error("unrecognized statement starting with {found}")]
    UnrecognizedStatement { found: TokenKind, span: Span },
    /// The current token starts no expression form.
    #[error("unrecognized expression syntax starting with {found}")]
    UnrecognizedExpression { found: TokenKind, span: Span },
    /// A number literal that does not fit the integer model.
    #[error("`{lexeme}` is not a valid integer literal")]
    InvalidInteger { lexeme: String, span: Span },
}

impl ParseError {
    /// Location of the offending token, when one is known.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::Cursor(CursorError::StreamExhausted { .. }) => None,
            ParseError::Cursor(CursorError::UnexpectedToken { span, .. })
            | ParseError::UnrecognizedStatement { span, .. }
            | ParseError::UnrecognizedExpression { span, .. }
            | ParseError::InvalidInteger { span, .. } => Some(*span),
        }
    }
}

//! Token types produced by the Flame lexer.
//!
//! A [`Token`] pairs a lexeme with the [`TokenKind`] and [`TokenCategory`]
//! derived from its spelling. A [`TokenList`] is the finite, immutable stream
//! handed to the parser; it always ends in exactly one [`TokenKind::Eof`]
//! sentinel.

use std::fmt;
use std::ops::Index;

use crate::Span;

/// Token kinds for Flame.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Any lexeme that matches no keyword, punctuation or literal shape.
    Unknown,

    // Keywords
    Func,
    Let,
    Return,
    If,
    True,
    False,
    Null,

    // Punctuation
    Semicolon,
    Colon,
    ColonColon,
    Equals,
    Comma,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Arrow,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,

    // Shapes
    Identifier,
    String,
    Number,

    /// End-of-stream sentinel.
    Eof,
}

impl TokenKind {
    /// Category this kind belongs to.
    pub fn category(self) -> TokenCategory {
        match self {
            TokenKind::Func
            | TokenKind::Let
            | TokenKind::Return
            | TokenKind::If
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null => TokenCategory::Keyword,
            TokenKind::Semicolon
            | TokenKind::Colon
            | TokenKind::ColonColon
            | TokenKind::Equals
            | TokenKind::Comma
            | TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::Arrow => TokenCategory::Symbol,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash => {
                TokenCategory::Operator
            }
            TokenKind::Identifier => TokenCategory::Identifier,
            TokenKind::String | TokenKind::Number => TokenCategory::Literal,
            TokenKind::Eof => TokenCategory::Util,
            TokenKind::Unknown => TokenCategory::None,
        }
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Unknown => "unknown token",
            TokenKind::Func => "`func`",
            TokenKind::Let => "`let`",
            TokenKind::Return => "`return`",
            TokenKind::If => "`if`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Null => "`null`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Colon => "`:`",
            TokenKind::ColonColon => "`::`",
            TokenKind::Equals => "`=`",
            TokenKind::Comma => "`,`",
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::LeftBrace => "`{`",
            TokenKind::RightBrace => "`}`",
            TokenKind::Arrow => "`->`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string literal",
            TokenKind::Number => "number literal",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Coarse grouping of token kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenCategory {
    None,
    Keyword,
    Symbol,
    Operator,
    Identifier,
    Literal,
    Util,
}

/// A token with its lexeme and span in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    /// Source text of the token, with surrounding whitespace trimmed.
    pub lexeme: String,
    pub kind: TokenKind,
    pub category: TokenCategory,
    pub span: Span,
}

impl Token {
    /// Create a token; the category follows from `kind`.
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, span: Span) -> Self {
        Token {
            lexeme: lexeme.into(),
            kind,
            category: kind.category(),
            span,
        }
    }

    /// The end-of-stream sentinel, placed at `offset`.
    pub fn eof(offset: u32) -> Self {
        Token::new(String::new(), TokenKind::Eof, Span::point(offset))
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}

/// A finite, sentinel-terminated sequence of tokens.
///
/// # Invariant
///
/// The last element is always the [`TokenKind::Eof`] sentinel and no other
/// element is. The list is therefore never empty.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Build a stream from `tokens`, appending the sentinel at `eof_offset`.
    ///
    /// Any sentinel already present in `tokens` is dropped so the invariant
    /// holds regardless of the input.
    pub fn new(mut tokens: Vec<Token>, eof_offset: u32) -> Self {
        tokens.retain(|token| !token.is_eof());
        tokens.push(Token::eof(eof_offset));
        TokenList { tokens }
    }

    /// Number of tokens, including the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`: the sentinel is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Kinds of every token, sentinel included. Handy in tests and dumps.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;

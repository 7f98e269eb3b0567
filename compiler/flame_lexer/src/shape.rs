//! Lexeme shapes recognized by the scanner.
//!
//! A shape is a multi-character pattern the scanner keeps extending while the
//! candidate buffer still matches it: the two-character operators, words,
//! quoted strings and numbers. Single-character punctuation has no shape and
//! is therefore always emitted on its own.

use flame_ir::TokenKind;
use logos::Logos;

/// Raw shape from logos, matched against a whole candidate buffer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    #[token("->")]
    Arrow,
    #[token("::")]
    ColonColon,
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Identifier,
    /// The closing quote is optional so an unterminated string still
    /// tokenizes as one lexeme.
    #[regex(r#""[^"]*"?"#)]
    String,
    #[regex(r"[0-9]+\.[0-9]*|[0-9]*\.[0-9]+|[0-9]+")]
    Number,
}

impl Shape {
    pub(crate) fn kind(self) -> TokenKind {
        match self {
            Shape::Arrow => TokenKind::Arrow,
            Shape::ColonColon => TokenKind::ColonColon,
            Shape::Identifier => TokenKind::Identifier,
            Shape::String => TokenKind::String,
            Shape::Number => TokenKind::Number,
        }
    }
}

/// Shape of `candidate` if the whole text matches exactly one shape.
pub(crate) fn classify(candidate: &str) -> Option<Shape> {
    let mut lexer = Shape::lexer(candidate);
    match lexer.next() {
        Some(Ok(shape)) if lexer.span().end == candidate.len() => Some(shape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_whole_words() {
        assert_eq!(classify("abc1"), Some(Shape::Identifier));
        assert_eq!(classify("1abc"), None);
        assert_eq!(classify("a b"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn test_classify_numbers() {
        assert_eq!(classify("42"), Some(Shape::Number));
        assert_eq!(classify("4."), Some(Shape::Number));
        assert_eq!(classify(".5"), Some(Shape::Number));
        assert_eq!(classify("1.25"), Some(Shape::Number));
        assert_eq!(classify("."), None);
        assert_eq!(classify("1.2."), None);
    }

    #[test]
    fn test_classify_strings() {
        assert_eq!(classify("\"hi there\""), Some(Shape::String));
        assert_eq!(classify("\"unterminated"), Some(Shape::String));
        assert_eq!(classify("\"a\"b"), None);
    }

    #[test]
    fn test_classify_two_char_operators() {
        assert_eq!(classify("->"), Some(Shape::Arrow));
        assert_eq!(classify("::"), Some(Shape::ColonColon));
        assert_eq!(classify(":"), None);
        assert_eq!(classify("-"), None);
    }
}

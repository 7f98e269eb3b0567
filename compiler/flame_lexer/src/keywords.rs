//! Lexeme to token kind lookup.

use flame_ir::TokenKind;

use crate::shape;

/// Kind of a finished, trimmed lexeme.
///
/// Fixed spellings (keywords, punctuation, operators) win; anything else is
/// classified by shape, and lexemes with no shape are [`TokenKind::Unknown`].
pub(crate) fn kind_of(lexeme: &str) -> TokenKind {
    match lexeme {
        "func" => TokenKind::Func,
        "let" => TokenKind::Let,
        "if" => TokenKind::If,
        "return" => TokenKind::Return,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "null" => TokenKind::Null,
        ";" => TokenKind::Semicolon,
        ":" => TokenKind::Colon,
        "::" => TokenKind::ColonColon,
        "(" => TokenKind::LeftParen,
        ")" => TokenKind::RightParen,
        "{" => TokenKind::LeftBrace,
        "}" => TokenKind::RightBrace,
        "->" => TokenKind::Arrow,
        "," => TokenKind::Comma,
        "=" => TokenKind::Equals,
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        "*" => TokenKind::Star,
        "/" => TokenKind::Slash,
        _ => shape::classify(lexeme).map_or(TokenKind::Unknown, shape::Shape::kind),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keywords() {
        assert_eq!(kind_of("func"), TokenKind::Func);
        assert_eq!(kind_of("null"), TokenKind::Null);
        assert_eq!(kind_of("funcs"), TokenKind::Identifier);
    }

    #[test]
    fn test_literals_and_unknowns() {
        assert_eq!(kind_of("12"), TokenKind::Number);
        assert_eq!(kind_of("\"x\""), TokenKind::String);
        assert_eq!(kind_of("_"), TokenKind::Unknown);
        assert_eq!(kind_of("%"), TokenKind::Unknown);
    }
}

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_token_category_follows_kind() {
    let token = Token::new("func", TokenKind::Func, Span::new(0, 4));
    assert_eq!(token.category, TokenCategory::Keyword);

    let token = Token::new("+", TokenKind::Plus, Span::new(0, 1));
    assert_eq!(token.category, TokenCategory::Operator);

    let token = Token::new("$", TokenKind::Unknown, Span::new(0, 1));
    assert_eq!(token.category, TokenCategory::None);
}

#[test]
fn test_token_list_appends_sentinel() {
    let list = TokenList::new(
        vec![Token::new("x", TokenKind::Identifier, Span::new(0, 1))],
        1,
    );
    assert_eq!(list.len(), 2);
    assert!(list[1].is_eof());
    assert_eq!(list[1].span, Span::point(1));
}

#[test]
fn test_token_list_keeps_single_sentinel() {
    let list = TokenList::new(
        vec![
            Token::eof(0),
            Token::new("x", TokenKind::Identifier, Span::new(0, 1)),
            Token::eof(1),
        ],
        1,
    );
    assert_eq!(list.kinds(), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn test_empty_source_stream_is_just_sentinel() {
    let list = TokenList::new(Vec::new(), 0);
    assert_eq!(list.len(), 1);
    assert!(!list.is_empty());
    assert!(list[0].is_eof());
}

#[test]
fn test_token_display_is_lexeme() {
    let token = Token::new("abc", TokenKind::Identifier, Span::new(0, 3));
    assert_eq!(token.to_string(), "abc");
    assert_eq!(TokenKind::RightBrace.to_string(), "`}`");
}

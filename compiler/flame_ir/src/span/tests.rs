use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_span_basics() {
    let span = Span::new(3, 7);
    assert_eq!(span.len(), 4);
    assert!(!span.is_empty());
    assert_eq!(span.to_range(), 3..7);
    assert!(Span::point(5).is_empty());
}

#[test]
fn test_span_from_range() {
    assert_eq!(Span::from_range(2..9), Span::new(2, 9));
}

#[test]
fn test_line_col_first_line() {
    assert_eq!(Span::point(4).line_col("let x = 1;"), (1, 5));
}

#[test]
fn test_line_col_later_line() {
    let source = "let a = 1;\nlet b = 2;\n  foo();";
    let offset = u32::try_from(source.find("foo").unwrap_or(0)).unwrap_or(0);
    assert_eq!(Span::point(offset).line_col(source), (3, 3));
}

#[test]
fn test_line_col_clamps_past_end() {
    assert_eq!(Span::point(100).line_col("ab"), (1, 3));
}

#[test]
fn test_span_display() {
    assert_eq!(format!("{}", Span::new(1, 2)), "1..2");
    assert_eq!(format!("{:?}", Span::new(1, 2)), "1..2");
}

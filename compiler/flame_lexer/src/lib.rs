//! Tokenizer for Flame.
//!
//! Scans source text left to right with one character of lookahead, growing a
//! candidate lexeme while the extended candidate still matches a known
//! [shape](shape::Shape) (greedy longest match). When extending would break
//! the match, the current candidate is emitted as a token and scanning
//! restarts at the character that broke it.
//!
//! Whitespace never forms a token of its own: candidates are trimmed before
//! classification and emission, and a candidate that trims to nothing is
//! dropped. Strings are recognized by shape only; their contents are not
//! unescaped or validated.

mod keywords;
mod shape;

use flame_ir::{Span, Token, TokenList};
use tracing::trace;

/// Tokenize `source` into a sentinel-terminated token stream.
///
/// Tokenizing never fails: text that matches no pattern becomes
/// [`TokenKind::Unknown`](flame_ir::TokenKind::Unknown) tokens.
pub fn tokenize(source: &str) -> TokenList {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut chars = source.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
        let end = offset + ch.len_utf8();
        let Some(&(_, next)) = chars.peek() else {
            break;
        };

        let extended = &source[start..end + next.len_utf8()];
        if shape::classify(extended.trim()).is_none() {
            push_lexeme(&mut tokens, source, start, end);
            start = end;
        }
    }
    push_lexeme(&mut tokens, source, start, source.len());

    trace!(count = tokens.len(), "tokenized source");
    TokenList::new(tokens, u32::try_from(source.len()).unwrap_or(u32::MAX))
}

/// Trim `source[start..end]` and push it as a token unless it is blank.
fn push_lexeme(tokens: &mut Vec<Token>, source: &str, start: usize, end: usize) {
    let raw = &source[start..end];
    let lexeme = raw.trim();
    if lexeme.is_empty() {
        return;
    }

    let begin = start + (raw.len() - raw.trim_start().len());
    tokens.push(Token::new(
        lexeme,
        keywords::kind_of(lexeme),
        Span::from_range(begin..begin + lexeme.len()),
    ));
}

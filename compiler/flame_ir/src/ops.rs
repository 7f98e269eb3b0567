//! Operator precedence and binary operators.

use std::fmt;

use crate::TokenKind;

/// Precedence tiers, loosest first.
///
/// Only [`Precedence::Additive`] and [`Precedence::Multiplicative`] carry
/// operators today; the other tiers are reserved slots in the ordering.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Precedence {
    Assignment,
    Conditional,
    Coalescing,
    ConditionalOr,
    ConditionalAnd,
    LogicalOr,
    LogicalXor,
    LogicalAnd,
    Equality,
    Shift,
    Additive,
    Multiplicative,
    Unary,
    Cast,
}

impl Precedence {
    /// Minimum precedence of a full expression.
    pub const LOWEST: Precedence = Precedence::Assignment;

    /// The next tighter tier, saturating at [`Precedence::Cast`].
    ///
    /// Parsing a right operand at the next tier makes equal-precedence
    /// chains fold to the left.
    #[must_use]
    pub fn tighter(self) -> Precedence {
        match self {
            Precedence::Assignment => Precedence::Conditional,
            Precedence::Conditional => Precedence::Coalescing,
            Precedence::Coalescing => Precedence::ConditionalOr,
            Precedence::ConditionalOr => Precedence::ConditionalAnd,
            Precedence::ConditionalAnd => Precedence::LogicalOr,
            Precedence::LogicalOr => Precedence::LogicalXor,
            Precedence::LogicalXor => Precedence::LogicalAnd,
            Precedence::LogicalAnd => Precedence::Equality,
            Precedence::Equality => Precedence::Shift,
            Precedence::Shift => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Unary,
            Precedence::Unary | Precedence::Cast => Precedence::Cast,
        }
    }
}

/// Binary arithmetic operators.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Operator spelled by a token of `kind`, if any.
    pub fn from_token_kind(kind: TokenKind) -> Option<BinaryOp> {
        match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            BinaryOp::Add | BinaryOp::Sub => Precedence::Additive,
            BinaryOp::Mul | BinaryOp::Div => Precedence::Multiplicative,
        }
    }

    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_multiplicative_binds_tighter() {
        assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
        assert_eq!(BinaryOp::Div.precedence(), Precedence::Multiplicative);
        assert_eq!(BinaryOp::Sub.precedence(), Precedence::Additive);
    }

    #[test]
    fn test_tighter_steps_one_tier() {
        assert_eq!(Precedence::Additive.tighter(), Precedence::Multiplicative);
        assert_eq!(Precedence::LOWEST.tighter(), Precedence::Conditional);
        assert_eq!(Precedence::Cast.tighter(), Precedence::Cast);
    }

    #[test]
    fn test_only_arithmetic_tokens_are_operators() {
        assert_eq!(BinaryOp::from_token_kind(TokenKind::Plus), Some(BinaryOp::Add));
        assert_eq!(BinaryOp::from_token_kind(TokenKind::Slash), Some(BinaryOp::Div));
        assert_eq!(BinaryOp::from_token_kind(TokenKind::Equals), None);
        assert_eq!(BinaryOp::from_token_kind(TokenKind::Arrow), None);
    }
}

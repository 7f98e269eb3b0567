//! Expression parsing (precedence climbing).

use flame_ir::{BinaryOp, Expr, Precedence, TokenKind};
use flame_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a full expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_expr_from(Precedence::LOWEST)
    }

    /// Parse a primary, then fold binary operators binding at least as
    /// tightly as `min`.
    ///
    /// Right operands are parsed one tier tighter than their operator, so
    /// `10 - 3 - 2` groups as `(10 - 3) - 2`.
    fn parse_expr_from(&mut self, min: Precedence) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            let mut left = self.parse_primary()?;

            while let Some(op) = BinaryOp::from_token_kind(self.cursor.current_kind()) {
                if op.precedence() < min {
                    break;
                }
                self.cursor.advance()?;
                let right = self.parse_expr_from(op.precedence().tighter())?;
                left = Expr::binary(op, left, right);
            }

            Ok(left)
        })
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::LeftParen => {
                self.cursor.advance()?;
                let inner = self.parse_expr_from(Precedence::LOWEST)?;
                self.cursor.expect(TokenKind::RightParen)?;
                Ok(inner)
            }
            // A lone `)` reads as void and is left for the caller to consume.
            TokenKind::RightParen => Ok(Expr::Void),
            TokenKind::Identifier => {
                if self.cursor.peek(1)?.kind == TokenKind::LeftParen {
                    self.parse_call()
                } else {
                    self.cursor.advance()?;
                    Ok(Expr::Var(token.lexeme.clone()))
                }
            }
            TokenKind::Number => {
                self.cursor.advance()?;
                token
                    .lexeme
                    .parse::<i64>()
                    .map(Expr::Int)
                    .map_err(|_| ParseError::InvalidInteger {
                        lexeme: token.lexeme.clone(),
                        span: token.span,
                    })
            }
            found => Err(ParseError::UnrecognizedExpression {
                found,
                span: token.span,
            }),
        }
    }

    /// `callee(arg, ...)`; a trailing comma is accepted.
    fn parse_call(&mut self) -> Result<Expr, ParseError> {
        let callee = self.cursor.expect(TokenKind::Identifier)?.lexeme.clone();
        self.cursor.expect(TokenKind::LeftParen)?;

        let mut args = Vec::new();
        while !self.cursor.check(TokenKind::RightParen) {
            args.push(self.parse_expr()?);
            if self.cursor.expect_optional(TokenKind::Comma).is_none() {
                break;
            }
        }

        self.cursor.expect(TokenKind::RightParen)?;
        Ok(Expr::Call { callee, args })
    }
}

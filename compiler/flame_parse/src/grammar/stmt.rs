//! Statement parsing.

use std::rc::Rc;

use flame_ir::{FunctionDef, Param, Stmt, TokenKind, TypeTag};
use flame_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse statements until a closing `}` or the end of the stream.
    ///
    /// The closing `}` itself is left for the caller.
    pub(crate) fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        ensure_sufficient_stack(|| {
            let mut body = Vec::new();
            while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.at_end() {
                body.push(self.parse_statement()?);
            }
            Ok(body)
        })
    }

    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Func => self.parse_function(),
            TokenKind::Return => {
                self.cursor.expect(TokenKind::Return)?;
                let value = self.parse_expr()?;
                self.cursor.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Return(value))
            }
            TokenKind::If => self.parse_if(),
            TokenKind::Identifier
            | TokenKind::LeftParen
            | TokenKind::String
            | TokenKind::Null
            | TokenKind::Number => {
                let expr = self.parse_expr()?;
                self.cursor.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Expr(expr))
            }
            TokenKind::Let => self.parse_let(),
            TokenKind::Semicolon => {
                self.cursor.advance()?;
                Ok(Stmt::Empty { span: token.span })
            }
            found => Err(ParseError::UnrecognizedStatement {
                found,
                span: token.span,
            }),
        }
    }

    /// `func name(type name, ...) { body }`
    fn parse_function(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.expect(TokenKind::Func)?;
        let name = self.cursor.expect(TokenKind::Identifier)?.lexeme.clone();

        self.cursor.expect(TokenKind::LeftParen)?;
        let params = self.parse_params()?;
        self.cursor.expect(TokenKind::RightParen)?;

        self.cursor.expect(TokenKind::LeftBrace)?;
        let body = self.parse_block()?;
        self.cursor.expect(TokenKind::RightBrace)?;

        debug!(%name, params = params.len(), "parsed function definition");
        Ok(Stmt::Function(Rc::new(FunctionDef { name, params, body })))
    }

    /// Comma-separated `type name` pairs; may be empty.
    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        while self.cursor.check(TokenKind::Identifier) {
            let tag = self.cursor.expect(TokenKind::Identifier)?;
            let name = self.cursor.expect(TokenKind::Identifier)?;
            params.push(Param {
                name: name.lexeme.clone(),
                tag: TypeTag::new(tag.lexeme.as_str()),
            });

            if self.cursor.expect_optional(TokenKind::Comma).is_none() {
                break;
            }
        }
        Ok(params)
    }

    /// `if condition { body }`
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.expect(TokenKind::If)?;
        let condition = self.parse_expr()?;

        self.cursor.expect(TokenKind::LeftBrace)?;
        let body = self.parse_block()?;
        self.cursor.expect(TokenKind::RightBrace)?;

        Ok(Stmt::If { condition, body })
    }

    /// `let name = init`, with an optional trailing `;`.
    fn parse_let(&mut self) -> Result<Stmt, ParseError> {
        self.cursor.expect(TokenKind::Let)?;
        let name = self.cursor.expect(TokenKind::Identifier)?.lexeme.clone();
        self.cursor.expect(TokenKind::Equals)?;

        let init = self.parse_expr()?;
        self.cursor.expect_optional(TokenKind::Semicolon);

        Ok(Stmt::Let { name, init })
    }
}

//! Statement and declaration parsing.

use std::rc::Rc;

use simp_ir::{ClassDecl, FieldDefault, FunctionDecl, Span, Stmt, Token, TokenKind, VarDecl};
use tracing::{debug, trace};

use crate::recovery::{synchronize, TokenSet, BLOCK_BOUNDARY};
use crate::{ParseError, Parser};

impl Parser {
    /// Parse one declaration, recovering locally on failure.
    ///
    /// On error the failure is recorded and tokens are skipped until one in
    /// `recovery` is current. At least one token is always consumed.
    pub(crate) fn declaration(&mut self, recovery: TokenSet) -> Option<Stmt> {
        let start = self.cursor.position();
        trace!(line = self.cursor.current().line, kind = %self.cursor.current_kind(), "declaration");

        match self.declaration_inner() {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                debug!(line = error.line, message = %error.message, "parse error, synchronizing");
                self.errors.push(error);
                if self.cursor.position() == start {
                    self.cursor.advance();
                }
                let skipped = synchronize(&mut self.cursor, recovery);
                trace!(skipped, "synchronized");
                None
            }
        }
    }

    fn declaration_inner(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Var | TokenKind::Const => {
                let is_const = self.cursor.advance().kind == TokenKind::Const;
                self.var_declaration(is_const).map(Stmt::Var)
            }
            TokenKind::Function => {
                self.cursor.advance();
                let name = self.expect(TokenKind::Identifier, "expected function name")?;
                self.function_rest(name, false).map(Stmt::Function)
            }
            TokenKind::Class => {
                self.cursor.advance();
                self.class_declaration().map(|class| Stmt::Class(Rc::new(class)))
            }
            _ => self.statement(),
        }
    }

    fn var_declaration(&mut self, is_const: bool) -> Result<VarDecl, ParseError> {
        let name = self.expect(TokenKind::Identifier, "expected variable name")?;
        let initializer = if self.cursor.eat(TokenKind::Equal) {
            Some(self.expression()?)
        } else {
            None
        };

        if is_const && initializer.is_none() {
            return Err(ParseError::unexpected(
                "expected `=` after constant name, constants need an initializer",
                self.cursor.current(),
            ));
        }

        self.expect_terminator("expected `;` after variable declaration")?;
        Ok(VarDecl {
            name,
            initializer,
            is_const,
        })
    }

    /// Parameter list and body, after the name has been consumed.
    fn function_rest(&mut self, name: Token, is_method: bool) -> Result<Rc<FunctionDecl>, ParseError> {
        self.expect(TokenKind::LParen, "expected `(` after function name")?;
        let mut params = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                params.push(self.expect(TokenKind::Identifier, "expected parameter name")?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "expected `)` after parameters")?;
        self.expect(TokenKind::LBrace, "expected `{` before function body")?;
        let body = self.block_body()?;

        Ok(Rc::new(FunctionDecl {
            name,
            params,
            body,
            is_method,
        }))
    }

    /// `class Name [: Super] { field = expr; method(args) { ... } }`.
    ///
    /// A method named after the class is its constructor.
    fn class_declaration(&mut self) -> Result<ClassDecl, ParseError> {
        let name = self.expect(TokenKind::Identifier, "expected class name")?;
        let superclass = if self.cursor.eat(TokenKind::Colon) {
            Some(self.expect(TokenKind::Identifier, "expected superclass name after `:`")?)
        } else {
            None
        };
        self.expect(TokenKind::LBrace, "expected `{` before class body")?;

        let mut fields = Vec::new();
        let mut methods = Vec::new();
        let mut constructor = None;

        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            let member = self.expect(TokenKind::Identifier, "expected class member name")?;
            match self.cursor.current_kind() {
                TokenKind::Equal => {
                    self.cursor.advance();
                    let value = self.expression()?;
                    self.expect_terminator("expected `;` after field default")?;
                    fields.push(FieldDefault {
                        name: member,
                        value,
                    });
                }
                TokenKind::LParen => {
                    let is_ctor = member.lexeme == name.lexeme;
                    let method = self.function_rest(member, true)?;
                    if is_ctor {
                        constructor = Some(method);
                    } else {
                        methods.push(method);
                    }
                }
                _ => {
                    return Err(ParseError::unexpected(
                        "expected `=` or `(` after class member name",
                        self.cursor.current(),
                    ))
                }
            }
        }
        self.expect(TokenKind::RBrace, "expected `}` after class body")?;

        Ok(ClassDecl {
            name,
            fields,
            methods,
            constructor,
            superclass,
        })
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::LBrace => {
                self.cursor.advance();
                self.block_body().map(Stmt::Block)
            }
            TokenKind::If => {
                self.cursor.advance();
                self.if_statement()
            }
            TokenKind::While => {
                self.cursor.advance();
                self.while_statement()
            }
            TokenKind::Return => {
                let keyword = self.cursor.advance().span;
                self.return_statement(keyword)
            }
            _ => {
                let expr = self.expression()?;
                self.expect_terminator("expected `;` after expression")?;
                Ok(Stmt::Expression(expr))
            }
        }
    }

    /// Declarations up to and including the closing `}`.
    fn block_body(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration(BLOCK_BOUNDARY) {
                statements.push(stmt);
            }
        }
        self.expect(TokenKind::RBrace, "expected `}` after block")?;
        Ok(statements)
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LParen, "expected `(` after `if`")?;
        let condition = self.expression()?;
        self.expect(TokenKind::RParen, "expected `)` after if condition")?;
        let then_branch = Box::new(self.statement()?);
        let else_branch = if self.cursor.eat(TokenKind::Else) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };
        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.expect(TokenKind::LParen, "expected `(` after `while`")?;
        let condition = self.expression()?;
        self.expect(TokenKind::RParen, "expected `)` after while condition")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { condition, body })
    }

    fn return_statement(&mut self, keyword: Span) -> Result<Stmt, ParseError> {
        let value = if self.cursor.check(TokenKind::Semicolon) || self.cursor.is_at_end() {
            None
        } else {
            Some(self.expression()?)
        };
        if !self.cursor.is_at_end() {
            self.expect_terminator("expected `;` after return value")?;
        }
        let span = value.as_ref().map_or(keyword, |v| keyword.merge(v.span));
        Ok(Stmt::Return { value, span })
    }
}

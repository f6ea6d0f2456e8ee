//! Expression parsing.
//!
//! Precedence, lowest to highest:
//! ternary, `??`, `||`/`&&`, equality, relational, bitwise, additive,
//! multiplicative, unary, prefix `++`/`--`, postfix `++`/`--`, primary.

use simp_ir::{
    BinaryOp, Constant, Expr, ExprKind, IncDecOp, Literal, LogicalOp, Token, TokenKind, UnaryOp,
};
use simp_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested input cannot
    /// overflow the host stack.
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.ternary())
    }

    fn ternary(&mut self) -> Result<Expr, ParseError> {
        let condition = self.coalesce()?;
        if !self.cursor.eat(TokenKind::Question) {
            return Ok(condition);
        }

        let then_branch = self.expression()?;
        self.expect(TokenKind::Colon, "expected `:` after the true branch of `?`")?;
        let else_branch = self.expression()?;
        let span = condition.span.merge(else_branch.span);
        Ok(Expr::new(
            ExprKind::Ternary {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            span,
        ))
    }

    fn coalesce(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.logical()?;
        while self.cursor.eat(TokenKind::QuestionQuestion) {
            let right = self.logical()?;
            left = short_circuit(left, LogicalOp::Coalesce, right);
        }
        Ok(left)
    }

    /// `||` and `&&` share one level, left-associative.
    fn logical(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.equality()?;
        while let Some(op) = LogicalOp::from_token(self.cursor.current_kind())
            .filter(|op| *op != LogicalOp::Coalesce)
        {
            self.cursor.advance();
            let right = self.equality()?;
            left = short_circuit(left, op, right);
        }
        Ok(left)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(
            &[TokenKind::EqualEqual, TokenKind::BangEqual],
            Parser::relational,
        )
    }

    fn relational(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(
            &[
                TokenKind::Greater,
                TokenKind::GreaterEqual,
                TokenKind::Less,
                TokenKind::LessEqual,
            ],
            Parser::bitwise,
        )
    }

    fn bitwise(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(
            &[TokenKind::Pipe, TokenKind::Ampersand, TokenKind::Caret],
            Parser::additive,
        )
    }

    fn additive(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(&[TokenKind::Plus, TokenKind::Minus], Parser::multiplicative)
    }

    fn multiplicative(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(&[TokenKind::Star, TokenKind::Slash], Parser::unary)
    }

    /// One left-associative binary level over `ops`.
    fn binary_level(
        &mut self,
        ops: &[TokenKind],
        next: fn(&mut Parser) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut left = next(self)?;
        while ops.contains(&self.cursor.current_kind()) {
            let Some(op) = BinaryOp::from_token(self.cursor.current_kind()) else {
                break;
            };
            self.cursor.advance();
            let right = next(self)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    left: Box::new(left),
                    op,
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        let op = match self.cursor.current_kind() {
            TokenKind::Bang => UnaryOp::Not,
            TokenKind::Minus => UnaryOp::Neg,
            _ => return self.prefix(),
        };
        let start = self.cursor.advance().span;
        let operand = ensure_sufficient_stack(|| self.unary())?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    fn prefix(&mut self) -> Result<Expr, ParseError> {
        let Some(op) = IncDecOp::from_token(self.cursor.current_kind()) else {
            return self.postfix();
        };
        let start = self.cursor.advance().span;
        let operand = self.postfix()?;
        let span = start.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Prefix {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }

    fn postfix(&mut self) -> Result<Expr, ParseError> {
        let operand = self.primary()?;
        let Some(op) = IncDecOp::from_token(self.cursor.current_kind()) else {
            return Ok(operand);
        };
        let end = self.cursor.advance().span;
        let span = operand.span.merge(end);
        Ok(Expr::new(
            ExprKind::Postfix {
                operand: Box::new(operand),
                op,
            },
            span,
        ))
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current().clone();
        trace!(kind = %token.kind, line = token.line, "primary");

        let constant = match token.kind {
            TokenKind::NumberLiteral | TokenKind::StringLiteral => match &token.literal {
                Some(Literal::Number(n)) => Constant::Number(*n),
                Some(Literal::Str(s)) => Constant::Str(s.clone()),
                None => return Err(ParseError::unexpected("malformed literal", &token)),
            },
            TokenKind::True => Constant::Bool(true),
            TokenKind::False => Constant::Bool(false),
            TokenKind::Null => Constant::Null,
            TokenKind::LBracket => {
                self.cursor.advance();
                return self.array(token);
            }
            TokenKind::Identifier => {
                self.cursor.advance();
                return self.identifier_chain(token);
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                let close = self.expect(TokenKind::RParen, "expected `)` after expression")?;
                return Ok(Expr::new(
                    ExprKind::Grouping(Box::new(inner)),
                    token.span.merge(close.span),
                ));
            }
            _ => return Err(ParseError::expected_expression(&token)),
        };

        self.cursor.advance();
        Ok(Expr::new(ExprKind::Literal(constant), token.span))
    }

    /// `[a, b, c]`. A trailing comma is accepted.
    fn array(&mut self, open: Token) -> Result<Expr, ParseError> {
        let mut elements = Vec::new();
        while !self.cursor.check(TokenKind::RBracket) {
            if self.cursor.is_at_end() {
                return Err(ParseError::unexpected(
                    "expected `]` to close array literal",
                    self.cursor.current(),
                ));
            }
            elements.push(self.expression()?);
            self.cursor.eat(TokenKind::Comma);
        }
        let close = self.cursor.advance().span;
        Ok(Expr::new(
            ExprKind::ArrayCreation(elements),
            open.span.merge(close),
        ))
    }

    /// Identifier followed by any mix of `.name`, `[index]` and `(args)`,
    /// optionally ended by an assignment.
    ///
    /// `target op= value` is desugared to `target = target op value` with
    /// the target subtree duplicated, so subexpressions of the target run
    /// twice: `a[f()] += 1` calls `f` once to read and once to write.
    fn identifier_chain(&mut self, name: Token) -> Result<Expr, ParseError> {
        let span = name.span;
        let mut expr = Expr::new(ExprKind::Variable(name), span);

        loop {
            let kind = self.cursor.current_kind();
            if kind == TokenKind::Equal {
                self.cursor.advance();
                let value = self.expression()?;
                return Ok(assignment(expr, value));
            }
            if let Some(op) = BinaryOp::from_compound_assign(kind) {
                self.cursor.advance();
                let value = self.expression()?;
                let span = expr.span.merge(value.span);
                let combined = Expr::new(
                    ExprKind::Binary {
                        left: Box::new(expr.clone()),
                        op,
                        right: Box::new(value),
                    },
                    span,
                );
                return Ok(assignment(expr, combined));
            }

            expr = match kind {
                TokenKind::Dot => {
                    self.cursor.advance();
                    let field = self.expect(TokenKind::Identifier, "expected field name after `.`")?;
                    let span = expr.span.merge(field.span);
                    Expr::new(
                        ExprKind::DotAccess {
                            target: Box::new(expr),
                            name: field,
                        },
                        span,
                    )
                }
                TokenKind::LBracket => {
                    self.cursor.advance();
                    let index = self.expression()?;
                    let close = self.expect(TokenKind::RBracket, "expected `]` after index")?;
                    let span = expr.span.merge(close.span);
                    Expr::new(
                        ExprKind::IndexAccess {
                            target: Box::new(expr),
                            index: Box::new(index),
                        },
                        span,
                    )
                }
                TokenKind::LParen => {
                    self.cursor.advance();
                    let args = self.arguments()?;
                    let span = expr.span.merge(self.cursor.previous_span());
                    Expr::new(
                        ExprKind::FunctionCall {
                            callee: Box::new(expr),
                            args,
                        },
                        span,
                    )
                }
                _ => return Ok(expr),
            };
        }
    }

    /// Comma-separated call arguments up to and including `)`.
    fn arguments(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if !self.cursor.check(TokenKind::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "expected `)` after arguments")?;
        Ok(args)
    }
}

fn short_circuit(left: Expr, op: LogicalOp, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::ShortCircuit {
            left: Box::new(left),
            op,
            right: Box::new(right),
        },
        span,
    )
}

fn assignment(target: Expr, value: Expr) -> Expr {
    let span = target.span.merge(value.span);
    Expr::new(
        ExprKind::Assignment {
            target: Box::new(target),
            value: Box::new(value),
        },
        span,
    )
}

//! Expression nodes.

use super::operators::{BinaryOp, IncDecOp, LogicalOp, UnaryOp};
use crate::{Span, Token};

/// A literal constant appearing in source.
#[derive(Clone, Debug, PartialEq)]
pub enum Constant {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
}

/// An expression together with the source range it was parsed from.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Literal(Constant),
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// `&&`, `||`, `??`: the right operand is evaluated lazily.
    ShortCircuit {
        left: Box<Expr>,
        op: LogicalOp,
        right: Box<Expr>,
    },
    Ternary {
        condition: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    /// `++x` / `--x`
    Prefix {
        op: IncDecOp,
        operand: Box<Expr>,
    },
    /// `x++` / `x--`
    Postfix {
        operand: Box<Expr>,
        op: IncDecOp,
    },
    Grouping(Box<Expr>),
    Variable(Token),
    Assignment {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    IndexAccess {
        target: Box<Expr>,
        index: Box<Expr>,
    },
    DotAccess {
        target: Box<Expr>,
        name: Token,
    },
    FunctionCall {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    ArrayCreation(Vec<Expr>),
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Whether this expression may appear on the left of `=`.
    pub fn is_assignable(&self) -> bool {
        matches!(
            self.kind,
            ExprKind::Variable(_) | ExprKind::IndexAccess { .. } | ExprKind::DotAccess { .. }
        )
    }
}

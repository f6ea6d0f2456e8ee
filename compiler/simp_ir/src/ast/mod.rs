//! Syntax tree for SIMP.
//!
//! Two node families, matched exhaustively by every pass:
//! - [`Expr`] / [`ExprKind`]: expressions, each carrying the span it covers
//! - [`Stmt`]: statements
//!
//! Children are owned by their parent. Function and class declarations are
//! behind `Rc` because the runtime values created from them (closures and
//! class constructors) keep the body alive after the statement list that
//! declared them has been dropped, e.g. across REPL lines.

mod expr;
mod operators;
mod stmt;

pub use expr::{Constant, Expr, ExprKind};
pub use operators::{BinaryOp, IncDecOp, LogicalOp, UnaryOp};
pub use stmt::{ClassDecl, FieldDefault, FunctionDecl, Stmt, VarDecl};

#[cfg(test)]
mod tests;

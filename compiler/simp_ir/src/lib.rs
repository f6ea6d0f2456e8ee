//! Shared front-end types for SIMP.
//!
//! - [`Span`]: character range in the source
//! - [`Token`] / [`TokenKind`] / [`Literal`]: lexer output
//! - [`ast`]: expression and statement trees produced by the parser
//!
//! Every later pass (parser, interpreter, semantic analyzer) depends on this
//! crate and nothing else from the front end, so external tools can consume
//! the token stream without pulling in the evaluator.

pub mod ast;
mod span;
mod token;

pub use ast::{
    BinaryOp, ClassDecl, Constant, Expr, ExprKind, FieldDefault, FunctionDecl, IncDecOp, LogicalOp,
    Stmt, UnaryOp, VarDecl,
};
pub use span::Span;
pub use token::{Literal, Token, TokenKind};

//! Statement nodes and declarations.

use std::rc::Rc;

use super::expr::Expr;
use crate::{Span, Token};

#[derive(Clone, Debug, PartialEq)]
pub struct VarDecl {
    pub name: Token,
    pub initializer: Option<Expr>,
    /// Declared with `const`: the binding cannot be reassigned.
    pub is_const: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub name: Token,
    pub params: Vec<Token>,
    pub body: Vec<Stmt>,
    /// Declared inside a class body. Methods are bound per instance and
    /// see `this` (plus `base`/`super` when the class has a superclass).
    pub is_method: bool,
}

impl FunctionDecl {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// `name = value;` inside a class body.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefault {
    pub name: Token,
    pub value: Expr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassDecl {
    pub name: Token,
    /// In declaration order; a later default for the same name wins.
    pub fields: Vec<FieldDefault>,
    pub methods: Vec<Rc<FunctionDecl>>,
    /// The method whose name equals the class name.
    pub constructor: Option<Rc<FunctionDecl>>,
    pub superclass: Option<Token>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    Var(VarDecl),
    Function(Rc<FunctionDecl>),
    Class(Rc<ClassDecl>),
    Return {
        value: Option<Expr>,
        span: Span,
    },
    Expression(Expr),
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
}

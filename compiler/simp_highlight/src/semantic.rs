//! Scope-aware identifier classification.
//!
//! Walks the parsed program with the same scope rules the interpreter uses
//! and tags each identifier with the role its binding has. Nothing is
//! evaluated: unresolved names are left alone rather than reported.

use simp_eval::Environment;
use simp_ir::{ClassDecl, Expr, ExprKind, FunctionDecl, Stmt, Token, VarDecl};
use simp_stack::ensure_sufficient_stack;

use crate::{HighlightKind, Highlights, IdentKind};

/// Tags identifiers in a [`Highlights`] overlay from a statement list.
pub struct SemanticAnalyzer<'h> {
    defs: Environment<IdentKind>,
    highlights: &'h mut Highlights,
}

impl<'h> SemanticAnalyzer<'h> {
    pub fn new(highlights: &'h mut Highlights) -> Self {
        SemanticAnalyzer {
            defs: Environment::new(),
            highlights,
        }
    }

    pub fn analyze(&mut self, statements: &[Stmt]) {
        for stmt in statements {
            self.stmt(stmt);
        }
    }

    fn tag(&mut self, token: &Token, kind: HighlightKind) {
        self.highlights.tag(token.span, kind);
    }

    /// Run `f` in a child scope of the current one.
    fn with_scope<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let child = self.defs.child();
        let previous = std::mem::replace(&mut self.defs, child);
        let result = f(self);
        self.defs = previous;
        result
    }

    fn stmt(&mut self, stmt: &Stmt) {
        ensure_sufficient_stack(|| self.stmt_inner(stmt));
    }

    fn stmt_inner(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Var(decl) => self.var_decl(decl),
            Stmt::Function(decl) => self.function_decl(decl),
            Stmt::Class(decl) => self.class_decl(decl),
            Stmt::Return { value, .. } => {
                if let Some(value) = value {
                    self.expr(value);
                }
            }
            Stmt::Expression(expr) => self.expr(expr),
            Stmt::Block(statements) => self.with_scope(|this| this.analyze(statements)),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.expr(condition);
                self.stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.stmt(else_branch);
                }
            }
            Stmt::While { condition, body } => {
                self.expr(condition);
                self.stmt(body);
            }
        }
    }

    fn var_decl(&mut self, decl: &VarDecl) {
        self.tag(&decl.name, HighlightKind::VariableName);
        self.defs.define(decl.name.lexeme.as_str(), IdentKind::Variable);
        if let Some(initializer) = &decl.initializer {
            self.expr(initializer);
        }
    }

    fn function_decl(&mut self, decl: &FunctionDecl) {
        self.tag(&decl.name, HighlightKind::FunctionName);
        if !decl.is_method {
            self.defs.define(decl.name.lexeme.as_str(), IdentKind::Function);
        }
        self.with_scope(|this| {
            for param in &decl.params {
                this.tag(param, HighlightKind::Argument);
                this.defs.define(param.lexeme.as_str(), IdentKind::Argument);
            }
            this.analyze(&decl.body);
        });
    }

    /// Methods, field defaults and the constructor share a class-level scope
    /// holding `this`, plus `base` and `super` for subclasses.
    fn class_decl(&mut self, decl: &ClassDecl) {
        self.tag(&decl.name, HighlightKind::ClassName);
        self.defs.define(decl.name.lexeme.as_str(), IdentKind::Class);

        self.with_scope(|this| {
            this.defs.define("this", IdentKind::This);
            if decl.superclass.is_some() {
                this.defs.define("base", IdentKind::Base);
                this.defs.define("super", IdentKind::Super);
            }

            for field in &decl.fields {
                this.tag(&field.name, HighlightKind::VariableName);
                this.expr(&field.value);
            }
            for method in &decl.methods {
                this.function_decl(method);
            }
            if let Some(ctor) = &decl.constructor {
                this.function_decl(ctor);
                this.tag(&ctor.name, HighlightKind::CtorDeclaration);
            }
        });

        if let Some(superclass) = &decl.superclass {
            self.tag(superclass, HighlightKind::ClassName);
        }
    }

    fn expr(&mut self, expr: &Expr) {
        ensure_sufficient_stack(|| self.expr_inner(expr));
    }

    fn expr_inner(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Literal(_) => {}
            ExprKind::Variable(name) => self.reference(name),
            ExprKind::Binary { left, right, .. } | ExprKind::ShortCircuit { left, right, .. } => {
                self.expr(left);
                self.expr(right);
            }
            ExprKind::Ternary {
                condition,
                then_branch,
                else_branch,
            } => {
                self.expr(condition);
                self.expr(then_branch);
                self.expr(else_branch);
            }
            ExprKind::Unary { operand, .. }
            | ExprKind::Prefix { operand, .. }
            | ExprKind::Postfix { operand, .. } => self.expr(operand),
            ExprKind::Grouping(inner) => self.expr(inner),
            ExprKind::Assignment { target, value } => {
                self.expr(target);
                self.expr(value);
            }
            ExprKind::IndexAccess { target, index } => {
                self.expr(target);
                self.expr(index);
            }
            ExprKind::DotAccess { target, name } => {
                self.tag(name, HighlightKind::AccessorToken);
                self.expr(target);
            }
            ExprKind::FunctionCall { callee, args } => self.call(callee, args),
            ExprKind::ArrayCreation(elements) => {
                for element in elements {
                    self.expr(element);
                }
            }
        }
    }

    fn reference(&mut self, name: &Token) {
        if let Some(kind) = self.defs.get_no_fail(&name.lexeme) {
            self.tag(name, kind.highlight());
        }
    }

    /// A bare callee is `Called` unless it resolves; a dot-access callee's
    /// field name is always `Called`.
    fn call(&mut self, callee: &Expr, args: &[Expr]) {
        for arg in args {
            self.expr(arg);
        }
        if let ExprKind::Variable(name) = &callee.kind {
            self.tag(name, HighlightKind::Called);
        }
        self.expr(callee);
        if let ExprKind::DotAccess { name, .. } = &callee.kind {
            self.tag(name, HighlightKind::Called);
        }
    }
}

#[cfg(test)]
mod tests;

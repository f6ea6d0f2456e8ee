//! Debug commands: `lex`, `parse` and `highlight` for inspecting the front end.

use std::fmt::Write;

use simp_diagnostic::span_utils::LineOffsetTable;
use simp_ir::Stmt;

use super::{read_file, Frontend};

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    println!("Tokens for '{path}':");
    print!("{}", format_tokens(&content));
}

/// Parse a file and display a statement summary.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    println!("Parse result for '{path}':");
    print!("{}", format_parse(&content));
}

/// Classify a file and display the non-empty highlight runs.
pub fn highlight_file(path: &str) {
    let content = read_file(path);
    println!("Highlights for '{path}':");
    print!("{}", format_highlights(&content));
}

pub fn format_tokens(source: &str) -> String {
    let lexed = simp_lexer::lex(source);
    let mut out = String::new();
    for tok in &lexed.tokens {
        let _ = writeln!(
            out,
            "  {:?} {:?} @ {} (line {})",
            tok.kind, tok.lexeme, tok.span, tok.line
        );
    }
    for err in &lexed.errors {
        let _ = writeln!(out, "  error: {err}");
    }
    out
}

pub fn format_parse(source: &str) -> String {
    let frontend = Frontend::new(source, false);
    let mut out = String::new();
    let _ = writeln!(out, "  Statements: {}", frontend.statements.len());
    let _ = writeln!(out, "  Errors: {}", frontend.diagnostics.len());

    if !frontend.statements.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Statements:");
        for stmt in &frontend.statements {
            let _ = writeln!(out, "  {}", describe(stmt));
        }
    }

    if !frontend.diagnostics.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Errors:");
        for diag in &frontend.diagnostics {
            let _ = writeln!(out, "  {diag}");
        }
    }
    out
}

pub fn format_highlights(source: &str) -> String {
    let highlights = simp_highlight::highlight(source);
    let lines = LineOffsetTable::build(source);
    let mut out = String::new();
    for (span, kind) in highlights.runs() {
        let (line, col) = lines.offset_to_line_col(span.start);
        let _ = writeln!(out, "  {line}:{col} {kind} {:?}", span.slice(source));
    }
    out
}

fn describe(stmt: &Stmt) -> String {
    match stmt {
        Stmt::Var(decl) => {
            let keyword = if decl.is_const { "const" } else { "var" };
            format!("{keyword} {}", decl.name.lexeme)
        }
        Stmt::Function(decl) => {
            let params: Vec<_> = decl.params.iter().map(|p| p.lexeme.as_str()).collect();
            format!("function {}({})", decl.name.lexeme, params.join(", "))
        }
        Stmt::Class(decl) => {
            let mut text = format!("class {}", decl.name.lexeme);
            if let Some(superclass) = &decl.superclass {
                let _ = write!(text, " : {}", superclass.lexeme);
            }
            let _ = write!(
                text,
                " ({} fields, {} methods{})",
                decl.fields.len(),
                decl.methods.len(),
                if decl.constructor.is_some() { ", constructor" } else { "" }
            );
            text
        }
        Stmt::Return { .. } => "return".to_string(),
        Stmt::Expression(_) => "expression".to_string(),
        Stmt::Block(statements) => format!("block ({} statements)", statements.len()),
        Stmt::If { else_branch, .. } => {
            if else_branch.is_some() {
                "if/else".to_string()
            } else {
                "if".to_string()
            }
        }
        Stmt::While { .. } => "while".to_string(),
    }
}

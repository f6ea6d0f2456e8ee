use super::*;
use simp_ir::TokenKind;

use HighlightKind::{
    Argument, Base, Called, ClassName, CtorDeclaration, FunctionName, Super, This, VariableName,
};

/// Semantic kinds only, without the lexical pass.
fn analyze(source: &str) -> Highlights {
    let tokens = simp_lexer::lex(source).tokens;
    let parsed = simp_parse::parse(&tokens);
    let mut highlights = Highlights::for_source(source);
    SemanticAnalyzer::new(&mut highlights).analyze(&parsed.statements);
    highlights
}

/// Kind of every identifier token spelled `name`, in source order.
fn kinds_of(source: &str, name: &str) -> Vec<HighlightKind> {
    let highlights = analyze(source);
    simp_lexer::lex(source)
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Identifier && t.lexeme == name)
        .map(|t| highlights.get(t.span.start))
        .collect()
}

mod scopes {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn declaration_and_references_agree() {
        let source = "var a = 1; a = a + 1; { a; { a; } }";
        assert_eq!(kinds_of(source, "a"), vec![VariableName; 5]);
    }

    #[test]
    fn inner_declaration_does_not_leak() {
        let source = "var x = 1; { function x() { return 0; } x(); } x;";
        assert_eq!(
            kinds_of(source, "x"),
            vec![VariableName, FunctionName, FunctionName, VariableName]
        );
    }

    #[test]
    fn parameters_end_with_their_function() {
        let source = "function f(n) { return n; } n;";
        assert_eq!(
            kinds_of(source, "n"),
            vec![Argument, Argument, HighlightKind::None]
        );
        assert_eq!(kinds_of(source, "f"), vec![FunctionName]);
    }

    #[test]
    fn unresolved_references_are_untagged() {
        assert_eq!(kinds_of("y + 1;", "y"), vec![HighlightKind::None]);
    }

    #[test]
    fn initializer_sees_its_own_name() {
        assert_eq!(kinds_of("var z = z;", "z"), vec![VariableName; 2]);
    }

    #[test]
    fn recursion_resolves_to_the_function() {
        let source = "function fact(n) { return fact(n - 1); }";
        assert_eq!(kinds_of(source, "fact"), vec![FunctionName; 2]);
    }
}

mod calls {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unresolved_callee_is_called() {
        assert_eq!(kinds_of("print(1);", "print"), vec![Called]);
        let source = "f(); function f() {}";
        assert_eq!(kinds_of(source, "f"), vec![Called, FunctionName]);
    }

    #[test]
    fn resolved_callee_keeps_its_kind() {
        let source = "var g = null; g();";
        assert_eq!(kinds_of(source, "g"), vec![VariableName; 2]);
    }

    #[test]
    fn arguments_are_walked() {
        let source = "var a = 1; print(a, [a]);";
        assert_eq!(kinds_of(source, "a"), vec![VariableName; 3]);
    }

    #[test]
    fn dot_access_names_are_structural() {
        let source = "var p = null; p.x.y(1); p.x = 2;";
        assert_eq!(kinds_of(source, "p"), vec![VariableName; 3]);
        assert_eq!(
            kinds_of(source, "x"),
            vec![HighlightKind::AccessorToken; 2]
        );
        assert_eq!(kinds_of(source, "y"), vec![Called]);
    }
}

mod classes {
    use super::*;
    use pretty_assertions::assert_eq;

    const PROGRAM: &str = "\
class A { v = 1; get() { return this.v; } A(n) { this.v = n; } }
class B : A { B() { super(2); } show() { return base.get(); } }
var b = B();";

    #[test]
    fn class_names_ctors_and_superclass() {
        assert_eq!(
            kinds_of(PROGRAM, "A"),
            vec![ClassName, CtorDeclaration, ClassName]
        );
        assert_eq!(
            kinds_of(PROGRAM, "B"),
            vec![ClassName, CtorDeclaration, ClassName]
        );
    }

    #[test]
    fn members() {
        assert_eq!(
            kinds_of(PROGRAM, "v"),
            vec![
                VariableName,
                HighlightKind::AccessorToken,
                HighlightKind::AccessorToken
            ]
        );
        assert_eq!(kinds_of(PROGRAM, "get"), vec![FunctionName, Called]);
        assert_eq!(kinds_of(PROGRAM, "show"), vec![FunctionName]);
        assert_eq!(kinds_of(PROGRAM, "n"), vec![Argument; 2]);
    }

    #[test]
    fn implicit_bindings() {
        assert_eq!(kinds_of(PROGRAM, "this"), vec![This; 2]);
        assert_eq!(kinds_of(PROGRAM, "super"), vec![Super]);
        assert_eq!(kinds_of(PROGRAM, "base"), vec![Base]);
    }

    #[test]
    fn base_and_super_need_a_superclass() {
        let source = "class A { m() { return base; } A() { super(); } }";
        assert_eq!(kinds_of(source, "base"), vec![HighlightKind::None]);
        assert_eq!(kinds_of(source, "super"), vec![Called]);
    }

    #[test]
    fn plain_functions_have_no_this() {
        let source = "function f() { return this; }";
        assert_eq!(kinds_of(source, "this"), vec![HighlightKind::None]);
    }

    #[test]
    fn field_defaults_see_this() {
        let source = "class C { a = this; }";
        assert_eq!(kinds_of(source, "this"), vec![This]);
    }

    #[test]
    fn methods_are_not_global() {
        let source = "class A { m() {} } m();";
        assert_eq!(kinds_of(source, "m"), vec![FunctionName, Called]);
    }
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 2000;
    let source = format!("var a = {}1{};", "(".repeat(depth), ")".repeat(depth));
    let _ = analyze(&source);
}

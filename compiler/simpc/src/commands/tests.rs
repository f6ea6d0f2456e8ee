use super::*;
use simp_diagnostic::ErrorCode;
use simp_eval::{buffer_handler, Interpreter};

fn buffered() -> (Interpreter, simp_eval::SharedPrintHandler) {
    let handler = buffer_handler();
    let interpreter = Interpreter::builder()
        .print_handler(handler.clone())
        .build();
    (interpreter, handler)
}

mod frontend {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collects_lex_and_parse_errors() {
        let frontend = Frontend::new("var x = 1 $; var = 2;", false);
        assert!(frontend.has_errors());
        let codes: Vec<ErrorCode> = frontend.diagnostics.iter().map(|d| d.code).collect();
        assert!(codes.iter().copied().any(ErrorCode::is_lexer_error));
        assert!(codes.iter().copied().any(ErrorCode::is_parser_error));
    }

    #[test]
    fn clean_source_has_no_diagnostics() {
        let frontend = Frontend::new("var x = 1; // note", false);
        assert!(!frontend.has_errors());
        assert_eq!(frontend.statements.len(), 1);
    }

    #[test]
    fn repl_mode_tolerates_missing_semicolon() {
        assert!(Frontend::new("1 + 2", false).has_errors());
        assert!(!Frontend::new("1 + 2", true).has_errors());
    }
}

mod run {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prints_through_the_handler() {
        let (mut interpreter, handler) = buffered();
        let result = run_source("print(\"a\" + \"b\"); print(1 + 2 * 3);", &mut interpreter);
        assert_eq!(result, Ok(()));
        assert_eq!(handler.get_output(), "ab7");
    }

    #[test]
    fn syntax_errors_prevent_execution() {
        let (mut interpreter, handler) = buffered();
        let result = run_source("print(1); var = ;", &mut interpreter);
        assert!(result.is_err());
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn runtime_errors_become_diagnostics() {
        let (mut interpreter, _) = buffered();
        let Err(diagnostics) = run_source("var a = 1;\nprint(b);", &mut interpreter) else {
            panic!("expected a runtime error");
        };
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, ErrorCode::E6001);
        assert_eq!(diagnostics[0].message, "undefined variable: b");
    }
}

mod repl {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn globals_persist_and_values_echo() {
        let handler = buffer_handler();
        let mut repl = Repl::with_print_handler(handler.clone());
        assert_eq!(repl.eval_line("var x = 2"), Ok(()));
        assert_eq!(repl.eval_line("x * 3"), Ok(()));
        assert_eq!(repl.eval_line("null"), Ok(()));
        assert_eq!(handler.get_output(), "6\n");
        assert!(repl.interpreter().global("x").is_some());
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let handler = buffer_handler();
        let mut repl = Repl::with_print_handler(handler.clone());
        assert!(repl.eval_line("missing").is_err());
        assert_eq!(repl.eval_line("\"ok\""), Ok(()));
        assert_eq!(handler.get_output(), "ok\n");
    }
}

mod debug {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn token_dump_lists_every_token() {
        let dump = format_tokens("var x;");
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(
            lines,
            vec![
                "  Var \"var\" @ 0..3 (line 1)",
                "  Identifier \"x\" @ 4..5 (line 1)",
                "  Semicolon \";\" @ 5..6 (line 1)",
                "  Eof \"\" @ 6..6 (line 1)",
            ]
        );
    }

    #[test]
    fn parse_summary_describes_statements() {
        let summary = format_parse("const k = 1;\nfunction f(a, b) {}\nclass B : A { x = 1; B() {} }");
        assert!(summary.contains("  Statements: 3"));
        assert!(summary.contains("  Errors: 0"));
        assert!(summary.contains("  const k"));
        assert!(summary.contains("  function f(a, b)"));
        assert!(summary.contains("  class B : A (1 fields, 0 methods, constructor)"));
    }

    #[test]
    fn highlight_dump_shows_runs_with_positions() {
        let dump = format_highlights("var x;\nx;");
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(
            lines,
            vec!["  1:1 kw-var \"var\"", "  1:5 variable \"x\"", "  2:1 variable \"x\""]
        );
    }
}

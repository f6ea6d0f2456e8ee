use super::*;
use pretty_assertions::assert_eq;

#[test]
fn buffer_print_captures_without_newline() {
    let handler = BufferPrintHandler::new();
    handler.print("hello");
    handler.print(" world");
    assert_eq!(handler.get_output(), "hello world");
}

#[test]
fn buffer_println_appends_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("a");
    handler.println("b");
    assert_eq!(handler.get_output(), "a\nb\n");
}

#[test]
fn buffer_clear_resets_output() {
    let handler = BufferPrintHandler::new();
    handler.print("x");
    handler.clear();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn buffer_serves_queued_input_in_order() {
    let handler = BufferPrintHandler::with_input(["first", "second"]);
    assert_eq!(handler.read_line(), Some("first".to_string()));
    assert_eq!(handler.read_line(), Some("second".to_string()));
    assert_eq!(handler.read_line(), None);
}

#[test]
fn shared_handler_dispatches() {
    let handler = buffer_handler();
    handler.print("via enum");
    assert_eq!(handler.get_output(), "via enum");
}

#[test]
fn silent_discards_everything() {
    let handler = silent_handler();
    handler.println("ignored");
    assert_eq!(handler.get_output(), "");
    assert_eq!(handler.read_line(), None);
}

#[test]
fn trim_newline_strips_one_terminator() {
    assert_eq!(trim_newline("abc\r\n".to_string()), "abc");
    assert_eq!(trim_newline("abc\n".to_string()), "abc");
    assert_eq!(trim_newline("abc".to_string()), "abc");
    assert_eq!(trim_newline("abc\n\n".to_string()), "abc\n");
}

//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::span_utils::{line_text, LineOffsetTable};
use crate::Diagnostic;

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// For `Auto`, `is_tty` decides. Ignored otherwise.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Terminal emitter with optional color support.
///
/// When given the source text it renders a `--> path:line:col` locator
/// followed by the offending line and a caret underline.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<Source<'src>>,
}

struct Source<'src> {
    path: &'src str,
    text: &'src str,
    lines: LineOffsetTable,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach source text so spans can be rendered as snippets.
    #[must_use]
    pub fn with_source(mut self, path: &'src str, text: &'src str) -> Self {
        self.source = Some(Source {
            path,
            text,
            lines: LineOffsetTable::build(text),
        });
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_snippet(&mut self, diagnostic: &Diagnostic) {
        let Some(source) = &self.source else {
            if let Some(line) = diagnostic.line {
                let _ = writeln!(self.writer, "  --> line {line}");
            }
            return;
        };

        let (line, col, width) = match diagnostic.span {
            Some(span) => {
                let (line, col) = source.lines.offset_to_line_col(span.start);
                (line, col, span.len().max(1))
            }
            None => match diagnostic.line {
                Some(line) => (line, 1, 0),
                None => return,
            },
        };

        let locator = format!("  --> {}:{line}:{col}\n", source.path);
        let text = line_text(source.text, line).unwrap_or("").to_owned();
        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());

        let _ = write!(self.writer, "{locator}");
        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        let _ = writeln!(self.writer);
        self.write_colored(&format!("{gutter} |"), colors::GUTTER);
        let _ = writeln!(self.writer, " {text}");
        self.write_colored(&format!("{pad} |"), colors::GUTTER);
        if width > 0 {
            let underline = format!(
                " {}{}",
                " ".repeat((col - 1) as usize),
                "^".repeat(width as usize)
            );
            self.write_colored(&underline, colors::ERROR);
        }
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<'_, io::Stderr> {
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_colored("error", colors::ERROR);
        let code = format!("[{}]", diagnostic.code);
        self.write_colored(&code, colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        self.write_snippet(diagnostic);

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        if error_count > 0 {
            let _ = writeln!(self.writer, "{error_count} error{} emitted", plural_s(error_count));
        }
    }
}

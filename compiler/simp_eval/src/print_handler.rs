//! Console I/O for the standard library.
//!
//! `print` and `readline` never touch stdio directly; they go through a
//! [`SharedPrintHandler`] so tests and embedders can capture output and
//! script input:
//! - Stdout: the terminal (default)
//! - Buffer: in-memory output plus queued input lines
//! - Silent: discard output, no input

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to stdout, reads from stdin.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Print without newline. Flushes so prompts show before blocking.
    pub fn print(&self, msg: &str) {
        print!("{msg}");
        io::stdout().flush().ok();
    }

    /// Next line of stdin without its line terminator, or `None` at EOF.
    pub fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(trim_newline(line)),
        }
    }

    /// Stdout doesn't capture.
    pub fn get_output(&self) -> String {
        String::new()
    }

    pub fn clear(&self) {}
}

/// Captures output in memory and serves input from a queue.
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
    input: Mutex<VecDeque<String>>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        BufferPrintHandler {
            buffer: Mutex::new(String::new()),
            input: Mutex::new(VecDeque::new()),
        }
    }

    /// A buffer whose `read_line` yields `lines` in order.
    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BufferPrintHandler {
            input: Mutex::new(lines.into_iter().map(Into::into).collect()),
            ..Self::new()
        }
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn print(&self, msg: &str) {
        self.buffer.lock().push_str(msg);
    }

    pub fn read_line(&self) -> Option<String> {
        self.input.lock().pop_front()
    }

    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Enum dispatch over the handler kinds.
pub enum PrintHandlerImpl {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandlerImpl {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.print(msg),
            Self::Buffer(h) => h.print(msg),
            Self::Silent => {}
        }
    }

    /// Block for one line of input. `None` once input is exhausted.
    pub fn read_line(&self) -> Option<String> {
        match self {
            Self::Stdout(h) => h.read_line(),
            Self::Buffer(h) => h.read_line(),
            Self::Silent => None,
        }
    }

    /// Captured output; empty for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout(h) => h.get_output(),
            Self::Buffer(h) => h.get_output(),
            Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        match self {
            Self::Stdout(h) => h.clear(),
            Self::Buffer(h) => h.clear(),
            Self::Silent => {}
        }
    }
}

/// Shared print handler, cloned into every native that does I/O.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Buffer handler with scripted `readline` input.
pub fn buffer_handler_with_input<I, S>(lines: I) -> SharedPrintHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::with_input(
        lines,
    )))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}

fn trim_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests;

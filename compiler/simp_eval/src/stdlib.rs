//! Native functions seeded into the global environment.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::errors::EvalError;
use crate::print_handler::SharedPrintHandler;
use crate::{Environment, EvalResult, Value};

/// Define every standard library function in `globals`.
pub fn register(globals: &Environment<Value>, print_handler: &SharedPrintHandler) {
    let out = Arc::clone(print_handler);
    globals.define(
        "print",
        Value::native("print", 1, move |args| print(&out, args)),
    );

    let io = Arc::clone(print_handler);
    globals.define(
        "readline",
        Value::native("readline", 1, move |args| readline(&io, args)),
    );

    globals.define("epoch", Value::native("epoch", 0, epoch));
    globals.define("int_to_char", Value::native("int_to_char", 1, int_to_char));
}

/// `print(x)`: text of `x`, no newline.
fn print(out: &SharedPrintHandler, args: &[Value]) -> EvalResult {
    if let Some(value) = args.first() {
        out.print(&value.to_text());
    }
    Ok(Value::Null)
}

/// `readline(prompt)`: the next input line, or `null` once input ends.
fn readline(io: &SharedPrintHandler, args: &[Value]) -> EvalResult {
    if let Some(prompt) = args.first() {
        io.print(&prompt.to_text());
    }
    Ok(io.read_line().map_or(Value::Null, Value::from))
}

/// `epoch()`: whole seconds since the Unix epoch.
#[allow(
    clippy::cast_precision_loss,
    reason = "seconds since 1970 stay far below 2^53"
)]
fn epoch(_args: &[Value]) -> EvalResult {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| EvalError::new(format!("system clock is before the Unix epoch: {e}")))?;
    Ok(Value::Number(now.as_secs() as f64))
}

/// `int_to_char(n)`: the one-character string for code point `n`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "range is checked before the cast"
)]
fn int_to_char(args: &[Value]) -> EvalResult {
    let code = args.first().map_or(Ok(0.0), Value::to_number)?.trunc();
    let ch = if (0.0..=f64::from(u32::MAX)).contains(&code) {
        char::from_u32(code as u32)
    } else {
        None
    };
    ch.map(|c| Value::string(c.to_string()))
        .ok_or_else(|| EvalError::new(format!("{code} is not a valid character code")))
}

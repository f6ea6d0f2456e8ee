//! Stack growth for the recursive passes.
//!
//! The parser, interpreter, and semantic analyzer all recurse once per
//! nesting level of the syntax tree. A script with a few thousand nested
//! parentheses or a deeply recursive SIMP function would otherwise overflow
//! the host thread's stack long before any SIMP-level limit is hit.
//!
//! Wrap each recursive entry point with [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn eval_expr(&mut self, expr: &Expr) -> EvalResult {
//!     ensure_sufficient_stack(|| self.eval_expr_inner(expr))
//! }
//! ```

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each freshly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

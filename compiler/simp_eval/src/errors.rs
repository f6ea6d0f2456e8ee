//! Runtime errors.
//!
//! `EvalErrorKind` carries the structured cause; the factory functions
//! below are the public way to build an [`EvalError`] and keep `kind` and
//! `message` in sync.

use std::fmt;

use simp_diagnostic::{span_utils, Diagnostic, ErrorCode};
use simp_ir::Span;

use crate::Value;

/// Result of evaluating an expression or calling a value.
pub type EvalResult = Result<Value, EvalError>;

/// Typed runtime error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Names
    UndefinedVariable { name: String },
    CannotAssignConstant { name: String },
    InvalidAssignmentTarget,

    // Calls
    WrongArgCount { expected: usize, got: usize },
    NotCallable { type_name: &'static str },
    NotAClass { name: String },
    ReturnOutsideFunction,

    // Access
    CannotIndex { type_name: &'static str },
    InvalidIndexType { type_name: &'static str },
    IndexOutOfBounds { index: i64, len: usize },
    CannotAccessField { type_name: &'static str, field: String },
    ReadOnly { type_name: &'static str },

    // Operators
    BinaryTypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    NotANumber { found: String },
    DivisionByZero,

    /// Raised by native functions.
    Custom { message: String },
}

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UndefinedVariable { .. } => ErrorCode::E6001,
            Self::WrongArgCount { .. } => ErrorCode::E6002,
            Self::NotCallable { .. } => ErrorCode::E6003,
            Self::BinaryTypeMismatch { .. } | Self::NotANumber { .. } => ErrorCode::E6004,
            Self::CannotIndex { .. } | Self::InvalidIndexType { .. } => ErrorCode::E6005,
            Self::CannotAccessField { .. } => ErrorCode::E6006,
            Self::IndexOutOfBounds { .. } => ErrorCode::E6007,
            Self::InvalidAssignmentTarget => ErrorCode::E6008,
            Self::DivisionByZero => ErrorCode::E6009,
            Self::CannotAssignConstant { .. } => ErrorCode::E6010,
            Self::NotAClass { .. } => ErrorCode::E6011,
            Self::ReturnOutsideFunction => ErrorCode::E6012,
            Self::ReadOnly { .. } => ErrorCode::E6013,
            Self::Custom { .. } => ErrorCode::E6099,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::CannotAssignConstant { name } => write!(f, "cannot assign to constant: {name}"),
            Self::InvalidAssignmentTarget => write!(f, "invalid assignment target"),

            Self::WrongArgCount { expected, got } => {
                write!(f, "expected {expected} arguments, got {got}")
            }
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::NotAClass { name } => write!(f, "{name} is not a class"),
            Self::ReturnOutsideFunction => write!(f, "`return` outside of a function"),

            Self::CannotIndex { type_name } => write!(f, "cannot index {type_name}"),
            Self::InvalidIndexType { type_name } => {
                write!(f, "index must be a number, found {type_name}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::CannotAccessField { type_name, field } => {
                write!(f, "{type_name} has no field `{field}`")
            }
            Self::ReadOnly { type_name } => write!(f, "cannot write to read-only {type_name}"),

            Self::BinaryTypeMismatch { op, left, right } => {
                write!(f, "operator `{op}` cannot be applied to {left} and {right}")
            }
            Self::NotANumber { found } => write!(f, "cannot convert {found} to a number"),
            Self::DivisionByZero => write!(f, "division by zero"),

            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// A fatal runtime error. Aborts the whole `interpret` run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
    /// Innermost expression or statement being evaluated.
    pub span: Option<Span>,
    pub notes: Vec<String>,
}

impl EvalError {
    /// A `Custom` error, for native functions.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` unless a more precise one is already set.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    /// 1-based source line of the error, when a span is attached.
    pub fn line(&self, source: &str) -> Option<u32> {
        self.span.map(|span| span_utils::line_number(source, span))
    }

    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code()).with_message(&self.message);
        if let Some(span) = self.span {
            diag = diag.with_span(span);
        }
        for note in &self.notes {
            diag = diag.with_note(note);
        }
        diag
    }
}

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn cannot_assign_constant(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CannotAssignConstant {
        name: name.to_string(),
    })
}

#[cold]
pub fn invalid_assignment_target() -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidAssignmentTarget)
}

#[cold]
pub fn wrong_arg_count(expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgCount { expected, got })
}

#[cold]
pub fn not_callable(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable { type_name })
}

#[cold]
pub fn not_a_class(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAClass {
        name: name.to_string(),
    })
}

#[cold]
pub fn return_outside_function() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReturnOutsideFunction)
}

#[cold]
pub fn cannot_index(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CannotIndex { type_name })
}

#[cold]
pub fn invalid_index_type(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidIndexType { type_name })
}

#[cold]
pub fn index_out_of_bounds(index: i64, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, len })
}

#[cold]
pub fn cannot_access_field(type_name: &'static str, field: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CannotAccessField {
        type_name,
        field: field.to_string(),
    })
}

#[cold]
pub fn read_only(type_name: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReadOnly { type_name })
}

#[cold]
pub fn binary_type_mismatch(op: &'static str, left: &'static str, right: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::BinaryTypeMismatch { op, left, right })
}

#[cold]
pub fn not_a_number(found: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotANumber {
        found: found.into(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

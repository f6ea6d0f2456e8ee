//! Operator enums.
//!
//! Parsed from tokens once so the evaluator matches on a closed set
//! instead of re-inspecting token kinds.

use crate::TokenKind;

/// Eagerly evaluated binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Bitwise
    BitOr,
    BitAnd,
    BitXor,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    /// Source-level symbol, used in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::BitOr => "|",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }

    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,
            TokenKind::Pipe => Self::BitOr,
            TokenKind::Ampersand => Self::BitAnd,
            TokenKind::Caret => Self::BitXor,
            TokenKind::EqualEqual => Self::Eq,
            TokenKind::BangEqual => Self::NotEq,
            TokenKind::Less => Self::Lt,
            TokenKind::LessEqual => Self::LtEq,
            TokenKind::Greater => Self::Gt,
            TokenKind::GreaterEqual => Self::GtEq,
            _ => return None,
        })
    }

    /// The operator a compound assignment (`+=`, `|=`, ...) applies.
    pub const fn from_compound_assign(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::PlusEqual => Self::Add,
            TokenKind::MinusEqual => Self::Sub,
            TokenKind::StarEqual => Self::Mul,
            TokenKind::SlashEqual => Self::Div,
            TokenKind::PipeEqual => Self::BitOr,
            TokenKind::AmpersandEqual => Self::BitAnd,
            TokenKind::CaretEqual => Self::BitXor,
            _ => return None,
        })
    }
}

/// Short-circuiting operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LogicalOp {
    And,
    Or,
    /// `??`: right side only when the left is `null`.
    Coalesce,
}

impl LogicalOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
            Self::Coalesce => "??",
        }
    }

    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::AmpersandAmpersand => Some(Self::And),
            TokenKind::PipePipe => Some(Self::Or),
            TokenKind::QuestionQuestion => Some(Self::Coalesce),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Not,
    Neg,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }
}

/// `++` / `--`, shared by prefix and postfix forms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum IncDecOp {
    Increment,
    Decrement,
}

impl IncDecOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }

    /// `+1.0` or `-1.0`.
    pub const fn delta(self) -> f64 {
        match self {
            Self::Increment => 1.0,
            Self::Decrement => -1.0,
        }
    }

    pub const fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::PlusPlus => Some(Self::Increment),
            TokenKind::MinusMinus => Some(Self::Decrement),
            _ => None,
        }
    }
}

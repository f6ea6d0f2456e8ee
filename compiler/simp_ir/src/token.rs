//! Tokens produced by the lexer.

use std::fmt;

use crate::Span;

/// Token kinds for SIMP.
///
/// Payload-free: literal values live in [`Token::literal`], identifier text
/// in [`Token::lexeme`]. `#[repr(u8)]` lets recovery sets index a bitset by
/// discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    Identifier,
    StringLiteral,
    NumberLiteral,
    True,
    False,
    Null,

    LParen,    // (
    RParen,    // )
    LBracket,  // [
    RBracket,  // ]
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;
    Colon,     // :
    Comma,     // ,
    Dot,       // .

    Bang,       // !
    Equal,      // =
    BangEqual,  // !=
    EqualEqual, // ==

    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    PlusPlus,   // ++
    MinusMinus, // --
    Pipe,       // |
    Ampersand,  // &
    Caret,      // ^

    PlusEqual,      // +=
    MinusEqual,     // -=
    StarEqual,      // *=
    SlashEqual,     // /=
    PipeEqual,      // |=
    AmpersandEqual, // &=
    CaretEqual,     // ^=

    Less,         // <
    Greater,      // >
    LessEqual,    // <=
    GreaterEqual, // >=

    PipePipe,           // ||
    AmpersandAmpersand, // &&
    Question,           // ?
    QuestionQuestion,   // ??

    If,
    Else,
    While,
    Function,
    Class,
    Var,
    Const,
    Return,

    /// `// ...` up to (not including) the newline. Dropped before parsing.
    Comment,
    Eof,
}

impl TokenKind {
    /// Discriminant as a bit position for `TokenSet`.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Tokens the parser never sees.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Comment)
    }

    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Function
                | TokenKind::Class
                | TokenKind::Var
                | TokenKind::Const
                | TokenKind::Return
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Human-readable name used in parse error messages.
    pub const fn friendly_name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::StringLiteral => "string literal",
            TokenKind::NumberLiteral => "number literal",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Bang => "!",
            TokenKind::Equal => "=",
            TokenKind::BangEqual => "!=",
            TokenKind::EqualEqual => "==",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Pipe => "|",
            TokenKind::Ampersand => "&",
            TokenKind::Caret => "^",
            TokenKind::PlusEqual => "+=",
            TokenKind::MinusEqual => "-=",
            TokenKind::StarEqual => "*=",
            TokenKind::SlashEqual => "/=",
            TokenKind::PipeEqual => "|=",
            TokenKind::AmpersandEqual => "&=",
            TokenKind::CaretEqual => "^=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::PipePipe => "||",
            TokenKind::AmpersandAmpersand => "&&",
            TokenKind::Question => "?",
            TokenKind::QuestionQuestion => "??",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Function => "function",
            TokenKind::Class => "class",
            TokenKind::Var => "var",
            TokenKind::Const => "const",
            TokenKind::Return => "return",
            TokenKind::Comment => "comment",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_name())
    }
}

/// Decoded value of a literal token.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    /// String contents with escapes already applied.
    Str(String),
}

/// A classified, positioned unit of source text.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text (quotes included for strings). Empty for EOF.
    pub lexeme: String,
    /// 1-based line the token starts on.
    pub line: u32,
    pub literal: Option<Literal>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, span: Span) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            literal: None,
            span,
        }
    }

    #[must_use]
    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }

    /// First character offset of the token.
    #[inline]
    pub fn start_offset(&self) -> u32 {
        self.span.start
    }

    /// Last character offset of the token (inclusive).
    #[inline]
    pub fn end_offset(&self) -> u32 {
        self.span.last()
    }
}

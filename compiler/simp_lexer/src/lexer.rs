use simp_ir::{Literal, Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::keywords;
use crate::LexError;

/// Streaming lexer, one token per [`Iterator::next`] call.
///
/// Whitespace is skipped, comments are yielded as [`TokenKind::Comment`],
/// and exactly one [`TokenKind::Eof`] is produced before the iterator ends.
/// Errors never stop the scan; they are collected and exposed through
/// [`Lexer::errors`].
pub struct Lexer {
    cursor: Cursor,
    line: u32,
    errors: Vec<LexError>,
    emitted_eof: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            line: 1,
            errors: Vec::new(),
            emitted_eof: false,
        }
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.cursor.current() {
            match c {
                '\n' => self.line += 1,
                ' ' | '\t' | '\r' => {}
                _ => return,
            }
            self.cursor.bump();
        }
    }

    fn make(&self, kind: TokenKind, start: u32, line: u32) -> Token {
        let span = Span::new(start, self.cursor.pos());
        Token::new(kind, self.cursor.slice_from(start), line, span)
    }

    /// Pick `double` if the next char is `second`, otherwise `single`.
    fn either(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.eat(second) {
            double
        } else {
            single
        }
    }

    fn comment(&mut self, start: u32, line: u32) -> Token {
        self.cursor.eat_while(|c| c != '\n');
        self.make(TokenKind::Comment, start, line)
    }

    fn string(&mut self, start: u32, line: u32) -> Token {
        let mut raw = String::new();
        let mut terminated = false;
        while let Some(c) = self.cursor.bump() {
            if c == '"' {
                terminated = true;
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            raw.push(c);
        }

        let token = self.make(TokenKind::StringLiteral, start, line);
        if !terminated {
            self.errors
                .push(LexError::unterminated_string(token.span, line));
        }
        token.with_literal(Literal::Str(raw.replace("\\n", "\n")))
    }

    fn number(&mut self, start: u32, line: u32) -> Token {
        let mut digits = self.cursor.slice_from(start);
        let mut seen_dot = false;
        while let Some(c) = self.cursor.current() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if c == '.' {
                if seen_dot {
                    let at = self.cursor.pos();
                    self.errors.push(LexError::multiple_decimal_points(
                        Span::new(at, at + 1),
                        self.line,
                    ));
                } else {
                    seen_dot = true;
                    digits.push('.');
                }
            } else {
                break;
            }
            self.cursor.bump();
        }

        let token = self.make(TokenKind::NumberLiteral, start, line);
        match digits.parse::<f64>() {
            Ok(value) => token.with_literal(Literal::Number(value)),
            Err(_) => {
                self.errors
                    .push(LexError::invalid_number(digits, token.span, line));
                token
            }
        }
    }

    fn identifier(&mut self, start: u32, line: u32) -> Token {
        self.cursor.eat_while(is_ident_continue);
        let mut token = self.make(TokenKind::Identifier, start, line);
        if let Some(kind) = keywords::lookup(&token.lexeme) {
            token.kind = kind;
        }
        token
    }

    fn eof(&mut self) -> Token {
        self.emitted_eof = true;
        Token::new(
            TokenKind::Eof,
            String::new(),
            self.line,
            Span::point(self.cursor.pos()),
        )
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace();
            let start = self.cursor.pos();
            let line = self.line;

            let Some(c) = self.cursor.bump() else {
                if self.emitted_eof {
                    return None;
                }
                return Some(self.eof());
            };

            let kind = match c {
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                '[' => TokenKind::LBracket,
                ']' => TokenKind::RBracket,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                ';' => TokenKind::Semicolon,
                ':' => TokenKind::Colon,
                ',' => TokenKind::Comma,
                '.' => TokenKind::Dot,
                '!' => self.either('=', TokenKind::BangEqual, TokenKind::Bang),
                '=' => self.either('=', TokenKind::EqualEqual, TokenKind::Equal),
                '>' => self.either('=', TokenKind::GreaterEqual, TokenKind::Greater),
                '<' => self.either('=', TokenKind::LessEqual, TokenKind::Less),
                '?' => self.either('?', TokenKind::QuestionQuestion, TokenKind::Question),
                '^' => self.either('=', TokenKind::CaretEqual, TokenKind::Caret),
                '*' => self.either('=', TokenKind::StarEqual, TokenKind::Star),
                '+' if self.cursor.eat('+') => TokenKind::PlusPlus,
                '+' => self.either('=', TokenKind::PlusEqual, TokenKind::Plus),
                '-' if self.cursor.eat('-') => TokenKind::MinusMinus,
                '-' => self.either('=', TokenKind::MinusEqual, TokenKind::Minus),
                '|' if self.cursor.eat('|') => TokenKind::PipePipe,
                '|' => self.either('=', TokenKind::PipeEqual, TokenKind::Pipe),
                '&' if self.cursor.eat('&') => TokenKind::AmpersandAmpersand,
                '&' => self.either('=', TokenKind::AmpersandEqual, TokenKind::Ampersand),
                '/' if self.cursor.eat('/') => return Some(self.comment(start, line)),
                '/' => self.either('=', TokenKind::SlashEqual, TokenKind::Slash),
                '"' => return Some(self.string(start, line)),
                c if c.is_ascii_digit() => return Some(self.number(start, line)),
                c if is_ident_start(c) => return Some(self.identifier(start, line)),
                other => {
                    let span = Span::new(start, self.cursor.pos());
                    self.errors.push(LexError::unexpected_char(other, span, line));
                    continue;
                }
            };

            return Some(self.make(kind, start, line));
        }
    }
}

#[inline]
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

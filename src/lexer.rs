use std::fmt;

use log::trace;

use crate::source::{Source, StrSource};
use crate::token::{Position, Token, TokenKind};

/// Classifies a lexical problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start any token (includes a lone `&` or `|`).
    InvalidCharacter(char),
    /// Digits and a dot with no digit after it, e.g. `3.`.
    MalformedNumber(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter(ch) => {
                write!(f, "invalid character '{}'", ch.escape_debug())
            }
            Self::MalformedNumber(text) => {
                write!(
                    f,
                    "malformed number literal '{text}', \
                     expected a digit after the dot"
                )
            }
        }
    }
}

/// Lexical problem recorded while scanning.
///
/// The scanner never stops on these: the offending text becomes an
/// [`TokenKind::Invalid`] token and is skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", position.line, position.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub position: Position,
}

/// Scan a source string into its raw token stream.
///
/// Unlike [`Scanner`], whitespace, comment, and invalid tokens are kept.
/// The last token is always [`TokenKind::Eos`].
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = Scanner::unprimed(StrSource::new(input));
    let mut tokens = Vec::new();
    loop {
        let token = scanner.scan_raw();
        let done = token.kind == TokenKind::Eos;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

/// Pull scanner yielding one significant token at a time.
///
/// Construction primes the first token, so [`Scanner::current`] is valid
/// immediately. Once the source is exhausted every further
/// [`Scanner::advance`] yields `Eos` at the same position.
#[derive(Debug)]
pub struct Scanner<S> {
    source: S,
    token: Token,
    errors: Vec<LexError>,
}

impl<'a> Scanner<StrSource<'a>> {
    /// Scanner over an in-memory string.
    #[must_use]
    pub fn from_text(input: &'a str) -> Self {
        Self::new(StrSource::new(input))
    }
}

impl<S: Source> Scanner<S> {
    pub fn new(source: S) -> Self {
        let mut scanner = Self::unprimed(source);
        scanner.advance();
        scanner
    }

    fn unprimed(source: S) -> Self {
        let position = source.position();
        Self {
            source,
            token: Token::new(TokenKind::Eos, position),
            errors: Vec::new(),
        }
    }

    /// Most recently produced significant token.
    pub const fn current(&self) -> &Token {
        &self.token
    }

    /// Produce the next significant token, skipping whitespace, comments,
    /// and invalid input.
    pub fn advance(&mut self) -> &Token {
        loop {
            let token = self.scan_raw();
            if token.kind.is_trivia() {
                if token.kind == TokenKind::Invalid {
                    trace!("skipping invalid input at {}", token.position);
                }
                continue;
            }
            trace!("{token} at {}", token.position);
            self.token = token;
            return &self.token;
        }
    }

    /// Drain the lexical errors recorded since the last call.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    fn scan_raw(&mut self) -> Token {
        let position = self.source.position();
        let Some(ch) = self.source.current() else {
            return Token::new(TokenKind::Eos, position);
        };

        if ch.is_ascii_whitespace() {
            self.read_white_space(position)
        } else if ch.is_ascii_alphabetic() {
            self.read_name(position)
        } else if ch.is_ascii_digit() {
            self.read_number(position)
        } else {
            self.read_operator(ch, position)
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.source.current() == Some(expected) {
            self.source.advance();
            true
        } else {
            false
        }
    }

    fn read_while(&mut self, text: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.source.current().filter(|&c| pred(c)) {
            text.push(ch);
            self.source.advance();
        }
    }

    fn read_white_space(&mut self, position: Position) -> Token {
        while self
            .source
            .current()
            .is_some_and(|c| c.is_ascii_whitespace())
        {
            self.source.advance();
        }
        Token::new(TokenKind::WhiteSpace, position)
    }

    fn read_name(&mut self, position: Position) -> Token {
        let mut name = String::new();
        self.read_while(&mut name, |c| c.is_ascii_alphanumeric() || c == '_');
        Token::with_lexeme(TokenKind::Name, name, position)
    }

    fn read_number(&mut self, position: Position) -> Token {
        let mut lexeme = String::new();
        self.read_while(&mut lexeme, |c| c.is_ascii_digit());

        if !self.eat('.') {
            return Token::with_lexeme(TokenKind::Int, lexeme, position);
        }
        lexeme.push('.');

        if !self.source.current().is_some_and(|c| c.is_ascii_digit()) {
            self.errors.push(LexError {
                kind: LexErrorKind::MalformedNumber(lexeme),
                position,
            });
            return Token::new(TokenKind::Invalid, position);
        }

        self.read_while(&mut lexeme, |c| c.is_ascii_digit());
        Token::with_lexeme(TokenKind::Float, lexeme, position)
    }

    fn read_comment(&mut self) {
        // consume through the newline, or to the end of input
        while let Some(ch) = self.source.current() {
            self.source.advance();
            if ch == '\n' {
                break;
            }
        }
    }

    fn read_operator(&mut self, ch: char, position: Position) -> Token {
        self.source.advance();

        let kind = match ch {
            ',' => TokenKind::Coma,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '/' => {
                if self.eat('/') {
                    self.read_comment();
                    TokenKind::Comment
                } else {
                    TokenKind::Slash
                }
            }
            '=' => {
                if self.eat('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            '!' => {
                if self.eat('=') {
                    TokenKind::NotEqual
                } else {
                    TokenKind::LogicalNot
                }
            }
            '+' => {
                if self.eat('+') {
                    TokenKind::PlusPlus
                } else {
                    TokenKind::Plus
                }
            }
            '-' => {
                if self.eat('-') {
                    TokenKind::MinusMinus
                } else if self.eat('>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            '<' => {
                if self.eat('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.eat('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '&' if self.eat('&') => TokenKind::LogicalAnd,
            '|' if self.eat('|') => TokenKind::LogicalOr,
            other => {
                self.errors.push(LexError {
                    kind: LexErrorKind::InvalidCharacter(other),
                    position,
                });
                TokenKind::Invalid
            }
        };

        Token::new(kind, position)
    }
}

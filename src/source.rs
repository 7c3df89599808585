//! Character cursor consumed by the scanner.

use std::str::Chars;

use crate::token::Position;

/// Sequential, position-tracked character reader.
///
/// `current` is idempotent; `advance` consumes one character and returns
/// the new current one. `None` marks the end of input and stays put.
pub trait Source {
    fn current(&self) -> Option<char>;

    fn advance(&mut self) -> Option<char>;

    /// 1-based line of the current character.
    fn line(&self) -> usize;

    /// 1-based column of the current character.
    fn column(&self) -> usize;

    fn position(&self) -> Position {
        Position::new(self.line(), self.column())
    }
}

/// [`Source`] over an in-memory string. A leading byte-order mark is skipped.
#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    chars: Chars<'a>,
    current: Option<char>,
    line: usize,
    column: usize,
}

impl<'a> StrSource<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
        let mut chars = input.chars();
        let current = chars.next();
        Self {
            chars,
            current,
            line: 1,
            column: 1,
        }
    }
}

impl Source for StrSource<'_> {
    fn current(&self) -> Option<char> {
        self.current
    }

    fn advance(&mut self) -> Option<char> {
        match self.current {
            None => return None,
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
        }
        self.current = self.chars.next();
        self.current
    }

    fn line(&self) -> usize {
        self.line
    }

    fn column(&self) -> usize {
        self.column
    }
}

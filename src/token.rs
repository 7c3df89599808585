use std::fmt;

/// Source location of a token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 1-based line.
    pub line: usize,
    /// 1-based column.
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token kinds produced by the scanner.
///
/// Reserved words are not distinct kinds: `def`, `if`, `int` and friends
/// all lex as [`TokenKind::Name`] and are told apart by their text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of the source. Sticky.
    Eos,
    /// Character or character run that starts no token.
    Invalid,
    WhiteSpace,
    /// `// ...` through the end of the line.
    Comment,

    /// Identifier or reserved word.
    Name,
    /// Integer literal.
    Int,
    /// Floating-point literal (`1.5`).
    Float,

    /// `,`
    Coma,
    /// `;`
    Semicolon,
    /// `->`
    Arrow,

    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `!=`
    NotEqual,

    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `!`
    LogicalNot,

    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,

    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
}

impl TokenKind {
    /// Kinds the scanner drops before a token reaches the parser.
    #[must_use]
    pub const fn is_trivia(self) -> bool {
        matches!(self, Self::WhiteSpace | Self::Comment | Self::Invalid)
    }

    /// Kinds whose token carries a lexeme.
    #[must_use]
    pub const fn has_lexeme(self) -> bool {
        matches!(self, Self::Name | Self::Int | Self::Float)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Eos => "end of file",
            Self::Invalid => "invalid token",
            Self::WhiteSpace => "whitespace",
            Self::Comment => "comment",
            Self::Name => "name",
            Self::Int => "integer literal",
            Self::Float => "float literal",
            Self::Coma => "','",
            Self::Semicolon => "';'",
            Self::Arrow => "'->'",
            Self::Equal => "'='",
            Self::EqualEqual => "'=='",
            Self::NotEqual => "'!='",
            Self::LogicalAnd => "'&&'",
            Self::LogicalOr => "'||'",
            Self::LogicalNot => "'!'",
            Self::Less => "'<'",
            Self::LessEqual => "'<='",
            Self::Greater => "'>'",
            Self::GreaterEqual => "'>='",
            Self::PlusPlus => "'++'",
            Self::MinusMinus => "'--'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::LeftParen => "'('",
            Self::RightParen => "')'",
            Self::LeftBrace => "'{'",
            Self::RightBrace => "'}'",
        };
        f.write_str(text)
    }
}

/// A single token with its kind, optional text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Set only for names and numeric literals.
    pub lexeme: Option<String>,
    pub position: Position,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, position: Position) -> Self {
        Self {
            kind,
            lexeme: None,
            position,
        }
    }

    #[must_use]
    pub const fn with_lexeme(kind: TokenKind, lexeme: String, position: Position) -> Self {
        Self {
            kind,
            lexeme: Some(lexeme),
            position,
        }
    }

    /// Lexeme text, or `""` for structural tokens.
    #[must_use]
    pub fn text(&self) -> &str {
        self.lexeme.as_deref().unwrap_or("")
    }

    /// True for a `Name` token spelled exactly `word`.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Name && self.text() == word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lexeme {
            Some(text) if self.kind == TokenKind::Name => write!(f, "'{text}'"),
            Some(text) => write!(f, "{} '{text}'", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

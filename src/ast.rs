use std::fmt;

/// Root of a parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationUnit {
    pub statements: Vec<Statement>,
}

/// Any statement. Every expression is also usable as a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Compound(CompoundStatement),
    If(IfStatement),
    For(ForStatement),
    While(WhileStatement),
    Return(ReturnStatement),
    Declaration(Declaration),
    Expression(Expression),
    /// A lone `;`.
    Empty,
}

/// `{ statement* }`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundStatement {
    pub statements: Vec<Statement>,
}

/// `if (condition) body`
///
/// `None` children mark pieces missing from malformed input.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Option<Expression>,
    pub body: Option<Box<Statement>>,
}

/// `for (init; condition; step) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub init: Option<VariableDeclaration>,
    pub condition: Option<Expression>,
    pub step: Option<Expression>,
    pub body: Option<Box<Statement>>,
}

/// `while (condition) body`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Option<Expression>,
    pub body: Option<Box<Statement>>,
}

/// `return value?;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Variable(VariableDeclaration),
    Function(FunctionDeclaration),
}

/// `TYPE name (= initializer)?;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub ty: Type,
    pub name: String,
    pub initializer: Option<Expression>,
}

/// `def name(params) -> TYPE { body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub return_type: Type,
    pub name: String,
    pub params: Vec<Parameter>,
    pub body: CompoundStatement,
}

/// Function parameter, `TYPE name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: Type,
    pub name: String,
}

/// Declared type tag. Resolved from keyword text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Type {
    /// Also the "not a type" answer of [`Type::from_keyword`].
    #[default]
    Void,
    Bool,
    Int,
    Float,
}

impl Type {
    /// Resolve a type keyword. Unknown text yields `Void`.
    #[must_use]
    pub fn from_keyword(text: &str) -> Self {
        match text {
            "bool" => Self::Bool,
            "int" => Self::Int,
            "float" => Self::Float,
            _ => Self::Void,
        }
    }

    /// Keyword spelling; `Void` has none.
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Void => None,
            Self::Bool => Some("bool"),
            Self::Int => Some("int"),
            Self::Float => Some("float"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or("void"))
    }
}

/// Words the scanner yields as names but the grammar reserves.
pub const RESERVED_WORDS: [&str; 10] = [
    "def", "if", "for", "while", "return", "true", "false", "int", "float", "bool",
];

/// True for reserved words, including the type keywords.
#[must_use]
pub fn is_reserved(text: &str) -> bool {
    RESERVED_WORDS.contains(&text)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Atom(Atom),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub op: BinaryOp,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub op: UnaryOp,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Coma,
    LogicalOr,
    LogicalAnd,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Coma => 0,
            Self::LogicalOr => 1,
            Self::LogicalAnd => 2,
            Self::Equal | Self::NotEqual => 3,
            Self::Less | Self::Greater | Self::LessEqual | Self::GreaterEqual => 4,
            Self::Plus | Self::Minus => 5,
            Self::Multiply | Self::Divide => 6,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Coma => ",",
            Self::LogicalOr => "||",
            Self::LogicalAnd => "&&",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    PreIncrement,
    PreDecrement,
}

impl UnaryOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::PreIncrement => "++",
            Self::PreDecrement => "--",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    Id(String),
    Call(FuncCall),
    Literal(Literal),
}

/// `name(arguments)`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncCall {
    pub name: String,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Bool(bool),
}

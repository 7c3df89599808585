//! Front end for a small C-like procedural language.
//!
//! Turns source text into an abstract syntax tree: a pull scanner feeds a
//! one-token-lookahead recursive-descent parser that never gives up. Broken
//! input still yields a best-effort tree, alongside a list of diagnostics.
//!
//! # Quick start
//!
//! ## Parse a program
//!
//! ```
//! use tinyc::{parse, Declaration, Statement, Type};
//!
//! let parsed = parse("def add(int a, int b) -> int { return a + b; }");
//! assert!(parsed.is_clean());
//!
//! let Statement::Declaration(Declaration::Function(add)) = &parsed.unit.statements[0] else {
//!     panic!("expected a function");
//! };
//! assert_eq!(add.return_type, Type::Int);
//! assert_eq!(add.params.len(), 2);
//! ```
//!
//! ## Recover from errors
//!
//! ```
//! let parsed = tinyc::parse("int x = ; x = 1;");
//! assert!(!parsed.is_clean());
//! for diagnostic in &parsed.diagnostics {
//!     println!("{diagnostic}");
//! }
//! ```
//!
//! ## Build and format a tree
//!
//! ```
//! use tinyc::{format, BinaryOp, Expression, FunctionDeclaration, ReturnStatement, TranslationUnit, Type};
//!
//! let unit = TranslationUnit::new().statement(
//!     FunctionDeclaration::new("twice")
//!         .param(Type::Int, "n")
//!         .returns(Type::Int)
//!         .statement(ReturnStatement::value(Expression::binary(
//!             BinaryOp::Multiply,
//!             Expression::id("n"),
//!             Expression::int(2),
//!         ))),
//! );
//! assert_eq!(format(&unit), "def twice(int n) -> int {\n\treturn n * 2;\n}\n");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(clippy::missing_panics_doc, clippy::module_name_repetitions)]

pub mod ast;
pub mod builder;
pub mod formatter;
pub mod lexer;
pub mod parser;
pub mod source;
pub mod token;
pub mod visit;

pub use ast::{
    Atom, BinaryExpression, BinaryOp, CompoundStatement, Declaration, Expression, ForStatement,
    FuncCall, FunctionDeclaration, IfStatement, Literal, Parameter, ReturnStatement, Statement,
    TranslationUnit, Type, UnaryExpression, UnaryOp, VariableDeclaration, WhileStatement,
};
pub use formatter::{format, format_expression};
pub use lexer::{LexError, LexErrorKind, Scanner, tokenize};
pub use parser::{
    Diagnostic, DiagnosticKind, MAX_NESTING, ParseOptions, Parsed, Parser, parse, parse_with,
};
pub use source::{Source, StrSource};
pub use token::{Position, Token, TokenKind};
pub use visit::{NodeCounts, Visitor};

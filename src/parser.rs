use std::fmt;

use log::debug;

use crate::ast::{
    self, Atom, BinaryExpression, BinaryOp, CompoundStatement, Declaration, Expression,
    ForStatement, FuncCall, FunctionDeclaration, IfStatement, Literal, Parameter,
    ReturnStatement, Statement, TranslationUnit, Type, UnaryExpression, UnaryOp,
    VariableDeclaration, WhileStatement,
};
use crate::lexer::{LexError, LexErrorKind, Scanner};
use crate::source::{Source, StrSource};
use crate::token::{Position, Token, TokenKind};

/// Classifies a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A specific token was required, e.g. `;` or `)`.
    ExpectedToken { expected: TokenKind, found: String },
    /// A declaration, function, or parameter name is missing.
    ExpectedIdentifier { found: String },
    /// A parameter type is missing after `,`.
    ExpectedType { found: String },
    /// `->` not followed by a type keyword.
    ExpectedReturnType { found: String },
    /// A required sub-expression is missing.
    ExpectedExpression { found: String },
    /// Nothing here starts a statement; the token is discarded.
    ExpectedStatement { found: String },
    /// End of file inside a `{ ... }` block.
    UnexpectedEndOfFile,
    /// Integer literal does not fit in 64 bits.
    IntegerOutOfRange(String),
    /// Float literal too large for a 64-bit float.
    FloatOutOfRange(String),
    /// Blocks, control-statement bodies or calls nested deeper than
    /// [`MAX_NESTING`]; the rest of the construct is skipped.
    NestingTooDeep,
    /// Lexical problem, reported only when enabled in [`ParseOptions`].
    Lex(LexErrorKind),
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedToken { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::ExpectedIdentifier { found } => {
                write!(f, "expected identifier, found {found}")
            }
            Self::ExpectedType { found } => {
                write!(
                    f,
                    "expected parameter type ('int', 'float' or 'bool'), \
                     found {found}"
                )
            }
            Self::ExpectedReturnType { found } => {
                write!(f, "expected return type after '->', found {found}")
            }
            Self::ExpectedExpression { found } => {
                write!(f, "expected expression, found {found}")
            }
            Self::ExpectedStatement { found } => {
                write!(f, "expected statement, found {found}")
            }
            Self::UnexpectedEndOfFile => {
                write!(f, "unexpected end of file, expected '}}'")
            }
            Self::IntegerOutOfRange(text) => {
                write!(f, "integer literal '{text}' is out of range")
            }
            Self::FloatOutOfRange(text) => {
                write!(f, "float literal '{text}' is out of range")
            }
            Self::NestingTooDeep => {
                write!(f, "nesting deeper than {MAX_NESTING} levels")
            }
            Self::Lex(kind) => write!(f, "{kind}"),
        }
    }
}

/// Deepest nesting of statements and calls the parser descends into.
pub const MAX_NESTING: usize = 128;

/// Problem found while parsing. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", position.line, position.column)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub position: Position,
}

impl Diagnostic {
    /// Message text without the location suffix.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        Self {
            kind: DiagnosticKind::Lex(err.kind),
            position: err.position,
        }
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Surface invalid characters and malformed numbers as diagnostics.
    /// Off by default: the scanner discards them silently either way.
    pub report_lexical_errors: bool,
}

/// Outcome of a parse: always a tree, plus whatever went wrong on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub unit: TranslationUnit,
    /// In the order they were found, which is source order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse source text with default options.
#[must_use]
pub fn parse(input: &str) -> Parsed {
    parse_with(input, ParseOptions::default())
}

/// Parse source text.
#[must_use]
pub fn parse_with(input: &str, options: ParseOptions) -> Parsed {
    Parser::new(StrSource::new(input), options).parse()
}

/// One-token-lookahead recursive-descent parser.
///
/// Every production either commits on the current token or reports "no
/// match" by returning `None` without consuming anything. Consumed tokens
/// are never given back.
pub struct Parser<S> {
    scanner: Scanner<S>,
    options: ParseOptions,
    diagnostics: Vec<Diagnostic>,
    /// Statements and calls currently open.
    depth: usize,
}

impl<S: Source> Parser<S> {
    pub fn new(source: S, options: ParseOptions) -> Self {
        let mut parser = Self {
            scanner: Scanner::new(source),
            options,
            diagnostics: Vec::new(),
            depth: 0,
        };
        parser.collect_lex_errors();
        parser
    }

    /// Consume the whole token stream.
    pub fn parse(mut self) -> Parsed {
        let unit = self.parse_translation_unit();
        Parsed {
            unit,
            diagnostics: self.diagnostics,
        }
    }

    // -- token primitives --

    const fn current(&self) -> &Token {
        self.scanner.current()
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) {
        self.scanner.advance();
        self.collect_lex_errors();
    }

    fn collect_lex_errors(&mut self) {
        let errors = self.scanner.take_errors();
        if self.options.report_lexical_errors {
            self.diagnostics
                .extend(errors.into_iter().map(Diagnostic::from));
        }
    }

    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_word(&mut self, word: &str) -> bool {
        if self.current().is_word(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Like `match_kind`, but reports when the token is missing.
    /// Does not advance on failure.
    fn expect(&mut self, kind: TokenKind) -> bool {
        let matched = self.match_kind(kind);
        if !matched {
            self.report(DiagnosticKind::ExpectedToken {
                expected: kind,
                found: self.found(),
            });
        }
        matched
    }

    fn found(&self) -> String {
        self.current().to_string()
    }

    fn report(&mut self, kind: DiagnosticKind) {
        let position = self.current().position;
        self.diagnostics.push(Diagnostic { kind, position });
    }

    fn report_expected_expression(&mut self) {
        self.report(DiagnosticKind::ExpectedExpression {
            found: self.found(),
        });
    }

    /// Report the current token and drop it.
    fn skip_unexpected(&mut self) {
        self.report(DiagnosticKind::ExpectedStatement {
            found: self.found(),
        });
        debug!(
            "discarding {} at {}",
            self.current(),
            self.current().position
        );
        self.advance();
    }

    // -- statements --

    fn parse_translation_unit(&mut self) -> TranslationUnit {
        let mut statements = Vec::new();
        loop {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            } else if self.at(TokenKind::Eos) {
                break;
            } else {
                self.skip_unexpected();
            }
        }
        TranslationUnit { statements }
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        if self.depth >= MAX_NESTING {
            return Some(self.skip_nested_statement());
        }

        self.depth += 1;
        let statement = self
            .parse_compound_statement()
            .map(Statement::Compound)
            .or_else(|| self.parse_if_statement().map(Statement::If))
            .or_else(|| self.parse_for_statement().map(Statement::For))
            .or_else(|| self.parse_while_statement().map(Statement::While))
            .or_else(|| self.parse_return_statement().map(Statement::Return))
            .or_else(|| self.parse_declaration().map(Statement::Declaration))
            .or_else(|| self.parse_expression_statement());
        self.depth -= 1;
        statement
    }

    /// Past the nesting limit: report once, then drop tokens up to the end
    /// of the current statement without recursing. A `}` closing an
    /// enclosing block is left in place.
    fn skip_nested_statement(&mut self) -> Statement {
        self.report(DiagnosticKind::NestingTooDeep);
        debug!("nesting limit hit at {}", self.current().position);

        let mut braces = 0usize;
        loop {
            match self.current().kind {
                TokenKind::Eos => break,
                TokenKind::LeftBrace => braces += 1,
                TokenKind::RightBrace if braces == 0 => break,
                TokenKind::RightBrace => {
                    braces -= 1;
                    if braces == 0 {
                        self.advance();
                        break;
                    }
                }
                TokenKind::Semicolon if braces == 0 => {
                    self.advance();
                    break;
                }
                _ => {}
            }
            self.advance();
        }

        Statement::Empty
    }

    fn parse_compound_statement(&mut self) -> Option<CompoundStatement> {
        if !self.match_kind(TokenKind::LeftBrace) {
            return None;
        }

        let mut statements = Vec::new();
        loop {
            if self.match_kind(TokenKind::RightBrace) {
                break;
            }
            if self.at(TokenKind::Eos) {
                debug!("block still open at {}", self.current().position);
                self.report(DiagnosticKind::UnexpectedEndOfFile);
                break;
            }
            match self.parse_statement() {
                Some(statement) => statements.push(statement),
                None => self.skip_unexpected(),
            }
        }

        Some(CompoundStatement { statements })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        if let Some(expr) = self.parse_expression() {
            self.expect(TokenKind::Semicolon);
            return Some(Statement::Expression(expr));
        }
        self.match_kind(TokenKind::Semicolon)
            .then_some(Statement::Empty)
    }

    fn parse_if_statement(&mut self) -> Option<IfStatement> {
        if !self.match_word("if") {
            return None;
        }
        let (condition, body) = self.parse_guarded_body();
        Some(IfStatement { condition, body })
    }

    fn parse_while_statement(&mut self) -> Option<WhileStatement> {
        if !self.match_word("while") {
            return None;
        }
        let (condition, body) = self.parse_guarded_body();
        Some(WhileStatement { condition, body })
    }

    /// `'(' conditional ')' statement`, shared by `if` and `while`.
    fn parse_guarded_body(&mut self) -> (Option<Expression>, Option<Box<Statement>>) {
        self.expect(TokenKind::LeftParen);
        let condition = self.parse_required_conditional();
        self.expect(TokenKind::RightParen);
        let body = self.parse_body();
        (condition, body)
    }

    fn parse_for_statement(&mut self) -> Option<ForStatement> {
        if !self.match_word("for") {
            return None;
        }
        self.expect(TokenKind::LeftParen);

        // the declaration brings its own ';'
        let init = self.parse_variable_declaration();
        if init.is_none() {
            self.expect(TokenKind::Semicolon);
        }

        let condition = self.parse_conditional();
        self.expect(TokenKind::Semicolon);
        let step = self.parse_expression();
        self.expect(TokenKind::RightParen);
        let body = self.parse_body();

        Some(ForStatement {
            init,
            condition,
            step,
            body,
        })
    }

    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        if !self.match_word("return") {
            return None;
        }
        let value = self.parse_expression();
        self.expect(TokenKind::Semicolon);
        Some(ReturnStatement { value })
    }

    fn parse_body(&mut self) -> Option<Box<Statement>> {
        let body = self.parse_statement();
        if body.is_none() {
            self.report(DiagnosticKind::ExpectedStatement {
                found: self.found(),
            });
        }
        body.map(Box::new)
    }

    // -- declarations --

    fn parse_declaration(&mut self) -> Option<Declaration> {
        self.parse_function_declaration()
            .map(Declaration::Function)
            .or_else(|| {
                self.parse_variable_declaration()
                    .map(Declaration::Variable)
            })
    }

    fn parse_function_declaration(&mut self) -> Option<FunctionDeclaration> {
        if !self.match_word("def") {
            return None;
        }

        let name = self.parse_identifier().unwrap_or_default();
        self.expect(TokenKind::LeftParen);
        let params = self.parse_parameters();
        self.expect(TokenKind::RightParen);

        let return_type = if self.match_kind(TokenKind::Arrow) {
            self.parse_return_type()
        } else {
            Type::Void
        };

        let body = self.parse_compound_statement().unwrap_or_else(|| {
            self.expect(TokenKind::LeftBrace);
            CompoundStatement::default()
        });

        Some(FunctionDeclaration {
            return_type,
            name,
            params,
            body,
        })
    }

    /// `TYPE name (',' TYPE name)*`, possibly empty. A malformed entry
    /// ends the list.
    fn parse_parameters(&mut self) -> Vec<Parameter> {
        let mut params = Vec::new();
        let Some(mut ty) = self.parse_type() else {
            return params;
        };

        while let Some(name) = self.parse_identifier() {
            params.push(Parameter { ty, name });
            if !self.match_kind(TokenKind::Coma) {
                break;
            }
            let Some(next) = self.parse_type() else {
                self.report(DiagnosticKind::ExpectedType {
                    found: self.found(),
                });
                break;
            };
            ty = next;
        }

        params
    }

    fn parse_variable_declaration(&mut self) -> Option<VariableDeclaration> {
        let ty = self.parse_type()?;
        let name = self.parse_identifier().unwrap_or_default();
        let initializer = if self.match_kind(TokenKind::Equal) {
            self.parse_required_conditional()
        } else {
            None
        };
        self.expect(TokenKind::Semicolon);

        Some(VariableDeclaration {
            ty,
            name,
            initializer,
        })
    }

    /// Type keyword at the current token, `Void` if there is none.
    fn peek_type(&self) -> Type {
        let token = self.current();
        if token.kind == TokenKind::Name {
            Type::from_keyword(token.text())
        } else {
            Type::Void
        }
    }

    fn parse_type(&mut self) -> Option<Type> {
        let ty = self.peek_type();
        if ty == Type::Void {
            return None;
        }
        self.advance();
        Some(ty)
    }

    fn parse_return_type(&mut self) -> Type {
        self.parse_type().unwrap_or_else(|| {
            self.report(DiagnosticKind::ExpectedReturnType {
                found: self.found(),
            });
            Type::Void
        })
    }

    fn parse_identifier(&mut self) -> Option<String> {
        let token = self.current();
        if token.kind == TokenKind::Name && !ast::is_reserved(token.text()) {
            let name = token.text().to_string();
            self.advance();
            return Some(name);
        }
        self.report(DiagnosticKind::ExpectedIdentifier {
            found: self.found(),
        });
        None
    }

    // -- expressions --

    /// One binary precedence level. Takes at most one operator: the
    /// operands come from the next tighter level, so `a + b + c` stops
    /// after `a + b` and leaves `+ c` to the caller.
    fn parse_binary(
        &mut self,
        operand: fn(&mut Self) -> Option<Expression>,
        operator: fn(TokenKind) -> Option<BinaryOp>,
    ) -> Option<Expression> {
        let left = operand(self)?;
        let Some(op) = operator(self.current().kind) else {
            return Some(left);
        };
        self.advance();

        let Some(right) = operand(self) else {
            self.report_expected_expression();
            return Some(left);
        };

        Some(Expression::Binary(BinaryExpression {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    fn parse_expression(&mut self) -> Option<Expression> {
        self.parse_binary(Self::parse_conditional, |kind| {
            (kind == TokenKind::Coma).then_some(BinaryOp::Coma)
        })
    }

    fn parse_required_conditional(&mut self) -> Option<Expression> {
        let expr = self.parse_conditional();
        if expr.is_none() {
            self.report_expected_expression();
        }
        expr
    }

    fn parse_conditional(&mut self) -> Option<Expression> {
        self.parse_logical_or()
    }

    fn parse_logical_or(&mut self) -> Option<Expression> {
        self.parse_binary(Self::parse_logical_and, |kind| {
            (kind == TokenKind::LogicalOr).then_some(BinaryOp::LogicalOr)
        })
    }

    fn parse_logical_and(&mut self) -> Option<Expression> {
        self.parse_binary(Self::parse_equality, |kind| {
            (kind == TokenKind::LogicalAnd).then_some(BinaryOp::LogicalAnd)
        })
    }

    fn parse_equality(&mut self) -> Option<Expression> {
        self.parse_binary(Self::parse_relational, |kind| match kind {
            TokenKind::EqualEqual => Some(BinaryOp::Equal),
            TokenKind::NotEqual => Some(BinaryOp::NotEqual),
            _ => None,
        })
    }

    fn parse_relational(&mut self) -> Option<Expression> {
        self.parse_binary(Self::parse_additive, |kind| match kind {
            TokenKind::Less => Some(BinaryOp::Less),
            TokenKind::LessEqual => Some(BinaryOp::LessEqual),
            TokenKind::Greater => Some(BinaryOp::Greater),
            TokenKind::GreaterEqual => Some(BinaryOp::GreaterEqual),
            _ => None,
        })
    }

    fn parse_additive(&mut self) -> Option<Expression> {
        self.parse_binary(Self::parse_multiplicative, |kind| match kind {
            TokenKind::Plus => Some(BinaryOp::Plus),
            TokenKind::Minus => Some(BinaryOp::Minus),
            _ => None,
        })
    }

    fn parse_multiplicative(&mut self) -> Option<Expression> {
        self.parse_binary(Self::parse_unary, |kind| match kind {
            TokenKind::Star => Some(BinaryOp::Multiply),
            TokenKind::Slash => Some(BinaryOp::Divide),
            _ => None,
        })
    }

    fn parse_unary(&mut self) -> Option<Expression> {
        let op = match self.current().kind {
            TokenKind::PlusPlus => UnaryOp::PreIncrement,
            TokenKind::MinusMinus => UnaryOp::PreDecrement,
            _ => return self.parse_atom().map(Expression::Atom),
        };
        self.advance();

        let Some(operand) = self.parse_atom() else {
            self.report_expected_expression();
            return None;
        };

        Some(Expression::Unary(UnaryExpression {
            op,
            operand: Box::new(Expression::Atom(operand)),
        }))
    }

    fn parse_atom(&mut self) -> Option<Atom> {
        let token = self.current();
        let atom = match token.kind {
            TokenKind::Name if token.text() == "true" => Atom::Literal(Literal::Bool(true)),
            TokenKind::Name if token.text() == "false" => Atom::Literal(Literal::Bool(false)),
            TokenKind::Name if !ast::is_reserved(token.text()) => {
                let name = token.text().to_string();
                self.advance();
                return Some(self.parse_name_tail(name));
            }
            TokenKind::Int => Atom::Literal(Literal::Int(self.int_value())),
            TokenKind::Float => Atom::Literal(Literal::Float(self.float_value())),
            _ => return None,
        };
        self.advance();
        Some(atom)
    }

    /// Value of the integer literal at the current token.
    fn int_value(&mut self) -> i64 {
        let text = self.current().text();
        if let Ok(value) = text.parse() {
            return value;
        }
        let text = text.to_string();
        self.report(DiagnosticKind::IntegerOutOfRange(text));
        0
    }

    /// Value of the float literal at the current token.
    fn float_value(&mut self) -> f64 {
        let text = self.current().text();
        if let Some(value) = text.parse::<f64>().ok().filter(|v| v.is_finite()) {
            return value;
        }
        let text = text.to_string();
        self.report(DiagnosticKind::FloatOutOfRange(text));
        0.0
    }

    /// Call arguments after a name, or a bare identifier.
    fn parse_name_tail(&mut self, name: String) -> Atom {
        if !self.match_kind(TokenKind::LeftParen) {
            return Atom::Id(name);
        }

        if self.depth >= MAX_NESTING {
            self.skip_nested_arguments();
            return Atom::Call(FuncCall {
                name,
                arguments: Vec::new(),
            });
        }

        self.depth += 1;
        let arguments = self.parse_arguments();
        self.depth -= 1;
        self.expect(TokenKind::RightParen);

        Atom::Call(FuncCall { name, arguments })
    }

    /// Past the nesting limit inside `(`: report once, then drop tokens
    /// through the matching `)`.
    fn skip_nested_arguments(&mut self) {
        self.report(DiagnosticKind::NestingTooDeep);
        debug!("nesting limit hit at {}", self.current().position);

        let mut parens = 1usize;
        while !self.at(TokenKind::Eos) {
            match self.current().kind {
                TokenKind::LeftParen => parens += 1,
                TokenKind::RightParen => parens -= 1,
                _ => {}
            }
            self.advance();
            if parens == 0 {
                break;
            }
        }
    }

    fn parse_arguments(&mut self) -> Vec<Expression> {
        let mut arguments = Vec::new();
        if let Some(first) = self.parse_conditional() {
            arguments.push(first);
            while self.match_kind(TokenKind::Coma) {
                let Some(argument) = self.parse_conditional() else {
                    self.report_expected_expression();
                    break;
                };
                arguments.push(argument);
            }
        }
        arguments
    }
}

use crate::ast::{
    Atom, BinaryExpression, BinaryOp, CompoundStatement, Declaration, Expression, ForStatement,
    FuncCall, FunctionDeclaration, IfStatement, Literal, Parameter, ReturnStatement, Statement,
    TranslationUnit, Type, UnaryExpression, UnaryOp, VariableDeclaration, WhileStatement,
};

impl TranslationUnit {
    /// Create an empty translation unit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Append a top-level statement.
    #[must_use]
    pub fn statement(mut self, statement: impl Into<Statement>) -> Self {
        self.statements.push(statement.into());
        self
    }
}

impl CompoundStatement {
    /// Create an empty block.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Append a statement to the block.
    #[must_use]
    pub fn statement(mut self, statement: impl Into<Statement>) -> Self {
        self.statements.push(statement.into());
        self
    }
}

impl FunctionDeclaration {
    /// Create a `void` function with no parameters and an empty body.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            return_type: Type::Void,
            name: name.to_string(),
            params: Vec::new(),
            body: CompoundStatement::new(),
        }
    }

    /// Set the return type.
    #[must_use]
    pub const fn returns(mut self, ty: Type) -> Self {
        self.return_type = ty;
        self
    }

    /// Append a parameter.
    #[must_use]
    pub fn param(mut self, ty: Type, name: &str) -> Self {
        self.params.push(Parameter {
            ty,
            name: name.to_string(),
        });
        self
    }

    /// Append a statement to the body.
    #[must_use]
    pub fn statement(mut self, statement: impl Into<Statement>) -> Self {
        self.body.statements.push(statement.into());
        self
    }
}

impl VariableDeclaration {
    /// Create a declaration without initializer.
    #[must_use]
    pub fn new(ty: Type, name: &str) -> Self {
        Self {
            ty,
            name: name.to_string(),
            initializer: None,
        }
    }

    /// Set the initializer.
    #[must_use]
    pub fn init(mut self, value: Expression) -> Self {
        self.initializer = Some(value);
        self
    }
}

impl IfStatement {
    #[must_use]
    pub fn new(condition: Expression, body: impl Into<Statement>) -> Self {
        Self {
            condition: Some(condition),
            body: Some(Box::new(body.into())),
        }
    }
}

impl WhileStatement {
    #[must_use]
    pub fn new(condition: Expression, body: impl Into<Statement>) -> Self {
        Self {
            condition: Some(condition),
            body: Some(Box::new(body.into())),
        }
    }
}

impl ForStatement {
    /// Create `for (;;) body`.
    #[must_use]
    pub fn new(body: impl Into<Statement>) -> Self {
        Self {
            init: None,
            condition: None,
            step: None,
            body: Some(Box::new(body.into())),
        }
    }

    /// Set the init clause.
    #[must_use]
    pub fn init(mut self, decl: VariableDeclaration) -> Self {
        self.init = Some(decl);
        self
    }

    /// Set the loop condition.
    #[must_use]
    pub fn condition(mut self, condition: Expression) -> Self {
        self.condition = Some(condition);
        self
    }

    /// Set the step expression.
    #[must_use]
    pub fn step(mut self, step: Expression) -> Self {
        self.step = Some(step);
        self
    }
}

impl ReturnStatement {
    /// `return;`
    #[must_use]
    pub const fn empty() -> Self {
        Self { value: None }
    }

    /// `return value;`
    #[must_use]
    pub const fn value(value: Expression) -> Self {
        Self { value: Some(value) }
    }
}

impl Expression {
    #[must_use]
    pub fn id(name: &str) -> Self {
        Self::Atom(Atom::Id(name.to_string()))
    }

    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::Atom(Atom::Literal(Literal::Int(value)))
    }

    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Atom(Atom::Literal(Literal::Float(value)))
    }

    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Atom(Atom::Literal(Literal::Bool(value)))
    }

    /// `name(arguments)`
    #[must_use]
    pub fn call(name: &str, arguments: Vec<Self>) -> Self {
        Self::Atom(Atom::Call(FuncCall {
            name: name.to_string(),
            arguments,
        }))
    }

    #[must_use]
    pub fn binary(op: BinaryOp, left: Self, right: Self) -> Self {
        Self::Binary(BinaryExpression {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// `++operand`
    #[must_use]
    pub fn pre_increment(operand: Self) -> Self {
        Self::Unary(UnaryExpression {
            op: UnaryOp::PreIncrement,
            operand: Box::new(operand),
        })
    }

    /// `--operand`
    #[must_use]
    pub fn pre_decrement(operand: Self) -> Self {
        Self::Unary(UnaryExpression {
            op: UnaryOp::PreDecrement,
            operand: Box::new(operand),
        })
    }
}

impl From<Expression> for Statement {
    fn from(expr: Expression) -> Self {
        Self::Expression(expr)
    }
}

impl From<CompoundStatement> for Statement {
    fn from(block: CompoundStatement) -> Self {
        Self::Compound(block)
    }
}

impl From<IfStatement> for Statement {
    fn from(stmt: IfStatement) -> Self {
        Self::If(stmt)
    }
}

impl From<ForStatement> for Statement {
    fn from(stmt: ForStatement) -> Self {
        Self::For(stmt)
    }
}

impl From<WhileStatement> for Statement {
    fn from(stmt: WhileStatement) -> Self {
        Self::While(stmt)
    }
}

impl From<ReturnStatement> for Statement {
    fn from(stmt: ReturnStatement) -> Self {
        Self::Return(stmt)
    }
}

impl From<Declaration> for Statement {
    fn from(decl: Declaration) -> Self {
        Self::Declaration(decl)
    }
}

impl From<VariableDeclaration> for Statement {
    fn from(decl: VariableDeclaration) -> Self {
        Self::Declaration(Declaration::Variable(decl))
    }
}

impl From<FunctionDeclaration> for Statement {
    fn from(decl: FunctionDeclaration) -> Self {
        Self::Declaration(Declaration::Function(decl))
    }
}

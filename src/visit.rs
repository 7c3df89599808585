//! Read-only traversal over the AST.
//!
//! Implement the `visit_*` methods you care about; the defaults recurse
//! through the matching `walk_*` function, so an override that still
//! wants the children should call `walk_*` itself.

use crate::ast::{Atom, Declaration, Expression, Statement, TranslationUnit, VariableDeclaration};

pub trait Visitor {
    fn visit_statement(&mut self, statement: &Statement) {
        walk_statement(self, statement);
    }

    fn visit_declaration(&mut self, declaration: &Declaration) {
        walk_declaration(self, declaration);
    }

    /// Every variable declaration, global, local or `for` init.
    fn visit_variable(&mut self, variable: &VariableDeclaration) {
        walk_variable(self, variable);
    }

    fn visit_expression(&mut self, expression: &Expression) {
        walk_expression(self, expression);
    }
}

pub fn walk_translation_unit<V: Visitor + ?Sized>(visitor: &mut V, unit: &TranslationUnit) {
    for statement in &unit.statements {
        visitor.visit_statement(statement);
    }
}

pub fn walk_statement<V: Visitor + ?Sized>(visitor: &mut V, statement: &Statement) {
    match statement {
        Statement::Compound(block) => {
            for inner in &block.statements {
                visitor.visit_statement(inner);
            }
        }
        Statement::If(stmt) => {
            if let Some(condition) = &stmt.condition {
                visitor.visit_expression(condition);
            }
            if let Some(body) = &stmt.body {
                visitor.visit_statement(body);
            }
        }
        Statement::For(stmt) => {
            if let Some(init) = &stmt.init {
                visitor.visit_variable(init);
            }
            for expr in stmt.condition.iter().chain(&stmt.step) {
                visitor.visit_expression(expr);
            }
            if let Some(body) = &stmt.body {
                visitor.visit_statement(body);
            }
        }
        Statement::While(stmt) => {
            if let Some(condition) = &stmt.condition {
                visitor.visit_expression(condition);
            }
            if let Some(body) = &stmt.body {
                visitor.visit_statement(body);
            }
        }
        Statement::Return(stmt) => {
            if let Some(value) = &stmt.value {
                visitor.visit_expression(value);
            }
        }
        Statement::Declaration(decl) => visitor.visit_declaration(decl),
        Statement::Expression(expr) => visitor.visit_expression(expr),
        Statement::Empty => {}
    }
}

pub fn walk_declaration<V: Visitor + ?Sized>(visitor: &mut V, declaration: &Declaration) {
    match declaration {
        Declaration::Variable(var) => visitor.visit_variable(var),
        Declaration::Function(func) => {
            for statement in &func.body.statements {
                visitor.visit_statement(statement);
            }
        }
    }
}

pub fn walk_variable<V: Visitor + ?Sized>(visitor: &mut V, variable: &VariableDeclaration) {
    if let Some(value) = &variable.initializer {
        visitor.visit_expression(value);
    }
}

pub fn walk_expression<V: Visitor + ?Sized>(visitor: &mut V, expression: &Expression) {
    match expression {
        Expression::Binary(binary) => {
            visitor.visit_expression(&binary.left);
            visitor.visit_expression(&binary.right);
        }
        Expression::Unary(unary) => visitor.visit_expression(&unary.operand),
        Expression::Atom(Atom::Call(call)) => {
            for argument in &call.arguments {
                visitor.visit_expression(argument);
            }
        }
        Expression::Atom(Atom::Id(_) | Atom::Literal(_)) => {}
    }
}

/// Node tally over a whole tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeCounts {
    pub functions: usize,
    /// Variable declarations, including `for` init clauses.
    pub variables: usize,
    pub statements: usize,
    pub expressions: usize,
}

impl NodeCounts {
    #[must_use]
    pub fn of(unit: &TranslationUnit) -> Self {
        let mut counts = Self::default();
        walk_translation_unit(&mut counts, unit);
        counts
    }
}

impl Visitor for NodeCounts {
    fn visit_statement(&mut self, statement: &Statement) {
        self.statements += 1;
        walk_statement(self, statement);
    }

    fn visit_declaration(&mut self, declaration: &Declaration) {
        if let Declaration::Function(_) = declaration {
            self.functions += 1;
        }
        walk_declaration(self, declaration);
    }

    fn visit_variable(&mut self, variable: &VariableDeclaration) {
        self.variables += 1;
        walk_variable(self, variable);
    }

    fn visit_expression(&mut self, expression: &Expression) {
        self.expressions += 1;
        walk_expression(self, expression);
    }
}

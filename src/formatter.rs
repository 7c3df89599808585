//! Pretty-printer that serializes an AST back into canonical source text.
//!
//! Produces tab-indented output with a blank line around function
//! declarations. The grammar has no parentheses for grouping, so only trees
//! the parser itself can build (operands bind tighter than their operator)
//! print back to text that re-parses to the same tree.

use std::fmt::Write as _;

use crate::ast::{
    Atom, BinaryOp, CompoundStatement, Declaration, Expression, ForStatement, FunctionDeclaration,
    Literal, Statement, TranslationUnit, Type, VariableDeclaration,
};

/// Format a `TranslationUnit` into source text.
#[must_use]
pub fn format(unit: &TranslationUnit) -> String {
    let mut out = String::new();
    let mut prev_was_function = false;

    for (i, statement) in unit.statements.iter().enumerate() {
        let is_function = matches!(
            statement,
            Statement::Declaration(Declaration::Function(_))
        );
        if i > 0 && (is_function || prev_was_function) {
            out.push('\n');
        }
        format_statement(&mut out, statement, 0);
        prev_was_function = is_function;
    }

    out
}

/// Format a single expression.
#[must_use]
pub fn format_expression(expr: &Expression) -> String {
    let mut out = String::new();
    write_expression(&mut out, expr);
    out
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push('\t');
    }
}

fn format_statement(out: &mut String, statement: &Statement, depth: usize) {
    indent(out, depth);
    match statement {
        Statement::Compound(block) => format_block(out, block, depth),
        Statement::If(stmt) => {
            out.push_str("if (");
            write_optional(out, stmt.condition.as_ref());
            out.push(')');
            format_body(out, stmt.body.as_deref(), depth);
        }
        Statement::While(stmt) => {
            out.push_str("while (");
            write_optional(out, stmt.condition.as_ref());
            out.push(')');
            format_body(out, stmt.body.as_deref(), depth);
        }
        Statement::For(stmt) => format_for(out, stmt, depth),
        Statement::Return(stmt) => {
            out.push_str("return");
            if let Some(value) = &stmt.value {
                out.push(' ');
                write_expression(out, value);
            }
            out.push_str(";\n");
        }
        Statement::Declaration(Declaration::Variable(decl)) => {
            write_variable(out, decl);
            out.push('\n');
        }
        Statement::Declaration(Declaration::Function(func)) => format_function(out, func, depth),
        Statement::Expression(expr) => {
            write_expression(out, expr);
            out.push_str(";\n");
        }
        Statement::Empty => out.push_str(";\n"),
    }
}

/// `{`, the statements one level deeper, then `}` at `depth`.
/// The caller has already written any prefix on the opening line.
fn format_block(out: &mut String, block: &CompoundStatement, depth: usize) {
    out.push_str("{\n");
    for statement in &block.statements {
        format_statement(out, statement, depth + 1);
    }
    indent(out, depth);
    out.push_str("}\n");
}

/// Body of a control statement: a block stays on the header line, anything
/// else goes on its own line one level deeper.
fn format_body(out: &mut String, body: Option<&Statement>, depth: usize) {
    match body {
        Some(Statement::Compound(block)) => {
            out.push(' ');
            format_block(out, block, depth);
        }
        Some(other) => {
            out.push('\n');
            format_statement(out, other, depth + 1);
        }
        // missing body
        None => out.push_str(" ;\n"),
    }
}

fn format_for(out: &mut String, stmt: &ForStatement, depth: usize) {
    out.push_str("for (");
    match &stmt.init {
        Some(decl) => write_variable(out, decl),
        None => out.push(';'),
    }
    if let Some(condition) = &stmt.condition {
        out.push(' ');
        write_expression(out, condition);
    }
    out.push(';');
    if let Some(step) = &stmt.step {
        out.push(' ');
        write_expression(out, step);
    }
    out.push(')');
    format_body(out, stmt.body.as_deref(), depth);
}

fn format_function(out: &mut String, func: &FunctionDeclaration, depth: usize) {
    let _ = write!(out, "def {}(", func.name);
    for (i, param) in func.params.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{} {}", param.ty, param.name);
    }
    out.push(')');
    if func.return_type != Type::Void {
        let _ = write!(out, " -> {}", func.return_type);
    }
    out.push(' ');
    format_block(out, &func.body, depth);
}

/// `TYPE name (= value)?;` without a trailing newline.
fn write_variable(out: &mut String, decl: &VariableDeclaration) {
    let _ = write!(out, "{} {}", decl.ty, decl.name);
    if let Some(value) = &decl.initializer {
        out.push_str(" = ");
        write_expression(out, value);
    }
    out.push(';');
}

fn write_optional(out: &mut String, expr: Option<&Expression>) {
    if let Some(expr) = expr {
        write_expression(out, expr);
    }
}

fn write_expression(out: &mut String, expr: &Expression) {
    match expr {
        Expression::Binary(binary) => {
            write_expression(out, &binary.left);
            if binary.op == BinaryOp::Coma {
                out.push_str(", ");
            } else {
                let _ = write!(out, " {} ", binary.op);
            }
            write_expression(out, &binary.right);
        }
        Expression::Unary(unary) => {
            out.push_str(unary.op.symbol());
            write_expression(out, &unary.operand);
        }
        Expression::Atom(Atom::Id(name)) => out.push_str(name),
        Expression::Atom(Atom::Call(call)) => {
            out.push_str(&call.name);
            out.push('(');
            for (i, argument) in call.arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_expression(out, argument);
            }
            out.push(')');
        }
        Expression::Atom(Atom::Literal(literal)) => write_literal(out, *literal),
    }
}

fn write_literal(out: &mut String, literal: Literal) {
    match literal {
        Literal::Int(value) => {
            let _ = write!(out, "{value}");
        }
        Literal::Bool(value) => {
            let _ = write!(out, "{value}");
        }
        Literal::Float(value) => {
            let start = out.len();
            let _ = write!(out, "{value}");
            // `2.0` displays as `2`, which would re-lex as an integer
            if !out[start..].contains('.') {
                out.push_str(".0");
            }
        }
    }
}

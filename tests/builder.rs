mod common;

use common::assert_ast_roundtrip;
use tinyc::{
    BinaryOp, CompoundStatement, Expression, ForStatement, FunctionDeclaration, IfStatement,
    ReturnStatement, Statement, TranslationUnit, Type, VariableDeclaration, WhileStatement, format,
};

#[test]
fn build_empty_unit() {
    let unit = TranslationUnit::new();
    assert_eq!(format(&unit), "");
    assert_ast_roundtrip(&unit);
}

#[test]
fn build_global_variables() {
    let unit = TranslationUnit::new()
        .statement(VariableDeclaration::new(Type::Int, "count").init(Expression::int(0)))
        .statement(VariableDeclaration::new(Type::Bool, "ready"));
    assert_eq!(format(&unit), "int count = 0;\nbool ready;\n");
    assert_ast_roundtrip(&unit);
}

#[test]
fn build_function_with_params() {
    let unit = TranslationUnit::new().statement(
        FunctionDeclaration::new("add")
            .param(Type::Int, "a")
            .param(Type::Int, "b")
            .returns(Type::Int)
            .statement(ReturnStatement::value(Expression::binary(
                BinaryOp::Plus,
                Expression::id("a"),
                Expression::id("b"),
            ))),
    );
    assert_eq!(
        format(&unit),
        "def add(int a, int b) -> int {\n\treturn a + b;\n}\n"
    );
    assert_ast_roundtrip(&unit);
}

#[test]
fn build_control_flow() {
    let loop_body = CompoundStatement::new()
        .statement(Expression::call("print", vec![Expression::id("i")]))
        .statement(IfStatement::new(
            Expression::binary(BinaryOp::Equal, Expression::id("i"), Expression::int(5)),
            ReturnStatement::empty(),
        ));

    let unit = TranslationUnit::new().statement(
        FunctionDeclaration::new("main")
            .statement(
                ForStatement::new(loop_body)
                    .init(VariableDeclaration::new(Type::Int, "i").init(Expression::int(0)))
                    .condition(Expression::binary(
                        BinaryOp::Less,
                        Expression::id("i"),
                        Expression::int(10),
                    ))
                    .step(Expression::pre_increment(Expression::id("i"))),
            )
            .statement(WhileStatement::new(
                Expression::boolean(false),
                Expression::pre_decrement(Expression::id("n")),
            )),
    );

    let expected = "\
def main() {
\tfor (int i = 0; i < 10; ++i) {
\t\tprint(i);
\t\tif (i == 5)
\t\t\treturn;
\t}
\twhile (false)
\t\t--n;
}
";
    assert_eq!(format(&unit), expected);
    assert_ast_roundtrip(&unit);
}

#[test]
fn build_for_with_no_clauses() {
    let unit = TranslationUnit::new().statement(ForStatement::new(Statement::Empty));
    assert_eq!(format(&unit), "for (;;)\n\t;\n");
    assert_ast_roundtrip(&unit);
}

#[test]
fn build_literals() {
    let unit = TranslationUnit::new()
        .statement(VariableDeclaration::new(Type::Float, "half").init(Expression::float(0.5)))
        .statement(VariableDeclaration::new(Type::Float, "two").init(Expression::float(2.0)))
        .statement(VariableDeclaration::new(Type::Bool, "yes").init(Expression::boolean(true)));
    assert_eq!(
        format(&unit),
        "float half = 0.5;\nfloat two = 2.0;\nbool yes = true;\n"
    );
    assert_ast_roundtrip(&unit);
}

#[test]
fn build_nested_blocks() {
    let unit = TranslationUnit::new().statement(
        CompoundStatement::new()
            .statement(CompoundStatement::new().statement(Expression::id("x")))
            .statement(Statement::Empty),
    );
    assert_eq!(format(&unit), "{\n\t{\n\t\tx;\n\t}\n\t;\n}\n");
    assert_ast_roundtrip(&unit);
}

#[test]
fn build_comma_statement() {
    let unit = TranslationUnit::new().statement(Expression::binary(
        BinaryOp::Coma,
        Expression::call("f", vec![]),
        Expression::call("g", vec![Expression::int(1), Expression::int(2)]),
    ));
    assert_eq!(format(&unit), "f(), g(1, 2);\n");
    assert_ast_roundtrip(&unit);
}

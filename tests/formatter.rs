mod common;

use common::parse_clean;
use tinyc::{BinaryOp, Expression, format, format_expression};

fn reformat(input: &str) -> String {
    format(&parse_clean(input))
}

#[test]
fn format_collapses_whitespace() {
    assert_eq!(reformat("int   x\n=\n\t1 ;"), "int x = 1;\n");
}

#[test]
fn format_drops_comments() {
    let input = "// header\nint x; // trailing\n// footer\n";
    assert_eq!(reformat(input), "int x;\n");
}

#[test]
fn format_single_line_function() {
    assert_eq!(
        reformat("def inc(int n)->int{return ++n;}"),
        "def inc(int n) -> int {\n\treturn ++n;\n}\n"
    );
}

#[test]
fn format_separates_functions() {
    let input = "def a() { } def b() { }";
    assert_eq!(reformat(input), "def a() {\n}\n\ndef b() {\n}\n");
}

#[test]
fn format_if_with_block() {
    let input = "def f(int x) { if (x > 0) { return; } }";
    let expected = "\
def f(int x) {
\tif (x > 0) {
\t\treturn;
\t}
}
";
    assert_eq!(reformat(input), expected);
}

#[test]
fn format_for_without_init() {
    assert_eq!(
        reformat("for(;i<n;++i)f(i);"),
        "for (; i < n; ++i)\n\tf(i);\n"
    );
}

#[test]
fn format_empty_statement() {
    assert_eq!(reformat(";;"), ";\n;\n");
}

#[test]
fn format_call_arguments() {
    let expr = Expression::call(
        "clamp",
        vec![Expression::id("x"), Expression::int(0), Expression::float(1.5)],
    );
    assert_eq!(format_expression(&expr), "clamp(x, 0, 1.5)");
}

#[test]
fn format_logical_operators() {
    let expr = Expression::binary(
        BinaryOp::LogicalOr,
        Expression::id("a"),
        Expression::binary(BinaryOp::LogicalAnd, Expression::id("b"), Expression::id("c")),
    );
    assert_eq!(format_expression(&expr), "a || b && c");
}

#[test]
fn format_is_idempotent() {
    let input = "def main() { int i = 0; while (i < 3) { print(i); ++i; } return; }";
    let once = reformat(input);
    let twice = reformat(&once);
    assert_eq!(once, twice);
}

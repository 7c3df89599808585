mod common;

use common::roundtrip;

// -----------------------------------------------------------
// Declarations.
// -----------------------------------------------------------

#[test]
fn roundtrip_variables() {
    roundtrip("int x;\nfloat y = 1.25;\nbool z = true;\n");
}

#[test]
fn roundtrip_void_function() {
    roundtrip("def main() {\n}\n");
}

#[test]
fn roundtrip_function_with_return_type() {
    roundtrip("def add(int a, int b) -> int {\n\treturn a + b;\n}\n");
}

#[test]
fn roundtrip_functions_and_globals() {
    roundtrip(
        "int total = 0;\n\
         \n\
         def bump(int by) {\n\
         \treturn total + by;\n\
         }\n\
         \n\
         def reset() {\n\
         \treturn;\n\
         }\n\
         \n\
         bool done;\n",
    );
}

// -----------------------------------------------------------
// Statements.
// -----------------------------------------------------------

#[test]
fn roundtrip_if() {
    roundtrip("if (a == b) {\n\tf();\n}\n");
}

#[test]
fn roundtrip_if_single_statement() {
    roundtrip("if (a)\n\treturn 1;\n");
}

#[test]
fn roundtrip_while() {
    roundtrip("while (n > 0)\n\t--n;\n");
}

#[test]
fn roundtrip_for() {
    roundtrip("for (int i = 0; i < 10; ++i) {\n\tprint(i);\n}\n");
}

#[test]
fn roundtrip_for_empty_clauses() {
    roundtrip("for (;;)\n\t;\n");
}

#[test]
fn roundtrip_nested_blocks() {
    roundtrip("{\n\t{\n\t\t;\n\t}\n}\n");
}

#[test]
fn roundtrip_return_comma() {
    roundtrip("return a, b;\n");
}

// -----------------------------------------------------------
// Expressions.
// -----------------------------------------------------------

#[test]
fn roundtrip_precedence_levels() {
    roundtrip("a || b && c == d < e + f * g;\n");
}

#[test]
fn roundtrip_calls() {
    roundtrip("f(g(1), h(), x * 2);\n");
}

#[test]
fn roundtrip_unary() {
    roundtrip("++i * --j;\n");
}

#[test]
fn roundtrip_float_literals() {
    roundtrip("x * 3.0;\ny / 0.125;\n");
}

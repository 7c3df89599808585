#![allow(dead_code)]

use tinyc::{Declaration, FunctionDeclaration, Statement, TranslationUnit, format, parse};

/// Parse, insisting on zero diagnostics.
pub fn parse_clean(input: &str) -> TranslationUnit {
    let parsed = parse(input);
    assert!(
        parsed.is_clean(),
        "unexpected diagnostics for:\n{input}\n--- diagnostics ---\n{:#?}",
        parsed.diagnostics
    );
    parsed.unit
}

/// The single function declared by `input`.
pub fn only_function(input: &str) -> FunctionDeclaration {
    let mut unit = parse_clean(input);
    assert_eq!(unit.statements.len(), 1, "expected one statement");
    match unit.statements.remove(0) {
        Statement::Declaration(Declaration::Function(func)) => func,
        other => panic!("expected function declaration, got {other:?}"),
    }
}

/// Parse then format should reproduce the canonical input exactly.
pub fn roundtrip(input: &str) {
    let unit = parse_clean(input);
    let output = format(&unit);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Helper: format an AST, parse it back, assert structural equality.
pub fn assert_ast_roundtrip(original: &TranslationUnit) {
    let formatted = format(original);
    let parsed = parse(&formatted);
    assert!(
        parsed.is_clean(),
        "failed to re-parse formatted output: {:?}\n\
         --- formatted ---\n{formatted}",
        parsed.diagnostics
    );
    assert_eq!(
        original, &parsed.unit,
        "tree mismatch\n--- formatted ---\n{formatted}"
    );
}

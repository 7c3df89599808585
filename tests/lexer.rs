//! Scanner edge cases.

use tinyc::{LexErrorKind, Position, Scanner, Token, TokenKind, tokenize};

fn significant(input: &str) -> Vec<Token> {
    let mut scanner = Scanner::from_text(input);
    let mut tokens = vec![scanner.current().clone()];
    while scanner.current().kind != TokenKind::Eos {
        tokens.push(scanner.advance().clone());
    }
    tokens
}

fn kinds(input: &str) -> Vec<TokenKind> {
    significant(input).iter().map(|t| t.kind).collect()
}

// -----------------------------------------------------------
// Filtering.
// -----------------------------------------------------------

#[test]
fn lex_empty_input() {
    assert_eq!(kinds(""), vec![TokenKind::Eos]);
}

#[test]
fn lex_only_whitespace_and_comments() {
    let input = "  \t\n// first\n\n   // second without newline";
    assert_eq!(kinds(input), vec![TokenKind::Eos]);
}

#[test]
fn lex_raw_stream_keeps_trivia() {
    let tokens = tokenize(" // c\nx");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::WhiteSpace,
            TokenKind::Comment,
            TokenKind::Name,
            TokenKind::Eos
        ]
    );
}

#[test]
fn lex_comment_consumes_newline() {
    let tokens = tokenize("//a\nb");
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(tokens[1].kind, TokenKind::Name);
    assert_eq!(tokens[1].position, Position::new(2, 1));
}

// -----------------------------------------------------------
// Maximal munch.
// -----------------------------------------------------------

#[test]
fn lex_name_maximal_munch() {
    let tokens = significant("abc123_x");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Name);
    assert_eq!(tokens[0].text(), "abc123_x");
}

#[test]
fn lex_name_cannot_start_with_underscore() {
    let tokens = tokenize("_a");
    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].text(), "a");
}

#[test]
fn lex_two_character_operators() {
    let cases = [
        ("->", TokenKind::Arrow),
        ("==", TokenKind::EqualEqual),
        ("!=", TokenKind::NotEqual),
        ("&&", TokenKind::LogicalAnd),
        ("||", TokenKind::LogicalOr),
        ("++", TokenKind::PlusPlus),
        ("--", TokenKind::MinusMinus),
        ("<=", TokenKind::LessEqual),
        (">=", TokenKind::GreaterEqual),
    ];
    for (input, kind) in cases {
        assert_eq!(kinds(input), vec![kind, TokenKind::Eos], "input {input:?}");
    }
}

#[test]
fn lex_single_character_operators() {
    assert_eq!(
        kinds(", ; = ! < > + - * / ( ) { }"),
        vec![
            TokenKind::Coma,
            TokenKind::Semicolon,
            TokenKind::Equal,
            TokenKind::LogicalNot,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Eos,
        ]
    );
}

#[test]
fn lex_triple_plus_is_increment_then_plus() {
    assert_eq!(
        kinds("+++"),
        vec![TokenKind::PlusPlus, TokenKind::Plus, TokenKind::Eos]
    );
}

#[test]
fn lex_structural_tokens_have_no_lexeme() {
    for token in significant("( -> ;") {
        assert!(!token.kind.has_lexeme());
        assert_eq!(token.lexeme, None);
    }
}

#[test]
fn lex_names_and_numbers_carry_lexemes() {
    for token in significant("x 1 2.5").iter().filter(|t| t.kind != TokenKind::Eos) {
        assert!(token.kind.has_lexeme(), "{token:?}");
        assert!(token.lexeme.is_some());
    }
}

// -----------------------------------------------------------
// Numbers.
// -----------------------------------------------------------

#[test]
fn lex_integer_and_float_lexemes() {
    let tokens = significant("42 3.14");
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].text(), "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].text(), "3.14");
}

#[test]
fn lex_trailing_dot_is_invalid() {
    let tokens = tokenize("3.");
    assert_eq!(tokens[0].kind, TokenKind::Invalid);
    assert_eq!(tokens[1].kind, TokenKind::Eos);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Int));
}

#[test]
fn lex_trailing_dot_is_dropped_from_filtered_stream() {
    let mut scanner = Scanner::from_text("3.;");
    assert_eq!(scanner.current().kind, TokenKind::Semicolon);
    let errors = scanner.take_errors();
    assert_eq!(
        errors[0].kind,
        LexErrorKind::MalformedNumber("3.".to_string())
    );
    assert_eq!(errors[0].position, Position::new(1, 1));
}

#[test]
fn lex_number_followed_by_name() {
    let tokens = significant("12ab");
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[1].kind, TokenKind::Name);
    assert_eq!(tokens[1].text(), "ab");
}

// -----------------------------------------------------------
// End of stream and positions.
// -----------------------------------------------------------

#[test]
fn lex_eos_is_sticky() {
    let mut scanner = Scanner::from_text("x\n");
    assert_eq!(scanner.advance().kind, TokenKind::Eos);
    let end = scanner.current().position;
    for _ in 0..5 {
        let token = scanner.advance();
        assert_eq!(token.kind, TokenKind::Eos);
        assert_eq!(token.position, end);
    }
    assert_eq!(end, Position::new(2, 1));
}

#[test]
fn lex_positions_track_lines_and_columns() {
    let tokens = significant("def f()\n  {\n}");
    let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(1, 1),
            Position::new(1, 5),
            Position::new(1, 6),
            Position::new(1, 7),
            Position::new(2, 3),
            Position::new(3, 1),
            Position::new(3, 2),
        ]
    );
}

// -----------------------------------------------------------
// Invalid input.
// -----------------------------------------------------------

#[test]
fn lex_garbage_makes_progress() {
    let input = "@#$%^~`?.\\ 'x'";
    let tokens = significant(input);
    let names: Vec<_> = tokens.iter().map(Token::text).collect();
    assert_eq!(names, vec!["x", ""]);
}

#[test]
fn lex_non_ascii_is_invalid() {
    let mut scanner = Scanner::from_text("é x");
    assert_eq!(scanner.current().text(), "x");
    assert_eq!(
        scanner.take_errors()[0].kind,
        LexErrorKind::InvalidCharacter('é')
    );
}

#[test]
fn lex_lone_ampersand_and_pipe() {
    let mut scanner = Scanner::from_text("a & b | c");
    let names: Vec<_> = std::iter::once(scanner.current().clone())
        .chain(std::iter::from_fn(|| {
            let token = scanner.advance().clone();
            (token.kind != TokenKind::Eos).then_some(token)
        }))
        .map(|t| t.text().to_string())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

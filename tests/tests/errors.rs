// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use freeze::{Keyword, RuntimeErrorKind, SyntaxError, ValueType};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::{interpret, interpret_and_return_error};

#[rstest]
#[case("for: i -> 0, i ?? 5, i + 1\nprint: i\nend: for", 1)]
#[case("print: 1\n\nfor: i -> 0, i ?? 5, i + 1\nprint: i\nend: for", 3)]
fn malformed_for_header_reports_its_own_line(#[case] input: &str, #[case] line: usize) {
    let error = interpret_and_return_error(input);

    assert_eq!(error.line(), line);
    assert!(
        matches!(error.kind(), RuntimeErrorKind::Syntax(SyntaxError::ExpectedComparison { term }) if term == "i??5"),
        "Unexpected error: {error:?}"
    );
}

#[rstest]
#[case("print 1", SyntaxError::ExpectedColon { line: "print 1".into() })]
#[case(": 1", SyntaxError::EmptyKeyword)]
#[case("print: \"abc", SyntaxError::UnterminatedString)]
#[case("shout: 1", SyntaxError::UnknownKeyword { keyword: "shout".into() })]
#[case("write: \"a\"", SyntaxError::ArgumentCount { keyword: Keyword::Write, expected: 2, actual: 1 })]
#[case("print special: \"x\"", SyntaxError::UnknownSpecialCharacter { argument: "x".into() })]
#[case("end: for", SyntaxError::StrayEnd)]
#[case("otherwise:", SyntaxError::StrayBranch { keyword: Keyword::Otherwise })]
#[case("if: 1 < 2\nend: for", SyntaxError::MismatchedEnd { expected: Keyword::If, found: "for".into() })]
#[case("if: 1 > 2\nend: for", SyntaxError::MismatchedEnd { expected: Keyword::If, found: "for".into() })]
#[case("if:\nend: if", SyntaxError::EmptyCondition { keyword: Keyword::If })]
#[case("if: 1 < 2, OR\nend: if", SyntaxError::ExpectedConditionTerm { gate: "OR".into() })]
#[case("for: i = 0, i < 3, i + 1\nend: for", SyntaxError::ExpectedInitializer { clause: "i=0".into() })]
#[case("for: i -> 0, j < 3, i + 1\nend: for", SyntaxError::ConditionWithoutInductionVariable { name: "i".into(), clause: "j<3".into() })]
fn syntax_errors(#[case] input: &str, #[case] expected: SyntaxError) {
    let error = interpret_and_return_error(input);

    match error.kind() {
        RuntimeErrorKind::Syntax(actual) => assert_eq!(actual, &expected),
        kind => panic!("Expected a syntax error, but got {kind:?}"),
    }
}

#[rstest]
#[case("for: i -> 0, i < 3, i + 1\nprint: i\n", Keyword::For, 1, 2)]
#[case("print: 0\nfor: i -> 0, i < 3, i + 1\n", Keyword::For, 2, 2)]
#[case("for: i -> 0, i < 3, i + 1\nfor: j -> 0, j < 3, j + 1\nend: for\n", Keyword::For, 1, 3)]
#[case("if: 1 > 2\nprint: 1", Keyword::If, 1, 2)]
#[case("if: 1 < 2\nprint: 1\n", Keyword::If, 1, 2)]
fn unterminated_blocks(#[case] input: &str, #[case] keyword: Keyword, #[case] start: usize, #[case] line: usize) {
    let error = interpret_and_return_error(input);

    assert_eq!(error.line(), line);
    assert!(
        matches!(error.kind(), RuntimeErrorKind::UnterminatedBlock { keyword: k, start: s } if *k == keyword && *s == start),
        "Unexpected error: {error:?}"
    );
}

#[test]
fn undefined_variable() {
    let error = interpret_and_return_error("print: 1\nprint: x");

    assert_eq!(error.line(), 2);
    assert!(matches!(error.kind(), RuntimeErrorKind::UndefinedVariable { name } if name == "x"));
}

#[test]
fn loop_variable_is_gone_after_the_loop() {
    let error = interpret_and_return_error("for: i -> 0, i < 1, i + 1\nend: for\nprint: i");
    assert!(matches!(error.kind(), RuntimeErrorKind::UndefinedVariable { name } if name == "i"));
}

#[rstest]
#[case("write: 5, \"content\"", ValueType::Text, ValueType::Integer)]
#[case("for: i -> \"a\", i < 3, i + 1\nend: for", ValueType::Integer, ValueType::Text)]
#[case("print special: 5", ValueType::Text, ValueType::Integer)]
fn type_mismatch(#[case] input: &str, #[case] expected: ValueType, #[case] found: ValueType) {
    let error = interpret_and_return_error(input);

    assert!(
        matches!(error.kind(), RuntimeErrorKind::TypeMismatch { expected: e, found: f } if *e == expected && *f == found),
        "Unexpected error: {error:?}"
    );
}

#[rstest]
#[case("XOR")]
#[case("and")]
#[case("&&")]
fn unknown_logic_gate(#[case] gate: &str) {
    let error = interpret_and_return_error(&format!("if: 1 < 2, {gate}, 2 < 3\nend: if"));

    assert_eq!(error.line(), 1);
    assert!(matches!(error.kind(), RuntimeErrorKind::UnknownLogicGate { gate: g } if g == gate));
}

#[test]
fn loop_increment_overflow() {
    let error = interpret_and_return_error("for: i -> 9223372036854775806, i > 0, i + 1\nend: for");

    assert!(
        matches!(error.kind(), RuntimeErrorKind::IntegerOverflow { name } if name == "i"),
        "Unexpected error: {error:?}"
    );
}

#[test]
fn output_before_an_error_is_kept() {
    let outcome = interpret("print: \"before\"\nprint: missing\nprint: \"after\"");

    assert_eq!(outcome.stdout, "before");
    assert!(outcome.result.is_err());
    assert!(outcome.exited);
}

#[test]
fn errors_inside_a_loop_body_stop_the_loop() {
    let outcome = interpret("for: i -> 0, i < 5, i + 1\nprint: i\nprint: nope\nend: for");

    assert_eq!(outcome.stdout, "0");
    assert!(matches!(outcome.result.unwrap_err().kind(), RuntimeErrorKind::UndefinedVariable { .. }));
}

// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use pretty_assertions::assert_eq;
use tests::interpret;

fn trace_of(input: &str) -> Vec<(usize, String)> {
    let outcome = interpret(input);
    assert!(outcome.result.is_ok(), "Program failed: {:?}", outcome.result);
    outcome.trace
}

fn entry(line: usize, keyword: &str) -> (usize, String) {
    (line, keyword.to_string())
}

#[test]
fn every_source_line_advances_the_counter() {
    let trace = trace_of("print: 1\n// note\n\nprint: 2");

    assert_eq!(trace, vec![
        entry(1, "print"),
        entry(2, "//"),
        entry(3, "\\n"),
        entry(4, "print"),
    ]);
}

#[test]
fn replayed_statements_keep_the_line_after_buffering() {
    let trace = trace_of("for: i -> 0, i < 2, i + 1\nprint: i\nend: for\nprint: \"x\"");

    assert_eq!(trace, vec![
        entry(1, "for"),
        entry(3, "print"),
        entry(3, "print"),
        entry(4, "print"),
    ]);
}

#[test]
fn skipped_branches_are_not_dispatched() {
    let trace = trace_of("if: 1 > 2\nprint: 1\nprint: 2\notherwise:\nprint: 3\nend: if");

    assert_eq!(trace, vec![
        entry(1, "if"),
        entry(5, "print"),
        entry(6, "end"),
    ]);
}

#[test]
fn taken_branch_stops_at_the_next_header() {
    let trace = trace_of("if: 1 < 2\nprint: 1\nwhat if: 1 < 2\nprint: 2\nend: if\nprint: 3");

    assert_eq!(trace, vec![
        entry(1, "if"),
        entry(2, "print"),
        entry(3, "what if"),
        entry(6, "print"),
    ]);
}

#[test]
fn errors_in_a_replayed_body_report_the_buffering_line() {
    let outcome = interpret("for: i -> 0, i < 3, i + 1\nprint: i\nprint: j\nend: for\n\n");
    let error = outcome.result.unwrap_err();

    assert_eq!(error.line(), 4);
    assert_eq!(outcome.stdout, "0");
}

#[test]
fn debugger_sees_the_exit() {
    let outcome = interpret("print: 1");
    assert!(outcome.exited);
}

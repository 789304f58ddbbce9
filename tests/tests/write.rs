// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use freeze::RuntimeErrorKind;
use pretty_assertions::assert_eq;
use temp_dir::TempDir;
use tests::{interpret_and_return_error, interpret_and_return_stdout};

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn write_creates_file_without_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("out.txt");

    let stdout = interpret_and_return_stdout(&format!("write: \"{}\", \"hello\"", path.display()));

    assert_eq!(stdout, "");
    assert_eq!(read(&path), "hello");
}

#[test]
fn write_truncates_previous_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("out.txt");

    interpret_and_return_stdout(&format!(
        "write: \"{path}\", \"a much longer first text\"\nwrite: \"{path}\", \"short\"",
        path = path.display(),
    ));

    assert_eq!(read(&path), "short");
}

#[test]
fn write_renders_integers_and_escapes() {
    let dir = TempDir::new().unwrap();
    let number = dir.child("number.txt");
    let text = dir.child("text.txt");

    interpret_and_return_stdout(&format!(
        "write: \"{}\", -42\nwrite: \"{}\", \"one\\ntwo\\tthree\"",
        number.display(),
        text.display(),
    ));

    assert_eq!(read(&number), "-42");
    assert_eq!(read(&text), "one\ntwo\tthree");
}

#[test]
fn write_in_a_loop_keeps_the_last_iteration() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("last.txt");

    interpret_and_return_stdout(&format!(
        "for: i -> 0, i < 4, i + 1\nwrite: \"{}\", i\nend: for",
        path.display(),
    ));

    assert_eq!(read(&path), "3");
}

#[test]
fn write_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("missing").join("out.txt");

    let error = interpret_and_return_error(&format!("print: 1\nwrite: \"{}\", \"x\"", path.display()));

    assert_eq!(error.line(), 2);
    assert!(
        matches!(error.kind(), RuntimeErrorKind::IoFailure { .. }),
        "Unexpected error: {error:?}"
    );
}

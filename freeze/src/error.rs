// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io;

use strum::AsRefStr;
use thiserror::Error;

use crate::{Keyword, ValueType};

/// A failed run, tagged with the diagnostic line number that was current
/// when the failure was detected.
#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct RuntimeError {
    line: usize,
    kind: RuntimeErrorKind,
}

impl RuntimeError {
    #[must_use]
    pub const fn new(line: usize, kind: RuntimeErrorKind) -> Self {
        Self { line, kind }
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn kind(&self) -> &RuntimeErrorKind {
        &self.kind
    }
}

#[derive(Debug, Error, AsRefStr)]
pub enum RuntimeErrorKind {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("type mismatch: expected {expected} but got {found}")]
    TypeMismatch { expected: ValueType, found: ValueType },

    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String },

    #[error("`{keyword}` block opened on line {start} is never closed by `end`")]
    UnterminatedBlock { keyword: Keyword, start: usize },

    #[error("unknown logic gate `{gate}`, expected `AND` or `OR`")]
    UnknownLogicGate { gate: String },

    #[error("integer overflow while incrementing `{name}`")]
    IntegerOverflow { name: String },

    #[error("I/O failure while {action}: {source}")]
    IoFailure {
        action: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error, AsRefStr)]
pub enum SyntaxError {
    #[error("a statement cannot start with `:`, a keyword is required")]
    EmptyKeyword,

    #[error("expected `:` after the keyword in `{line}`")]
    ExpectedColon { line: String },

    #[error("string literal is never closed with `\"`")]
    UnterminatedString,

    #[error("unknown keyword `{keyword}`")]
    UnknownKeyword { keyword: String },

    #[error("`{keyword}` expects {expected} argument(s), but got {actual}")]
    ArgumentCount { keyword: Keyword, expected: usize, actual: usize },

    #[error("expected a comparison (`==`, `>=`, `<=`, `>` or `<`) in `{term}`")]
    ExpectedComparison { term: String },

    #[error("expected a condition term after `{gate}`")]
    ExpectedConditionTerm { gate: String },

    #[error("`{keyword}` needs at least one condition")]
    EmptyCondition { keyword: Keyword },

    #[error("expected `name -> value` as loop initializer, but got `{clause}`")]
    ExpectedInitializer { clause: String },

    #[error("expected `{name} + step` as loop increment, but got `{clause}`")]
    ExpectedIncrement { name: String, clause: String },

    #[error("loop condition `{clause}` does not test the loop variable `{name}`")]
    ConditionWithoutInductionVariable { name: String, clause: String },

    #[error("`end` without an open block")]
    StrayEnd,

    #[error("`end: {found}` cannot close the `{expected}` block")]
    MismatchedEnd { expected: Keyword, found: String },

    #[error("`{keyword}` can only appear inside an `if` block")]
    StrayBranch { keyword: Keyword },

    #[error("`print special` only accepts \"\\n\" or \"\\t\", but got `{argument}`")]
    UnknownSpecialCharacter { argument: String },
}

// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use crate::Keyword;

/// One line of a program: the keyword before the colon and the raw
/// arguments after it, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    keyword: String,
    arguments: Vec<String>,
}

impl Statement {
    #[must_use]
    pub fn new(keyword: impl Into<String>, arguments: Vec<String>) -> Self {
        Self {
            keyword: keyword.into(),
            arguments,
        }
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The recognized keyword, or `None` when the statement starts with
    /// something the language doesn't know.
    #[must_use]
    pub fn kind(&self) -> Option<Keyword> {
        Keyword::parse(&self.keyword)
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    #[must_use]
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }

    /// Whether this is an `end` statement whose argument names `keyword`,
    /// e.g. `end: for`.
    #[must_use]
    pub fn is_end_of(&self, keyword: Keyword) -> bool {
        self.kind() == Some(Keyword::End)
            && self.argument(0).is_some_and(|arg| arg.eq_ignore_ascii_case(keyword.as_ref()))
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.keyword, self.arguments.join(","))
    }
}

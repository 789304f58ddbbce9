// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Integer(i64),
    Text(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ValueType {
    Integer,
    Text,
}

impl Value {
    #[must_use]
    pub const fn typ(&self) -> ValueType {
        match self {
            Self::Integer(..) => ValueType::Integer,
            Self::Text(..) => ValueType::Text,
        }
    }

    /// The number this value stands for in a comparison.
    ///
    /// Text is compared by the sum of its character codes, so `"ab"` and
    /// `"ba"` compare equal. This is a crude ordering, not a lexicographic
    /// one, and is kept as the language's documented text comparison.
    #[must_use]
    pub fn comparison_key(&self) -> i64 {
        match self {
            Self::Integer(integer) => *integer,
            Self::Text(text) => text.chars().map(|ch| i64::from(u32::from(ch))).sum(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(i) => i.fmt(f),
            Self::Text(str) => f.write_str(str),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Replaces the `\n` and `\t` escape sequences with the characters they
/// stand for. Any other backslash is kept as written.
#[must_use]
pub fn interpret_escape_sequences(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => {
                chars.next();
                result.push('\n');
            }
            Some('t') => {
                chars.next();
                result.push('\t');
            }
            _ => result.push(ch),
        }
    }

    result
}

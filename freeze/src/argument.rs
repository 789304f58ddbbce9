// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{RuntimeErrorKind, Scope, Value, ValueType};

/// What a raw argument token denotes, before it is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'arg> {
    StringLiteral(&'arg str),
    IntegerLiteral(i64),
    Reference(&'arg str),
}

impl<'arg> Argument<'arg> {
    #[must_use]
    pub fn classify(arg: &'arg str) -> Self {
        if let Some(inner) = strip_quotes(arg) {
            return Self::StringLiteral(inner);
        }

        if let Ok(integer) = arg.parse::<i64>() {
            return Self::IntegerLiteral(integer);
        }

        Self::Reference(arg)
    }

    pub fn resolve(self, scope: &Scope) -> Result<Value, RuntimeErrorKind> {
        match self {
            Self::StringLiteral(str) => Ok(Value::Text(str.to_string())),
            Self::IntegerLiteral(integer) => Ok(Value::Integer(integer)),
            Self::Reference(name) => scope.lookup(name)
                .cloned()
                .ok_or_else(|| RuntimeErrorKind::UndefinedVariable { name: name.to_string() }),
        }
    }
}

/// Resolves a raw argument to a value: a quoted string literal, a decimal
/// integer literal, or otherwise the value of the variable it names.
///
/// Escape sequences inside string literals are left alone; the handlers that
/// output text interpret them.
pub fn resolve(arg: &str, scope: &Scope) -> Result<Value, RuntimeErrorKind> {
    Argument::classify(arg).resolve(scope)
}

pub fn resolve_integer(arg: &str, scope: &Scope) -> Result<i64, RuntimeErrorKind> {
    match resolve(arg, scope)? {
        Value::Integer(integer) => Ok(integer),
        value => Err(RuntimeErrorKind::TypeMismatch { expected: ValueType::Integer, found: value.typ() }),
    }
}

pub fn resolve_text(arg: &str, scope: &Scope) -> Result<String, RuntimeErrorKind> {
    match resolve(arg, scope)? {
        Value::Text(text) => Ok(text),
        value => Err(RuntimeErrorKind::TypeMismatch { expected: ValueType::Text, found: value.typ() }),
    }
}

fn strip_quotes(arg: &str) -> Option<&str> {
    if arg.len() >= 2 {
        arg.strip_prefix('"')?.strip_suffix('"')
    } else {
        None
    }
}

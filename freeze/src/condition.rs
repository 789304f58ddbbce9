// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::{argument, Keyword, RuntimeErrorKind, Scope, SyntaxError, Value};

/// Comparison operators, declared in the order they are searched for:
/// two-character operators come first so `<` never matches inside `<=`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(strum::AsRefStr, strum::Display, strum::EnumIter)]
pub enum Comparison {
    #[strum(serialize = "==")]
    Equal,

    #[strum(serialize = ">=")]
    GreaterThanOrEqual,

    #[strum(serialize = "<=")]
    LessThanOrEqual,

    #[strum(serialize = ">")]
    GreaterThan,

    #[strum(serialize = "<")]
    LessThan,
}

impl Comparison {
    #[must_use]
    pub fn compare(&self, lhs: i64, rhs: i64) -> bool {
        match self {
            Self::Equal => lhs == rhs,
            Self::GreaterThanOrEqual => lhs >= rhs,
            Self::LessThanOrEqual => lhs <= rhs,
            Self::GreaterThan => lhs > rhs,
            Self::LessThan => lhs < rhs,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[derive(strum::AsRefStr, strum::Display, strum::EnumString)]
pub enum LogicGate {
    #[strum(serialize = "AND")]
    And,

    #[strum(serialize = "OR")]
    Or,
}

impl LogicGate {
    #[must_use]
    pub const fn apply(&self, lhs: bool, rhs: bool) -> bool {
        match self {
            Self::And => lhs && rhs,
            Self::Or => lhs || rhs,
        }
    }
}

/// A comparison split at its operator, with both sides still unresolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TermSource<'term> {
    pub left: &'term str,
    pub operator: Comparison,
    pub right: &'term str,
}

impl<'term> TermSource<'term> {
    pub fn split(term: &'term str) -> Result<Self, SyntaxError> {
        for operator in Comparison::iter() {
            if let Some(index) = find_unquoted(term, operator.as_ref()) {
                return Ok(Self {
                    left: &term[..index],
                    operator,
                    right: &term[index + operator.as_ref().len()..],
                });
            }
        }

        Err(SyntaxError::ExpectedComparison { term: term.to_string() })
    }

    pub fn resolve(&self, scope: &Scope) -> Result<ConditionTerm, RuntimeErrorKind> {
        Ok(ConditionTerm {
            left: argument::resolve(self.left, scope)?,
            operator: self.operator,
            right: argument::resolve(self.right, scope)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionTerm {
    pub left: Value,
    pub operator: Comparison,
    pub right: Value,
}

impl ConditionTerm {
    #[must_use]
    pub fn evaluate(&self) -> bool {
        self.operator.compare(self.left.comparison_key(), self.right.comparison_key())
    }
}

/// Evaluates a single comparison such as `i<10`.
pub fn evaluate_term(term: &str, scope: &Scope) -> Result<bool, RuntimeErrorKind> {
    let term = TermSource::split(term)?.resolve(scope)?;
    Ok(term.evaluate())
}

/// Evaluates the arguments of an `if` or `what if` header: comparison terms
/// alternating with `AND`/`OR` gates.
///
/// The chain is folded strictly left to right without precedence, so
/// `a, AND, b, OR, c` means `(a AND b) OR c`. Every term is evaluated, even
/// when the outcome is already decided.
pub fn evaluate_chain(keyword: Keyword, arguments: &[String], scope: &Scope) -> Result<bool, RuntimeErrorKind> {
    let Some((first, rest)) = arguments.split_first() else {
        return Err(SyntaxError::EmptyCondition { keyword }.into());
    };

    let mut result = evaluate_term(first, scope)?;

    for pair in rest.chunks(2) {
        let gate = parse_logic_gate(&pair[0])?;

        let Some(term) = pair.get(1) else {
            return Err(SyntaxError::ExpectedConditionTerm { gate: gate.to_string() }.into());
        };

        let value = evaluate_term(term, scope)?;
        result = gate.apply(result, value);
    }

    Ok(result)
}

/// Finds `pattern` in `term`, ignoring anything inside string literals.
fn find_unquoted(term: &str, pattern: &str) -> Option<usize> {
    let mut is_inside_quotes = false;

    for (offset, ch) in term.char_indices() {
        if ch == '"' {
            is_inside_quotes = !is_inside_quotes;
        } else if !is_inside_quotes && term[offset..].starts_with(pattern) {
            return Some(offset);
        }
    }

    None
}

fn parse_logic_gate(token: &str) -> Result<LogicGate, RuntimeErrorKind> {
    LogicGate::from_str(token)
        .map_err(|_| RuntimeErrorKind::UnknownLogicGate { gate: token.to_string() })
}

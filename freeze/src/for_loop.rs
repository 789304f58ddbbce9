// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::rc::Rc;

use crate::{condition::TermSource, Keyword, Statement, SyntaxError};

const INITIALIZER_OPERATOR: &str = "->";
const INCREMENT_OPERATOR: char = '+';

/// The three clauses of `for: i -> 0, i < 10, i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForHeader {
    pub induction_name: String,

    /// Unresolved initial value, e.g. `0` or the name of another variable.
    pub initial_value: String,

    /// The condition, still as text so it can be resolved against the
    /// current value of the induction variable on every iteration.
    pub condition: String,

    pub step: i64,
}

impl ForHeader {
    pub fn parse(arguments: &[String]) -> Result<Self, SyntaxError> {
        let [initializer, condition, increment] = arguments else {
            return Err(SyntaxError::ArgumentCount {
                keyword: Keyword::For,
                expected: 3,
                actual: arguments.len(),
            });
        };

        let (induction_name, initial_value) = parse_initializer(initializer)?;

        let term = TermSource::split(condition)?;
        if term.left != induction_name && term.right != induction_name {
            return Err(SyntaxError::ConditionWithoutInductionVariable {
                name: induction_name.to_string(),
                clause: condition.clone(),
            });
        }

        let step = parse_increment(induction_name, increment)?;

        Ok(Self {
            induction_name: induction_name.to_string(),
            initial_value: initial_value.to_string(),
            condition: condition.clone(),
            step,
        })
    }
}

/// A `for` block that finished buffering: its header and its body, read
/// once from the source and replayed on every iteration.
#[derive(Debug, Clone)]
pub struct LoopFrame {
    pub header: ForHeader,
    pub body: Rc<[Statement]>,
}

fn parse_initializer(clause: &str) -> Result<(&str, &str), SyntaxError> {
    let error = || SyntaxError::ExpectedInitializer { clause: clause.to_string() };

    let (name, value) = clause.split_once(INITIALIZER_OPERATOR).ok_or_else(error)?;
    if name.is_empty() || value.is_empty() {
        return Err(error());
    }

    Ok((name, value))
}

fn parse_increment(induction_name: &str, clause: &str) -> Result<i64, SyntaxError> {
    let error = || SyntaxError::ExpectedIncrement {
        name: induction_name.to_string(),
        clause: clause.to_string(),
    };

    let (name, step) = clause.split_once(INCREMENT_OPERATOR).ok_or_else(error)?;
    if !name.is_empty() && name != induction_name {
        return Err(error());
    }

    step.parse().map_err(|_| error())
}

// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{Keyword, Statement, SyntaxError};

/// Splits a single line into a [`Statement`].
///
/// The keyword is everything before the first colon that is not inside a
/// string literal. The remainder is split on commas outside of string
/// literals; outside of quotes whitespace is dropped, inside of quotes every
/// character is kept as written (including the quotes themselves).
pub struct Lexer<'line> {
    input: &'line str,
}

impl<'line> Lexer<'line> {
    #[must_use]
    pub const fn new(input: &'line str) -> Self {
        Self { input }
    }

    pub fn tokenize(self) -> Result<Statement, SyntaxError> {
        let trimmed = self.input.trim();

        if trimmed.is_empty() {
            return Ok(Statement::new(Keyword::Blank.as_ref(), Vec::new()));
        }

        // Comments don't need a colon, and their text is never looked at.
        if trimmed.starts_with(Keyword::Comment.as_ref()) {
            return Ok(Statement::new(Keyword::Comment.as_ref(), Vec::new()));
        }

        let Some(colon) = self.find_keyword_colon() else {
            return Err(SyntaxError::ExpectedColon { line: trimmed.to_string() });
        };

        let keyword = self.input[..colon].trim();
        if keyword.is_empty() {
            return Err(SyntaxError::EmptyKeyword);
        }

        let arguments = split_arguments(&self.input[colon + 1..])?;
        Ok(Statement::new(keyword.to_ascii_lowercase(), arguments))
    }

    fn find_keyword_colon(&self) -> Option<usize> {
        let mut is_inside_quotes = false;

        for (offset, ch) in self.input.char_indices() {
            match ch {
                '"' => is_inside_quotes = !is_inside_quotes,
                ':' if !is_inside_quotes => return Some(offset),
                _ => (),
            }
        }

        None
    }
}

/// Convenience for `Lexer::new(line).tokenize()`.
pub fn tokenize(line: &str) -> Result<Statement, SyntaxError> {
    Lexer::new(line).tokenize()
}

fn split_arguments(rest: &str) -> Result<Vec<String>, SyntaxError> {
    if rest.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut arguments = Vec::new();
    let mut current = String::new();
    let mut is_inside_quotes = false;

    for ch in rest.chars() {
        if ch == '"' {
            is_inside_quotes = !is_inside_quotes;
            current.push(ch);
        } else if is_inside_quotes {
            current.push(ch);
        } else if ch == ',' {
            arguments.push(std::mem::take(&mut current));
        } else if ch != ' ' && ch != '\t' {
            current.push(ch);
        }
    }

    if is_inside_quotes {
        return Err(SyntaxError::UnterminatedString);
    }

    arguments.push(current);
    Ok(arguments)
}

// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{fmt::Write, path::Path};

use colored::{ColoredString, Colorize};
use freeze::{RuntimeError, RuntimeErrorKind};

/// Renders a [`RuntimeError`] with the line of the program it happened on.
pub struct ErrorPrinter {
    path: String,
    line: usize,
    kind: String,
    message: String,
    source_lines: Vec<String>,
    line_number: ColoredString,
}

impl ErrorPrinter {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(path: &Path, error: &RuntimeError) -> Self {
        let source = std::fs::read_to_string(path).unwrap_or_default();
        Self::with_source(path, &source, error)
    }

    #[must_use = "Use the `print` method to actually print"]
    pub fn with_source(path: &Path, source: &str, error: &RuntimeError) -> Self {
        let line = error.line();

        let source_lines = source.lines()
            .skip(line.saturating_sub(2))
            .take(if line > 1 { 3 } else { 2 })
            .map(str::to_string)
            .collect();

        Self {
            path: path.display().to_string(),
            line,
            kind: kind_name(error.kind()).to_string(),
            message: error.kind().to_string(),
            source_lines,
            line_number: line.to_string().blue().bold(),
        }
    }

    pub fn print(self) {
        eprint!("{}", self.render());
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        self.render_prelude(&mut out);
        self.render_lines(&mut out);
        self.render_postlude(&mut out);

        out
    }

    fn render_prelude(&self, out: &mut String) {
        let header = format!("error[{}]", self.kind).red().bold();
        _ = writeln!(out, "{header}: {}", self.message.bold());
        _ = writeln!(out);
    }

    fn render_lines(&self, out: &mut String) {
        if self.line == 0 || self.source_lines.is_empty() {
            return;
        }

        let primary_index = if self.line > 1 { 1 } else { 0 };

        for (index, line) in self.source_lines.iter().enumerate() {
            if index != primary_index && line.trim().is_empty() {
                continue;
            }

            self.render_line(out, index == primary_index, line);
        }

        _ = writeln!(out);
    }

    fn render_line(&self, out: &mut String, is_primary: bool, line: &str) {
        let separator = " | ".blue().bold();

        if is_primary {
            _ = writeln!(out, "{}{separator}{}", self.line_number, line.red());
        } else {
            _ = writeln!(out, "{}{separator}{line}", " ".repeat(self.line_number.len()));
        }
    }

    fn render_postlude(&self, out: &mut String) {
        if self.line == 0 {
            _ = writeln!(out, "In {}\n", self.path);
        } else {
            _ = writeln!(out, "In {}:{}\n", self.path, self.line);
        }
    }
}

/// Syntax errors are named after their precise cause.
fn kind_name(kind: &RuntimeErrorKind) -> &str {
    match kind {
        RuntimeErrorKind::Syntax(syntax) => syntax.as_ref(),
        kind => kind.as_ref(),
    }
}

// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use freeze::{Debugger, RuntimeError, Statement};

/// Logs every statement with the line it belongs to.
pub struct TraceDebugger {
    path: String,
    statements: usize,
}

impl TraceDebugger {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.display().to_string(),
            statements: 0,
        }
    }
}

impl Debugger for TraceDebugger {
    fn on_statement(&mut self, statement: &Statement, line: usize) {
        self.statements += 1;
        log::info!("{}:{line}: {statement}", self.path);
    }

    fn on_runtime_error(&mut self, error: &RuntimeError) {
        log::warn!("{}: run failed after {} statement(s): {error}", self.path, self.statements);
    }

    fn on_exit(&mut self) {
        log::info!("{}: executed {} statement(s)", self.path, self.statements);
    }
}

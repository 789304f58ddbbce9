// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{RuntimeError, Statement};

pub trait Debugger {
    /// Called right before `statement` is dispatched. `line` is the
    /// diagnostic line number, which stays put while a loop body replays.
    fn on_statement(&mut self, statement: &Statement, line: usize) {
        _ = statement;
        _ = line;
    }

    fn on_runtime_error(&mut self, error: &RuntimeError) {
        _ = error;
    }

    fn on_exit(&mut self) {}
}

impl Debugger for () {
}

// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::io::{self, BufRead};

/// Where the program text comes from, one line at a time.
pub trait LineSource {
    /// Reads the next line without its line terminator, or `None` at the end
    /// of the input.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<R> LineSource for R
        where R: BufRead {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}

// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use log::{LevelFilter, Log, Metadata, Record};

pub(crate) struct Logger;

impl Logger {
    pub fn initialize(level: LevelFilter) {
        let logger = Box::leak(Box::new(Logger));

        log::set_max_level(level);
        if let Err(e) = log::set_logger(logger) {
            eprintln!("Failed to install the logger: {e}");
            return;
        }

        log::debug!("Logger installed with level {level}");
    }

    /// Lowers the filter so that messages up to `level` get through. Never
    /// makes the logger quieter than it already is.
    pub fn raise_level(level: LevelFilter) {
        if level > log::max_level() {
            log::set_max_level(level);
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        eprintln!("[{}] {}: {}", record.level(), record.file().unwrap_or_default(), record.args());
    }

    fn flush(&self) {}
}

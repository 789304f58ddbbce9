// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use serde::Deserialize;

/// Contents of `freeze.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub run: ConfigSectionRun,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionRun {
    /// Log every statement as it is executed.
    pub trace: bool,

    /// Whether `print` and `write` turn `\n` and `\t` into a newline and tab.
    pub escape_sequences: bool,
}

impl Default for ConfigSectionRun {
    fn default() -> Self {
        Self {
            trace: false,
            escape_sequences: true,
        }
    }
}

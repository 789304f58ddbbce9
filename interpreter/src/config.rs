// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::{Path, PathBuf};

use anyhow::Context;
use freeze::ConfigRoot;

pub const CONFIG_FILE_NAME: &str = "freeze.toml";

/// The configuration file that applies to `program`: the one in the same
/// directory.
#[must_use]
pub fn config_path_for(program: &Path) -> PathBuf {
    program.parent()
        .unwrap_or_else(|| Path::new(""))
        .join(CONFIG_FILE_NAME)
}

pub fn load_config(program: &Path) -> anyhow::Result<ConfigRoot> {
    let path = config_path_for(program);
    if !path.is_file() {
        log::debug!("No configuration at `{}`, using defaults", path.display());
        return Ok(ConfigRoot::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    let config = parse_config(&contents)
        .with_context(|| format!("invalid configuration in `{}`", path.display()))?;

    log::debug!("Loaded configuration from `{}`: {config:?}", path.display());
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<ConfigRoot, toml::de::Error> {
    toml::from_str(contents)
}

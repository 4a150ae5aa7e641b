//! CLI subcommands.

pub mod check;
pub mod init;
pub mod show;
pub mod sidebar;

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// Locate the config file: as given if it exists, otherwise searched upward
/// from the current directory.
pub fn locate_config(config: &Path) -> Result<PathBuf> {
    if config.is_file() {
        return Ok(config.to_path_buf());
    }

    match docsite_config::find_config_file(config) {
        Some(found) => {
            tracing::debug!("Using config found at {}", found.display());
            Ok(found)
        }
        None => bail!(
            "Config file {} not found. Run 'docsite init' to create one.",
            config.display()
        ),
    }
}

/// Directory the config file lives in, which relative paths resolve against.
pub fn project_root(config: &Path) -> PathBuf {
    match config.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

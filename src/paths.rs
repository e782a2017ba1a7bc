//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations, so
//! macOS users also get `~/.config/lingo`.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "lingo";

/// Returns the configuration directory for lingo.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/lingo` if `XDG_CONFIG_HOME` is set and not empty
/// 2. `~/.config/lingo` otherwise
pub fn config_dir() -> Result<PathBuf> {
    match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => Ok(PathBuf::from(xdg).join(APP_DIR)),
        _ => Ok(home_dir()?.join(".config").join(APP_DIR)),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}

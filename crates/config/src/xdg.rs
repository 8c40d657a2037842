//! XDG Base Directory support for easymotion.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "easymotion";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/easymotion` or `~/.config/easymotion`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

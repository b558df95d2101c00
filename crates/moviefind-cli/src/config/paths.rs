//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File name looked up inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under `~/.config` holding the moviefind config.
const APP_CONFIG_DIR: &str = "moviefind";

/// Resolves the config file path.
///
/// `--dir` wins; otherwise the file lives under `$HOME/.config/moviefind/`.
///
/// # Errors
///
/// Returns an error if `dir` is `None` and `HOME` is not set.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE_NAME));
    }

    let home = std::env::var_os("HOME").context("HOME environment variable is not set")?;
    Ok(default_config_path(Path::new(&home)))
}

/// Default config file path for the given home directory.
fn default_config_path(home: &Path) -> PathBuf {
    home.join(".config")
        .join(APP_CONFIG_DIR)
        .join(CONFIG_FILE_NAME)
}

//! Application configuration module.
//!
//! Loads the optional TOML config file holding TMDB connection settings.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::{AppConfig, resolve_api_key};
pub use paths::resolve_config_path;

//! `AppConfig` struct and TOML loading.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// TMDB connection settings.
    #[serde(default)]
    pub tmdb: TmdbConfig,
}

/// TMDB connection configuration.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
pub struct TmdbConfig {
    /// v3 API key, used when the `API_KEY` environment variable is unset.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL override (default: `https://api.themoviedb.org/3/`).
    #[serde(default)]
    pub base_url: Option<String>,
    /// Total request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}

impl TmdbConfig {
    /// Parses the configured base URL, appending the trailing `/` that
    /// `Url::join` needs to keep the last path segment.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is set but is not a valid URL.
    pub fn base_url(&self) -> Result<Option<Url>> {
        let Some(raw) = self.base_url.as_deref() else {
            return Ok(None);
        };
        let normalized = if raw.ends_with('/') {
            String::from(raw)
        } else {
            format!("{raw}/")
        };
        let url = Url::parse(&normalized)
            .with_context(|| format!("invalid tmdb.base_url in config: {raw}"))?;
        Ok(Some(url))
    }

    /// Returns the configured request timeout.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Picks the API key: the environment value wins over the config file.
///
/// Empty values count as unset.
#[must_use]
pub fn resolve_api_key(from_env: Option<String>, from_config: Option<&str>) -> Option<String> {
    from_env
        .filter(|key| !key.is_empty())
        .or_else(|| from_config.filter(|key| !key.is_empty()).map(String::from))
}

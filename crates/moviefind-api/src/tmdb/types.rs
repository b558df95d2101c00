//! TMDB API response types.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// --- Search Movie ---

/// Response from `search/movie` endpoint.
///
/// Every field is optional; the collector decides which absences are fatal.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchMovieResponse {
    /// Search results of the first page.
    pub results: Option<Vec<MovieSummary>>,
    /// Total number of results across all pages.
    pub total_results: Option<u32>,
}

/// A single movie search result, reduced to the fields the report shows.
///
/// A key that is missing or `null` in the JSON record becomes `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MovieSummary {
    /// Localized title. A non-string value is kept as its JSON text.
    #[serde(deserialize_with = "deserialize_any_as_text", default)]
    pub title: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Release date (usually YYYY-MM-DD, may be empty).
    pub release_date: Option<String>,
}

/// Deserializes any JSON value as text (`null` as `None`).
///
/// Strings are taken as is; numbers, booleans, arrays and objects keep
/// their compact JSON form.
fn deserialize_any_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
}

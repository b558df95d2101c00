//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use serde_json::Value;

use crate::SearchError;

/// TMDB API trait.
///
/// Abstracts the raw endpoint call for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Calls `endpoint` with the given search `query` and returns the
    /// decoded JSON body.
    ///
    /// # Errors
    ///
    /// - `SearchError::InvalidSearch` if `endpoint` or `query` is empty.
    /// - `SearchError::RequestFailure` if the HTTP request fails.
    /// - `SearchError::BadReturn` if the body is not valid JSON.
    async fn call(&self, endpoint: &str, query: &str) -> Result<Value, SearchError>;
}

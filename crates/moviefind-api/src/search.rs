//! Movie search collector.
//!
//! Validates the search term, calls the TMDB `search/movie` endpoint, and
//! projects each result record to a [`MovieSummary`].

use serde::Deserialize;
use serde_json::Value;
use tracing::instrument;

use crate::SearchError;
use crate::tmdb::{LocalTmdbApi, MovieSummary, TmdbSearchMovieResponse};

/// TMDB endpoint used for title searches.
pub const SEARCH_MOVIE_ENDPOINT: &str = "search/movie";

/// Searches TMDB for movies matching `term`.
///
/// Only the first page of results is used. Results keep the upstream
/// (relevance) order and are neither deduplicated nor filtered.
///
/// # Errors
///
/// - `SearchError::InvalidSearch` if `term` is empty. No request is made.
/// - `SearchError::RequestFailure` if the HTTP request fails.
/// - `SearchError::BadReturn` if the response is `null`, has no `results`,
///   `results` is not a list of records, or the list is empty. A record
///   whose `overview` or `release_date` is not a string also rejects the
///   response; a non-string `title` is kept as its JSON text.
#[instrument(skip_all)]
pub async fn search_movies(
    api: &(impl LocalTmdbApi + Sync),
    term: &str,
) -> Result<Vec<MovieSummary>, SearchError> {
    if term.is_empty() {
        return Err(SearchError::invalid_search("search term is empty"));
    }

    let body = api.call(SEARCH_MOVIE_ENDPOINT, term).await?;
    collect_summaries(&body)
}

/// Extracts the summaries from a decoded `search/movie` body.
fn collect_summaries(body: &Value) -> Result<Vec<MovieSummary>, SearchError> {
    if body.is_null() {
        return Err(SearchError::bad_return("response body is null"));
    }

    let response = TmdbSearchMovieResponse::deserialize(body)
        .map_err(|e| SearchError::bad_return(format!("unexpected response shape: {e}")))?;

    let Some(results) = response.results else {
        tracing::warn!("TMDB response has no results field");
        return Err(SearchError::bad_return("response has no results"));
    };

    if results.is_empty() {
        return Err(SearchError::bad_return("no movies found"));
    }

    tracing::debug!(
        count = results.len(),
        total_results = response.total_results,
        "Collected movie summaries"
    );

    Ok(results)
}

//! Error kinds surfaced by a movie search.

use thiserror::Error;

/// Errors that can occur while searching TMDB and rendering the results.
///
/// Each kind maps to one fixed CLI message and exit status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The search term, endpoint, or query was empty.
    #[error("invalid search: {reason}")]
    InvalidSearch {
        /// What was missing.
        reason: String,
    },

    /// The HTTP request failed at the transport level.
    #[error("request failed: {reason}")]
    RequestFailure {
        /// Transport error description.
        reason: String,
    },

    /// The response was absent, malformed, or held no usable records.
    #[error("bad return: {reason}")]
    BadReturn {
        /// Why the response was rejected.
        reason: String,
    },
}

impl SearchError {
    /// Builds an `InvalidSearch` error.
    pub fn invalid_search(reason: impl Into<String>) -> Self {
        Self::InvalidSearch {
            reason: reason.into(),
        }
    }

    /// Builds a `RequestFailure` error.
    pub fn request_failure(reason: impl Into<String>) -> Self {
        Self::RequestFailure {
            reason: reason.into(),
        }
    }

    /// Builds a `BadReturn` error.
    pub fn bad_return(reason: impl Into<String>) -> Self {
        Self::BadReturn {
            reason: reason.into(),
        }
    }
}

//! TMDB movie search library for moviefind.
//!
//! Provides the TMDB API client and the movie search collector that
//! reduces a `search/movie` response to a list of summaries.

mod error;

/// Movie search collector.
pub mod search;

/// TMDB API client.
pub mod tmdb;

pub use error::SearchError;

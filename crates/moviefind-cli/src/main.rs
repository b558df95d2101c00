//! moviefind - search The Movie Database by title and print a short report.

/// Application configuration (TOML).
mod config;
/// Tracing subscriber setup.
mod logging;
/// Plain-text report rendering.
mod report;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use moviefind_api::SearchError;
use moviefind_api::search::search_movies;
use moviefind_api::tmdb::{LocalTmdbApi, TmdbClient};
use tracing::instrument;

use crate::config::{AppConfig, resolve_api_key, resolve_config_path};
use crate::report::format_summaries;

/// Prompt written before reading the search term from stdin.
const PROMPT: &str = "Enter a movie title or franchise (case sensitive!): ";

/// Environment variable holding the TMDB v3 API key.
const API_KEY_ENV: &str = "API_KEY";

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Movie title or franchise to search for. Prompts on stdin when omitted.
    title: Option<String>,
}

/// Fixed user-facing message for each error kind.
const fn failure_message(err: &SearchError) -> &'static str {
    match err {
        SearchError::RequestFailure { .. } => "Request failed!",
        SearchError::InvalidSearch { .. } => "Invalid Search!",
        SearchError::BadReturn { .. } => "Bad Return!",
    }
}

/// Builds a `TmdbClient` from the environment and the optional config file.
///
/// `API_KEY` takes precedence over `tmdb.api_key`. A missing key is only
/// warned about; TMDB rejects the request and the search ends as a bad return.
///
/// # Errors
///
/// Returns an error if the config file cannot be parsed, the configured base
/// URL is invalid, or the client fails to build.
#[instrument(skip_all)]
fn build_tmdb_client(dir: Option<&PathBuf>) -> Result<TmdbClient> {
    let config = match resolve_config_path(dir) {
        Ok(path) => AppConfig::load(&path).context("failed to load config")?,
        Err(e) => {
            tracing::debug!("Skipping config file: {e:#}");
            AppConfig::default()
        }
    };

    let mut builder = TmdbClient::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    match resolve_api_key(std::env::var(API_KEY_ENV).ok(), config.tmdb.api_key.as_deref()) {
        Some(key) => builder = builder.api_key(key),
        None => tracing::warn!("{API_KEY_ENV} is not set; sending the request without an API key"),
    }
    if let Some(url) = config.tmdb.base_url()? {
        builder = builder.base_url(url);
    }
    if let Some(timeout) = config.tmdb.timeout() {
        builder = builder.timeout(timeout);
    }

    builder.build().context("failed to build TMDB client")
}

/// Prompts for a search term and reads one line.
///
/// Only the line terminator is stripped. End of input yields an empty term.
fn read_search_term(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<String> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let term = line
        .strip_suffix('\n')
        .map_or(line.as_str(), |l| l.strip_suffix('\r').unwrap_or(l));
    Ok(String::from(term))
}

/// Searches for `term` and renders the report.
async fn search_and_format(
    api: &(impl LocalTmdbApi + Sync),
    term: &str,
) -> Result<String, SearchError> {
    let movies = search_movies(api, term).await?;
    format_summaries(&movies)
}

/// Runs one search and writes either the report or the failure message.
///
/// # Errors
///
/// Returns an error only if reading the term or writing the output fails.
#[instrument(skip_all)]
async fn run(
    api: &(impl LocalTmdbApi + Sync),
    title: Option<String>,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> io::Result<ExitCode> {
    let term = match title {
        Some(title) => title,
        None => read_search_term(input, output)?,
    };

    match search_and_format(api, &term).await {
        Ok(report) => {
            writeln!(output, "{report}")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!(error = %err, "Search failed");
            writeln!(output, "{}", failure_message(&err))?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Entry point.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let dotenv_result = dotenvy::dotenv();
    logging::init_tracing();
    if let Err(e) = dotenv_result
        && !e.not_found()
    {
        tracing::warn!("Failed to load .env: {e}");
    }

    let cli = Cli::parse();

    let client = match build_tmdb_client(cli.dir.as_ref()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    match run(&client, cli.title, &mut input, &mut output).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Terminal I/O failed: {e}");
            ExitCode::FAILURE
        }
    }
}

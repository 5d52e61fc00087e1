//! Error types for search requests, preference storage and configuration.
//!
//! None of these are fatal to the page: a failed search leaves the previous
//! results on screen, a failed theme save keeps the in-memory theme, and a bad
//! config file falls back to defaults. They exist so callers and tests can see
//! *what* went wrong instead of reading it off the console.

use thiserror::Error;

/// Why a search did not produce a result list.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The request never completed (DNS, connection reset, CORS, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("search service returned HTTP {0}")]
    Status(u16),

    /// The body was not the JSON shape the service documents.
    #[error("malformed search response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The service reported an error that is not a plain "no matches",
    /// e.g. an invalid API key or an exhausted quota.
    #[error("search service error: {0}")]
    Api(String),
}

/// Failure reading or writing a persisted preference.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The backing store does not exist in this environment
    /// (no `window`, storage disabled by the browser, no config dir).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Failure parsing `marquee.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid marquee.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

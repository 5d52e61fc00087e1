//! Movie search collaborator: the [`MovieSearch`] seam the session talks to,
//! and [`OmdbClient`], which implements it against the OMDb HTTP API.

use std::future::Future;

use serde::Deserialize;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::SearchError;
use crate::types::Movie;

/// `Error` messages OMDb uses for a successful lookup that found nothing
/// presentable. These become an empty result list, not a failure.
const NO_MATCH_ERRORS: &[&str] = &[
    "Movie not found!",
    "Series not found!",
    "Episode not found!",
    "Too many results.",
];

/// Anything that can turn a free-text query into a list of movies.
///
/// `Ok(vec![])` means "no matches" and is a normal answer. The returned future
/// is not required to be `Send`; in the browser it runs on the UI thread.
pub trait MovieSearch {
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<Movie>, SearchError>>;
}

/// OMDb search endpoint client. The API key comes from [`AppConfig`].
#[derive(Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl MovieSearch for OmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<Movie>, SearchError> {
        debug!(query, url = self.api_url.as_str(), "OMDb search request");
        let response = self
            .http
            .get(&self.api_url)
            .query(&[("apikey", self.api_key.as_str()), ("s", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_search_response(&body)
    }
}

// ---------------------------------------------------------------------------
// Response decoding
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Option<Vec<Movie>>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

/// Decode an OMDb `?s=` response body.
///
/// Results keep the order the service sent them in.
pub fn parse_search_response(body: &str) -> Result<Vec<Movie>, SearchError> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;

    if envelope.response.eq_ignore_ascii_case("true") {
        return Ok(envelope.search.unwrap_or_default());
    }

    let message = envelope.error.unwrap_or_else(|| "unknown error".to_string());
    if NO_MATCH_ERRORS.contains(&message.as_str()) {
        debug!(message = message.as_str(), "OMDb reported no matches");
        Ok(Vec::new())
    } else {
        Err(SearchError::Api(message))
    }
}

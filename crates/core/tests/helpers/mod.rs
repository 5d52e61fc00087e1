//! Test harness for search-flow integration tests.
//!
//! `ScriptedSearch` stands in for the OMDb client: each query is scripted with a
//! delay and a canned answer, and every call is recorded so tests can assert on
//! what reached the network.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use marquee_core::{Movie, MovieSearch, Poster, SearchError};

/// Canned answer for one query. Errors are kept as strings so a script can be
/// replayed; they surface as `SearchError::Api`.
#[derive(Clone)]
struct Script {
    delay: Duration,
    answer: Result<Vec<Movie>, String>,
}

#[derive(Default)]
pub struct ScriptedSearch {
    scripts: HashMap<String, Script>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, query: &str, delay_ms: u64, movies: Vec<Movie>) -> Self {
        self.scripts.insert(
            query.to_string(),
            Script { delay: Duration::from_millis(delay_ms), answer: Ok(movies) },
        );
        self
    }

    pub fn fail(mut self, query: &str, delay_ms: u64, message: &str) -> Self {
        self.scripts.insert(
            query.to_string(),
            Script { delay: Duration::from_millis(delay_ms), answer: Err(message.to_string()) },
        );
        self
    }

    /// Queries received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl MovieSearch for ScriptedSearch {
    async fn search(&self, query: &str) -> Result<Vec<Movie>, SearchError> {
        self.calls.borrow_mut().push(query.to_string());
        let script = self
            .scripts
            .get(query)
            .cloned()
            .unwrap_or_else(|| panic!("no script for query {query:?}"));
        tokio::time::sleep(script.delay).await;
        script.answer.map_err(SearchError::Api)
    }
}

pub fn movie(id: &str, title: &str) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        year: "2005".to_string(),
        poster: Poster::Url(format!("https://img.example/{id}.jpg")),
        category: "movie".to_string(),
    }
}

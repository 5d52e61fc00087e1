//! Search session: the state behind the search page and the request lifecycle
//! that mutates it.
//!
//! Every search is tagged with a sequence number when it is issued. A response
//! only touches visible state if its number is still the latest one issued, so
//! a slow earlier request can never overwrite the results of a newer one.
//!
//! The session itself is plain data. [`run_search`] drives one request through
//! any [`SessionHandle`] (a `RefCell` in tests, a Dioxus signal in the app) and
//! never holds a borrow across the network await.

use std::cell::RefCell;

use tracing::{debug, info, warn};

use crate::client::MovieSearch;
use crate::error::SearchError;
use crate::types::Movie;

/// Trim raw input into a submittable query. Blank input yields `None`.
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Proof that a search was issued, carried through the network call and
/// handed back to [`SearchSession::settle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// What happened to a settled search.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Results were replaced with `count` items (possibly zero).
    Updated { count: usize },
    /// The request failed; previous results are still shown.
    Failed(SearchError),
    /// A newer search was issued while this one was in flight; its response
    /// was discarded.
    Superseded,
}

impl SearchOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, SearchOutcome::Superseded)
    }
}

/// Which of the three mutually exclusive result regions to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultArea<'a> {
    Loading,
    Grid(&'a [Movie]),
    Empty,
}

/// All mutable state of the search page except the theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchSession {
    input: String,
    results: Vec<Movie>,
    loading: bool,
    /// Sequence number of the most recently issued search; 0 = none yet.
    issued: u64,
    last_query: Option<String>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently in the search box. Editing it does not search.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn results(&self) -> &[Movie] {
        &self.results
    }

    /// True while the latest issued search has not settled.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Query of the most recently issued search.
    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    /// Start a search for an already-normalized query.
    ///
    /// Loading switches on immediately; the current results stay until the
    /// response arrives so the page never flashes the empty state mid-search.
    pub fn begin(&mut self, query: impl Into<String>) -> SearchTicket {
        self.issued += 1;
        self.loading = true;
        let query = query.into();
        self.last_query = Some(query.clone());
        SearchTicket { seq: self.issued, query }
    }

    /// Whether `ticket` is still the latest issued search.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.seq == self.issued
    }

    /// Apply a finished request. Stale tickets are discarded untouched.
    pub fn settle(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<Movie>, SearchError>,
    ) -> SearchOutcome {
        if !self.is_current(&ticket) {
            return SearchOutcome::Superseded;
        }

        self.loading = false;
        match result {
            Ok(movies) => {
                let count = movies.len();
                self.results = movies;
                SearchOutcome::Updated { count }
            }
            Err(e) => SearchOutcome::Failed(e),
        }
    }

    /// Render policy, in priority order: loading, then grid, then empty.
    pub fn result_area(&self) -> ResultArea<'_> {
        if self.loading {
            ResultArea::Loading
        } else if !self.results.is_empty() {
            ResultArea::Grid(&self.results)
        } else {
            ResultArea::Empty
        }
    }
}

// ---------------------------------------------------------------------------
// Driving requests
// ---------------------------------------------------------------------------

/// Scoped mutable access to a [`SearchSession`] owned elsewhere.
pub trait SessionHandle {
    fn with_session<R>(&self, f: impl FnOnce(&mut SearchSession) -> R) -> R;
}

impl SessionHandle for RefCell<SearchSession> {
    fn with_session<R>(&self, f: impl FnOnce(&mut SearchSession) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Issue one search for `query` and apply its result.
///
/// Loading is always cleared when this is the latest search, whether the
/// request succeeded or failed. Failures are logged and returned; the page
/// keeps showing the previous results.
pub async fn run_search<H, C>(session: &H, client: &C, query: String) -> SearchOutcome
where
    H: SessionHandle,
    C: MovieSearch,
{
    let ticket = session.with_session(|s| s.begin(query));
    info!(seq = ticket.seq(), query = ticket.query(), "Searching");

    let result = client.search(ticket.query()).await;

    let seq = ticket.seq();
    let outcome = session.with_session(|s| s.settle(ticket, result));
    match &outcome {
        SearchOutcome::Updated { count } => info!(seq, count, "Search settled"),
        SearchOutcome::Failed(e) => warn!(seq, error = %e, "Search failed, keeping previous results"),
        SearchOutcome::Superseded => debug!(seq, "Discarding response for superseded search"),
    }
    outcome
}

/// Handle a form submission. Blank input is ignored without touching state or
/// the network and yields `None`.
pub async fn submit_search<H, C>(session: &H, client: &C, raw: &str) -> Option<SearchOutcome>
where
    H: SessionHandle,
    C: MovieSearch,
{
    let query = normalize_query(raw)?;
    Some(run_search(session, client, query).await)
}

//! Marquee core — everything behind the movie search page that does not touch the DOM.
//!
//! # Modules
//!
//! - [`types`] — Movie records, poster sentinel handling, themes
//! - [`client`] — The [`client::MovieSearch`] seam and the OMDb implementation
//! - [`session`] — Search session state, request sequencing, render policy
//! - [`store`] — Key-value persistence backends and theme load/save
//! - [`config`] — `marquee.toml` loading and defaults
//! - [`error`] — Error types for search, storage and configuration

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod store;
pub mod types;

use std::path::PathBuf;

pub use client::{MovieSearch, OmdbClient};
pub use config::{load_config, AppConfig};
pub use error::{ConfigError, SearchError, StoreError};
pub use session::{
    normalize_query, run_search, submit_search, ResultArea, SearchOutcome, SearchSession,
    SearchTicket, SessionHandle,
};
pub use store::{load_theme, save_theme, FileStore, KeyValueStore, MemoryStore};
pub use types::{Movie, Poster, Theme};

// ---------------------------------------------------------------------------
// Cross-platform path helpers
// ---------------------------------------------------------------------------

/// Platform-aware home directory: `HOME` on Unix, `USERPROFILE` on Windows.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).ok().map(PathBuf::from)
}

/// Platform-aware config directory: `~/.marquee` on Unix, `%APPDATA%/marquee` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var("APPDATA").ok().map(|a| PathBuf::from(a).join("marquee"))
    } else {
        home_dir().map(|h| h.join(".marquee"))
    }
}

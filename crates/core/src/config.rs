//! `marquee.toml` config loading.
//!
//! Every key is optional. Native builds read the file from the config
//! directory at startup; browser builds use [`AppConfig::default`], whose API
//! key is baked in from `MARQUEE_OMDB_API_KEY` at compile time.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// File name looked up inside the config directory.
pub const CONFIG_FILE: &str = "marquee.toml";

/// Environment variable that overrides the API key at runtime (native only).
pub const API_KEY_ENV: &str = "MARQUEE_OMDB_API_KEY";

pub const DEFAULT_API_URL: &str = "https://www.omdbapi.com/";

/// Query issued automatically when the page first mounts.
pub const DEFAULT_QUERY: &str = "Batman";

/// Known keys in `marquee.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] = &["api_url", "api_key", "default_query"];

/// Runtime configuration handed to the search client and the search view.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the OMDb-compatible search endpoint.
    pub api_url: String,
    /// Access token sent as `apikey` on every request.
    pub api_key: String,
    pub default_query: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: option_env!("MARQUEE_OMDB_API_KEY").unwrap_or_default().to_string(),
            default_query: DEFAULT_QUERY.to_string(),
        }
    }
}

impl AppConfig {
    /// Parse a `marquee.toml` body, filling absent keys with defaults.
    /// Unknown keys trigger a warning with a typo suggestion.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table = content.parse::<toml::Table>()?;
        for key in table.keys() {
            if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
                continue;
            }
            match closest_known_key(key) {
                Some(suggestion) => warn!(
                    key = key.as_str(),
                    suggestion, "Unknown key in marquee.toml — did you mean '{suggestion}'?"
                ),
                None => warn!(key = key.as_str(), "Unknown key in marquee.toml"),
            }
        }

        let mut config: AppConfig = toml::from_str(content)?;
        if config.default_query.trim().is_empty() {
            warn!("default_query is blank, using '{DEFAULT_QUERY}'");
            config.default_query = DEFAULT_QUERY.to_string();
        }
        Ok(config)
    }
}

/// Load configuration from `marquee.toml` in `dir`.
///
/// A missing file yields defaults. A file that can't be read or parsed yields
/// defaults with a warning. `MARQUEE_OMDB_API_KEY` in the environment wins over
/// both.
pub fn load_config(dir: &Path) -> AppConfig {
    let path = dir.join(CONFIG_FILE);
    let mut config = if path.exists() {
        debug!(path = %path.display(), "Loading marquee.toml");
        match std::fs::read_to_string(&path) {
            Ok(content) => AppConfig::from_toml_str(&content).unwrap_or_else(|e| {
                warn!(error = %e, "Falling back to default config");
                AppConfig::default()
            }),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read marquee.toml");
                AppConfig::default()
            }
        }
    } else {
        AppConfig::default()
    };

    if let Ok(key) = std::env::var(API_KEY_ENV) {
        if !key.trim().is_empty() {
            config.api_key = key.trim().to_string();
        }
    }
    if config.api_key.is_empty() {
        info!("No OMDb API key configured; set {API_KEY_ENV} or api_key in {CONFIG_FILE}");
    }
    config
}

/// Nearest known key within edit distance 3, if any.
fn closest_known_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .map(|k| (*k, edit_distance(key, k)))
        .min_by_key(|(_, d)| *d)
        .filter(|(_, d)| *d <= 3)
        .map(|(k, _)| k)
}

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.default_query, "Batman");
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_toml_str(
            "api_url = \"http://localhost:9000/\"\napi_key = \"abc123\"\ndefault_query = \"Alien\"\n",
        )
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:9000/");
        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.default_query, "Alien");
    }

    #[test]
    fn blank_default_query_is_replaced() {
        let config = AppConfig::from_toml_str("default_query = \"   \"").unwrap();
        assert_eq!(config.default_query, DEFAULT_QUERY);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let config = AppConfig::from_toml_str("api_kye = \"x\"").unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn wrong_value_type_is_an_error() {
        assert!(AppConfig::from_toml_str("api_url = 42").is_err());
    }

    #[test]
    fn typo_suggestion() {
        assert_eq!(closest_known_key("api_kye"), Some("api_key"));
        assert_eq!(closest_known_key("default_qurey"), Some("default_query"));
        assert_eq!(closest_known_key("completely_unrelated"), None);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.default_query, DEFAULT_QUERY);
    }

    #[test]
    fn unparseable_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "api_url = [unterminated").unwrap();
        let config = load_config(dir.path());
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "default_query = \"Dune\"\n").unwrap();
        assert_eq!(load_config(dir.path()).default_query, "Dune");
    }
}

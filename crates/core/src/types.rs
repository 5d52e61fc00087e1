//! Core types shared between the search session and the UI: movie records as
//! the OMDb search endpoint returns them, poster artwork handling, and the
//! light/dark theme.

use serde::{Deserialize, Serialize};

/// Wire value OMDb puts in `Poster` when there is no artwork.
pub const NO_POSTER_SENTINEL: &str = "N/A";

/// Image shown in place of a missing poster.
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/400";

// ---------------------------------------------------------------------------
// Movie records
// ---------------------------------------------------------------------------

/// One search hit. Field names follow the OMDb `Search` array entries.
///
/// Immutable once received: the session replaces the whole list on the next
/// successful search rather than patching entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// IMDb identifier, unique per record (`tt0372784`).
    #[serde(rename = "imdbID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    /// Release year as reported; series use ranges like `2004–2012`.
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster", default)]
    pub poster: Poster,
    /// `movie`, `series`, `episode` or `game`.
    #[serde(rename = "Type")]
    pub category: String,
}

impl Movie {
    /// Image URL to render: the poster if there is one, else the placeholder.
    pub fn poster_src(&self) -> &str {
        match &self.poster {
            Poster::Url(url) => url,
            Poster::Missing => PLACEHOLDER_POSTER,
        }
    }
}

/// Poster artwork for a record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Poster {
    Url(String),
    #[default]
    Missing,
}

impl From<String> for Poster {
    fn from(raw: String) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == NO_POSTER_SENTINEL {
            Poster::Missing
        } else {
            Poster::Url(trimmed.to_string())
        }
    }
}

impl From<Poster> for String {
    fn from(poster: Poster) -> Self {
        match poster {
            Poster::Url(url) => url,
            Poster::Missing => NO_POSTER_SENTINEL.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Page theme. Persisted as a boolean flag where `true` means dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value for the `data-theme` attribute on the page root.
    pub fn css_value(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_omdb_search_entry() {
        let movie: Movie = serde_json::from_str(
            r#"{"Title":"Batman Begins","Year":"2005","imdbID":"tt0372784","Type":"movie","Poster":"https://m.media-amazon.com/images/M/batman.jpg"}"#,
        )
        .unwrap();
        assert_eq!(movie.id, "tt0372784");
        assert_eq!(movie.title, "Batman Begins");
        assert_eq!(movie.year, "2005");
        assert_eq!(movie.category, "movie");
        assert_eq!(movie.poster_src(), "https://m.media-amazon.com/images/M/batman.jpg");
    }

    #[test]
    fn sentinel_poster_falls_back_to_placeholder() {
        let movie: Movie = serde_json::from_str(
            r#"{"Title":"Batman: The Rise","Year":"2019","imdbID":"tt1","Type":"series","Poster":"N/A"}"#,
        )
        .unwrap();
        assert_eq!(movie.poster, Poster::Missing);
        assert_eq!(movie.poster_src(), PLACEHOLDER_POSTER);
    }

    #[test]
    fn absent_poster_field_is_missing() {
        let movie: Movie =
            serde_json::from_str(r#"{"Title":"X","Year":"1999","imdbID":"tt2","Type":"game"}"#)
                .unwrap();
        assert_eq!(movie.poster, Poster::Missing);
    }

    #[test]
    fn missing_poster_serializes_back_to_sentinel() {
        assert_eq!(String::from(Poster::Missing), NO_POSTER_SENTINEL);
    }

    #[test]
    fn theme_flag_mapping() {
        assert_eq!(Theme::from_dark_flag(true), Theme::Dark);
        assert_eq!(Theme::from_dark_flag(false), Theme::Light);
        assert!(Theme::default().is_dark());
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().css_value(), "dark");
    }
}

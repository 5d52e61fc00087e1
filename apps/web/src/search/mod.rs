//! Search page — header with theme toggle, search form, and the results region.

mod search_form;
mod theme_toggle;

use dioxus::prelude::*;
use marquee_core::run_search;

use crate::results::ResultsRegion;
use crate::state::*;
use search_form::SearchForm;
use theme_toggle::ThemeToggle;

/// Page shell. Owns the search lifecycle: on first mount it issues one search
/// for the configured default query so the grid is never blank on load.
#[component]
pub fn SearchView() -> Element {
    let services = use_context::<Services>();
    let theme = *THEME.read();

    use_hook(move || {
        let query = services.config.default_query.clone();
        let client = services.client.clone();
        spawn(async move {
            run_search(&GlobalSession, client.as_ref(), query).await;
        });
    });

    rsx! {
        div {
            class: "app-shell",
            "data-theme": theme.css_value(),

            main {
                class: "page",

                header {
                    class: "page-header",
                    h1 { class: "page-title", "Movies For You" }
                    ThemeToggle {}
                }

                SearchForm {}

                ResultsRegion {}
            }
        }
    }
}

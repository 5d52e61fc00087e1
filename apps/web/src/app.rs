//! Root application component — stylesheets plus the search page.

use dioxus::prelude::*;

use crate::search::SearchView;
use crate::state::Services;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    use_context_provider(Services::open);

    rsx! {
        document::Title { "Movies For You" }
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        SearchView {}
    }
}

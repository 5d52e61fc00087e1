//! Results region — exactly one of spinner, card grid, or "no results".

mod result_card;

use dioxus::prelude::*;
use marquee_core::ResultArea;

use crate::state::*;
pub use result_card::ResultCard;

#[component]
pub fn ResultsRegion() -> Element {
    let session = SESSION.read();
    render_area(session.result_area())
}

fn render_area(area: ResultArea<'_>) -> Element {
    match area {
        ResultArea::Loading => rsx! {
            div {
                class: "results-loading",
                "role": "status",
                "aria-live": "polite",
                div { class: "spinner" }
                span { class: "visually-hidden", "Loading…" }
            }
        },
        ResultArea::Grid(movies) => rsx! {
            div {
                class: "result-grid",
                for movie in movies.iter() {
                    ResultCard { key: "{movie.id}", movie: movie.clone() }
                }
            }
        },
        ResultArea::Empty => rsx! {
            div {
                class: "results-empty",
                h2 { class: "results-empty-title", "No movies found" }
                p { class: "results-empty-hint", "Try searching for something else" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{Movie, Poster, SearchError, SearchSession};

    #[component]
    fn RegionFor(session: SearchSession) -> Element {
        render_area(session.result_area())
    }

    fn render(session: SearchSession) -> String {
        let mut dom =
            VirtualDom::new_with_props(RegionFor, RegionForProps::builder().session(session).build());
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn movie(id: &str) -> Movie {
        Movie {
            id: id.into(),
            title: format!("Movie {id}"),
            year: "1999".into(),
            poster: Poster::Missing,
            category: "movie".into(),
        }
    }

    fn regions_shown(html: &str) -> Vec<&'static str> {
        ["results-loading", "result-grid", "results-empty"]
            .into_iter()
            .filter(|class| html.contains(class))
            .collect()
    }

    #[test]
    fn exactly_one_region_for_every_state() {
        let fresh = SearchSession::new();

        let mut loading = fresh.clone();
        loading.begin("Batman");

        let mut loaded = loading.clone();
        let t = loaded.begin("Batman");
        loaded.settle(t, Ok(vec![movie("tt1"), movie("tt2")]));

        let mut reloading = loaded.clone();
        reloading.begin("Alien");

        let mut failed = loaded.clone();
        let t = failed.begin("Alien");
        failed.settle(t, Err(SearchError::Api("Request limit reached!".into())));

        let cases = [
            (fresh, "results-empty"),
            (loading, "results-loading"),
            (loaded, "result-grid"),
            (reloading, "results-loading"),
            (failed, "result-grid"),
        ];
        for (session, expected) in cases {
            let html = render(session);
            assert_eq!(regions_shown(&html), [expected], "markup: {html}");
        }
    }

    #[test]
    fn grid_renders_one_card_per_result_in_order() {
        let mut session = SearchSession::new();
        let t = session.begin("Batman");
        session.settle(t, Ok(vec![movie("tt9"), movie("tt1"), movie("tt5")]));

        let html = render(session);
        assert_eq!(html.matches("class=\"result-card\"").count(), 3);
        let first = html.find("Movie tt9").unwrap();
        let second = html.find("Movie tt1").unwrap();
        let third = html.find("Movie tt5").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn empty_state_has_message() {
        let html = render(SearchSession::new());
        assert!(html.contains("No movies found"));
        assert!(html.contains("Try searching for something else"));
    }
}

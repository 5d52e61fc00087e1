//! Result card — poster, category badge, title, and a year overlay revealed
//! on hover or keyboard focus. Pure: the markup depends only on the record.

use dioxus::prelude::*;
use marquee_core::Movie;

#[component]
pub fn ResultCard(movie: Movie) -> Element {
    rsx! {
        article {
            class: "result-card",
            tabindex: "0",

            div {
                class: "result-card-overlay",
                p { class: "result-card-year", "{movie.year}" }
            }

            div {
                class: "result-card-poster",
                img {
                    src: "{movie.poster_src()}",
                    alt: "{movie.title}",
                    "loading": "lazy",
                }
            }

            div {
                class: "result-card-caption",
                span { class: "result-card-badge", "{movie.category}" }
                h3 { class: "result-card-title", title: "{movie.title}", "{movie.title}" }
            }
        }
    }
}

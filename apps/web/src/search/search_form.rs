//! Search form — text input plus submit button. Typing only edits the
//! session's input text; a search runs on Enter or button press.

use dioxus::prelude::*;
use marquee_core::{normalize_query, run_search};

use crate::state::*;

#[component]
pub fn SearchForm() -> Element {
    let services = use_context::<Services>();
    let input = SESSION.read().input().to_string();

    rsx! {
        form {
            class: "search-form",
            "role": "search",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();

                let raw = SESSION.read().input().to_string();
                // Blank submissions leave results and the network alone
                let Some(query) = normalize_query(&raw) else {
                    return;
                };

                let client = services.client.clone();
                spawn(async move {
                    run_search(&GlobalSession, client.as_ref(), query).await;
                });
            },

            div {
                class: "search-input-row",

                input {
                    class: "search-input",
                    r#type: "text",
                    name: "q",
                    placeholder: "Search for movies...",
                    value: "{input}",
                    autofocus: true,
                    oninput: move |e: Event<FormData>| {
                        SESSION.write().set_input(e.value());
                    },
                }

                button {
                    class: "search-submit",
                    r#type: "submit",
                    title: "Search",
                    "aria-label": "Search",
                    svg {
                        class: "search-icon",
                        width: "24",
                        height: "24",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        circle { cx: "11", cy: "11", r: "8" }
                        line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                    }
                }
            }
        }
    }
}

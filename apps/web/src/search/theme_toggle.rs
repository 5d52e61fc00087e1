//! Theme toggle — sun icon while dark, moon icon while light.

use dioxus::prelude::*;
use marquee_core::{save_theme, KeyValueStore};
use tracing::{debug, warn};

use crate::state::*;

#[component]
pub fn ThemeToggle() -> Element {
    let services = use_context::<Services>();
    let theme = *THEME.read();
    let label = if theme.is_dark() { "Switch to light theme" } else { "Switch to dark theme" };

    rsx! {
        button {
            class: "theme-toggle",
            r#type: "button",
            title: label,
            "aria-label": label,
            onclick: move |_| toggle_theme(services.store.as_ref()),

            if theme.is_dark() {
                // Sun
                svg {
                    width: "24",
                    height: "24",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "12", cy: "12", r: "5" }
                    line { x1: "12", y1: "1", x2: "12", y2: "3" }
                    line { x1: "12", y1: "21", x2: "12", y2: "23" }
                    line { x1: "4.22", y1: "4.22", x2: "5.64", y2: "5.64" }
                    line { x1: "18.36", y1: "18.36", x2: "19.78", y2: "19.78" }
                    line { x1: "1", y1: "12", x2: "3", y2: "12" }
                    line { x1: "21", y1: "12", x2: "23", y2: "12" }
                    line { x1: "4.22", y1: "19.78", x2: "5.64", y2: "18.36" }
                    line { x1: "18.36", y1: "5.64", x2: "19.78", y2: "4.22" }
                }
            } else {
                // Moon
                svg {
                    width: "24",
                    height: "24",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    path { d: "M21 12.79A9 9 0 1111.21 3 7 7 0 0021 12.79z" }
                }
            }
        }
    }
}

/// Flip the theme and persist it. A failed save is logged; the page keeps
/// the new theme for this session either way.
fn toggle_theme(store: &dyn KeyValueStore) {
    let next = THEME.read().toggled();
    *THEME.write() = next;

    match save_theme(store, next) {
        Ok(()) => debug!(theme = next.css_value(), "Theme saved"),
        Err(e) => warn!(error = %e, "Could not persist theme"),
    }
}

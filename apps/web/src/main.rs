//! Marquee — Dioxus-powered movie poster search.

use dioxus::prelude::*;

mod app;
mod results;
mod search;
mod state;
#[cfg(target_arch = "wasm32")]
mod storage;

use app::App;

fn main() {
    init_logging();

    // Read config and the saved theme before the first render
    state::initial_state();

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((17, 24, 39, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Movies For You")
                            .with_inner_size(LogicalSize::new(1200.0, 900.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 600.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("marquee=info".parse().unwrap()),
        )
        .with_target(false)
        .init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    dioxus::logger::initialize_default();
}

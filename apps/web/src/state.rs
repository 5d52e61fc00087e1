//! Global application state using Dioxus signals, plus the services the
//! components share through context.

use std::rc::Rc;
use std::sync::OnceLock;

use dioxus::prelude::*;
use marquee_core::{
    load_theme, AppConfig, KeyValueStore, OmdbClient, SearchSession, SessionHandle, Theme,
};

/// Startup snapshot — read once before Dioxus launches, consumed by the
/// signal initializers and [`Services::open`].
pub struct InitialState {
    pub config: AppConfig,
    pub theme: Theme,
}

static INITIAL_STATE: OnceLock<InitialState> = OnceLock::new();

/// Load config and the saved theme on first call; later calls return the
/// same snapshot.
pub fn initial_state() -> &'static InitialState {
    INITIAL_STATE.get_or_init(|| {
        let config = load_app_config();
        let theme = load_theme(open_store().as_ref());
        tracing::info!(theme = theme.css_value(), "Starting up");
        InitialState { config, theme }
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn load_app_config() -> AppConfig {
    let dir = marquee_core::config_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    marquee_core::load_config(&dir)
}

#[cfg(target_arch = "wasm32")]
fn load_app_config() -> AppConfig {
    AppConfig::default()
}

/// Preference storage for this platform: browser `localStorage` on the web,
/// `settings.toml` in the config directory natively.
#[cfg(target_arch = "wasm32")]
pub fn open_store() -> Rc<dyn KeyValueStore> {
    Rc::new(crate::storage::LocalStorage)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_store() -> Rc<dyn KeyValueStore> {
    match marquee_core::config_dir() {
        Some(dir) => Rc::new(marquee_core::FileStore::in_dir(&dir)),
        None => {
            tracing::warn!("No config directory found, theme will not persist");
            Rc::new(marquee_core::MemoryStore::new())
        }
    }
}

// ---------------------------------------------------------------------------
// Services (context)
// ---------------------------------------------------------------------------

/// Collaborators injected into the component tree.
#[derive(Clone)]
pub struct Services {
    pub config: Rc<AppConfig>,
    pub client: Rc<OmdbClient>,
    pub store: Rc<dyn KeyValueStore>,
}

impl Services {
    pub fn open() -> Self {
        let config = initial_state().config.clone();
        Self {
            client: Rc::new(OmdbClient::new(&config)),
            config: Rc::new(config),
            store: open_store(),
        }
    }
}

// ---------------------------------------------------------------------------
// Global signals
// ---------------------------------------------------------------------------

/// Search box text, results, loading flag and request sequencing
pub static SESSION: GlobalSignal<SearchSession> = Signal::global(SearchSession::new);

/// Active theme — seeded from storage at startup
pub static THEME: GlobalSignal<Theme> = Signal::global(|| initial_state().theme);

/// [`SessionHandle`] over the [`SESSION`] signal, for `run_search`.
pub struct GlobalSession;

impl SessionHandle for GlobalSession {
    fn with_session<R>(&self, f: impl FnOnce(&mut SearchSession) -> R) -> R {
        f(&mut SESSION.write())
    }
}

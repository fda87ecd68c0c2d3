use dioxus::prelude::*;
use shared_types::AppConfig;

mod access;
mod format_helpers;
mod gateway;
mod navigation;
mod router;
mod routes;
mod session;
mod storage;

use navigation::NavState;
use router::AppRouter;
use session::SessionState;

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    dioxus::launch(App);
}

/// Load client configuration. Native hosts read `config.toml` from the
/// working directory; the web build ships with defaults.
fn load_config() -> AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    if let Ok(raw) = std::fs::read_to_string("config.toml") {
        match toml::from_str(&raw) {
            Ok(config) => return config,
            Err(e) => tracing::warn!(error = %e, "invalid config.toml, using defaults"),
        }
    }
    AppConfig::default()
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let strategy = config.session.strategy;

    // The stores are created here and handed down via context — explicit
    // initialization order, nothing module-level.
    let session =
        use_context_provider(|| SessionState::new(strategy, storage::credential_store()));
    use_context_provider(|| NavState::new(router::HOME_ROUTE));

    // Resolve any existing session once at startup. The router holds all
    // redirect decisions until this settles.
    use_future(move || {
        let mut session = session.clone();
        async move {
            session.initialize().await;
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        AppRouter {}
    }
}

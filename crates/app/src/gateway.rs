//! Full-page navigations to the external identity provider.
//!
//! These are divergent operations: on the web the current document is
//! replaced and the SPA's execution context ends, so no code after a call
//! here runs in the redirected page. Non-browser hosts cannot perform the
//! navigation; there the call logs and the provider flow is unavailable.

/// Hand the browser to the provider's login flow.
pub fn begin_provider_login(selector: &str) {
    navigate_away(&service::provider::login_path(selector));
}

/// Hand the browser to the provider's logout endpoint.
pub fn begin_provider_logout() {
    navigate_away(service::provider::LOGOUT_PATH);
}

fn navigate_away(path: &str) {
    tracing::info!(path, "full-page navigation to identity provider");

    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::warn!(path, "provider navigation requires a browser host");
}

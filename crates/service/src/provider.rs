//! Mock external identity provider.
//!
//! Mirrors the contract of a hosted-auth platform: a session-info endpoint
//! that returns the currently asserted principal (or none), plus fixed
//! login/logout paths. Login and logout are full-page navigations to those
//! paths, not data calls — the provider owns that flow entirely.

use std::sync::{LazyLock, Mutex};

use shared_types::{Identity, Principal, ServiceError};

/// Path prefix for the provider's login navigation; the provider selector
/// is appended, e.g. `/.auth/login/aad`.
pub const LOGIN_PATH_PREFIX: &str = "/.auth/login/";

/// Path for the provider's logout navigation.
pub const LOGOUT_PATH: &str = "/.auth/logout";

/// Full login navigation path for the given provider selector.
pub fn login_path(provider: &str) -> String {
    format!("{LOGIN_PATH_PREFIX}{provider}")
}

/// Principal the provider currently asserts for this browser session.
static SESSION_PRINCIPAL: LazyLock<Mutex<Option<Principal>>> = LazyLock::new(|| Mutex::new(None));

/// Query the provider's session-info endpoint.
pub async fn fetch_session_principal() -> Result<Option<Principal>, ServiceError> {
    let principal = SESSION_PRINCIPAL
        .lock()
        .expect("provider session mutex poisoned")
        .clone();
    tracing::debug!(asserted = principal.is_some(), "provider session checked");
    Ok(principal)
}

/// Record a completed provider login, as if the user came back from the
/// provider's redirect flow with an asserted principal.
pub fn record_session_principal(identity: &Identity) {
    let principal = Principal {
        id: identity.id,
        display_name: identity.display_name.clone(),
        roles: identity.roles.iter().map(|r| r.as_str().to_string()).collect(),
    };
    *SESSION_PRINCIPAL
        .lock()
        .expect("provider session mutex poisoned") = Some(principal);
}

/// Drop the asserted principal, as the provider would after its logout
/// navigation completes.
pub fn clear_session_principal() {
    *SESSION_PRINCIPAL
        .lock()
        .expect("provider session mutex poisoned") = None;
}

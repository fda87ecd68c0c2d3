//! Session resolution and the authenticated-identity store.

use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{Credentials, Identity, LoginInput, ServiceError, SessionStrategy};

use crate::gateway;
use crate::storage::{self, CredentialStore};

/// Snapshot of the authentication state: at most one identity plus the
/// initial-resolution flag.
///
/// `loading` is true only while the startup resolution attempt is in
/// flight; once [`Session::resolve`] runs it stays false for the session's
/// lifetime. The router makes no redirect decision while it is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    identity: Option<Identity>,
    loading: bool,
}

impl Session {
    /// A fresh session awaiting its initial resolution.
    pub fn resolving() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }

    /// A settled session, for building router states directly in tests.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn resolved(identity: Option<Identity>) -> Self {
        Self {
            identity,
            loading: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Complete the initial resolution attempt, successful or not.
    fn resolve(&mut self, identity: Option<Identity>) {
        self.identity = identity;
        self.loading = false;
    }

    fn set_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    fn clear_identity(&mut self) {
        self.identity = None;
    }
}

/// Resolve an existing session using the configured strategy.
async fn initialize_session(
    session: &mut Session,
    strategy: SessionStrategy,
    vault: &dyn CredentialStore,
) {
    let identity = match strategy {
        SessionStrategy::IdentityProvider => {
            match service::provider::fetch_session_principal().await {
                Ok(principal) => principal.map(Identity::from),
                Err(e) => {
                    tracing::warn!(error = %e, "could not fetch session principal");
                    None
                }
            }
        }
        SessionStrategy::LocalCredentials => match storage::restore_credentials(vault) {
            Some((token, identity)) => {
                service::api::set_auth_token(Some(token));
                Some(identity)
            }
            None => None,
        },
    };

    if let Some(identity) = &identity {
        tracing::info!(user = %identity.display_name, "session restored");
    }
    session.resolve(identity);
}

/// Credential-pair login. On success the token and identity are persisted
/// and installed; on failure the session and vault are left untouched.
async fn credential_login(
    session: &mut Session,
    vault: &dyn CredentialStore,
    credentials: Credentials,
) -> Result<Identity, ServiceError> {
    let response = service::api::authenticate(LoginInput::Credentials(credentials)).await?;

    storage::store_credentials(vault, &response.token, &response.identity);
    service::api::set_auth_token(Some(response.token));
    session.set_identity(response.identity.clone());
    tracing::info!(user = %response.identity.display_name, "signed in");
    Ok(response.identity)
}

/// Clear persisted and in-memory credentials.
fn logout_session(session: &mut Session, vault: &dyn CredentialStore) {
    storage::clear_credentials(vault);
    service::api::set_auth_token(None);
    session.clear_identity();
    tracing::info!("signed out");
}

/// The session store: owns the [`Session`] and exposes login/logout.
/// Provided once from the root component — an explicit context object, not
/// a module-level singleton.
#[derive(Clone)]
pub struct SessionState {
    session: Signal<Session>,
    strategy: SessionStrategy,
    vault: Rc<dyn CredentialStore>,
}

impl SessionState {
    pub fn new(strategy: SessionStrategy, vault: Rc<dyn CredentialStore>) -> Self {
        Self {
            session: Signal::new(Session::resolving()),
            strategy,
            vault,
        }
    }

    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.session.read().identity().cloned()
    }

    /// Attempt to resolve an existing session. Runs once at startup; a
    /// second login attempt racing the first resolution is not guarded.
    pub async fn initialize(&mut self) {
        let mut session = self.snapshot();
        initialize_session(&mut session, self.strategy, self.vault.as_ref()).await;
        self.session.set(session);
    }

    /// Credential-pair login. Surfaces `InvalidCredentials` to the caller
    /// for inline display.
    pub async fn login(&mut self, credentials: Credentials) -> Result<Identity, ServiceError> {
        let mut session = self.snapshot();
        let result = credential_login(&mut session, self.vault.as_ref(), credentials).await;
        if result.is_ok() {
            self.session.set(session);
        }
        result
    }

    /// External-provider login: a full browser navigation to the provider.
    /// The application suspends here; nothing after this call runs in the
    /// current document.
    pub fn login_with_provider(&self, selector: &str) {
        gateway::begin_provider_login(selector);
    }

    /// Clear credentials; under the identity-provider strategy this also
    /// hands the browser to the provider's logout endpoint.
    pub fn logout(&mut self) {
        let mut session = self.snapshot();
        logout_session(&mut session, self.vault.as_ref());
        self.session.set(session);

        if self.strategy == SessionStrategy::IdentityProvider {
            gateway::begin_provider_logout();
        }
    }
}

/// Hook to access the session store.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryCredentials;
    use pretty_assertions::assert_eq;
    use shared_types::Role;

    fn creds(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn fresh_session_is_loading_without_identity() {
        let session = Session::resolving();
        assert!(session.is_loading());
        assert!(session.identity().is_none());
    }

    #[test]
    fn resolve_clears_loading_permanently() {
        let mut session = Session::resolving();
        session.resolve(None);
        assert!(!session.is_loading());

        // Later identity changes never re-enter the loading state.
        session.set_identity(Identity {
            id: 1,
            display_name: "John Doe".into(),
            roles: vec![Role::Student],
            token: None,
        });
        assert!(!session.is_loading());
        session.clear_identity();
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn initialize_without_persisted_credentials_resolves_empty() {
        let vault = InMemoryCredentials::default();
        let mut session = Session::resolving();

        initialize_session(&mut session, SessionStrategy::LocalCredentials, &vault).await;

        assert!(!session.is_loading());
        assert!(session.identity().is_none());
    }

    #[tokio::test]
    async fn initialize_restores_persisted_identity() {
        let vault = InMemoryCredentials::default();
        let identity = Identity {
            id: 2,
            display_name: "Dr. Smith".into(),
            roles: vec![Role::Counselor],
            token: Some("mock-token-counselor1".into()),
        };
        storage::store_credentials(&vault, "mock-token-counselor1", &identity);

        let mut session = Session::resolving();
        initialize_session(&mut session, SessionStrategy::LocalCredentials, &vault).await;

        assert!(!session.is_loading());
        assert_eq!(session.identity(), Some(&identity));
    }

    #[tokio::test]
    async fn login_persists_and_installs_identity() {
        let vault = InMemoryCredentials::default();
        let mut session = Session::resolved(None);

        let identity = credential_login(&mut session, &vault, creds("admin1", "password"))
            .await
            .unwrap();

        assert_eq!(identity.id, 3);
        assert_eq!(identity.display_name, "Admin User");
        assert_eq!(identity.primary_role(), Some(Role::Admin));
        assert_eq!(session.identity(), Some(&identity));

        let (token, persisted) = storage::restore_credentials(&vault).unwrap();
        assert_eq!(token, "mock-token-admin1");
        assert_eq!(persisted, identity);
    }

    #[tokio::test]
    async fn failed_login_leaves_session_and_vault_untouched() {
        let vault = InMemoryCredentials::default();
        let mut session = Session::resolved(None);

        let err = credential_login(&mut session, &vault, creds("admin1", "wrong"))
            .await
            .unwrap_err();

        assert!(err.is_invalid_credentials());
        assert!(session.identity().is_none());
        assert!(storage::restore_credentials(&vault).is_none());
    }

    #[tokio::test]
    async fn unknown_user_fails_with_invalid_credentials() {
        let vault = InMemoryCredentials::default();
        let mut session = Session::resolved(None);

        let err = credential_login(&mut session, &vault, creds("nobody", "password"))
            .await
            .unwrap_err();
        assert!(err.is_invalid_credentials());
    }

    #[tokio::test]
    async fn logout_clears_identity_and_vault() {
        let vault = InMemoryCredentials::default();
        let mut session = Session::resolved(None);
        credential_login(&mut session, &vault, creds("student1", "password"))
            .await
            .unwrap();

        logout_session(&mut session, &vault);

        assert!(session.identity().is_none());
        assert!(storage::restore_credentials(&vault).is_none());
    }
}

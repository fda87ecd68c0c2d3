//! Credential persistence for the local-credentials session strategy.
//!
//! Two key-value entries — the serialized token and the serialized
//! identity — written on login, read at startup, removed on logout.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use shared_types::Identity;

/// Storage key for the opaque credential token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key for the serialized identity.
pub const IDENTITY_KEY: &str = "auth_identity";

/// Minimal key-value persistence surface the session store writes through.
pub trait CredentialStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local store used on native hosts and in tests, where the
/// browser's localStorage is unavailable.
#[derive(Default)]
pub struct InMemoryCredentials {
    entries: RefCell<HashMap<String, String>>,
}

impl CredentialStore for InMemoryCredentials {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Browser localStorage-backed store.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageCredentials;

#[cfg(target_arch = "wasm32")]
impl LocalStorageCredentials {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialStore for LocalStorageCredentials {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// The credential store appropriate for the current host.
pub fn credential_store() -> Rc<dyn CredentialStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStorageCredentials)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(InMemoryCredentials::default())
    }
}

/// Persist a token + identity pair after a successful credential login.
pub fn store_credentials(store: &dyn CredentialStore, token: &str, identity: &Identity) {
    store.set(TOKEN_KEY, token);
    match serde_json::to_string(identity) {
        Ok(json) => store.set(IDENTITY_KEY, &json),
        Err(e) => tracing::warn!(error = %e, "failed to serialize identity for persistence"),
    }
}

/// Restore a previously persisted token + identity pair. Returns None when
/// either entry is missing or the identity no longer parses.
pub fn restore_credentials(store: &dyn CredentialStore) -> Option<(String, Identity)> {
    let token = store.get(TOKEN_KEY)?;
    let raw = store.get(IDENTITY_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(identity) => Some((token, identity)),
        Err(e) => {
            tracing::warn!(error = %e, "persisted identity is unreadable; ignoring");
            None
        }
    }
}

/// Remove both persisted entries.
pub fn clear_credentials(store: &dyn CredentialStore) {
    store.remove(TOKEN_KEY);
    store.remove(IDENTITY_KEY);
}

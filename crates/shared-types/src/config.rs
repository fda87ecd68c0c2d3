use serde::{Deserialize, Serialize};

/// Strategy used to resolve an existing session at startup.
///
/// Exactly one strategy is active at a time; the two are interchangeable
/// from the router's point of view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStrategy {
    /// Query the external identity provider's session endpoint for a
    /// server-asserted principal. Login/logout are full-page redirects.
    IdentityProvider,
    /// Restore a persisted token + identity pair from the credential
    /// vault, written by the credential-pair login path.
    #[default]
    LocalCredentials,
}

/// Session-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionConfig {
    #[serde(default)]
    pub strategy: SessionStrategy,
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field defaults so that a missing or incomplete config file yields
/// a fully working client.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
}

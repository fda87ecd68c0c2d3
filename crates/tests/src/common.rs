use shared_types::{Credentials, LoginInput};
use tokio::sync::Mutex;

/// Global mutex serializing tests that touch the service's process-wide
/// state (the auth-token mirror and the provider session). Each such test
/// holds this lock for its duration.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

/// Acquire the serialization lock and reset service-side state.
pub async fn serial() -> tokio::sync::MutexGuard<'static, ()> {
    let guard = TEST_MUTEX.lock().await;
    service::api::set_auth_token(None);
    service::provider::clear_session_principal();
    guard
}

/// Credential-pair login input for a mock user.
pub fn credentials(username: &str, password: &str) -> LoginInput {
    LoginInput::Credentials(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

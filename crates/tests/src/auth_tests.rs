use pretty_assertions::assert_eq;
use shared_types::{LoginInput, Role};

use crate::common::{credentials, serial};

#[tokio::test]
async fn student_login_resolves_student_identity() {
    let _guard = serial().await;

    let response = service::api::authenticate(credentials("student1", "password"))
        .await
        .unwrap();

    assert_eq!(response.identity.id, 1);
    assert_eq!(response.identity.display_name, "John Doe");
    assert_eq!(response.identity.primary_role(), Some(Role::Student));
    assert_eq!(response.token, "mock-token-student1");
    assert_eq!(response.identity.token.as_deref(), Some("mock-token-student1"));
}

#[tokio::test]
async fn counselor_login_resolves_counselor_identity() {
    let _guard = serial().await;

    let response = service::api::authenticate(credentials("counselor1", "password"))
        .await
        .unwrap();

    assert_eq!(response.identity.id, 2);
    assert_eq!(response.identity.display_name, "Dr. Smith");
    assert_eq!(response.identity.primary_role(), Some(Role::Counselor));
}

#[tokio::test]
async fn admin_login_resolves_admin_identity() {
    let _guard = serial().await;

    let response = service::api::authenticate(credentials("admin1", "password"))
        .await
        .unwrap();

    assert_eq!(response.identity.id, 3);
    assert_eq!(response.identity.display_name, "Admin User");
    assert_eq!(response.identity.primary_role(), Some(Role::Admin));
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let _guard = serial().await;

    let err = service::api::authenticate(credentials("admin1", "wrong"))
        .await
        .unwrap_err();
    assert!(err.is_invalid_credentials());
}

#[tokio::test]
async fn unknown_username_is_rejected() {
    let _guard = serial().await;

    let err = service::api::authenticate(credentials("ghost", "password"))
        .await
        .unwrap_err();
    assert!(err.is_invalid_credentials());
}

#[tokio::test]
async fn provider_login_asserts_admin_principal() {
    let _guard = serial().await;

    let response = service::api::authenticate(LoginInput::Provider("aad".to_string()))
        .await
        .unwrap();

    assert_eq!(response.identity.primary_role(), Some(Role::Admin));
    assert_eq!(response.identity.display_name, "AAD Admin User");

    // The completed provider login is visible on the session endpoint.
    let principal = service::provider::fetch_session_principal()
        .await
        .unwrap()
        .expect("provider session should be asserted after login");
    assert_eq!(principal.id, response.identity.id);
    assert_eq!(principal.roles, vec!["admin".to_string()]);
}

#[tokio::test]
async fn session_endpoint_is_empty_without_provider_login() {
    let _guard = serial().await;

    let principal = service::provider::fetch_session_principal().await.unwrap();
    assert_eq!(principal, None);
}

#[tokio::test]
async fn token_mirror_tracks_set_and_clear() {
    let _guard = serial().await;

    assert_eq!(service::api::auth_token(), None);
    service::api::set_auth_token(Some("mock-token-student1".to_string()));
    assert_eq!(
        service::api::auth_token().as_deref(),
        Some("mock-token-student1")
    );
    service::api::set_auth_token(None);
    assert_eq!(service::api::auth_token(), None);
}

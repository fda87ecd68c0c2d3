//! The appointment service operations.
//!
//! Every operation simulates a network round trip (a short sleep on native
//! targets, elided on wasm) and then answers from [`crate::data`]. The
//! client mirrors the caller's auth token via [`set_auth_token`]; the mock
//! performs no authorization with it — RBAC in this system is enforced
//! client-side only, and that check is advisory.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{LazyLock, Mutex};

use shared_types::{
    Analytics, Appointment, AppointmentRequest, AppointmentStatus, Counselor, Identity, LoginInput,
    Role, ServiceError, StatusUpdate,
};

use crate::data;
use crate::provider;

/// Token mirror, simulating an Authorization header on a real transport.
static AUTH_TOKEN: LazyLock<Mutex<Option<String>>> = LazyLock::new(|| Mutex::new(None));

/// Ids handed out to appointments booked through the mock.
static NEXT_APPOINTMENT_ID: AtomicI64 = AtomicI64::new(100);

/// Successful authentication payload: the principal plus its opaque token.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub identity: Identity,
    pub token: String,
}

/// Set or clear the token the client attaches to subsequent calls.
pub fn set_auth_token(token: Option<String>) {
    let present = token.is_some();
    *AUTH_TOKEN.lock().expect("auth token mutex poisoned") = token;
    tracing::debug!(present, "auth token updated");
}

/// The currently mirrored auth token.
pub fn auth_token() -> Option<String> {
    AUTH_TOKEN.lock().expect("auth token mutex poisoned").clone()
}

/// Simulated network delay. No-op on wasm: the browser build answers
/// immediately rather than pulling in a wasm timer shim.
async fn simulate_latency(ms: u64) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(target_arch = "wasm32")]
    let _ = ms;
}

/// Authenticate with a credential pair or an external-provider selector.
///
/// The provider path mocks a completed external login and also records the
/// asserted principal on the provider session endpoint, so a subsequent
/// session-info query resolves it.
pub async fn authenticate(input: LoginInput) -> Result<AuthResponse, ServiceError> {
    simulate_latency(1000).await;

    match input {
        LoginInput::Provider(selector) => {
            let identity = data::provider_identity();
            let token = format!("mock-aad-token-{}", identity.id);
            tracing::debug!(provider = %selector, user = %identity.display_name, "mock provider login successful");
            provider::record_session_principal(&identity);
            Ok(AuthResponse {
                identity: Identity {
                    token: Some(token.clone()),
                    ..identity
                },
                token,
            })
        }
        LoginInput::Credentials(creds) => {
            let user = data::credential_user(&creds.username);
            match user {
                Some(identity) if creds.password == data::MOCK_PASSWORD => {
                    let token = format!("mock-token-{}", creds.username);
                    tracing::debug!(username = %creds.username, "mock login successful");
                    Ok(AuthResponse {
                        identity: Identity {
                            token: Some(token.clone()),
                            ..identity
                        },
                        token,
                    })
                }
                _ => {
                    tracing::debug!(username = %creds.username, "mock login failed");
                    Err(ServiceError::invalid_credentials("Invalid credentials"))
                }
            }
        }
    }
}

/// Appointments visible to the given subject. The mock answers the same
/// canned list for every caller; the parameters document the contract.
pub async fn list_appointments(
    subject_id: i64,
    role: Role,
) -> Result<Vec<Appointment>, ServiceError> {
    simulate_latency(500).await;
    tracing::debug!(subject_id, role = role.as_str(), "listing appointments");
    Ok(data::appointments())
}

pub async fn list_counselors() -> Result<Vec<Counselor>, ServiceError> {
    simulate_latency(300).await;
    Ok(data::counselors())
}

/// Book a new appointment. Always created pending; the counselor decides
/// from there.
pub async fn create_appointment(
    request: AppointmentRequest,
) -> Result<Appointment, ServiceError> {
    simulate_latency(800).await;
    let id = NEXT_APPOINTMENT_ID.fetch_add(1, Ordering::Relaxed);
    tracing::debug!(id, student = %request.student_name, "appointment booked");
    Ok(Appointment {
        id,
        student_name: request.student_name,
        counselor_name: data::counselor_name(request.counselor_id).to_string(),
        date: request.date,
        time: request.time,
        status: AppointmentStatus::Pending,
        appointment_type: request.appointment_type,
    })
}

/// Acknowledge a status transition. The mock echoes the requested status;
/// callers only ever send confirmed or rejected.
pub async fn set_appointment_status(
    id: i64,
    status: AppointmentStatus,
) -> Result<StatusUpdate, ServiceError> {
    simulate_latency(500).await;
    tracing::debug!(id, status = status.as_str(), "appointment status updated");
    Ok(StatusUpdate { id, status })
}

pub async fn get_analytics() -> Result<Analytics, ServiceError> {
    simulate_latency(400).await;
    Ok(data::analytics())
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of appointment-service failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceErrorKind {
    /// Authentication rejected — user-correctable, shown inline on the
    /// login view.
    InvalidCredentials,
    /// Any data fetch/mutation failure — shown as a dismissible
    /// notification; already-rendered state stays in place.
    Transport,
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceErrorKind::InvalidCredentials => write!(f, "InvalidCredentials"),
            ServiceErrorKind::Transport => write!(f, "Transport"),
        }
    }
}

/// Structured error returned by the appointment service client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub message: String,
}

impl ServiceError {
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self {
            kind: ServiceErrorKind::InvalidCredentials,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ServiceErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn is_invalid_credentials(&self) -> bool {
        self.kind == ServiceErrorKind::InvalidCredentials
    }

    /// Message suitable for direct display, falling back to a generic
    /// line when the service supplied none.
    pub fn friendly_message(&self) -> String {
        if self.message.is_empty() {
            "Something went wrong. Please try again.".to_string()
        } else {
            self.message.clone()
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ServiceError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_credentials_has_correct_kind() {
        let err = ServiceError::invalid_credentials("Invalid credentials");
        assert_eq!(err.kind, ServiceErrorKind::InvalidCredentials);
        assert!(err.is_invalid_credentials());
    }

    #[test]
    fn transport_is_not_invalid_credentials() {
        let err = ServiceError::transport("connection reset");
        assert_eq!(err.kind, ServiceErrorKind::Transport);
        assert!(!err.is_invalid_credentials());
    }

    #[test]
    fn display_impl_formats_kind_and_message() {
        let err = ServiceError::invalid_credentials("bad password");
        assert_eq!(format!("{}", err), "InvalidCredentials: bad password");
    }

    #[test]
    fn friendly_message_falls_back_when_empty() {
        let err = ServiceError::transport("");
        assert_eq!(
            err.friendly_message(),
            "Something went wrong. Please try again."
        );
        let err = ServiceError::transport("timed out");
        assert_eq!(err.friendly_message(), "timed out");
    }

    #[test]
    fn error_roundtrip_through_json() {
        let err = ServiceError::transport("socket closed");
        let json = serde_json::to_string(&err).unwrap();
        let parsed: ServiceError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}

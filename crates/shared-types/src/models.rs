use serde::{Deserialize, Serialize};

/// A role label granted to a principal.
///
/// - `Student` — can book appointments and view their own schedule.
/// - `Counselor` — can accept or reject pending appointment requests.
/// - `Admin` — can view office-wide booking analytics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Counselor,
    Admin,
}

impl Role {
    /// Parse a raw role label. Unknown labels are dropped rather than
    /// defaulted — a principal with no recognized role has no dashboard.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "student" => Some(Role::Student),
            "counselor" => Some(Role::Counselor),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Lowercase string form for persistence and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Counselor => "counselor",
            Role::Admin => "admin",
        }
    }

    /// The dashboard route this role lands on after login.
    pub fn home_route(&self) -> &'static str {
        match self {
            Role::Student => "/student",
            Role::Counselor => "/counselor",
            Role::Admin => "/admin",
        }
    }

    /// Reduce a granted role set to the single role used for dashboard
    /// routing. Fixed priority: admin, then counselor, then student.
    /// Total over any input; an empty or unrecognized set yields None.
    pub fn primary(roles: &[Role]) -> Option<Role> {
        if roles.contains(&Role::Admin) {
            Some(Role::Admin)
        } else if roles.contains(&Role::Counselor) {
            Some(Role::Counselor)
        } else if roles.contains(&Role::Student) {
            Some(Role::Student)
        } else {
            None
        }
    }
}

/// An authenticated principal held client-side for the session's lifetime.
///
/// Persisted to the credential vault under the local-credentials strategy,
/// so every field must survive a serde round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Identity {
    pub id: i64,
    pub display_name: String,
    /// Granted role labels. Order-independent; duplicates carry no meaning.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// Opaque credential token, present after a credential-pair login.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Identity {
    /// The single role used for dashboard routing, or None when the
    /// identity carries no recognized role.
    pub fn primary_role(&self) -> Option<Role> {
        Role::primary(&self.roles)
    }
}

/// Principal asserted by the external identity provider's session endpoint.
///
/// Role labels arrive as raw strings; unrecognized labels drop out when the
/// principal is converted into an [`Identity`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Principal {
    pub id: i64,
    pub display_name: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl From<Principal> for Identity {
    fn from(p: Principal) -> Self {
        Identity {
            id: p.id,
            display_name: p.display_name,
            roles: p.roles.iter().filter_map(|r| Role::from_label(r)).collect(),
            token: None,
        }
    }
}

/// Username/password pair for the direct login path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Input accepted by the authentication operation: either a credential
/// pair or an opaque selector naming an external identity provider.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginInput {
    Credentials(Credentials),
    Provider(String),
}

//! Role-based access control for route namespaces.
//!
//! This check is advisory: it runs client-side only and the mock service
//! performs no enforcement of its own. It gates what the router renders,
//! nothing more.

use shared_types::{Identity, Role};

/// Stateless access predicate, re-evaluated on every render.
///
/// Denies when the identity is absent or carries no recognized role.
/// Otherwise, each role-prefixed namespace (`/student`, `/counselor`,
/// `/admin`) is reachable only by the matching primary role; routes
/// outside all three namespaces are implicitly allowed.
pub fn has_access(identity: Option<&Identity>, route: &str) -> bool {
    let Some(identity) = identity else {
        return false;
    };
    let Some(primary) = identity.primary_role() else {
        return false;
    };

    for role in [Role::Student, Role::Counselor, Role::Admin] {
        if route.starts_with(role.home_route()) && primary != role {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_with(roles: Vec<Role>) -> Identity {
        Identity {
            id: 1,
            display_name: "Test User".into(),
            roles,
            token: None,
        }
    }

    #[test]
    fn absent_identity_is_denied_everywhere() {
        assert!(!has_access(None, "/"));
        assert!(!has_access(None, "/login"));
        assert!(!has_access(None, "/student"));
    }

    #[test]
    fn roleless_identity_is_denied_everywhere() {
        let identity = identity_with(vec![]);
        for route in ["/", "/login", "/student", "/counselor", "/admin", "/x"] {
            assert!(!has_access(Some(&identity), route), "route {route}");
        }
    }

    #[test]
    fn student_reaches_only_the_student_namespace() {
        let identity = identity_with(vec![Role::Student]);
        assert!(has_access(Some(&identity), "/student"));
        assert!(has_access(Some(&identity), "/student/history"));
        assert!(!has_access(Some(&identity), "/counselor"));
        assert!(!has_access(Some(&identity), "/admin"));
    }

    #[test]
    fn counselor_reaches_the_counselor_namespace() {
        let identity = identity_with(vec![Role::Counselor]);
        assert!(has_access(Some(&identity), "/counselor"));
        assert!(!has_access(Some(&identity), "/student"));
    }

    #[test]
    fn routes_outside_role_namespaces_are_implicitly_allowed() {
        let identity = identity_with(vec![Role::Student]);
        assert!(has_access(Some(&identity), "/"));
        assert!(has_access(Some(&identity), "/login"));
        assert!(has_access(Some(&identity), "/about"));
    }

    #[test]
    fn primary_role_decides_for_multi_role_identities() {
        // admin wins the reduction, so only the admin area is reachable
        let identity = identity_with(vec![Role::Student, Role::Admin]);
        assert!(has_access(Some(&identity), "/admin"));
        assert!(!has_access(Some(&identity), "/student"));
    }
}

//! Route reconciliation and top-level view selection.
//!
//! Reconciliation is an explicit step function: given the settled session
//! and the current route it returns at most one corrective navigation, and
//! it never proposes the route already current. Applying its output and
//! running it again therefore yields nothing — re-entrant redirect loops
//! are impossible by construction.

use dioxus::prelude::*;
use shared_types::Role;

use crate::access::has_access;
use crate::navigation::use_nav;
use crate::routes::access_denied::AccessDenied;
use crate::routes::dashboard::{AdminDashboard, CounselorDashboard, StudentDashboard};
use crate::routes::login::Login;
use crate::session::{use_session, Session};

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";

/// Top-level views the router can settle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Initial session resolution in flight.
    Loading,
    Login,
    AccessDenied,
    StudentDashboard,
    CounselorDashboard,
    AdminDashboard,
    /// A corrective navigation was issued this pass; show the loading
    /// indicator until it lands.
    Redirecting,
}

/// "/" and "/login" — reachable regardless of role.
fn is_neutral(route: &str) -> bool {
    route == HOME_ROUTE || route == LOGIN_ROUTE
}

/// The role namespace a route falls under, if any.
fn role_area(route: &str) -> Option<Role> {
    [Role::Student, Role::Counselor, Role::Admin]
        .into_iter()
        .find(|role| route.starts_with(role.home_route()))
}

/// The reconciliation step: at most one corrective navigation per
/// (session, route) state.
///
/// 1. No decision while the session is still resolving.
/// 2. No identity away from the login page: go to "/login".
/// 3. An identity on a neutral route: go to its role home; a roleless
///    identity falls back to "/login" (an unresolved-role dead end).
/// 4. An identity on a route outside every known namespace: go to "/".
pub fn reconcile(session: &Session, route: &str) -> Option<String> {
    if session.is_loading() {
        return None;
    }

    let Some(identity) = session.identity() else {
        return (route != LOGIN_ROUTE).then(|| LOGIN_ROUTE.to_string());
    };

    if is_neutral(route) {
        let target = identity
            .primary_role()
            .map(|role| role.home_route())
            .unwrap_or(LOGIN_ROUTE);
        return (target != route).then(|| target.to_string());
    }

    if role_area(route).is_none() {
        return Some(HOME_ROUTE.to_string());
    }

    None
}

/// Rendering policy once reconciliation has settled.
pub fn select_view(session: &Session, route: &str) -> View {
    if session.is_loading() {
        return View::Loading;
    }

    let Some(identity) = session.identity() else {
        // Defensive fallback: reconcile will already be steering to /login.
        return View::Login;
    };

    if !has_access(Some(identity), route) {
        return View::AccessDenied;
    }

    if let Some(role) = role_area(route) {
        return dashboard_for(role);
    }

    if is_neutral(route) {
        // Interim render while the role-home navigation lands.
        return identity
            .primary_role()
            .map(dashboard_for)
            .unwrap_or(View::Login);
    }

    View::Redirecting
}

fn dashboard_for(role: Role) -> View {
    match role {
        Role::Student => View::StudentDashboard,
        Role::Counselor => View::CounselorDashboard,
        Role::Admin => View::AdminDashboard,
    }
}

/// Watches session + navigation state, applies the reconciliation step in
/// a single effect, and renders the selected view.
#[component]
pub fn AppRouter() -> Element {
    let session_state = use_session();
    let nav = use_nav();

    {
        let session_state = session_state.clone();
        let mut nav = nav;
        use_effect(move || {
            let session = session_state.snapshot();
            let route = nav.current_route();
            if let Some(target) = reconcile(&session, &route) {
                tracing::info!(from = %route, to = %target, "corrective navigation");
                nav.navigate(&target, None);
            }
        });
    }

    let session = session_state.snapshot();
    let route = nav.current_route();

    match select_view(&session, &route) {
        View::Loading | View::Redirecting => rsx! { LoadingIndicator {} },
        View::Login => rsx! { Login {} },
        View::AccessDenied => rsx! { AccessDenied {} },
        View::StudentDashboard => rsx! { StudentDashboard {} },
        View::CounselorDashboard => rsx! { CounselorDashboard {} },
        View::AdminDashboard => rsx! { AdminDashboard {} },
    }
}

/// Centered spinner shown while resolving or redirecting.
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div { class: "loading-indicator",
            div { class: "loading-spinner" }
            p { "Loading..." }
        }
    }
}

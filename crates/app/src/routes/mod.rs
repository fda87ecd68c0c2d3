pub mod access_denied;
pub mod dashboard;
pub mod login;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdCalendar;
use dioxus_free_icons::Icon;
use shared_ui::{Navbar, NavbarBrand, NavbarItem, NavbarSpacer};

use crate::navigation::use_nav;
use crate::router::HOME_ROUTE;
use crate::session::use_session;

/// Top navigation bar shown on every dashboard: brand, the role's
/// dashboard link, and sign-out.
#[component]
pub fn AppNavbar() -> Element {
    let mut session = use_session();
    let mut nav = use_nav();

    let route = nav.current_route();
    let identity = session.identity();

    let (display_name, home) = match &identity {
        Some(identity) => (
            identity.display_name.clone(),
            identity.primary_role().map(|role| role.home_route()),
        ),
        None => (String::new(), None),
    };

    rsx! {
        Navbar {
            NavbarBrand {
                onclick: move |_| nav.navigate(HOME_ROUTE, None),
                Icon::<LdCalendar> { icon: LdCalendar, width: 22, height: 22 }
                "CounselDesk"
            }
            if let Some(home) = home {
                NavbarItem {
                    active: route.starts_with(home),
                    onclick: move |_| nav.navigate(home, None),
                    "Dashboard"
                }
            }
            NavbarSpacer {}
            if !display_name.is_empty() {
                span { class: "navbar-user", "{display_name}" }
            }
            NavbarItem {
                onclick: move |_| session.logout(),
                "Sign Out"
            }
        }
    }
}

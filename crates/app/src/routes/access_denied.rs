use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, CardHeader, CardTitle};

use crate::navigation::use_nav;
use crate::router::HOME_ROUTE;

/// Rendered when the current route is outside the session's reach. Not an
/// error path — a settled state with a single way out: home, where the
/// router re-derives the right dashboard.
#[component]
pub fn AccessDenied() -> Element {
    let mut nav = use_nav();

    rsx! {
        div { class: "denied-page",
            Card {
                class: "denied-card",
                CardHeader {
                    CardTitle { "Access Denied" }
                }
                CardContent {
                    p { class: "denied-message",
                        "You don't have permission to access this page."
                    }
                    Button {
                        onclick: move |_| nav.navigate(HOME_ROUTE, None),
                        "Go to Your Home Dashboard"
                    }
                }
            }
        }
    }
}

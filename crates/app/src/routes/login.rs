use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::Credentials;
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
};

use crate::session::use_session;

/// Provider selector offered on the sign-in page.
const PROVIDER_AAD: &str = "aad";

/// Login page with an external-provider button and a username/password
/// form. Authentication failures surface inline; a successful login is
/// picked up by the router, which steers to the role's dashboard.
#[component]
pub fn Login() -> Element {
    let session = use_session();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let session_for_login = session.clone();
    let handle_login = move |evt: FormEvent| {
        let mut session = session_for_login.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            let credentials = Credentials {
                username: username(),
                password: password(),
            };
            if let Err(e) = session.login(credentials).await {
                error_msg.set(Some(e.friendly_message()));
            }
            loading.set(false);
        }
    };

    let handle_provider_login = move |_| {
        // Full-page navigation; the SPA ends here on the web.
        session.login_with_provider(PROVIDER_AAD);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    div { class: "auth-brand",
                        Icon::<LdCalendar> { icon: LdCalendar, width: 36, height: 36 }
                    }
                    CardTitle { "Sign in to your account" }
                    CardDescription { "Use your organizational credentials." }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    button {
                        class: "auth-provider-btn button",
                        onclick: handle_provider_login,
                        Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                        "Sign in with Microsoft (AAD)"
                    }

                    div { class: "auth-divider", span { "or" } }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "username", "Username" }
                            Input {
                                id: "username",
                                placeholder: "student1",
                                value: username(),
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-hint",
                        "Ask the counseling office for an account if you don't have one."
                    }
                }
            }
        }
    }
}

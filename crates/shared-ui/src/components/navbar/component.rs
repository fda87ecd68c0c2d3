use dioxus::prelude::*;

use crate::components::merge_class;

/// Top navigation bar shell.
#[component]
pub fn Navbar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class("navbar", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav {
            ..merged,
            {children}
        }
    }
}

/// Brand block on the left edge of the navbar.
#[component]
pub fn NavbarBrand(
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "navbar-brand",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// A navigation entry; highlighted when active.
#[component]
pub fn NavbarItem(
    #[props(default = false)] active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "navbar-item",
            "data-active": if active { "true" } else { "false" },
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

/// Pushes subsequent navbar content to the right edge.
#[component]
pub fn NavbarSpacer() -> Element {
    rsx! {
        div { class: "navbar-spacer" }
    }
}

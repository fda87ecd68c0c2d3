use dioxus::prelude::*;

/// Severity of a notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// A dismissible notification banner. Transient outcomes (booking results,
/// transport failures) render through this; dismissal is the only action.
#[component]
pub fn Notification(
    #[props(default)] kind: NotificationKind,
    message: String,
    on_close: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "notification",
            "data-style": kind.class(),
            span { class: "notification-message", "{message}" }
            button {
                class: "notification-close",
                onclick: move |evt| on_close.call(evt),
                "\u{00D7}"
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::merge_class;

/// A form field label.
#[component]
pub fn Label(
    #[props(default)] html_for: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = merge_class("label", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            r#for: "{html_for}",
            ..merged,
            {children}
        }
    }
}

use dioxus::prelude::*;
use dioxus::core::AttributeValue;

pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod label;
pub mod navbar;
pub mod notification;
pub mod page_header;
pub mod skeleton;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use label::*;
pub use navbar::*;
pub use notification::*;
pub use page_header::*;
pub use skeleton::*;

/// Prepend a component's base class to caller-supplied attributes, folding
/// any caller `class` into it so both apply.
pub(crate) fn merge_class(base: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    let mut class_value = base.to_string();
    let mut merged = Vec::with_capacity(attributes.len() + 1);
    for attr in attributes {
        if attr.name == "class" {
            if let AttributeValue::Text(extra) = &attr.value {
                class_value.push(' ');
                class_value.push_str(extra);
                continue;
            }
            merged.push(attr);
        } else {
            merged.push(attr);
        }
    }
    merged.insert(0, Attribute::new("class", class_value, None, false));
    merged
}

use dioxus::prelude::*;

/// Inline error or info line under a form
#[component]
pub fn Notice(message: Option<String>, #[props(default)] success: bool) -> Element {
    rsx! {
        if let Some(message) = message {
            p {
                class: if success { "notice notice-success" } else { "notice notice-error" },
                "{message}"
            }
        }
    }
}

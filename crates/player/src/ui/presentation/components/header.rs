//! Shared header: who is signed in, how far they got, and the way home

use dioxus::prelude::*;

use crate::ui::presentation::components::avatar_emoji;
use crate::ui::presentation::state::use_shell_state;

#[component]
pub fn Header() -> Element {
    let mut state = use_shell_state();

    let shell = state.shell.read().clone();
    let progress = state.progress.read().clone();
    let tier = progress.tier();

    let (name, avatar) = match &shell.identity {
        Some(identity) => (
            identity.username.as_str().to_string(),
            avatar_emoji(identity.avatar.as_str()),
        ),
        None => (String::new(), avatar_emoji("")),
    };
    let next = tier
        .next_threshold()
        .map(|min| format!("{} / {}", progress.score, min))
        .unwrap_or_else(|| progress.score.to_string());

    rsx! {
        header {
            class: "app-header",
            button {
                class: "header-identity",
                onclick: move |_| state.navigate(|s| s.open_profile()),
                span { class: "header-avatar", "{avatar}" }
                span { class: "header-name", "{name}" }
            }
            div {
                class: "header-progress",
                span { class: "header-tier", "{tier.label()}" }
                span { class: "header-score", "⭐ {next}" }
                span { class: "header-percent", "%{progress.percent}" }
            }
            nav {
                class: "header-actions",
                if shell.show_home() {
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| state.navigate(|s| s.go_home()),
                        "🏠 Ana Sayfa"
                    }
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| state.navigate(|s| s.logout()),
                    "Çıkış"
                }
            }
        }
    }
}

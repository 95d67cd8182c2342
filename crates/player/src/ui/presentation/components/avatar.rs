//! Avatar catalog and picker

use dioxus::prelude::*;

/// Avatar ids with the emoji shown for them
pub const AVATARS: [(&str, &str); 8] = [
    ("robot", "🤖"),
    ("astronaut", "🧑‍🚀"),
    ("scientist", "🧑‍🔬"),
    ("rocket", "🚀"),
    ("owl", "🦉"),
    ("cat", "🐱"),
    ("dino", "🦖"),
    ("unicorn", "🦄"),
];

/// Unknown ids (older profiles) fall back to the first avatar.
pub fn avatar_emoji(id: &str) -> &'static str {
    AVATARS
        .iter()
        .find(|(avatar, _)| *avatar == id)
        .map(|(_, emoji)| *emoji)
        .unwrap_or(AVATARS[0].1)
}

#[component]
pub fn AvatarPicker(selected: String, on_select: EventHandler<String>) -> Element {
    rsx! {
        div {
            class: "avatar-grid",
            for (id, emoji) in AVATARS {
                button {
                    key: "{id}",
                    class: if selected == id { "avatar-choice selected" } else { "avatar-choice" },
                    onclick: move |_| on_select.call(id.to_string()),
                    "{emoji}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_avatar_falls_back() {
        assert_eq!(avatar_emoji("owl"), "🦉");
        assert_eq!(avatar_emoji("dragon"), "🤖");
    }
}

use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;

use presentation::components::Header;
use presentation::state::{use_shell_state, ShellState};
use presentation::views::CurrentView;

const PLAYER_CSS: &str = include_str!("../../assets/css/player.css");

/// Shell variant for UI layout selection.
/// This is passed via Dioxus context from the composition root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl ShellKind {
    fn class(&self) -> &'static str {
        match self {
            ShellKind::Desktop => "shell shell-desktop",
            ShellKind::Mobile => "shell shell-mobile",
        }
    }
}

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/player/src/main.rs`).
    let shell = use_context::<ShellKind>();
    let platform = use_platform();

    let init_platform = platform.clone();
    use_context_provider(move || ShellState::new(init_platform.as_ref()));
    let state = use_shell_state();

    #[cfg(target_arch = "wasm32")]
    {
        let listener_platform = platform.clone();
        use_hook(move || listen_for_fragment_changes(state, listener_platform));
    }

    // Title and reserved fragment follow the current view.
    let effect_platform = platform.clone();
    use_effect(move || {
        let view = state.view();
        effect_platform.set_page_title(view.title());
        state.sync_location(effect_platform.as_ref());
    });

    let show_header = state.shell.read().show_header();

    rsx! {
        style { {PLAYER_CSS} }
        div {
            class: shell.class(),
            if show_header {
                Header {}
            }
            main {
                class: "view",
                CurrentView {}
            }
        }
    }
}

/// Route the browser's `hashchange` events into the view shell.
#[cfg(target_arch = "wasm32")]
fn listen_for_fragment_changes(mut state: ShellState, platform: Platform) {
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(window) = web_sys::window() else {
        tracing::warn!("No window; fragment routing disabled");
        return;
    };

    let on_change = Closure::<dyn FnMut(web_sys::HashChangeEvent)>::new(
        move |_event: web_sys::HashChangeEvent| {
            state.navigate(|shell| shell.on_fragment_change(platform.as_ref()));
        },
    );
    if let Err(e) =
        window.add_event_listener_with_callback("hashchange", on_change.as_ref().unchecked_ref())
    {
        tracing::warn!(error = ?e, "Failed to register hashchange listener");
        return;
    }
    // Lives as long as the page.
    on_change.forget();
}

//! Shell state using Dioxus signals
//!
//! Wraps the plain `ViewShell` in a signal so any screen can navigate, and
//! keeps the cached progress next to it for the header.

use dioxus::prelude::*;

use mucit_domain::{Identity, Progress};

use crate::ports::outbound::PlatformPort;
use crate::shell::{session_store, View, ViewShell};

#[derive(Clone, Copy)]
pub struct ShellState {
    pub shell: Signal<ViewShell>,
    /// Cached progress, refreshed after every scored activity
    pub progress: Signal<Progress>,
}

impl ShellState {
    /// Resolve the first screen and cached progress from the platform.
    pub fn new(platform: &dyn PlatformPort) -> Self {
        Self {
            shell: Signal::new(ViewShell::resolve_initial(platform)),
            progress: Signal::new(session_store::load_progress(platform)),
        }
    }

    pub fn view(&self) -> View {
        self.shell.read().view
    }

    pub fn identity(&self) -> Option<Identity> {
        self.shell.read().identity.clone()
    }

    /// Apply a shell transition.
    pub fn navigate(&mut self, transition: impl FnOnce(&mut ViewShell)) {
        let mut shell = self.shell.write();
        let from = shell.view;
        transition(&mut shell);
        if shell.view != from {
            tracing::debug!(from = ?from, to = ?shell.view, "View changed");
        }
    }

    pub fn set_progress(&mut self, progress: Progress) {
        self.progress.set(progress);
    }

    /// Keep the URL fragment in step with the current view.
    pub fn sync_location(&self, platform: &dyn PlatformPort) {
        self.shell.read().sync_location(platform);
    }
}

pub fn use_shell_state() -> ShellState {
    use_context::<ShellState>()
}

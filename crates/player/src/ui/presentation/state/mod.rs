//! UI state held in Dioxus signals

mod shell_state;

pub use shell_state::{use_shell_state, ShellState};

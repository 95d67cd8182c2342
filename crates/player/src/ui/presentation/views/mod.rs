//! One screen per `View`

mod activity;
mod admin;
mod daily_exam;
mod entry;
mod parent_teacher;
mod planets;
mod planning;
mod privacy;
mod profile;
mod tools;

pub use activity::ActivityView;
pub use admin::{AdminDashboardView, AdminLoginView};
pub use daily_exam::DailyExamView;
pub use entry::{AvatarView, EntryView};
pub use parent_teacher::ParentTeacherView;
pub use planets::{ClassesView, PlanetsView};
pub use planning::PlanningView;
pub use privacy::PrivacyView;
pub use profile::ProfileView;
pub use tools::ToolsView;

use dioxus::prelude::*;

use crate::shell::View;
use crate::ui::presentation::state::use_shell_state;

/// Render whatever the shell says is showing
#[component]
pub fn CurrentView() -> Element {
    let state = use_shell_state();
    let view = state.view();

    match view {
        View::Entry => rsx! { EntryView {} },
        View::Avatar => rsx! { AvatarView {} },
        View::Planets => rsx! { PlanetsView {} },
        View::Classes => rsx! { ClassesView {} },
        View::Activity => rsx! { ActivityView {} },
        View::DailyExam => rsx! { DailyExamView {} },
        View::Profile => rsx! { ProfileView {} },
        View::Tools => rsx! { ToolsView {} },
        View::Planning => rsx! { PlanningView {} },
        View::ParentTeacher => rsx! { ParentTeacherView {} },
        View::Privacy => rsx! { PrivacyView {} },
        View::AdminLogin => rsx! { AdminLoginView {} },
        View::AdminDashboard => rsx! { AdminDashboardView {} },
    }
}

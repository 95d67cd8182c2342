//! Planet picker and the per-planet class list

use dioxus::prelude::*;

use mucit_domain::{ActivityKind, AgeGroup, Difficulty};

use crate::application::services::catalog::activities_for;
use crate::ui::presentation::services::{use_exam_service, use_progress_service};
use crate::ui::presentation::state::use_shell_state;

fn planet_emoji(age_group: AgeGroup) -> &'static str {
    match age_group {
        AgeGroup::Preschool => "🪐",
        AgeGroup::Early => "🌍",
        AgeGroup::Middle => "🌌",
    }
}

#[component]
pub fn PlanetsView() -> Element {
    let mut state = use_shell_state();

    rsx! {
        section {
            class: "screen planets",
            h1 { class: "title", "Hangi gezegene gidelim?" }
            div {
                class: "planet-grid",
                for age_group in AgeGroup::ALL {
                    button {
                        key: "{age_group.slug()}",
                        class: "planet-card",
                        onclick: move |_| state.navigate(|s| s.select_planet(age_group)),
                        span { class: "planet-icon", "{planet_emoji(age_group)}" }
                        span { class: "planet-name", "{age_group.planet_name()}" }
                        span { class: "planet-ages", "{age_group.ages().0}-{age_group.ages().1} yaş" }
                    }
                }
            }
            div {
                class: "quick-links",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| state.navigate(|s| s.open_tools()),
                    "🧰 Araçlar"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| state.navigate(|s| s.open_planning()),
                    "📝 Planlama"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| state.navigate(|s| s.open_profile()),
                    "👤 Profil"
                }
            }
        }
    }
}

#[component]
pub fn ClassesView() -> Element {
    let mut state = use_shell_state();
    let progress_service = use_progress_service();
    let exam_service = use_exam_service();

    let mut difficulty = use_signal(Difficulty::default);

    let shell = state.shell.read().clone();
    let Some(age_group) = shell.age_group else {
        // Only reachable through select_planet; recover if state got lost.
        return rsx! {
            section {
                class: "screen",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| state.navigate(|s| s.back_to_planets()),
                    "Gezegenlere dön"
                }
            }
        };
    };

    let progress = state.progress.read().clone();
    let exam_taken = shell
        .identity
        .as_ref()
        .map(|identity| exam_service.taken_today(identity, age_group))
        .unwrap_or(true);

    let activities: Vec<_> = activities_for(age_group)
        .into_iter()
        .map(|activity| {
            let id = activity.activity_id();
            let visits = progress_service.visits(&id);
            let done = progress.has_completed(&id);
            let icon = match activity.kind {
                ActivityKind::Game => "🎮",
                ActivityKind::Quiz => "❓",
            };
            (activity, icon, visits, done)
        })
        .collect();

    rsx! {
        section {
            class: "screen classes",
            h1 { class: "title", "{planet_emoji(age_group)} {age_group.planet_name()}" }

            div {
                class: "difficulty-picker",
                span { class: "label", "Zorluk:" }
                for level in Difficulty::ALL {
                    button {
                        key: "{level.label()}",
                        class: if *difficulty.read() == level { "chip selected" } else { "chip" },
                        onclick: move |_| difficulty.set(level),
                        "{level.label()} (x{level.multiplier()})"
                    }
                }
            }

            ul {
                class: "activity-list",
                for (activity, icon, visits, done) in activities {
                    li {
                        key: "{activity.id}",
                        button {
                            class: if done { "activity-card done" } else { "activity-card" },
                            onclick: {
                                let progress_service = progress_service.clone();
                                move |_| {
                                    let id = activity.activity_id();
                                    progress_service.record_visit(&id);
                                    let level = *difficulty.read();
                                    state.navigate(|s| s.select_activity(id, level));
                                }
                            },
                            span { class: "activity-kind", "{icon}" }
                            span { class: "activity-title", "{activity.title}" }
                            span { class: "activity-visits", "👣 {visits}" }
                            if done {
                                span { class: "activity-done", "✅" }
                            }
                        }
                    }
                }
            }

            div {
                class: "quick-links",
                button {
                    class: "btn btn-primary",
                    disabled: exam_taken,
                    onclick: move |_| state.navigate(|s| s.open_daily_exam()),
                    if exam_taken { "Bugünün sınavı tamam ✔" } else { "📋 Günlük Sınav" }
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| state.navigate(|s| s.back_to_planets()),
                    "← Gezegenler"
                }
            }
        }
    }
}

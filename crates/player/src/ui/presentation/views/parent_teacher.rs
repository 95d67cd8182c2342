//! Parent / teacher report lookup

use dioxus::prelude::*;

use crate::application::services::StudentReport;
use crate::ui::presentation::components::{avatar_emoji, Notice};
use crate::ui::presentation::services::use_report_service;
use crate::ui::presentation::state::use_shell_state;

#[component]
pub fn ParentTeacherView() -> Element {
    let mut state = use_shell_state();
    let report_service = use_report_service();

    let mut student_number = use_signal(String::new);
    let mut report: Signal<Option<StudentReport>> = use_signal(|| None);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut busy = use_signal(|| false);

    let on_lookup = move |_| {
        if *busy.read() {
            return;
        }
        let svc = report_service.clone();
        let raw = student_number.read().clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match svc.lookup(&raw).await {
                Ok(found) => report.set(Some(found)),
                Err(e) => {
                    report.set(None);
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    let shown = report.read().clone().map(|found| {
        let joined = found.profile.created_at.format("%d.%m.%Y").to_string();
        (found, joined)
    });

    rsx! {
        section {
            class: "screen parent-teacher",
            h1 { class: "title", "Veli / Öğretmen" }
            p { class: "subtitle", "Öğrencinin numarasıyla gelişimini görüntüleyin." }

            div {
                class: "card inline-form",
                input {
                    class: "input input-number",
                    r#type: "text",
                    inputmode: "numeric",
                    placeholder: "16 haneli öğrenci numarası",
                    value: "{student_number}",
                    oninput: move |e| student_number.set(e.value()),
                }
                button {
                    class: "btn btn-primary",
                    disabled: *busy.read(),
                    onclick: on_lookup,
                    "Göster"
                }
            }
            Notice { message: error.read().clone() }

            if let Some((found, joined)) = shown {
                div {
                    class: "card report",
                    h2 {
                        "{avatar_emoji(found.profile.identity.avatar.as_str())} {found.profile.identity.username}"
                    }
                    p { class: "hint", "Kayıt: {joined}" }
                    div {
                        class: "stats",
                        div { class: "stat", span { class: "stat-value", "{found.progress.score}" } span { class: "stat-label", "Puan" } }
                        div { class: "stat", span { class: "stat-value", "{found.tier.label()}" } span { class: "stat-label", "Rütbe" } }
                        div { class: "stat", span { class: "stat-value", "%{found.progress.percent}" } span { class: "stat-label", "İlerleme" } }
                        if let Some(average) = found.average_exam_percent() {
                            div { class: "stat", span { class: "stat-value", "%{average}" } span { class: "stat-label", "Sınav ortalaması" } }
                        }
                    }
                    h3 { "Sınavlar" }
                    if found.exams.is_empty() {
                        p { class: "hint", "Henüz sınav yok." }
                    }
                    ul {
                        class: "exam-history",
                        for exam in found.exams.iter() {
                            li {
                                key: "{exam.id}",
                                span { "{exam.date} · {exam.age_group.planet_name()}" }
                                span { "{exam.correct}/{exam.total}" }
                                span { "+{exam.score}" }
                            }
                        }
                    }
                }
            }

            button {
                class: "btn btn-ghost",
                onclick: move |_| state.navigate(|s| s.close_parent_teacher()),
                "← Geri"
            }
        }
    }
}

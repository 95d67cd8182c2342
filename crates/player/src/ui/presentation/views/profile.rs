//! Profile screen: identity, progress and exam history

use dioxus::prelude::*;

use crate::ui::presentation::components::{avatar_emoji, AvatarPicker, Notice};
use crate::ui::presentation::services::{
    use_exam_service, use_profile_service, use_progress_service,
};
use crate::ui::presentation::state::use_shell_state;
use crate::ui::use_platform;

#[component]
pub fn ProfileView() -> Element {
    let mut state = use_shell_state();
    let platform = use_platform();
    let profile_service = use_profile_service();
    let progress_service = use_progress_service();
    let exam_service = use_exam_service();

    let identity = state.identity();
    let initial = identity.clone();
    let mut username = use_signal(move || {
        initial
            .as_ref()
            .map(|i| i.username.as_str().to_string())
            .unwrap_or_default()
    });
    let initial = identity.clone();
    let mut avatar = use_signal(move || {
        initial
            .as_ref()
            .map(|i| i.avatar.as_str().to_string())
            .unwrap_or_default()
    });
    let mut message: Signal<Option<(String, bool)>> = use_signal(|| None);
    let mut confirm_reset = use_signal(|| false);

    // Pull the remote copy once so a second device's progress shows up here.
    let refresh_identity = identity.clone();
    use_hook(move || {
        if let Some(identity) = refresh_identity {
            spawn(async move {
                let progress = progress_service.refresh(&identity).await;
                state.set_progress(progress);
            });
        }
    });

    let history_identity = identity.clone();
    let history = use_resource(move || {
        let svc = exam_service.clone();
        let student = history_identity.as_ref().map(|i| i.student_number.clone());
        async move {
            match student {
                Some(student) => svc.history(&student).await,
                None => Vec::new(),
            }
        }
    });

    let Some(identity) = identity else {
        return rsx! {
            section {
                class: "screen",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| state.navigate(|s| s.logout()),
                    "Giriş yap"
                }
            }
        };
    };

    let progress = state.progress.read().clone();
    let tier = progress.tier();
    let completed = progress.completed_activities.len();

    let save_identity = identity.clone();
    let on_save = move |_| {
        let name = username.read().clone();
        let avatar_id = avatar.read().clone();
        match profile_service.update_profile(&save_identity, &name, &avatar_id) {
            Ok(updated) => {
                state.navigate(|s| s.update_identity(updated, platform.as_ref()));
                message.set(Some(("Profilin güncellendi.".to_string(), true)));
            }
            Err(e) => message.set(Some((e.user_message(), false))),
        }
    };

    let (notice, success) = match message.read().clone() {
        Some((text, ok)) => (Some(text), ok),
        None => (None, false),
    };

    let history_view = match &*history.read() {
        None => rsx! { p { class: "hint", "Yükleniyor..." } },
        Some(exams) if exams.is_empty() => rsx! { p { class: "hint", "Henüz sınav yok." } },
        Some(exams) => rsx! {
            ul {
                class: "exam-history",
                for exam in exams.iter() {
                    li {
                        key: "{exam.id}",
                        span { "{exam.date} · {exam.age_group}" }
                        span { "{exam.correct}/{exam.total}" }
                        span { "+{exam.score}" }
                    }
                }
            }
        },
    };

    rsx! {
        section {
            class: "screen profile",
            h1 { class: "title", "{avatar_emoji(identity.avatar.as_str())} {identity.username}" }

            div {
                class: "card",
                h2 { "Öğrenci numaran" }
                p { class: "student-number", "{identity.student_number}" }
                p { class: "hint", "Bu numarayla başka bir cihazdan da devam edebilirsin." }
            }

            div {
                class: "card stats",
                div { class: "stat", span { class: "stat-value", "{progress.score}" } span { class: "stat-label", "Puan" } }
                div { class: "stat", span { class: "stat-value", "{tier.label()}" } span { class: "stat-label", "Rütbe" } }
                div { class: "stat", span { class: "stat-value", "%{progress.percent}" } span { class: "stat-label", "İlerleme" } }
                div { class: "stat", span { class: "stat-value", "{completed}" } span { class: "stat-label", "Etkinlik" } }
            }

            div {
                class: "card",
                h2 { "Bilgilerini düzenle" }
                input {
                    class: "input",
                    r#type: "text",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                AvatarPicker {
                    selected: avatar.read().clone(),
                    on_select: move |id: String| avatar.set(id),
                }
                button { class: "btn btn-primary", onclick: on_save, "Kaydet" }
                Notice { message: notice, success }
            }

            div {
                class: "card",
                h2 { "Sınav geçmişi" }
                {history_view}
            }

            div {
                class: "card danger",
                if *confirm_reset.read() {
                    p { "Yeni bir profil oluşturulacak. Emin misin?" }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| state.navigate(|s| s.reset_profile()),
                        "Evet, yeni profil"
                    }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| confirm_reset.set(false),
                        "Vazgeç"
                    }
                } else {
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| confirm_reset.set(true),
                        "Profili sıfırla"
                    }
                }
            }
        }
    }
}

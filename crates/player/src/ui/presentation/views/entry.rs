//! Entry and avatar-creation screens

use dioxus::prelude::*;

use mucit_domain::{Progress, STUDENT_NUMBER_LEN};

use crate::shell::session_store;
use crate::ui::presentation::components::{avatar_emoji, AvatarPicker, Notice, AVATARS};
use crate::ui::presentation::services::use_profile_service;
use crate::ui::presentation::state::use_shell_state;
use crate::ui::use_platform;

#[component]
pub fn EntryView() -> Element {
    let mut state = use_shell_state();
    let platform = use_platform();
    let profile_service = use_profile_service();

    let mut student_number = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut busy = use_signal(|| false);

    // After a logout the identity is still on the device.
    let returning = session_store::load_identity(platform.as_ref()).map(|identity| {
        let label = format!(
            "{} {} olarak devam et",
            avatar_emoji(identity.avatar.as_str()),
            identity.username
        );
        (identity, label)
    });

    let resume_platform = platform.clone();
    let on_continue = move |_| {
        if *busy.read() {
            return;
        }
        let svc = profile_service.clone();
        let platform = platform.clone();
        let raw = student_number.read().clone();
        spawn(async move {
            busy.set(true);
            error.set(None);
            match svc.sign_in_with_student_number(&raw).await {
                Ok(identity) => {
                    state.set_progress(session_store::load_progress(platform.as_ref()));
                    state.navigate(|s| s.sign_in(identity, platform.as_ref()));
                }
                Err(e) => {
                    tracing::info!(error = %e, "Student number sign-in failed");
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section {
            class: "screen entry",
            h1 { class: "title", "Mucit Evreni" }
            p { class: "subtitle", "Gezegenleri keşfet, görevleri tamamla, mucit ol!" }

            if let Some((identity, label)) = returning {
                button {
                    class: "btn btn-primary btn-large",
                    onclick: move |_| {
                        let identity = identity.clone();
                        state.set_progress(session_store::load_progress(resume_platform.as_ref()));
                        state.navigate(|s| s.sign_in(identity, resume_platform.as_ref()));
                    },
                    "{label}"
                }
            }

            button {
                class: "btn btn-primary btn-large",
                onclick: move |_| state.navigate(|s| s.start_new_profile()),
                "Yeni Mucit Ol"
            }

            div {
                class: "card",
                h2 { "Öğrenci numaran var mı?" }
                input {
                    class: "input input-number",
                    r#type: "text",
                    inputmode: "numeric",
                    maxlength: "{STUDENT_NUMBER_LEN + 3}",
                    placeholder: "16 haneli öğrenci numarası",
                    value: "{student_number}",
                    oninput: move |e| student_number.set(e.value()),
                }
                button {
                    class: "btn btn-secondary",
                    disabled: *busy.read(),
                    onclick: on_continue,
                    if *busy.read() { "Aranıyor..." } else { "Devam Et" }
                }
                Notice { message: error.read().clone() }
            }

            footer {
                class: "entry-links",
                button {
                    class: "link",
                    onclick: move |_| state.navigate(|s| s.open_parent_teacher()),
                    "Veli / Öğretmen"
                }
                button {
                    class: "link",
                    onclick: move |_| state.navigate(|s| s.open_privacy()),
                    "Gizlilik Politikası"
                }
            }
        }
    }
}

#[component]
pub fn AvatarView() -> Element {
    let mut state = use_shell_state();
    let platform = use_platform();
    let profile_service = use_profile_service();

    let mut username = use_signal(String::new);
    let mut avatar = use_signal(|| AVATARS[0].0.to_string());
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let on_create = move |_| {
        let name = username.read().clone();
        let avatar_id = avatar.read().clone();
        match profile_service.create_profile(&name, &avatar_id) {
            Ok(identity) => {
                error.set(None);
                state.set_progress(Progress::default());
                state.navigate(|s| s.sign_in(identity, platform.as_ref()));
            }
            Err(e) => error.set(Some(e.user_message())),
        }
    };

    rsx! {
        section {
            class: "screen avatar",
            h1 { class: "title", "Karakterini Oluştur" }
            div {
                class: "card",
                label { class: "label", "Adın" }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Mucit adın",
                    value: "{username}",
                    oninput: move |e| username.set(e.value()),
                }
                label { class: "label", "Avatarını seç" }
                AvatarPicker {
                    selected: avatar.read().clone(),
                    on_select: move |id: String| avatar.set(id),
                }
                button {
                    class: "btn btn-primary btn-large",
                    onclick: on_create,
                    "Maceraya Başla 🚀"
                }
                Notice { message: error.read().clone() }
            }
            button {
                class: "link",
                onclick: move |_| state.navigate(|s| s.logout()),
                "Geri"
            }
        }
    }
}

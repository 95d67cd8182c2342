//! Admin login and sound library dashboard
//!
//! Audio is uploaded as a `data:audio/...` URL pasted into the form.

use dioxus::prelude::*;

use mucit_domain::{AudioFile, SoundAsset};

use crate::ui::presentation::components::Notice;
use crate::ui::presentation::services::{use_admin_service, use_sound_library_service};
use crate::ui::presentation::state::use_shell_state;

#[component]
pub fn AdminLoginView() -> Element {
    let mut state = use_shell_state();
    let admin_service = use_admin_service();

    let mut passcode = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let on_login = move |_| {
        let code = passcode.read().clone();
        if admin_service.login(&code) {
            passcode.set(String::new());
            error.set(None);
            state.navigate(|s| s.admin_logged_in());
        } else {
            error.set(Some("Şifre hatalı.".to_string()));
        }
    };

    rsx! {
        section {
            class: "screen admin",
            h1 { class: "title", "Yönetici Girişi" }
            div {
                class: "card",
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Yönetici şifresi",
                    value: "{passcode}",
                    oninput: move |e| passcode.set(e.value()),
                }
                button { class: "btn btn-primary", onclick: on_login, "Giriş" }
                Notice { message: error.read().clone() }
            }
            button {
                class: "btn btn-ghost",
                onclick: move |_| state.navigate(|s| s.leave_admin()),
                "← Uygulamaya dön"
            }
        }
    }
}

#[component]
pub fn AdminDashboardView() -> Element {
    let mut state = use_shell_state();
    let admin_service = use_admin_service();

    let on_logout = move |_| {
        admin_service.logout();
        state.navigate(|s| s.admin_logged_out());
    };

    rsx! {
        section {
            class: "screen admin",
            header {
                class: "admin-header",
                h1 { class: "title", "Yönetim Paneli" }
                button { class: "btn btn-ghost", onclick: on_logout, "Çıkış" }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| state.navigate(|s| s.leave_admin()),
                    "← Uygulamaya dön"
                }
            }
            SoundPanel {}
            AudioFilePanel {}
        }
    }
}

#[component]
fn SoundPanel() -> Element {
    let sounds_service = use_sound_library_service();

    let mut label = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut data_url = use_signal(String::new);
    let mut notice: Signal<Option<(String, bool)>> = use_signal(|| None);
    let mut reload = use_signal(|| 0u32);

    let list_service = sounds_service.clone();
    let sounds = use_resource(move || {
        let _ = reload();
        let svc = list_service.clone();
        async move { svc.list_sounds().await }
    });

    let upload_service = sounds_service.clone();
    let on_upload = move |_| {
        let svc = upload_service.clone();
        let (l, c, d) = (
            label.read().clone(),
            category.read().clone(),
            data_url.read().clone(),
        );
        spawn(async move {
            match svc.upload_sound(&l, &c, &d).await {
                Ok(sound) => {
                    notice.set(Some((format!("\"{}\" yüklendi.", sound.label), true)));
                    label.set(String::new());
                    data_url.set(String::new());
                    reload += 1;
                }
                Err(e) => notice.set(Some((e.user_message(), false))),
            }
        });
    };

    let delete_service = sounds_service.clone();
    let on_delete = use_callback(move |sound: SoundAsset| {
        let svc = delete_service.clone();
        spawn(async move {
            match svc.delete_sound(&sound.id).await {
                Ok(()) => reload += 1,
                Err(e) => notice.set(Some((e.user_message(), false))),
            }
        });
    });

    let (message, success) = match notice.read().clone() {
        Some((text, ok)) => (Some(text), ok),
        None => (None, false),
    };

    let list = match &*sounds.read() {
        None => rsx! { p { class: "hint", "Yükleniyor..." } },
        Some(Err(e)) => rsx! { Notice { message: Some(e.user_message()) } },
        Some(Ok(list)) => rsx! {
            ul {
                class: "asset-list",
                for sound in list.iter().cloned() {
                    li {
                        key: "{sound.id}",
                        span { class: "asset-category", "{sound.category}" }
                        span { class: "asset-label", "{sound.label}" }
                        audio { controls: true, src: "{sound.data_url}" }
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| on_delete.call(sound.clone()),
                            "Sil"
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "card",
            h2 { "Seslendirmeler" }
            div {
                class: "upload-form",
                input {
                    class: "input",
                    placeholder: "Etiket",
                    value: "{label}",
                    oninput: move |e| label.set(e.value()),
                }
                input {
                    class: "input",
                    placeholder: "Kategori",
                    value: "{category}",
                    oninput: move |e| category.set(e.value()),
                }
                textarea {
                    class: "input textarea",
                    placeholder: "data:audio/mpeg;base64,...",
                    value: "{data_url}",
                    oninput: move |e| data_url.set(e.value()),
                }
                button { class: "btn btn-primary", onclick: on_upload, "Yükle" }
                Notice { message, success }
            }
            {list}
        }
    }
}

#[component]
fn AudioFilePanel() -> Element {
    let sounds_service = use_sound_library_service();

    let mut label = use_signal(String::new);
    let mut file_name = use_signal(String::new);
    let mut data_url = use_signal(String::new);
    let mut notice: Signal<Option<(String, bool)>> = use_signal(|| None);
    let mut reload = use_signal(|| 0u32);

    let list_service = sounds_service.clone();
    let files = use_resource(move || {
        let _ = reload();
        let svc = list_service.clone();
        async move { svc.list_audio_files().await }
    });

    let upload_service = sounds_service.clone();
    let on_upload = move |_| {
        let svc = upload_service.clone();
        let (l, f, d) = (
            label.read().clone(),
            file_name.read().clone(),
            data_url.read().clone(),
        );
        spawn(async move {
            match svc.upload_audio_file(&l, &f, &d).await {
                Ok(file) => {
                    notice.set(Some((format!("\"{}\" yüklendi.", file.file_name), true)));
                    label.set(String::new());
                    file_name.set(String::new());
                    data_url.set(String::new());
                    reload += 1;
                }
                Err(e) => notice.set(Some((e.user_message(), false))),
            }
        });
    };

    let delete_service = sounds_service.clone();
    let on_delete = use_callback(move |file: AudioFile| {
        let svc = delete_service.clone();
        spawn(async move {
            match svc.delete_audio_file(&file.id).await {
                Ok(()) => reload += 1,
                Err(e) => notice.set(Some((e.user_message(), false))),
            }
        });
    });

    let (message, success) = match notice.read().clone() {
        Some((text, ok)) => (Some(text), ok),
        None => (None, false),
    };

    let list = match &*files.read() {
        None => rsx! { p { class: "hint", "Yükleniyor..." } },
        Some(Err(e)) => rsx! { Notice { message: Some(e.user_message()) } },
        Some(Ok(list)) => rsx! {
            ul {
                class: "asset-list",
                for file in list.iter().cloned() {
                    li {
                        key: "{file.id}",
                        span { class: "asset-label", "{file.label}" }
                        span { class: "asset-file", "{file.file_name}" }
                        audio { controls: true, src: "{file.data_url}" }
                        button {
                            class: "btn btn-danger",
                            onclick: move |_| on_delete.call(file.clone()),
                            "Sil"
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "card",
            h2 { "Ses dosyaları" }
            div {
                class: "upload-form",
                input {
                    class: "input",
                    placeholder: "Etiket",
                    value: "{label}",
                    oninput: move |e| label.set(e.value()),
                }
                input {
                    class: "input",
                    placeholder: "Dosya adı (ör. selam.mp3)",
                    value: "{file_name}",
                    oninput: move |e| file_name.set(e.value()),
                }
                textarea {
                    class: "input textarea",
                    placeholder: "data:audio/mpeg;base64,...",
                    value: "{data_url}",
                    oninput: move |e| data_url.set(e.value()),
                }
                button { class: "btn btn-primary", onclick: on_upload, "Yükle" }
                Notice { message, success }
            }
            {list}
        }
    }
}

//! Planning screen: today's checklist and free-form notes

use dioxus::prelude::*;

use mucit_domain::{DailyPlan, Note};

use crate::ui::presentation::components::Notice;
use crate::ui::presentation::services::{use_note_service, use_plan_service};
use crate::ui::presentation::state::use_shell_state;

#[component]
pub fn PlanningView() -> Element {
    let state = use_shell_state();
    let plan_service = use_plan_service();
    let note_service = use_note_service();

    let identity = state.identity();
    let student = identity.map(|i| i.student_number);

    // Cached copies render at once; the remote copies are merged in behind.
    let mut plan: Signal<Option<DailyPlan>> =
        use_signal(|| student.as_ref().map(|s| plan_service.today(s)));
    let mut notes: Signal<Vec<Note>> = use_signal(|| {
        student
            .as_ref()
            .map(|s| note_service.list(s))
            .unwrap_or_default()
    });
    let mut error: Signal<Option<String>> = use_signal(|| None);

    let mut new_item = use_signal(String::new);
    let mut note_title = use_signal(String::new);
    let mut note_body = use_signal(String::new);
    // Note being edited, if any
    let mut editing: Signal<Option<Note>> = use_signal(|| None);

    let load_student = student.clone();
    let load_plans = plan_service.clone();
    let load_notes = note_service.clone();
    use_hook(move || {
        if let Some(student) = load_student {
            let plan_student = student.clone();
            spawn(async move {
                load_plans.refresh(&plan_student).await;
                plan.set(Some(load_plans.today(&plan_student)));
            });
            spawn(async move {
                notes.set(load_notes.refresh(&student).await);
            });
        }
    });

    // Plan item edits all follow the same shape: apply, then show the result.
    let svc = plan_service.clone();
    let add_item = move |_| {
        let Some(current) = plan.read().clone() else {
            return;
        };
        let text = new_item.read().clone();
        match svc.add_item(&current, &text) {
            Ok(updated) => {
                plan.set(Some(updated));
                new_item.set(String::new());
                error.set(None);
            }
            Err(e) => error.set(Some(e.user_message())),
        }
    };

    let svc = plan_service.clone();
    let toggle_item = use_callback(move |index: usize| {
        let Some(current) = plan.read().clone() else {
            return;
        };
        match svc.toggle_item(&current, index) {
            Ok(updated) => plan.set(Some(updated)),
            Err(e) => error.set(Some(e.user_message())),
        }
    });

    let svc = plan_service.clone();
    let remove_item = use_callback(move |index: usize| {
        let Some(current) = plan.read().clone() else {
            return;
        };
        match svc.remove_item(&current, index) {
            Ok(updated) => plan.set(Some(updated)),
            Err(e) => error.set(Some(e.user_message())),
        }
    });

    let svc = note_service.clone();
    let save_student = student.clone();
    let save_note = move |_| {
        let Some(student) = save_student.clone() else {
            return;
        };
        let title = note_title.read().clone();
        let body = note_body.read().clone();
        let target = editing.read().clone();
        let saved = match &target {
            Some(note) => svc.update(note, &title, &body),
            None => svc.add(&student, &title, &body),
        };
        match saved {
            Ok(_) => {
                note_title.set(String::new());
                note_body.set(String::new());
                editing.set(None);
                error.set(None);
                notes.set(svc.list(&student));
            }
            Err(e) => error.set(Some(e.user_message())),
        }
    };

    let start_edit = use_callback(move |note: Note| {
        note_title.set(note.title.clone());
        note_body.set(note.body.clone());
        editing.set(Some(note));
    });

    let svc = note_service.clone();
    let delete_student = student.clone();
    let delete_note = use_callback(move |note: Note| {
        let Some(student) = delete_student.clone() else {
            return;
        };
        svc.delete(&student, &note.id);
        notes.write().retain(|n| n.id != note.id);
    });

    let current_plan = plan.read().clone();
    let note_list = notes.read().clone();
    let is_editing = editing.read().is_some();

    rsx! {
        section {
            class: "screen planning",
            h1 { class: "title", "Planlama" }
            Notice { message: error.read().clone() }

            div {
                class: "card",
                h2 { "Bugünün planı" }
                if let Some(current) = current_plan {
                    p { class: "hint", "{current.date} · %{current.completion_percent()} tamamlandı" }
                    ul {
                        class: "plan-items",
                        for (index, item) in current.items.iter().enumerate() {
                            li {
                                key: "{index}-{item.text}",
                                class: if item.done { "plan-item done" } else { "plan-item" },
                                input {
                                    r#type: "checkbox",
                                    checked: item.done,
                                    onchange: move |_| toggle_item.call(index),
                                }
                                span { "{item.text}" }
                                button {
                                    class: "btn-icon",
                                    onclick: move |_| remove_item.call(index),
                                    "✕"
                                }
                            }
                        }
                    }
                    div {
                        class: "inline-form",
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "Yeni görev",
                            value: "{new_item}",
                            oninput: move |e| new_item.set(e.value()),
                        }
                        button { class: "btn btn-primary", onclick: add_item, "Ekle" }
                    }
                } else {
                    p { class: "hint", "Yükleniyor..." }
                }
            }

            div {
                class: "card",
                h2 { if is_editing { "Notu düzenle" } else { "Yeni not" } }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Başlık",
                    value: "{note_title}",
                    oninput: move |e| note_title.set(e.value()),
                }
                textarea {
                    class: "input textarea",
                    placeholder: "Notun",
                    value: "{note_body}",
                    oninput: move |e| note_body.set(e.value()),
                }
                button { class: "btn btn-primary", onclick: save_note, "Kaydet" }
                if is_editing {
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            editing.set(None);
                            note_title.set(String::new());
                            note_body.set(String::new());
                        },
                        "Vazgeç"
                    }
                }
            }

            ul {
                class: "note-list",
                for note in note_list {
                    li {
                        key: "{note.id}",
                        class: "card note",
                        h3 { "{note.title}" }
                        if !note.body.is_empty() {
                            p { "{note.body}" }
                        }
                        div {
                            class: "note-actions",
                            button {
                                class: "btn btn-ghost",
                                onclick: {
                                    let note = note.clone();
                                    move |_| start_edit.call(note.clone())
                                },
                                "Düzenle"
                            }
                            button {
                                class: "btn btn-danger",
                                onclick: {
                                    let note = note.clone();
                                    move |_| delete_note.call(note.clone())
                                },
                                "Sil"
                            }
                        }
                    }
                }
            }
        }
    }
}

//! Activity screen: one arithmetic round
//!
//! The round is generated once when the screen mounts. Answering the last
//! question folds the result into progress.

use dioxus::prelude::*;

use mucit_domain::{ActivityResult, Difficulty};

use crate::application::services::catalog::{find_activity, ROUND_LENGTH};
use crate::application::services::{Question, QuestionGenerator};
use crate::ui::presentation::services::use_progress_service;
use crate::ui::presentation::state::use_shell_state;
use crate::ui::use_platform;

#[derive(Clone, Copy, PartialEq)]
enum Feedback {
    Correct,
    Wrong(i32),
}

#[component]
pub fn ActivityView() -> Element {
    let mut state = use_shell_state();
    let platform = use_platform();
    let progress_service = use_progress_service();

    let shell = state.shell.read().clone();
    let descriptor = shell.activity.as_ref().and_then(|id| find_activity(id.as_str()));
    let difficulty = shell.difficulty.unwrap_or_default();

    let questions: Signal<Vec<Question>> = use_signal(move || match descriptor {
        Some(descriptor) => QuestionGenerator::new(platform.as_ref()).round(&descriptor, difficulty),
        None => Vec::new(),
    });
    let mut index = use_signal(|| 0usize);
    let mut correct = use_signal(|| 0u32);
    let mut feedback: Signal<Option<Feedback>> = use_signal(|| None);
    let mut earned: Signal<Option<u32>> = use_signal(|| None);

    let answer = use_callback(move |choice: i32| {
        let Some(question) = questions.read().get(*index.read()).cloned() else {
            return;
        };
        if question.is_correct(choice) {
            *correct.write() += 1;
            feedback.set(Some(Feedback::Correct));
        } else {
            feedback.set(Some(Feedback::Wrong(question.answer)));
        }
        *index.write() += 1;

        if *index.read() < questions.read().len() {
            return;
        }
        let (Some(identity), Some(descriptor)) = (state.identity(), descriptor) else {
            return;
        };
        let result = ActivityResult::scored(
            descriptor.activity_id(),
            *correct.read(),
            questions.read().len() as u32,
            difficulty,
        );
        let progress = progress_service.record_result(&identity, &result);
        earned.set(Some(result.points));
        state.set_progress(progress);
    });

    let Some(descriptor) = descriptor else {
        return rsx! {
            section {
                class: "screen",
                p { "Etkinlik bulunamadı." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| state.navigate(|s| s.finish_activity()),
                    "Sınıflara dön"
                }
            }
        };
    };

    let total = questions.read().len();
    let position = (*index.read() + 1).min(total);
    let current = questions.read().get(*index.read()).cloned();
    let finished = *index.read() >= total;
    let last_feedback = *feedback.read();

    rsx! {
        section {
            class: "screen activity",
            h1 { class: "title", "{descriptor.title}" }
            p { class: "subtitle", "{difficulty.label()} · {ROUND_LENGTH} soru" }

            if let Some(Feedback::Correct) = last_feedback {
                p { class: "feedback feedback-correct", "Harika! 🎉" }
            }
            if let Some(Feedback::Wrong(expected)) = last_feedback {
                p { class: "feedback feedback-wrong", "Doğru cevap {expected} olacaktı." }
            }

            if let Some(question) = current {
                div {
                    class: "question-card",
                    p { class: "question-progress", "{position} / {total}" }
                    p { class: "question-prompt", "{question.prompt()}" }
                    div {
                        class: "choice-grid",
                        for choice in question.choices.clone() {
                            button {
                                key: "{choice}",
                                class: "choice",
                                onclick: move |_| answer.call(choice),
                                "{choice}"
                            }
                        }
                    }
                }
            }

            if finished {
                div {
                    class: "result-card",
                    h2 { "Tur bitti!" }
                    p { "{correct} / {total} doğru" }
                    if let Some(points) = *earned.read() {
                        p { class: "result-points", "+{points} puan ⭐" }
                    }
                    if difficulty != Difficulty::Hard {
                        p { class: "hint", "Daha çok puan için zorluğu artırmayı dene!" }
                    }
                }
            }

            button {
                class: "btn btn-ghost",
                onclick: move |_| state.navigate(|s| s.finish_activity()),
                if finished { "Sınıflara dön" } else { "Vazgeç" }
            }
        }
    }
}

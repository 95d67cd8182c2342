//! Daily exam screen

use dioxus::prelude::*;

use mucit_domain::{ExamResult, DAILY_EXAM_QUESTIONS};

use crate::application::services::Question;
use crate::ui::presentation::components::Notice;
use crate::ui::presentation::services::{use_exam_service, use_progress_service};
use crate::ui::presentation::state::use_shell_state;

#[component]
pub fn DailyExamView() -> Element {
    let mut state = use_shell_state();
    let exam_service = use_exam_service();
    let progress_service = use_progress_service();

    let shell = state.shell.read().clone();
    let already_taken = match (&shell.identity, shell.age_group) {
        (Some(identity), Some(age_group)) => exam_service.taken_today(identity, age_group),
        _ => true,
    };

    let generator = exam_service.clone();
    let questions: Signal<Vec<Question>> = use_signal(move || match shell.age_group {
        Some(age_group) => generator.generate(age_group),
        None => Vec::new(),
    });
    let mut index = use_signal(|| 0usize);
    let mut correct = use_signal(|| 0u32);
    let mut outcome: Signal<Option<ExamResult>> = use_signal(|| None);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    // Snapshot at mount so the result screen survives the day being marked.
    let blocked = use_hook(|| already_taken);

    let answer = use_callback(move |choice: i32| {
        let Some(question) = questions.read().get(*index.read()).cloned() else {
            return;
        };
        if question.is_correct(choice) {
            *correct.write() += 1;
        }
        *index.write() += 1;
        if *index.read() < questions.read().len() {
            return;
        }

        let snapshot = state.shell.read().clone();
        let (Some(identity), Some(age_group)) = (snapshot.identity, snapshot.age_group) else {
            return;
        };
        let total = questions.read().len() as u32;
        let right = *correct.read();
        match exam_service.submit(&identity, age_group, right, total) {
            Ok(result) => {
                state.set_progress(progress_service.cached());
                outcome.set(Some(result));
            }
            Err(e) => error.set(Some(e.user_message())),
        }
    });

    if blocked {
        return rsx! {
            section {
                class: "screen exam",
                h1 { class: "title", "Günlük Sınav" }
                p { "Bugünün sınavını tamamladın. Yarın yeni sorular seni bekliyor!" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| state.navigate(|s| s.close_daily_exam()),
                    "Sınıflara dön"
                }
            }
        };
    }

    let total = questions.read().len();
    let position = (*index.read() + 1).min(total);
    let current = questions.read().get(*index.read()).cloned();
    let result = outcome.read().clone();

    rsx! {
        section {
            class: "screen exam",
            h1 { class: "title", "Günlük Sınav" }
            p { class: "subtitle", "{DAILY_EXAM_QUESTIONS} soru · her doğru 20 puan" }

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

            if let Some(result) = result {
                div {
                    class: "result-card",
                    h2 { "Sınav bitti!" }
                    p { "{result.correct} / {result.total} doğru (%{result.percent()})" }
                    p { class: "result-points", "+{result.score} puan ⭐" }
                }
            }
            Notice { message: error.read().clone() }

            button {
                class: "btn btn-ghost",
                onclick: move |_| state.navigate(|s| s.close_daily_exam()),
                "Sınıflara dön"
            }
        }
    }
}

use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::AnswerOutcome;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{SessionPhase, SessionVm};

/// Everything the session page can show, precomputed so the markup below
/// stays a plain rendering of it.
#[derive(Clone, Debug, PartialEq)]
enum Screen {
    Failed {
        message: String,
    },
    Question {
        prompt: String,
        hint: String,
    },
    Feedback {
        message: String,
        did_you_mean: Option<String>,
        correct_line: String,
        points_line: String,
    },
    Complete {
        correct_line: String,
        points_line: String,
    },
}

#[component]
pub fn SessionView(count: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let quiz_loop = ctx.quiz_loop();

    let start = {
        let quiz_loop = Arc::clone(&quiz_loop);
        move || SessionVm::start(&quiz_loop, count).map_err(|err| err.to_string())
    };

    let mut vm = use_signal(start.clone());
    let mut entry = use_signal(String::new);

    let on_submit = {
        let quiz_loop = Arc::clone(&quiz_loop);
        move |evt: FormEvent| {
            evt.prevent_default();
            let answer = entry();
            if let Ok(session_vm) = vm.write().as_mut() {
                let _ = session_vm.submit(&quiz_loop, &answer);
            }
            entry.set(String::new());
        }
    };

    let on_next = move |_: MouseEvent| {
        if let Ok(session_vm) = vm.write().as_mut() {
            session_vm.advance();
        }
    };

    let on_restart = {
        let start = start.clone();
        move |_: MouseEvent| {
            vm.set(start());
            entry.set(String::new());
        }
    };

    let screen = {
        let vm_guard = vm.read();
        match &*vm_guard {
            Err(message) => Screen::Failed {
                message: message.clone(),
            },
            Ok(session_vm) => {
                let progress = session_vm.progress();
                match session_vm.phase() {
                    SessionPhase::Answering => {
                        let (prompt, hint) = session_vm.prompt().unwrap_or_default();
                        Screen::Question { prompt, hint }
                    }
                    SessionPhase::Feedback { submitted, outcome } => {
                        let (message, did_you_mean) = match outcome {
                            AnswerOutcome::Correct { .. } => ("Correct!".to_string(), None),
                            AnswerOutcome::Incorrect {
                                correct_capital,
                                actual_state_of_answer,
                            } => (
                                format!("Incorrect. The answer is {correct_capital}."),
                                actual_state_of_answer.as_ref().map(|state| {
                                    format!("{submitted} is actually the capital of {state}.")
                                }),
                            ),
                        };
                        Screen::Feedback {
                            message,
                            did_you_mean,
                            correct_line: format!(
                                "Number Correct: {}/{}",
                                progress.number_correct, progress.total
                            ),
                            points_line: format!(
                                "Points Earned: {}/{}",
                                progress.points_earned, progress.maximum_points
                            ),
                        }
                    }
                    SessionPhase::Complete => session_vm.report().map_or(
                        // Unreachable under the phase protocol.
                        Screen::Failed {
                            message: "The quiz is not finished yet.".to_string(),
                        },
                        |report| Screen::Complete {
                            correct_line: format!(
                                "Total Number Correct: {}/{}",
                                report.number_correct(),
                                report.total_questions()
                            ),
                            points_line: format!(
                                "Total Points Earned: {}/{}",
                                report.points_earned(),
                                report.maximum_points()
                            ),
                        },
                    ),
                }
            }
        }
    };

    rsx! {
        div { class: "page session-page",
            header { class: "session-header",
                h2 { "US State Capitals Quiz" }
                button {
                    class: "session-quit",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = navigator.push(Route::Home {});
                    },
                    "Quit"
                }
            }

            match screen {
                Screen::Failed { message } => rsx! {
                    p { class: "session-error", "{message}" }
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Home {});
                        },
                        "Back"
                    }
                },
                Screen::Question { prompt, hint } => rsx! {
                    div { class: "session-question",
                        p { class: "question-text", "{prompt}" }
                        p { class: "question-hint", "{hint}" }
                    }
                    form { class: "answer-form", onsubmit: on_submit,
                        input {
                            id: "session-answer",
                            r#type: "text",
                            value: "{entry}",
                            oninput: move |evt| entry.set(evt.value()),
                        }
                        button { class: "btn", r#type: "submit", "Check Answer" }
                    }
                },
                Screen::Feedback { message, did_you_mean, correct_line, points_line } => rsx! {
                    div { class: "session-feedback",
                        p { class: "feedback-message", "{message}" }
                        if let Some(hint) = did_you_mean {
                            p { class: "feedback-did-you-mean", "{hint}" }
                        }
                        p { "{correct_line}" }
                        p { "{points_line}" }
                        button { class: "btn", r#type: "button", onclick: on_next, "Next Question" }
                    }
                },
                Screen::Complete { correct_line, points_line } => rsx! {
                    div { class: "session-complete",
                        h3 { "Thank you! You have completed the US State Capitals Quiz!" }
                        p { "{correct_line}" }
                        p { "{points_line}" }
                        div { class: "session-complete-actions",
                            button { class: "btn", r#type: "button", onclick: on_restart, "Practice Again" }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    let _ = navigator.push(Route::Home {});
                                },
                                "Back to Start"
                            }
                        }
                    }
                },
            }
        }
    }
}

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{CountError, parse_question_count};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let max_questions = ctx.max_questions();

    let mut entry = use_signal(String::new);
    let mut error = use_signal(|| None::<CountError>);

    let origin_line = if ctx.ranks_are_fallback() {
        "Population ranks: built-in table (live fetch unavailable)."
    } else {
        "Population ranks: live from Wikipedia."
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match parse_question_count(&entry(), max_questions) {
            Ok(count) => {
                let _ = navigator.push(Route::Session { count });
            }
            Err(err) => error.set(Some(err)),
        }
    };

    rsx! {
        div { class: "page home-page",
            h2 { "US State Capitals Quiz" }
            p { class: "data-origin", "{origin_line}" }

            form { class: "count-form", onsubmit: on_submit,
                label { r#for: "question-count",
                    "How many questions would you like to be asked about US State Capitals?"
                }
                p { class: "count-instructions", "Enter a number 1-50 (inclusive):" }
                input {
                    id: "question-count",
                    r#type: "text",
                    value: "{entry}",
                    oninput: move |evt| {
                        entry.set(evt.value());
                        error.set(None);
                    },
                }
                button { class: "btn", r#type: "submit", "Start Quiz" }
                if let Some(err) = error() {
                    p { class: "count-error", "{err.message()}" }
                }
            }
        }
    }
}

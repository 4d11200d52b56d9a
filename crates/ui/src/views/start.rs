use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn StartView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let count = ctx.question_count();
    let order_label = if ctx.settings().option_order().is_shuffled() {
        "Answer options are shuffled for every question."
    } else {
        "Answer options keep their original order."
    };

    rsx! {
        div { class: "page start-page",
            h2 { "General Knowledge Quiz" }
            p { "{count} questions, one answer each. Pick carefully: answers are final." }
            p { class: "muted", "{order_label}" }
            ul { class: "key-hints",
                li { "Arrow keys or j / k move between options" }
                li { "Enter or Space chooses the highlighted option" }
                li { "Number keys choose an option directly" }
                li { "Enter moves on once the answer is shown" }
            }
            button {
                class: "btn btn-primary",
                id: "start-quiz",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Quiz {});
                },
                "Start quiz"
            }
        }
    }
}

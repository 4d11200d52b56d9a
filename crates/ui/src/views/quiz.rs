use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ResultsPanel, ViewError};
use crate::vm::{KeyInput, QuestionVm, QuizIntent, QuizScreen, QuizVm, start_quiz};

fn key_input(key: &Key) -> KeyInput {
    match key {
        Key::ArrowUp => KeyInput::Up,
        Key::ArrowDown => KeyInput::Down,
        Key::Enter => KeyInput::Enter,
        Key::Character(value) => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(' '), None) => KeyInput::Space,
                (Some(c), None) => match c.to_digit(10).and_then(|d| u8::try_from(d).ok()) {
                    Some(digit) => KeyInput::Digit(digit),
                    None => KeyInput::Char(c.to_ascii_lowercase()),
                },
                _ => KeyInput::Other,
            }
        }
        _ => KeyInput::Other,
    }
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let vm = use_signal(move || start_quiz(ctx.new_session()));
    let error = use_signal(|| None::<ViewError>);

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut vm = vm;
        let mut error = error;
        let result = match vm.write().as_mut() {
            Ok(quiz) => quiz.dispatch(intent),
            Err(err) => Err(*err),
        };
        error.set(result.err());
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let modifiers = evt.data.modifiers();
        if modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::META) {
            return;
        }
        let key = key_input(&evt.data.key());
        let intent = vm
            .read()
            .as_ref()
            .ok()
            .and_then(|quiz| quiz.intent_for_key(key));
        if let Some(intent) = intent {
            evt.prevent_default();
            dispatch.call(intent);
        }
    });

    // Keep keyboard focus on the quiz root so key presses reach `on_key`.
    use_effect(move || {
        // Reading the phase subscribes this effect to every transition.
        let _phase = vm.read().as_ref().ok().map(QuizVm::phase);
        let _ = eval("document.getElementById(\"quiz-root\")?.focus();");
    });

    let guard = vm.read();
    let (screen, announcement) = match guard.as_ref() {
        Ok(quiz) => (quiz.screen(), quiz.announcement().to_string()),
        Err(_) => (None, String::new()),
    };
    drop(guard);
    let error_message = error().map(ViewError::message);

    rsx! {
        div { class: "page quiz-page", id: "quiz-root", tabindex: "0", onkeydown: on_key,
            match screen {
                Some(QuizScreen::Question(question)) => rsx! {
                    QuestionPanel { question, on_intent: dispatch }
                },
                Some(QuizScreen::Results(results)) => rsx! {
                    ResultsPanel {
                        results,
                        on_restart: move |()| dispatch.call(QuizIntent::Restart),
                    }
                    button {
                        class: "btn btn-secondary",
                        id: "quiz-home",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Start {});
                        },
                        "Back to start"
                    }
                },
                None => rsx! {
                    p { class: "error", "{ViewError::Unknown.message()}" }
                },
            }
            if let Some(message) = error_message {
                p { class: "error", role: "alert", "{message}" }
            }
            p { class: "sr-only", aria_live: "polite", "{announcement}" }
        }
    }
}

#[component]
fn QuestionPanel(question: QuestionVm, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        section { class: "question", aria_labelledby: "question-prompt",
            header { class: "question__header",
                span { class: "question__counter", "Question {question.number} of {question.total}" }
                span { class: "question__score", "Score: {question.score}" }
            }
            div { class: "progress", role: "progressbar", aria_valuenow: "{question.progress_percent}",
                div { class: "progress__fill", style: "width: {question.progress_percent}%" }
            }
            h2 { class: "question__prompt", id: "question-prompt", "{question.prompt}" }
            div { class: "options", role: "listbox",
                for (index, option) in question.options.iter().enumerate() {
                    button {
                        key: "{index}",
                        class: "{option.state.class()}",
                        r#type: "button",
                        role: "option",
                        disabled: question.answered,
                        onclick: move |_| on_intent.call(QuizIntent::Select(index)),
                        span { class: "option__key", "{option.hotkey}." }
                        " {option.label}"
                    }
                }
            }
            if let Some(feedback) = question.feedback.as_ref() {
                p { class: "{feedback.class()}", "{feedback.message}" }
            }
            if question.answered {
                button {
                    class: "btn btn-primary",
                    id: "quiz-next",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "{question.next_label}"
                }
            }
        }
    }
}

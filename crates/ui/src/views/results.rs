use dioxus::prelude::*;

use crate::vm::ResultsVm;

#[component]
pub fn ResultsPanel(results: ResultsVm, on_restart: EventHandler<()>) -> Element {
    rsx! {
        section { class: "{results.tier_class}", aria_labelledby: "results-title",
            h2 { id: "results-title", "Quiz complete!" }
            p { class: "results__score", "{results.correct}/{results.total}" }
            ul { class: "results__stats",
                li { "Correct: {results.correct}" }
                li { "Incorrect: {results.incorrect}" }
                li { "Accuracy: {results.percentage}%" }
                li { "Time: {results.elapsed_label}" }
            }
            p { class: "results__message", "{results.message}" }
            if !results.rows.is_empty() {
                ol { class: "results__answers",
                    for row in results.rows.iter() {
                        li {
                            key: "{row.number}",
                            class: if row.is_correct { "answer answer--correct" } else { "answer answer--incorrect" },
                            span { class: "answer__prompt", "{row.prompt}" }
                            span { class: "answer__chosen", "Your answer: {row.chosen}" }
                            if !row.is_correct {
                                span { class: "answer__correct", "Correct answer: {row.correct}" }
                            }
                        }
                    }
                }
            }
            button {
                class: "btn btn-primary",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_restart.call(()),
                "Play again"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::prelude::*;

    use super::ResultsPanel;
    use crate::vm::{AnswerRowVm, ResultsVm};

    fn results() -> ResultsVm {
        ResultsVm {
            correct: 8,
            incorrect: 2,
            total: 10,
            percentage: 80,
            message: "Excellent! You have mastered the topic.",
            tier_class: "results results--excellent",
            elapsed_label: "1:35".to_string(),
            rows: vec![
                AnswerRowVm {
                    number: 1,
                    prompt: "What is 2 + 2?".to_string(),
                    chosen: "4".to_string(),
                    correct: "4".to_string(),
                    is_correct: true,
                },
                AnswerRowVm {
                    number: 2,
                    prompt: "What is the capital of France?".to_string(),
                    chosen: "Berlin".to_string(),
                    correct: "Paris".to_string(),
                    is_correct: false,
                },
            ],
        }
    }

    #[component]
    fn Harness(results: ResultsVm) -> Element {
        rsx! { ResultsPanel { results, on_restart: move |()| {} } }
    }

    #[test]
    fn results_panel_renders_score_and_feedback() {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { results: results() });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        for expected in [
            "8/10",
            "Correct: 8",
            "Incorrect: 2",
            "Accuracy: 80%",
            "Time: 1:35",
            "Excellent! You have mastered the topic.",
            "Correct answer: Paris",
            "Play again",
        ] {
            assert!(html.contains(expected), "missing {expected} in {html}");
        }
        assert!(!html.contains("Correct answer: 4"), "{html}");
    }
}

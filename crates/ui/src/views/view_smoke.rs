use quiz_core::model::OptionOrder;

use super::test_harness::{ViewKind, setup_view_harness};

#[test]
fn start_view_smoke_renders_intro() {
    let mut harness = setup_view_harness(ViewKind::Start, OptionOrder::Shuffled);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("10 questions"), "missing count in {html}");
    assert!(html.contains("shuffled"), "missing order note in {html}");
    assert!(html.contains("Start quiz"), "missing start button in {html}");
}

#[test]
fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz, OptionOrder::Fixed);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 10"), "missing counter in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("What is 2 + 2?"), "missing prompt in {html}");
    assert!(html.contains("option option--focused"), "missing focus in {html}");
    assert!(!html.contains("quiz-next"), "next shown before answering: {html}");
}

#[test]
fn quiz_view_smoke_keeps_every_option_when_shuffled() {
    let mut harness = setup_view_harness(ViewKind::Quiz, OptionOrder::Shuffled);
    harness.rebuild();
    let html = harness.render();
    for option in ["3", "4", "5", "6"] {
        assert!(html.contains(&format!(" {option}")), "missing {option} in {html}");
    }
}

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use quiz_core::catalog::builtin_bank;
use quiz_core::model::{OptionOrder, QuizSettings, ScoreTier};
use quiz_core::time::fixed_clock;
use services::{Advanced, FocusDirection, QuizEvent, QuizPhase, QuizSession};

#[test]
fn builtin_quiz_runs_to_results() {
    let bank = Arc::new(builtin_bank().unwrap());
    let mut session = QuizSession::new(Arc::clone(&bank), QuizSettings::default())
        .with_clock(fixed_clock())
        .with_seed(5);

    let finished = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&finished);
    let _sub = session.subscribe(move |event| {
        if let QuizEvent::QuizFinished(summary) = event {
            *sink.borrow_mut() = Some(summary.clone());
        }
    });

    let shown = session.start().unwrap();
    assert_eq!(shown.total, 10);

    // Questions 0-7 right, 8-9 wrong.
    for i in 0..10 {
        let question = session.current_question().unwrap();
        let correct = question.correct_index();
        let pick = if i < 8 {
            correct
        } else {
            (correct + 1) % question.option_count()
        };
        session.select_answer(pick).unwrap();
        session.select_answer(correct).unwrap();
        match session.advance().unwrap() {
            Advanced::Next(shown) => assert_eq!(shown.index, i + 1),
            Advanced::Finished(summary) => assert_eq!(i, 9, "finished early: {summary:?}"),
        }
    }

    let summary = finished.borrow().clone().expect("finish event delivered");
    assert_eq!(summary.correct(), 8);
    assert_eq!(summary.incorrect(), 2);
    assert_eq!(summary.percentage(), 80);
    assert_eq!(summary.tier(), ScoreTier::Excellent);
    assert_eq!(session.phase(), QuizPhase::Finished);
}

#[test]
fn keyboard_only_playthrough_with_fixed_order() {
    let bank = Arc::new(builtin_bank().unwrap());
    let mut session = QuizSession::new(bank, QuizSettings::new(OptionOrder::Fixed));
    session.start().unwrap();

    while !session.is_finished() {
        let target = session.current_question().unwrap().correct_index();
        while session.focused_option() != Some(target) {
            session.focus_next(FocusDirection::Next).unwrap();
        }
        let reveal = session.select_focused().unwrap().unwrap();
        assert!(reveal.is_correct);
        session.advance().unwrap();
    }

    let summary = session.summary().unwrap();
    assert_eq!(summary.correct(), 10);
    assert_eq!(summary.percentage(), 100);
}

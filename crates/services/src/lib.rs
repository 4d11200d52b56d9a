#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use quiz_core::Clock;

pub use error::SessionError;
pub use quiz::{
    Advanced, AnswerRecord, AnswerRevealed, FocusDirection, FocusMoved, QuestionShown,
    QuizEvent, QuizPhase, QuizProgress, QuizSession, Subscription,
};

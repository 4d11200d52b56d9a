mod events;
mod listeners;
mod progress;
mod session;
mod state;

// Public API of the quiz subsystem.
pub use crate::error::SessionError;
pub use events::{
    Advanced, AnswerRecord, AnswerRevealed, FocusDirection, FocusMoved, QuestionShown, QuizEvent,
};
pub use listeners::Subscription;
pub use progress::QuizProgress;
pub use session::QuizSession;
pub use state::QuizPhase;

use std::fmt;

use quiz_core::model::{Question, QuizSummary};

/// Tag of the quiz state machine, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizPhase {
    NotStarted,
    AwaitingAnswer,
    Answered,
    Finished,
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizPhase::NotStarted => "not started",
            QuizPhase::AwaitingAnswer => "awaiting an answer",
            QuizPhase::Answered => "answered",
            QuizPhase::Finished => "finished",
        };
        f.write_str(label)
    }
}

/// Full state of a playthrough.
///
/// `question` is the presented (possibly shuffled) copy of the bank entry,
/// so option indices in this state refer to on-screen positions.
#[derive(Debug, Clone, Default)]
pub(crate) enum QuizState {
    #[default]
    NotStarted,
    AwaitingAnswer {
        index: usize,
        question: Question,
        focused: usize,
    },
    Answered {
        index: usize,
        question: Question,
        chosen: usize,
    },
    Finished {
        summary: QuizSummary,
    },
}

impl QuizState {
    pub(crate) fn phase(&self) -> QuizPhase {
        match self {
            QuizState::NotStarted => QuizPhase::NotStarted,
            QuizState::AwaitingAnswer { .. } => QuizPhase::AwaitingAnswer,
            QuizState::Answered { .. } => QuizPhase::Answered,
            QuizState::Finished { .. } => QuizPhase::Finished,
        }
    }

    pub(crate) fn question(&self) -> Option<&Question> {
        match self {
            QuizState::AwaitingAnswer { question, .. } | QuizState::Answered { question, .. } => {
                Some(question)
            }
            QuizState::NotStarted | QuizState::Finished { .. } => None,
        }
    }

    /// Moves `AwaitingAnswer` to `Answered`; any other state is returned as is.
    pub(crate) fn answer(self, chosen: usize) -> Self {
        match self {
            QuizState::AwaitingAnswer {
                index, question, ..
            } => QuizState::Answered {
                index,
                question,
                chosen,
            },
            other => other,
        }
    }
}

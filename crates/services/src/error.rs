//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{BankError, SummaryError};

use crate::quiz::QuizPhase;

/// Errors emitted by `QuizSession`.
///
/// Every variant points at a driver bug: the view called an operation it
/// should not have offered the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot {operation} while the quiz is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: QuizPhase,
    },
    #[error("option {index} is out of range for a question with {count} options")]
    OptionOutOfRange { index: usize, count: usize },
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

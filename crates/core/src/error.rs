use thiserror::Error;

use crate::model::{BankError, QuestionError, SummaryError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
}

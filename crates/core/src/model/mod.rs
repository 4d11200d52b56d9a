mod bank;
mod question;
mod score;
mod settings;

pub use bank::{BankError, QuestionBank};
pub use question::{Question, QuestionError};
pub use score::{QuizSummary, ScoreTier, SummaryError, percentage};
pub use settings::{OptionOrder, QuizSettings};

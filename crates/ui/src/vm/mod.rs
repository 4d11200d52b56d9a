mod quiz_vm;
mod time_fmt;

pub use quiz_vm::{
    AnswerRowVm, FeedbackVm, KeyInput, OptionState, OptionVm, QuestionVm, QuizIntent, QuizScreen,
    QuizVm, ResultsVm, map_results, start_quiz,
};
pub use time_fmt::format_elapsed;

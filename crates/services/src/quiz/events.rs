use quiz_core::model::QuizSummary;

/// A question was put on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionShown {
    pub index: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<String>,
    /// Correct answers so far.
    pub score: u32,
}

/// The current question was graded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRevealed {
    pub chosen: usize,
    pub correct: usize,
    pub is_correct: bool,
    pub correct_text: String,
}

/// The keyboard highlight moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusMoved {
    pub index: usize,
}

/// Declarative render requests sent to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    QuestionShown(QuestionShown),
    AnswerRevealed(AnswerRevealed),
    FocusMoved(FocusMoved),
    QuizFinished(QuizSummary),
}

/// Outcome of advancing past an answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advanced {
    Next(QuestionShown),
    Finished(QuizSummary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Previous,
    Next,
}

/// One graded question, kept for the results screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub index: usize,
    pub prompt: String,
    pub chosen_text: String,
    pub correct_text: String,
    pub is_correct: bool,
}

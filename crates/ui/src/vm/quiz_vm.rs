use log::{error, trace};

use quiz_core::model::{QuizSummary, ScoreTier};
use services::{
    Advanced, AnswerRecord, FocusDirection, QuizEvent, QuizPhase, QuizSession, SessionError,
    Subscription,
};

use crate::views::ViewError;
use crate::vm::time_fmt::format_elapsed;

//
// ─── INPUT ─────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    SelectFocused,
    Next,
    Focus(FocusDirection),
    Restart,
}

/// Platform-neutral key press, mapped from the view's keyboard events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    Up,
    Down,
    Enter,
    Space,
    Digit(u8),
    Char(char),
    Other,
}

//
// ─── OUTPUT ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Focused,
    Correct,
    Incorrect,
    Disabled,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Idle => "option",
            OptionState::Focused => "option option--focused",
            OptionState::Correct => "option option--correct disabled",
            OptionState::Incorrect => "option option--incorrect disabled",
            OptionState::Disabled => "option disabled",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub label: String,
    /// 1-based digit shortcut.
    pub hotkey: usize,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub message: String,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.is_correct {
            "feedback feedback--correct"
        } else {
            "feedback feedback--incorrect"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    /// 1-based position.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub score: u32,
    pub progress_percent: u8,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
    pub answered: bool,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRowVm {
    pub number: usize,
    pub prompt: String,
    pub chosen: String,
    pub correct: String,
    pub is_correct: bool,
}

impl From<&AnswerRecord> for AnswerRowVm {
    fn from(record: &AnswerRecord) -> Self {
        Self {
            number: record.index + 1,
            prompt: record.prompt.clone(),
            chosen: record.chosen_text.clone(),
            correct: record.correct_text.clone(),
            is_correct: record.is_correct,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub correct: u32,
    pub incorrect: u32,
    pub total: u32,
    pub percentage: u8,
    pub message: &'static str,
    pub tier_class: &'static str,
    pub elapsed_label: String,
    pub rows: Vec<AnswerRowVm>,
}

#[must_use]
pub fn map_results(summary: &QuizSummary, history: &[AnswerRecord]) -> ResultsVm {
    let tier = summary.tier();
    let tier_class = match tier {
        ScoreTier::Excellent => "results results--excellent",
        ScoreTier::Good => "results results--good",
        ScoreTier::NeedsReview => "results results--review",
    };
    ResultsVm {
        correct: summary.correct(),
        incorrect: summary.incorrect(),
        total: summary.total(),
        percentage: summary.percentage(),
        message: tier.message(),
        tier_class,
        elapsed_label: format_elapsed(summary.elapsed().num_seconds()),
        rows: history.iter().map(AnswerRowVm::from).collect(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Question(QuestionVm),
    Results(ResultsVm),
}

//
// ─── VIEW MODEL ────────────────────────────────────────────────────────────────
//

/// Owns the quiz session for the quiz screen and turns its state into render data.
pub struct QuizVm {
    session: QuizSession,
    announcement: String,
    _trace: Subscription,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        let trace = session.subscribe(|event| trace!("quiz event: {event:?}"));
        Self {
            session,
            announcement: String::new(),
            _trace: trace,
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the session cannot start.
    pub fn start(&mut self) -> Result<(), ViewError> {
        let shown = self.session.start().map_err(view_error)?;
        self.announce(&QuizEvent::QuestionShown(shown));
        Ok(())
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    /// Text for the polite live region, describing the last change.
    #[must_use]
    pub fn announcement(&self) -> &str {
        &self.announcement
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when the session rejects the intent.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<(), ViewError> {
        let event = match intent {
            QuizIntent::Select(index) => self
                .session
                .select_answer(index)
                .map(|reveal| reveal.map(QuizEvent::AnswerRevealed)),
            QuizIntent::SelectFocused => self
                .session
                .select_focused()
                .map(|reveal| reveal.map(QuizEvent::AnswerRevealed)),
            QuizIntent::Next => self.session.advance().map(|advanced| {
                Some(match advanced {
                    Advanced::Next(shown) => QuizEvent::QuestionShown(shown),
                    Advanced::Finished(summary) => QuizEvent::QuizFinished(summary),
                })
            }),
            QuizIntent::Focus(direction) => self
                .session
                .focus_next(direction)
                .map(|moved| Some(QuizEvent::FocusMoved(moved))),
            QuizIntent::Restart => self
                .session
                .restart()
                .map(|shown| Some(QuizEvent::QuestionShown(shown))),
        }
        .map_err(view_error)?;

        if let Some(event) = event {
            self.announce(&event);
        }
        Ok(())
    }

    /// Maps a key press to the intent it stands for in the current phase.
    ///
    /// On the results screen only `r` is bound, so Enter still activates
    /// whichever results button has focus.
    #[must_use]
    pub fn intent_for_key(&self, key: KeyInput) -> Option<QuizIntent> {
        match self.session.phase() {
            QuizPhase::AwaitingAnswer => {
                let count = self.session.current_question()?.option_count();
                match key {
                    KeyInput::Up | KeyInput::Char('k') => {
                        Some(QuizIntent::Focus(FocusDirection::Previous))
                    }
                    KeyInput::Down | KeyInput::Char('j') => {
                        Some(QuizIntent::Focus(FocusDirection::Next))
                    }
                    KeyInput::Enter | KeyInput::Space => Some(QuizIntent::SelectFocused),
                    KeyInput::Digit(digit) => {
                        let index = usize::from(digit).checked_sub(1)?;
                        (index < count).then_some(QuizIntent::Select(index))
                    }
                    KeyInput::Char(_) | KeyInput::Other => None,
                }
            }
            QuizPhase::Answered => match key {
                KeyInput::Enter | KeyInput::Space | KeyInput::Char('n') => Some(QuizIntent::Next),
                _ => None,
            },
            QuizPhase::Finished => match key {
                KeyInput::Char('r') => Some(QuizIntent::Restart),
                _ => None,
            },
            QuizPhase::NotStarted => None,
        }
    }

    /// Render data for the current state, or `None` before the quiz starts.
    #[must_use]
    pub fn screen(&self) -> Option<QuizScreen> {
        if let Some(summary) = self.session.summary() {
            return Some(QuizScreen::Results(map_results(
                summary,
                self.session.history(),
            )));
        }
        let question = self.session.current_question()?;
        let progress = self.session.progress();
        let chosen = self.session.chosen_option();
        let focused = self.session.focused_option();

        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let state = match chosen {
                    Some(_) if question.is_correct(index) => OptionState::Correct,
                    Some(chosen) if chosen == index => OptionState::Incorrect,
                    Some(_) => OptionState::Disabled,
                    None if focused == Some(index) => OptionState::Focused,
                    None => OptionState::Idle,
                };
                OptionVm {
                    label: label.clone(),
                    hotkey: index + 1,
                    state,
                }
            })
            .collect();

        let feedback = chosen.map(|chosen| {
            if question.is_correct(chosen) {
                FeedbackVm {
                    is_correct: true,
                    message: "Correct! Excellent work.".to_string(),
                }
            } else {
                FeedbackVm {
                    is_correct: false,
                    message: format!(
                        "Incorrect. The correct answer is: {}",
                        question.correct_option()
                    ),
                }
            }
        });

        let is_last = progress.current + 1 >= progress.total;
        Some(QuizScreen::Question(QuestionVm {
            number: progress.current + 1,
            total: progress.total,
            prompt: question.prompt().to_string(),
            score: progress.correct,
            progress_percent: progress.completed_percent(),
            options,
            feedback,
            answered: chosen.is_some(),
            next_label: if is_last { "See results" } else { "Next question" },
        }))
    }

    fn announce(&mut self, event: &QuizEvent) {
        self.announcement = match event {
            QuizEvent::QuestionShown(shown) => {
                format!("Question {} of {}: {}", shown.index + 1, shown.total, shown.prompt)
            }
            QuizEvent::AnswerRevealed(reveal) if reveal.is_correct => "Correct!".to_string(),
            QuizEvent::AnswerRevealed(reveal) => {
                format!("Incorrect. The correct answer is {}", reveal.correct_text)
            }
            QuizEvent::FocusMoved(moved) => {
                let label = self
                    .session
                    .current_question()
                    .and_then(|question| question.option(moved.index))
                    .unwrap_or_default();
                format!("Option {}: {label}", moved.index + 1)
            }
            QuizEvent::QuizFinished(summary) => format!(
                "Quiz finished. {} of {} correct.",
                summary.correct(),
                summary.total()
            ),
        };
    }
}

/// Builds and starts the view model for a fresh session.
///
/// # Errors
///
/// Returns `ViewError::Unknown` if the session cannot start.
pub fn start_quiz(session: QuizSession) -> Result<QuizVm, ViewError> {
    let mut vm = QuizVm::new(session);
    vm.start()?;
    Ok(vm)
}

fn view_error(err: SessionError) -> ViewError {
    error!("quiz session rejected an action: {err}");
    ViewError::Unknown
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use quiz_core::Clock;
use quiz_core::model::{Question, QuestionBank, QuizSettings, QuizSummary};

use super::events::{
    Advanced, AnswerRecord, AnswerRevealed, FocusDirection, FocusMoved, QuestionShown, QuizEvent,
};
use super::listeners::{ListenerRegistry, ListenerScope, Subscription};
use super::progress::QuizProgress;
use super::state::{QuizPhase, QuizState};
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One playthrough over a shared `QuestionBank`.
///
/// Every mutating call returns the event it produced and also forwards it to
/// subscribed listeners. A repeated answer to the same question is a no-op;
/// every other out-of-order call fails with `SessionError::InvalidState` and
/// leaves the session untouched.
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    settings: QuizSettings,
    clock: Clock,
    rng: StdRng,
    state: QuizState,
    correct: u32,
    incorrect: u32,
    history: Vec<AnswerRecord>,
    started_at: Option<DateTime<Utc>>,
    listeners: ListenerRegistry,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>, settings: QuizSettings) -> Self {
        Self {
            bank,
            settings,
            clock: Clock::system(),
            rng: StdRng::from_entropy(),
            state: QuizState::NotStarted,
            correct: 0,
            incorrect: 0,
            history: Vec::new(),
            started_at: None,
            listeners: ListenerRegistry::default(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Lets callers move a fixed clock while a run is in progress.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    /// Seeds the shuffle so option layouts are reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    //
    // ─── LISTENERS ─────────────────────────────────────────────────────────────
    //

    /// Registers a listener for the lifetime of the returned guard.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&QuizEvent) + 'static,
    {
        self.listeners.subscribe(ListenerScope::Session, listener)
    }

    /// Registers a listener that is also removed when the current run
    /// finishes or the quiz is restarted.
    pub fn subscribe_run<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&QuizEvent) + 'static,
    {
        self.listeners.subscribe(ListenerScope::Run, listener)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    //
    // ─── OPERATIONS ────────────────────────────────────────────────────────────
    //

    /// Resets counters and shows the first question. Allowed in any state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Bank` if the first question cannot be read.
    pub fn start(&mut self) -> Result<QuestionShown, SessionError> {
        self.listeners.end_run();
        self.correct = 0;
        self.incorrect = 0;
        self.history.clear();
        self.started_at = Some(self.clock.now());
        info!(
            "quiz started: {} questions, {:?} options",
            self.bank.len(),
            self.settings.option_order()
        );
        self.show(0)
    }

    /// Same as `start`.
    ///
    /// # Errors
    ///
    /// See [`QuizSession::start`].
    pub fn restart(&mut self) -> Result<QuestionShown, SessionError> {
        self.start()
    }

    /// Grades `chosen` against the current question.
    ///
    /// Returns `Ok(None)` if the question was already answered.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OptionOutOfRange` if `chosen` is not an option position.
    /// Returns `SessionError::InvalidState` before `start` or after the quiz finished.
    pub fn select_answer(&mut self, chosen: usize) -> Result<Option<AnswerRevealed>, SessionError> {
        let (index, question) = match &self.state {
            QuizState::AwaitingAnswer {
                index, question, ..
            } => (*index, question),
            QuizState::Answered { .. } => {
                debug!("ignoring repeated answer {chosen}");
                return Ok(None);
            }
            QuizState::NotStarted | QuizState::Finished { .. } => {
                return Err(self.invalid_state("select an answer"));
            }
        };

        let count = question.option_count();
        let Some(chosen_text) = question.option(chosen) else {
            warn!("option {chosen} out of range for {count} options");
            return Err(SessionError::OptionOutOfRange {
                index: chosen,
                count,
            });
        };

        let is_correct = question.is_correct(chosen);
        let reveal = AnswerRevealed {
            chosen,
            correct: question.correct_index(),
            is_correct,
            correct_text: question.correct_option().to_string(),
        };
        let record = AnswerRecord {
            index,
            prompt: question.prompt().to_string(),
            chosen_text: chosen_text.to_string(),
            correct_text: reveal.correct_text.clone(),
            is_correct,
        };

        if is_correct {
            self.correct += 1;
        } else {
            self.incorrect += 1;
        }
        self.history.push(record);
        self.state = std::mem::take(&mut self.state).answer(chosen);
        debug!("question {index} answered with {chosen}: correct={is_correct}");

        self.listeners
            .emit(&QuizEvent::AnswerRevealed(reveal.clone()));
        Ok(Some(reveal))
    }

    /// Answers with the currently focused option.
    ///
    /// # Errors
    ///
    /// See [`QuizSession::select_answer`].
    pub fn select_focused(&mut self) -> Result<Option<AnswerRevealed>, SessionError> {
        match &self.state {
            QuizState::AwaitingAnswer { focused, .. } => {
                let focused = *focused;
                self.select_answer(focused)
            }
            QuizState::Answered { .. } => Ok(None),
            QuizState::NotStarted | QuizState::Finished { .. } => {
                Err(self.invalid_state("select an answer"))
            }
        }
    }

    /// Moves past an answered question, finishing the quiz after the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` unless the current question has been answered.
    /// Returns `SessionError::Summary` if the final counts are inconsistent.
    pub fn advance(&mut self) -> Result<Advanced, SessionError> {
        let QuizState::Answered { index, .. } = self.state else {
            return Err(self.invalid_state("advance"));
        };

        let next = index + 1;
        if next < self.bank.len() {
            return self.show(next).map(Advanced::Next);
        }

        let finished_at = self.clock.now();
        let summary = QuizSummary::from_len(
            self.correct,
            self.incorrect,
            self.bank.len(),
            self.started_at.unwrap_or(finished_at),
            finished_at,
        )?;
        self.state = QuizState::Finished {
            summary: summary.clone(),
        };
        info!(
            "quiz finished: {}/{} correct ({}%)",
            summary.correct(),
            summary.total(),
            summary.percentage()
        );

        self.listeners
            .emit(&QuizEvent::QuizFinished(summary.clone()));
        self.listeners.end_run();
        Ok(Advanced::Finished(summary))
    }

    /// Moves the keyboard highlight one option, wrapping at both ends.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidState` unless a question is awaiting an answer.
    pub fn focus_next(&mut self, direction: FocusDirection) -> Result<FocusMoved, SessionError> {
        let QuizState::AwaitingAnswer {
            question, focused, ..
        } = &mut self.state
        else {
            return Err(self.invalid_state("move focus"));
        };

        let count = question.option_count();
        let step = match direction {
            FocusDirection::Next => 1,
            FocusDirection::Previous => count - 1,
        };
        *focused = (*focused + step) % count;
        let moved = FocusMoved { index: *focused };

        self.listeners.emit(&QuizEvent::FocusMoved(moved));
        Ok(moved)
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    /// Number of questions in the quiz.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    /// Position in the quiz; equals `total()` once finished.
    #[must_use]
    pub fn current_index(&self) -> usize {
        match &self.state {
            QuizState::NotStarted => 0,
            QuizState::AwaitingAnswer { index, .. } | QuizState::Answered { index, .. } => *index,
            QuizState::Finished { .. } => self.bank.len(),
        }
    }

    #[must_use]
    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect_count(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn answered_count(&self) -> u32 {
        self.correct + self.incorrect
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        matches!(self.state, QuizState::Answered { .. })
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.state, QuizState::Finished { .. })
    }

    /// The question on screen, with options in presented order.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.state.question()
    }

    /// Highlighted option while a question awaits an answer.
    #[must_use]
    pub fn focused_option(&self) -> Option<usize> {
        match &self.state {
            QuizState::AwaitingAnswer { focused, .. } => Some(*focused),
            _ => None,
        }
    }

    /// Option picked for the current question, once answered.
    #[must_use]
    pub fn chosen_option(&self) -> Option<usize> {
        match &self.state {
            QuizState::Answered { chosen, .. } => Some(*chosen),
            _ => None,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Option<&QuizSummary> {
        match &self.state {
            QuizState::Finished { summary } => Some(summary),
            _ => None,
        }
    }

    /// Graded answers of the current run, in question order.
    #[must_use]
    pub fn history(&self) -> &[AnswerRecord] {
        &self.history
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            current: self.current_index(),
            total: self.total(),
            correct: self.correct,
            incorrect: self.incorrect,
            is_finished: self.is_finished(),
        }
    }

    //
    // ─── INTERNALS ─────────────────────────────────────────────────────────────
    //

    fn show(&mut self, index: usize) -> Result<QuestionShown, SessionError> {
        let question = self.bank.get(index)?;
        let question = self
            .bank
            .present(question, self.settings.option_order(), &mut self.rng);

        let shown = QuestionShown {
            index,
            total: self.bank.len(),
            prompt: question.prompt().to_string(),
            options: question.options().to_vec(),
            score: self.correct,
        };
        self.state = QuizState::AwaitingAnswer {
            index,
            question,
            focused: 0,
        };
        debug!("showing question {} of {}", index + 1, shown.total);

        self.listeners
            .emit(&QuizEvent::QuestionShown(shown.clone()));
        Ok(shown)
    }

    fn invalid_state(&self, operation: &'static str) -> SessionError {
        let phase = self.phase();
        warn!("rejected `{operation}` while quiz is {phase}");
        SessionError::InvalidState { operation, phase }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("bank_len", &self.bank.len())
            .field("settings", &self.settings)
            .field("phase", &self.phase())
            .field("current", &self.current_index())
            .field("correct", &self.correct)
            .field("incorrect", &self.incorrect)
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

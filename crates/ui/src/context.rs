use std::sync::Arc;

use quiz_core::model::{QuestionBank, QuizSettings};
use services::QuizSession;

pub trait UiApp: Send + Sync {
    fn bank(&self) -> Arc<QuestionBank>;
    fn settings(&self) -> QuizSettings;
}

#[derive(Clone)]
pub struct AppContext {
    bank: Arc<QuestionBank>,
    settings: QuizSettings,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank: app.bank(),
            settings: app.settings(),
        }
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    /// A fresh, not yet started session over the shared bank.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        QuizSession::new(self.bank(), self.settings)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("finished_at is before started_at")]
    InvalidTimeRange,

    #[error("answered count ({answered}) does not match total ({total})")]
    CountMismatch { answered: u32, total: u32 },

    #[error("a quiz needs at least one question")]
    EmptyQuiz,

    #[error("too many questions for a single quiz: {len}")]
    TooManyQuestions { len: usize },
}

//
// ─── SCORE TIER ────────────────────────────────────────────────────────────────
//

/// Feedback category chosen from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreTier {
    /// At least 80% of the questions answered correctly.
    Excellent,
    /// At least 50% correct.
    Good,
    NeedsReview,
}

impl ScoreTier {
    /// Picks the tier for `correct` out of `total`.
    ///
    /// Thresholds are fractions of the quiz length, compared in integer space.
    #[must_use]
    pub fn from_score(correct: u32, total: u32) -> Self {
        let correct = u64::from(correct);
        let total = u64::from(total);
        if correct * 10 >= total * 8 {
            Self::Excellent
        } else if correct * 2 >= total {
            Self::Good
        } else {
            Self::NeedsReview
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! You have mastered the topic.",
            Self::Good => "Well done! You are on the right track.",
            Self::NeedsReview => "You need to review more.",
        }
    }
}

/// Rounded share of correct answers, clamped to `[0, 100]`.
///
/// Rounds half up, so 5/8 is 63 and 1/8 is 13.
#[must_use]
pub fn percentage(correct: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = u64::from(correct.min(total));
    let total = u64::from(total);
    let pct = (correct * 200 + total) / (total * 2);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

//
// ─── SUMMARY ───────────────────────────────────────────────────────────────────
//

/// Final results of a finished quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    correct: u32,
    incorrect: u32,
    total: u32,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
}

impl QuizSummary {
    /// Build a summary once every question has been answered.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::EmptyQuiz` if `total` is zero.
    /// Returns `SummaryError::CountMismatch` if `correct + incorrect != total`.
    /// Returns `SummaryError::InvalidTimeRange` if `finished_at` is before `started_at`.
    pub fn new(
        correct: u32,
        incorrect: u32,
        total: u32,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        if total == 0 {
            return Err(SummaryError::EmptyQuiz);
        }
        if finished_at < started_at {
            return Err(SummaryError::InvalidTimeRange);
        }
        let answered = correct.saturating_add(incorrect);
        if answered != total {
            return Err(SummaryError::CountMismatch { answered, total });
        }

        Ok(Self {
            correct,
            incorrect,
            total,
            started_at,
            finished_at,
        })
    }

    /// Same as [`QuizSummary::new`], taking the quiz length as a `usize`.
    ///
    /// # Errors
    ///
    /// Returns `SummaryError::TooManyQuestions` if `total` cannot fit in `u32`,
    /// otherwise the errors of [`QuizSummary::new`].
    pub fn from_len(
        correct: u32,
        incorrect: u32,
        total: usize,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Result<Self, SummaryError> {
        let total =
            u32::try_from(total).map_err(|_| SummaryError::TooManyQuestions { len: total })?;
        Self::new(correct, incorrect, total, started_at, finished_at)
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        percentage(self.correct, self.total)
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.correct, self.total)
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.finished_at - self.started_at
    }
}

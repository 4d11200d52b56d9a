use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least 2 options, got {count}")]
    TooFewOptions { count: usize },

    #[error("correct index {index} is out of range for {count} options")]
    CorrectIndexOutOfRange { index: usize, count: usize },
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
///
/// Option texts may repeat; exactly one *position* is correct.
/// Only constructed through [`Question::new`], so `correct_index` always resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Minimum number of options a question may carry.
    pub const MIN_OPTIONS: usize = 2;

    /// Creates a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` if the prompt is blank.
    /// Returns `QuestionError::TooFewOptions` if fewer than two options are given.
    /// Returns `QuestionError::CorrectIndexOutOfRange` if `correct_index` does not
    /// point at an option.
    pub fn new<P, I, S>(prompt: P, options: I, correct_index: usize) -> Result<Self, QuestionError>
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompt = prompt.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.len() < Self::MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions {
                count: options.len(),
            });
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: correct_index,
                count: options.len(),
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_index,
        })
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    /// Text of the correct option.
    #[must_use]
    pub fn correct_option(&self) -> &str {
        // `correct_index` is validated on construction.
        &self.options[self.correct_index]
    }

    /// Returns true if `index` is the correct position.
    ///
    /// Compares positions, never texts, so duplicated option texts stay unambiguous.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }

    /// Rebuilds the question with its options reordered by `order`.
    ///
    /// `order[i]` is the original position of the option placed at `i`.
    /// Callers must pass a permutation of `0..option_count()`.
    pub(crate) fn reordered(&self, order: &[usize]) -> Self {
        debug_assert_eq!(order.len(), self.options.len());
        let options = order.iter().map(|&i| self.options[i].clone()).collect();
        let correct_index = order
            .iter()
            .position(|&i| i == self.correct_index)
            .unwrap_or(self.correct_index);
        Self {
            prompt: self.prompt.clone(),
            options,
            correct_index,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_question() {
        let q = Question::new("2 + 2?", ["3", "4", "5"], 1).unwrap();
        assert_eq!(q.prompt(), "2 + 2?");
        assert_eq!(q.option_count(), 3);
        assert_eq!(q.correct_option(), "4");
        assert!(q.is_correct(1));
        assert!(!q.is_correct(0));
    }

    #[test]
    fn new_rejects_blank_prompt() {
        let err = Question::new("   ", ["a", "b"], 0).unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn new_rejects_single_option() {
        let err = Question::new("Q", ["only"], 0).unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions { count: 1 });
    }

    #[test]
    fn new_rejects_empty_option_list() {
        let err = Question::new("Q", Vec::<String>::new(), 0).unwrap_err();
        assert_eq!(err, QuestionError::TooFewOptions { count: 0 });
        let err = Question::new("", ["a"], 5).unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn new_rejects_correct_index_past_end() {
        let err = Question::new("Q", ["a", "b"], 2).unwrap_err();
        assert_eq!(
            err,
            QuestionError::CorrectIndexOutOfRange { index: 2, count: 2 }
        );
    }

    #[test]
    fn reordered_tracks_correct_position_not_text() {
        let q = Question::new("Q", ["same", "other", "same"], 2).unwrap();
        let moved = q.reordered(&[2, 0, 1]);
        assert_eq!(moved.options(), ["same", "same", "other"]);
        assert_eq!(moved.correct_index(), 0);
    }
}

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::model::question::Question;
use crate::model::settings::OptionOrder;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("a question bank needs at least one question")]
    Empty,

    #[error("question index {index} is out of range for a bank of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Immutable, ordered collection of quiz questions.
///
/// Built once at startup and shared read-only between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `BankError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { questions })
    }

    /// # Errors
    ///
    /// Returns `BankError::OutOfRange` if `index` is not in `[0, len)`.
    pub fn get(&self, index: usize) -> Result<&Question, BankError> {
        self.questions.get(index).ok_or(BankError::OutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    /// Number of questions, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Returns a copy of `question` laid out according to `order`.
    ///
    /// With `OptionOrder::Shuffled` the options are permuted uniformly
    /// (Fisher–Yates) and the correct index follows the originally correct
    /// position, so repeated option texts never confuse grading.
    #[must_use]
    pub fn present<R>(&self, question: &Question, order: OptionOrder, rng: &mut R) -> Question
    where
        R: Rng + ?Sized,
    {
        match order {
            OptionOrder::Fixed => question.clone(),
            OptionOrder::Shuffled => {
                let mut positions: Vec<usize> = (0..question.option_count()).collect();
                positions.shuffle(rng);
                question.reordered(&positions)
            }
        }
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn question() -> Question {
        Question::new("Capital of France?", ["London", "Berlin", "Paris", "Madrid"], 2).unwrap()
    }

    fn sorted(options: &[String]) -> Vec<String> {
        let mut v = options.to_vec();
        v.sort();
        v
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert_eq!(QuestionBank::new(Vec::new()).unwrap_err(), BankError::Empty);
    }

    #[test]
    fn get_out_of_range_fails() {
        let bank = QuestionBank::new(vec![question()]).unwrap();
        assert!(bank.get(0).is_ok());
        assert_eq!(
            bank.get(1).unwrap_err(),
            BankError::OutOfRange { index: 1, len: 1 }
        );
    }

    #[test]
    fn fixed_order_is_an_identical_copy() {
        let bank = QuestionBank::new(vec![question()]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let shown = bank.present(bank.get(0).unwrap(), OptionOrder::Fixed, &mut rng);
        assert_eq!(&shown, bank.get(0).unwrap());
    }

    #[test]
    fn shuffle_preserves_options_and_tracks_correct_text() {
        let bank = QuestionBank::new(vec![question()]).unwrap();
        let original = bank.get(0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let shown = bank.present(original, OptionOrder::Shuffled, &mut rng);
            assert_eq!(sorted(shown.options()), sorted(original.options()));
            assert_eq!(shown.correct_option(), "Paris");
            assert_eq!(shown.prompt(), original.prompt());
        }
    }

    #[test]
    fn shuffle_with_duplicates_follows_the_original_position() {
        // Position 1 is correct; position 3 carries the same text but is not.
        let q = Question::new("Pick", ["x", "dup", "y", "dup"], 1).unwrap();
        let bank = QuestionBank::new(vec![q.clone()]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut moved_off_index_one = false;

        for _ in 0..200 {
            let shown = bank.present(&q, OptionOrder::Shuffled, &mut rng);
            assert_eq!(shown.correct_option(), "dup");
            assert_eq!(shown.options().iter().filter(|o| *o == "dup").count(), 2);
            if shown.correct_index() != 1 {
                moved_off_index_one = true;
            }
        }
        assert!(moved_off_index_one);
    }

    #[test]
    fn shuffle_is_roughly_uniform_over_permutations() {
        let q = Question::new("Pick", ["a", "b", "c"], 0).unwrap();
        let bank = QuestionBank::new(vec![q.clone()]).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let mut counts: HashMap<Vec<String>, u32> = HashMap::new();

        let rounds = 6_000;
        for _ in 0..rounds {
            let shown = bank.present(&q, OptionOrder::Shuffled, &mut rng);
            *counts.entry(shown.options().to_vec()).or_default() += 1;
        }

        // 3! permutations, ~1000 each; the bounds sit > 6 standard deviations out.
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            assert!((800..=1200).contains(count), "skewed count {count}");
        }
    }
}

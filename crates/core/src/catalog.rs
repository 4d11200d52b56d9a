//! Compiled-in question catalog.

use crate::error::Error;
use crate::model::{Question, QuestionBank};

/// `(prompt, options, correct index)` rows of the built-in quiz.
const BUILTIN: [(&str, [&str; 4], usize); 10] = [
    ("What is 2 + 2?", ["3", "4", "5", "6"], 1),
    (
        "What is the capital of France?",
        ["London", "Berlin", "Paris", "Madrid"],
        2,
    ),
    (
        "In which year did Columbus reach the Americas?",
        ["1492", "1450", "1500", "1510"],
        0,
    ),
    (
        "Which is the largest planet in the solar system?",
        ["Saturn", "Neptune", "Jupiter", "Earth"],
        2,
    ),
    (
        "Which language has the most native speakers?",
        ["English", "Mandarin", "Spanish", "French"],
        1,
    ),
    (
        "Which chemical element is most abundant in the atmosphere?",
        ["Oxygen", "Carbon dioxide", "Nitrogen", "Argon"],
        2,
    ),
    (
        "How many continents are there?",
        ["5", "6", "7", "8"],
        1,
    ),
    (
        "What is the speed of light in a vacuum?",
        ["300,000 km/h", "300,000 km/s", "150,000 km/s", "600,000 km/s"],
        1,
    ),
    (
        "In which year did the Berlin Wall fall?",
        ["1987", "1989", "1991", "1993"],
        1,
    ),
    (
        "Which is the fastest land animal?",
        ["Lion", "Cheetah", "Antelope", "Horse"],
        1,
    ),
];

/// Number of questions in the built-in catalog.
pub const BUILTIN_LEN: usize = BUILTIN.len();

/// Builds the built-in ten-question bank.
///
/// # Errors
///
/// Returns `Error::Question` if a catalog row fails validation.
pub fn builtin_bank() -> Result<QuestionBank, Error> {
    let questions = BUILTIN
        .iter()
        .map(|(prompt, options, correct)| Question::new(*prompt, *options, *correct))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(QuestionBank::new(questions)?)
}

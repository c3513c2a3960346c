//! # Quiz model
//!
//! `POST /create-quiz` returns `{"Quiz": [{"Question", "Choices", "Answer",
//! "Explanation"}]}`. The capitalised keys are mapped onto [`QuizQuestion`]
//! with `serde(rename)`; [`QuizSet`] is the ordered list.

use serde::{Deserialize, Serialize};

/// An ordered set of generated questions.
pub type QuizSet = Vec<QuizQuestion>;

/// One multiple-choice question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Choices", default)]
    pub choices: Vec<String>,
    /// The correct choice, as text.
    #[serde(rename = "Answer")]
    pub answer: String,
    #[serde(rename = "Explanation", default)]
    pub explanation: String,
}

impl QuizQuestion {
    /// Whether `choice` is the correct answer. Comparison ignores case and
    /// surrounding whitespace.
    pub fn is_correct(&self, choice: &str) -> bool {
        normalize(choice) == normalize(&self.answer)
            || self.answer_letter_matches(choice)
    }

    /// Some generators answer with the choice letter ("B") instead of its text.
    fn answer_letter_matches(&self, choice: &str) -> bool {
        let answer = self.answer.trim();
        let mut chars = answer.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return false;
        };
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        let index = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        self.choices
            .get(index)
            .is_some_and(|c| normalize(c) == normalize(choice))
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

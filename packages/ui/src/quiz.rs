//! Quiz session: walk a generated quiz one question at a time.

use api::{QuizQuestion, QuizSet};
use dioxus::prelude::*;

/// Outcome of answering one question.
#[derive(Clone, Debug, PartialEq)]
pub struct AnswerRecord {
    pub chosen: String,
    pub correct: bool,
}

/// Progress through one quiz.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizSession {
    questions: QuizSet,
    answers: Vec<AnswerRecord>,
}

impl QuizSession {
    pub fn new(questions: QuizSet) -> Self {
        Self {
            questions,
            answers: Vec::new(),
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Zero-based index of the question being asked.
    pub fn position(&self) -> usize {
        self.answers.len()
    }

    pub fn current(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.position())
    }

    pub fn is_finished(&self) -> bool {
        self.position() >= self.questions.len()
    }

    /// Record an answer for the current question and advance. Returns whether
    /// it was correct, or `None` once the quiz is finished.
    pub fn answer(&mut self, choice: &str) -> Option<bool> {
        let correct = self.current()?.is_correct(choice);
        self.answers.push(AnswerRecord {
            chosen: choice.trim().to_string(),
            correct,
        });
        Some(correct)
    }

    /// Result and explanation for the most recently answered question.
    pub fn last_feedback(&self) -> Option<(bool, &str)> {
        let record = self.answers.last()?;
        let question = self.questions.get(self.answers.len() - 1)?;
        Some((record.correct, question.explanation.as_str()))
    }

    pub fn score(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    /// Start over with the same questions.
    pub fn restart(&mut self) {
        self.answers.clear();
    }
}

/// Interactive card for a running [`QuizSession`].
#[component]
pub fn QuizCard(session: Signal<QuizSession>) -> Element {
    let mut session = session;

    let state = session();
    let total = state.questions().len();
    let feedback = state
        .last_feedback()
        .map(|(correct, explanation)| (correct, explanation.to_string()));

    if state.is_finished() {
        let score = state.score();
        return rsx! {
            div {
                class: "quiz-card finished",
                h3 { "Quiz complete" }
                p { "You scored {score} out of {total}." }
                button {
                    onclick: move |_| session.write().restart(),
                    "Restart Quiz"
                }
            }
        };
    }

    let Some(question) = state.current().cloned() else {
        return rsx! {};
    };
    let number = state.position() + 1;

    rsx! {
        div {
            class: "quiz-card",
            p { class: "quiz-progress", "Question {number} of {total}" }
            h3 { class: "quiz-question", "{question.question}" }
            div {
                class: "quiz-choices",
                for choice in question.choices.clone() {
                    button {
                        key: "{choice}",
                        class: "quiz-choice",
                        onclick: {
                            let choice = choice.clone();
                            move |_| {
                                session.write().answer(&choice);
                            }
                        },
                        "{choice}"
                    }
                }
            }
            if let Some((correct, explanation)) = feedback {
                div {
                    class: if correct { "quiz-feedback correct" } else { "quiz-feedback incorrect" },
                    if correct { "Correct!" } else { "Not quite." }
                    if !explanation.is_empty() {
                        p { "{explanation}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, answer: &str) -> QuizQuestion {
        QuizQuestion {
            question: text.to_string(),
            choices: vec!["Paris".to_string(), "Rome".to_string(), "Madrid".to_string()],
            answer: answer.to_string(),
            explanation: String::new(),
        }
    }

    fn session() -> QuizSession {
        QuizSession::new(vec![
            question("Capital of France?", "Paris"),
            question("Capital of Italy?", "Rome"),
            question("Capital of Spain?", "C"),
        ])
    }

    #[test]
    fn test_answer_and_score() {
        let mut quiz = session();
        assert_eq!(quiz.current().unwrap().question, "Capital of France?");

        assert_eq!(quiz.answer("Paris"), Some(true));
        assert_eq!(quiz.answer("Paris"), Some(false));
        assert_eq!(quiz.answer("Madrid"), Some(true));

        assert!(quiz.is_finished());
        assert_eq!(quiz.score(), 2);
        assert_eq!(quiz.answer("Rome"), None);
        assert_eq!(quiz.answers().len(), 3);
    }

    #[test]
    fn test_restart_keeps_questions() {
        let mut quiz = session();
        quiz.answer("Rome");
        quiz.answer("Rome");
        quiz.restart();

        assert_eq!(quiz.position(), 0);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.questions().len(), 3);
        assert!(!quiz.is_finished());
    }

    #[test]
    fn test_feedback_follows_last_answer() {
        let mut quiz = QuizSession::new(vec![QuizQuestion {
            explanation: "Paris has been the capital since 987.".to_string(),
            ..question("Capital of France?", "Paris")
        }]);
        assert_eq!(quiz.last_feedback(), None);

        quiz.answer("Rome");
        assert_eq!(
            quiz.last_feedback(),
            Some((false, "Paris has been the capital since 987."))
        );

        quiz.restart();
        assert_eq!(quiz.last_feedback(), None);
    }

    #[test]
    fn test_new_quiz_starts_without_feedback() {
        let mut quiz = session();
        quiz.answer("Paris");
        assert_eq!(quiz.last_feedback(), Some((true, "")));

        quiz = QuizSession::new(vec![question("Capital of Italy?", "Rome")]);
        assert_eq!(quiz.last_feedback(), None);
        assert_eq!(quiz.position(), 0);
    }

    #[test]
    fn test_empty_quiz_is_finished() {
        let quiz = QuizSession::default();
        assert!(quiz.is_finished());
        assert!(quiz.current().is_none());
        assert_eq!(quiz.score(), 0);
    }
}

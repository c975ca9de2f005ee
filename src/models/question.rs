use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failures for a [`Question`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    /// A required field is absent or empty.
    #[error("question field `{0}` is missing or empty")]
    MissingField(&'static str),
    /// The marked answer does not appear among the options.
    #[error("correctAnswer is not one of the options")]
    AnswerNotInOptions,
}

/// One trivia item in its canonical wire shape.
///
/// Serialized as `{question, options, correctAnswer}` — the same shape the
/// upstream response schema requests, so generated questions relay without
/// reshaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// The question text shown to the player.
    pub question: String,
    /// Candidate answers, one of which is correct.
    pub options: Vec<String>,
    /// The correct answer; must be a member of `options`.
    pub correct_answer: String,
}

impl Question {
    /// Validating constructor.
    ///
    /// Fails when a required field is empty or when `correct_answer` is not
    /// one of `options`.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let question = Question {
            question: question.into(),
            options,
            correct_answer: correct_answer.into(),
        };
        question.validate()?;
        Ok(question)
    }

    /// Check the invariants on a question obtained by deserialization.
    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.question.trim().is_empty() {
            return Err(QuestionError::MissingField("question"));
        }
        if self.options.is_empty() {
            return Err(QuestionError::MissingField("options"));
        }
        if self.correct_answer.trim().is_empty() {
            return Err(QuestionError::MissingField("correctAnswer"));
        }
        if !self.options.contains(&self.correct_answer) {
            return Err(QuestionError::AnswerNotInOptions);
        }
        Ok(())
    }
}

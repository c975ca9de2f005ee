//! Endpoint presets for the quiz pipeline.
//!
//! The two deployed endpoints share one pipeline and differ only in the
//! values below: accepted difficulties, question count, prompt wording, and
//! how a successful upstream reply is relayed.

use crate::models::difficulty::Difficulty;

/// How a successful upstream reply becomes the caller's response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayMode {
    /// Pass the parsed upstream envelope through verbatim.
    Envelope,
    /// Extract `candidates[0].content.parts[0].text` and parse it as an
    /// array of questions.
    QuestionArray,
}

/// Configuration for one quiz endpoint.
#[derive(Debug, Clone, Copy)]
pub struct QuizPreset {
    /// Short name used in logs.
    pub name: &'static str,
    /// Difficulty values this endpoint accepts.
    pub accepted_difficulties: &'static [Difficulty],
    /// How many questions the prompt asks for.
    pub question_count: usize,
    /// Fixed system instruction describing the quiz-master role.
    pub system_prompt: &'static str,
    /// User-query template; `{difficulty}` is replaced with the validated
    /// value.
    pub query_template: &'static str,
    pub relay: RelayMode,
}

impl QuizPreset {
    pub fn accepts(&self, difficulty: Difficulty) -> bool {
        self.accepted_difficulties.contains(&difficulty)
    }

    /// Interpolate the validated difficulty into the query template.
    pub fn user_query(&self, difficulty: Difficulty) -> String {
        self.query_template
            .replace("{difficulty}", &difficulty.to_string())
    }
}

/// Single-question endpoint: one Question object, school/college difficulty.
pub const SINGLE_QUESTION: QuizPreset = QuizPreset {
    name: "get-question",
    accepted_difficulties: &[Difficulty::School, Difficulty::College],
    question_count: 1,
    system_prompt: "You are an expert quiz master specializing in Environmental Education. \
        The user will provide a difficulty level. Your response must be a single JSON object \
        matching the provided schema, with the correct answer present among the options.",
    query_template: "Generate one trivia question on Environmental Education suitable for a \
        {difficulty} difficulty level.",
    relay: RelayMode::Envelope,
};

/// Five-question quiz endpoint: an array of 5, easy/normal/hard difficulty.
pub const FIVE_QUESTION_QUIZ: QuizPreset = QuizPreset {
    name: "get-quiz",
    accepted_difficulties: &[Difficulty::Easy, Difficulty::Normal, Difficulty::Hard],
    question_count: 5,
    system_prompt: "You are an expert quiz master specializing in Environmental Education. \
        You must generate a complete quiz of 5 unique questions. The user will provide a \
        difficulty level. Your response must be a JSON array of 5 objects, matching the \
        provided schema. Do not wrap the array in any other object.",
    query_template: "Generate an array of 5 unique trivia questions on Environmental Education \
        suitable for a {difficulty} difficulty level.",
    relay: RelayMode::QuestionArray,
};

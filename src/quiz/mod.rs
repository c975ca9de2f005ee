/// Quiz request pipeline — validate, forward, relay.
///
/// One parameterized handler serves both deployed endpoints; a
/// [`QuizPreset`](presets::QuizPreset) supplies everything that differs
/// between them. Control flow is strictly linear per invocation:
/// method check, key check, difficulty check, upstream call, translation.

pub mod presets;

use http::Method;
use serde::Deserialize;
use serde_json::Value;
use vercel_runtime::{Body, Request, Response, StatusCode};

use crate::config::ServerConfig;
use crate::error::QuizError;
use crate::gemini::payload::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::gemini::{schema, GeminiClient, UpstreamReply};
use crate::models::difficulty::Difficulty;
use crate::models::question::Question;
use presets::{QuizPreset, RelayMode};

/// Fallback message when an upstream error body carries no usable detail.
const UPSTREAM_FALLBACK_MESSAGE: &str = "Failed to fetch data from Gemini API.";

#[derive(Debug, Deserialize)]
struct QuizRequest {
    difficulty: Option<String>,
}

/// Handle one quiz request end to end.
///
/// Every failure path is terminal and maps to exactly one status/body pair;
/// nothing here is fatal to the process.
pub async fn handle(
    req: Request,
    preset: &QuizPreset,
    config: &ServerConfig,
) -> Result<Response<Body>, vercel_runtime::Error> {
    tracing::info!(endpoint = preset.name, method = %req.method(), "handler invoked");

    if *req.method() != Method::POST {
        return QuizError::MethodNotAllowed.into_response();
    }

    match run(req, preset, config).await {
        Ok(body) => Ok(Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(Body::Text(body.to_string()))?),
        Err(err) => err.into_response(),
    }
}

/// The fallible stages: key, difficulty, upstream call, translation.
async fn run(req: Request, preset: &QuizPreset, config: &ServerConfig) -> Result<Value, QuizError> {
    let api_key = match config.api_key.as_deref() {
        Some(key) => key,
        None => {
            tracing::error!("GEMINI_API_KEY is not configured");
            return Err(QuizError::ApiKeyMissing);
        }
    };

    let difficulty = parse_difficulty(req.body(), preset)?;
    tracing::info!(endpoint = preset.name, %difficulty, "difficulty accepted");

    let payload = build_payload(preset, difficulty);
    let client = GeminiClient::new(&config.api_base);
    let reply = client.generate(api_key, &payload).await?;

    translate_reply(preset, &reply)
}

/// Validate the body's `difficulty` against the preset's accepted set.
///
/// A missing field, a non-JSON body, and an unknown or wrong-preset value
/// are all the same client error.
fn parse_difficulty(body: &Body, preset: &QuizPreset) -> Result<Difficulty, QuizError> {
    let raw: &[u8] = match body {
        Body::Empty => &[],
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
    };

    let request: QuizRequest =
        serde_json::from_slice(raw).map_err(|_| QuizError::InvalidDifficulty)?;
    let value = request.difficulty.ok_or(QuizError::InvalidDifficulty)?;
    let difficulty = Difficulty::parse(&value).ok_or(QuizError::InvalidDifficulty)?;
    if !preset.accepts(difficulty) {
        return Err(QuizError::InvalidDifficulty);
    }
    Ok(difficulty)
}

/// Compose the generateContent payload for a validated difficulty.
pub fn build_payload(preset: &QuizPreset, difficulty: Difficulty) -> GenerateContentRequest {
    let response_schema = match preset.relay {
        RelayMode::Envelope => schema::question_object(),
        RelayMode::QuestionArray => schema::question_array(),
    };

    GenerateContentRequest {
        contents: vec![Content::text(preset.user_query(difficulty))],
        system_instruction: Content::text(preset.system_prompt),
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema,
        },
    }
}

/// Turn a raw upstream reply into the caller's response body.
pub fn translate_reply(preset: &QuizPreset, reply: &UpstreamReply) -> Result<Value, QuizError> {
    if !reply.is_success() {
        tracing::error!(status = reply.status, body = %reply.body, "generateContent failed");
        return Err(QuizError::Upstream {
            status: reply.status,
            message: upstream_error_message(&reply.body),
        });
    }

    let envelope: Value = serde_json::from_str(&reply.body)?;
    match preset.relay {
        RelayMode::Envelope => Ok(envelope),
        RelayMode::QuestionArray => {
            let parsed: GenerateContentResponse = serde_json::from_value(envelope)?;
            let text = parsed.first_text().ok_or_else(|| QuizError::Internal {
                detail: "upstream reply has no candidates[0].content.parts[0].text".to_string(),
            })?;

            let questions: Vec<Question> = serde_json::from_str(text)?;
            for question in &questions {
                question.validate().map_err(|err| QuizError::Internal {
                    detail: err.to_string(),
                })?;
            }
            if questions.len() != preset.question_count {
                tracing::warn!(
                    expected = preset.question_count,
                    got = questions.len(),
                    "unexpected question count from upstream"
                );
            }
            Ok(serde_json::to_value(questions)?)
        }
    }
}

/// Pull `error.message` out of an upstream error body when present.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|value| value.get("error"))
        .and_then(|error| error.get("message"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string())
}

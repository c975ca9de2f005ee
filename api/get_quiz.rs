use vercel_runtime::{run, Body, Error, Request, Response};

use ecoquiz_api::config::ServerConfig;
use ecoquiz_api::quiz::{self, presets};

#[tokio::main]
async fn main() -> Result<(), Error> {
    ecoquiz_api::telemetry::init();
    tracing::info!("get-quiz cold start");
    run(handler).await
}

/// POST /api/get-quiz — a complete quiz of 5 trivia questions.
///
/// Accepts `{"difficulty": "easy" | "normal" | "hard"}` and responds with
/// the parsed array of question objects extracted from the upstream reply.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let config = ServerConfig::from_env();
    quiz::handle(req, &presets::FIVE_QUESTION_QUIZ, &config).await
}

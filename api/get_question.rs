use vercel_runtime::{run, Body, Error, Request, Response};

use ecoquiz_api::config::ServerConfig;
use ecoquiz_api::quiz::{self, presets};

#[tokio::main]
async fn main() -> Result<(), Error> {
    ecoquiz_api::telemetry::init();
    tracing::info!("get-question cold start");
    run(handler).await
}

/// POST /api/get-question — one Environmental Education trivia question.
///
/// Accepts `{"difficulty": "school" | "college"}` and relays the upstream
/// generateContent envelope verbatim on success.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let config = ServerConfig::from_env();
    quiz::handle(req, &presets::SINGLE_QUESTION, &config).await
}

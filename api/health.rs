use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

use ecoquiz_api::config::ServerConfig;
use ecoquiz_api::{gemini, version};

#[tokio::main]
async fn main() -> Result<(), Error> {
    run(handler).await
}

/// GET /api/health — liveness and deployment info.
///
/// Reports whether the Gemini key is configured without ever exposing it.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let config = ServerConfig::from_env();
    let payload = json!({
        "status": "ok",
        "version": version(),
        "model": gemini::MODEL,
        "key_configured": config.api_key.is_some(),
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}

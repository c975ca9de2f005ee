/// EcoQuiz API — Shared Library
///
/// This crate contains the shared logic used across all API handlers:
/// request validation, Gemini payload construction, and upstream reply
/// translation.
///
/// Each serverless function in `api/` imports from this library
/// to keep handlers thin and logic reusable.

pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod quiz;
pub mod telemetry;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

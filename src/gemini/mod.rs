/// Gemini API client — thin wrapper over the generateContent endpoint.
///
/// The client injects the server-held key as a query parameter and returns
/// the raw reply without interpreting it; translation into a caller-facing
/// response happens in the quiz pipeline.

pub mod payload;
pub mod schema;

use crate::error::QuizError;
use payload::GenerateContentRequest;

/// Model identifier pinned by the deployment.
pub const MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Raw upstream reply: HTTP status plus unparsed body text.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: String,
}

impl UpstreamReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        GeminiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// POST a generateContent payload, returning the raw status and body.
    ///
    /// Network-level failures (connect, body read) surface as internal
    /// errors; non-success statuses are returned untranslated. No retries,
    /// no timeout beyond the runtime defaults.
    pub async fn generate(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<UpstreamReply, QuizError> {
        // The key rides in the query string; keep it out of the logs.
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, MODEL, api_key
        );

        tracing::info!(model = MODEL, "calling generateContent");
        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::info!(status, "generateContent replied");

        Ok(UpstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_covers_the_2xx_range() {
        for status in [200u16, 201, 299] {
            let reply = UpstreamReply {
                status,
                body: String::new(),
            };
            assert!(reply.is_success(), "{status} should count as success");
        }
        for status in [199u16, 301, 400, 403, 429, 500, 503] {
            let reply = UpstreamReply {
                status,
                body: String::new(),
            };
            assert!(!reply.is_success(), "{status} should NOT count as success");
        }
    }
}

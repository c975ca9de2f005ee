use serde_json::json;
use thiserror::Error;
use vercel_runtime::{Body, Response, StatusCode};

/// Failures the quiz pipeline can surface to a caller.
///
/// Every variant maps to exactly one HTTP status and public message, and
/// every failure is terminal for the invocation. `Internal` keeps its
/// diagnostic detail out of the response body; it is logged instead.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("API key is not configured on the server.")]
    ApiKeyMissing,
    #[error("Invalid difficulty level provided.")]
    InvalidDifficulty,
    /// The upstream API answered with a non-success status; its status code
    /// and a message derived from its body are relayed to the caller.
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error("An internal server error occurred.")]
    Internal { detail: String },
}

impl QuizError {
    pub fn status(&self) -> StatusCode {
        match self {
            QuizError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            QuizError::ApiKeyMissing => StatusCode::INTERNAL_SERVER_ERROR,
            QuizError::InvalidDifficulty => StatusCode::BAD_REQUEST,
            QuizError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            QuizError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render the error as a JSON response in the `{"error": ...}` shape.
    pub fn into_response(self) -> Result<Response<Body>, vercel_runtime::Error> {
        if let QuizError::Internal { detail } = &self {
            tracing::error!(%detail, "internal error in quiz handler");
        }
        let body = json!({ "error": self.to_string() });
        Ok(Response::builder()
            .status(self.status())
            .header("Content-Type", "application/json")
            .body(Body::Text(body.to_string()))?)
    }
}

impl From<reqwest::Error> for QuizError {
    fn from(err: reqwest::Error) -> Self {
        QuizError::Internal {
            detail: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for QuizError {
    fn from(err: serde_json::Error) -> Self {
        QuizError::Internal {
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            QuizError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            QuizError::ApiKeyMissing.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            QuizError::InvalidDifficulty.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            QuizError::Internal {
                detail: "boom".to_string()
            }
            .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_relays_status() {
        let err = QuizError::Upstream {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn test_internal_message_is_generic() {
        let err = QuizError::Internal {
            detail: "candidates path missing".to_string(),
        };
        assert_eq!(err.to_string(), "An internal server error occurred.");
    }

    #[test]
    fn test_renders_error_body_shape() {
        let response = QuizError::InvalidDifficulty.into_response().unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = match response.into_body() {
            Body::Text(text) => text,
            other => panic!("expected text body, got {other:?}"),
        };
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "Invalid difficulty level provided.");
    }
}

use std::env;

/// Base URL of the generative-language API.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Runtime configuration injected into the handlers.
///
/// The secret and the upstream base URL travel as values; nothing below the
/// entrypoints reads the process environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server-held Gemini API key; `None` when the deployment is missing it.
    pub api_key: Option<String>,
    /// Upstream API base URL.
    pub api_base: String,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// An empty `GEMINI_API_KEY` is treated the same as an absent one.
    pub fn from_env() -> Self {
        ServerConfig {
            api_key: env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn new(api_key: Option<String>, api_base: impl Into<String>) -> Self {
        ServerConfig {
            api_key,
            api_base: api_base.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_carries_values() {
        let config = ServerConfig::new(Some("test-key".to_string()), "http://localhost:9090");
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.api_base, "http://localhost:9090");
    }

    #[test]
    fn test_default_base_points_at_generative_language_api() {
        assert!(DEFAULT_API_BASE.starts_with("https://generativelanguage.googleapis.com"));
    }
}

use std::env;

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

const DEFAULT_JWT_SECRET: &str = "dev_secret_key_change_in_production";

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: SecretString,
    pub youtube_api_key: Option<SecretString>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    pub llm_temperature: f32,
    pub youtube_api_base_url: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub session_expiration_hours: i64,
    pub max_upload_bytes: usize,
    pub max_context_chars: usize,
    pub video_context_chars: usize,
    pub quiz_pass_percent: u32,
    pub cors_allowed_origin: Option<String>,
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Reads configuration from the process environment.
    /// Fails if `GEMINI_API_KEY` is absent or blank.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let gemini_api_key = non_empty("GEMINI_API_KEY").ok_or_else(|| {
            AppError::Configuration("GEMINI_API_KEY is not set".to_string())
        })?;

        Ok(Self {
            gemini_api_key: SecretString::from(gemini_api_key),
            youtube_api_key: non_empty("YOUTUBE_API_KEY").map(SecretString::from),
            llm_api_base_url: non_empty("LLM_API_BASE_URL").unwrap_or_else(|| {
                "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
            }),
            llm_model_name: non_empty("LLM_MODEL_NAME")
                .unwrap_or_else(|| "gemini-2.5-flash".to_string()),
            llm_temperature: parse_var(&lookup, "LLM_TEMPERATURE").unwrap_or(0.3),
            youtube_api_base_url: non_empty("YOUTUBE_API_BASE_URL")
                .unwrap_or_else(|| "https://www.googleapis.com/youtube/v3".to_string()),
            web_server_host: non_empty("WEB_SERVER_HOST")
                .unwrap_or_else(|| "localhost".to_string()),
            web_server_port: parse_var(&lookup, "WEB_SERVER_PORT").unwrap_or(8080),
            jwt_secret: SecretString::from(
                non_empty("JWT_SECRET").unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            ),
            session_expiration_hours: parse_var(&lookup, "SESSION_EXPIRATION_HOURS").unwrap_or(12),
            max_upload_bytes: parse_var(&lookup, "MAX_UPLOAD_BYTES").unwrap_or(20 * 1024 * 1024),
            max_context_chars: parse_var(&lookup, "MAX_CONTEXT_CHARS").unwrap_or(100_000),
            video_context_chars: parse_var(&lookup, "VIDEO_CONTEXT_CHARS").unwrap_or(2_000),
            quiz_pass_percent: parse_var(&lookup, "QUIZ_PASS_PERCENT").unwrap_or(70),
            cors_allowed_origin: non_empty("CORS_ALLOWED_ORIGIN"),
            upstream_timeout_secs: parse_var(&lookup, "UPSTREAM_TIMEOUT_SECS").unwrap_or(60),
        })
    }

    /// Validate that production-critical configuration is set
    /// Panics if the session signing secret is the default or too short
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == DEFAULT_JWT_SECRET {
            panic!(
                "FATAL: JWT_SECRET is using default value! Set JWT_SECRET environment variable to a secure random string."
            );
        }

        if jwt_secret.len() < 32 {
            panic!(
                "FATAL: JWT_SECRET is too short ({}). Must be at least 32 characters for security.",
                jwt_secret.len()
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            gemini_api_key: SecretString::from("test-gemini-key".to_string()),
            youtube_api_key: Some(SecretString::from("test-youtube-key".to_string())),
            llm_api_base_url: "http://127.0.0.1:9/v1".to_string(),
            llm_model_name: "test-model".to_string(),
            llm_temperature: 0.3,
            youtube_api_base_url: "http://127.0.0.1:9/youtube/v3".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            session_expiration_hours: 1,
            max_upload_bytes: 1024 * 1024,
            max_context_chars: 10_000,
            video_context_chars: 200,
            quiz_pass_percent: 70,
            cors_allowed_origin: None,
            upstream_timeout_secs: 5,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}

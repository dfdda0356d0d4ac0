use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    clients::with_timeout,
    config::Config,
    constants::prompts::build_prompt,
    errors::{AppError, AppResult},
    models::domain::GenerationRequest,
};

/// Turns a generation request into text from a hosted model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<String>;
}

/// Chat-completions client for any OpenAI-compatible endpoint (Gemini by default).
pub struct OpenAiGenerationClient {
    client: Client<OpenAIConfig>,
    model_name: String,
    temperature: f32,
    max_context_chars: usize,
    timeout: Duration,
}

impl OpenAiGenerationClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.gemini_api_key.expose_secret())
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
            temperature: config.llm_temperature,
            max_context_chars: config.max_context_chars,
            timeout: Duration::from_secs(config.upstream_timeout_secs),
        }
    }
}

#[async_trait]
impl GenerationClient for OpenAiGenerationClient {
    async fn generate(&self, request: &GenerationRequest) -> AppResult<String> {
        let prompt = build_prompt(request, self.max_context_chars);
        log::debug!(
            "Calling model {} for {:?} ({} prompt chars)",
            self.model_name,
            request.mode,
            prompt.len()
        );

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .temperature(self.temperature)
            .build()?;

        let call = async {
            self.client
                .chat()
                .create(chat_request)
                .await
                .map_err(AppError::from)
        };
        let response = with_timeout(self.timeout, "generation request", call)
            .await
            .map_err(|e| {
                log::warn!("Generation request for {:?} failed: {}", request.mode, e);
                e
            })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(AppError::Upstream(
                "generation service returned an empty response".to_string(),
            ));
        }

        Ok(content.to_string())
    }
}

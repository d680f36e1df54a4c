use std::{sync::Arc, time::Duration};

use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    constants::prompts::LOG_PREVIEW_CHARS,
    errors::CompletionError,
    models::domain::Completion,
};

/// A single-turn chat completion: one user prompt in, the reply text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn chat(&self, prompt: &str) -> Result<String, CompletionError>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

fn first_choice_text(reply: ChatCompletionReply) -> Result<String, CompletionError> {
    let choice = reply
        .choices
        .into_iter()
        .next()
        .ok_or(CompletionError::NoChoices)?;
    let content = choice
        .message
        .content
        .ok_or(CompletionError::MissingContent)?;
    Ok(content.trim().to_string())
}

/// Chat backend for any OpenAI-compatible `/chat/completions` endpoint.
///
/// Rate-limited and 5xx responses are retried only within the configured
/// retry window; anything else fails on the first attempt.
pub struct OpenAiChatBackend {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiChatBackend {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.llm_base_url.clone())
            .with_api_key(config.llm_api_key.expose_secret().to_string());

        let retry_policy = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(config.llm_retry_window()))
            .build();

        Self {
            client: Client::with_config(openai_config).with_backoff(retry_policy),
            model: config.llm_model.clone(),
        }
    }
}

#[async_trait]
impl ChatBackend for OpenAiChatBackend {
    async fn chat(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let reply: ChatCompletionReply = self.client.chat().create_byot(request).await?;
        first_choice_text(reply)
    }
}

/// Cuts `text` to at most [`LOG_PREVIEW_CHARS`] characters.
pub fn preview(text: &str) -> &str {
    match text.char_indices().nth(LOG_PREVIEW_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Fail-soft wrapper around a [`ChatBackend`]. Every fault is logged and
/// returned as [`Completion::Failed`]; nothing propagates to callers.
pub struct CompletionService {
    backend: Arc<dyn ChatBackend>,
    timeout: Option<Duration>,
}

impl CompletionService {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub async fn complete(&self, prompt: &str) -> Completion {
        log::info!("Sending prompt to model: {}", preview(prompt));

        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.backend.chat(prompt))
                .await
                .unwrap_or(Err(CompletionError::TimedOut(limit))),
            None => self.backend.chat(prompt).await,
        };

        match result {
            Ok(text) => {
                log::info!("Got response: {}", preview(&text));
                Completion::Text(text)
            }
            Err(err) => {
                log::error!("LLM call failed: {}", err);
                Completion::Failed(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(body: serde_json::Value) -> ChatCompletionReply {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_first_choice_text_is_trimmed() {
        let text = first_choice_text(reply(json!({
            "choices": [
                { "message": { "role": "assistant", "content": "  Plants make food.\n" } },
                { "message": { "role": "assistant", "content": "ignored" } }
            ]
        })))
        .unwrap();
        assert_eq!(text, "Plants make food.");
    }

    #[test]
    fn test_first_choice_text_errors() {
        let err = first_choice_text(reply(json!({ "choices": [] }))).unwrap_err();
        assert!(matches!(err, CompletionError::NoChoices));

        let err = first_choice_text(reply(json!({}))).unwrap_err();
        assert!(matches!(err, CompletionError::NoChoices));

        let err = first_choice_text(reply(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        })))
        .unwrap_err();
        assert!(matches!(err, CompletionError::MissingContent));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let short = "short prompt";
        assert_eq!(preview(short), short);

        let long = "é".repeat(LOG_PREVIEW_CHARS + 20);
        assert_eq!(preview(&long).chars().count(), LOG_PREVIEW_CHARS);
    }

    #[actix_web::test]
    async fn test_complete_returns_text() {
        let mut backend = MockChatBackend::new();
        backend
            .expect_chat()
            .withf(|prompt: &str| prompt == "Explain tides")
            .times(1)
            .returning(|_| Ok("The moon pulls the sea.".to_string()));

        let service = CompletionService::new(Arc::new(backend));
        let completion = service.complete("Explain tides").await;

        assert_eq!(completion, Completion::Text("The moon pulls the sea.".to_string()));
    }

    #[actix_web::test]
    async fn test_complete_converts_faults_to_failed() {
        let mut backend = MockChatBackend::new();
        backend
            .expect_chat()
            .times(1)
            .returning(|_| Err(CompletionError::MissingContent));

        let service = CompletionService::new(Arc::new(backend));
        let completion = service.complete("Explain tides").await;

        assert!(completion.is_failed());
        assert_eq!(completion.text(), "");
        assert_eq!(
            completion.failure_reason(),
            Some("LLM response choice had no text content")
        );
    }

    struct StalledBackend;

    #[async_trait]
    impl ChatBackend for StalledBackend {
        async fn chat(&self, _prompt: &str) -> Result<String, CompletionError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        }
    }

    #[actix_web::test]
    async fn test_complete_times_out() {
        let service = CompletionService::new(Arc::new(StalledBackend))
            .with_timeout(Some(Duration::from_millis(20)));

        let completion = service.complete("Explain tides").await;

        assert!(completion.is_failed());
        assert!(completion
            .failure_reason()
            .is_some_and(|reason| reason.contains("timed out")));
    }
}

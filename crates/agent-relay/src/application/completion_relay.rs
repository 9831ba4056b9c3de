//! Completion Relay (Use Case)
//!
//! Turns one text prompt into one completion call and back into plain text.

use std::sync::Arc;

use crate::domain::{CompletionError, RelayConfig, RelayError};
use crate::ports::{ChatMessage, CompletionProvider, CompletionResponse};

/// Stateless relay between a prompt and a completion provider
pub struct CompletionRelay {
    config: RelayConfig,
    provider: Arc<dyn CompletionProvider>,
}

impl CompletionRelay {
    pub fn new(config: RelayConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        Self { config, provider }
    }

    pub fn model(&self) -> &str {
        self.config.model()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Ask the provider to complete `prompt` as a single user message.
    ///
    /// The prompt is passed through untouched; empty input is allowed.
    pub async fn get_response(&self, prompt: &str) -> Result<String, RelayError> {
        let messages = [ChatMessage::user(prompt)];

        tracing::debug!(
            provider = self.provider_name(),
            model = self.model(),
            prompt_chars = prompt.chars().count(),
            "Sending prompt"
        );

        let response = match self.provider.complete(self.model(), &messages).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    provider = self.provider_name(),
                    model = self.model(),
                    error = %e,
                    "Completion call failed"
                );
                return Err(e.into());
            }
        };

        if let Some(usage) = &response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "Completion usage"
            );
        }

        let text = first_choice_text(response)?;
        tracing::debug!(response_chars = text.chars().count(), "Completion received");

        Ok(text)
    }
}

/// Extract `choices[0].message.content`
fn first_choice_text(response: CompletionResponse) -> Result<String, CompletionError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::malformed("response contained no choices"))?;

    choice
        .message
        .content
        .ok_or_else(|| CompletionError::malformed("first choice has no message content"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{Choice, ChoiceMessage, MessageRole};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Provider stub that records every call and replays a fixed outcome
    struct RecordingProvider {
        outcome: fn() -> Result<CompletionResponse, CompletionError>,
        calls: Mutex<Vec<(String, Vec<ChatMessage>)>>,
    }

    impl RecordingProvider {
        fn new(outcome: fn() -> Result<CompletionResponse, CompletionError>) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, Vec<ChatMessage>)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionProvider for RecordingProvider {
        async fn complete(
            &self,
            model: &str,
            messages: &[ChatMessage],
        ) -> Result<CompletionResponse, CompletionError> {
            self.calls
                .lock()
                .unwrap()
                .push((model.to_string(), messages.to_vec()));
            (self.outcome)()
        }

        fn provider_name(&self) -> &str {
            "recording"
        }
    }

    fn relay_with(provider: Arc<RecordingProvider>) -> CompletionRelay {
        let config = RelayConfig::new("gpt-3.5-turbo", "sk-test").unwrap();
        CompletionRelay::new(config, provider)
    }

    #[tokio::test]
    async fn test_returns_first_choice_text() {
        let provider = RecordingProvider::new(|| Ok(CompletionResponse::from_text("hi there")));
        let relay = relay_with(provider);

        let text = relay.get_response("hello").await.unwrap();
        assert_eq!(text, "hi there");
    }

    #[tokio::test]
    async fn test_sends_single_user_message_with_raw_prompt() {
        let provider = RecordingProvider::new(|| Ok(CompletionResponse::from_text("ok")));
        let relay = relay_with(provider.clone());

        let prompts = ["", "héllo 世界 🦀", "a/b?c=%20&d", "  padded  "];
        for prompt in prompts {
            relay.get_response(prompt).await.unwrap();
        }

        let calls = provider.calls();
        assert_eq!(calls.len(), prompts.len());
        for ((model, messages), prompt) in calls.iter().zip(prompts) {
            assert_eq!(model, "gpt-3.5-turbo");
            assert_eq!(messages, &vec![ChatMessage::user(prompt)]);
        }
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_upstream_error() {
        let provider =
            RecordingProvider::new(|| Err(CompletionError::Provider("rate limited".to_string())));
        let relay = relay_with(provider);

        let err = relay.get_response("fail").await.unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(err.to_string(), "Error calling completion API: rate limited");
    }

    #[tokio::test]
    async fn test_no_choices_is_malformed() {
        let provider = RecordingProvider::new(|| Ok(CompletionResponse::default()));
        let relay = relay_with(provider);

        let err = relay.get_response("hello").await.unwrap_err();
        assert!(matches!(
            err,
            RelayError::Upstream(CompletionError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_null_content_is_malformed() {
        let provider = RecordingProvider::new(|| {
            Ok(CompletionResponse {
                choices: vec![Choice {
                    index: 0,
                    message: ChoiceMessage {
                        role: MessageRole::Assistant,
                        content: None,
                    },
                    finish_reason: Some("tool_calls".to_string()),
                }],
                ..Default::default()
            })
        });
        let relay = relay_with(provider);

        let err = relay.get_response("hello").await.unwrap_err();
        assert!(err.to_string().contains("no message content"));
    }

    #[tokio::test]
    async fn test_repeated_calls_are_identical() {
        let provider = RecordingProvider::new(|| Ok(CompletionResponse::from_text("same")));
        let relay = relay_with(provider.clone());

        let first = relay.get_response("ping").await.unwrap();
        let second = relay.get_response("ping").await.unwrap();

        assert_eq!(first, second);
        let calls = provider.calls();
        assert_eq!(calls[0], calls[1]);
    }

    #[test]
    fn test_accessors() {
        let provider = RecordingProvider::new(|| Ok(CompletionResponse::default()));
        let relay = relay_with(provider);
        assert_eq!(relay.model(), "gpt-3.5-turbo");
        assert_eq!(relay.provider_name(), "recording");
    }
}

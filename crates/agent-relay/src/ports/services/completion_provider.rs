//! Completion Provider Port
//!
//! Abstract interface for chat completion calls. Any backend reachable as
//! "model name + message list -> text" satisfies it (OpenAI, a LiteLLM proxy,
//! Ollama, a test stub...).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::CompletionError;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    #[default]
    Assistant,
}

/// A message sent to the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Response from a completion call, shaped like the OpenAI chat API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated alternatives; only the first one is ever read
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Model that generated the response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Token usage statistics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

impl CompletionResponse {
    /// A response with a single assistant choice holding `text`
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            choices: vec![Choice {
                index: 0,
                message: ChoiceMessage {
                    role: MessageRole::Assistant,
                    content: Some(text.into()),
                },
                finish_reason: Some("stop".to_string()),
            }],
            model: None,
            usage: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: ChoiceMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub role: MessageRole,
    /// `null` when the provider produced no text
    #[serde(default)]
    pub content: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

/// Completion provider interface
///
/// # Example
///
/// ```rust,ignore
/// use agent_relay::{ChatMessage, CompletionError, CompletionProvider, CompletionResponse};
///
/// struct EchoProvider;
///
/// #[async_trait]
/// impl CompletionProvider for EchoProvider {
///     async fn complete(&self, _model: &str, messages: &[ChatMessage])
///         -> Result<CompletionResponse, CompletionError> {
///         Ok(CompletionResponse::from_text(&messages[0].content))
///     }
///
///     fn provider_name(&self) -> &str {
///         "echo"
///     }
/// }
/// ```
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for `messages` using `model`
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<CompletionResponse, CompletionError>;

    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;
}

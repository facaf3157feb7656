//! LLM provider trait and the error-as-text reply convention.

use crate::error::LlmError;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Outcome of one chat call, always renderable as text.
///
/// Backend failures are kept as values so the pipeline can place them in the
/// output where the model's answer would have gone.
#[derive(Debug)]
pub enum ChatReply {
    /// The model's trimmed completion text
    Completion(String),
    /// The call failed; `provider` is the display name used in the message
    Failed { provider: String, error: LlmError },
}

impl ChatReply {
    /// Build a reply from a provider result.
    pub fn from_result(provider: &str, result: Result<String, LlmError>) -> Self {
        match result {
            Ok(text) => ChatReply::Completion(text),
            Err(error) => ChatReply::Failed {
                provider: provider.to_string(),
                error,
            },
        }
    }

    pub fn is_completion(&self) -> bool {
        matches!(self, ChatReply::Completion(_))
    }

    /// Completion text, or `"<Provider> LLM Error: <detail>"`.
    pub fn into_text(self) -> String {
        match self {
            ChatReply::Completion(text) => text,
            failed => failed.to_string(),
        }
    }
}

impl fmt::Display for ChatReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatReply::Completion(text) => f.write_str(text),
            ChatReply::Failed { provider, error } => write!(f, "{provider} LLM Error: {error}"),
        }
    }
}

/// Trait that all LLM providers implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Box<dyn LlmProvider>` for dynamic dispatch).
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Display name used in error text (e.g., "OpenAI", "Grok").
    fn name(&self) -> &str;

    /// Send a single prompt and return the completion text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Per-request timeout for this provider.
    fn timeout(&self) -> Duration;

    /// Send a prompt; failures come back as [`ChatReply::Failed`], never as `Err`.
    async fn chat(&self, prompt: &str) -> ChatReply {
        let result = self.complete(prompt).await;
        if let Err(ref e) = result {
            tracing::warn!("{} chat call failed: {e}", self.name());
        }
        ChatReply::from_result(self.name(), result)
    }
}

//! OpenAI LLM provider using the Chat Completions API.
//!
//! The request and response handling here is shared by every
//! OpenAI-compatible backend; Grok and Mistral wrap it with their own
//! endpoint, model, and credential name.

use super::provider::LlmProvider;
use crate::config::ProviderConfig;
use crate::error::LlmError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// OpenAI provider using Chat Completions API.
pub struct OpenAiProvider {
    label: &'static str,
    key_env_var: &'static str,
    api_key: String,
    settings: ProviderConfig,
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, settings: &ProviderConfig, timeout: Duration) -> Self {
        Self::compatible("OpenAI", "OPENAI_API_KEY", api_key, settings, timeout)
    }

    /// Create a client for another OpenAI-compatible backend.
    ///
    /// `label` prefixes error text and `key_env_var` is named in the 403 hint.
    pub fn compatible(
        label: &'static str,
        key_env_var: &'static str,
        api_key: &str,
        settings: &ProviderConfig,
        timeout: Duration,
    ) -> Self {
        Self {
            label,
            key_env_var,
            api_key: api_key.to_string(),
            settings: settings.clone(),
            client: reqwest::Client::new(),
            endpoint: settings.chat_url(),
            timeout,
        }
    }

    /// Model name sent with each request.
    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn build_request(&self, prompt: &str) -> ChatRequest {
        let mut messages = Vec::with_capacity(2);
        if let Some(ref system) = self.settings.system_prompt {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        });

        ChatRequest {
            model: self.settings.model.clone(),
            messages,
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
            stream: false,
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            }
        } else {
            LlmError::Transport(e.to_string())
        }
    }
}

// --- Request types ---

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

// --- Response types ---

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        self.label
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let start = Instant::now();
        let body = self.build_request(prompt);

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(self.timeout())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(LlmError::Forbidden {
                env_var: self.key_env_var.to_string(),
            });
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(LlmError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let chat_resp: ChatResponse = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                LlmError::Parse(e.to_string())
            }
        })?;

        let text = chat_resp
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyChoices)?;

        tracing::debug!(
            "{} ({}) answered in {}ms",
            self.label,
            self.settings.model,
            start.elapsed().as_millis()
        );

        Ok(text.trim().to_string())
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

//! Grok (xAI) LLM provider (OpenAI-compatible API).
//!
//! xAI serves the same Chat Completions format as OpenAI, so this delegates
//! to `OpenAiProvider` with the xAI endpoint and a system message.

use super::openai::OpenAiProvider;
use super::provider::LlmProvider;
use crate::config::ProviderConfig;
use crate::error::LlmError;
use async_trait::async_trait;
use std::time::Duration;

/// Grok provider wrapping an OpenAI-compatible endpoint.
pub struct GrokProvider {
    inner: OpenAiProvider,
}

impl GrokProvider {
    pub fn new(api_key: &str, settings: &ProviderConfig, timeout: Duration) -> Self {
        Self {
            inner: OpenAiProvider::compatible("Grok", "GROK_API_KEY", api_key, settings, timeout),
        }
    }
}

#[async_trait]
impl LlmProvider for GrokProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.inner.complete(prompt).await
    }

    fn timeout(&self) -> Duration {
        self.inner.timeout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn settings_for(server: &MockServer) -> ProviderConfig {
        ProviderConfig {
            endpoint: format!("{}/v1", server.uri()),
            ..ProviderConfig::grok()
        }
    }

    #[tokio::test]
    async fn test_sends_system_message_and_zero_temperature() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer xai-key"))
            .and(body_partial_json(json!({
                "model": "grok-3-latest",
                "temperature": 0.0,
                "stream": false,
                "messages": [
                    { "role": "system", "content": "You are a helpful assistant." },
                    { "role": "user", "content": "explain" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "content": "\nexplained\n" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = GrokProvider::new("xai-key", &settings_for(&server), Duration::from_secs(5));
        assert_eq!(provider.chat("explain").await.into_text(), "explained");
    }

    #[tokio::test]
    async fn test_forbidden_names_grok_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("denied"))
            .mount(&server)
            .await;

        let provider = GrokProvider::new("", &settings_for(&server), Duration::from_secs(5));
        assert_eq!(
            provider.chat("x").await.into_text(),
            "Grok LLM Error: 403 Forbidden. Check your GROK_API_KEY and ensure it is valid and has access."
        );
    }

    #[test]
    fn test_name_and_timeout() {
        let provider = GrokProvider::new("k", &ProviderConfig::grok(), Duration::from_secs(60));
        assert_eq!(provider.name(), "Grok");
        assert_eq!(provider.timeout(), Duration::from_secs(60));
    }
}

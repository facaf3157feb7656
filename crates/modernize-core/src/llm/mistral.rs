//! Mistral LLM provider (OpenAI-compatible API).

use super::openai::OpenAiProvider;
use super::provider::LlmProvider;
use crate::config::ProviderConfig;
use crate::error::LlmError;
use async_trait::async_trait;
use std::time::Duration;

/// Mistral provider wrapping an OpenAI-compatible endpoint.
pub struct MistralProvider {
    inner: OpenAiProvider,
}

impl MistralProvider {
    pub fn new(api_key: &str, settings: &ProviderConfig, timeout: Duration) -> Self {
        Self {
            inner: OpenAiProvider::compatible(
                "Mistral",
                "MISTRAL_API_KEY",
                api_key,
                settings,
                timeout,
            ),
        }
    }
}

#[async_trait]
impl LlmProvider for MistralProvider {
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
        matchers::{body_partial_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn test_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(json!({
                "model": "mistral-medium",
                "stream": false,
                "messages": [{ "role": "user", "content": "pseudocode please" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "content": "1. read input" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let settings = ProviderConfig {
            endpoint: format!("{}/v1/", server.uri()),
            ..ProviderConfig::mistral()
        };
        let provider = MistralProvider::new("m-key", &settings, Duration::from_secs(5));
        assert_eq!(
            provider.chat("pseudocode please").await.into_text(),
            "1. read input"
        );
    }

    #[tokio::test]
    async fn test_unauthorised_is_plain_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("no key"))
            .mount(&server)
            .await;

        let settings = ProviderConfig {
            endpoint: server.uri(),
            ..ProviderConfig::mistral()
        };
        let provider = MistralProvider::new("", &settings, Duration::from_secs(5));
        assert_eq!(
            provider.chat("x").await.into_text(),
            "Mistral LLM Error: HTTP 401: no key"
        );
    }
}

//! Provider selection: maps a provider name to a constructed client.
//!
//! Credentials are resolved once into [`Credentials`] and passed in, so
//! nothing here reads the process environment on its own.

use super::grok::GrokProvider;
use super::mistral::MistralProvider;
use super::openai::OpenAiProvider;
use super::provider::LlmProvider;
use crate::config::LlmConfig;
use crate::error::ConfigError;
use std::fmt;
use std::time::Duration;

/// The supported backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Grok,
    Mistral,
}

impl ProviderKind {
    /// All providers, in menu order.
    pub const ALL: [ProviderKind; 3] = [ProviderKind::OpenAi, ProviderKind::Grok, ProviderKind::Mistral];

    /// Parse a provider name. `None` selects OpenAI; names match exactly.
    pub fn from_name(name: Option<&str>) -> Result<Self, ConfigError> {
        match name {
            None | Some("OpenAI") => Ok(ProviderKind::OpenAi),
            Some("Grok") => Ok(ProviderKind::Grok),
            Some("Mistral") => Ok(ProviderKind::Mistral),
            Some(other) => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Grok => "Grok",
            ProviderKind::Mistral => "Mistral",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// API keys for every provider, resolved once at startup.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub openai: Option<String>,
    pub grok: Option<String>,
    pub mistral: Option<String>,
}

impl Credentials {
    /// Resolve each provider's `api_key` setting (literal or `${ENV_VAR}`).
    pub fn resolve(config: &LlmConfig) -> Self {
        Self {
            openai: resolve_env_var(&config.openai.api_key),
            grok: resolve_env_var(&config.grok.api_key),
            mistral: resolve_env_var(&config.mistral.api_key),
        }
    }

    /// Read `OPENAI_API_KEY`, `GROK_API_KEY`, and `MISTRAL_API_KEY`.
    pub fn from_env() -> Self {
        Self::resolve(&LlmConfig::default())
    }

    pub fn for_provider(&self, kind: ProviderKind) -> Option<&str> {
        match kind {
            ProviderKind::OpenAi => self.openai.as_deref(),
            ProviderKind::Grok => self.grok.as_deref(),
            ProviderKind::Mistral => self.mistral.as_deref(),
        }
    }
}

// Keys never show up in logs or panics.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |key: &Option<String>| if key.is_some() { "<set>" } else { "<unset>" };
        f.debug_struct("Credentials")
            .field("openai", &mark(&self.openai))
            .field("grok", &mark(&self.grok))
            .field("mistral", &mark(&self.mistral))
            .finish()
    }
}

/// Factory that creates the appropriate provider from a name and config.
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create an LLM provider.
    ///
    /// # Arguments
    /// * `provider` - Provider name ("OpenAI", "Grok", "Mistral"); `None` falls
    ///   back to `config.provider`, then to OpenAI
    /// * `config` - The full LLM config section
    /// * `credentials` - Keys resolved at startup
    /// * `timeout` - Per-request network timeout
    ///
    /// Fails only for an unrecognised provider name. A missing key is logged
    /// and the backend's rejection later surfaces as error text.
    pub fn create(
        provider: Option<&str>,
        config: &LlmConfig,
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<Box<dyn LlmProvider>, ConfigError> {
        let kind = ProviderKind::from_name(provider.or(config.provider.as_deref()))?;
        let api_key = credentials.for_provider(kind).unwrap_or_else(|| {
            tracing::warn!("No API key configured for {kind}; requests will be rejected");
            ""
        });
        tracing::debug!("Selected LLM provider: {kind}");

        Ok(match kind {
            ProviderKind::OpenAi => Box::new(OpenAiProvider::new(api_key, &config.openai, timeout)),
            ProviderKind::Grok => Box::new(GrokProvider::new(api_key, &config.grok, timeout)),
            ProviderKind::Mistral => {
                Box::new(MistralProvider::new(api_key, &config.mistral, timeout))
            }
        })
    }
}

//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

/// Pipeline defaults applied when the caller does not override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Language the refactor step targets
    pub target_language: String,

    /// Whether to run the explanation step by default
    pub explain: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_language: "Python".to_string(),
            explain: false,
        }
    }
}

/// Resource limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// LLM call timeout in milliseconds
    pub llm_timeout_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            llm_timeout_ms: 60000,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// LLM provider configurations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider used when none is given explicitly ("OpenAI", "Grok", "Mistral")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// OpenAI configuration
    pub openai: ProviderConfig,

    /// Grok (xAI) configuration
    pub grok: ProviderConfig,

    /// Mistral configuration
    pub mistral: ProviderConfig,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: None,
            openai: ProviderConfig::openai(),
            grok: ProviderConfig::grok(),
            mistral: ProviderConfig::mistral(),
        }
    }
}

/// Settings for one OpenAI-compatible chat-completions backend.
///
/// Fields missing from a config section are not defaulted individually;
/// a partially written section fails to parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderConfig {
    /// Base URL; `/chat/completions` is appended
    pub endpoint: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Model name
    pub model: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Completion token cap, omitted from the request when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Optional system message sent before the user prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

impl ProviderConfig {
    pub fn openai() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1".to_string(),
            api_key: "${OPENAI_API_KEY}".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.2,
            max_tokens: Some(2048),
            system_prompt: None,
        }
    }

    pub fn grok() -> Self {
        Self {
            endpoint: "https://api.x.ai/v1".to_string(),
            api_key: "${GROK_API_KEY}".to_string(),
            model: "grok-3-latest".to_string(),
            temperature: 0.0,
            max_tokens: None,
            system_prompt: Some("You are a helpful assistant.".to_string()),
        }
    }

    pub fn mistral() -> Self {
        Self {
            endpoint: "https://api.mistral.ai/v1".to_string(),
            api_key: "${MISTRAL_API_KEY}".to_string(),
            model: "mistral-medium".to_string(),
            temperature: 0.2,
            max_tokens: None,
            system_prompt: None,
        }
    }

    /// Full chat-completions URL for this backend.
    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
    }
}

//! Error types for ModernizeAI.
//!
//! Only configuration problems and input decoding surface as `Err` to callers.
//! Backend failures are carried as [`LlmError`] inside a
//! [`ChatReply`](crate::llm::ChatReply) and rendered as text, so the pipeline
//! never aborts halfway through.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for ModernizeAI operations.
#[derive(Error, Debug)]
pub enum ModernizeError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input file not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Input file is not valid UTF-8 text
    #[error("Input is not valid UTF-8: {path} ({message})")]
    InvalidUtf8 { path: PathBuf, message: String },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// Provider name does not match any known backend
    #[error("Unknown LLM provider: {0} (expected one of: OpenAI, Grok, Mistral)")]
    UnknownProvider(String),
}

/// Failures of a single chat-completion round trip.
///
/// The `Display` text is what ends up in the pipeline output after the
/// `"<Provider> LLM Error: "` prefix.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Backend answered 403; almost always a bad or unauthorised key
    #[error("403 Forbidden. Check your {env_var} and ensure it is valid and has access.")]
    Forbidden { env_var: String },

    /// Any other non-2xx status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Request exceeded the per-call timeout
    #[error("request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Connection, DNS, or TLS failure
    #[error("request failed: {0}")]
    Transport(String),

    /// Response body was not the expected JSON shape
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Response had no usable first choice
    #[error("response contained no completion choices")]
    EmptyChoices,
}

/// Convenience type alias for ModernizeAI results.
pub type Result<T> = std::result::Result<T, ModernizeError>;

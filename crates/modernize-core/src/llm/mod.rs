//! LLM integration for code annotation and refactoring.
//!
//! Provides a provider abstraction over OpenAI-compatible chat backends
//! (OpenAI, Grok, Mistral) and the factory that picks one by name.

pub(crate) mod factory;
pub(crate) mod grok;
pub(crate) mod mistral;
pub(crate) mod openai;
pub(crate) mod provider;

pub use factory::{resolve_env_var, Credentials, LlmProviderFactory, ProviderKind};
pub use grok::GrokProvider;
pub use mistral::MistralProvider;
pub use openai::OpenAiProvider;
pub use provider::{ChatReply, LlmProvider};

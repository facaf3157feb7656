//! ModernizeAI Core - legacy code annotation and refactoring library.
//!
//! Sends legacy source code to an LLM chat backend and returns annotated
//! code, pseudocode, a refactor into a target language, and an optional
//! explanation of the refactor.
//!
//! # Architecture
//!
//! ```text
//! Code → Detect Language → Annotate → Pseudocode → Refactor → (Explain) → Result
//! ```
//!
//! Each arrow after detection is one blocking round trip to the selected
//! provider. Backend failures become text in the result; only configuration
//! mistakes are returned as errors.
//!
//! # Usage
//!
//! ```rust,ignore
//! use modernize_core::{Config, Modernizer};
//!
//! #[tokio::main]
//! async fn main() -> modernize_core::Result<()> {
//!     let modernizer = Modernizer::new(Config::load()?);
//!     let result = modernizer
//!         .process("      SUBROUTINE HELLO", true, "Python", Some("Mistral"))
//!         .await?;
//!     println!("{}", result.refactored_code);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod detect;
pub mod error;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod source;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use detect::{detect, LanguageDetector, LexerGuesser, SyntectGuesser};
pub use error::{ConfigError, LlmError, ModernizeError, Result};
pub use llm::{ChatReply, Credentials, LlmProvider, LlmProviderFactory, ProviderKind};
pub use output::{OutputFormat, OutputWriter};
pub use pipeline::{CodeCompanion, DEFAULT_TARGET_LANGUAGE};
pub use source::read_source;
pub use types::{PipelineResult, PipelineStep};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Entry point holding configuration and the credentials resolved from it.
pub struct Modernizer {
    config: Config,
    credentials: Credentials,
}

impl Modernizer {
    /// Create a modernizer, resolving provider credentials once.
    pub fn new(config: Config) -> Self {
        let credentials = Credentials::resolve(&config.llm);
        tracing::debug!("Initializing ModernizeAI v{VERSION} ({credentials:?})");
        Self::with_credentials(config, credentials)
    }

    pub fn with_credentials(config: Config, credentials: Credentials) -> Self {
        Self {
            config,
            credentials,
        }
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build a companion bound to the named provider.
    ///
    /// Fails before any network traffic if the name is not recognised.
    pub fn companion(&self, provider: Option<&str>) -> Result<CodeCompanion> {
        let client = LlmProviderFactory::create(
            provider,
            &self.config.llm,
            &self.credentials,
            self.config.llm_timeout(),
        )?;
        Ok(CodeCompanion::new(client))
    }

    /// Run the whole pipeline on `code`.
    pub async fn process(
        &self,
        code: &str,
        explain: bool,
        target_language: &str,
        provider: Option<&str>,
    ) -> Result<PipelineResult> {
        let companion = self.companion(provider)?;
        Ok(companion.process(code, explain, target_language).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_provider_fails_before_network() {
        let modernizer = Modernizer::with_credentials(Config::default(), Credentials::default());
        let err = modernizer
            .process("IDENTIFICATION DIVISION.", false, "Python", Some("Bard"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ModernizeError::Config(ConfigError::UnknownProvider(ref name)) if name == "Bard"
        ));
    }

    #[test]
    fn test_companion_uses_requested_provider() {
        let modernizer = Modernizer::with_credentials(Config::default(), Credentials::default());
        assert_eq!(modernizer.companion(None).unwrap().provider_name(), "OpenAI");
        assert_eq!(
            modernizer.companion(Some("Grok")).unwrap().provider_name(),
            "Grok"
        );
    }

    #[tokio::test]
    async fn test_process_against_local_backend() {
        use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "content": "dummy response" } }]
            })))
            .expect(4)
            .mount(&server)
            .await;

        let mut config = Config::default();
        config.llm.mistral.endpoint = server.uri();
        let credentials = Credentials {
            mistral: Some("m-key".to_string()),
            ..Credentials::default()
        };
        let modernizer = Modernizer::with_credentials(config, credentials);

        let result = modernizer
            .process(
                "IDENTIFICATION DIVISION.\nPROGRAM-ID. HELLO.",
                true,
                "Go",
                Some("Mistral"),
            )
            .await
            .unwrap();
        assert_eq!(result.language, "COBOL");
        assert_eq!(result.refactored_code, "--- Go Refactor ---\ndummy response");
        assert!(result.has_explanation());
    }
}

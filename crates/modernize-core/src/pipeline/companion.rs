//! Pipeline orchestration: detect, annotate, pseudocode, refactor, explain.
//!
//! Steps run strictly one after another against a single provider. Backend
//! failures arrive as text through [`ChatReply`] and are placed in the
//! result unchanged, so a run always yields every field.

use super::prompts;
use crate::detect::LanguageDetector;
use crate::llm::{ChatReply, LlmProvider};
use crate::types::{PipelineResult, PipelineStep};

/// Target language used when the caller has no preference.
pub const DEFAULT_TARGET_LANGUAGE: &str = "Python";

/// Runs the prompt sequence for one code sample against one provider.
pub struct CodeCompanion {
    provider: Box<dyn LlmProvider>,
    detector: LanguageDetector,
}

impl CodeCompanion {
    /// Create a companion with the default language detector.
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self::with_detector(provider, LanguageDetector::new())
    }

    pub fn with_detector(provider: Box<dyn LlmProvider>, detector: LanguageDetector) -> Self {
        Self { provider, detector }
    }

    /// Name of the provider every step talks to.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn detect_language(&self, code: &str) -> String {
        self.detector.detect(code)
    }

    pub async fn annotate_code(&self, code: &str, language: &str) -> String {
        self.ask(prompts::annotate_prompt(code, language)).await
    }

    pub async fn generate_pseudocode(&self, code: &str, language: &str) -> String {
        self.ask(prompts::pseudocode_prompt(code, language)).await
    }

    pub async fn suggest_refactor(&self, code: &str, language: &str, target: &str) -> String {
        self.ask(prompts::refactor_prompt(code, language, target))
            .await
    }

    pub async fn explain_refactor(&self, code: &str, language: &str, refactored: &str) -> String {
        self.ask(prompts::explain_prompt(code, language, refactored))
            .await
    }

    /// Run the full pipeline.
    ///
    /// `explain` adds a fourth backend call whose prompt includes the
    /// refactor output.
    pub async fn process(&self, code: &str, explain: bool, target_language: &str) -> PipelineResult {
        self.process_with_progress(code, explain, target_language, |_| {})
            .await
    }

    /// Run the full pipeline, calling `on_step` as each stage starts.
    pub async fn process_with_progress<F>(
        &self,
        code: &str,
        explain: bool,
        target_language: &str,
        on_step: F,
    ) -> PipelineResult
    where
        F: Fn(PipelineStep),
    {
        on_step(PipelineStep::Detect);
        let language = self.detect_language(code);
        tracing::info!(
            "Detected {language}; sending {} bytes to {}",
            code.len(),
            self.provider.name()
        );

        on_step(PipelineStep::Annotate);
        let annotated = self.annotate_code(code, &language).await;

        on_step(PipelineStep::Pseudocode);
        let pseudocode = self.generate_pseudocode(code, &language).await;

        on_step(PipelineStep::Refactor);
        let refactored = self.suggest_refactor(code, &language, target_language).await;

        let explanation = if explain {
            on_step(PipelineStep::Explain);
            let text = self.explain_refactor(code, &language, &refactored).await;
            format!("--- Refactor Explanation ---\n{text}")
        } else {
            String::new()
        };

        PipelineResult {
            annotated_code: format!("--- Annotated {language} Code ---\n{annotated}"),
            pseudocode: format!("--- Pseudocode ---\n{pseudocode}"),
            refactored_code: format!("--- {target_language} Refactor ---\n{refactored}"),
            explanation,
            language,
        }
    }

    async fn ask(&self, prompt: String) -> String {
        tracing::debug!("Prompt: {} bytes", prompt.len());
        let reply: ChatReply = self.provider.chat(&prompt).await;
        reply.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::LexerGuesser;
    use crate::error::LlmError;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Provider that records prompts and answers each call via `respond`.
    struct MockProvider {
        respond: Box<dyn Fn(usize) -> Result<String, LlmError> + Send + Sync>,
        prompts: Arc<Mutex<Vec<String>>>,
    }

    impl MockProvider {
        fn fixed(text: &str) -> Self {
            let text = text.to_string();
            Self {
                respond: Box::new(move |_| Ok(text.clone())),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing() -> Self {
            Self {
                respond: Box::new(|_| {
                    Err(LlmError::Http {
                        status: 500,
                        body: "upstream down".to_string(),
                    })
                }),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Answers "reply-N" for the Nth call (0-based).
        fn numbered() -> Self {
            Self {
                respond: Box::new(|idx| Ok(format!("reply-{idx}"))),
                prompts: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn prompts_handle(&self) -> Arc<Mutex<Vec<String>>> {
            self.prompts.clone()
        }
    }

    #[async_trait]
    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "Mock"
        }

        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            let idx = {
                let mut prompts = self.prompts.lock().unwrap();
                prompts.push(prompt.to_string());
                prompts.len() - 1
            };
            (self.respond)(idx)
        }

        fn timeout(&self) -> Duration {
            Duration::from_secs(60)
        }
    }

    struct NoGuess;

    impl LexerGuesser for NoGuess {
        fn guess(&self, _code: &str) -> Option<String> {
            None
        }
    }

    fn companion(provider: MockProvider) -> CodeCompanion {
        CodeCompanion::with_detector(
            Box::new(provider),
            LanguageDetector::with_guesser(Box::new(NoGuess)),
        )
    }

    const COBOL: &str = "IDENTIFICATION DIVISION.\nPROGRAM-ID. HELLO.";

    #[tokio::test]
    async fn test_cobol_end_to_end_with_dummy_response() {
        let agent = CodeCompanion::new(Box::new(MockProvider::fixed("dummy response")));
        let result = agent.process(COBOL, false, DEFAULT_TARGET_LANGUAGE).await;
        assert_eq!(result.language, "COBOL");
        assert!(result.annotated_code.contains("dummy response"));
    }

    #[tokio::test]
    async fn test_fortran_end_to_end() {
        let agent = CodeCompanion::new(Box::new(MockProvider::fixed("dummy response")));
        let result = agent
            .process("      SUBROUTINE HELLO", false, DEFAULT_TARGET_LANGUAGE)
            .await;
        assert_eq!(result.language, "FORTRAN");
    }

    #[tokio::test]
    async fn test_banners_wrap_each_field() {
        let agent = companion(MockProvider::fixed("dummy response"));
        let result = agent.process(COBOL, true, "Java").await;
        assert_eq!(
            result.annotated_code,
            "--- Annotated COBOL Code ---\ndummy response"
        );
        assert_eq!(result.pseudocode, "--- Pseudocode ---\ndummy response");
        assert_eq!(result.refactored_code, "--- Java Refactor ---\ndummy response");
        assert_eq!(
            result.explanation,
            "--- Refactor Explanation ---\ndummy response"
        );
    }

    #[tokio::test]
    async fn test_no_explanation_when_not_requested() {
        let provider = MockProvider::fixed("dummy response");
        let prompts = provider.prompts_handle();
        let agent = companion(provider);

        let result = agent.process(COBOL, false, "Python").await;
        assert!(result.explanation.is_empty());
        assert!(!result.has_explanation());
        assert!(!result.annotated_code.is_empty());
        assert!(!result.pseudocode.is_empty());
        assert!(!result.refactored_code.is_empty());
        assert_eq!(prompts.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_explanation_uses_refactor_output() {
        let provider = MockProvider::numbered();
        let prompts = provider.prompts_handle();
        let agent = companion(provider);

        let result = agent.process(COBOL, true, "Go").await;
        assert!(result.has_explanation());
        assert!(result.refactored_code.ends_with("reply-2"));
        assert!(result.explanation.ends_with("reply-3"));

        let prompts = prompts.lock().unwrap();
        assert_eq!(prompts.len(), 4);
        assert!(prompts[0].starts_with("Add clear inline comments to the following COBOL code"));
        assert!(prompts[1].contains("pseudocode"));
        assert!(prompts[2].contains("clean, modular Go code"));
        assert!(prompts[3].contains("Refactored code:\nreply-2"));
    }

    #[tokio::test]
    async fn test_failures_pass_through_as_text() {
        let agent = companion(MockProvider::failing());
        let result = agent.process(COBOL, true, "Python").await;
        let expected = "Mock LLM Error: HTTP 500: upstream down";
        assert_eq!(result.language, "COBOL");
        assert!(result.annotated_code.ends_with(expected));
        assert!(result.pseudocode.ends_with(expected));
        assert!(result.refactored_code.ends_with(expected));
        assert!(result.explanation.ends_with(expected));
    }

    #[tokio::test]
    async fn test_empty_code_still_completes() {
        let agent = companion(MockProvider::fixed("ok"));
        let result = agent.process("", false, "Python").await;
        assert_eq!(result.language, "Unknown");
        assert_eq!(result.annotated_code, "--- Annotated Unknown Code ---\nok");
    }

    #[tokio::test]
    async fn test_repeat_runs_are_identical() {
        let agent = companion(MockProvider::fixed("dummy response"));
        let first = agent.process(COBOL, true, "C#").await;
        let second = agent.process(COBOL, true, "C#").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_progress_reports_steps_in_order() {
        let agent = companion(MockProvider::fixed("x"));
        let seen = Mutex::new(Vec::new());
        agent
            .process_with_progress(COBOL, true, "Python", |step| {
                seen.lock().unwrap().push(step)
            })
            .await;
        assert_eq!(
            seen.into_inner().unwrap(),
            vec![
                PipelineStep::Detect,
                PipelineStep::Annotate,
                PipelineStep::Pseudocode,
                PipelineStep::Refactor,
                PipelineStep::Explain,
            ]
        );
    }
}

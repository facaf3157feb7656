//! Configuration validation with range checks.

use crate::error::ConfigError;
use crate::llm::ProviderKind;

use super::{Config, ProviderConfig};

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.llm_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "limits.llm_timeout_ms must be > 0".into(),
            ));
        }
        if self.pipeline.target_language.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "pipeline.target_language must not be empty".into(),
            ));
        }
        if let Some(ref name) = self.llm.provider {
            ProviderKind::from_name(Some(name))?;
        }
        validate_provider("llm.openai", &self.llm.openai)?;
        validate_provider("llm.grok", &self.llm.grok)?;
        validate_provider("llm.mistral", &self.llm.mistral)?;
        Ok(())
    }
}

fn validate_provider(section: &str, cfg: &ProviderConfig) -> Result<(), ConfigError> {
    if cfg.endpoint.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{section}.endpoint must not be empty"
        )));
    }
    if cfg.model.trim().is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "{section}.model must not be empty"
        )));
    }
    if !(0.0..=2.0).contains(&cfg.temperature) {
        return Err(ConfigError::ValidationError(format!(
            "{section}.temperature must be between 0.0 and 2.0"
        )));
    }
    if cfg.max_tokens == Some(0) {
        return Err(ConfigError::ValidationError(format!(
            "{section}.max_tokens must be > 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.limits.llm_timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("llm_timeout_ms"));
    }

    #[test]
    fn test_validate_rejects_blank_target_language() {
        let mut config = Config::default();
        config.pipeline.target_language = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("target_language"));
    }

    #[test]
    fn test_validate_rejects_unknown_default_provider() {
        let mut config = Config::default();
        config.llm.provider = Some("Gemini".to_string());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProvider(ref name) if name == "Gemini"));
    }

    #[test]
    fn test_validate_rejects_out_of_range_temperature() {
        let mut config = Config::default();
        config.llm.grok.temperature = 3.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("llm.grok.temperature"));

        config.llm.grok.temperature = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = Config::default();
        config.llm.mistral.model = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("llm.mistral.model"));
    }

    #[test]
    fn test_validate_rejects_zero_max_tokens() {
        let mut config = Config::default();
        config.llm.openai.max_tokens = Some(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("llm.openai.max_tokens"));
    }
}

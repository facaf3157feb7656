//! The `modernize process` command: run the full pipeline on one sample.

mod input;
pub mod types;

pub use input::CodeInput;
pub use types::OutputFormat;

use clap::Args;
use modernize_core::{Config, Modernizer, OutputWriter, PipelineStep};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the `process` command.
#[derive(Args, Debug, Default)]
pub struct ProcessArgs {
    /// Source file to process ("-" reads stdin)
    pub input: Option<PathBuf>,

    /// Inline source code, used when no file is given
    #[arg(long)]
    pub code: Option<String>,

    /// Also explain the refactor (one extra backend call)
    #[arg(short, long)]
    pub explain: bool,

    /// Target language for the refactor (defaults to config, then Python)
    #[arg(short, long)]
    pub target: Option<String>,

    /// LLM provider: OpenAI, Grok, or Mistral
    #[arg(short, long, env = "MODERNIZE_PROVIDER")]
    pub provider: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

/// Execute the process command.
pub async fn execute(args: ProcessArgs, config: Config) -> anyhow::Result<()> {
    let explain = args.explain || config.pipeline.explain;
    let target = args
        .target
        .clone()
        .unwrap_or_else(|| config.pipeline.target_language.clone());

    // Provider selection happens before reading input so a bad name fails fast.
    let modernizer = Modernizer::new(config);
    let companion = modernizer.companion(args.provider.as_deref())?;

    let code = CodeInput::select(args.input.as_deref(), args.code.as_deref())
        .load()
        .await?;
    tracing::info!(
        "Processing {} bytes with {} (target: {target}, explain: {explain})",
        code.len(),
        companion.provider_name()
    );

    let spinner = (!args.no_progress).then(create_spinner);
    let result = companion
        .process_with_progress(&code, explain, &target, |step: PipelineStep| {
            if let Some(ref pb) = spinner {
                pb.set_message(step.to_string());
            }
        })
        .await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let pretty = matches!(args.format, OutputFormat::Json);
    if let Some(ref output_path) = args.output {
        let file = File::create(output_path)?;
        let mut writer = OutputWriter::new(BufWriter::new(file), args.format.into(), pretty);
        writer.write(&result)?;
        writer.flush()?;
        tracing::info!("Output written to {:?}", output_path);
    } else {
        let mut writer = OutputWriter::new(std::io::stdout().lock(), args.format.into(), pretty);
        writer.write(&result)?;
        writer.flush()?;
    }

    Ok(())
}

fn create_spinner() -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_args_default_format_is_text() {
        let args = ProcessArgs::default();
        assert!(matches!(args.format, OutputFormat::Text));
    }

    #[test]
    fn process_args_default_option_fields_are_none() {
        let args = ProcessArgs::default();
        assert!(args.input.is_none());
        assert!(args.code.is_none());
        assert!(args.target.is_none());
        assert!(args.provider.is_none());
        assert!(args.output.is_none());
        assert!(!args.explain);
    }

    #[tokio::test]
    async fn unknown_provider_fails_before_reading_input() {
        let args = ProcessArgs {
            input: Some(PathBuf::from("/definitely/not/here.cob")),
            provider: Some("Watson".to_string()),
            no_progress: true,
            ..ProcessArgs::default()
        };
        let err = execute(args, Config::default()).await.unwrap_err();
        assert!(err.to_string().contains("Unknown LLM provider: Watson"));
    }
}

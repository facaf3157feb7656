//! The `modernize detect` command: language detection only, no network.

use crate::cli::process::CodeInput;
use clap::Args;
use modernize_core::LanguageDetector;
use std::path::PathBuf;

/// Arguments for the `detect` command.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Source file to inspect ("-" reads stdin)
    pub input: Option<PathBuf>,

    /// Inline source code, used when no file is given
    #[arg(long)]
    pub code: Option<String>,
}

/// Execute the detect command.
pub async fn execute(args: DetectArgs) -> anyhow::Result<()> {
    let code = CodeInput::select(args.input.as_deref(), args.code.as_deref())
        .load()
        .await?;
    let language = LanguageDetector::new().detect(&code);
    println!("{language}");
    Ok(())
}

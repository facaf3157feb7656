//! ModernizeAI CLI - annotate, explain, and refactor legacy source code.
//!
//! Sends a legacy code sample to an LLM backend and prints the detected
//! language, annotated code, pseudocode, a refactor into a target language,
//! and optionally an explanation of the refactor.
//!
//! # Usage
//!
//! ```bash
//! # Process a COBOL file with the default provider
//! modernize process payroll.cob
//!
//! # Refactor into Go via Mistral, with an explanation, as JSON
//! modernize process payroll.cob --target Go --provider Mistral --explain --format json
//!
//! # Detect the language only
//! modernize detect --code "      SUBROUTINE HELLO"
//!
//! # View configuration
//! modernize config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// ModernizeAI - annotate, explain, and refactor legacy source code with LLMs.
#[derive(Parser, Debug)]
#[command(name = "modernize")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Annotate, summarise, and refactor a code sample
    Process(cli::process::ProcessArgs),

    /// Detect the language of a code sample without calling any backend
    Detect(cli::detect::DetectArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match modernize_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `modernize config path`."
            );
            modernize_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("ModernizeAI v{}", modernize_core::VERSION);

    match cli.command {
        Commands::Process(args) => cli::process::execute(args, config).await,
        Commands::Detect(args) => cli::detect::execute(args).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}

//! Modernization pipeline components.
//!
//! - **prompts**: Prompt templates for each step
//! - **companion**: Orchestrates detection and the sequential backend calls

pub mod companion;
pub mod prompts;

// Re-exports for convenient access
pub use companion::{CodeCompanion, DEFAULT_TARGET_LANGUAGE};

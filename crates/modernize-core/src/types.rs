//! Core data types produced by the modernization pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The complete output for one pipeline run.
///
/// Every text field is always present. A failed backend call leaves its
/// error text where the model's answer would have been.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Detected source language ("COBOL", "FORTRAN", "Unknown", ...)
    pub language: String,

    /// Source with inline comments, under an "Annotated" banner
    pub annotated_code: String,

    /// Plain-language step list, under a "Pseudocode" banner
    pub pseudocode: String,

    /// Rewrite in the target language, under a "<target> Refactor" banner
    pub refactored_code: String,

    /// Refactor explanation; empty exactly when it was not requested
    pub explanation: String,
}

impl PipelineResult {
    pub fn has_explanation(&self) -> bool {
        !self.explanation.is_empty()
    }
}

/// Stages reported to a progress callback as they start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    Detect,
    Annotate,
    Pseudocode,
    Refactor,
    Explain,
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PipelineStep::Detect => "Detecting language",
            PipelineStep::Annotate => "Annotating code",
            PipelineStep::Pseudocode => "Writing pseudocode",
            PipelineStep::Refactor => "Refactoring",
            PipelineStep::Explain => "Explaining refactor",
        };
        f.write_str(label)
    }
}

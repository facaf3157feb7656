//! Output formatting for pipeline results.
//!
//! Results render either as readable sections (the banners already carried
//! by each field) or as a single JSON object.

use crate::types::PipelineResult;
use std::io::{self, Write};

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable sections
    Text,
    /// Single JSON object
    Json,
}

impl OutputFormat {
    /// Parse format from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A writer that renders pipeline results as text or JSON.
pub struct OutputWriter<W: Write> {
    writer: W,
    format: OutputFormat,
    pretty: bool,
}

impl<W: Write> OutputWriter<W> {
    /// Create a new output writer.
    ///
    /// `pretty` only affects JSON output.
    pub fn new(writer: W, format: OutputFormat, pretty: bool) -> Self {
        Self {
            writer,
            format,
            pretty,
        }
    }

    /// Write a single result.
    pub fn write(&mut self, result: &PipelineResult) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut self.writer, result)
                        .map_err(io::Error::other)?;
                } else {
                    serde_json::to_writer(&mut self.writer, result).map_err(io::Error::other)?;
                }
                writeln!(self.writer)?;
            }
            OutputFormat::Text => {
                self.writer.write_all(to_text(result).as_bytes())?;
            }
        }
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Consume the writer and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Render a result as readable sections, skipping an empty explanation.
pub fn to_text(result: &PipelineResult) -> String {
    let mut out = format!("Detected Language: {}\n\n", result.language);
    for section in [
        &result.annotated_code,
        &result.pseudocode,
        &result.refactored_code,
        &result.explanation,
    ] {
        if section.is_empty() {
            continue;
        }
        out.push_str(section);
        out.push_str("\n\n");
    }
    out
}

/// Convenience function to serialize a result to a JSON string.
pub fn to_json(result: &PipelineResult, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
}

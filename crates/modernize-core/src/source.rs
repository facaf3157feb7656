//! Reading code samples from files.
//!
//! Uploaded files are decoded strictly as UTF-8; legacy encodings such as
//! EBCDIC must be converted before they reach the pipeline.

use crate::error::{ModernizeError, Result};
use std::path::Path;

/// Read a source file and decode it as UTF-8.
///
/// A leading byte-order mark is dropped.
pub async fn read_source(path: &Path) -> Result<String> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ModernizeError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    decode_source(path, bytes)
}

fn decode_source(path: &Path, bytes: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(bytes).map_err(|e| ModernizeError::InvalidUtf8 {
        path: path.to_path_buf(),
        message: e.utf8_error().to_string(),
    })?;
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => Ok(stripped.to_string()),
        None => Ok(text),
    }
}

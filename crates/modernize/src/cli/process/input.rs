//! Resolving the code sample from a file, `--code`, or stdin.

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Where the code sample comes from. A file wins over inline code.
#[derive(Debug, PartialEq, Eq)]
pub enum CodeInput {
    File(PathBuf),
    Inline(String),
    Stdin,
}

impl CodeInput {
    pub fn select(file: Option<&Path>, code: Option<&str>) -> Self {
        match (file, code) {
            (Some(path), _) if path.as_os_str() == "-" => CodeInput::Stdin,
            (Some(path), _) => {
                let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
                CodeInput::File(PathBuf::from(expanded))
            }
            (None, Some(code)) => CodeInput::Inline(code.to_string()),
            (None, None) => CodeInput::Stdin,
        }
    }

    /// Load the code text.
    pub async fn load(self) -> anyhow::Result<String> {
        match self {
            CodeInput::File(path) => {
                tracing::debug!("Reading source from {:?}", path);
                Ok(modernize_core::read_source(&path).await?)
            }
            CodeInput::Inline(code) => Ok(code),
            CodeInput::Stdin => {
                let mut stdin = std::io::stdin();
                if stdin.is_terminal() {
                    anyhow::bail!("No input given: pass a FILE, --code TEXT, or pipe source on stdin");
                }
                let mut buf = Vec::new();
                stdin.read_to_end(&mut buf)?;
                String::from_utf8(buf)
                    .map_err(|e| anyhow::anyhow!("stdin is not valid UTF-8: {}", e.utf8_error()))
            }
        }
    }
}

//! Best-effort source language detection.
//!
//! A lexer guesser proposes a grammar name, which is folded onto a small set
//! of legacy language names. When the guesser has nothing useful to say, an
//! ordered list of keyword checks on the code body takes over.

use syntect::parsing::SyntaxSet;

/// Returned when neither the lexer nor the keyword checks recognise the code.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Legacy-language keywords and their display names, scanned in order.
/// The first key found inside the uppercased lexer name wins.
pub const LEXER_LANGUAGE_MAP: &[(&str, &str)] = &[
    ("COBOL", "COBOL"),
    ("FORTRAN", "FORTRAN"),
    ("ABAP", "ABAP"),
    ("PL/I", "PL/I"),
    ("PASCAL", "Pascal"),
    ("ADA", "Ada"),
    ("RPG", "RPG"),
    ("ASSEMBLY", "Assembly"),
    ("ALGOL", "Algol"),
    ("BASIC", "BASIC"),
    ("CLIPPER", "Clipper"),
    ("DCL", "DCL"),
    ("MUMPS", "MUMPS"),
    ("JCL", "JCL"),
    ("TACL", "TACL"),
    ("REXX", "REXX"),
    ("VHDL", "VHDL"),
    ("VERILOG", "Verilog"),
];

/// Lexer names that mean "no grammar matched".
const TEXT_ONLY_NAMES: &[&str] = &["TEXT ONLY", "PLAIN TEXT"];

/// Something that can guess a syntax grammar name for a code sample.
pub trait LexerGuesser: Send + Sync {
    /// Return the guessed grammar name, or `None` if nothing matched.
    fn guess(&self, code: &str) -> Option<String>;
}

/// Guesser backed by syntect's bundled Sublime Text grammars.
///
/// Matching uses each grammar's first-line pattern (shebangs, XML prologs,
/// editor modelines) against the first non-blank line of the sample.
pub struct SyntectGuesser {
    syntaxes: SyntaxSet,
}

impl SyntectGuesser {
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
        }
    }
}

impl Default for SyntectGuesser {
    fn default() -> Self {
        Self::new()
    }
}

impl LexerGuesser for SyntectGuesser {
    fn guess(&self, code: &str) -> Option<String> {
        let first_line = code.lines().find(|line| !line.trim().is_empty())?;
        self.syntaxes
            .find_syntax_by_first_line(first_line)
            .map(|syntax| syntax.name.clone())
    }
}

/// Language detector combining a lexer guess with keyword fallbacks.
pub struct LanguageDetector {
    guesser: Box<dyn LexerGuesser>,
}

impl LanguageDetector {
    /// Detector using the default syntect guesser.
    pub fn new() -> Self {
        Self::with_guesser(Box::new(SyntectGuesser::new()))
    }

    pub fn with_guesser(guesser: Box<dyn LexerGuesser>) -> Self {
        Self { guesser }
    }

    /// Detect the language of `code`. Always returns a non-empty label.
    pub fn detect(&self, code: &str) -> String {
        let guessed = self
            .guesser
            .guess(code)
            .map(|name| name.to_uppercase())
            .filter(|name| !name.trim().is_empty() && !TEXT_ONLY_NAMES.contains(&name.as_str()));

        match guessed {
            Some(name) => {
                let label = map_lexer_name(&name);
                tracing::debug!("Lexer guessed {name:?}, labelled as {label:?}");
                label
            }
            None => {
                let label = heuristic_language(code);
                tracing::debug!("No usable lexer guess, keyword fallback gave {label:?}");
                label.to_string()
            }
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the language of `code` with a freshly built default detector.
///
/// Loading the grammar set is not free; hold a [`LanguageDetector`] when
/// detecting more than once.
pub fn detect(code: &str) -> String {
    LanguageDetector::new().detect(code)
}

/// Fold an uppercased lexer name onto a legacy display name, if one applies.
fn map_lexer_name(name: &str) -> String {
    LEXER_LANGUAGE_MAP
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| name.to_string())
}

/// Ordered keyword checks on the code body. First match wins.
pub fn heuristic_language(code: &str) -> &'static str {
    let upper = code.to_uppercase();
    if upper.contains("IDENTIFICATION DIVISION") {
        "COBOL"
    } else if upper.contains("PROGRAM") && upper.contains("PROCEDURE DIVISION") {
        "COBOL"
    } else if upper.contains("SUBROUTINE") || upper.contains("COMMON") {
        "FORTRAN"
    } else if upper.contains("DATA BEGIN") || upper.contains("ENDMODULE") {
        "ABAP"
    } else {
        UNKNOWN_LANGUAGE
    }
}

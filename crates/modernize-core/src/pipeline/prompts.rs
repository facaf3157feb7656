//! Prompt templates for the four pipeline steps.

/// Ask for inline comments in the source language's own comment syntax.
pub fn annotate_prompt(code: &str, language: &str) -> String {
    format!(
        "Add clear inline comments to the following {language} code to explain its logic. \
         Keep the original code structure and add comments in the style of the language. \
         If the language uses unusual comment syntax, use it appropriately.\n\n\
         {code}"
    )
}

/// Ask for a plain-English step list.
pub fn pseudocode_prompt(code: &str, language: &str) -> String {
    format!(
        "Read the following {language} code and write high-level pseudocode in plain English. \
         Focus on clarity and main logic steps. Use bullet points or numbered steps if helpful.\n\n\
         {code}"
    )
}

/// Ask for an idiomatic rewrite in `target`.
pub fn refactor_prompt(code: &str, language: &str, target: &str) -> String {
    format!(
        "Refactor the following {language} code into clean, modular {target} code. \
         Use modern best practices, meaningful function and variable names, and add docstrings \
         or comments as appropriate. \
         If the code is procedural, suggest splitting into functions or classes where possible.\n\n\
         {code}"
    )
}

/// Ask for the reasoning behind a refactor, given both versions.
pub fn explain_prompt(code: &str, language: &str, refactored: &str) -> String {
    format!(
        "Explain the main changes and reasoning behind refactoring this {language} code \
         into the following code:\n\n\
         Original {language} code:\n{code}\n\n\
         Refactored code:\n{refactored}\n\n\
         Focus on modularity, readability, maintainability, and any language-specific improvements."
    )
}

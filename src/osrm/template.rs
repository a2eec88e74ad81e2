//! Placeholder scanning and replacement
//!
//!     Instruction templates interleave literal text with `{token}` placeholders.
//!     The scanner is a logos lexer over three shapes: a balanced placeholder, a
//!     stray brace, and a run of literal text. Replacement maps each placeholder
//!     name through the token vocabulary; spellings outside the vocabulary stay in
//!     the output verbatim, braces included, which is what lets newer language data
//!     carry tokens an older build does not know.
//!
//!     Unterminated placeholders are literal text. `"{"`, `"{way"`, and a bare
//!     `"}"` all pass through unchanged.

use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::osrm::token::TokenType;

#[derive(Logos, Debug, PartialEq, Clone)]
enum TemplateToken {
    // A whole {name} span. Longest match wins over the bare brace below.
    #[regex(r"\{[^{}]*\}")]
    Placeholder,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    #[regex(r"[^{}]+")]
    Text,
}

/// Replaces every known `{token}` in `template` using the given interpolator.
///
/// Unknown placeholders and unmatched braces are preserved literally.
pub fn replace_tokens<F>(template: &str, mut interpolator: F) -> String
where
    F: FnMut(TokenType) -> String,
{
    let mut lexer = TemplateToken::lexer(template);
    let mut result = String::with_capacity(template.len());
    while let Some(token) = lexer.next() {
        let slice = lexer.slice();
        match token {
            Ok(TemplateToken::Placeholder) => {
                let name = &slice[1..slice.len() - 1];
                match name.parse::<TokenType>() {
                    Ok(kind) => result.push_str(&interpolator(kind)),
                    Err(_) => result.push_str(slice),
                }
            }
            // Stray braces and text pass through; the lexer cannot fail since
            // the patterns cover every input byte.
            _ => result.push_str(slice),
        }
    }
    result
}

static DOUBLE_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s\s").expect("double-space pattern is valid"));

/// Collapses doubled whitespace left behind by empty replacements.
pub fn collapse_spaces(text: &str) -> String {
    DOUBLE_SPACE.replace_all(text, " ").into_owned()
}

/// Uppercases the first letter, leaving the rest of the string untouched.
pub fn sentence_cased(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

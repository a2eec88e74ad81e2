//! Error types for language table access

use std::fmt;

/// Errors that can occur while loading or navigating a language table.
#[derive(Debug)]
pub enum LanguageError {
    /// The language file does not carry the requested version table.
    UnknownVersion(String),
    /// A key path the formatter relies on is absent from the language table.
    MissingEntry { path: String },
    /// The language file is not valid JSON in the expected layout.
    Parse(serde_json::Error),
}

impl LanguageError {
    pub(crate) fn missing(path: impl Into<String>) -> LanguageError {
        LanguageError::MissingEntry { path: path.into() }
    }
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageError::UnknownVersion(version) => {
                write!(f, "language file has no version table for {}", version)
            }
            LanguageError::MissingEntry { path } => {
                write!(f, "language table is missing entry {}", path)
            }
            LanguageError::Parse(err) => {
                write!(f, "invalid language file: {}", err)
            }
        }
    }
}

impl std::error::Error for LanguageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LanguageError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LanguageError {
    fn from(err: serde_json::Error) -> Self {
        LanguageError::Parse(err)
    }
}

//! Main module for the routetext library functionality

pub mod error;
pub mod formatter;
pub mod grammar;
pub mod language;
pub mod phrase;
pub mod step;
pub mod template;
pub mod token;

pub use error::LanguageError;
pub use formatter::{FormatOptions, InstructionFormatter};
pub use language::Language;
pub use phrase::PhraseName;
pub use step::RouteStep;
pub use token::TokenType;

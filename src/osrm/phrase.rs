//! Names of the multi-instruction phrase templates
//!
//!     Phrases combine whole instructions rather than step fields: "turn left, then
//!     merge", "in 500 feet, turn left". Their templates live in the language table
//!     under the `phrase` key and use the phrase-level token kinds
//!     (`{instruction_one}`, `{instruction_two}`, `{distance}`). The name-and-ref
//!     phrase is the exception; the formatter uses it internally to join a way name
//!     with its route code.

use std::fmt;
use std::str::FromStr;

/// Name of a phrase template, keyed into the language table's `phrase` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseName {
    /// "In {distance}, {instruction_one}"
    InstructionWithDistance,
    /// "{instruction_one}, then {instruction_two}"
    TwoInstructions,
    /// "{instruction_one}, then, in {distance}, {instruction_two}"
    TwoInstructionsWithDistance,
    /// "{way_name} ({ref})"
    NameWithCode,
}

impl PhraseName {
    pub const ALL: [PhraseName; 4] = [
        PhraseName::InstructionWithDistance,
        PhraseName::TwoInstructions,
        PhraseName::TwoInstructionsWithDistance,
        PhraseName::NameWithCode,
    ];

    /// The key of this phrase in the language table.
    pub fn as_str(self) -> &'static str {
        match self {
            PhraseName::InstructionWithDistance => "one in distance",
            PhraseName::TwoInstructions => "two linked",
            PhraseName::TwoInstructionsWithDistance => "two linked by distance",
            PhraseName::NameWithCode => "name and ref",
        }
    }
}

impl fmt::Display for PhraseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that names no known phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPhrase(pub String);

impl fmt::Display for UnknownPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown phrase name: {}", self.0)
    }
}

impl std::error::Error for UnknownPhrase {}

impl FromStr for PhraseName {
    type Err = UnknownPhrase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = match s {
            "one in distance" => PhraseName::InstructionWithDistance,
            "two linked" => PhraseName::TwoInstructions,
            "two linked by distance" => PhraseName::TwoInstructionsWithDistance,
            "name and ref" => PhraseName::NameWithCode,
            _ => return Err(UnknownPhrase(s.to_string())),
        };
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_all_names() {
        for name in PhraseName::ALL {
            assert_eq!(name.as_str().parse::<PhraseName>().unwrap(), name);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("one_in_distance".parse::<PhraseName>().is_err());
    }
}

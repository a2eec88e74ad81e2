//! Token kinds for instruction templates
//!
//!     Instruction templates carry `{token}` placeholders that classify the substring
//!     to be interpolated: the way's name, its destination signage, an exit code, a
//!     lane instruction, and so on. This module is the vocabulary of those kinds.
//!
//!     The set is closed on purpose. The wire form of each kind (its template
//!     spelling) is the stable contract; consumers compare by value, and unknown
//!     spellings are left to the template scanner, which preserves them literally.
//!     See [template](crate::osrm::template) for the scanning side.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic role of a `{token}` placeholder inside an instruction template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// The name of the road, `{way_name}`.
    #[serde(rename = "way_name")]
    WayName,
    /// Destination signage, `{destination}`.
    #[serde(rename = "destination")]
    Destination,
    /// The name of a rotary, `{rotary_name}`.
    #[serde(rename = "rotary_name")]
    RotaryName,
    /// A signposted exit code such as "4B", `{exit}`.
    #[serde(rename = "exit")]
    ExitCode,
    /// The ordinal of a roundabout exit, `{exit_number}`.
    #[serde(rename = "exit_number")]
    ExitIndex,
    /// A localized lane configuration sentence, `{lane_instruction}`.
    #[serde(rename = "lane_instruction")]
    LaneInstruction,
    /// The localized maneuver modifier constant, `{modifier}`.
    #[serde(rename = "modifier")]
    Modifier,
    /// A compass direction derived from the departure bearing, `{direction}`.
    #[serde(rename = "direction")]
    Direction,
    /// The ordinal of an intermediate waypoint, `{nth}`.
    #[serde(rename = "nth")]
    WayPoint,
    /// A route code such as "I 80", `{ref}`.
    #[serde(rename = "ref")]
    Code,
    /// First instruction in a linking phrase, `{instruction_one}`.
    #[serde(rename = "instruction_one")]
    FirstInstruction,
    /// Second instruction in a linking phrase, `{instruction_two}`.
    #[serde(rename = "instruction_two")]
    SecondInstruction,
    /// A formatted distance in a linking phrase, `{distance}`.
    #[serde(rename = "distance")]
    Distance,
}

impl TokenType {
    /// Every token kind, in declaration order.
    pub const ALL: [TokenType; 13] = [
        TokenType::WayName,
        TokenType::Destination,
        TokenType::RotaryName,
        TokenType::ExitCode,
        TokenType::ExitIndex,
        TokenType::LaneInstruction,
        TokenType::Modifier,
        TokenType::Direction,
        TokenType::WayPoint,
        TokenType::Code,
        TokenType::FirstInstruction,
        TokenType::SecondInstruction,
        TokenType::Distance,
    ];

    /// The stable template spelling of this kind, without braces.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::WayName => "way_name",
            TokenType::Destination => "destination",
            TokenType::RotaryName => "rotary_name",
            TokenType::ExitCode => "exit",
            TokenType::ExitIndex => "exit_number",
            TokenType::LaneInstruction => "lane_instruction",
            TokenType::Modifier => "modifier",
            TokenType::Direction => "direction",
            TokenType::WayPoint => "nth",
            TokenType::Code => "ref",
            TokenType::FirstInstruction => "instruction_one",
            TokenType::SecondInstruction => "instruction_two",
            TokenType::Distance => "distance",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that names no known token kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownToken(pub String);

impl fmt::Display for UnknownToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown token kind: {}", self.0)
    }
}

impl std::error::Error for UnknownToken {}

impl FromStr for TokenType {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "way_name" => TokenType::WayName,
            "destination" => TokenType::Destination,
            "rotary_name" => TokenType::RotaryName,
            "exit" => TokenType::ExitCode,
            "exit_number" => TokenType::ExitIndex,
            "lane_instruction" => TokenType::LaneInstruction,
            "modifier" => TokenType::Modifier,
            "direction" => TokenType::Direction,
            "nth" => TokenType::WayPoint,
            "ref" => TokenType::Code,
            "instruction_one" => TokenType::FirstInstruction,
            "instruction_two" => TokenType::SecondInstruction,
            "distance" => TokenType::Distance,
            _ => return Err(UnknownToken(s.to_string())),
        };
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_kinds_pairwise_distinct() {
        let values: HashSet<&str> = TokenType::ALL.iter().map(|kind| kind.as_str()).collect();
        assert_eq!(values.len(), TokenType::ALL.len());
    }

    #[test]
    fn test_display_matches_as_str() {
        for kind in TokenType::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("way-name".parse::<TokenType>().is_err());
        assert!("".parse::<TokenType>().is_err());
        assert!("WAY_NAME".parse::<TokenType>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_spelling() {
        let json = serde_json::to_string(&TokenType::ExitIndex).unwrap();
        assert_eq!(json, "\"exit_number\"");
        let kind: TokenType = serde_json::from_str("\"rotary_name\"").unwrap();
        assert_eq!(kind, TokenType::RotaryName);
    }
}

//! Route step data model
//!
//!     A serde-deserializable subset of an OSRM v5 route step: the fields the
//!     instruction formatter reads. Everything the wire marks optional is an
//!     Option here; absent intersections deserialize to an empty vector.
//!
//!     Maneuver types and modifiers are open sets on the wire. OSRM adds maneuver
//!     types without a major version bump and expects clients to fall back to
//!     "turn" for ones they do not know, so both enums keep the original spelling
//!     in an Other variant instead of failing deserialization.

use serde::Deserialize;
use std::fmt;

/// One step of a route leg.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteStep {
    #[serde(default)]
    pub name: Option<String>,
    /// Route codes, semicolon-separated on the wire ("I 80; I 580").
    #[serde(default, rename = "ref")]
    pub code: Option<String>,
    /// Destination signage, optionally "codes: names" ("A 7: Hamburg, Kiel").
    #[serde(default)]
    pub destinations: Option<String>,
    /// Signposted exit codes, semicolon-separated ("4B").
    #[serde(default)]
    pub exits: Option<String>,
    #[serde(default)]
    pub rotary_name: Option<String>,
    /// Transport mode ("driving", "ferry", ...).
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub driving_side: Option<String>,
    pub maneuver: StepManeuver,
    #[serde(default)]
    pub intersections: Vec<Intersection>,
}

impl RouteStep {
    /// The step name, if present and non-empty.
    pub fn way_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// The first route code, trimmed.
    pub fn first_code(&self) -> Option<&str> {
        first_component(self.code.as_deref(), ';')
    }

    /// The first signposted exit code, trimmed.
    pub fn first_exit_code(&self) -> Option<&str> {
        first_component(self.exits.as_deref(), ';')
    }

    /// The primary destination, route code first ("A 7: Hamburg").
    ///
    /// The wire field packs codes ahead of a colon and names behind it, each
    /// comma-separated. The instruction shows only the first of each.
    pub fn primary_destination(&self) -> Option<String> {
        let raw = self.destinations.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        let (codes, names) = match raw.split_once(": ") {
            Some((codes, names)) => (Some(codes), names),
            None => (None, raw),
        };
        let first_name = first_component(Some(names), ',');
        let first_code = codes.and_then(|codes| first_component(Some(codes), ','));
        match (first_code, first_name) {
            (Some(code), Some(name)) => Some(format!("{}: {}", code, name)),
            (Some(code), None) => Some(code.to_string()),
            (None, Some(name)) => Some(name.to_string()),
            (None, None) => None,
        }
    }
}

fn first_component(raw: Option<&str>, separator: char) -> Option<&str> {
    let first = raw?.split(separator).next()?.trim();
    (!first.is_empty()).then_some(first)
}

/// The maneuver block of a step.
#[derive(Debug, Clone, Deserialize)]
pub struct StepManeuver {
    #[serde(rename = "type")]
    pub maneuver_type: ManeuverType,
    #[serde(default)]
    pub modifier: Option<ManeuverModifier>,
    /// Departure bearing in degrees, clockwise from true north.
    #[serde(default)]
    pub bearing_after: Option<f64>,
    /// Roundabout or rotary exit ordinal, counted from entry.
    #[serde(default)]
    pub exit: Option<u32>,
}

/// Maneuver type, with unknown wire spellings preserved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ManeuverType {
    Turn,
    NewName,
    Depart,
    Arrive,
    Merge,
    OnRamp,
    OffRamp,
    Fork,
    EndOfRoad,
    UseLane,
    Continue,
    Roundabout,
    Rotary,
    RoundaboutTurn,
    ExitRoundabout,
    ExitRotary,
    Notification,
    Other(String),
}

impl ManeuverType {
    pub fn as_str(&self) -> &str {
        match self {
            ManeuverType::Turn => "turn",
            ManeuverType::NewName => "new name",
            ManeuverType::Depart => "depart",
            ManeuverType::Arrive => "arrive",
            ManeuverType::Merge => "merge",
            ManeuverType::OnRamp => "on ramp",
            ManeuverType::OffRamp => "off ramp",
            ManeuverType::Fork => "fork",
            ManeuverType::EndOfRoad => "end of road",
            ManeuverType::UseLane => "use lane",
            ManeuverType::Continue => "continue",
            ManeuverType::Roundabout => "roundabout",
            ManeuverType::Rotary => "rotary",
            ManeuverType::RoundaboutTurn => "roundabout turn",
            ManeuverType::ExitRoundabout => "exit roundabout",
            ManeuverType::ExitRotary => "exit rotary",
            ManeuverType::Notification => "notification",
            ManeuverType::Other(raw) => raw,
        }
    }
}

impl From<String> for ManeuverType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "turn" => ManeuverType::Turn,
            "new name" => ManeuverType::NewName,
            "depart" => ManeuverType::Depart,
            "arrive" => ManeuverType::Arrive,
            "merge" => ManeuverType::Merge,
            "on ramp" => ManeuverType::OnRamp,
            "off ramp" => ManeuverType::OffRamp,
            "fork" => ManeuverType::Fork,
            "end of road" => ManeuverType::EndOfRoad,
            "use lane" => ManeuverType::UseLane,
            "continue" => ManeuverType::Continue,
            "roundabout" => ManeuverType::Roundabout,
            "rotary" => ManeuverType::Rotary,
            "roundabout turn" => ManeuverType::RoundaboutTurn,
            "exit roundabout" => ManeuverType::ExitRoundabout,
            "exit rotary" => ManeuverType::ExitRotary,
            "notification" => ManeuverType::Notification,
            _ => ManeuverType::Other(raw),
        }
    }
}

impl fmt::Display for ManeuverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maneuver modifier, with unknown wire spellings preserved.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ManeuverModifier {
    Left,
    Right,
    SharpLeft,
    SharpRight,
    SlightLeft,
    SlightRight,
    Straight,
    UTurn,
    Other(String),
}

impl ManeuverModifier {
    pub fn as_str(&self) -> &str {
        match self {
            ManeuverModifier::Left => "left",
            ManeuverModifier::Right => "right",
            ManeuverModifier::SharpLeft => "sharp left",
            ManeuverModifier::SharpRight => "sharp right",
            ManeuverModifier::SlightLeft => "slight left",
            ManeuverModifier::SlightRight => "slight right",
            ManeuverModifier::Straight => "straight",
            ManeuverModifier::UTurn => "uturn",
            ManeuverModifier::Other(raw) => raw,
        }
    }
}

impl From<String> for ManeuverModifier {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "left" => ManeuverModifier::Left,
            "right" => ManeuverModifier::Right,
            "sharp left" => ManeuverModifier::SharpLeft,
            "sharp right" => ManeuverModifier::SharpRight,
            "slight left" => ManeuverModifier::SlightLeft,
            "slight right" => ManeuverModifier::SlightRight,
            "straight" => ManeuverModifier::Straight,
            "uturn" => ManeuverModifier::UTurn,
            _ => ManeuverModifier::Other(raw),
        }
    }
}

impl fmt::Display for ManeuverModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An intersection a step passes through. Only the lane data matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct Intersection {
    #[serde(default)]
    pub lanes: Vec<Lane>,
}

/// One approach lane at an intersection.
#[derive(Debug, Clone, Deserialize)]
pub struct Lane {
    /// Whether this lane can be taken to follow the route.
    pub valid: bool,
    #[serde(default)]
    pub indications: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(json: &str) -> RouteStep {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_step() {
        let step = step(r#"{"maneuver": {"type": "turn", "modifier": "left"}}"#);
        assert_eq!(step.maneuver.maneuver_type, ManeuverType::Turn);
        assert_eq!(step.maneuver.modifier, Some(ManeuverModifier::Left));
        assert_eq!(step.way_name(), None);
    }

    #[test]
    fn test_unknown_maneuver_type_preserved() {
        let step = step(r#"{"maneuver": {"type": "sharp veer"}}"#);
        assert_eq!(
            step.maneuver.maneuver_type,
            ManeuverType::Other("sharp veer".to_string())
        );
        assert_eq!(step.maneuver.maneuver_type.as_str(), "sharp veer");
    }

    #[test]
    fn test_empty_name_is_no_way_name() {
        let step = step(r#"{"name": "", "maneuver": {"type": "turn"}}"#);
        assert_eq!(step.way_name(), None);
    }

    #[test]
    fn test_first_code_splits_on_semicolon() {
        let step = step(r#"{"ref": "I 80; I 580", "maneuver": {"type": "merge"}}"#);
        assert_eq!(step.first_code(), Some("I 80"));
    }

    #[test]
    fn test_primary_destination_plain() {
        let step = step(r#"{"destinations": "Fürth, Würzburg", "maneuver": {"type": "fork"}}"#);
        assert_eq!(step.primary_destination().as_deref(), Some("Fürth"));
    }

    #[test]
    fn test_primary_destination_with_codes() {
        let step = step(
            r#"{"destinations": "A 7, A 8: Hamburg, Kiel", "maneuver": {"type": "fork"}}"#,
        );
        assert_eq!(step.primary_destination().as_deref(), Some("A 7: Hamburg"));
    }

    #[test]
    fn test_lanes_deserialize() {
        let step = step(
            r#"{"maneuver": {"type": "use lane"},
                "intersections": [{"lanes": [
                    {"valid": false, "indications": ["left"]},
                    {"valid": true, "indications": ["straight"]}
                ]}]}"#,
        );
        assert_eq!(step.intersections[0].lanes.len(), 2);
        assert!(step.intersections[0].lanes[1].valid);
    }
}

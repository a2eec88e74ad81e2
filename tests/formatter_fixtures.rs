//! Step-to-instruction fixtures against the bundled English data
//!
//! Each case is a raw OSRM step object plus the sentence the formatter must
//! produce for it. Cases cover the table-selection paths: modifier tables,
//! the turn fallback for unknown types, rotary nesting, mode overrides, lane
//! configurations, and the variant precedence order.

use routetext::osrm::{FormatOptions, InstructionFormatter, PhraseName, RouteStep, TokenType};
use rstest::rstest;

fn step(json: &str) -> RouteStep {
    serde_json::from_str(json).expect("fixture step is valid JSON")
}

fn format(json: &str, options: &FormatOptions) -> Option<String> {
    let formatter = InstructionFormatter::english("v5").expect("bundled data has v5");
    formatter
        .format(&step(json), options)
        .expect("fixture formats cleanly")
}

#[rstest]
#[case::turn_left_name(
    r#"{"name": "Weslayan Street", "maneuver": {"type": "turn", "modifier": "left"}}"#,
    "Turn left onto Weslayan Street"
)]
#[case::turn_uturn(
    r#"{"name": "", "maneuver": {"type": "turn", "modifier": "uturn"}}"#,
    "Make a U-turn"
)]
#[case::unknown_type_falls_back_to_turn(
    r#"{"maneuver": {"type": "sharp veer", "modifier": "left"}}"#,
    "Turn left"
)]
#[case::unknown_modifier_uses_default_table(
    r#"{"maneuver": {"type": "turn", "modifier": "sharp left"}}"#,
    "Turn sharp left"
)]
#[case::depart_with_bearing(
    r#"{"name": "Köpenicker Straße", "maneuver": {"type": "depart", "bearing_after": 357}}"#,
    "Head north on Köpenicker Straße"
)]
#[case::arrive_plain(
    r#"{"maneuver": {"type": "arrive"}}"#,
    "You have arrived at your destination"
)]
#[case::arrive_left(
    r#"{"maneuver": {"type": "arrive", "modifier": "left"}}"#,
    "Your destination is on the left"
)]
#[case::new_name_straight(
    r#"{"name": "Ohmstraße", "maneuver": {"type": "new name", "modifier": "straight"}}"#,
    "Continue onto Ohmstraße"
)]
#[case::fork_destination(
    r#"{"destinations": "Fürth, Würzburg", "maneuver": {"type": "fork", "modifier": "left"}}"#,
    "Keep left towards Fürth"
)]
#[case::off_ramp_exit_destination(
    r#"{"exits": "4B", "destinations": "I 80: San Francisco",
        "maneuver": {"type": "off ramp", "modifier": "right"}}"#,
    "Take exit 4B on the right towards I 80: San Francisco"
)]
#[case::off_ramp_exit_only(
    r#"{"exits": "96", "maneuver": {"type": "off ramp", "modifier": "left"}}"#,
    "Take exit 96 on the left"
)]
#[case::name_and_ref_phrase(
    r#"{"name": "Snohomish Road", "ref": "SR 9",
        "maneuver": {"type": "turn", "modifier": "right"}}"#,
    "Turn right onto Snohomish Road (SR 9)"
)]
#[case::nameless_ref(
    r#"{"ref": "CA 24", "maneuver": {"type": "merge", "modifier": "straight"}}"#,
    "Merge onto CA 24"
)]
#[case::rotary_name_exit(
    r#"{"rotary_name": "Place Charles de Gaulle",
        "maneuver": {"type": "rotary", "modifier": "straight", "exit": 2}}"#,
    "Enter Place Charles de Gaulle and take the 2nd exit"
)]
#[case::roundabout_exit_number(
    r#"{"maneuver": {"type": "roundabout", "modifier": "left", "exit": 3}}"#,
    "Enter the roundabout and take the 3rd exit"
)]
#[case::roundabout_plain(
    r#"{"maneuver": {"type": "roundabout", "modifier": "left"}}"#,
    "Enter the roundabout"
)]
#[case::roundabout_large_exit_is_dropped(
    r#"{"maneuver": {"type": "roundabout", "modifier": "left", "exit": 12}}"#,
    "Enter the roundabout and take the exit"
)]
#[case::exit_roundabout(
    r#"{"name": "Haupttor", "maneuver": {"type": "exit roundabout", "modifier": "right"}}"#,
    "Exit the roundabout onto Haupttor"
)]
#[case::use_lane_keep_right(
    r#"{"maneuver": {"type": "use lane", "modifier": "straight"},
        "intersections": [{"lanes": [
            {"valid": false, "indications": ["left"]},
            {"valid": true, "indications": ["straight"]}
        ]}]}"#,
    "Keep right"
)]
#[case::use_lane_middle(
    r#"{"maneuver": {"type": "use lane", "modifier": "straight"},
        "intersections": [{"lanes": [
            {"valid": false, "indications": ["left"]},
            {"valid": true, "indications": ["straight"]},
            {"valid": true, "indications": ["straight"]},
            {"valid": false, "indications": ["right"]}
        ]}]}"#,
    "Keep in the middle"
)]
#[case::use_lane_unknown_config(
    r#"{"maneuver": {"type": "use lane", "modifier": "straight"},
        "intersections": [{"lanes": [
            {"valid": false, "indications": ["left"]},
            {"valid": true, "indications": ["straight"]},
            {"valid": false, "indications": []},
            {"valid": true, "indications": ["right"]}
        ]}]}"#,
    "Continue"
)]
#[case::use_lane_no_intersections(
    r#"{"maneuver": {"type": "use lane", "modifier": "straight"}}"#,
    "Continue"
)]
#[case::ferry_mode_override(
    r#"{"name": "Anacortes Ferry", "mode": "ferry",
        "maneuver": {"type": "notification", "modifier": "straight"}}"#,
    "Take the ferry Anacortes Ferry"
)]
fn test_fixture(#[case] json: &str, #[case] expected: &str) {
    assert_eq!(format(json, &FormatOptions::default()).as_deref(), Some(expected));
}

#[test]
fn test_no_modifier_no_instruction() {
    assert_eq!(
        format(r#"{"maneuver": {"type": "turn"}}"#, &FormatOptions::default()),
        None
    );
}

#[test]
fn test_arrive_at_intermediate_waypoint() {
    let options = FormatOptions {
        leg_index: Some(0),
        leg_count: Some(2),
        ..FormatOptions::default()
    };
    assert_eq!(
        format(r#"{"maneuver": {"type": "arrive"}}"#, &options).as_deref(),
        Some("You have arrived at your 1st destination")
    );
}

#[test]
fn test_arrive_at_final_waypoint_has_no_ordinal() {
    let options = FormatOptions {
        leg_index: Some(1),
        leg_count: Some(2),
        ..FormatOptions::default()
    };
    assert_eq!(
        format(r#"{"maneuver": {"type": "arrive"}}"#, &options).as_deref(),
        Some("You have arrived at your destination")
    );
}

#[test]
fn test_motorway_prefers_ref() {
    let options = FormatOptions {
        road_classes: vec!["motorway".to_string()],
        ..FormatOptions::default()
    };
    assert_eq!(
        format(
            r#"{"name": "I 80 East", "ref": "I 80",
                "maneuver": {"type": "merge", "modifier": "slight left"}}"#,
            &options
        )
        .as_deref(),
        Some("Merge slight left onto I 80")
    );
}

#[test]
fn test_motorway_without_digits_keeps_name() {
    let options = FormatOptions {
        road_classes: vec!["motorway".to_string()],
        ..FormatOptions::default()
    };
    assert_eq!(
        format(
            r#"{"name": "Autobahn", "ref": "A",
                "maneuver": {"type": "merge", "modifier": "straight"}}"#,
            &options
        )
        .as_deref(),
        Some("Merge onto Autobahn")
    );
}

#[test]
fn test_modify_hook_rewrites_values() {
    let formatter = InstructionFormatter::english("v5").unwrap();
    let shout = |kind: TokenType, value: &str| -> String {
        if kind == TokenType::WayName {
            value.to_uppercase()
        } else {
            value.to_string()
        }
    };
    let options = FormatOptions {
        modify: Some(&shout),
        ..FormatOptions::default()
    };
    let step = step(r#"{"name": "Weslayan Street", "maneuver": {"type": "turn", "modifier": "left"}}"#);
    assert_eq!(
        formatter.format(&step, &options).unwrap().as_deref(),
        Some("Turn left onto WESLAYAN STREET")
    );
}

#[test]
fn test_phrase_accessor() {
    let formatter = InstructionFormatter::english("v5").unwrap();
    assert_eq!(
        formatter.phrase(PhraseName::InstructionWithDistance).unwrap(),
        "In {distance}, {instruction_one}"
    );
}

#[test]
fn test_unknown_version_is_an_error() {
    assert!(InstructionFormatter::english("v4").is_err());
}

//! Instruction compilation
//!
//!     Turns a route step into a sentence. Compilation walks the language table in
//!     a fixed order:
//!
//!         1. Unknown maneuver types fall back to "turn". OSRM adds types without
//!            a major version bump and expects clients to do exactly that.
//!         2. Transport-mode overrides win over the maneuver modifier, which wins
//!            over the type's "default" table. Rotary and roundabout pick among
//!            their name_exit / name / exit / default tables first.
//!         3. The way name is chosen from the step's name and route code; a step
//!            with both formats them through the "name and ref" phrase, motorways
//!            prefer the bare code.
//!         4. Variant precedence: exit_destination, destination, exit, name,
//!            default.
//!         5. Tokens are interpolated, doubled spaces collapse, and the sentence
//!            is capitalized when the language asks for it.
//!
//!     A step that is neither a departure nor an arrival and carries no modifier
//!     produces no instruction at all.

use crate::osrm::error::LanguageError;
use crate::osrm::grammar;
use crate::osrm::language::{InstructionTable, Language, VersionTable};
use crate::osrm::phrase::PhraseName;
use crate::osrm::step::{Intersection, ManeuverType, RouteStep};
use crate::osrm::template;
use crate::osrm::token::TokenType;

/// Per-call formatting options.
#[derive(Default)]
pub struct FormatOptions<'a> {
    /// Index of the leg this step belongs to, for waypoint counting.
    pub leg_index: Option<usize>,
    /// Total number of legs in the route.
    pub leg_count: Option<usize>,
    /// Road classes of the step ("motorway" changes way-name selection).
    pub road_classes: Vec<String>,
    /// Hook applied to every replacement value, keyed by token kind. Lets a
    /// caller restyle or rewrite individual fields of the instruction.
    pub modify: Option<&'a dyn Fn(TokenType, &str) -> String>,
}

impl FormatOptions<'_> {
    fn is_motorway(&self) -> bool {
        self.road_classes.iter().any(|class| class == "motorway")
    }
}

/// Compiles route steps into localized instruction text.
pub struct InstructionFormatter<'a> {
    language: &'a Language,
    table: &'a VersionTable,
    version: String,
}

impl<'a> InstructionFormatter<'a> {
    /// Creates a formatter for one version table of a language.
    pub fn new(version: &str, language: &'a Language) -> Result<InstructionFormatter<'a>, LanguageError> {
        let table = language.version(version)?;
        Ok(InstructionFormatter {
            language,
            table,
            version: version.to_string(),
        })
    }

    /// Creates a formatter over the bundled English data.
    pub fn english(version: &str) -> Result<InstructionFormatter<'static>, LanguageError> {
        InstructionFormatter::new(version, Language::english())
    }

    /// The raw template for a phrase, for callers that link instructions
    /// together themselves.
    pub fn phrase(&self, name: PhraseName) -> Result<&str, LanguageError> {
        self.table.phrase(name)
    }

    /// Compiles an instruction for the given step.
    ///
    /// Returns `Ok(None)` when the step cannot produce one: a step that is
    /// neither a departure nor an arrival and has no maneuver modifier.
    pub fn format(
        &self,
        step: &RouteStep,
        options: &FormatOptions,
    ) -> Result<Option<String>, LanguageError> {
        let maneuver = &step.maneuver;
        let modifier = maneuver.modifier.as_ref();

        let is_terminal = matches!(
            maneuver.maneuver_type,
            ManeuverType::Depart | ManeuverType::Arrive
        );
        if !is_terminal && modifier.is_none() {
            return Ok(None);
        }

        // Fall back to plain turns for maneuver types this language predates.
        let maneuver_type = if self.table.maneuver(maneuver.maneuver_type.as_str()).is_some() {
            maneuver.maneuver_type.clone()
        } else {
            ManeuverType::Turn
        };
        let type_table = self
            .table
            .maneuver(maneuver_type.as_str())
            .ok_or_else(|| self.missing(maneuver_type.as_str()))?;

        let modify = options.modify;
        let apply = |kind: TokenType, value: &str| -> String {
            match modify {
                Some(hook) => hook(kind, value),
                None => value.to_string(),
            }
        };

        let mut rotary_name = String::new();
        let way_name: String;
        let mut variants: &InstructionTable;
        match maneuver_type {
            ManeuverType::Rotary | ManeuverType::Roundabout => {
                // One extra table level, keyed to "default".
                let defaults = type_table
                    .get("default")
                    .ok_or_else(|| self.missing(&format!("{}.default", maneuver_type)))?;
                way_name = step.way_name().unwrap_or_default().to_string();

                let named = step
                    .rotary_name
                    .as_deref()
                    .filter(|name| !name.is_empty());
                let has_exit = maneuver.exit.is_some();
                let mut chosen = None;
                if let Some(name) = named {
                    if has_exit {
                        if let Some(table) = defaults.get("name_exit") {
                            rotary_name = name.to_string();
                            chosen = Some(table);
                        }
                    }
                    if chosen.is_none() {
                        if let Some(table) = defaults.get("name") {
                            rotary_name = name.to_string();
                            chosen = Some(table);
                        }
                    }
                }
                if chosen.is_none() && has_exit {
                    chosen = defaults.get("exit");
                }
                variants = match chosen {
                    Some(table) => table,
                    None => defaults
                        .get("default")
                        .ok_or_else(|| self.missing(&format!("{}.default.default", maneuver_type)))?,
                };
            }
            _ => {
                let mode_table = step.mode.as_deref().and_then(|mode| self.table.mode(mode));
                variants = if let Some(table) = mode_table {
                    table
                } else if let Some(table) = modifier.and_then(|m| type_table.get(m.as_str())) {
                    table
                } else {
                    type_table
                        .get("default")
                        .ok_or_else(|| self.missing(&format!("{}.default", maneuver_type)))?
                };
                way_name = self.select_way_name(step, options, &apply)?;
            }
        }

        // Lane instructions come from the intersection's lane layout; a layout
        // the language has no sentence for degrades to the no_lanes table.
        let mut lane_instruction = None;
        if maneuver_type == ManeuverType::UseLane {
            let config = step
                .intersections
                .first()
                .map(lane_config)
                .unwrap_or_default();
            lane_instruction = self.table.constants.lanes.get(&config).cloned();
            if lane_instruction.is_none() {
                variants = type_table
                    .get("no_lanes")
                    .ok_or_else(|| self.missing("use lane.no_lanes"))?;
            }
        }

        // Destination takes precedence over name.
        let destination = step.primary_destination();
        let exit_code = step.first_exit_code().map(str::to_string);
        let template = if destination.is_some() && exit_code.is_some() {
            variants.instruction("exit_destination")
        } else {
            None
        }
        .or_else(|| destination.as_ref().and(variants.instruction("destination")))
        .or_else(|| exit_code.as_ref().and(variants.instruction("exit")))
        .or_else(|| {
            if way_name.is_empty() {
                None
            } else {
                variants.instruction("name")
            }
        })
        .or_else(|| variants.instruction("default"))
        .ok_or_else(|| self.missing(&format!("{}.default", maneuver_type)))?;

        // Replacement values.
        let ordinal_words = &self.table.constants.ordinal_words;
        let nth_waypoint = match (options.leg_index, options.leg_count) {
            (Some(leg_index), Some(leg_count)) if leg_index + 1 != leg_count => {
                grammar::ordinalize(leg_index as u32 + 1, ordinal_words)
            }
            _ => String::new(),
        };
        let exit_ordinal = maneuver
            .exit
            .filter(|&exit| exit <= 10)
            .map(|exit| grammar::ordinalize(exit, ordinal_words))
            .unwrap_or_default();
        let modifier_key = modifier.map(|m| m.as_str()).unwrap_or("straight");
        let modifier_constant = self
            .table
            .constant("modifier", modifier_key)
            .unwrap_or(modifier_key)
            .to_string();
        let direction = self.direction_from_degree(maneuver.bearing_after)?;
        let code = step.first_code().unwrap_or_default().to_string();
        let destination = destination.unwrap_or_default();
        let exit_code = exit_code.unwrap_or_default();
        let lane_instruction = lane_instruction.unwrap_or_default();

        let raw = template::replace_tokens(template, |kind| {
            let value = match kind {
                // The way name already went through the modify hook.
                TokenType::WayName => return way_name.clone(),
                TokenType::Code => code.clone(),
                TokenType::Destination => destination.clone(),
                TokenType::ExitCode => exit_code.clone(),
                TokenType::ExitIndex => exit_ordinal.clone(),
                TokenType::RotaryName => rotary_name.clone(),
                TokenType::LaneInstruction => lane_instruction.clone(),
                TokenType::Modifier => modifier_constant.clone(),
                TokenType::Direction => direction.clone(),
                TokenType::WayPoint => nth_waypoint.clone(),
                // Phrase-level tokens never appear in step templates.
                TokenType::FirstInstruction
                | TokenType::SecondInstruction
                | TokenType::Distance => String::new(),
            };
            apply(kind, &value)
        });

        let mut result = template::collapse_spaces(&raw);
        if self.language.meta.capitalize_first_letter {
            result = template::sentence_cased(&result);
        }
        Ok(Some(result))
    }

    /// Picks the `{way_name}` replacement from the step's name and route code.
    fn select_way_name(
        &self,
        step: &RouteStep,
        options: &FormatOptions,
        apply: &dyn Fn(TokenType, &str) -> String,
    ) -> Result<String, LanguageError> {
        let name = step.way_name();
        let code = step.first_code();
        let is_motorway = options.is_motorway();

        let way_name = match (name, code) {
            (Some(name), Some(code)) if name != code && !is_motorway => {
                let phrase = self.table.phrase(PhraseName::NameWithCode)?;
                template::replace_tokens(phrase, |kind| match kind {
                    TokenType::WayName => apply(TokenType::WayName, name),
                    TokenType::Code => apply(TokenType::Code, code),
                    _ => String::new(),
                })
            }
            (_, Some(code)) if is_motorway && code.chars().any(|c| c.is_ascii_digit()) => {
                apply(TokenType::Code, code)
            }
            (None, Some(code)) => apply(TokenType::Code, code),
            (Some(name), _) => apply(TokenType::WayName, name),
            _ => String::new(),
        };
        Ok(way_name)
    }

    /// Localized compass direction for a departure bearing.
    fn direction_from_degree(&self, degree: Option<f64>) -> Result<String, LanguageError> {
        // Steps without a departure bearing produce no direction.
        let Some(degree) = degree else {
            return Ok(String::new());
        };
        let key = match degree as i64 {
            0..=20 | 340..=360 => "north",
            21..=69 => "northeast",
            70..=110 => "east",
            111..=159 => "southeast",
            160..=200 => "south",
            201..=249 => "southwest",
            250..=290 => "west",
            291..=339 => "northwest",
            _ => return Ok(String::new()),
        };
        Ok(self.table.constant("direction", key)?.to_string())
    }

    fn missing(&self, path: &str) -> LanguageError {
        LanguageError::missing(format!("{}.{}", self.version, path))
    }
}

/// Collapses an intersection's lane validity into a configuration key.
///
/// Each lane contributes "o" (usable) or "x" (not usable); consecutive
/// duplicates collapse, so `x o o x` becomes "xox".
fn lane_config(intersection: &Intersection) -> String {
    let mut config = String::new();
    let mut current = None;
    for lane in &intersection.lanes {
        let mark = if lane.valid { 'o' } else { 'x' };
        if current != Some(mark) {
            config.push(mark);
            current = Some(mark);
        }
    }
    config
}

//! Localized instruction tables
//!
//!     A language file is a JSON document with per-version instruction tables:
//!
//!         meta                  capitalizeFirstLetter and friends
//!         v5.constants          direction, modifier, lanes, ordinalWords maps
//!         v5.modes              per-transport-mode overrides (ferry)
//!         v5.phrase             multi-instruction phrase templates
//!         v5.<maneuver type>    per-modifier variant tables
//!
//!     Plain maneuver types nest two levels (modifier, then variant); rotary and
//!     roundabout nest three, with an intermediate level keyed to "default". The
//!     [InstructionTable] enum models that irregularity as a recursive map, so the
//!     formatter navigates with the same key paths the language data uses.
//!
//!     English ships embedded and parses once, lazily. Other languages load at
//!     runtime through [Language::from_json_str].

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

use crate::osrm::error::LanguageError;
use crate::osrm::phrase::PhraseName;

/// The version table key for OSRM v5 responses.
pub const DEFAULT_VERSION: &str = "v5";

static ENGLISH: Lazy<Language> = Lazy::new(|| {
    Language::from_json_str(include_str!("../../languages/en.json"))
        .expect("bundled English language data is valid")
});

/// A parsed language file.
#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    #[serde(default)]
    pub meta: Meta,
    #[serde(flatten)]
    versions: HashMap<String, VersionTable>,
}

impl Language {
    /// The bundled English language data.
    pub fn english() -> &'static Language {
        &ENGLISH
    }

    /// Parses a language file from its JSON text.
    pub fn from_json_str(json: &str) -> Result<Language, LanguageError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The instruction table for the given version key (e.g. "v5").
    pub fn version(&self, version: &str) -> Result<&VersionTable, LanguageError> {
        self.versions
            .get(version)
            .ok_or_else(|| LanguageError::UnknownVersion(version.to_string()))
    }
}

/// Language-wide metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Meta {
    /// Whether compiled instructions get sentence casing.
    #[serde(rename = "capitalizeFirstLetter", default)]
    pub capitalize_first_letter: bool,
}

/// One version's worth of instruction data.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionTable {
    pub constants: Constants,
    #[serde(default)]
    pub modes: HashMap<String, InstructionTable>,
    #[serde(default)]
    phrase: HashMap<String, String>,
    /// Maneuver-type tables: "turn", "off ramp", "rotary", ...
    #[serde(flatten)]
    maneuvers: HashMap<String, InstructionTable>,
}

impl VersionTable {
    /// Variant tables for a maneuver type, by its wire name.
    pub fn maneuver(&self, maneuver_type: &str) -> Option<&InstructionTable> {
        self.maneuvers.get(maneuver_type)
    }

    /// Per-mode override table (e.g. "ferry"), if the language has one.
    pub fn mode(&self, mode: &str) -> Option<&InstructionTable> {
        self.modes.get(mode)
    }

    /// The raw template for a phrase, suitable for
    /// [replace_tokens](crate::osrm::template::replace_tokens).
    pub fn phrase(&self, name: PhraseName) -> Result<&str, LanguageError> {
        self.phrase
            .get(name.as_str())
            .map(String::as_str)
            .ok_or_else(|| LanguageError::missing(format!("phrase.{}", name)))
    }

    /// A localized constant, e.g. `("modifier", "sharp left")`.
    pub fn constant(&self, group: &str, key: &str) -> Result<&str, LanguageError> {
        let map = match group {
            "direction" => &self.constants.direction,
            "modifier" => &self.constants.modifier,
            "lanes" => &self.constants.lanes,
            _ => return Err(LanguageError::missing(format!("constants.{}", group))),
        };
        map.get(key)
            .map(String::as_str)
            .ok_or_else(|| LanguageError::missing(format!("constants.{}.{}", group, key)))
    }
}

/// The `constants` block of a version table.
#[derive(Debug, Clone, Deserialize)]
pub struct Constants {
    #[serde(default, rename = "ordinalWords")]
    pub ordinal_words: HashMap<String, String>,
    #[serde(default)]
    pub direction: HashMap<String, String>,
    #[serde(default)]
    pub modifier: HashMap<String, String>,
    #[serde(default)]
    pub lanes: HashMap<String, String>,
}

/// A maneuver-type table of arbitrary depth.
///
/// Leaves are instruction templates; interior nodes map modifier or variant
/// keys to deeper tables. Rotary and roundabout carry one more level than the
/// plain maneuver types, which is why this is recursive rather than a fixed
/// pair of map types.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InstructionTable {
    Instruction(String),
    Table(HashMap<String, InstructionTable>),
}

impl InstructionTable {
    /// Child table or leaf under `key`, when this node is a table.
    pub fn get(&self, key: &str) -> Option<&InstructionTable> {
        match self {
            InstructionTable::Table(map) => map.get(key),
            InstructionTable::Instruction(_) => None,
        }
    }

    /// The template under `key`, when it is a leaf.
    pub fn instruction(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            InstructionTable::Instruction(template) => Some(template),
            InstructionTable::Table(_) => None,
        }
    }
}

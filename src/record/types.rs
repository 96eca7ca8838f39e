//! Typed records for the four upstream collections
//!
//! Field sets follow the upstream API. Every struct keeps a flattened map of
//! unmodeled fields so serialization is lossless — the content digest covers
//! whatever the API actually returned, not just the fields named here.

use crate::node::{NodeId, SourceRecord};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// The four kinds of record this connector sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    #[serde(rename = "HarryPotterHouse")]
    House,
    #[serde(rename = "HarryPotterCharacter")]
    Character,
    #[serde(rename = "HarryPotterSpell")]
    Spell,
    #[serde(rename = "HarryPotterSortingHat")]
    SortingHat,
}

impl RecordKind {
    /// Host-facing type name, the value of `internal.type` on emitted nodes.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::House => "HarryPotterHouse",
            Self::Character => "HarryPotterCharacter",
            Self::Spell => "HarryPotterSpell",
            Self::SortingHat => "HarryPotterSortingHat",
        }
    }

    /// Short tag naming this kind inside identifier namespaces.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::House => "house",
            Self::Character => "character",
            Self::Spell => "spell",
            Self::SortingHat => "sorting-hat",
        }
    }

    /// Identifier namespace for records of this kind.
    pub fn namespace(&self) -> String {
        format!("potterapi-{}", self.tag())
    }

    /// The full identifier seed for a record of this kind.
    ///
    /// The house-link resolver and the node builder both go through this,
    /// so a character's foreign key always agrees with the id the matching
    /// house node receives.
    pub fn seed(&self, source_key: &str) -> String {
        format!("{}-{}", self.namespace(), source_key)
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A Hogwarts house as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub founder: Option<String>,
    #[serde(default)]
    pub head_of_house: Option<String>,
    #[serde(default)]
    pub house_ghost: Option<String>,
    #[serde(default)]
    pub mascot: Option<String>,
    /// Character `_id`s of the house's members.
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A character as returned by the API.
///
/// `house` holds the house *name* exactly as the API reports it; resolution
/// never rewrites it. `house_ref` is the derived foreign key, absent until
/// [`crate::resolve_house_links`] runs and `None` whenever no house matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub animagus: Option<String>,
    #[serde(default)]
    pub blood_status: Option<String>,
    #[serde(default)]
    pub boggart: Option<String>,
    #[serde(default)]
    pub death_eater: Option<bool>,
    #[serde(default)]
    pub dumbledores_army: Option<bool>,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default)]
    pub ministry_of_magic: Option<bool>,
    #[serde(default)]
    pub order_of_the_phoenix: Option<bool>,
    #[serde(default)]
    pub patronus: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub wand: Option<String>,
    /// Foreign key to the matching house node, in the host's link-field
    /// naming convention. Serialized as `null` when unresolved — never a
    /// dangling reference.
    #[serde(rename = "house___NODE", default)]
    pub house_ref: Option<NodeId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A spell as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spell {
    #[serde(rename = "_id")]
    pub id: String,
    pub spell: String,
    #[serde(rename = "type", default)]
    pub spell_type: Option<String>,
    #[serde(default)]
    pub effect: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The sorting-hat value: a single opaque JSON value with no source key of
/// its own. Its identity is derived from the serialized value itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortingHat(pub Value);

impl SortingHat {
    /// Content-derived source key: the canonical serialization of the value.
    pub fn source_key(&self) -> String {
        self.0.to_string()
    }
}

impl SourceRecord for House {
    fn kind(&self) -> RecordKind {
        RecordKind::House
    }

    fn source_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }
}

impl SourceRecord for Character {
    fn kind(&self) -> RecordKind {
        RecordKind::Character
    }

    fn source_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }
}

impl SourceRecord for Spell {
    fn kind(&self) -> RecordKind {
        RecordKind::Spell
    }

    fn source_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }
}

impl SourceRecord for SortingHat {
    fn kind(&self) -> RecordKind {
        RecordKind::SortingHat
    }

    fn source_key(&self) -> Cow<'_, str> {
        Cow::Owned(self.0.to_string())
    }

    // The bare value would not merge as top-level fields; the wrapped node
    // carries it under `house`, matching what consumers query for.
    fn fields(&self) -> Result<Map<String, Value>, serde_json::Error> {
        Ok(Map::from_iter([(String::from("house"), self.0.clone())]))
    }
}

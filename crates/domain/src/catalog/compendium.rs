//! Compendium reference tables: spells and monsters.
//!
//! Pure lookup data for the wider application (spell pickers, monster
//! reference pages). Nothing here participates in wizard validation; the
//! records only need ids for cross-referencing and enough fields to browse.

use serde::{Deserialize, Serialize};

use crate::ids::{ClassId, MonsterId, SpellId};

/// A spell reference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub id: SpellId,
    pub name: String,
    /// Spell level, 0 for cantrips
    pub level: u8,
    /// Classes whose lists include this spell
    #[serde(default)]
    pub classes: Vec<ClassId>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A monster reference record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub id: MonsterId,
    pub name: String,
    /// Challenge rating; fractional CRs stored as f32 (0.25 = CR 1/4)
    pub challenge_rating: f32,
    #[serde(default)]
    pub description: Option<String>,
}

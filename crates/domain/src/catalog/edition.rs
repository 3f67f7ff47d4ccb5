//! Edition - a ruleset version of the game.
//!
//! An edition is the root of the reference data: it decides which races,
//! classes, alignments, settings, and equipment packs exist at all. Settings
//! can later narrow or extend the race/class lists, but never reach outside
//! what some edition defines.

use serde::{Deserialize, Serialize};

use crate::ids::{AlignmentId, ClassId, EditionId, EquipmentPackId, RaceId, SettingId};

/// A ruleset version (e.g. "5e"). Immutable reference data.
///
/// Option lists are ordered: the resolver preserves the order declared here
/// when presenting choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edition {
    pub id: EditionId,
    pub name: String,
    /// Races available in this edition, in display order
    pub races: Vec<RaceId>,
    /// Classes available in this edition, in display order
    pub classes: Vec<ClassId>,
    /// The alignment grid this edition uses
    pub alignments: Vec<Alignment>,
    /// Campaign settings playable under this edition
    #[serde(default)]
    pub settings: Vec<SettingId>,
    /// Starting equipment packs offered by this edition
    #[serde(default)]
    pub equipment_packs: Vec<EquipmentPackId>,
}

impl Edition {
    /// Returns true if this edition permits the given setting.
    pub fn allows_setting(&self, setting: &SettingId) -> bool {
        self.settings.contains(setting)
    }

    /// Look up an alignment definition by id.
    pub fn alignment(&self, id: &AlignmentId) -> Option<&Alignment> {
        self.alignments.iter().find(|a| &a.id == id)
    }

    /// All alignment ids defined by this edition, in declaration order.
    pub fn alignment_ids(&self) -> Vec<AlignmentId> {
        self.alignments.iter().map(|a| a.id.clone()).collect()
    }
}

/// An alignment defined by an edition (e.g. `lg` / "Lawful Good").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alignment {
    pub id: AlignmentId,
    pub label: String,
}

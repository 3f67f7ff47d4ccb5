//! Class reference records: per-edition requirements and subclass groups.
//!
//! The source data this models used sentinel strings ("all", "any") for
//! unrestricted gates; here the gates are closed sum types so an
//! unrestricted gate and an explicit list cannot be confused at runtime.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ids::{AlignmentId, ClassId, EditionId, RaceId, SubclassId};

/// A character class. Immutable reference data.
///
/// Requirements and subclass definitions vary per edition; a class with no
/// entry for an edition imposes no restrictions there and offers no
/// subclasses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSpec {
    pub id: ClassId,
    pub name: String,
    /// Restrictions this class imposes, keyed by edition
    #[serde(default)]
    pub requirements: HashMap<EditionId, ClassRequirement>,
    /// Subclass option groups, keyed by edition
    #[serde(default)]
    pub definitions: HashMap<EditionId, Vec<SubclassGroup>>,
}

impl ClassSpec {
    /// The requirement row for an edition, if the class defines one.
    pub fn requirement(&self, edition: &EditionId) -> Option<&ClassRequirement> {
        self.requirements.get(edition)
    }

    /// The subclass groups this class defines for an edition.
    pub fn subclass_groups(&self, edition: &EditionId) -> &[SubclassGroup] {
        self.definitions
            .get(edition)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Per-edition constraints a class places on the character choosing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRequirement {
    /// Races allowed to take this class
    #[serde(default)]
    pub races: RaceGate,
    /// Alignments this class permits
    #[serde(default)]
    pub alignments: AlignmentGate,
}

/// Which races may take a class.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceGate {
    /// No race restriction
    #[default]
    All,
    /// Only the listed races
    Only(Vec<RaceId>),
}

impl RaceGate {
    /// Returns true if the gate admits the given race.
    pub fn admits(&self, race: &RaceId) -> bool {
        match self {
            RaceGate::All => true,
            RaceGate::Only(races) => races.contains(race),
        }
    }
}

/// Which alignments a class permits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentGate {
    /// No alignment restriction
    #[default]
    Any,
    /// Only the listed alignments
    Only(Vec<AlignmentId>),
}

impl AlignmentGate {
    /// Returns true if the gate admits the given alignment.
    pub fn admits(&self, alignment: &AlignmentId) -> bool {
        match self {
            AlignmentGate::Any => true,
            AlignmentGate::Only(alignments) => alignments.contains(alignment),
        }
    }
}

/// A group of subclass options unlocked at a class level.
///
/// Groups below their `selection_level` are not offered yet: a level 1
/// fighter sees no Martial Archetype choice until level 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubclassGroup {
    pub label: String,
    /// Class level at which this group becomes selectable
    pub selection_level: u8,
    pub options: Vec<SubclassOption>,
}

impl SubclassGroup {
    /// Returns true if the group contains the given subclass.
    pub fn offers(&self, subclass: &SubclassId) -> bool {
        self.options.iter().any(|o| &o.id == subclass)
    }
}

/// One selectable subclass within a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubclassOption {
    pub id: SubclassId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn race_gate_all_admits_everything() {
        assert!(RaceGate::All.admits(&RaceId::new("human")));
    }

    #[test]
    fn race_gate_only_admits_listed() {
        let gate = RaceGate::Only(vec![RaceId::new("dwarf"), RaceId::new("gnome")]);
        assert!(gate.admits(&RaceId::new("dwarf")));
        assert!(!gate.admits(&RaceId::new("human")));
    }

    #[test]
    fn alignment_gate_only_admits_listed() {
        let gate = AlignmentGate::Only(vec![AlignmentId::new("lg")]);
        assert!(gate.admits(&AlignmentId::new("lg")));
        assert!(!gate.admits(&AlignmentId::new("ce")));
    }

    #[test]
    fn gates_default_to_unrestricted() {
        let req: ClassRequirement = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(req.races, RaceGate::All);
        assert_eq!(req.alignments, AlignmentGate::Any);
    }

    #[test]
    fn subclass_group_offers_its_options() {
        let group = SubclassGroup {
            label: "Martial Archetype".to_string(),
            selection_level: 3,
            options: vec![SubclassOption {
                id: SubclassId::new("champion"),
                name: "Champion".to_string(),
            }],
        };
        assert!(group.offers(&SubclassId::new("champion")));
        assert!(!group.offers(&SubclassId::new("battlemaster")));
    }

    #[test]
    fn class_without_edition_entry_has_no_groups() {
        let class = ClassSpec {
            id: ClassId::new("fighter"),
            name: "Fighter".to_string(),
            requirements: HashMap::new(),
            definitions: HashMap::new(),
        };
        assert!(class.requirement(&EditionId::new("5e")).is_none());
        assert!(class.subclass_groups(&EditionId::new("5e")).is_empty());
    }

    #[test]
    fn gate_serialization_is_tagged() {
        let gate = RaceGate::Only(vec![RaceId::new("dwarf")]);
        let json = serde_json::to_string(&gate).expect("serialize");
        assert!(json.contains("only"));

        let all = serde_json::to_string(&RaceGate::All).expect("serialize");
        assert_eq!(all, "\"all\"");
    }
}

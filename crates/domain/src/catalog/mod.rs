//! Reference catalog: the read-only tables the wizard consults.
//!
//! The catalog is an explicitly constructed, injected value - there is no
//! process-wide static table. Construction validates every cross-reference
//! once, so downstream resolver/validator code can index into the tables
//! without re-checking shapes per call.

mod class;
mod compendium;
mod edition;
mod equipment;
mod race;
mod setting;

pub use class::{
    AlignmentGate, ClassRequirement, ClassSpec, RaceGate, SubclassGroup, SubclassOption,
};
pub use compendium::{Monster, Spell};
pub use edition::{Alignment, Edition};
pub use equipment::EquipmentPack;
pub use race::Race;
pub use setting::{OverrideBlock, Setting};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::{
    ClassId, EditionId, EquipmentPackId, MonsterId, RaceId, SettingId, SpellId,
};

/// The full reference catalog. Read-only once constructed; all lookups
/// return `Option` so "not present" stays a value, not a panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CatalogData")]
pub struct Catalog {
    editions: Vec<Edition>,
    settings: Vec<Setting>,
    races: Vec<Race>,
    classes: Vec<ClassSpec>,
    equipment_packs: Vec<EquipmentPack>,
    spells: Vec<Spell>,
    monsters: Vec<Monster>,
}

/// Unvalidated wire shape of a catalog. `Catalog` deserializes through this
/// so a JSON load and an in-code construction hit the same checks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    #[serde(default)]
    pub editions: Vec<Edition>,
    #[serde(default)]
    pub settings: Vec<Setting>,
    #[serde(default)]
    pub races: Vec<Race>,
    #[serde(default)]
    pub classes: Vec<ClassSpec>,
    #[serde(default)]
    pub equipment_packs: Vec<EquipmentPack>,
    #[serde(default)]
    pub spells: Vec<Spell>,
    #[serde(default)]
    pub monsters: Vec<Monster>,
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Catalog::new(data)
    }
}

impl Catalog {
    /// Build a catalog from raw tables, validating every cross-reference.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateId`] if a table contains two records with
    ///   the same id
    /// - [`CatalogError::UnknownReference`] if any record references an id
    ///   missing from its table
    /// - [`CatalogError::SettingNotListed`] if a setting's edition does not
    ///   list the setting back
    pub fn new(data: CatalogData) -> Result<Self, CatalogError> {
        let catalog = Self {
            editions: data.editions,
            settings: data.settings,
            races: data.races,
            classes: data.classes,
            equipment_packs: data.equipment_packs,
            spells: data.spells,
            monsters: data.monsters,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from its JSON wire format, validating on the way in.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn edition(&self, id: &EditionId) -> Option<&Edition> {
        self.editions.iter().find(|e| &e.id == id)
    }

    pub fn setting(&self, id: &SettingId) -> Option<&Setting> {
        self.settings.iter().find(|s| &s.id == id)
    }

    pub fn race(&self, id: &RaceId) -> Option<&Race> {
        self.races.iter().find(|r| &r.id == id)
    }

    pub fn class(&self, id: &ClassId) -> Option<&ClassSpec> {
        self.classes.iter().find(|c| &c.id == id)
    }

    pub fn equipment_pack(&self, id: &EquipmentPackId) -> Option<&EquipmentPack> {
        self.equipment_packs.iter().find(|p| &p.id == id)
    }

    pub fn spell(&self, id: &SpellId) -> Option<&Spell> {
        self.spells.iter().find(|s| &s.id == id)
    }

    pub fn monster(&self, id: &MonsterId) -> Option<&Monster> {
        self.monsters.iter().find(|m| &m.id == id)
    }

    /// All editions, in declaration order.
    pub fn editions(&self) -> &[Edition] {
        &self.editions
    }

    /// Spells on a class's list, in declaration order.
    pub fn spells_for_class(&self, class: &ClassId) -> Vec<&Spell> {
        self.spells
            .iter()
            .filter(|s| s.classes.contains(class))
            .collect()
    }

    /// Monsters at or below a challenge rating, in declaration order.
    pub fn monsters_by_max_cr(&self, max_cr: f32) -> Vec<&Monster> {
        self.monsters
            .iter()
            .filter(|m| m.challenge_rating <= max_cr)
            .collect()
    }

    // =========================================================================
    // Validation
    // =========================================================================

    fn validate(&self) -> Result<(), CatalogError> {
        self.check_duplicates()?;
        for edition in &self.editions {
            self.check_edition(edition)?;
        }
        for setting in &self.settings {
            self.check_setting(setting)?;
        }
        for class in &self.classes {
            self.check_class(class)?;
        }
        for spell in &self.spells {
            for class in &spell.classes {
                if self.class(class).is_none() {
                    return Err(CatalogError::unknown(
                        "class",
                        class.as_str(),
                        format!("spell {}", spell.id),
                    ));
                }
            }
        }
        Ok(())
    }

    fn check_duplicates(&self) -> Result<(), CatalogError> {
        fn first_duplicate<'a, T, F: Fn(&'a T) -> &'a str>(
            items: &'a [T],
            key: F,
        ) -> Option<&'a str> {
            let mut seen: Vec<&str> = Vec::with_capacity(items.len());
            for item in items {
                let k = key(item);
                if seen.contains(&k) {
                    return Some(k);
                }
                seen.push(k);
            }
            None
        }

        if let Some(id) = first_duplicate(&self.editions, |e| e.id.as_str()) {
            return Err(CatalogError::duplicate("edition", id));
        }
        if let Some(id) = first_duplicate(&self.settings, |s| s.id.as_str()) {
            return Err(CatalogError::duplicate("setting", id));
        }
        if let Some(id) = first_duplicate(&self.races, |r| r.id.as_str()) {
            return Err(CatalogError::duplicate("race", id));
        }
        if let Some(id) = first_duplicate(&self.classes, |c| c.id.as_str()) {
            return Err(CatalogError::duplicate("class", id));
        }
        if let Some(id) = first_duplicate(&self.equipment_packs, |p| p.id.as_str()) {
            return Err(CatalogError::duplicate("equipment pack", id));
        }
        if let Some(id) = first_duplicate(&self.spells, |s| s.id.as_str()) {
            return Err(CatalogError::duplicate("spell", id));
        }
        if let Some(id) = first_duplicate(&self.monsters, |m| m.id.as_str()) {
            return Err(CatalogError::duplicate("monster", id));
        }
        Ok(())
    }

    fn check_edition(&self, edition: &Edition) -> Result<(), CatalogError> {
        let referrer = || format!("edition {}", edition.id);
        for race in &edition.races {
            if self.race(race).is_none() {
                return Err(CatalogError::unknown("race", race.as_str(), referrer()));
            }
        }
        for class in &edition.classes {
            if self.class(class).is_none() {
                return Err(CatalogError::unknown("class", class.as_str(), referrer()));
            }
        }
        for setting in &edition.settings {
            if self.setting(setting).is_none() {
                return Err(CatalogError::unknown(
                    "setting",
                    setting.as_str(),
                    referrer(),
                ));
            }
        }
        for pack in &edition.equipment_packs {
            if self.equipment_pack(pack).is_none() {
                return Err(CatalogError::unknown(
                    "equipment pack",
                    pack.as_str(),
                    referrer(),
                ));
            }
        }
        Ok(())
    }

    fn check_setting(&self, setting: &Setting) -> Result<(), CatalogError> {
        let referrer = || format!("setting {}", setting.id);
        let Some(edition) = self.edition(&setting.edition) else {
            return Err(CatalogError::unknown(
                "edition",
                setting.edition.as_str(),
                referrer(),
            ));
        };
        if !edition.allows_setting(&setting.id) {
            return Err(CatalogError::SettingNotListed {
                setting: setting.id.to_string(),
                edition: edition.id.to_string(),
            });
        }
        if let Some(races) = &setting.races {
            for race in races.referenced_ids() {
                if self.race(race).is_none() {
                    return Err(CatalogError::unknown("race", race.as_str(), referrer()));
                }
            }
        }
        if let Some(classes) = &setting.classes {
            for class in classes.referenced_ids() {
                if self.class(class).is_none() {
                    return Err(CatalogError::unknown("class", class.as_str(), referrer()));
                }
            }
        }
        Ok(())
    }

    fn check_class(&self, class: &ClassSpec) -> Result<(), CatalogError> {
        for (edition_id, requirement) in &class.requirements {
            let referrer = format!("class {} ({})", class.id, edition_id);
            let Some(edition) = self.edition(edition_id) else {
                return Err(CatalogError::unknown(
                    "edition",
                    edition_id.as_str(),
                    referrer,
                ));
            };
            if let RaceGate::Only(races) = &requirement.races {
                for race in races {
                    if self.race(race).is_none() {
                        return Err(CatalogError::unknown(
                            "race",
                            race.as_str(),
                            referrer.clone(),
                        ));
                    }
                }
            }
            if let AlignmentGate::Only(alignments) = &requirement.alignments {
                for alignment in alignments {
                    if edition.alignment(alignment).is_none() {
                        return Err(CatalogError::unknown(
                            "alignment",
                            alignment.as_str(),
                            referrer.clone(),
                        ));
                    }
                }
            }
        }
        for edition_id in class.definitions.keys() {
            if self.edition(edition_id).is_none() {
                return Err(CatalogError::unknown(
                    "edition",
                    edition_id.as_str(),
                    format!("class {} definitions", class.id),
                ));
            }
        }
        Ok(())
    }
}

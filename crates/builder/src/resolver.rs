//! Option resolver: derives the legal choice set for a builder field.
//!
//! Pure functions over the injected catalog. A missing prerequisite (no
//! edition chosen yet) yields an empty list rather than an error - "not yet
//! chosen" is a valid state of the wizard, not a failure.

use charbldr_domain::{
    Catalog, ClassId, EditionId, EquipmentPackId, OverrideBlock, RaceId, SettingId, SubclassGroup,
};

/// Resolves option lists against a borrowed catalog.
///
/// Resolution is deterministic and side-effect free: identical inputs yield
/// identical ordered output, and the catalog is never mutated.
#[derive(Debug, Clone, Copy)]
pub struct OptionResolver<'a> {
    catalog: &'a Catalog,
}

impl<'a> OptionResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Races offered for the edition, rewritten by the setting's race
    /// override when a setting is selected and the edition permits it.
    pub fn races(
        &self,
        edition: Option<&EditionId>,
        setting: Option<&SettingId>,
    ) -> Vec<RaceId> {
        let Some(edition) = edition.and_then(|id| self.catalog.edition(id)) else {
            return Vec::new();
        };
        let block = self
            .active_setting(&edition.id, setting)
            .and_then(|s| s.races.as_ref());
        apply_override(&edition.races, block)
    }

    /// Classes offered for the edition, rewritten by the setting's class
    /// override when a setting is selected and the edition permits it.
    pub fn classes(
        &self,
        edition: Option<&EditionId>,
        setting: Option<&SettingId>,
    ) -> Vec<ClassId> {
        let Some(edition) = edition.and_then(|id| self.catalog.edition(id)) else {
            return Vec::new();
        };
        let block = self
            .active_setting(&edition.id, setting)
            .and_then(|s| s.classes.as_ref());
        apply_override(&edition.classes, block)
    }

    /// Settings playable under the edition.
    pub fn settings(&self, edition: Option<&EditionId>) -> Vec<SettingId> {
        edition
            .and_then(|id| self.catalog.edition(id))
            .map(|e| e.settings.clone())
            .unwrap_or_default()
    }

    /// Equipment packs offered by the edition.
    pub fn equipment_packs(&self, edition: Option<&EditionId>) -> Vec<EquipmentPackId> {
        edition
            .and_then(|id| self.catalog.edition(id))
            .map(|e| e.equipment_packs.clone())
            .unwrap_or_default()
    }

    /// Subclass groups a class offers at the given class level: groups whose
    /// `selection_level` exceeds the level are not offered yet.
    pub fn subclass_groups(
        &self,
        class: &ClassId,
        edition: &EditionId,
        level: u8,
    ) -> Vec<&'a SubclassGroup> {
        let Some(class) = self.catalog.class(class) else {
            return Vec::new();
        };
        class
            .subclass_groups(edition)
            .iter()
            .filter(|g| g.selection_level <= level)
            .collect()
    }

    /// The setting whose overrides apply: selected, known, and actually
    /// permitted by the edition. A setting the edition does not list
    /// behaves as no setting at all.
    fn active_setting(
        &self,
        edition: &EditionId,
        setting: Option<&SettingId>,
    ) -> Option<&'a charbldr_domain::Setting> {
        let setting = setting.and_then(|id| self.catalog.setting(id))?;
        let edition = self.catalog.edition(edition)?;
        if edition.allows_setting(&setting.id) {
            Some(setting)
        } else {
            None
        }
    }
}

fn apply_override<Id: Clone + Eq>(base: &[Id], block: Option<&OverrideBlock<Id>>) -> Vec<Id> {
    match block {
        Some(block) => block.apply(base),
        None => base.to_vec(),
    }
}

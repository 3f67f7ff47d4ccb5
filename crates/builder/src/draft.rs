//! The in-progress character document.
//!
//! `CharacterDraft` is the single mutable entity of the wizard core. It is
//! created when the wizard opens, mutated exclusively through the builder
//! state machine, and handed across the persistence boundary as an opaque
//! serializable payload on completion. Fields are private: all writes go
//! through the crate-internal setters the machine calls after validating.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use charbldr_domain::{
    AlignmentId, ClassId, DraftId, EditionId, EquipmentPackId, RaceId, SettingId, SubclassId,
};

/// One class the character is taking levels in.
///
/// A freshly added slot has no class picked yet; the class step is complete
/// once at least one slot has both a class and a non-zero level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAllocation {
    #[serde(default)]
    pub class: Option<ClassId>,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub subclass: Option<SubclassId>,
}

impl ClassAllocation {
    /// Returns true once this slot names a class with at least one level.
    pub fn is_filled(&self) -> bool {
        self.class.is_some() && self.level > 0
    }
}

/// The character being built.
///
/// # Invariants
///
/// - Every id stored here was offered by the option resolver for the draft's
///   current edition/setting (the machine refuses anything else)
/// - Total level vs. the sum of class levels is operator-driven and NOT
///   enforced here; only slot creation gates on it
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterDraft {
    id: DraftId,
    edition: Option<EditionId>,
    setting: Option<SettingId>,
    race: Option<RaceId>,
    total_level: u8,
    classes: Vec<ClassAllocation>,
    alignment: Option<AlignmentId>,
    equipment: Option<EquipmentPackId>,
    /// Starting gold, derived from the selected equipment pack
    wealth: u32,
    created_at: DateTime<Utc>,
}

impl CharacterDraft {
    /// Create an empty draft with the fixed initial shape: no selections,
    /// no class slots, zero wealth.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: DraftId::new(),
            edition: None,
            setting: None,
            race: None,
            total_level: 0,
            classes: Vec::new(),
            alignment: None,
            equipment: None,
            wealth: 0,
            created_at: now,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> DraftId {
        self.id
    }

    #[inline]
    pub fn edition(&self) -> Option<&EditionId> {
        self.edition.as_ref()
    }

    #[inline]
    pub fn setting(&self) -> Option<&SettingId> {
        self.setting.as_ref()
    }

    #[inline]
    pub fn race(&self) -> Option<&RaceId> {
        self.race.as_ref()
    }

    #[inline]
    pub fn total_level(&self) -> u8 {
        self.total_level
    }

    #[inline]
    pub fn classes(&self) -> &[ClassAllocation] {
        &self.classes
    }

    #[inline]
    pub fn alignment(&self) -> Option<&AlignmentId> {
        self.alignment.as_ref()
    }

    #[inline]
    pub fn equipment(&self) -> Option<&EquipmentPackId> {
        self.equipment.as_ref()
    }

    #[inline]
    pub fn wealth(&self) -> u32 {
        self.wealth
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sum of levels across all class slots.
    pub fn allocated_levels(&self) -> u32 {
        self.classes.iter().map(|c| u32::from(c.level)).sum()
    }

    /// Class ids currently selected, skipping empty slots.
    pub fn selected_classes(&self) -> Vec<ClassId> {
        self.classes
            .iter()
            .filter_map(|c| c.class.clone())
            .collect()
    }

    // =========================================================================
    // Crate-internal mutation (called by the state machine only)
    // =========================================================================

    pub(crate) fn set_edition(&mut self, edition: Option<EditionId>) {
        self.edition = edition;
    }

    pub(crate) fn set_setting(&mut self, setting: Option<SettingId>) {
        self.setting = setting;
    }

    pub(crate) fn set_race(&mut self, race: Option<RaceId>) {
        self.race = race;
    }

    pub(crate) fn set_total_level(&mut self, level: u8) {
        self.total_level = level;
    }

    pub(crate) fn set_alignment(&mut self, alignment: Option<AlignmentId>) {
        self.alignment = alignment;
    }

    pub(crate) fn set_equipment(&mut self, equipment: Option<EquipmentPackId>, wealth: u32) {
        self.equipment = equipment;
        self.wealth = wealth;
    }

    pub(crate) fn push_class_slot(&mut self) {
        self.classes.push(ClassAllocation::default());
    }

    pub(crate) fn remove_class_slot(&mut self, slot: usize) {
        if slot < self.classes.len() {
            self.classes.remove(slot);
        }
    }

    pub(crate) fn class_slot_mut(&mut self, slot: usize) -> Option<&mut ClassAllocation> {
        self.classes.get_mut(slot)
    }

    pub(crate) fn retain_class_slots<F: FnMut(&ClassAllocation) -> bool>(&mut self, keep: F) {
        self.classes.retain(keep);
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format matching the wire shape handed to the save boundary.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CharacterDraftWireFormat {
    id: DraftId,
    edition: Option<EditionId>,
    setting: Option<SettingId>,
    race: Option<RaceId>,
    total_level: u8,
    classes: Vec<ClassAllocation>,
    alignment: Option<AlignmentId>,
    equipment: Option<EquipmentPackId>,
    wealth: u32,
    created_at: DateTime<Utc>,
}

impl Serialize for CharacterDraft {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = CharacterDraftWireFormat {
            id: self.id,
            edition: self.edition.clone(),
            setting: self.setting.clone(),
            race: self.race.clone(),
            total_level: self.total_level,
            classes: self.classes.clone(),
            alignment: self.alignment.clone(),
            equipment: self.equipment.clone(),
            wealth: self.wealth,
            created_at: self.created_at,
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CharacterDraft {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CharacterDraftWireFormat::deserialize(deserializer)?;
        Ok(CharacterDraft {
            id: wire.id,
            edition: wire.edition,
            setting: wire.setting,
            race: wire.race,
            total_level: wire.total_level,
            classes: wire.classes,
            alignment: wire.alignment,
            equipment: wire.equipment,
            wealth: wire.wealth,
            created_at: wire.created_at,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

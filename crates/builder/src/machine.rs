//! The builder state machine.
//!
//! Owns the draft, the ordered step sequence, and the cursor, and performs
//! the invalidation cascade when an earlier field changes. Every public
//! method runs synchronously to completion, so each call is one atomic
//! state transition: callers never observe a half-applied cascade.
//!
//! # Failure semantics
//!
//! Setters reject illegal values by simply not updating state. All inputs
//! originate from option lists this core itself generated, so an illegal
//! value is a programming error upstream, not a user error to report - a
//! closed, trusted-input design rather than a boundary-validating API.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use charbldr_domain::{
    AlignmentId, Catalog, ClassId, EditionId, EquipmentPackId, RaceId, SettingId, SubclassId,
};

use crate::draft::CharacterDraft;
use crate::notice::{Notice, NoticeBoard};
use crate::resolver::OptionResolver;
use crate::steps::{default_steps, Step, StepId};
use crate::validator::{alignment_is_allowed, class_is_allowed, RestrictionReason};

/// The character creation wizard core.
///
/// Created when the wizard opens, discarded when it closes or completes.
/// The catalog is injected and shared read-only.
pub struct CharacterBuilder {
    catalog: Arc<Catalog>,
    steps: Vec<Step>,
    cursor: usize,
    draft: CharacterDraft,
    notices: NoticeBoard,
}

impl CharacterBuilder {
    /// Open a wizard over the given catalog with the default step sequence
    /// and an empty draft.
    pub fn new(catalog: Arc<Catalog>, now: DateTime<Utc>) -> Self {
        Self {
            catalog,
            steps: default_steps(),
            cursor: 0,
            draft: CharacterDraft::new(now),
            notices: NoticeBoard::new(),
        }
    }

    // =========================================================================
    // Step navigation
    // =========================================================================

    /// The step the wizard is currently showing.
    pub fn current_step(&self) -> &Step {
        &self.steps[self.cursor.min(self.steps.len() - 1)]
    }

    /// The configured step sequence.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Move to the next step. Permitted only when the active step's selector
    /// holds; a no-op at the terminal step. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 >= self.steps.len() {
            return false;
        }
        if !self.steps[self.cursor].is_complete(&self.draft) {
            return false;
        }
        self.cursor += 1;
        tracing::debug!(step = ?self.steps[self.cursor].id, "Advanced to step");
        true
    }

    /// Move to the previous step; a no-op at the initial step. Returns
    /// whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        tracing::debug!(step = ?self.steps[self.cursor].id, "Retreated to step");
        true
    }

    /// True when every step's selector holds simultaneously, independent of
    /// which step is active. Gates the "Finish" action.
    pub fn is_complete(&self) -> bool {
        self.steps.iter().all(|step| step.is_complete(&self.draft))
    }

    /// The completed draft, ready to hand to the persistence boundary.
    /// `None` while any step is incomplete.
    pub fn finish(&self) -> Option<&CharacterDraft> {
        self.is_complete().then_some(&self.draft)
    }

    // =========================================================================
    // State access
    // =========================================================================

    pub fn draft(&self) -> &CharacterDraft {
        &self.draft
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn notices(&self) -> &[Notice] {
        self.notices.all()
    }

    /// Dismiss the invalidation notice posted for a step, if any.
    pub fn dismiss_notice(&mut self, step: StepId) {
        self.notices.dismiss(step);
    }

    // =========================================================================
    // Field setters
    // =========================================================================

    /// Choose the edition. Invalidates every downstream selection the new
    /// edition no longer supports, posting a notice per cleared field.
    pub fn set_edition(&mut self, edition: EditionId) {
        if self.catalog.edition(&edition).is_none() {
            tracing::debug!(%edition, "Ignoring unknown edition");
            return;
        }
        if self.draft.edition() == Some(&edition) {
            return;
        }
        self.draft.set_edition(Some(edition));
        self.revalidate_downstream();
    }

    /// Choose a campaign setting. The setting must be permitted by the
    /// chosen edition.
    pub fn set_setting(&mut self, setting: SettingId) {
        let resolver = OptionResolver::new(&self.catalog);
        if !resolver.settings(self.draft.edition()).contains(&setting) {
            tracing::debug!(%setting, "Ignoring setting not offered by edition");
            return;
        }
        if self.draft.setting() == Some(&setting) {
            return;
        }
        self.draft.set_setting(Some(setting));
        self.revalidate_downstream();
    }

    /// Unselect the campaign setting (playing the edition baseline).
    pub fn clear_setting(&mut self) {
        if self.draft.setting().is_none() {
            return;
        }
        self.draft.set_setting(None);
        self.revalidate_downstream();
    }

    /// Choose the race from the currently resolvable race options.
    pub fn set_race(&mut self, race: RaceId) {
        let resolver = OptionResolver::new(&self.catalog);
        let offered = resolver.races(self.draft.edition(), self.draft.setting());
        if !offered.contains(&race) {
            tracing::debug!(%race, "Ignoring race not offered by edition/setting");
            return;
        }
        if self.draft.race() == Some(&race) {
            return;
        }
        self.draft.set_race(Some(race));
        self.revalidate_downstream();
    }

    /// Set the character's total level. The relation between total level and
    /// the sum of class levels is operator-driven; only slot creation gates
    /// on it.
    pub fn set_total_level(&mut self, level: u8) {
        self.draft.set_total_level(level);
    }

    /// Append a new class-allocation slot. Permitted only while the sum of
    /// already-allocated class levels is below the total level. Returns
    /// whether a slot was added.
    pub fn add_class(&mut self) -> bool {
        if self.draft.allocated_levels() >= u32::from(self.draft.total_level()) {
            tracing::debug!("Rejected class slot: all levels allocated");
            return false;
        }
        self.draft.push_class_slot();
        true
    }

    /// Remove a class-allocation slot. Removing a class can only widen the
    /// permitted alignment set, so no cascade is needed.
    pub fn remove_class(&mut self, slot: usize) {
        self.draft.remove_class_slot(slot);
    }

    /// Pick the class for a slot. The class must be offered by the current
    /// edition/setting and admit the chosen race. An alignment the new class
    /// excludes is treated as the downstream field: the class is accepted
    /// and the alignment cleared with a notice.
    pub fn set_class(&mut self, slot: usize, class: ClassId) {
        let resolver = OptionResolver::new(&self.catalog);
        let offered = resolver.classes(self.draft.edition(), self.draft.setting());
        if !offered.contains(&class) {
            tracing::debug!(%class, "Ignoring class not offered by edition/setting");
            return;
        }
        if let Some(spec) = self.catalog.class(&class) {
            let eligibility = class_is_allowed(spec, &self.draft);
            if !eligibility.allowed
                && eligibility.reason
                    == Some(RestrictionReason::RaceRestriction)
            {
                tracing::debug!(%class, "Ignoring class barred by race restriction");
                return;
            }
        }
        let Some(allocation) = self.draft.class_slot_mut(slot) else {
            return;
        };
        if allocation.class.as_ref() == Some(&class) {
            return;
        }
        allocation.class = Some(class);
        allocation.subclass = None;
        self.revalidate_downstream();
    }

    /// Set the level allocated to a class slot.
    pub fn set_class_level(&mut self, slot: usize, level: u8) {
        let Some(allocation) = self.draft.class_slot_mut(slot) else {
            return;
        };
        if allocation.level == level {
            return;
        }
        allocation.level = level;
        // Lowering the level can retract an already-chosen subclass group
        self.revalidate_downstream();
    }

    /// Pick a subclass for a slot. The slot's class must offer it in some
    /// group already unlocked at the slot's level.
    pub fn set_subclass(&mut self, slot: usize, subclass: SubclassId) {
        let Some(edition) = self.draft.edition().cloned() else {
            return;
        };
        let Some(allocation) = self.draft.classes().get(slot) else {
            return;
        };
        let Some(class) = allocation.class.clone() else {
            return;
        };
        let level = allocation.level;
        let resolver = OptionResolver::new(&self.catalog);
        let offered = resolver
            .subclass_groups(&class, &edition, level)
            .iter()
            .any(|group| group.offers(&subclass));
        if !offered {
            tracing::debug!(%subclass, "Ignoring subclass not offered at current level");
            return;
        }
        if let Some(allocation) = self.draft.class_slot_mut(slot) {
            allocation.subclass = Some(subclass);
        }
    }

    /// Choose the alignment. An alignment disabled by the selected classes'
    /// intersection is refused: choices that would orphan an existing class
    /// cannot be made.
    pub fn set_alignment(&mut self, alignment: AlignmentId) {
        let selected = self.draft.selected_classes();
        if !alignment_is_allowed(&self.catalog, self.draft.edition(), &selected, &alignment) {
            tracing::debug!(%alignment, "Ignoring alignment excluded by selected classes");
            return;
        }
        self.draft.set_alignment(Some(alignment));
    }

    /// Choose a starting equipment pack; derives the draft's wealth from it.
    pub fn set_equipment(&mut self, pack: EquipmentPackId) {
        let resolver = OptionResolver::new(&self.catalog);
        if !resolver.equipment_packs(self.draft.edition()).contains(&pack) {
            tracing::debug!(%pack, "Ignoring equipment pack not offered by edition");
            return;
        }
        let wealth = self
            .catalog
            .equipment_pack(&pack)
            .map(|p| p.wealth)
            .unwrap_or(0);
        self.draft.set_equipment(Some(pack), wealth);
    }

    // =========================================================================
    // Invalidation cascade
    // =========================================================================

    /// Re-check every downstream selection against the current upstream
    /// state, clearing what is no longer legal and posting one notice per
    /// cleared field. Runs strictly top-to-bottom in step order so each
    /// check sees the already-settled state above it.
    fn revalidate_downstream(&mut self) {
        self.revalidate_setting();
        self.revalidate_race();
        self.revalidate_classes();
        self.revalidate_alignment();
        self.revalidate_equipment();
    }

    fn revalidate_setting(&mut self) {
        let Some(setting) = self.draft.setting().cloned() else {
            return;
        };
        let resolver = OptionResolver::new(&self.catalog);
        if resolver.settings(self.draft.edition()).contains(&setting) {
            return;
        }
        let name = self.display_name_setting(&setting);
        self.draft.set_setting(None);
        tracing::debug!(setting = %setting, "Cleared setting during cascade");
        self.notices.post(
            StepId::Setting,
            format!("Setting '{name}' is not available in the selected edition"),
        );
    }

    fn revalidate_race(&mut self) {
        let Some(race) = self.draft.race().cloned() else {
            return;
        };
        let resolver = OptionResolver::new(&self.catalog);
        let offered = resolver.races(self.draft.edition(), self.draft.setting());
        if offered.contains(&race) {
            return;
        }
        let name = self.display_name_race(&race);
        self.draft.set_race(None);
        tracing::debug!(race = %race, "Cleared race during cascade");
        self.notices.post(
            StepId::Race,
            format!("Race '{name}' is not available with the selected edition and setting"),
        );
    }

    fn revalidate_classes(&mut self) {
        let resolver = OptionResolver::new(&self.catalog);
        let offered = resolver.classes(self.draft.edition(), self.draft.setting());

        // Collect verdicts first, then mutate: each removal names its class
        let mut removed: Vec<(ClassId, String)> = Vec::new();
        for allocation in self.draft.classes() {
            let Some(class) = &allocation.class else {
                continue;
            };
            if !offered.contains(class) {
                removed.push((
                    class.clone(),
                    "is not available with the selected edition and setting".to_string(),
                ));
                continue;
            }
            if let Some(spec) = self.catalog.class(class) {
                let eligibility = class_is_allowed(spec, &self.draft);
                if !eligibility.allowed
                    && eligibility.reason
                        == Some(RestrictionReason::RaceRestriction)
                {
                    removed.push((
                        class.clone(),
                        "is not available to the selected race".to_string(),
                    ));
                }
            }
        }
        for (class, why) in &removed {
            let name = self.display_name_class(class);
            self.draft
                .retain_class_slots(|slot| slot.class.as_ref() != Some(class));
            tracing::debug!(class = %class, "Removed class during cascade");
            self.notices
                .post(StepId::Class, format!("Class '{name}' {why}"));
        }

        self.revalidate_subclasses();
    }

    fn revalidate_subclasses(&mut self) {
        let Some(edition) = self.draft.edition().cloned() else {
            return;
        };
        // (slot index, subclass) pairs that are no longer offered
        let mut stale: Vec<(usize, SubclassId)> = Vec::new();
        {
            let resolver = OptionResolver::new(&self.catalog);
            for (index, allocation) in self.draft.classes().iter().enumerate() {
                let (Some(class), Some(subclass)) = (&allocation.class, &allocation.subclass)
                else {
                    continue;
                };
                let offered = resolver
                    .subclass_groups(class, &edition, allocation.level)
                    .iter()
                    .any(|group| group.offers(subclass));
                if !offered {
                    stale.push((index, subclass.clone()));
                }
            }
        }
        for (index, subclass) in stale {
            if let Some(allocation) = self.draft.class_slot_mut(index) {
                allocation.subclass = None;
            }
            tracing::debug!(subclass = %subclass, "Cleared subclass during cascade");
            self.notices.post(
                StepId::Class,
                format!("Subclass '{subclass}' is no longer offered at the allocated level"),
            );
        }
    }

    fn revalidate_alignment(&mut self) {
        let Some(alignment) = self.draft.alignment().cloned() else {
            return;
        };
        let selected = self.draft.selected_classes();
        if alignment_is_allowed(&self.catalog, self.draft.edition(), &selected, &alignment) {
            return;
        }
        let name = self.display_name_alignment(&alignment);
        self.draft.set_alignment(None);
        tracing::debug!(alignment = %alignment, "Cleared alignment during cascade");
        self.notices.post(
            StepId::Alignment,
            format!("Alignment '{name}' is not permitted by the selected edition and classes"),
        );
    }

    fn revalidate_equipment(&mut self) {
        let Some(pack) = self.draft.equipment().cloned() else {
            return;
        };
        let resolver = OptionResolver::new(&self.catalog);
        if resolver.equipment_packs(self.draft.edition()).contains(&pack) {
            return;
        }
        let name = self.display_name_pack(&pack);
        self.draft.set_equipment(None, 0);
        tracing::debug!(pack = %pack, "Cleared equipment pack during cascade");
        self.notices.post(
            StepId::Equipment,
            format!("Equipment pack '{name}' is not available in the selected edition"),
        );
    }

    // =========================================================================
    // Display names for notices
    // =========================================================================

    fn display_name_setting(&self, id: &SettingId) -> String {
        self.catalog
            .setting(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn display_name_race(&self, id: &RaceId) -> String {
        self.catalog
            .race(id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn display_name_class(&self, id: &ClassId) -> String {
        self.catalog
            .class(id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn display_name_alignment(&self, id: &AlignmentId) -> String {
        self.draft
            .edition()
            .and_then(|edition| self.catalog.edition(edition))
            .and_then(|edition| edition.alignment(id))
            .map(|a| a.label.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn display_name_pack(&self, id: &EquipmentPackId) -> String {
        self.catalog
            .equipment_pack(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

//! End-to-end wizard flows.
//!
//! Each test drives the full builder the way the UI shell would: choose a
//! field, advance, and let the machine recompute downstream validity. All
//! flows run over the shared fixture catalog; the core performs no I/O, so
//! no harness beyond the fixtures is needed.

use std::sync::Arc;

use chrono::Utc;

use charbldr_domain::{AlignmentId, ClassId, EditionId, EquipmentPackId, RaceId, SettingId};

use crate::machine::CharacterBuilder;
use crate::steps::StepId;
use crate::test_fixtures::fixture_catalog;
use crate::validator::allowed_alignments;

fn open_wizard() -> CharacterBuilder {
    CharacterBuilder::new(Arc::new(fixture_catalog()), Utc::now())
}

#[test]
fn happy_path_single_class_fighter() {
    let mut wizard = open_wizard();

    // edition -> (setting skipped) -> race -> level -> class -> alignment -> equipment
    wizard.set_edition(EditionId::new("5e"));
    assert!(wizard.advance());
    assert!(wizard.advance()); // setting left unset

    wizard.set_race(RaceId::new("human"));
    assert!(wizard.advance());

    wizard.set_total_level(3);
    assert!(wizard.advance());

    assert!(wizard.add_class());
    wizard.set_class(0, ClassId::new("fighter"));
    wizard.set_class_level(0, 3);
    assert!(wizard.advance());

    wizard.set_alignment(AlignmentId::new("lg"));
    assert!(wizard.advance());

    wizard.set_equipment(EquipmentPackId::new("explorers-pack"));
    assert_eq!(wizard.current_step().id, StepId::Equipment);

    // Finish is enabled and the payload carries every choice
    assert!(wizard.is_complete());
    let draft = wizard.finish().expect("wizard complete");
    assert_eq!(draft.edition(), Some(&EditionId::new("5e")));
    assert!(draft.setting().is_none());
    assert_eq!(draft.race(), Some(&RaceId::new("human")));
    assert_eq!(draft.total_level(), 3);
    assert_eq!(draft.classes().len(), 1);
    assert_eq!(draft.classes()[0].class, Some(ClassId::new("fighter")));
    assert_eq!(draft.classes()[0].level, 3);
    assert_eq!(draft.alignment(), Some(&AlignmentId::new("lg")));
    assert_eq!(draft.wealth(), 10);
    assert!(wizard.notices().is_empty());
}

#[test]
fn restricted_class_disables_incompatible_alignment() {
    let mut wizard = open_wizard();
    wizard.set_edition(EditionId::new("5e"));
    wizard.set_race(RaceId::new("human"));
    wizard.set_total_level(1);
    wizard.add_class();
    wizard.set_class(0, ClassId::new("paladin"));

    // The alignment step presents ce as disabled...
    let options = allowed_alignments(
        wizard.catalog(),
        wizard.draft().edition(),
        &wizard.draft().selected_classes(),
    );
    let ce = options
        .iter()
        .find(|o| o.id == AlignmentId::new("ce"))
        .expect("ce in the 5e grid");
    assert!(ce.disabled);

    // ...and the machine refuses it outright
    wizard.set_alignment(AlignmentId::new("ce"));
    assert!(wizard.draft().alignment().is_none());

    wizard.set_alignment(AlignmentId::new("lg"));
    assert_eq!(wizard.draft().alignment(), Some(&AlignmentId::new("lg")));
}

#[test]
fn edition_switch_mid_flow_cascades_and_recovers() {
    let mut wizard = open_wizard();
    wizard.set_edition(EditionId::new("5e"));
    wizard.set_setting(SettingId::new("dark-sun"));
    wizard.set_race(RaceId::new("mul"));
    wizard.set_total_level(1);
    wizard.add_class();
    wizard.set_class(0, ClassId::new("rogue"));
    wizard.set_class_level(0, 1);

    // Switching to 2e invalidates setting, race, and class in one transition
    wizard.set_edition(EditionId::new("2e"));
    let draft = wizard.draft();
    assert!(draft.setting().is_none());
    assert!(draft.race().is_none());
    assert!(draft.selected_classes().is_empty());

    let steps: Vec<StepId> = wizard.notices().iter().map(|n| n.step).collect();
    assert!(steps.contains(&StepId::Setting));
    assert!(steps.contains(&StepId::Race));
    assert!(steps.contains(&StepId::Class));

    // The wizard recovers by reselecting from the new option lists
    wizard.set_race(RaceId::new("human"));
    wizard.add_class();
    wizard.set_class(0, ClassId::new("paladin"));
    wizard.set_class_level(0, 1);
    wizard.set_alignment(AlignmentId::new("lg"));
    assert_eq!(wizard.draft().alignment(), Some(&AlignmentId::new("lg")));
}

#[test]
fn completed_draft_serializes_for_the_save_boundary() {
    let mut wizard = open_wizard();
    wizard.set_edition(EditionId::new("5e"));
    wizard.set_race(RaceId::new("dwarf"));
    wizard.set_total_level(1);
    wizard.add_class();
    wizard.set_class(0, ClassId::new("cleric"));
    wizard.set_class_level(0, 1);
    wizard.set_alignment(AlignmentId::new("ng"));
    wizard.set_equipment(EquipmentPackId::new("dungeoneers-pack"));

    let draft = wizard.finish().expect("wizard complete");
    let payload = serde_json::to_value(draft).expect("serializable payload");
    assert_eq!(payload["edition"], "5e");
    assert_eq!(payload["race"], "dwarf");
    assert_eq!(payload["classes"][0]["class"], "cleric");
    assert_eq!(payload["wealth"], 12);
}

#[test]
fn multiclass_flow_respects_level_budget_and_intersection() {
    let mut wizard = open_wizard();
    wizard.set_edition(EditionId::new("5e"));
    wizard.set_race(RaceId::new("human"));
    wizard.set_total_level(2);

    wizard.add_class();
    wizard.set_class(0, ClassId::new("paladin"));
    wizard.set_class_level(0, 1);

    wizard.add_class();
    wizard.set_class(1, ClassId::new("monk"));
    wizard.set_class_level(1, 1);

    // Budget exhausted
    assert!(!wizard.add_class());

    // paladin {lg, ng} ∩ monk {ng, ne} leaves only ng selectable
    let options = allowed_alignments(
        wizard.catalog(),
        wizard.draft().edition(),
        &wizard.draft().selected_classes(),
    );
    let enabled: Vec<&AlignmentId> = options
        .iter()
        .filter(|o| !o.disabled)
        .map(|o| &o.id)
        .collect();
    assert_eq!(enabled, vec![&AlignmentId::new("ng")]);

    wizard.set_alignment(AlignmentId::new("ng"));
    wizard.set_equipment(EquipmentPackId::new("explorers-pack"));
    assert!(wizard.is_complete());
}

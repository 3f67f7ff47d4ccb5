//! Fixture catalog and helpers shared across builder tests.
//!
//! One deliberately small but fully cross-referenced catalog: two editions,
//! two settings exercising every override shape, restricted and
//! unrestricted classes, and a subclass group with a selection level.

use std::collections::HashMap;

use charbldr_domain::{
    Alignment, AlignmentGate, AlignmentId, Catalog, CatalogData, ClassId, ClassRequirement,
    ClassSpec, Edition, EditionId, EquipmentPack, EquipmentPackId, OverrideBlock, Race, RaceGate,
    RaceId, Setting, SettingId, SubclassGroup, SubclassId, SubclassOption,
};

fn race(id: &str, name: &str) -> Race {
    Race {
        id: RaceId::new(id),
        name: name.to_string(),
        description: None,
    }
}

fn alignment(id: &str, label: &str) -> Alignment {
    Alignment {
        id: AlignmentId::new(id),
        label: label.to_string(),
    }
}

fn plain_class(id: &str, name: &str) -> ClassSpec {
    ClassSpec {
        id: ClassId::new(id),
        name: name.to_string(),
        requirements: HashMap::new(),
        definitions: HashMap::new(),
    }
}

/// The nine-alignment grid used by the 5e fixture edition.
fn full_grid() -> Vec<Alignment> {
    vec![
        alignment("lg", "Lawful Good"),
        alignment("ng", "Neutral Good"),
        alignment("cg", "Chaotic Good"),
        alignment("ln", "Lawful Neutral"),
        alignment("n", "True Neutral"),
        alignment("cn", "Chaotic Neutral"),
        alignment("le", "Lawful Evil"),
        alignment("ne", "Neutral Evil"),
        alignment("ce", "Chaotic Evil"),
    ]
}

/// Build the shared fixture catalog.
///
/// - `5e`: four base races, five classes, full alignment grid, two settings
///   (`dark-sun` removes elf / adds mul; `ravenloft` restricts classes with
///   an `only` block), two equipment packs.
/// - `2e`: two races, two classes, three alignments, no settings - paladin
///   is human-only and lawful-good-only there.
/// - Restricted classes in 5e: paladin permits {lg, ng}, monk {ng, ne}.
pub fn fixture_catalog() -> Catalog {
    let mut paladin = plain_class("paladin", "Paladin");
    paladin.requirements.insert(
        EditionId::new("5e"),
        ClassRequirement {
            races: RaceGate::All,
            alignments: AlignmentGate::Only(vec![AlignmentId::new("lg"), AlignmentId::new("ng")]),
        },
    );
    paladin.requirements.insert(
        EditionId::new("2e"),
        ClassRequirement {
            races: RaceGate::Only(vec![RaceId::new("human")]),
            alignments: AlignmentGate::Only(vec![AlignmentId::new("lg")]),
        },
    );

    let mut monk = plain_class("monk", "Monk");
    monk.requirements.insert(
        EditionId::new("5e"),
        ClassRequirement {
            races: RaceGate::All,
            alignments: AlignmentGate::Only(vec![AlignmentId::new("ng"), AlignmentId::new("ne")]),
        },
    );

    let mut fighter = plain_class("fighter", "Fighter");
    fighter.definitions.insert(
        EditionId::new("5e"),
        vec![SubclassGroup {
            label: "Martial Archetype".to_string(),
            selection_level: 3,
            options: vec![
                SubclassOption {
                    id: SubclassId::new("champion"),
                    name: "Champion".to_string(),
                },
                SubclassOption {
                    id: SubclassId::new("battle-master"),
                    name: "Battle Master".to_string(),
                },
            ],
        }],
    );

    let data = CatalogData {
        editions: vec![
            Edition {
                id: EditionId::new("5e"),
                name: "5th Edition".to_string(),
                races: vec![
                    RaceId::new("human"),
                    RaceId::new("elf"),
                    RaceId::new("dwarf"),
                    RaceId::new("halfling"),
                ],
                classes: vec![
                    ClassId::new("fighter"),
                    ClassId::new("rogue"),
                    ClassId::new("paladin"),
                    ClassId::new("monk"),
                    ClassId::new("cleric"),
                ],
                alignments: full_grid(),
                settings: vec![SettingId::new("dark-sun"), SettingId::new("ravenloft")],
                equipment_packs: vec![
                    EquipmentPackId::new("explorers-pack"),
                    EquipmentPackId::new("dungeoneers-pack"),
                ],
            },
            Edition {
                id: EditionId::new("2e"),
                name: "2nd Edition".to_string(),
                races: vec![RaceId::new("human"), RaceId::new("dwarf")],
                classes: vec![ClassId::new("fighter"), ClassId::new("paladin")],
                alignments: vec![
                    alignment("lg", "Lawful Good"),
                    alignment("ng", "Neutral Good"),
                    alignment("ce", "Chaotic Evil"),
                ],
                settings: vec![],
                equipment_packs: vec![],
            },
        ],
        settings: vec![
            Setting {
                id: SettingId::new("dark-sun"),
                name: "Dark Sun".to_string(),
                edition: EditionId::new("5e"),
                races: Some(OverrideBlock {
                    only: None,
                    add: Some(vec![RaceId::new("mul")]),
                    remove: Some(vec![RaceId::new("elf")]),
                }),
                classes: None,
            },
            Setting {
                id: SettingId::new("ravenloft"),
                name: "Ravenloft".to_string(),
                edition: EditionId::new("5e"),
                races: None,
                classes: Some(OverrideBlock {
                    only: Some(vec![ClassId::new("fighter"), ClassId::new("cleric")]),
                    add: None,
                    remove: None,
                }),
            },
        ],
        races: vec![
            race("human", "Human"),
            race("elf", "Elf"),
            race("dwarf", "Dwarf"),
            race("halfling", "Halfling"),
            race("mul", "Mul"),
        ],
        classes: vec![
            fighter,
            plain_class("rogue", "Rogue"),
            paladin,
            monk,
            plain_class("cleric", "Cleric"),
        ],
        equipment_packs: vec![
            EquipmentPack {
                id: EquipmentPackId::new("explorers-pack"),
                name: "Explorer's Pack".to_string(),
                wealth: 10,
                contents: vec!["Bedroll".to_string(), "Rations (10 days)".to_string()],
            },
            EquipmentPack {
                id: EquipmentPackId::new("dungeoneers-pack"),
                name: "Dungeoneer's Pack".to_string(),
                wealth: 12,
                contents: vec!["Crowbar".to_string(), "Hammer".to_string()],
            },
        ],
        spells: vec![],
        monsters: vec![],
    };

    Catalog::new(data).expect("fixture catalog is internally consistent")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_catalog_builds() {
        let catalog = fixture_catalog();
        assert_eq!(catalog.editions().len(), 2);
    }
}

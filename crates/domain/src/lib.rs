//! CharBldr domain library.
//!
//! Reference data for the character-builder core: typed identifiers, the
//! immutable catalog tables (editions, settings, races, classes, equipment,
//! compendium), and the load-time validation that keeps every
//! cross-reference honest before a wizard ever consults them.

pub mod catalog;
pub mod error;
pub mod ids;

pub use catalog::{
    Alignment, AlignmentGate, Catalog, CatalogData, ClassRequirement, ClassSpec, Edition,
    EquipmentPack, Monster, OverrideBlock, Race, RaceGate, Setting, Spell, SubclassGroup,
    SubclassOption,
};
pub use error::CatalogError;
pub use ids::{
    AlignmentId, ClassId, DraftId, EditionId, EquipmentPackId, MonsterId, RaceId, SettingId,
    SpellId, SubclassId,
};

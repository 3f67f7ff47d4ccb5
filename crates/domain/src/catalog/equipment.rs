//! Starting equipment packs.

use serde::{Deserialize, Serialize};

use crate::ids::EquipmentPackId;

/// A bundled starting-equipment choice. Selecting a pack also confers its
/// starting wealth on the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentPack {
    pub id: EquipmentPackId,
    pub name: String,
    /// Starting gold granted with this pack
    pub wealth: u32,
    /// Item names included in the pack, for display
    #[serde(default)]
    pub contents: Vec<String>,
}

//! Race reference records.

use serde::{Deserialize, Serialize};

use crate::ids::RaceId;

/// A playable race. Immutable reference data; which races are actually
/// offered is decided per edition/setting by the option resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: RaceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

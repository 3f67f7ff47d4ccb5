//! Setting - a campaign world overlay on an edition.
//!
//! A setting does not define options of its own; it rewrites an edition's
//! base race/class lists through [`OverrideBlock`]s.

use serde::{Deserialize, Serialize};

use crate::ids::{ClassId, EditionId, RaceId, SettingId};

/// A campaign setting (e.g. "Dark Sun") playable under one edition.
/// Immutable reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: SettingId,
    pub name: String,
    /// The edition this setting overlays
    pub edition: EditionId,
    /// Override applied to the edition's race list
    #[serde(default)]
    pub races: Option<OverrideBlock<RaceId>>,
    /// Override applied to the edition's class list
    #[serde(default)]
    pub classes: Option<OverrideBlock<ClassId>>,
}

/// Rewrite rules a setting applies to an edition's base option list.
///
/// Precedence: `only` replaces the base list entirely and wins over any
/// `add`/`remove` in the same block; otherwise `remove` is applied before
/// `add`. Removing an absent id is a no-op; adding an id already present
/// keeps a single copy. Base-list order is preserved, additions are appended
/// in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "Id: Deserialize<'de>"))]
pub struct OverrideBlock<Id> {
    #[serde(default)]
    pub only: Option<Vec<Id>>,
    #[serde(default)]
    pub add: Option<Vec<Id>>,
    #[serde(default)]
    pub remove: Option<Vec<Id>>,
}

impl<Id: Clone + Eq> OverrideBlock<Id> {
    /// Apply this block to a base list, returning the rewritten list.
    pub fn apply(&self, base: &[Id]) -> Vec<Id> {
        if let Some(only) = &self.only {
            let mut out: Vec<Id> = Vec::with_capacity(only.len());
            for id in only {
                if !out.contains(id) {
                    out.push(id.clone());
                }
            }
            return out;
        }

        let removed: &[Id] = self.remove.as_deref().unwrap_or(&[]);
        let mut out: Vec<Id> = base
            .iter()
            .filter(|id| !removed.contains(id))
            .cloned()
            .collect();
        if let Some(add) = &self.add {
            for id in add {
                if !out.contains(id) {
                    out.push(id.clone());
                }
            }
        }
        out
    }

    /// All ids this block mentions, for load-time reference validation.
    pub fn referenced_ids(&self) -> impl Iterator<Item = &Id> {
        self.only
            .iter()
            .chain(self.add.iter())
            .chain(self.remove.iter())
            .flatten()
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog identifiers are human-readable slugs (`"5e"`, `"human"`,
/// `"fighter"`) that come from the reference data itself, so they wrap a
/// string rather than a UUID. Serde-transparent: a slug id serializes as a
/// plain JSON string.
macro_rules! define_slug_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

// Ruleset identifiers
define_slug_id!(EditionId);
define_slug_id!(SettingId);

// Character option identifiers
define_slug_id!(RaceId);
define_slug_id!(ClassId);
define_slug_id!(SubclassId);
define_slug_id!(AlignmentId);
define_slug_id!(EquipmentPackId);

// Compendium identifiers
define_slug_id!(SpellId);
define_slug_id!(MonsterId);

/// Identity of an in-progress character draft. Unlike catalog ids, drafts are
/// created fresh per wizard session, so this one is UUID-backed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(Uuid);

impl DraftId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DraftId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

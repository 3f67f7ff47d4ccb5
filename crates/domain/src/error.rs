//! Unified error type for catalog loading and validation.
//!
//! The builder core itself never raises: bad inputs at its boundary are
//! silent no-ops because every value it receives was generated from option
//! lists it produced. Errors exist only at the catalog load boundary, where
//! reference data enters the process.

use thiserror::Error;

/// Errors detected while constructing or validating a [`Catalog`].
///
/// [`Catalog`]: crate::catalog::Catalog
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two records in the same table share an id
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// A record references an id that does not exist in its table
    #[error("Unknown {kind} id {id} referenced by {referenced_by}")]
    UnknownReference {
        kind: &'static str,
        id: String,
        referenced_by: String,
    },

    /// A setting names an edition that does not list it back
    #[error("Setting {setting} belongs to edition {edition}, which does not list it")]
    SettingNotListed { setting: String, edition: String },

    /// Catalog JSON could not be parsed
    #[error("Catalog parse error: {0}")]
    Parse(String),
}

impl CatalogError {
    /// Create a duplicate-id error.
    pub fn duplicate(kind: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind,
            id: id.into(),
        }
    }

    /// Create an unknown-reference error naming the referencing record.
    pub fn unknown(
        kind: &'static str,
        id: impl Into<String>,
        referenced_by: impl Into<String>,
    ) -> Self {
        Self::UnknownReference {
            kind,
            id: id.into(),
            referenced_by: referenced_by.into(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

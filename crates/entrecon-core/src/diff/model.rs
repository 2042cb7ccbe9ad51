//! Snapshot diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Entries are emitted in identity-key order for deterministic
//! serialization.

use crate::model::{AggregatedRun, FieldValue};
use entrecon_core_types::CanonicalField;
use serde::{Deserialize, Serialize};

/// Classification of one identity key across two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    /// Present only in the current snapshot
    Added,
    /// Present only in the previous snapshot
    Removed,
    /// Present on both sides with at least one changed attribute
    Updated,
    /// Present on both sides with no attribute changes
    Unchanged,
}

impl DiffStatus {
    /// Lowercase label rendered in audit tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffStatus::Added => "added",
            DiffStatus::Removed => "removed",
            DiffStatus::Updated => "updated",
            DiffStatus::Unchanged => "unchanged",
        }
    }
}

impl std::fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified identity key, with both sides' runs where present.
///
/// `changed_fields` is populated only for `Updated`, in the category's
/// comparison order, and is empty for every other status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffEntry {
    /// Identity key this entry classifies
    pub identity_key: String,
    /// Product code, taken from whichever side is present
    pub product_code: FieldValue,
    /// Classification of this key
    pub status: DiffStatus,
    /// Run from the previous snapshot (None when `Added`)
    pub previous: Option<AggregatedRun>,
    /// Run from the current snapshot (None when `Removed`)
    pub current: Option<AggregatedRun>,
    /// Attribute fields whose normalized values differ
    pub changed_fields: Vec<CanonicalField>,
}

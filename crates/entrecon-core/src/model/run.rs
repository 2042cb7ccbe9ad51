//! Aggregated runs: merged calendar-adjacent entitlement intervals.

use crate::model::canonical::CanonicalEntitlement;
use crate::model::value::FieldValue;
use entrecon_core_types::{CanonicalField, ProductCategory};
use serde::{Deserialize, Serialize};

/// One or more date-adjacent entitlement records with identical identity,
/// merged into a single contiguous interval.
///
/// Produced by the interval aggregator; immutable once emitted; consumed by
/// the differ or by rendering code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedRun {
    /// Identity key shared by all merged records
    pub identity_key: String,
    /// Category this run belongs to
    pub category: ProductCategory,
    /// Product code
    pub product_code: FieldValue,
    /// Product modifier
    pub product_modifier: FieldValue,
    /// Package name (apps only)
    pub package_name: FieldValue,
    /// Licensed quantity (apps only)
    pub quantity: FieldValue,
    /// Earliest start date of the merged group
    pub start_date: FieldValue,
    /// Latest end date of the merged group
    pub end_date: FieldValue,
    /// Number of input records merged into this run
    pub merged_count: usize,
}

impl AggregatedRun {
    /// Access a field by its canonical identifier.
    pub fn field(&self, field: CanonicalField) -> &FieldValue {
        match field {
            CanonicalField::ProductCode => &self.product_code,
            CanonicalField::ProductModifier => &self.product_modifier,
            CanonicalField::PackageName => &self.package_name,
            CanonicalField::Quantity => &self.quantity,
            CanonicalField::StartDate => &self.start_date,
            CanonicalField::EndDate => &self.end_date,
        }
    }

    /// View this run as a canonical entitlement spanning its merged
    /// interval. Re-aggregating the result reproduces the run's identity
    /// and interval, but its `merged_count` restarts at 1: the view is a
    /// single record and carries no memory of how many were merged.
    pub fn as_entitlement(&self) -> CanonicalEntitlement {
        CanonicalEntitlement {
            category: self.category,
            product_code: self.product_code.clone(),
            product_modifier: self.product_modifier.clone(),
            package_name: self.package_name.clone(),
            quantity: self.quantity.clone(),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

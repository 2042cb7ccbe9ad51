//! Canonical entitlement shape produced by the field normalizer.

use crate::model::value::FieldValue;
use entrecon_core_types::{CanonicalField, ProductCategory};
use serde::{Deserialize, Serialize};

/// One entitlement record resolved into the canonical shape for its
/// category.
///
/// Every field is either a normalized scalar or [`FieldValue::Absent`].
/// `package_name` and `quantity` are only populated for the apps category;
/// for models and data they are always `Absent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalEntitlement {
    /// Category this record belongs to
    pub category: ProductCategory,
    /// Product code, e.g. `RI-RISKMODELER`
    pub product_code: FieldValue,
    /// Product modifier / variant qualifier
    pub product_modifier: FieldValue,
    /// Package name (apps only)
    pub package_name: FieldValue,
    /// Licensed quantity (apps only)
    pub quantity: FieldValue,
    /// Entitlement start date
    pub start_date: FieldValue,
    /// Entitlement end date
    pub end_date: FieldValue,
}

impl CanonicalEntitlement {
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

    /// Deterministic composite key over the category's non-date identity
    /// fields. Two records with equal keys are the same logical entitlement
    /// line regardless of their date ranges.
    pub fn identity_key(&self) -> String {
        self.category
            .identity_fields()
            .iter()
            .map(|f| self.field(*f).key_segment())
            .collect::<Vec<_>>()
            .join("|")
    }
}

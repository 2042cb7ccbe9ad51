//! Canonical field identifiers and source-key alias tables.
//!
//! Entitlement records arrive from two different systems (the Salesforce
//! change-request payload and the live SML API) using inconsistent key
//! naming conventions for the same concept. Each canonical field carries an
//! ordered alias table; field resolution tries the aliases in order and
//! takes the first present, non-null value. Adding a new source schema is a
//! data change here, not a code change in the resolver.

use serde::{Deserialize, Serialize};

/// A canonical entitlement field.
///
/// Serializes as the camelCase field name rendered in audit tables
/// (e.g. `"productCode"`, `"endDate"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    /// Product code, e.g. `RI-RISKMODELER`
    ProductCode,
    /// Product modifier / variant qualifier
    ProductModifier,
    /// Package name (apps only)
    PackageName,
    /// Licensed quantity (apps only)
    Quantity,
    /// Entitlement start date
    StartDate,
    /// Entitlement end date
    EndDate,
}

impl CanonicalField {
    /// The camelCase field name used in rendered output and identity keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::ProductCode => "productCode",
            CanonicalField::ProductModifier => "productModifier",
            CanonicalField::PackageName => "packageName",
            CanonicalField::Quantity => "quantity",
            CanonicalField::StartDate => "startDate",
            CanonicalField::EndDate => "endDate",
        }
    }

    /// True for the interval-bearing fields (normalized as calendar dates).
    pub fn is_date(&self) -> bool {
        matches!(self, CanonicalField::StartDate | CanonicalField::EndDate)
    }

    /// Ordered source-key aliases for this field, most common first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::ProductCode => {
                &["productCode", "product_code", "ProductCode", "productcode"]
            }
            CanonicalField::ProductModifier => &[
                "productModifier",
                "product_modifier",
                "ProductModifier",
                "modifier",
            ],
            CanonicalField::PackageName => {
                &["packageName", "package_name", "PackageName", "package"]
            }
            CanonicalField::Quantity => &["quantity", "Quantity", "qty"],
            CanonicalField::StartDate => &["startDate", "start_date", "StartDate", "startdate"],
            CanonicalField::EndDate => &["endDate", "end_date", "EndDate", "enddate"],
        }
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

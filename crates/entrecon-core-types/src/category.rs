//! Product categories and their field lists.

use crate::schema::CanonicalField;
use serde::{Deserialize, Serialize};

/// The three entitlement families tracked by a PS request.
///
/// Each category defines which canonical fields participate in the identity
/// key (never dates) and which are compared attribute-by-attribute when a
/// logical entitlement line exists on both sides of a diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    /// Risk model entitlements
    Models,
    /// Data feed entitlements
    Data,
    /// Application entitlements
    Apps,
}

impl ProductCategory {
    /// All categories, in rendering order.
    pub fn all() -> [ProductCategory; 3] {
        [
            ProductCategory::Models,
            ProductCategory::Data,
            ProductCategory::Apps,
        ]
    }

    /// Short lowercase label (`models` / `data` / `apps`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Models => "models",
            ProductCategory::Data => "data",
            ProductCategory::Apps => "apps",
        }
    }

    /// Fields composing the identity key, in key order.
    ///
    /// Quantity participates in the apps identity, so a quantity change
    /// manifests as removed + added rather than updated.
    pub fn identity_fields(&self) -> &'static [CanonicalField] {
        match self {
            ProductCategory::Models | ProductCategory::Data => &[
                CanonicalField::ProductCode,
                CanonicalField::ProductModifier,
            ],
            ProductCategory::Apps => &[
                CanonicalField::ProductCode,
                CanonicalField::PackageName,
                CanonicalField::Quantity,
                CanonicalField::ProductModifier,
            ],
        }
    }

    /// Attribute fields compared for lines present on both sides of a diff,
    /// in the order changed fields are reported.
    pub fn comparable_fields(&self) -> &'static [CanonicalField] {
        match self {
            ProductCategory::Models | ProductCategory::Data => &[
                CanonicalField::StartDate,
                CanonicalField::EndDate,
                CanonicalField::ProductModifier,
            ],
            ProductCategory::Apps => &[
                CanonicalField::StartDate,
                CanonicalField::EndDate,
                CanonicalField::ProductModifier,
                CanonicalField::PackageName,
                CanonicalField::Quantity,
            ],
        }
    }

    /// Ordered key aliases under which this category's entitlement array
    /// appears in a source payload.
    pub fn payload_keys(&self) -> &'static [&'static str] {
        match self {
            ProductCategory::Models => &["modelEntitlements", "model_entitlements", "models"],
            ProductCategory::Data => &["dataEntitlements", "data_entitlements", "data"],
            ProductCategory::Apps => &[
                "appEntitlements",
                "app_entitlements",
                "applicationEntitlements",
                "apps",
            ],
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fields_exclude_dates() {
        for category in ProductCategory::all() {
            for field in category.identity_fields() {
                assert!(!field.is_date(), "{field} must not be identity-bearing");
            }
        }
    }

    #[test]
    fn test_apps_identity_includes_quantity() {
        assert!(ProductCategory::Apps
            .identity_fields()
            .contains(&CanonicalField::Quantity));
        assert!(!ProductCategory::Models
            .identity_fields()
            .contains(&CanonicalField::Quantity));
    }

    #[test]
    fn test_comparable_fields_start_with_dates() {
        for category in ProductCategory::all() {
            let fields = category.comparable_fields();
            assert_eq!(fields[0], CanonicalField::StartDate);
            assert_eq!(fields[1], CanonicalField::EndDate);
        }
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&ProductCategory::Models).unwrap();
        assert_eq!(json, "\"models\"");
    }
}

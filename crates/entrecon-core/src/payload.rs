//! Source payload extraction.
//!
//! A change request carries a JSON payload with per-category entitlement
//! arrays (`modelEntitlements` / `dataEntitlements` / `appEntitlements`);
//! live SML responses carry the equivalent arrays under alias key names,
//! sometimes nested inside an `entitlements` object. Extraction is
//! tolerant: a missing array is an empty array, never an error.
//!
//! [`parse_payload_lenient`] additionally implements the documented policy
//! for unparsable payloads: substitute empty arrays per category so one bad
//! payload degrades to "nothing to compare" rather than failing the view.

use crate::errors::{ReconError, Result};
use entrecon_core_types::ProductCategory;
use serde_json::Value;

/// The three per-category raw entitlement arrays extracted from a payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntitlementArrays {
    /// Raw model entitlement records
    pub models: Vec<Value>,
    /// Raw data entitlement records
    pub data: Vec<Value>,
    /// Raw app entitlement records
    pub apps: Vec<Value>,
}

impl EntitlementArrays {
    /// Empty arrays for all categories.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The raw records for one category.
    pub fn for_category(&self, category: ProductCategory) -> &[Value] {
        match category {
            ProductCategory::Models => &self.models,
            ProductCategory::Data => &self.data,
            ProductCategory::Apps => &self.apps,
        }
    }

    /// True if every category is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.data.is_empty() && self.apps.is_empty()
    }
}

/// Extract the per-category entitlement arrays from an already-parsed
/// payload value.
///
/// For each category the payload key aliases are tried in order, first at
/// the document root and then under a nested `entitlements` object. The
/// first alias holding an array wins; no alias present means an empty
/// array.
pub fn extract_entitlements(payload: &Value) -> EntitlementArrays {
    EntitlementArrays {
        models: extract_category(payload, ProductCategory::Models),
        data: extract_category(payload, ProductCategory::Data),
        apps: extract_category(payload, ProductCategory::Apps),
    }
}

/// Parse a raw payload string and extract its entitlement arrays.
///
/// # Errors
///
/// - `InvalidPayload` when the text is not valid JSON or its root is not
///   an object
pub fn parse_payload(text: &str) -> Result<EntitlementArrays> {
    let payload: Value = serde_json::from_str(text).map_err(|e| ReconError::InvalidPayload {
        message: format!("payload is not valid JSON: {e}"),
    })?;
    if !payload.is_object() {
        return Err(ReconError::InvalidPayload {
            message: "payload JSON root must be an object".to_string(),
        });
    }
    Ok(extract_entitlements(&payload))
}

/// Parse a raw payload string, substituting empty arrays when it cannot be
/// parsed. Degradation is logged, not propagated.
pub fn parse_payload_lenient(text: &str) -> EntitlementArrays {
    match parse_payload(text) {
        Ok(arrays) => arrays,
        Err(err) => {
            tracing::warn!(code = err.code(), %err, "payload unusable, reconciling against empty arrays");
            EntitlementArrays::empty()
        }
    }
}

fn extract_category(payload: &Value, category: ProductCategory) -> Vec<Value> {
    let roots = [Some(payload), payload.get("entitlements")];
    for root in roots.into_iter().flatten() {
        let Some(obj) = root.as_object() else {
            continue;
        };
        for key in category.payload_keys() {
            if let Some(Value::Array(items)) = obj.get(*key) {
                return items.clone();
            }
        }
    }
    Vec::new()
}

//! Shared builders for reconciliation tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use entrecon_core::model::{CanonicalEntitlement, FieldValue};
use entrecon_core_types::ProductCategory;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn opt_date(d: Option<NaiveDate>) -> FieldValue {
    d.map(FieldValue::Date).unwrap_or(FieldValue::Absent)
}

pub fn text(s: &str) -> FieldValue {
    FieldValue::Text(s.to_string())
}

/// A canonical model entitlement line.
pub fn model_line(
    code: &str,
    modifier: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> CanonicalEntitlement {
    CanonicalEntitlement {
        category: ProductCategory::Models,
        product_code: text(code),
        product_modifier: if modifier.is_empty() {
            FieldValue::Absent
        } else {
            text(modifier)
        },
        package_name: FieldValue::Absent,
        quantity: FieldValue::Absent,
        start_date: opt_date(start),
        end_date: opt_date(end),
    }
}

/// A canonical app entitlement line.
pub fn app_line(
    code: &str,
    package: &str,
    quantity: f64,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> CanonicalEntitlement {
    CanonicalEntitlement {
        category: ProductCategory::Apps,
        product_code: text(code),
        product_modifier: FieldValue::Absent,
        package_name: text(package),
        quantity: FieldValue::Number(quantity),
        start_date: opt_date(start),
        end_date: opt_date(end),
    }
}

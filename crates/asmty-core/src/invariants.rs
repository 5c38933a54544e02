//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use std::sync::OnceLock;

use crate::catalog::verify_catalog;
use crate::value_type::ValueType;

static CATALOG_VERIFIED: OnceLock<()> = OnceLock::new();

/// Verify the catalog once per process.
///
/// # Panics
/// Panics if the catalog is inconsistent. No subtype query can be trusted
/// after that, so there is nothing for a caller to recover.
pub fn ensure_catalog() {
    CATALOG_VERIFIED.get_or_init(|| {
        if let Err(err) = verify_catalog() {
            panic!("ValueType catalog is inconsistent: {err}");
        }
        tracing::debug!(types = ValueType::ALL.len(), "value type catalog verified");
    });
}

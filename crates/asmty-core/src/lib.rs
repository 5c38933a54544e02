#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Value types for the asm.js type checker.
//!
//! Two layers:
//! - **Lattice**: the closed `ValueType` catalog with compile-time ancestor
//!   masks, so `is_a` is one AND and `==` is identity.
//! - **Coercions**: boundary tables (return/parameter forms, comparability,
//!   typed array element access).
//!
//! Compound types (functions, overload sets, tables) live in the `asmty` crate.

mod catalog;
mod coercion;
mod invariants;
mod value_type;

#[cfg(test)]
mod coercion_tests;
#[cfg(test)]
mod value_type_tests;

pub use catalog::{CatalogError, dump_catalog, verify_catalog};
pub use invariants::ensure_catalog;
pub use value_type::{SLOT_COUNT, ValueType};

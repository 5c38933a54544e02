//! Consistency checks for the value type catalog.
//!
//! The masks are derived from the parent lists at compile time, but the
//! catalog is still checked against an independent walk of those lists:
//! a single hand-edited parent entry can otherwise corrupt every subtype
//! query silently.

use std::fmt::Write as _;

use crate::value_type::{SLOT_COUNT, ValueType};

/// A malformed catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("`{ty}` uses slot 0")]
    ZeroSlot { ty: ValueType },

    #[error("`{ty}` uses slot {slot}, past the last mask bit")]
    SlotOutOfRange { ty: ValueType, slot: u8 },

    #[error("`{first}` and `{second}` share slot {slot}")]
    DuplicateSlot {
        first: ValueType,
        second: ValueType,
        slot: u8,
    },

    #[error("`{ty}` is its own ancestor")]
    Cycle { ty: ValueType },

    #[error("`{ty}` mask has stray bits {bits:#010x}")]
    StrayBits { ty: ValueType, bits: u32 },

    #[error("`{ty}` mask is missing ancestor bits {bits:#010x}")]
    MissingBits { ty: ValueType, bits: u32 },
}

/// One row of a catalog table: a type, its slot, its declared parents and
/// its precomputed ancestor mask.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CatalogEntry<'a> {
    pub ty: ValueType,
    pub slot: u8,
    pub parents: &'a [ValueType],
    pub mask: u32,
}

impl CatalogEntry<'static> {
    fn of(ty: ValueType) -> Self {
        Self {
            ty,
            slot: ty.slot(),
            parents: ty.parents(),
            mask: ty.ancestor_mask(),
        }
    }
}

/// Check slot uniqueness, acyclicity, and mask exactness for every entry.
pub fn verify_catalog() -> Result<(), CatalogError> {
    let entries = ValueType::ALL.map(CatalogEntry::of);
    verify_entries(&entries)
}

pub(crate) fn verify_entries(entries: &[CatalogEntry<'_>]) -> Result<(), CatalogError> {
    let mut owners: [Option<ValueType>; SLOT_COUNT] = [None; SLOT_COUNT];
    for entry in entries {
        let CatalogEntry { ty, slot, .. } = *entry;
        if slot == 0 {
            return Err(CatalogError::ZeroSlot { ty });
        }
        if slot as usize >= SLOT_COUNT {
            return Err(CatalogError::SlotOutOfRange { ty, slot });
        }
        if let Some(first) = owners[slot as usize] {
            return Err(CatalogError::DuplicateSlot {
                first,
                second: ty,
                slot,
            });
        }
        owners[slot as usize] = Some(ty);
    }

    let find = |ty: ValueType| entries.iter().find(|entry| entry.ty == ty);
    // Types missing from the table keep their catalog slot and have no parents.
    let slot_of = |ty: ValueType| find(ty).map_or(ty.slot(), |entry| entry.slot);

    for entry in entries {
        let mut ancestors: Vec<ValueType> = Vec::new();
        let mut pending = entry.parents.to_vec();
        while let Some(parent) = pending.pop() {
            if ancestors.contains(&parent) {
                continue;
            }
            ancestors.push(parent);
            if let Some(found) = find(parent) {
                pending.extend_from_slice(found.parents);
            }
        }
        if ancestors.contains(&entry.ty) {
            return Err(CatalogError::Cycle { ty: entry.ty });
        }

        let expected = ancestors
            .iter()
            .fold(1u32 << entry.slot, |mask, &ancestor| {
                mask | 1u32 << slot_of(ancestor)
            });
        let actual = entry.mask;
        if actual & !expected != 0 {
            return Err(CatalogError::StrayBits {
                ty: entry.ty,
                bits: actual & !expected,
            });
        }
        if expected & !actual != 0 {
            return Err(CatalogError::MissingBits {
                ty: entry.ty,
                bits: expected & !actual,
            });
        }
    }

    Ok(())
}

/// One line per value type: name, slot, ancestor mask.
pub fn dump_catalog() -> String {
    let mut out = String::new();
    for ty in ValueType::ALL {
        writeln!(
            out,
            "{:<18}{:>2}  {:#010x}",
            ty.name(),
            ty.slot(),
            ty.ancestor_mask()
        )
        .unwrap();
    }
    out
}

//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::arena::{CompoundType, FunctionType, TypeArena};
use crate::ty::{CompoundId, Type};

impl TypeArena {
    pub(crate) fn ensure_compound(&self, id: CompoundId) -> &CompoundType {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "TypeArena: compound type {} not found \
                 (handle belongs to another arena)",
                id.as_u32()
            )
        })
    }

    pub(crate) fn ensure_function(&self, ty: Type) -> &FunctionType {
        self.as_function(ty).unwrap_or_else(|| {
            panic!(
                "TypeArena: {ty:?} is not a function type \
                 (function_table must reject non-function signatures)"
            )
        })
    }
}

//! Type names.
//!
//! Names are composed structurally from the arena; nothing is cached.

use std::fmt;

use crate::arena::{CompoundType, TypeArena};
use crate::ty::Type;

/// Separator between the alternatives of an overload set.
const OVERLOAD_SEPARATOR: &str = " /\\ ";

/// Displays a [`Type`] using the arena that owns it.
pub struct TypeDisplay<'a> {
    arena: &'a TypeArena,
    ty: Type,
}

impl fmt::Display for TypeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.arena.write_name(f, self.ty)
    }
}

impl TypeArena {
    pub fn display(&self, ty: Type) -> TypeDisplay<'_> {
        TypeDisplay { arena: self, ty }
    }

    /// Canonical name, e.g. `(double, float) -> int`.
    ///
    /// # Panics
    /// Panics if `ty` is a handle from another arena.
    pub fn name(&self, ty: Type) -> String {
        self.display(ty).to_string()
    }

    fn write_name(&self, f: &mut fmt::Formatter<'_>, ty: Type) -> fmt::Result {
        let id = match ty {
            Type::Value(value) => return f.write_str(value.name()),
            Type::Compound(id) => id,
        };

        match self.ensure_compound(id) {
            CompoundType::Function(func) => {
                f.write_str("(")?;
                for (i, &arg) in func.arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    self.write_name(f, arg)?;
                }
                f.write_str(") -> ")?;
                self.write_name(f, func.return_type)
            }
            CompoundType::Overloaded(overloaded) => {
                for (i, &overload) in overloaded.overloads.iter().enumerate() {
                    if i > 0 {
                        f.write_str(OVERLOAD_SEPARATOR)?;
                    }
                    self.write_name(f, overload)?;
                }
                Ok(())
            }
            CompoundType::MinMax(min_max) => write!(
                f,
                "({0}, {0}...) -> {1}",
                min_max.argument, min_max.return_type
            ),
            CompoundType::Ffi => f.write_str("Function"),
            CompoundType::Fround => f.write_str("fround"),
            CompoundType::FunctionTable(table) => {
                self.write_name(f, table.signature)?;
                write!(f, "[{}]", table.length)
            }
        }
    }
}

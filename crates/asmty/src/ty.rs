//! The `Type` handle.
//!
//! A `Type` is either a catalog value type or a handle to a compound type
//! owned by a [`TypeArena`](crate::TypeArena). Compound types are never
//! deduplicated, so handle equality is type identity.

use asmty_core::ValueType;

/// Handle to a compound type inside one arena.
///
/// Handles are arena-local: each carries the id of the arena that built it,
/// and a handle from another arena is rejected by builders and queries alike.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CompoundId {
    pub(crate) arena: u32,
    pub(crate) index: u32,
}

impl CompoundId {
    /// Raw index for debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.index
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.index as usize
    }
}

/// Any asm.js type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Type {
    Value(ValueType),
    Compound(CompoundId),
}

impl Type {
    /// Bottom: "no valid type".
    pub const NONE: Type = Type::Value(ValueType::None);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn as_value(self) -> Option<ValueType> {
        match self {
            Self::Value(ty) => Some(ty),
            Self::Compound(_) => None,
        }
    }

    pub fn as_compound(self) -> Option<CompoundId> {
        match self {
            Self::Compound(id) => Some(id),
            Self::Value(_) => None,
        }
    }

    /// Identity. Value types are singletons and compound handles are unique.
    #[inline]
    pub fn is_exactly(self, other: Type) -> bool {
        self == other
    }

    /// Subtyping. Compound types sit outside the lattice and are only
    /// themselves.
    pub fn is_a(self, other: Type) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a.is_a(b),
            _ => self == other,
        }
    }

    pub fn to_return_type(self) -> Type {
        self.map_value(ValueType::to_return_type)
    }

    pub fn is_return_type(self) -> bool {
        self.as_value().is_some_and(ValueType::is_return_type)
    }

    pub fn to_parameter_type(self) -> Type {
        self.map_value(ValueType::to_parameter_type)
    }

    pub fn is_parameter_type(self) -> bool {
        self.as_value().is_some_and(ValueType::is_parameter_type)
    }

    pub fn is_comparable_type(self) -> bool {
        self.as_value().is_some_and(ValueType::is_comparable_type)
    }

    /// Element width for typed array views; `None` stands for "not an array".
    pub fn element_size_in_bytes(self) -> Option<u32> {
        self.as_value().and_then(ValueType::element_size_in_bytes)
    }

    pub fn load_type(self) -> Type {
        self.map_value(ValueType::load_type)
    }

    pub fn store_type(self) -> Type {
        self.map_value(ValueType::store_type)
    }

    /// Apply a value-type table; compound types always map to bottom.
    fn map_value(self, table: fn(ValueType) -> ValueType) -> Type {
        match self {
            Self::Value(ty) => Self::Value(table(ty)),
            Self::Compound(_) => Self::NONE,
        }
    }
}

impl From<ValueType> for Type {
    fn from(ty: ValueType) -> Self {
        Self::Value(ty)
    }
}

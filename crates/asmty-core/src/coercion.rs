//! Boundary coercion tables.
//!
//! What a value becomes when it crosses a function boundary, which types may
//! be compared, and what typed array element accesses load and store.
//! Every table answers `ValueType::None` for types it does not cover.

use crate::ValueType;

impl ValueType {
    /// Canonical form of this type when returned from a function.
    pub fn to_return_type(self) -> ValueType {
        match self {
            Self::Signed | Self::FixNum => Self::Signed,
            Self::Double => Self::Double,
            Self::Float => Self::Float,
            Self::Void => Self::Void,
            _ => Self::None,
        }
    }

    /// Whether this type may appear as a declared return type.
    pub fn is_return_type(self) -> bool {
        matches!(self, Self::Double | Self::Signed | Self::Float | Self::Void)
    }

    /// Canonical form of this type when passed as a parameter.
    pub fn to_parameter_type(self) -> ValueType {
        match self {
            Self::Int | Self::Signed | Self::Unsigned | Self::FixNum => Self::Int,
            Self::Double => Self::Double,
            Self::Float => Self::Float,
            _ => Self::None,
        }
    }

    /// Whether this type may appear as a declared parameter type.
    pub fn is_parameter_type(self) -> bool {
        matches!(self, Self::Double | Self::Int | Self::Float)
    }

    /// Operand types legal in relational comparisons.
    pub fn is_comparable_type(self) -> bool {
        matches!(
            self,
            Self::Double | Self::Signed | Self::Unsigned | Self::Float
        )
    }

    /// Element width of a typed array view, `None` for everything else.
    pub fn element_size_in_bytes(self) -> Option<u32> {
        match self {
            Self::Int8Array | Self::Uint8Array => Some(1),
            Self::Int16Array | Self::Uint16Array => Some(2),
            Self::Int32Array | Self::Uint32Array | Self::Float32Array => Some(4),
            Self::Float64Array => Some(8),
            _ => None,
        }
    }

    /// Type produced by reading one element.
    pub fn load_type(self) -> ValueType {
        match self {
            Self::Int8Array
            | Self::Uint8Array
            | Self::Int16Array
            | Self::Uint16Array
            | Self::Int32Array
            | Self::Uint32Array => Self::Intish,
            Self::Float32Array => Self::FloatQ,
            Self::Float64Array => Self::DoubleQ,
            _ => Self::None,
        }
    }

    /// Type accepted when writing one element.
    ///
    /// Wider than [`load_type`](Self::load_type) for the float views: stores
    /// may truncate from a wider numeric domain.
    pub fn store_type(self) -> ValueType {
        match self {
            Self::Int8Array
            | Self::Uint8Array
            | Self::Int16Array
            | Self::Uint16Array
            | Self::Int32Array
            | Self::Uint32Array => Self::Intish,
            Self::Float32Array => Self::FloatishDoubleQ,
            Self::Float64Array => Self::FloatQDoubleQ,
            _ => Self::None,
        }
    }
}

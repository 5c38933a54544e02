//! asmty: the type system of the asm.js subset.
//!
//! Value types come from a fixed catalog with an O(1) subtype lattice.
//! Compound types (functions, overload sets, `Math.min`/`Math.max`, foreign
//! functions, function tables) are built per use site into a [`TypeArena`]
//! and validated against concrete call sites.
//!
//! # Example
//!
//! ```
//! use asmty::{FunctionBuilder, Type, TypeArena, ValueType};
//!
//! let mut arena = TypeArena::new();
//! let func = FunctionBuilder::new(ValueType::Int)
//!     .arg(ValueType::Double)
//!     .arg(ValueType::Float)
//!     .finish(&mut arena)?;
//!
//! assert_eq!(arena.name(func), "(double, float) -> int");
//!
//! let args: [Type; 2] = [ValueType::Double.into(), ValueType::Float.into()];
//! let result = arena.validate_call(func, ValueType::Int.into(), &args);
//! assert_eq!(result, Type::from(ValueType::Int));
//! # Ok::<(), asmty::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod arena;
mod builder;
mod callable;
mod config;
mod display;
mod invariants;
mod ty;

#[cfg(test)]
mod builder_tests;

pub use arena::{
    CompoundType, FunctionTableType, FunctionType, MinMaxType, OverloadedFunctionType, TypeArena,
};
pub use asmty_core::{CatalogError, ValueType, dump_catalog, verify_catalog};
pub use builder::{FunctionBuilder, OverloadBuilder};
pub use config::Config;
pub use display::TypeDisplay;
pub use ty::{CompoundId, Type};

/// Errors raised while building compound types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An overload that cannot answer `validate_call`.
    #[error("`{name}` is not callable")]
    NotCallable { name: String },

    /// A function table signature that is not a function type.
    #[error("function table signature must be a function type, found `{name}`")]
    NotAFunction { name: String },

    /// A compound handle produced by a different arena.
    #[error("compound type {} does not belong to this arena", .0.as_u32())]
    UnknownHandle(CompoundId),

    /// The arena's configured compound limit was reached.
    #[error("compound type limit of {limit} exceeded")]
    LimitExceeded { limit: usize },
}

/// Result type for type construction.
pub type Result<T> = std::result::Result<T, Error>;

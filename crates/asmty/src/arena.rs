//! TypeArena: owns every compound type built for one compilation unit.
//!
//! Compound types are appended and never removed or mutated; they are all
//! reclaimed when the arena is dropped. Handles index into the arena, so
//! child types refer to earlier entries only and no cycles can form.

use std::sync::atomic::{AtomicU32, Ordering};

use asmty_core::{ValueType, ensure_catalog};

use crate::config::Config;
use crate::ty::{CompoundId, Type};
use crate::{Error, Result};

/// A compound (non-singleton) type. Every shape is callable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompoundType {
    Function(FunctionType),
    Overloaded(OverloadedFunctionType),
    MinMax(MinMaxType),
    /// Foreign function: accepts any call built from boundary-safe types.
    Ffi,
    /// `Math.fround`: one numeric argument, returns `float`.
    Fround,
    FunctionTable(FunctionTableType),
}

impl CompoundType {
    /// Short shape label for logs.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Function(_) => "function",
            Self::Overloaded(_) => "overloaded",
            Self::MinMax(_) => "min_max",
            Self::Ffi => "ffi",
            Self::Fround => "fround",
            Self::FunctionTable(_) => "function_table",
        }
    }
}

/// A fixed signature: ordered parameters and one return type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionType {
    pub(crate) return_type: Type,
    pub(crate) arguments: Vec<Type>,
}

impl FunctionType {
    pub fn return_type(&self) -> Type {
        self.return_type
    }

    pub fn arguments(&self) -> &[Type] {
        &self.arguments
    }
}

/// Alternative signatures for one name, tried in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverloadedFunctionType {
    pub(crate) overloads: Vec<Type>,
}

impl OverloadedFunctionType {
    pub fn overloads(&self) -> &[Type] {
        &self.overloads
    }
}

/// `Math.min`/`Math.max`: two or more arguments of one class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinMaxType {
    pub(crate) argument: ValueType,
    pub(crate) return_type: ValueType,
}

impl MinMaxType {
    /// Bound every argument must be a subtype of.
    pub fn argument(&self) -> ValueType {
        self.argument
    }

    pub fn return_type(&self) -> Type {
        self.return_type.into()
    }

    /// The minimal call shape, `(B, B) -> R`.
    pub fn arguments(&self) -> [Type; 2] {
        [self.argument.into(), self.argument.into()]
    }
}

/// A statically sized table of functions sharing one signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionTableType {
    pub(crate) length: u32,
    pub(crate) signature: Type,
}

impl FunctionTableType {
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Handle of the wrapped function type.
    pub fn signature(&self) -> Type {
        self.signature
    }
}

/// Source of arena ids stamped into every handle.
static NEXT_ARENA_ID: AtomicU32 = AtomicU32::new(0);

/// Upper bound on slots reserved up front, whatever the config asks for.
const MAX_RESERVED: usize = 4096;

/// Per-compilation-unit storage for compound types.
/// Handles it returns are valid in this instance only.
#[derive(Debug)]
pub struct TypeArena {
    id: u32,
    config: Config,
    compounds: Vec<CompoundType>,
    ffi: Option<CompoundId>,
    fround: Option<CompoundId>,
}

impl Default for TypeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeArena {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        ensure_catalog();
        let reserved = config
            .capacity
            .min(config.limit.unwrap_or(usize::MAX))
            .min(MAX_RESERVED);
        Self {
            id: NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed),
            compounds: Vec::with_capacity(reserved),
            config,
            ffi: None,
            fround: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of compound types built so far.
    pub fn len(&self) -> usize {
        self.compounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compounds.is_empty()
    }

    /// Get a compound type by handle, `None` if it belongs to another arena.
    pub fn get(&self, id: CompoundId) -> Option<&CompoundType> {
        if id.arena != self.id {
            return None;
        }
        self.compounds.get(id.index())
    }

    /// Get the compound type behind `ty`, if any.
    pub fn compound(&self, ty: Type) -> Option<&CompoundType> {
        self.get(ty.as_compound()?)
    }

    pub fn as_function(&self, ty: Type) -> Option<&FunctionType> {
        match self.compound(ty)? {
            CompoundType::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_overloaded(&self, ty: Type) -> Option<&OverloadedFunctionType> {
        match self.compound(ty)? {
            CompoundType::Overloaded(overloaded) => Some(overloaded),
            _ => None,
        }
    }

    pub fn as_min_max(&self, ty: Type) -> Option<&MinMaxType> {
        match self.compound(ty)? {
            CompoundType::MinMax(min_max) => Some(min_max),
            _ => None,
        }
    }

    pub fn as_function_table(&self, ty: Type) -> Option<&FunctionTableType> {
        match self.compound(ty)? {
            CompoundType::FunctionTable(table) => Some(table),
            _ => None,
        }
    }

    pub fn is_ffi(&self, ty: Type) -> bool {
        matches!(self.compound(ty), Some(CompoundType::Ffi))
    }

    pub fn is_fround(&self, ty: Type) -> bool {
        matches!(self.compound(ty), Some(CompoundType::Fround))
    }

    /// Whether `ty` can answer [`validate_call`](Self::validate_call).
    pub fn is_callable(&self, ty: Type) -> bool {
        self.compound(ty).is_some()
    }

    /// Build `Math.min`/`Math.max` over `bound`, returning `return_type`.
    pub fn min_max(&mut self, bound: ValueType, return_type: ValueType) -> Result<Type> {
        self.alloc(CompoundType::MinMax(MinMaxType {
            argument: bound,
            return_type,
        }))
    }

    /// The arena's foreign function type. Repeated calls return the same handle.
    pub fn ffi(&mut self) -> Result<Type> {
        if let Some(id) = self.ffi {
            return Ok(Type::Compound(id));
        }
        let ty = self.alloc(CompoundType::Ffi)?;
        self.ffi = ty.as_compound();
        Ok(ty)
    }

    /// The arena's `fround` type. Repeated calls return the same handle.
    pub fn fround(&mut self) -> Result<Type> {
        if let Some(id) = self.fround {
            return Ok(Type::Compound(id));
        }
        let ty = self.alloc(CompoundType::Fround)?;
        self.fround = ty.as_compound();
        Ok(ty)
    }

    /// Build a table of `length` functions of type `signature`.
    pub fn function_table(&mut self, length: u32, signature: Type) -> Result<Type> {
        self.check_handle(signature)?;
        if self.as_function(signature).is_none() {
            return Err(Error::NotAFunction {
                name: self.name(signature),
            });
        }
        self.alloc(CompoundType::FunctionTable(FunctionTableType {
            length,
            signature,
        }))
    }

    /// Reject compound handles this arena did not produce.
    pub(crate) fn check_handle(&self, ty: Type) -> Result<()> {
        match ty {
            Type::Compound(id) if self.get(id).is_none() => Err(Error::UnknownHandle(id)),
            _ => Ok(()),
        }
    }

    pub(crate) fn alloc(&mut self, compound: CompoundType) -> Result<Type> {
        if let Some(limit) = self.config.limit {
            if self.compounds.len() >= limit {
                return Err(Error::LimitExceeded { limit });
            }
        }

        let id = CompoundId {
            arena: self.id,
            index: self.compounds.len() as u32,
        };
        tracing::debug!(id = id.as_u32(), shape = compound.shape(), "compound type allocated");
        self.compounds.push(compound);
        Ok(Type::Compound(id))
    }
}

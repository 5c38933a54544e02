//! Two-phase construction of function and overload types.
//!
//! Builders are plain values outside the arena. `finish` consumes them and
//! moves the finished, immutable type into the arena, so no reader can see
//! a signature that is still growing.

use crate::arena::{CompoundType, FunctionType, OverloadedFunctionType, TypeArena};
use crate::ty::Type;
use crate::{Error, Result};

/// Builds a [`FunctionType`]: return type first, then parameters in call order.
#[derive(Clone, Debug)]
pub struct FunctionBuilder {
    return_type: Type,
    arguments: Vec<Type>,
}

impl FunctionBuilder {
    pub fn new(return_type: impl Into<Type>) -> Self {
        Self {
            return_type: return_type.into(),
            arguments: Vec::new(),
        }
    }

    /// Append a parameter.
    pub fn arg(mut self, ty: impl Into<Type>) -> Self {
        self.add_argument(ty);
        self
    }

    /// Append a parameter in place.
    pub fn add_argument(&mut self, ty: impl Into<Type>) {
        self.arguments.push(ty.into());
    }

    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    pub fn finish(self, arena: &mut TypeArena) -> Result<Type> {
        arena.check_handle(self.return_type)?;
        for &arg in &self.arguments {
            arena.check_handle(arg)?;
        }
        arena.alloc(CompoundType::Function(FunctionType {
            return_type: self.return_type,
            arguments: self.arguments,
        }))
    }
}

/// Builds an [`OverloadedFunctionType`]. Overloads keep their insertion order,
/// which is also their resolution order.
#[derive(Clone, Debug, Default)]
pub struct OverloadBuilder {
    overloads: Vec<Type>,
}

impl OverloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alternative signature.
    pub fn overload(mut self, ty: Type) -> Self {
        self.add_overload(ty);
        self
    }

    /// Append an alternative signature in place.
    pub fn add_overload(&mut self, ty: Type) {
        self.overloads.push(ty);
    }

    pub fn len(&self) -> usize {
        self.overloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overloads.is_empty()
    }

    /// Fails if any overload is not callable.
    pub fn finish(self, arena: &mut TypeArena) -> Result<Type> {
        for &overload in &self.overloads {
            arena.check_handle(overload)?;
            if !arena.is_callable(overload) {
                return Err(Error::NotCallable {
                    name: arena.name(overload),
                });
            }
        }
        arena.alloc(CompoundType::Overloaded(OverloadedFunctionType {
            overloads: self.overloads,
        }))
    }
}

impl TypeArena {
    /// Build a function type in one call.
    pub fn function_type(
        &mut self,
        return_type: impl Into<Type>,
        arguments: &[Type],
    ) -> Result<Type> {
        let mut builder = FunctionBuilder::new(return_type);
        for &arg in arguments {
            builder.add_argument(arg);
        }
        builder.finish(self)
    }

    /// Build an overload set in one call.
    pub fn overloaded_type(&mut self, overloads: &[Type]) -> Result<Type> {
        let mut builder = OverloadBuilder::new();
        for &overload in overloads {
            builder.add_overload(overload);
        }
        builder.finish(self)
    }
}

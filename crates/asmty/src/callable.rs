//! Call validation.
//!
//! `validate_call` answers "does this callee accept a call returning
//! `return_type` with these argument types, and what does it return?".
//! A failed match yields `Type::NONE`.

use asmty_core::ValueType;

use crate::arena::{CompoundType, FunctionType, MinMaxType, TypeArena};
use crate::ty::{CompoundId, Type};

/// Return types a foreign function may be called for.
const FFI_RETURN_TYPES: [ValueType; 3] = [ValueType::Void, ValueType::Double, ValueType::Signed];

/// Argument types that may be passed to a foreign function.
const FFI_PARAMETER_TYPES: [ValueType; 3] =
    [ValueType::Double, ValueType::Signed, ValueType::FixNum];

/// Classes `fround` accepts its argument from.
const FROUND_ARGUMENT_TYPES: [ValueType; 4] = [
    ValueType::Floatish,
    ValueType::DoubleQ,
    ValueType::Signed,
    ValueType::Unsigned,
];

impl FunctionType {
    /// Exact match on return type, arity and every parameter.
    pub fn validate_call(&self, return_type: Type, args: &[Type]) -> Type {
        if !self.return_type.is_exactly(return_type) || self.arguments.len() != args.len() {
            return Type::NONE;
        }
        let all_exact = self
            .arguments
            .iter()
            .zip(args)
            .all(|(param, arg)| param.is_exactly(*arg));
        if all_exact {
            self.return_type
        } else {
            Type::NONE
        }
    }
}

impl MinMaxType {
    /// Two or more arguments, each a subtype of the bound.
    pub fn validate_call(&self, return_type: Type, args: &[Type]) -> Type {
        let bound = Type::from(self.argument);
        if !self.return_type().is_exactly(return_type)
            || args.len() < 2
            || !args.iter().all(|arg| arg.is_a(bound))
        {
            return Type::NONE;
        }
        self.return_type()
    }
}

fn validate_ffi_call(return_type: Type, args: &[Type]) -> Type {
    let accepts = |ty: Type, allowed: &[ValueType]| {
        ty.as_value().is_some_and(|v| allowed.contains(&v))
    };

    if !accepts(return_type, &FFI_RETURN_TYPES) {
        return Type::NONE;
    }
    if !args.iter().all(|&arg| accepts(arg, &FFI_PARAMETER_TYPES)) {
        return Type::NONE;
    }
    return_type
}

fn validate_fround_call(args: &[Type]) -> Type {
    let [arg] = args else {
        return Type::NONE;
    };
    if FROUND_ARGUMENT_TYPES
        .iter()
        .any(|&class| arg.is_a(class.into()))
    {
        ValueType::Float.into()
    } else {
        Type::NONE
    }
}

impl TypeArena {
    /// Check a call against `callee`.
    ///
    /// Returns the type the call produces, or `Type::NONE` when no signature
    /// matches. Value types are not callable.
    ///
    /// # Panics
    /// Panics if `callee` is a handle from another arena.
    pub fn validate_call(&self, callee: Type, return_type: Type, args: &[Type]) -> Type {
        let result = match callee {
            Type::Value(_) => Type::NONE,
            Type::Compound(id) => self.validate_compound_call(id, return_type, args),
        };
        tracing::trace!(
            ?callee,
            ?return_type,
            arity = args.len(),
            ?result,
            "validate_call"
        );
        result
    }

    fn validate_compound_call(&self, id: CompoundId, return_type: Type, args: &[Type]) -> Type {
        match self.ensure_compound(id) {
            CompoundType::Function(func) => func.validate_call(return_type, args),
            CompoundType::Overloaded(overloaded) => {
                // First applicable overload wins, even if a later one is more specific.
                for (index, &overload) in overloaded.overloads.iter().enumerate() {
                    let result = self.validate_call(overload, return_type, args);
                    if !result.is_none() {
                        tracing::trace!(index, "overload selected");
                        return result;
                    }
                }
                Type::NONE
            }
            CompoundType::MinMax(min_max) => min_max.validate_call(return_type, args),
            CompoundType::Ffi => validate_ffi_call(return_type, args),
            CompoundType::Fround => validate_fround_call(args),
            CompoundType::FunctionTable(table) => self
                .ensure_function(table.signature)
                .validate_call(return_type, args),
        }
    }
}

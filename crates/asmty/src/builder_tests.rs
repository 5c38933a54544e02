use asmty_core::ValueType;

use crate::{Error, FunctionBuilder, OverloadBuilder, Type, TypeArena};

fn v(ty: ValueType) -> Type {
    ty.into()
}

#[test]
fn function_builder_appends_in_call_order() {
    let mut arena = TypeArena::new();
    let mut builder = FunctionBuilder::new(ValueType::Void);
    builder.add_argument(ValueType::Int);
    builder.add_argument(ValueType::Double);
    let builder = builder.arg(ValueType::Float);
    assert_eq!(builder.arity(), 3);

    let func = builder.finish(&mut arena).unwrap();

    let shape = arena.as_function(func).unwrap();
    assert_eq!(shape.return_type(), v(ValueType::Void));
    assert_eq!(
        shape.arguments(),
        [v(ValueType::Int), v(ValueType::Double), v(ValueType::Float)]
    );
}

#[test]
fn function_without_parameters() {
    let mut arena = TypeArena::new();

    let func = FunctionBuilder::new(ValueType::Void)
        .finish(&mut arena)
        .unwrap();

    assert!(arena.as_function(func).unwrap().arguments().is_empty());
}

#[test]
fn each_finish_builds_a_distinct_type() {
    let mut arena = TypeArena::new();
    let builder = FunctionBuilder::new(ValueType::Int).arg(ValueType::Double);

    let a = builder.clone().finish(&mut arena).unwrap();
    let b = builder.finish(&mut arena).unwrap();

    assert_ne!(a, b);
    assert!(!a.is_exactly(b));
    assert_eq!(arena.as_function(a), arena.as_function(b));
}

#[test]
fn overloads_keep_insertion_order() {
    let mut arena = TypeArena::new();
    let i2s = arena
        .function_type(ValueType::Signed, &[v(ValueType::Int)])
        .unwrap();
    let d2d = arena
        .function_type(ValueType::Double, &[v(ValueType::Double)])
        .unwrap();

    let mut builder = OverloadBuilder::new().overload(d2d);
    builder.add_overload(i2s);
    assert_eq!(builder.len(), 2);
    let overloaded = builder.finish(&mut arena).unwrap();

    assert_eq!(arena.as_overloaded(overloaded).unwrap().overloads(), [d2d, i2s]);
}

#[test]
fn overloads_may_nest_any_callable() {
    let mut arena = TypeArena::new();
    let min_max = arena.min_max(ValueType::Int, ValueType::Signed).unwrap();
    let ffi = arena.ffi().unwrap();
    let inner = arena.overloaded_type(&[min_max]).unwrap();

    let outer = arena.overloaded_type(&[inner, ffi]).unwrap();

    assert_eq!(arena.as_overloaded(outer).unwrap().overloads().len(), 2);
}

#[test]
fn empty_overload_set() {
    let mut arena = TypeArena::new();
    let builder = OverloadBuilder::new();
    assert!(builder.is_empty());

    let overloaded = builder.finish(&mut arena).unwrap();

    assert!(arena.as_overloaded(overloaded).unwrap().overloads().is_empty());
}

#[test]
fn value_type_is_not_an_overload() {
    let mut arena = TypeArena::new();
    let func = arena.function_type(ValueType::Int, &[]).unwrap();

    let err = arena
        .overloaded_type(&[func, v(ValueType::Double)])
        .unwrap_err();

    assert_eq!(
        err,
        Error::NotCallable {
            name: "double".to_owned()
        }
    );
    assert_eq!(err.to_string(), "`double` is not callable");
    assert_eq!(arena.len(), 1);
}

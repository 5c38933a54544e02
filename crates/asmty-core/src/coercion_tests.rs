use crate::ValueType;

use ValueType as T;

#[test]
fn to_return_type() {
    for ty in T::ALL {
        let expected = match ty {
            T::Signed | T::FixNum => T::Signed,
            T::Double => T::Double,
            T::Float => T::Float,
            T::Void => T::Void,
            _ => T::None,
        };
        assert_eq!(ty.to_return_type(), expected, "{ty}");
    }
}

#[test]
fn is_return_type() {
    let returns: Vec<_> = T::ALL.into_iter().filter(|ty| ty.is_return_type()).collect();
    assert_eq!(returns, [T::Void, T::Double, T::Signed, T::Float]);
}

#[test]
fn to_parameter_type() {
    for ty in T::ALL {
        let expected = match ty {
            T::Int | T::Signed | T::Unsigned | T::FixNum => T::Int,
            T::Double => T::Double,
            T::Float => T::Float,
            _ => T::None,
        };
        assert_eq!(ty.to_parameter_type(), expected, "{ty}");
    }
}

#[test]
fn is_parameter_type() {
    let params: Vec<_> = T::ALL.into_iter().filter(|ty| ty.is_parameter_type()).collect();
    assert_eq!(params, [T::Double, T::Int, T::Float]);
}

#[test]
fn is_comparable_type() {
    let comparable: Vec<_> = T::ALL.into_iter().filter(|ty| ty.is_comparable_type()).collect();
    assert_eq!(comparable, [T::Double, T::Signed, T::Unsigned, T::Float]);
}

#[test]
fn element_size_in_bytes() {
    assert_eq!(T::Int8Array.element_size_in_bytes(), Some(1));
    assert_eq!(T::Uint8Array.element_size_in_bytes(), Some(1));
    assert_eq!(T::Int16Array.element_size_in_bytes(), Some(2));
    assert_eq!(T::Uint16Array.element_size_in_bytes(), Some(2));
    assert_eq!(T::Int32Array.element_size_in_bytes(), Some(4));
    assert_eq!(T::Uint32Array.element_size_in_bytes(), Some(4));
    assert_eq!(T::Float32Array.element_size_in_bytes(), Some(4));
    assert_eq!(T::Float64Array.element_size_in_bytes(), Some(8));

    for ty in T::ALL.into_iter().filter(|ty| !ty.is_array()) {
        assert_eq!(ty.element_size_in_bytes(), None, "{ty}");
    }
}

#[test]
fn integer_views_load_and_store_intish() {
    for ty in [
        T::Int8Array,
        T::Uint8Array,
        T::Int16Array,
        T::Uint16Array,
        T::Int32Array,
        T::Uint32Array,
    ] {
        assert_eq!(ty.load_type(), T::Intish, "{ty}");
        assert_eq!(ty.store_type(), T::Intish, "{ty}");
    }
}

#[test]
fn float_views_store_wider_than_they_load() {
    assert_eq!(T::Float32Array.load_type(), T::FloatQ);
    assert_eq!(T::Float32Array.store_type(), T::FloatishDoubleQ);

    assert_eq!(T::Float64Array.load_type(), T::DoubleQ);
    assert_eq!(T::Float64Array.store_type(), T::FloatQDoubleQ);
    assert_ne!(T::Float64Array.load_type(), T::Float64Array.store_type());
}

#[test]
fn non_arrays_have_no_element_access() {
    for ty in T::ALL.into_iter().filter(|ty| !ty.is_array()) {
        assert_eq!(ty.load_type(), T::None, "{ty}");
        assert_eq!(ty.store_type(), T::None, "{ty}");
    }
}

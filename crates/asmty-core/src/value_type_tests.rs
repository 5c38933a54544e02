use crate::ValueType;

/// Full ancestor sets, written out by hand independently of the masks.
fn expected_ancestors(ty: ValueType) -> &'static [ValueType] {
    use ValueType as T;
    match ty {
        T::Uint8Array
        | T::Int8Array
        | T::Uint16Array
        | T::Int16Array
        | T::Uint32Array
        | T::Int32Array
        | T::Float32Array
        | T::Float64Array => &[T::Heap],
        T::FloatishDoubleQ => &[T::Floatish, T::DoubleQ],
        T::FloatQDoubleQ => &[T::FloatQ, T::Floatish, T::DoubleQ],
        T::Float => &[T::FloatQ, T::Floatish],
        T::FloatQ => &[T::Floatish],
        T::FixNum => &[T::Signed, T::Extern, T::Unsigned, T::Int, T::Intish],
        T::Unsigned => &[T::Int, T::Intish],
        T::Signed => &[T::Extern, T::Int, T::Intish],
        T::Int => &[T::Intish],
        T::Double => &[T::DoubleQ, T::Extern],
        _ => &[],
    }
}

#[test]
fn slots_are_unique_and_non_zero() {
    for (i, a) in ValueType::ALL.iter().enumerate() {
        assert_ne!(a.slot(), 0, "{a}");
        assert!((a.slot() as usize) < crate::SLOT_COUNT, "{a}");
        for b in &ValueType::ALL[i + 1..] {
            assert_ne!(a.slot(), b.slot(), "{a} and {b}");
        }
    }
}

#[test]
fn all_is_in_slot_order() {
    assert!(ValueType::ALL.windows(2).all(|w| w[0].slot() < w[1].slot()));
}

#[test]
fn own_bit_not_reachable_through_parents() {
    for ty in ValueType::ALL {
        for parent in ty.parents() {
            assert_eq!(parent.ancestor_mask() & ty.bit(), 0, "{ty} via {parent}");
        }
    }
}

#[test]
fn mask_has_exactly_own_bit_plus_ancestors() {
    for ty in ValueType::ALL {
        let ancestors = expected_ancestors(ty);
        assert_eq!(
            ty.ancestor_mask().count_ones() as usize,
            1 + ancestors.len(),
            "{ty}: mask {:#010x}",
            ty.ancestor_mask()
        );
        assert_eq!(ty.ancestors().len(), ancestors.len(), "{ty}");
    }
}

#[test]
fn is_a_matches_ancestor_sets() {
    for a in ValueType::ALL {
        for b in ValueType::ALL {
            let expected = a == b || expected_ancestors(a).contains(&b);
            assert_eq!(a.is_a(b), expected, "{a} is_a {b}");
        }
    }
}

#[test]
fn is_a_is_transitive() {
    for a in ValueType::ALL {
        for b in ValueType::ALL {
            for c in ValueType::ALL {
                if a.is_a(b) && b.is_a(c) {
                    assert!(a.is_a(c), "{a} <: {b} <: {c}");
                }
            }
        }
    }
}

#[test]
fn numeric_lattice_spot_checks() {
    assert!(ValueType::FixNum.is_a(ValueType::Signed));
    assert!(ValueType::FixNum.is_a(ValueType::Unsigned));
    assert!(ValueType::FixNum.is_a(ValueType::Extern));
    assert!(!ValueType::Unsigned.is_a(ValueType::Extern));
    assert!(!ValueType::Int.is_a(ValueType::Signed));
    assert!(ValueType::Float.is_a(ValueType::Floatish));
    assert!(!ValueType::Double.is_a(ValueType::Floatish));
    assert!(!ValueType::None.is_a(ValueType::Void));
    assert!(ValueType::None.is_a(ValueType::None));
}

#[test]
fn from_slot() {
    assert_eq!(ValueType::from_slot(1), Some(ValueType::Heap));
    assert_eq!(ValueType::from_slot(12), Some(ValueType::FixNum));
    assert_eq!(ValueType::from_slot(31), Some(ValueType::None));
    assert_eq!(ValueType::from_slot(0), None);
    assert_eq!(ValueType::from_slot(24), None);
}

#[test]
fn from_name_inverts_name() {
    for ty in ValueType::ALL {
        assert_eq!(ValueType::from_name(ty.name()), Some(ty));
    }
    assert_eq!(ValueType::from_name("double"), Some(ValueType::Double));
    assert_eq!(ValueType::from_name("Double"), None);
}

#[test]
fn is_array() {
    assert!(ValueType::Int8Array.is_array());
    assert!(ValueType::Float64Array.is_array());
    assert!(!ValueType::Heap.is_array());
    assert!(!ValueType::Int.is_array());
}

#[test]
fn names() {
    let names: Vec<_> = ValueType::ALL.iter().map(|ty| ty.to_string()).collect();
    insta::assert_snapshot!(names.join(" "), @"[] floatish|double? float?|double? void extern double? double intish int signed unsigned fixnum floatish float? float Uint8Array Int8Array Uint16Array Int16Array Uint32Array Int32Array Float32Array Float64Array <none>");
}

#[test]
fn serializes_as_display_name() {
    let json = serde_json::to_string(&[ValueType::DoubleQ, ValueType::Int32Array]).unwrap();
    assert_eq!(json, r#"["double?","Int32Array"]"#);

    let back: Vec<ValueType> = serde_json::from_str(r#"["<none>", "floatish|double?"]"#).unwrap();
    assert_eq!(back, vec![ValueType::None, ValueType::FloatishDoubleQ]);
}

//! The closed catalog of asm.js value types.
//!
//! Each value type owns one bit of a `u32`. Its ancestor mask is its own bit
//! plus the masks of its direct parents, so subtyping is a single AND.
//! Masks are computed at compile time from the parent lists below.

use std::fmt;

/// Number of bit positions available to the catalog.
pub const SLOT_COUNT: usize = u32::BITS as usize;

/// A primitive asm.js type.
///
/// The discriminant is the type's slot number (its bit position in every
/// ancestor mask). Value types are plain `Copy` data: two references to
/// `Double` are always the same type.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum ValueType {
    /// Tag shared by every typed array view of the heap.
    #[serde(rename = "[]")]
    Heap = 1,
    /// Store type of `Float32Array` elements.
    #[serde(rename = "floatish|double?")]
    FloatishDoubleQ = 2,
    /// Store type of `Float64Array` elements.
    #[serde(rename = "float?|double?")]
    FloatQDoubleQ = 3,
    #[serde(rename = "void")]
    Void = 4,
    /// Values that may cross into foreign (non-asm) code.
    #[serde(rename = "extern")]
    Extern = 5,
    #[serde(rename = "double?")]
    DoubleQ = 6,
    #[serde(rename = "double")]
    Double = 7,
    #[serde(rename = "intish")]
    Intish = 8,
    #[serde(rename = "int")]
    Int = 9,
    #[serde(rename = "signed")]
    Signed = 10,
    #[serde(rename = "unsigned")]
    Unsigned = 11,
    /// Integer literals in `[0, 2^31)`: both signed and unsigned.
    #[serde(rename = "fixnum")]
    FixNum = 12,
    #[serde(rename = "floatish")]
    Floatish = 13,
    #[serde(rename = "float?")]
    FloatQ = 14,
    #[serde(rename = "float")]
    Float = 15,
    Uint8Array = 16,
    Int8Array = 17,
    Uint16Array = 18,
    Int16Array = 19,
    Uint32Array = 20,
    Int32Array = 21,
    Float32Array = 22,
    Float64Array = 23,
    /// Bottom. Returned by every query that has no valid answer.
    #[serde(rename = "<none>")]
    None = 31,
}

impl ValueType {
    /// Every catalog entry, in slot order.
    pub const ALL: [ValueType; 24] = [
        Self::Heap,
        Self::FloatishDoubleQ,
        Self::FloatQDoubleQ,
        Self::Void,
        Self::Extern,
        Self::DoubleQ,
        Self::Double,
        Self::Intish,
        Self::Int,
        Self::Signed,
        Self::Unsigned,
        Self::FixNum,
        Self::Floatish,
        Self::FloatQ,
        Self::Float,
        Self::Uint8Array,
        Self::Int8Array,
        Self::Uint16Array,
        Self::Int16Array,
        Self::Uint32Array,
        Self::Int32Array,
        Self::Float32Array,
        Self::Float64Array,
        Self::None,
    ];

    /// Bit position of this type.
    #[inline]
    pub const fn slot(self) -> u8 {
        self as u8
    }

    /// This type's own bit.
    #[inline]
    pub const fn bit(self) -> u32 {
        1 << self.slot()
    }

    /// Own bit plus the bits of every transitive parent.
    #[inline]
    pub const fn ancestor_mask(self) -> u32 {
        ANCESTOR_MASKS[self.slot() as usize]
    }

    /// Declared direct parents.
    pub const fn parents(self) -> &'static [ValueType] {
        match self {
            Self::FloatishDoubleQ => &[Self::Floatish, Self::DoubleQ],
            Self::FloatQDoubleQ => &[Self::FloatQ, Self::DoubleQ],
            Self::Double => &[Self::DoubleQ, Self::Extern],
            Self::Int => &[Self::Intish],
            Self::Signed => &[Self::Int, Self::Extern],
            Self::Unsigned => &[Self::Int],
            Self::FixNum => &[Self::Signed, Self::Unsigned],
            Self::FloatQ => &[Self::Floatish],
            Self::Float => &[Self::FloatQ],
            Self::Uint8Array
            | Self::Int8Array
            | Self::Uint16Array
            | Self::Int16Array
            | Self::Uint32Array
            | Self::Int32Array
            | Self::Float32Array
            | Self::Float64Array => &[Self::Heap],
            Self::Heap
            | Self::Void
            | Self::Extern
            | Self::DoubleQ
            | Self::Intish
            | Self::Floatish
            | Self::None => &[],
        }
    }

    /// Transitive parents found by walking the declared parent lists.
    ///
    /// Independent of the precomputed masks, so it can be used to check them.
    pub fn ancestors(self) -> Vec<ValueType> {
        let mut found = Vec::new();
        let mut pending = self.parents().to_vec();
        while let Some(parent) = pending.pop() {
            if found.contains(&parent) {
                continue;
            }
            found.push(parent);
            pending.extend_from_slice(parent.parents());
        }
        found
    }

    /// Subtype test: `self` is `other` or one of its descendants.
    #[inline]
    pub const fn is_a(self, other: ValueType) -> bool {
        self.ancestor_mask() & other.bit() != 0
    }

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heap => "[]",
            Self::FloatishDoubleQ => "floatish|double?",
            Self::FloatQDoubleQ => "float?|double?",
            Self::Void => "void",
            Self::Extern => "extern",
            Self::DoubleQ => "double?",
            Self::Double => "double",
            Self::Intish => "intish",
            Self::Int => "int",
            Self::Signed => "signed",
            Self::Unsigned => "unsigned",
            Self::FixNum => "fixnum",
            Self::Floatish => "floatish",
            Self::FloatQ => "float?",
            Self::Float => "float",
            Self::Uint8Array => "Uint8Array",
            Self::Int8Array => "Int8Array",
            Self::Uint16Array => "Uint16Array",
            Self::Int16Array => "Int16Array",
            Self::Uint32Array => "Uint32Array",
            Self::Int32Array => "Int32Array",
            Self::Float32Array => "Float32Array",
            Self::Float64Array => "Float64Array",
            Self::None => "<none>",
        }
    }

    /// Look up a type by slot number.
    pub fn from_slot(slot: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.slot() == slot)
    }

    /// Look up a type by its canonical display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.name() == name)
    }

    /// Whether this is the bottom type.
    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::None
    }

    /// Whether this is one of the typed array views of the heap.
    pub fn is_array(self) -> bool {
        self != Self::Heap && self.is_a(Self::Heap)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const fn compute_mask(ty: ValueType) -> u32 {
    let parents = ty.parents();
    let mut mask = ty.bit();
    let mut i = 0;
    while i < parents.len() {
        mask |= compute_mask(parents[i]);
        i += 1;
    }
    mask
}

/// Ancestor masks indexed by slot. Unused slots stay zero.
const ANCESTOR_MASKS: [u32; SLOT_COUNT] = {
    let mut masks = [0; SLOT_COUNT];
    let mut i = 0;
    while i < ValueType::ALL.len() {
        let ty = ValueType::ALL[i];
        masks[ty.slot() as usize] = compute_mask(ty);
        i += 1;
    }
    masks
};

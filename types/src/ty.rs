use crate::kind::{ArrayLen, TypeKind};
use crate::quals::Quals;

/// Interned handle to a type descriptor.
///
/// Handles from one [`TypeManager`](crate::TypeManager) are canonical:
/// identical (kind, qualifier) pairs share one allocation, so handle
/// pointer equality coincides with [`Type::identical`].
pub type Ty<'a> = &'a Type<'a>;

/// A type descriptor: structural kind plus top-level qualifiers.
///
/// Descriptors are never mutated; the qualifier algebra on
/// [`TypeManager`](crate::TypeManager) derives new descriptors instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Type<'a> {
    pub(crate) kind: TypeKind<'a>,
    pub(crate) quals: Quals,
}

impl<'a> Type<'a> {
    pub fn kind(&self) -> &TypeKind<'a> {
        &self.kind
    }

    pub fn quals(&self) -> Quals {
        self.quals
    }

    // ========================================================================
    // Equality oracle
    // ========================================================================

    /// True iff `self` and `other` denote the same type once top-level
    /// qualifiers are ignored. Nested qualifiers (e.g. a pointee's `const`)
    /// still distinguish types.
    pub fn compatible(&self, other: &Type<'a>) -> bool {
        core::ptr::eq(self, other) || self.kind == other.kind
    }

    /// True iff base type *and* qualifier set match exactly.
    pub fn identical(&self, other: &Type<'a>) -> bool {
        core::ptr::eq(self, other) || (self.kind == other.kind && self.quals == other.quals)
    }

    // ========================================================================
    // Qualifier predicates
    // ========================================================================

    pub fn is_const(&self) -> bool {
        self.quals.contains(Quals::CONST)
    }

    pub fn is_volatile(&self) -> bool {
        self.quals.contains(Quals::VOLATILE)
    }

    /// Always false for arrays: the interner never lets an array descriptor
    /// carry the atomic qualifier.
    pub fn is_atomic(&self) -> bool {
        self.quals.contains(Quals::ATOMIC)
    }

    // ========================================================================
    // Shape predicates
    // ========================================================================

    pub fn is_void(&self) -> bool {
        matches!(self.kind, TypeKind::Void)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self.kind, TypeKind::Bool)
    }

    pub fn is_char(&self) -> bool {
        matches!(self.kind, TypeKind::Char)
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self.kind, TypeKind::Pointer(_))
    }

    /// True for any array, bounded or not. Pointers are not arrays.
    pub fn is_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array(..))
    }

    /// True for arrays whose length is a translation-time constant,
    /// i.e. those whose size is itself constant.
    pub fn is_bounded_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array(_, ArrayLen::Fixed(_)))
    }

    /// True for arrays of non-constant length. False for anything that is
    /// not an array at all.
    pub fn is_unbounded_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array(_, ArrayLen::Variable))
    }

    /// True for function types. Pointers to functions are not functions.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, TypeKind::Function { .. })
    }

    pub fn is_record(&self) -> bool {
        matches!(self.kind, TypeKind::Record { .. })
    }

    /// Signed integer types only. `char` is reported neither signed nor
    /// unsigned; non-integer types are false.
    pub fn is_signed(&self) -> bool {
        matches!(self.kind, TypeKind::Int { signed: true, .. })
    }

    /// Unsigned integer types only. `char` is reported neither signed nor
    /// unsigned; non-integer types are false.
    pub fn is_unsigned(&self) -> bool {
        matches!(self.kind, TypeKind::Int { signed: false, .. })
    }

    /// Scalar types: booleans, characters, integers, floats, pointers.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Bool
                | TypeKind::Char
                | TypeKind::Int { .. }
                | TypeKind::Float(_)
                | TypeKind::Pointer(_)
        )
    }

    /// Arithmetic types: scalars minus pointers.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Bool | TypeKind::Char | TypeKind::Int { .. } | TypeKind::Float(_)
        )
    }
}

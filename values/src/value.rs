use alloc::string::ToString;

use bumpalo::Bump;
use tracing::trace;

use qualia_types::{FloatWidth, Ty, TypeKind, TypeManager};

use crate::error::TypeError;

/// An expression operand: a type handle, an opaque little-endian byte
/// payload, and a constant-expression flag.
///
/// Values are handles (`Copy`); the payload lives in a caller-owned arena
/// with lifetime `'v`, separate from the type arena `'t`. The payload of a
/// probe value built with [`Value::of_type`] is empty: such values exist
/// only to carry a type into a primitive and are never read.
#[derive(Debug, Clone, Copy)]
pub struct Value<'t, 'v> {
    ty: Ty<'t>,
    bytes: &'v [u8],
    comptime: bool,
}

static_assertions::assert_impl_all!(Value<'static, 'static>: Copy, Send, Sync);

impl<'t, 'v> Value<'t, 'v> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// A zero-initialized value of any sized type. Constant.
    ///
    /// Errors when the type has no translation-time size (void, functions,
    /// arrays of non-constant length); use [`Value::of_type`] for those.
    pub fn zero(
        tm: &TypeManager<'t>,
        arena: &'v Bump,
        ty: Ty<'t>,
    ) -> Result<Self, TypeError> {
        let size = tm.size_of(ty)?;
        let bytes = &*arena.alloc_slice_fill_copy(size as usize, 0u8);
        Ok(Self {
            ty,
            bytes,
            comptime: true,
        })
    }

    /// An empty value of any type at all, including void, function, and
    /// variable-length array types, which [`Value::zero`] rejects.
    ///
    /// The result is never a constant expression. Downstream primitives
    /// rely on that: [`Value::decay`] is built on this constructor exactly
    /// so that a decayed operand cannot be mistaken for a constant.
    pub fn of_type(ty: Ty<'t>) -> Self {
        Self {
            ty,
            bytes: &[],
            comptime: false,
        }
    }

    pub fn int(tm: &TypeManager<'t>, arena: &'v Bump, v: i32) -> Self {
        Self::literal(tm.int(), arena.alloc_slice_copy(&v.to_le_bytes()))
    }

    pub fn uint(tm: &TypeManager<'t>, arena: &'v Bump, v: u32) -> Self {
        Self::literal(tm.uint(), arena.alloc_slice_copy(&v.to_le_bytes()))
    }

    pub fn long(tm: &TypeManager<'t>, arena: &'v Bump, v: i64) -> Self {
        Self::literal(tm.long(), arena.alloc_slice_copy(&v.to_le_bytes()))
    }

    pub fn bool(tm: &TypeManager<'t>, arena: &'v Bump, v: bool) -> Self {
        Self::literal(tm.bool(), arena.alloc_slice_copy(&[v as u8]))
    }

    pub fn char(tm: &TypeManager<'t>, arena: &'v Bump, v: u8) -> Self {
        Self::literal(tm.char(), arena.alloc_slice_copy(&[v]))
    }

    pub fn double(tm: &TypeManager<'t>, arena: &'v Bump, v: f64) -> Self {
        Self::literal(tm.double(), arena.alloc_slice_copy(&v.to_le_bytes()))
    }

    fn literal(ty: Ty<'t>, bytes: &'v [u8]) -> Self {
        Self {
            ty,
            bytes,
            comptime: true,
        }
    }

    pub(crate) fn retyped(self, ty: Ty<'t>) -> Self {
        Self { ty, ..self }
    }

    pub(crate) fn with_comptime(self, comptime: bool) -> Self {
        Self { comptime, ..self }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn ty(&self) -> Ty<'t> {
        self.ty
    }

    pub fn bytes(&self) -> &'v [u8] {
        self.bytes
    }

    pub(crate) fn comptime(&self) -> bool {
        self.comptime
    }

    pub fn as_int(&self) -> Option<i64> {
        let TypeKind::Int { width, signed } = *self.ty.kind() else {
            return None;
        };
        let n = width.bytes() as usize;
        if self.bytes.len() != n {
            return None;
        }
        let mut buf = [0u8; 8];
        buf[..n].copy_from_slice(self.bytes);
        let raw = u64::from_le_bytes(buf);
        if signed {
            let shift = 64 - width.bits();
            Some(((raw as i64) << shift) >> shift)
        } else {
            Some(raw as i64)
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if !self.ty.is_bool() || self.bytes.len() != 1 {
            return None;
        }
        Some(self.bytes[0] != 0)
    }

    pub fn as_float(&self) -> Option<f64> {
        let TypeKind::Float(width) = *self.ty.kind() else {
            return None;
        };
        match width {
            FloatWidth::F64 => Some(f64::from_le_bytes(self.bytes.try_into().ok()?)),
            FloatWidth::F32 => Some(f32::from_le_bytes(self.bytes.try_into().ok()?) as f64),
        }
    }

    // ========================================================================
    // Qualifier algebra on the operand's type
    // ========================================================================
    // Each wrapper re-types the same payload; the payload representation is
    // untouched because qualifiers never change representation.

    pub fn add_const(self, tm: &TypeManager<'t>) -> Self {
        self.retyped(tm.add_const(self.ty))
    }

    pub fn add_volatile(self, tm: &TypeManager<'t>) -> Self {
        self.retyped(tm.add_volatile(self.ty))
    }

    pub fn add_atomic(self, tm: &TypeManager<'t>) -> Self {
        self.retyped(tm.add_atomic(self.ty))
    }

    pub fn add_cv(self, tm: &TypeManager<'t>) -> Self {
        self.retyped(tm.add_cv(self.ty))
    }

    pub fn add_ca(self, tm: &TypeManager<'t>) -> Self {
        self.retyped(tm.add_ca(self.ty))
    }

    pub fn add_va(self, tm: &TypeManager<'t>) -> Self {
        self.retyped(tm.add_va(self.ty))
    }

    pub fn add_cva(self, tm: &TypeManager<'t>) -> Self {
        self.retyped(tm.add_cva(self.ty))
    }

    pub fn strip_cv(self, tm: &TypeManager<'t>) -> Self {
        self.retyped(tm.strip_cv(self.ty))
    }

    pub fn strip_const(self, tm: &TypeManager<'t>) -> Self {
        self.retyped(tm.strip_const(self.ty))
    }

    pub fn strip_volatile(self, tm: &TypeManager<'t>) -> Self {
        self.retyped(tm.strip_volatile(self.ty))
    }

    pub fn strip_atomic(self, tm: &TypeManager<'t>) -> Self {
        self.retyped(tm.strip_atomic(self.ty))
    }

    pub fn unqualified(self, tm: &TypeManager<'t>) -> Self {
        self.retyped(tm.unqualified(self.ty))
    }

    /// Array-to-pointer / function-to-pointer conversion of the operand.
    ///
    /// The result is an empty probe value of the decayed type and is never
    /// a constant expression, even when `self` was.
    pub fn decay(self, tm: &TypeManager<'t>) -> Self {
        Value::of_type(tm.decay(self.ty))
    }
}

/// A zero value whose base type is `dst`'s unqualified form and whose
/// qualifier set is copied from `src` (the atomic part is dropped when
/// `dst` is an array).
///
/// Errors when the transplanted type has no translation-time size.
pub fn transplant_quals<'t, 'v>(
    tm: &TypeManager<'t>,
    arena: &'v Bump,
    src: Ty<'t>,
    dst: Ty<'t>,
) -> Result<Value<'t, 'v>, TypeError> {
    Value::zero(tm, arena, tm.transplant_quals(src, dst))
}

/// Exchange the contents of two mutually assignable values.
///
/// Each operand is evaluated exactly once; there is no repeat-evaluation
/// hazard. Operands must have compatible unqualified types, and neither may
/// be const-qualified, an array, a function, or void.
pub fn swap<'t, 'v>(a: &mut Value<'t, 'v>, b: &mut Value<'t, 'v>) -> Result<(), TypeError> {
    require_assignable(a)?;
    require_assignable(b)?;
    if !a.ty.compatible(b.ty) {
        return Err(TypeError::Mismatch {
            expected: a.ty.to_string(),
            found: b.ty.to_string(),
        });
    }
    trace!(lhs = %a.ty, rhs = %b.ty, "swapping values");
    core::mem::swap(&mut a.bytes, &mut b.bytes);
    core::mem::swap(&mut a.comptime, &mut b.comptime);
    Ok(())
}

fn require_assignable(v: &Value<'_, '_>) -> Result<(), TypeError> {
    let ty = v.ty;
    if ty.is_array() || ty.is_function() || ty.is_void() {
        return Err(TypeError::NotAssignable(ty.to_string()));
    }
    if ty.is_const() {
        return Err(TypeError::ConstOperand(ty.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qualia_types::DataModel;

    fn tm(arena: &Bump) -> TypeManager<'_> {
        TypeManager::new(arena, DataModel::LP64)
    }

    #[test]
    fn zero_builds_a_constant_of_the_right_size() {
        let types = Bump::new();
        let vals = Bump::new();
        let tm = tm(&types);

        let v = Value::zero(&tm, &vals, tm.array(tm.int(), 4)).unwrap();
        assert_eq!(v.bytes().len(), 16);
        assert!(v.bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_rejects_unsized_types() {
        let types = Bump::new();
        let vals = Bump::new();
        let tm = tm(&types);

        assert!(Value::zero(&tm, &vals, tm.void()).is_err());
        assert!(Value::zero(&tm, &vals, tm.function(&[], tm.void())).is_err());
        assert!(Value::zero(&tm, &vals, tm.unbounded_array(tm.int())).is_err());
    }

    #[test]
    fn of_type_accepts_what_zero_rejects() {
        let types = Bump::new();
        let tm = tm(&types);

        for t in [
            tm.void(),
            tm.function(&[tm.int()], tm.void()),
            tm.unbounded_array(tm.int()),
        ] {
            let v = Value::of_type(t);
            assert!(core::ptr::eq(v.ty(), t));
            assert!(v.bytes().is_empty());
        }
    }

    #[test]
    fn literal_round_trips() {
        let types = Bump::new();
        let vals = Bump::new();
        let tm = tm(&types);

        assert_eq!(Value::int(&tm, &vals, -7).as_int(), Some(-7));
        assert_eq!(Value::uint(&tm, &vals, u32::MAX).as_int(), Some(u32::MAX as i64));
        assert_eq!(Value::long(&tm, &vals, i64::MIN).as_int(), Some(i64::MIN));
        assert_eq!(Value::bool(&tm, &vals, true).as_bool(), Some(true));
        assert_eq!(Value::double(&tm, &vals, 1.5).as_float(), Some(1.5));
    }

    #[test]
    fn extractors_refuse_other_types() {
        let types = Bump::new();
        let vals = Bump::new();
        let tm = tm(&types);

        let v = Value::int(&tm, &vals, 1);
        assert_eq!(v.as_bool(), None);
        assert_eq!(v.as_float(), None);
        assert_eq!(Value::bool(&tm, &vals, true).as_int(), None);
    }

    #[test]
    fn qualifier_wrappers_retype_without_touching_the_payload() {
        let types = Bump::new();
        let vals = Bump::new();
        let tm = tm(&types);

        let v = Value::int(&tm, &vals, 42);
        let qualified = v.add_cv(&tm);
        assert!(qualified.ty().is_const());
        assert!(qualified.ty().is_volatile());
        assert_eq!(qualified.as_int(), Some(42));

        let back = qualified.strip_cv(&tm);
        assert!(core::ptr::eq(back.ty(), tm.int()));
    }

    #[test]
    fn decayed_values_are_not_constants() {
        let types = Bump::new();
        let vals = Bump::new();
        let tm = tm(&types);

        let arr = Value::zero(&tm, &vals, tm.array(tm.int(), 4)).unwrap();
        let decayed = arr.decay(&tm);
        assert!(core::ptr::eq(decayed.ty(), tm.pointer(tm.int())));
        assert!(!decayed.comptime());
    }

    #[test]
    fn swap_exchanges_values() {
        let types = Bump::new();
        let vals = Bump::new();
        let tm = tm(&types);

        let mut a = Value::int(&tm, &vals, 1);
        let mut b = Value::int(&tm, &vals, 2);
        swap(&mut a, &mut b).unwrap();
        assert_eq!(a.as_int(), Some(2));
        assert_eq!(b.as_int(), Some(1));
    }

    #[test]
    fn swap_accepts_compatible_qualified_operands() {
        let types = Bump::new();
        let vals = Bump::new();
        let tm = tm(&types);

        let mut a = Value::int(&tm, &vals, 1);
        let mut b = Value::int(&tm, &vals, 2).add_volatile(&tm);
        swap(&mut a, &mut b).unwrap();
        assert_eq!(a.as_int(), Some(2));
    }

    #[test]
    fn swap_rejects_const_and_unassignable_operands() {
        let types = Bump::new();
        let vals = Bump::new();
        let tm = tm(&types);

        let mut a = Value::int(&tm, &vals, 1);
        let mut c = Value::int(&tm, &vals, 2).add_const(&tm);
        assert!(matches!(
            swap(&mut a, &mut c),
            Err(TypeError::ConstOperand(_))
        ));

        let mut arr = Value::zero(&tm, &vals, tm.array(tm.int(), 2)).unwrap();
        let mut arr2 = Value::zero(&tm, &vals, tm.array(tm.int(), 2)).unwrap();
        assert!(matches!(
            swap(&mut arr, &mut arr2),
            Err(TypeError::NotAssignable(_))
        ));
    }

    #[test]
    fn swap_rejects_mismatched_types() {
        let types = Bump::new();
        let vals = Bump::new();
        let tm = tm(&types);

        let mut a = Value::int(&tm, &vals, 1);
        let mut d = Value::double(&tm, &vals, 2.0);
        assert!(matches!(swap(&mut a, &mut d), Err(TypeError::Mismatch { .. })));
    }

    #[test]
    fn transplant_produces_a_zero_with_the_source_qualifiers() {
        let types = Bump::new();
        let vals = Bump::new();
        let tm = tm(&types);

        let src = tm.add_ca(tm.double());
        let v = transplant_quals(&tm, &vals, src, tm.add_volatile(tm.int())).unwrap();
        assert!(core::ptr::eq(v.ty(), tm.add_ca(tm.int())));
        assert_eq!(v.bytes().len(), 4);
    }
}

use alloc::vec::Vec;
use core::cell::RefCell;

use bumpalo::Bump;
use hashbrown::HashSet;
use tracing::trace;

use crate::kind::{ArrayLen, Field, FloatWidth, IntWidth, TypeKind};
use crate::layout::DataModel;
use crate::quals::Quals;
use crate::ty::{Ty, Type};

/// Arena-backed interner and factory for type descriptors.
///
/// All descriptor construction goes through the manager so that identical
/// (kind, qualifier) pairs always resolve to the same `&'arena Type` handle.
/// The manager is also the single enforcement point for the atomic-array
/// invariant: interning an array with the ATOMIC qualifier silently drops
/// the bit, so the invariant holds for every descriptor in circulation.
pub struct TypeManager<'a> {
    arena: &'a Bump,
    model: DataModel,
    interned: RefCell<HashSet<Ty<'a>>>,
}

impl<'a> TypeManager<'a> {
    pub fn new(arena: &'a Bump, model: DataModel) -> Self {
        Self {
            arena,
            model,
            interned: RefCell::new(HashSet::new()),
        }
    }

    /// The data model used for layout queries and the `short`..`llong`
    /// constructor widths.
    pub fn model(&self) -> &DataModel {
        &self.model
    }

    pub(crate) fn intern(&self, kind: TypeKind<'a>, quals: Quals) -> Ty<'a> {
        // Arrays cannot carry the atomic qualifier; the request passes
        // through with the bit dropped rather than erroring.
        let quals = if matches!(kind, TypeKind::Array(..)) {
            quals - Quals::ATOMIC
        } else {
            quals
        };
        let candidate = Type { kind, quals };
        let mut set = self.interned.borrow_mut();
        if let Some(&existing) = set.get(&candidate) {
            return existing;
        }
        trace!(ty = %candidate, "interned new type descriptor");
        let fresh: Ty<'a> = self.arena.alloc(candidate);
        set.insert(fresh);
        fresh
    }

    // ========================================================================
    // Scalar constructors
    // ========================================================================

    pub fn void(&self) -> Ty<'a> {
        self.intern(TypeKind::Void, Quals::empty())
    }

    pub fn bool(&self) -> Ty<'a> {
        self.intern(TypeKind::Bool, Quals::empty())
    }

    /// Plain `char`: neither signed nor unsigned. See [`Type::is_signed`].
    pub fn char(&self) -> Ty<'a> {
        self.intern(TypeKind::Char, Quals::empty())
    }

    pub fn schar(&self) -> Ty<'a> {
        self.integer(IntWidth::I8, true)
    }

    pub fn uchar(&self) -> Ty<'a> {
        self.integer(IntWidth::I8, false)
    }

    pub fn short(&self) -> Ty<'a> {
        self.integer(self.model.short, true)
    }

    pub fn ushort(&self) -> Ty<'a> {
        self.integer(self.model.short, false)
    }

    pub fn int(&self) -> Ty<'a> {
        self.integer(self.model.int, true)
    }

    pub fn uint(&self) -> Ty<'a> {
        self.integer(self.model.int, false)
    }

    pub fn long(&self) -> Ty<'a> {
        self.integer(self.model.long, true)
    }

    pub fn ulong(&self) -> Ty<'a> {
        self.integer(self.model.long, false)
    }

    pub fn llong(&self) -> Ty<'a> {
        self.integer(self.model.llong, true)
    }

    pub fn ullong(&self) -> Ty<'a> {
        self.integer(self.model.llong, false)
    }

    pub fn integer(&self, width: IntWidth, signed: bool) -> Ty<'a> {
        self.intern(TypeKind::Int { width, signed }, Quals::empty())
    }

    pub fn float(&self) -> Ty<'a> {
        self.intern(TypeKind::Float(FloatWidth::F32), Quals::empty())
    }

    pub fn double(&self) -> Ty<'a> {
        self.intern(TypeKind::Float(FloatWidth::F64), Quals::empty())
    }

    // ========================================================================
    // Compound constructors
    // ========================================================================

    pub fn pointer(&self, pointee: Ty<'a>) -> Ty<'a> {
        self.intern(TypeKind::Pointer(pointee), Quals::empty())
    }

    /// Array with a constant length (a "bounded" array).
    pub fn array(&self, elem: Ty<'a>, len: u64) -> Ty<'a> {
        self.intern(TypeKind::Array(elem, ArrayLen::Fixed(len)), Quals::empty())
    }

    /// Array whose length is not a translation-time constant.
    pub fn unbounded_array(&self, elem: Ty<'a>) -> Ty<'a> {
        self.intern(TypeKind::Array(elem, ArrayLen::Variable), Quals::empty())
    }

    pub fn function(&self, params: &[Ty<'a>], ret: Ty<'a>) -> Ty<'a> {
        let params = self.arena.alloc_slice_copy(params);
        self.intern(
            TypeKind::Function {
                params,
                ret,
                variadic: false,
            },
            Quals::empty(),
        )
    }

    pub fn variadic_function(&self, params: &[Ty<'a>], ret: Ty<'a>) -> Ty<'a> {
        let params = self.arena.alloc_slice_copy(params);
        self.intern(
            TypeKind::Function {
                params,
                ret,
                variadic: true,
            },
            Quals::empty(),
        )
    }

    /// Record with fields in declaration order (order determines layout).
    pub fn record(&self, name: Option<&str>, fields: &[(&str, Ty<'a>)]) -> Ty<'a> {
        let name = name.map(|n| &*self.arena.alloc_str(n));
        let mut interned = Vec::with_capacity(fields.len());
        for &(field_name, ty) in fields {
            interned.push(Field {
                name: &*self.arena.alloc_str(field_name),
                ty,
            });
        }
        let fields: &[Field<'a>] = self.arena.alloc_slice_copy(&interned);
        self.intern(TypeKind::Record { name, fields }, Quals::empty())
    }

    /// Re-derive `t` with exactly the given qualifier set (the previous set
    /// is replaced, not merged). Subject to the atomic-array rule.
    pub fn qualified(&self, t: Ty<'a>, quals: Quals) -> Ty<'a> {
        self.intern(t.kind, quals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_tm(arena: &Bump) -> TypeManager<'_> {
        TypeManager::new(arena, DataModel::LP64)
    }

    #[test]
    fn interning_dedups_handles() {
        let arena = Bump::new();
        let tm = arena_tm(&arena);

        let a = tm.pointer(tm.int());
        let b = tm.pointer(tm.int());
        assert!(core::ptr::eq(a, b));
    }

    #[test]
    fn distinct_types_get_distinct_handles() {
        let arena = Bump::new();
        let tm = arena_tm(&arena);

        assert!(!core::ptr::eq(tm.int(), tm.uint()));
        assert!(!core::ptr::eq(tm.array(tm.int(), 4), tm.array(tm.int(), 5)));
        assert!(!core::ptr::eq(tm.char(), tm.schar()));
        assert!(!core::ptr::eq(tm.char(), tm.uchar()));
    }

    #[test]
    fn qualified_replaces_the_qualifier_set() {
        let arena = Bump::new();
        let tm = arena_tm(&arena);

        let cv = tm.qualified(tm.int(), Quals::CV);
        assert!(cv.is_const() && cv.is_volatile());

        let plain = tm.qualified(cv, Quals::empty());
        assert!(core::ptr::eq(plain, tm.int()));
    }

    #[test]
    fn atomic_on_array_is_dropped_at_the_interner() {
        let arena = Bump::new();
        let tm = arena_tm(&arena);

        let arr = tm.array(tm.int(), 4);
        let asked = tm.qualified(arr, Quals::ATOMIC | Quals::CONST);
        assert!(asked.is_const());
        assert!(!asked.is_atomic());
    }

    #[test]
    fn record_fields_keep_declaration_order() {
        let arena = Bump::new();
        let tm = arena_tm(&arena);

        let r = tm.record(Some("pair"), &[("b", tm.double()), ("a", tm.int())]);
        match r.kind() {
            TypeKind::Record { name, fields } => {
                assert_eq!(*name, Some("pair"));
                assert_eq!(fields[0].name, "b");
                assert_eq!(fields[1].name, "a");
            }
            _ => panic!("expected record"),
        }
    }

    #[test]
    fn data_model_drives_integer_widths() {
        let arena = Bump::new();
        let lp64 = TypeManager::new(&arena, DataModel::LP64);
        let ilp32 = TypeManager::new(&arena, DataModel::ILP32);

        assert_eq!(
            lp64.long().kind(),
            &TypeKind::Int {
                width: IntWidth::I64,
                signed: true
            }
        );
        assert_eq!(
            ilp32.long().kind(),
            &TypeKind::Int {
                width: IntWidth::I32,
                signed: true
            }
        );
    }
}

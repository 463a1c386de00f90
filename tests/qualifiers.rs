//! Qualifier-algebra behavior through the public surface, with the
//! atomic-array rule given particular attention.

mod common;

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use qualia::{DataModel, Quals, Ty, TypeManager, identical, is_atomic, ty};

fn all_eight_qual_sets() -> [Quals; 8] {
    [
        Quals::empty(),
        Quals::CONST,
        Quals::VOLATILE,
        Quals::ATOMIC,
        Quals::CONST | Quals::VOLATILE,
        Quals::CONST | Quals::ATOMIC,
        Quals::VOLATILE | Quals::ATOMIC,
        Quals::all(),
    ]
}

#[test]
fn add_and_detect_agree_for_every_qualifier_set() {
    common::init_test_logging();
    let types = Bump::new();
    let tm = TypeManager::new(&types, DataModel::LP64);

    for quals in all_eight_qual_sets() {
        let t = tm.qualified(tm.int(), quals);
        assert_eq!(t.is_const(), quals.contains(Quals::CONST));
        assert_eq!(t.is_volatile(), quals.contains(Quals::VOLATILE));
        assert_eq!(t.is_atomic(), quals.contains(Quals::ATOMIC));
    }
}

#[test]
fn transplant_covers_the_full_eight_way_split() {
    let types = Bump::new();
    let tm = TypeManager::new(&types, DataModel::LP64);

    let dst = ty!(tm, volatile double);
    for quals in all_eight_qual_sets() {
        let src = tm.qualified(tm.int(), quals);
        let out = tm.transplant_quals(src, dst);
        assert_eq!(out.quals(), quals);
        assert!(out.compatible(tm.double()));
    }
}

#[test]
fn atomic_never_lands_on_an_array() {
    let types = Bump::new();
    let tm = TypeManager::new(&types, DataModel::LP64);

    let arr: Ty<'_> = ty!(tm, [int; 4]);

    assert!(identical(&tm.add_atomic(arr), &arr));
    assert!(!is_atomic(&tm.add_cva(arr)));
    assert!(!is_atomic(&tm.qualified(arr, Quals::all())));
    assert!(!is_atomic(&tm.transplant_quals(ty!(tm, atomic int), arr)));
}

#[test]
fn strips_reconstruct_rather_than_leak() {
    let types = Bump::new();
    let tm = TypeManager::new(&types, DataModel::LP64);

    // Removing one qualifier must preserve exactly the other two.
    for quals in all_eight_qual_sets() {
        let t = tm.qualified(tm.int(), quals);
        assert_eq!(tm.strip_const(t).quals(), quals - Quals::CONST);
        assert_eq!(tm.strip_volatile(t).quals(), quals - Quals::VOLATILE);
        assert_eq!(tm.strip_atomic(t).quals(), quals - Quals::ATOMIC);
        assert_eq!(tm.strip_cv(t).quals(), quals & Quals::ATOMIC);
        assert_eq!(tm.unqualified(t).quals(), Quals::empty());
    }
}

#[test]
fn qualifier_algebra_composes_with_compound_types() {
    let types = Bump::new();
    let tm = TypeManager::new(&types, DataModel::LP64);

    // Qualifying a pointer leaves its pointee untouched.
    let p = ty!(tm, *const int);
    let cp = tm.add_const(p);
    assert!(cp.is_const());
    assert!(identical(&tm.strip_const(cp), &p));

    // Qualified types intern to the same handle however they are reached.
    let a = tm.add_volatile(tm.add_const(tm.int()));
    let b = tm.add_const(tm.add_volatile(tm.int()));
    assert!(identical(&a, &b));
    assert!(std::ptr::eq(a, b));
}

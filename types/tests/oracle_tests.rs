//! Tests for the type-equality oracle.

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use qualia_types::{DataModel, TypeManager, ty};

#[test]
fn every_type_is_compatible_with_itself() {
    let arena = Bump::new();
    let tm = TypeManager::new(&arena, DataModel::LP64);

    let samples = [
        ty!(tm, void),
        ty!(tm, bool),
        ty!(tm, char),
        ty!(tm, const int),
        ty!(tm, *const char),
        ty!(tm, [int; 4]),
        ty!(tm, [int]),
        ty!(tm, fn(int) -> void),
        tm.record(Some("s"), &[("x", tm.int())]),
    ];
    for t in samples {
        assert!(t.compatible(t), "{t} should be compatible with itself");
        assert!(t.identical(t), "{t} should be identical to itself");
    }
}

#[test]
fn compatibility_ignores_top_level_qualifiers() {
    let arena = Bump::new();
    let tm = TypeManager::new(&arena, DataModel::LP64);

    let plain = ty!(tm, int);
    let cva = ty!(tm, const volatile atomic int);
    assert!(plain.compatible(cva));
    assert!(cva.compatible(plain));
    assert!(!plain.identical(cva));
}

#[test]
fn compatibility_respects_nested_qualifiers() {
    let arena = Bump::new();
    let tm = TypeManager::new(&arena, DataModel::LP64);

    // Pointee qualifiers are part of the base type, not top-level.
    let p = ty!(tm, *int);
    let pc = ty!(tm, *const int);
    assert!(!p.compatible(pc));

    // But a const pointer differs from a plain pointer only at top level.
    let cp = ty!(tm, const *int);
    assert!(p.compatible(cp));
}

#[test]
fn structurally_different_types_are_incompatible() {
    let arena = Bump::new();
    let tm = TypeManager::new(&arena, DataModel::LP64);

    assert!(!ty!(tm, int).compatible(ty!(tm, uint)));
    assert!(!ty!(tm, int).compatible(ty!(tm, long)));
    assert!(!ty!(tm, [int; 4]).compatible(ty!(tm, [int; 5])));
    assert!(!ty!(tm, [int; 4]).compatible(ty!(tm, *int)));
    assert!(!ty!(tm, char).compatible(ty!(tm, schar)));
    assert!(!ty!(tm, fn(int) -> void).compatible(ty!(tm, fn(uint) -> void)));
}

#[test]
fn variably_sized_operands_compare_like_everything_else() {
    let arena = Bump::new();
    let tm = TypeManager::new(&arena, DataModel::LP64);

    let vla = ty!(tm, [int]);
    assert!(vla.compatible(ty!(tm, [int])));
    assert!(!vla.compatible(ty!(tm, [int; 4])));
}

#[test]
fn records_are_nominal_plus_structural() {
    let arena = Bump::new();
    let tm = TypeManager::new(&arena, DataModel::LP64);

    let a = tm.record(Some("a"), &[("x", tm.int())]);
    let a2 = tm.record(Some("a"), &[("x", tm.int())]);
    let b = tm.record(Some("b"), &[("x", tm.int())]);

    assert_eq!(a as *const _, a2 as *const _);
    assert!(a.compatible(a2));
    assert!(!a.compatible(b));
}

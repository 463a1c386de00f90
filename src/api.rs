//! Predicate entry points that accept types and expression operands
//! interchangeably.
//!
//! These are thin wrappers over the [`Type`](qualia_types::Type) methods;
//! they exist so call sites holding a [`Value`](qualia_values::Value) and
//! call sites holding a bare handle read the same.

use qualia_values::Typed;

/// True iff the operands' types match once top-level qualifiers are
/// ignored.
pub fn compatible<'t>(x: &impl Typed<'t>, y: &impl Typed<'t>) -> bool {
    x.ty().compatible(y.ty())
}

/// True iff base type and qualifier set both match exactly.
pub fn identical<'t>(x: &impl Typed<'t>, y: &impl Typed<'t>) -> bool {
    x.ty().identical(y.ty())
}

pub fn is_void<'t>(x: &impl Typed<'t>) -> bool {
    x.ty().is_void()
}

pub fn is_bool<'t>(x: &impl Typed<'t>) -> bool {
    x.ty().is_bool()
}

pub fn is_array<'t>(x: &impl Typed<'t>) -> bool {
    x.ty().is_array()
}

pub fn is_bounded_array<'t>(x: &impl Typed<'t>) -> bool {
    x.ty().is_bounded_array()
}

pub fn is_unbounded_array<'t>(x: &impl Typed<'t>) -> bool {
    x.ty().is_unbounded_array()
}

pub fn is_function<'t>(x: &impl Typed<'t>) -> bool {
    x.ty().is_function()
}

pub fn is_signed<'t>(x: &impl Typed<'t>) -> bool {
    x.ty().is_signed()
}

pub fn is_unsigned<'t>(x: &impl Typed<'t>) -> bool {
    x.ty().is_unsigned()
}

pub fn is_const<'t>(x: &impl Typed<'t>) -> bool {
    x.ty().is_const()
}

pub fn is_volatile<'t>(x: &impl Typed<'t>) -> bool {
    x.ty().is_volatile()
}

pub fn is_atomic<'t>(x: &impl Typed<'t>) -> bool {
    x.ty().is_atomic()
}

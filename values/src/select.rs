//! Selection between operands and constant-expression detection.

use bumpalo::Bump;

use qualia_types::{Ty, TypeManager};

use crate::error::TypeError;
use crate::value::Value;

/// Select between two operands on a boolean condition.
///
/// The result *is* the chosen operand: its type, payload, and
/// constant-expression status pass through exactly. The rejected operand is
/// discarded unread, so it only needs to be well-formed, not meaningful.
pub fn choose<'t, 'v>(
    cond: bool,
    truthy: Value<'t, 'v>,
    falsy: Value<'t, 'v>,
) -> Value<'t, 'v> {
    if cond { truthy } else { falsy }
}

/// Whether the operand is usable as a translation-time constant.
///
/// Only scalar operands can be classified: an aggregate operand is reported
/// `false` regardless of how it was built. That is a documented limitation,
/// not an error.
pub fn is_constant(v: &Value<'_, '_>) -> bool {
    v.comptime() && v.ty().is_scalar()
}

/// Best-effort forcing of early evaluation.
///
/// A scalar operand comes back flagged as a constant expression; anything
/// else passes through unchanged (aggregates cannot be forced, matching
/// [`is_constant`]'s limitation).
pub fn force_const_eval<'t, 'v>(v: Value<'t, 'v>) -> Value<'t, 'v> {
    if v.ty().is_scalar() {
        v.with_comptime(true)
    } else {
        v
    }
}

/// `v` when its type matches `target` exactly (qualifiers included),
/// otherwise a zero value of `target`.
///
/// This is what keeps both arms of a [`choose`] well-typed when only one
/// arm is semantically reachable.
///
/// Errors only in the fallback case, when `target` has no
/// translation-time size.
pub fn coerce_or_default<'t, 'v>(
    tm: &TypeManager<'t>,
    arena: &'v Bump,
    target: Ty<'t>,
    v: Value<'t, 'v>,
) -> Result<Value<'t, 'v>, TypeError> {
    if v.ty().identical(target) {
        Ok(v)
    } else {
        Value::zero(tm, arena, target)
    }
}

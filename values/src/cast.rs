//! Bit-pattern reinterpretation.

use alloc::string::ToString;

use tracing::trace;

use qualia_types::{Ty, TypeManager};

use crate::error::TypeError;
use crate::value::Value;

/// Reinterpret the bits of `v` as `target` without any conversion.
///
/// Hard preconditions, each a translation failure rather than a coercion:
///
/// - `target` must be an object type; naming a function type is refused
///   outright (the classic mistake this guards against is passing a
///   function where its return type was meant).
/// - both types must have a translation-time size, and the sizes must
///   match exactly. Reinterpreting across padding bytes is the caller's
///   responsibility; the size check is the only guard the toolkit can give.
///
/// The payload is carried verbatim and the constant-expression status of
/// `v` is preserved.
pub fn bit_reinterpret<'t, 'v>(
    tm: &TypeManager<'t>,
    target: Ty<'t>,
    v: Value<'t, 'v>,
) -> Result<Value<'t, 'v>, TypeError> {
    if target.is_function() {
        return Err(TypeError::FunctionTarget(target.to_string()));
    }
    let from_size = tm.size_of(v.ty())?;
    let to_size = tm.size_of(target)?;
    if from_size != to_size {
        return Err(TypeError::SizeMismatch {
            from: v.ty().to_string(),
            to: target.to_string(),
            from_size,
            to_size,
        });
    }
    trace!(from = %v.ty(), to = %target, "reinterpreting bits");
    Ok(v.retyped(target))
}

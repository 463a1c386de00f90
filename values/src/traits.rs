use qualia_types::Ty;

use crate::value::Value;

/// Anything that carries a type: a descriptor handle or an expression
/// operand.
///
/// The introspection primitives only ever look at an operand's type, so
/// they accept either form interchangeably through this trait.
pub trait Typed<'t> {
    fn ty(&self) -> Ty<'t>;
}

impl<'t> Typed<'t> for Ty<'t> {
    fn ty(&self) -> Ty<'t> {
        self
    }
}

impl<'t> Typed<'t> for Value<'t, '_> {
    fn ty(&self) -> Ty<'t> {
        Value::ty(self)
    }
}

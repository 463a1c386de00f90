//! The qualifier algebra and type decay.
//!
//! Every operator derives a new interned descriptor; operands are never
//! mutated. Invalid qualifications (the atomic qualifier on an array) are
//! ignored rather than rejected: the operand passes through with that part
//! of the request dropped.

use crate::kind::TypeKind;
use crate::manager::TypeManager;
use crate::quals::Quals;
use crate::ty::Ty;

impl<'a> TypeManager<'a> {
    // ========================================================================
    // Adding qualifiers
    // ========================================================================

    pub fn add_const(&self, t: Ty<'a>) -> Ty<'a> {
        self.qualified(t, t.quals() | Quals::CONST)
    }

    pub fn add_volatile(&self, t: Ty<'a>) -> Ty<'a> {
        self.qualified(t, t.quals() | Quals::VOLATILE)
    }

    /// No-op for arrays: an array can never carry the atomic qualifier.
    pub fn add_atomic(&self, t: Ty<'a>) -> Ty<'a> {
        self.qualified(t, t.quals() | Quals::ATOMIC)
    }

    pub fn add_cv(&self, t: Ty<'a>) -> Ty<'a> {
        self.qualified(t, t.quals() | Quals::CV)
    }

    pub fn add_ca(&self, t: Ty<'a>) -> Ty<'a> {
        self.qualified(t, t.quals() | Quals::CONST | Quals::ATOMIC)
    }

    pub fn add_va(&self, t: Ty<'a>) -> Ty<'a> {
        self.qualified(t, t.quals() | Quals::VOLATILE | Quals::ATOMIC)
    }

    pub fn add_cva(&self, t: Ty<'a>) -> Ty<'a> {
        self.qualified(t, t.quals() | Quals::CV | Quals::ATOMIC)
    }

    // ========================================================================
    // Removing qualifiers
    // ========================================================================

    /// Remove `const` and `volatile` in one step. The atomic qualifier is
    /// preserved exactly when it was originally present.
    pub fn strip_cv(&self, t: Ty<'a>) -> Ty<'a> {
        self.qualified(t, t.quals() & Quals::ATOMIC)
    }

    /// Remove exactly `const`, preserving the other qualifiers.
    pub fn strip_const(&self, t: Ty<'a>) -> Ty<'a> {
        self.qualified(t, t.quals() - Quals::CONST)
    }

    /// Remove exactly `volatile`, preserving the other qualifiers.
    pub fn strip_volatile(&self, t: Ty<'a>) -> Ty<'a> {
        self.qualified(t, t.quals() - Quals::VOLATILE)
    }

    /// Remove exactly the atomic qualifier, preserving the other qualifiers.
    pub fn strip_atomic(&self, t: Ty<'a>) -> Ty<'a> {
        self.qualified(t, t.quals() - Quals::ATOMIC)
    }

    /// All three qualifiers cleared.
    pub fn unqualified(&self, t: Ty<'a>) -> Ty<'a> {
        self.qualified(t, Quals::empty())
    }

    // ========================================================================
    // Combinators
    // ========================================================================

    /// The unqualified form of `dst` carrying `src`'s qualifier set.
    ///
    /// Qualifiers `dst` had that `src` lacks are stripped; qualifiers `src`
    /// has that `dst` lacked are added. If `dst` is an array the atomic part
    /// of the transplant is dropped.
    pub fn transplant_quals(&self, src: Ty<'a>, dst: Ty<'a>) -> Ty<'a> {
        self.qualified(dst, src.quals())
    }

    /// Array-to-pointer / function-to-pointer conversion.
    ///
    /// Arrays convert to a pointer to their element type (the array's own
    /// top-level qualifiers do not survive the conversion), functions to a
    /// pointer to themselves, and everything else is the identity.
    pub fn decay(&self, t: Ty<'a>) -> Ty<'a> {
        match *t.kind() {
            TypeKind::Array(elem, _) => self.pointer(elem),
            TypeKind::Function { .. } => self.pointer(t),
            _ => t,
        }
    }
}

#[cfg(test)]
#[path = "algebra_test.rs"]
mod algebra_test;

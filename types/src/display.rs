use core::fmt;

use crate::kind::{ArrayLen, FloatWidth, TypeKind};
use crate::quals::Quals;
use crate::ty::Type;

// Spellings mirror the `ty!` macro: qualifiers prefix whatever they apply
// to, so `*const i32` is a pointer to const and `const *i32` a const
// pointer.
impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quals.contains(Quals::CONST) {
            f.write_str("const ")?;
        }
        if self.quals.contains(Quals::VOLATILE) {
            f.write_str("volatile ")?;
        }
        if self.quals.contains(Quals::ATOMIC) {
            f.write_str("atomic ")?;
        }
        match self.kind {
            TypeKind::Void => f.write_str("void"),
            TypeKind::Bool => f.write_str("bool"),
            TypeKind::Char => f.write_str("char"),
            TypeKind::Int { width, signed } => {
                let prefix = if signed { 'i' } else { 'u' };
                write!(f, "{}{}", prefix, width.bits())
            }
            TypeKind::Float(FloatWidth::F32) => f.write_str("f32"),
            TypeKind::Float(FloatWidth::F64) => f.write_str("f64"),
            TypeKind::Pointer(pointee) => write!(f, "*{pointee}"),
            TypeKind::Array(elem, ArrayLen::Fixed(n)) => write!(f, "[{elem}; {n}]"),
            TypeKind::Array(elem, ArrayLen::Variable) => write!(f, "[{elem}]"),
            TypeKind::Function {
                params,
                ret,
                variadic,
            } => {
                f.write_str("fn(")?;
                for (i, p) in params.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{p}")?;
                }
                if variadic {
                    if !params.is_empty() {
                        f.write_str(", ")?;
                    }
                    f.write_str("...")?;
                }
                write!(f, ") -> {ret}")
            }
            TypeKind::Record {
                name: Some(name), ..
            } => write!(f, "record {name}"),
            TypeKind::Record { name: None, fields } => {
                if fields.is_empty() {
                    return f.write_str("record {}");
                }
                f.write_str("record { ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.ty)?;
                }
                f.write_str(" }")
            }
        }
    }
}

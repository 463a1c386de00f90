//! Data-model configuration and layout queries.
//!
//! Layout follows the usual natural-alignment rules: every scalar is
//! aligned to its own size, records place fields in declaration order with
//! padding up to each field's alignment, and a record's size is rounded up
//! to its alignment. Bit-fields are not modeled.

use alloc::string::{String, ToString};

use thiserror::Error;

use crate::kind::{ArrayLen, Field, IntWidth, TypeKind};
use crate::manager::TypeManager;
use crate::ty::Ty;

/// Widths of the named integer types and of pointers.
///
/// Fixed per manager; [`LP64`](DataModel::LP64) matches 64-bit Unix-like
/// targets, [`ILP32`](DataModel::ILP32) 32-bit ones. `char` and `bool` are
/// always one byte and floats are always 4/8, so only the ladder above
/// `char` varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataModel {
    pub short: IntWidth,
    pub int: IntWidth,
    pub long: IntWidth,
    pub llong: IntWidth,
    pub ptr_bytes: u64,
}

impl DataModel {
    pub const LP64: DataModel = DataModel {
        short: IntWidth::I16,
        int: IntWidth::I32,
        long: IntWidth::I64,
        llong: IntWidth::I64,
        ptr_bytes: 8,
    };

    pub const ILP32: DataModel = DataModel {
        short: IntWidth::I16,
        int: IntWidth::I32,
        long: IntWidth::I32,
        llong: IntWidth::I64,
        ptr_bytes: 4,
    };
}

impl Default for DataModel {
    fn default() -> Self {
        DataModel::LP64
    }
}

/// Why a layout query could not be answered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// void, function types, and anything containing them have no size.
    #[error("incomplete type `{0}` has no size")]
    Incomplete(String),

    /// The size exists but is not a translation-time constant.
    #[error("`{0}` has variable length; its size is not a constant")]
    VariableLength(String),

    /// A member query against something that is not a record.
    #[error("`{0}` is not a record type")]
    NotARecord(String),

    #[error("record `{0}` has no member `{1}`")]
    NoSuchField(String, String),

    #[error("`{0}` is too large to lay out")]
    Oversized(String),
}

fn round_up(offset: u64, align: u64) -> u64 {
    debug_assert!(align.is_power_of_two());
    (offset + align - 1) & !(align - 1)
}

impl<'a> TypeManager<'a> {
    /// Size in bytes, when it is a translation-time constant.
    pub fn size_of(&self, t: Ty<'a>) -> Result<u64, LayoutError> {
        match *t.kind() {
            TypeKind::Void => Err(LayoutError::Incomplete(t.to_string())),
            TypeKind::Bool | TypeKind::Char => Ok(1),
            TypeKind::Int { width, .. } => Ok(width.bytes()),
            TypeKind::Float(width) => Ok(width.bytes()),
            TypeKind::Pointer(_) => Ok(self.model().ptr_bytes),
            TypeKind::Array(elem, ArrayLen::Fixed(n)) => self
                .size_of(elem)?
                .checked_mul(n)
                .ok_or_else(|| LayoutError::Oversized(t.to_string())),
            TypeKind::Array(_, ArrayLen::Variable) => {
                Err(LayoutError::VariableLength(t.to_string()))
            }
            TypeKind::Function { .. } => Err(LayoutError::Incomplete(t.to_string())),
            TypeKind::Record { fields, .. } => {
                let (size, _) = self.record_extent(fields)?;
                Ok(size)
            }
        }
    }

    /// Natural alignment in bytes.
    pub fn align_of(&self, t: Ty<'a>) -> Result<u64, LayoutError> {
        match *t.kind() {
            TypeKind::Void => Err(LayoutError::Incomplete(t.to_string())),
            TypeKind::Bool | TypeKind::Char => Ok(1),
            TypeKind::Int { width, .. } => Ok(width.bytes()),
            TypeKind::Float(width) => Ok(width.bytes()),
            TypeKind::Pointer(_) => Ok(self.model().ptr_bytes),
            TypeKind::Array(elem, _) => self.align_of(elem),
            TypeKind::Function { .. } => Err(LayoutError::Incomplete(t.to_string())),
            TypeKind::Record { fields, .. } => {
                let (_, align) = self.record_extent(fields)?;
                Ok(align)
            }
        }
    }

    /// Byte offset of a named member within a record type.
    pub fn offset_of(&self, t: Ty<'a>, member: &str) -> Result<u64, LayoutError> {
        let TypeKind::Record { fields, .. } = t.kind() else {
            return Err(LayoutError::NotARecord(t.to_string()));
        };
        let mut offset = 0u64;
        for field in *fields {
            let align = self.align_of(field.ty)?;
            offset = round_up(offset, align);
            if field.name == member {
                return Ok(offset);
            }
            offset += self.size_of(field.ty)?;
        }
        Err(LayoutError::NoSuchField(
            t.to_string(),
            member.to_string(),
        ))
    }

    /// True iff `a`'s member `ma` and `b`'s member `mb` can be treated as
    /// the same object when reinterpreting between the two record types:
    /// compatible (unqualified) member types, identical alignment, and
    /// identical byte offset.
    pub fn corresponding_member(
        &self,
        a: Ty<'a>,
        b: Ty<'a>,
        ma: &str,
        mb: &str,
    ) -> Result<bool, LayoutError> {
        let fa = self.member(a, ma)?;
        let fb = self.member(b, mb)?;
        Ok(fa.ty.compatible(fb.ty)
            && self.align_of(fa.ty)? == self.align_of(fb.ty)?
            && self.offset_of(a, ma)? == self.offset_of(b, mb)?)
    }

    fn member(&self, t: Ty<'a>, name: &str) -> Result<Field<'a>, LayoutError> {
        let TypeKind::Record { fields, .. } = t.kind() else {
            return Err(LayoutError::NotARecord(t.to_string()));
        };
        fields
            .iter()
            .find(|f| f.name == name)
            .copied()
            .ok_or_else(|| LayoutError::NoSuchField(t.to_string(), name.to_string()))
    }

    fn record_extent(&self, fields: &[Field<'a>]) -> Result<(u64, u64), LayoutError> {
        let mut offset = 0u64;
        let mut align = 1u64;
        for field in fields {
            let field_align = self.align_of(field.ty)?;
            offset = round_up(offset, field_align);
            offset += self.size_of(field.ty)?;
            align = align.max(field_align);
        }
        Ok((round_up(offset, align), align))
    }
}

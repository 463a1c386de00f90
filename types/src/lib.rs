//! Type descriptors for a C-like subject language, plus the qualifier
//! algebra and layout queries that operate on them.
//!
//! Descriptors are interned: ask a [`TypeManager`] for a type and you get a
//! `&'arena Type` handle, with identical types sharing one allocation. All
//! derivation (qualifying, stripping, decay) goes through the manager and
//! returns new handles; descriptors themselves are immutable.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use qualia_types::{ty, DataModel, TypeManager};
//!
//! let arena = Bump::new();
//! let tm = TypeManager::new(&arena, DataModel::LP64);
//!
//! let t = ty!(tm, const *[int; 4]);
//! assert!(t.is_const());
//! assert!(t.is_pointer());
//! ```

#![no_std]
extern crate alloc;

mod algebra;
mod display;
mod kind;
mod layout;
mod macros;
mod manager;
mod quals;
mod ty;

pub use kind::{ArrayLen, Field, FloatWidth, IntWidth, TypeKind};
pub use layout::{DataModel, LayoutError};
pub use manager::TypeManager;
pub use quals::Quals;
pub use ty::{Ty, Type};

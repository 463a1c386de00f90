//! qualia — type introspection and qualification over interned descriptors.
//!
//! # Overview
//!
//! qualia answers structural questions about a modeled, C-like type system
//! — "is this an array?", "does it carry `const`?", "are these two record
//! members layout-interchangeable?" — and constructs new types and values
//! from the answers: qualify and strip, transplant qualifier sets, decay,
//! reinterpret bits, swap. It is the type-facts layer a front end or
//! static-analysis tool builds on; nothing here executes subject-language
//! code.
//!
//! Everything resolves over interned descriptors handed out by a
//! [`TypeManager`]: identical types share one handle, so identity questions
//! are pointer comparisons and derivation is always explicit.
//!
//! # Quick Start
//!
//! ```
//! use bumpalo::Bump;
//! use qualia::{DataModel, TypeManager, Value, bit_reinterpret, ty};
//!
//! let types = Bump::new();
//! let values = Bump::new();
//! let tm = TypeManager::new(&types, DataModel::LP64);
//!
//! // Ask structural questions.
//! let t = ty!(tm, const *[int; 4]);
//! assert!(t.is_const());
//! assert!(t.is_pointer());
//!
//! // Derive new types.
//! let decayed = tm.decay(ty!(tm, [char; 8]));
//! assert!(decayed.identical(ty!(tm, *char)));
//!
//! // Construct values from the answers.
//! let v = Value::uint(&tm, &values, 0x3f80_0000);
//! let f = bit_reinterpret(&tm, tm.float(), v).unwrap();
//! assert_eq!(f.as_float(), Some(1.0));
//! ```
//!
//! # Operands
//!
//! Every predicate accepts a type handle or an expression operand
//! ([`Value`]) interchangeably — see [`Typed`] and the free functions in
//! this crate — because only the operand's type is ever consulted. No
//! primitive evaluates an operand more than once.

mod api;
mod error;
pub mod syntax;
pub mod version;

pub use api::{
    compatible, identical, is_array, is_atomic, is_bool, is_bounded_array, is_const, is_function,
    is_signed, is_unbounded_array, is_unsigned, is_void, is_volatile,
};
pub use error::Error;

pub use qualia_types::{
    ArrayLen, DataModel, Field, FloatWidth, IntWidth, LayoutError, Quals, Ty, Type, TypeKind,
    TypeManager, ty,
};
pub use qualia_values::{
    ScopedStorage, TypeError, Typed, Value, bit_reinterpret, choose, coerce_or_default,
    force_const_eval, is_constant, swap, transplant_quals,
};

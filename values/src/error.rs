use alloc::string::String;

use qualia_types::LayoutError;
use thiserror::Error;

/// Why a value-level operation could not produce a well-typed result.
///
/// Every variant corresponds to something that would abort translation in
/// the subject language; the embedding front end is expected to turn these
/// into diagnostics rather than recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("type mismatch: expected `{expected}`, found `{found}`")]
    Mismatch { expected: String, found: String },

    /// Arrays, functions, and void cannot be assigned through.
    #[error("`{0}` is not an assignable type")]
    NotAssignable(String),

    #[error("cannot assign through `const`-qualified type `{0}`")]
    ConstOperand(String),

    #[error(
        "size mismatch: cannot reinterpret `{from}` ({from_size} bytes) as `{to}` ({to_size} bytes)"
    )]
    SizeMismatch {
        from: String,
        to: String,
        from_size: u64,
        to_size: u64,
    },

    /// The reinterpretation target names a function type — almost always a
    /// function accidentally named where its return type was meant.
    #[error("`{0}` is a function type; reinterpretation targets must be object types")]
    FunctionTarget(String),

    #[error("alignment {0} is not a power of two")]
    BadAlignment(u64),

    #[error(transparent)]
    Unsized(#[from] LayoutError),
}

//! Type construction macro for concise descriptor building.
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
//! // Scalars
//! let int_ty = ty!(tm, int);
//! let ull = ty!(tm, ullong);
//!
//! // Compound types
//! let ptr = ty!(tm, *const char);
//! let matrix = ty!(tm, [[double; 3]; 3]);
//! let callback = ty!(tm, fn(int, *void) -> bool);
//!
//! // Qualifiers prefix whatever they apply to
//! let const_ptr = ty!(tm, const *int);
//! ```

/// Macro for constructing types with a concise syntax.
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `void`, `bool`, `char`, `schar`, `uchar`, `short`, `ushort`, `int`, `uint`, `long`, `ulong`, `llong`, `ullong`, `float`, `double` | Scalar types |
/// | `*T` | Pointer to `T` |
/// | `[T; n]` | Bounded array |
/// | `[T]` | Array of non-constant length |
/// | `fn(T1, T2) -> R` | Function type (`fn(T, ...) -> R` for variadic) |
/// | `const T` / `volatile T` / `atomic T` | Qualified type |
///
/// A qualifier applies to everything to its right: `const *int` is a const
/// pointer to int, `*const int` a pointer to const int.
#[macro_export]
macro_rules! ty {
    // === Entry point ===

    ($tm:expr, $($rest:tt)+) => {{
        let __tm = &$tm;
        $crate::ty!(@ty __tm ; $($rest)+)
    }};

    // === Qualifiers ===

    (@ty $tm:expr ; const $($rest:tt)+) => {{
        let __t = $crate::ty!(@ty $tm ; $($rest)+);
        $tm.add_const(__t)
    }};
    (@ty $tm:expr ; volatile $($rest:tt)+) => {{
        let __t = $crate::ty!(@ty $tm ; $($rest)+);
        $tm.add_volatile(__t)
    }};
    (@ty $tm:expr ; atomic $($rest:tt)+) => {{
        let __t = $crate::ty!(@ty $tm ; $($rest)+);
        $tm.add_atomic(__t)
    }};

    // === Scalar types ===

    (@ty $tm:expr ; void) => { $tm.void() };
    (@ty $tm:expr ; bool) => { $tm.bool() };
    (@ty $tm:expr ; char) => { $tm.char() };
    (@ty $tm:expr ; schar) => { $tm.schar() };
    (@ty $tm:expr ; uchar) => { $tm.uchar() };
    (@ty $tm:expr ; short) => { $tm.short() };
    (@ty $tm:expr ; ushort) => { $tm.ushort() };
    (@ty $tm:expr ; int) => { $tm.int() };
    (@ty $tm:expr ; uint) => { $tm.uint() };
    (@ty $tm:expr ; long) => { $tm.long() };
    (@ty $tm:expr ; ulong) => { $tm.ulong() };
    (@ty $tm:expr ; llong) => { $tm.llong() };
    (@ty $tm:expr ; ullong) => { $tm.ullong() };
    (@ty $tm:expr ; float) => { $tm.float() };
    (@ty $tm:expr ; double) => { $tm.double() };

    // === *T ===

    (@ty $tm:expr ; * $($rest:tt)+) => {{
        let __t = $crate::ty!(@ty $tm ; $($rest)+);
        $tm.pointer(__t)
    }};

    // === [T; n] and [T] ===
    // Accumulate element tokens until the top-level `;` (if any).

    (@ty $tm:expr ; [$($args:tt)+]) => {
        $crate::ty!(@arr $tm ; [] $($args)+)
    };

    (@arr $tm:expr ; [$($elem:tt)+] ; $n:expr) => {{
        let __e = $crate::ty!(@ty $tm ; $($elem)+);
        $tm.array(__e, $n)
    }};
    (@arr $tm:expr ; [$($elem:tt)+]) => {{
        let __e = $crate::ty!(@ty $tm ; $($elem)+);
        $tm.unbounded_array(__e)
    }};
    (@arr $tm:expr ; [$($acc:tt)*] $tok:tt $($rest:tt)*) => {
        $crate::ty!(@arr $tm ; [$($acc)* $tok] $($rest)*)
    };

    // === fn(params) -> ret ===
    // Accumulate the current parameter until a top-level comma; a trailing
    // `...` selects the variadic constructor.

    (@ty $tm:expr ; fn($($params:tt)*) -> $($ret:tt)+) => {
        $crate::ty!(@params $tm ; [] [] [$($params)*] -> $($ret)+)
    };

    (@params $tm:expr ; [$($c:tt)*] [] [] -> $($ret:tt)+) => {{
        let __ret = $crate::ty!(@ty $tm ; $($ret)+);
        $tm.function(&[$($c)*], __ret)
    }};
    (@params $tm:expr ; [$($c:tt)*] [$($cur:tt)+] [] -> $($ret:tt)+) => {{
        let __p = $crate::ty!(@ty $tm ; $($cur)+);
        let __ret = $crate::ty!(@ty $tm ; $($ret)+);
        $tm.function(&[$($c)* __p], __ret)
    }};
    (@params $tm:expr ; [$($c:tt)*] [] [...] -> $($ret:tt)+) => {{
        let __ret = $crate::ty!(@ty $tm ; $($ret)+);
        $tm.variadic_function(&[$($c)*], __ret)
    }};
    (@params $tm:expr ; [$($c:tt)*] [$($cur:tt)+] [, $($rest:tt)*] -> $($ret:tt)+) => {{
        let __p = $crate::ty!(@ty $tm ; $($cur)+);
        $crate::ty!(@params $tm ; [$($c)* __p,] [] [$($rest)*] -> $($ret)+)
    }};
    (@params $tm:expr ; [$($c:tt)*] [$($cur:tt)*] [$tok:tt $($rest:tt)*] -> $($ret:tt)+) => {
        $crate::ty!(@params $tm ; [$($c)*] [$($cur)* $tok] [$($rest)*] -> $($ret)+)
    };
}

//! Token-level argument-shape checks.
//!
//! A few questions a front end wants to ask are about the *spelling* of an
//! argument, not its type: is this argument a string literal? is it the
//! literal `...` marker? was anything passed at all? These operate on the
//! raw spelled text of an argument as the front end saw it, before any
//! semantic analysis, and are deliberately shallow — they classify token
//! shapes, they do not parse.

/// True iff the spelling is a string literal, including encoding-prefixed
/// forms (`u8"..."`, `u"..."`, `U"..."`, `L"..."`).
///
/// Compound literals, character literals, and identifiers do not match;
/// the empty string literal `""` does.
pub fn is_string_literal(spelling: &str) -> bool {
    let s = spelling.trim();
    let body = ["u8", "u", "U", "L"]
        .iter()
        .find_map(|p| s.strip_prefix(p).filter(|r| r.starts_with('"')))
        .unwrap_or(s);
    body.len() >= 2 && body.starts_with('"') && body.ends_with('"')
}

/// True iff the spelling is exactly the variadic marker token `...`.
pub fn is_ellipsis(spelling: &str) -> bool {
    spelling.trim() == "..."
}

/// True iff the argument pack is empty.
///
/// A pack containing a single all-whitespace spelling also counts as
/// empty: that is what a call site with zero arguments looks like to a
/// tokenizer that always produces at least one (possibly blank) argument.
pub fn has_no_arguments(args: &[&str]) -> bool {
    match args {
        [] => true,
        [only] => only.trim().is_empty(),
        _ => false,
    }
}

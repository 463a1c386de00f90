use bitflags::bitflags;

bitflags! {
    /// Top-level type qualifiers.
    ///
    /// Qualifiers are orthogonal flags layered onto a base type; they never
    /// change its representation. ATOMIC is mutually exclusive with array
    /// types — the interner drops the bit when asked to qualify an array,
    /// so no array descriptor ever carries it.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct Quals: u8 {
        const CONST = 1;
        const VOLATILE = 1 << 1;
        const ATOMIC = 1 << 2;
    }
}

static_assertions::assert_eq_size!(Quals, u8);

impl Quals {
    /// The CONST | VOLATILE pair, the set removed by `strip_cv`.
    pub const CV: Quals = Quals::CONST.union(Quals::VOLATILE);
}

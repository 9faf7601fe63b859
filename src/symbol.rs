use std::fmt::Debug;

/// A symbol of an indexed text.
///
/// Symbols are compared ordinally (by their `Ord` impl, which for `u8` and
/// `char` is the code point order). `Into<u32>` gives the dense code space
/// used by the count tables.
pub trait Symbol: Copy + Ord + Debug + Into<u32> {
    /// Terminator appended by [`TerminatedText::new`](crate::TerminatedText::new).
    const DEFAULT_TERMINATOR: Self;
}

impl Symbol for u8 {
    const DEFAULT_TERMINATOR: Self = b'$';
}

impl Symbol for char {
    const DEFAULT_TERMINATOR: Self = '$';
}

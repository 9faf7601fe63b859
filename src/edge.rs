use std::fmt::Debug;
use std::hash::Hash;

/// Which side of an edge to test in [`SuffixEdge::is_adjacent_to`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdjacencyOrder {
    /// `self` ends exactly where `other` starts.
    Before,
    /// `self` starts exactly where `other` ends.
    After,
    /// Either of the above.
    #[default]
    BeforeOrAfter,
}

/// An edge of a suffix structure: a contiguous span of the indexed text.
///
/// Edges are plain values. They carry text offsets, never text, so a tree is
/// only meaningful together with the [`TerminatedText`](crate::TerminatedText)
/// it was built from.
pub trait SuffixEdge: Copy + Ord + Hash + Debug {
    /// Offset of the first symbol of the span.
    fn start(&self) -> usize;

    /// Number of symbols in the span.
    fn len(&self) -> usize;

    /// Offset one past the last symbol of the span.
    #[inline]
    fn end(&self) -> usize {
        self.start() + self.len()
    }

    /// Whether the two spans are contiguous in the text, in the given order.
    fn is_adjacent_to(&self, other: &Self, order: AdjacencyOrder) -> bool {
        let before = self.end() == other.start();
        let after = other.end() == self.start();
        match order {
            AdjacencyOrder::Before => before,
            AdjacencyOrder::After => after,
            AdjacencyOrder::BeforeOrAfter => before || after,
        }
    }
}

/// Edge of a suffix tree: a span of arbitrary positive length.
///
/// Ordered by `(start, len)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuffixTreeEdge {
    start: usize,
    len: usize,
}

impl SuffixTreeEdge {
    /// Creates an edge spanning `len` symbols from `start`.
    #[inline]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }
}

impl SuffixEdge for SuffixTreeEdge {
    #[inline]
    fn start(&self) -> usize {
        self.start
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

/// Edge of a suffix trie: a single symbol, identified by its text offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuffixTrieEdge {
    index: usize,
}

impl SuffixTrieEdge {
    /// Creates an edge for the symbol at `index`.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }

    /// Offset of the symbol.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl SuffixEdge for SuffixTrieEdge {
    #[inline]
    fn start(&self) -> usize {
        self.index
    }

    #[inline]
    fn len(&self) -> usize {
        1
    }
}

impl From<SuffixTrieEdge> for SuffixTreeEdge {
    fn from(edge: SuffixTrieEdge) -> Self {
        SuffixTreeEdge::new(edge.index, 1)
    }
}

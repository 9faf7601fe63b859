use crate::traversal::{DepthFirstTraversal, TraversalOrder, VisitStrategy};
use crate::{
    BwTransform, Children, CountTables, NarrowingIntervalMatcher, OccurrenceCounts,
    OnDemandCounts, RowInterval, SuffixEdge, SuffixNode, Symbol, TerminatedText,
};

/// Finds every occurrence of a pattern in an indexed text.
pub trait OccurrenceFinder<S> {
    /// Ascending text offsets at which `pattern` occurs.
    ///
    /// The empty pattern occurs at every offset, terminator included.
    fn find_occurrences(&self, pattern: &[S]) -> Vec<usize>;

    /// Number of occurrences of `pattern`.
    fn count_occurrences(&self, pattern: &[S]) -> usize {
        self.find_occurrences(pattern).len()
    }
}

/// Matches by walking a suffix tree or trie from the root.
///
/// Descends along the edge whose first symbol equals the next pattern
/// symbol, comparing the whole span, until the pattern is consumed. Every
/// leaf below the point where it ends is an occurrence.
#[derive(Clone, Copy, Debug)]
pub struct TreeWalkMatcher<'a, E, S: Symbol> {
    root: &'a SuffixNode<E>,
    text: &'a TerminatedText<S>,
}

impl<'a, E: SuffixEdge, S: Symbol> TreeWalkMatcher<'a, E, S> {
    /// Matcher over the structure `root`, built from `text`.
    pub fn new(root: &'a SuffixNode<E>, text: &'a TerminatedText<S>) -> Self {
        Self { root, text }
    }

    /// The highest node whose path spells a string starting with `pattern`,
    /// or `None` if the pattern does not occur.
    pub fn match_point(&self, pattern: &[S]) -> Option<&'a SuffixNode<E>> {
        let mut node = self.root;
        let mut matched = 0;

        while matched < pattern.len() {
            let next = pattern[matched];
            let (edge, child) = node
                .children()
                .into_iter()
                .flat_map(Children::iter)
                .find(|(edge, _)| self.text[edge.start()] == next)?;

            let span = self.text.span(edge.start(), edge.len());
            let take = span.len().min(pattern.len() - matched);
            if span[..take] != pattern[matched..matched + take] {
                return None;
            }
            matched += take;
            node = child;
        }

        Some(node)
    }
}

impl<E: SuffixEdge, S: Symbol> OccurrenceFinder<S> for TreeWalkMatcher<'_, E, S> {
    fn find_occurrences(&self, pattern: &[S]) -> Vec<usize> {
        let Some(node) = self.match_point(pattern) else {
            return Vec::new();
        };

        let traversal = DepthFirstTraversal::new(TraversalOrder::ParentFirst);
        let mut offsets: Vec<usize> = traversal
            .visit(node)
            .filter_map(|visit| visit.node.leaf_start())
            .collect();
        offsets.sort_unstable();
        offsets
    }
}

/// Matches by backward search over the Burrows-Wheeler transform of the text,
/// resolving matched rows to offsets with the suffix array.
///
/// `C` selects the count functions: [`CountTables`] by default, or
/// [`OnDemandCounts`] via [`BwtMatcher::on_demand`].
#[derive(Clone, Debug)]
pub struct BwtMatcher<S: Symbol, C = CountTables> {
    matcher: NarrowingIntervalMatcher<C>,
    suffix_array: Vec<usize>,
    terminator: S,
}

impl<S: Symbol> BwtMatcher<S, CountTables> {
    /// Matcher with precomputed count tables.
    ///
    /// The tables hold one `u32` per distinct symbol per text position, so
    /// memory grows with `alphabet size * text length`. For large alphabets
    /// prefer [`BwtMatcher::on_demand`], which keeps only the transform.
    pub fn new(text: &TerminatedText<S>) -> Self {
        let (transform, suffix_array) = BwTransform::build(text).into_parts();
        Self {
            matcher: NarrowingIntervalMatcher::new(CountTables::build(&transform)),
            suffix_array,
            terminator: text.terminator(),
        }
    }
}

impl<S: Symbol> BwtMatcher<S, OnDemandCounts<Vec<S>>> {
    /// Matcher that scans the transform on every count query.
    pub fn on_demand(text: &TerminatedText<S>) -> Self {
        let (transform, suffix_array) = BwTransform::build(text).into_parts();
        Self {
            matcher: NarrowingIntervalMatcher::new(OnDemandCounts::new(transform)),
            suffix_array,
            terminator: text.terminator(),
        }
    }
}

impl<S: Symbol, C: OccurrenceCounts<S>> BwtMatcher<S, C> {
    /// Rows of the sorted-suffix matrix whose suffix starts with `pattern`.
    ///
    /// Rows are rotations of the text, so a pattern that runs on past the
    /// terminator would match across the wrap-around; such patterns never
    /// occur in the text and are rejected up front.
    pub fn interval(&self, pattern: &[S]) -> Option<RowInterval> {
        if let Some((_, head)) = pattern.split_last() {
            if head.contains(&self.terminator) {
                return None;
            }
        }
        self.matcher.match_pattern(pattern)
    }

    /// The backward search matcher.
    pub fn matcher(&self) -> &NarrowingIntervalMatcher<C> {
        &self.matcher
    }

    /// Text offset of every row.
    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }
}

impl<S: Symbol, C: OccurrenceCounts<S>> OccurrenceFinder<S> for BwtMatcher<S, C> {
    fn find_occurrences(&self, pattern: &[S]) -> Vec<usize> {
        let Some(interval) = self.interval(pattern) else {
            return Vec::new();
        };
        let mut offsets = self.suffix_array[interval.rows()].to_vec();
        offsets.sort_unstable();
        offsets
    }

    fn count_occurrences(&self, pattern: &[S]) -> usize {
        self.interval(pattern).map_or(0, |interval| interval.len())
    }
}

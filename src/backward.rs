use std::ops::Range;

use crate::{OccurrenceCounts, Symbol};

/// Half-open range of rows `[start, end)` of a Burrows-Wheeler matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowInterval {
    /// First row (inclusive).
    pub start: usize,
    /// Last row (exclusive).
    pub end: usize,
}

impl RowInterval {
    /// Number of rows, i.e. the number of occurrences of the matched pattern.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the interval holds no row.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The rows as a range.
    #[inline]
    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Backward search: narrows the interval of matching rows one pattern symbol
/// at a time, last symbol first.
///
/// Each step costs two count queries and never looks at the text itself.
/// Starting from all rows, consuming symbol `c` maps `[lo, hi)` to
/// `[first(c) + count(c, lo), first(c) + count(c, hi))`.
#[derive(Clone, Debug)]
pub struct NarrowingIntervalMatcher<C> {
    counts: C,
}

impl<C> NarrowingIntervalMatcher<C> {
    /// Matcher over the given count functions.
    pub fn new(counts: C) -> Self {
        Self { counts }
    }

    /// The count functions.
    pub fn counts(&self) -> &C {
        &self.counts
    }

    /// Rows whose rotation starts with `pattern`, or `None` if there are none.
    ///
    /// An empty pattern matches every row, and nothing matches when there
    /// are no rows. Searching stops at the first symbol that empties the
    /// interval; the remaining symbols are not looked at.
    pub fn match_pattern<S: Symbol>(&self, pattern: &[S]) -> Option<RowInterval>
    where
        C: OccurrenceCounts<S>,
    {
        let mut lo = 0;
        let mut hi = self.counts.rows();
        if lo >= hi {
            return None;
        }

        for (consumed, &symbol) in pattern.iter().rev().enumerate() {
            let first = self.counts.first_occurrence(symbol);
            let next_lo = first + self.counts.count(symbol, lo);
            let next_hi = first + self.counts.count(symbol, hi);
            if next_lo >= next_hi {
                log::trace!(
                    "backward search emptied on {symbol:?} after {} of {} symbols",
                    consumed + 1,
                    pattern.len()
                );
                return None;
            }
            lo = next_lo;
            hi = next_hi;
            log::trace!("backward search: {symbol:?} -> [{lo}, {hi})");
        }

        Some(RowInterval { start: lo, end: hi })
    }
}

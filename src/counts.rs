use crate::{Alphabet, Symbol};

/// Count functions of a Burrows-Wheeler transform, as used by backward
/// search.
///
/// Both functions depend only on the transform string.
pub trait OccurrenceCounts<S> {
    /// Number of rows (transform length).
    fn rows(&self) -> usize;

    /// First row whose rotation starts with `symbol`.
    ///
    /// For a symbol absent from the transform this is the row where it would
    /// be inserted, i.e. the number of transform symbols smaller than it.
    fn first_occurrence(&self, symbol: S) -> usize;

    /// Occurrences of `symbol` in the first `upto` transform symbols.
    fn count(&self, symbol: S, upto: usize) -> usize;
}

impl<S, C: OccurrenceCounts<S> + ?Sized> OccurrenceCounts<S> for &C {
    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn first_occurrence(&self, symbol: S) -> usize {
        (**self).first_occurrence(symbol)
    }

    #[inline]
    fn count(&self, symbol: S, upto: usize) -> usize {
        (**self).count(symbol, upto)
    }
}

/// Precomputed count tables: constant time per query, one prefix-count
/// column per alphabet symbol.
///
/// Memory is `alphabet.len() * (rows + 1)` `u32` counts, plus the alphabet's
/// direct table of one `u32` per value up to the largest symbol. A `char`
/// text over many distinct symbols pays for all of them; use
/// [`OnDemandCounts`] when that is too much.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountTables {
    alphabet: Alphabet,
    /// code → first row; `first[len]` is the number of rows.
    first: Vec<usize>,
    /// Row-major by code: `counts[code * (rows + 1) + i]` = occurrences of
    /// the symbol in `transform[..i]`.
    counts: Vec<u32>,
    rows: usize,
}

impl CountTables {
    /// Builds the tables for `transform`.
    ///
    /// # Panics
    ///
    /// If `transform` has more than `u32::MAX` symbols.
    pub fn build<S: Symbol>(transform: &[S]) -> Self {
        let alphabet = Alphabet::build(transform);
        let rows = transform.len();
        assert!(
            u32::try_from(rows).is_ok(),
            "transform of {rows} symbols too long for u32 counts"
        );
        let width = rows + 1;

        let mut counts = vec![0u32; alphabet.len() * width];
        for code in 0..alphabet.len() {
            let column = &mut counts[code * width..(code + 1) * width];
            let symbol = alphabet.symbol(code as u32);
            for (i, &s) in transform.iter().enumerate() {
                column[i + 1] = column[i] + u32::from(<S as Into<u32>>::into(s) == symbol);
            }
        }

        let mut first = Vec::with_capacity(alphabet.len() + 1);
        let mut row = 0;
        first.push(row);
        for code in 0..alphabet.len() {
            row += counts[code * width + rows] as usize;
            first.push(row);
        }

        log::debug!(
            "count tables built: {rows} rows, {} symbols",
            alphabet.len()
        );
        Self {
            alphabet,
            first,
            counts,
            rows,
        }
    }

    /// The symbols of the transform.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of stored prefix counts, `alphabet.len() * (rows + 1)`.
    pub fn count_entries(&self) -> usize {
        self.counts.len()
    }
}

impl<S: Symbol> OccurrenceCounts<S> for CountTables {
    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn first_occurrence(&self, symbol: S) -> usize {
        self.first[self.alphabet.codes_below(symbol) as usize]
    }

    /// # Panics
    ///
    /// If `upto` exceeds the number of rows.
    #[inline]
    fn count(&self, symbol: S, upto: usize) -> usize {
        assert!(upto <= self.rows, "upto {upto} out of bounds (rows {})", self.rows);
        match self.alphabet.code(symbol) {
            Some(code) => self.counts[code as usize * (self.rows + 1) + upto] as usize,
            None => 0,
        }
    }
}

/// Count functions computed on demand by scanning the transform.
///
/// Takes no memory beyond the transform itself; every query is linear in the
/// number of rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OnDemandCounts<T> {
    transform: T,
}

impl<T> OnDemandCounts<T> {
    /// Wraps a transform string (owned or borrowed).
    pub fn new(transform: T) -> Self {
        Self { transform }
    }

    /// The wrapped transform.
    pub fn transform(&self) -> &T {
        &self.transform
    }
}

impl<S: Symbol, T: AsRef<[S]>> OccurrenceCounts<S> for OnDemandCounts<T> {
    #[inline]
    fn rows(&self) -> usize {
        self.transform.as_ref().len()
    }

    fn first_occurrence(&self, symbol: S) -> usize {
        self.transform.as_ref().iter().filter(|&&s| s < symbol).count()
    }

    fn count(&self, symbol: S, upto: usize) -> usize {
        self.transform.as_ref()[..upto]
            .iter()
            .filter(|&&s| s == symbol)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // BWT of "banana$".
    const BANANA: &[u8] = b"annb$aa";

    #[test]
    fn first_occurrence_of_present_symbols() {
        let tables = CountTables::build(BANANA);
        // Sorted first column: $aaabnn
        assert_eq!(tables.first_occurrence(b'$'), 0);
        assert_eq!(tables.first_occurrence(b'a'), 1);
        assert_eq!(tables.first_occurrence(b'b'), 4);
        assert_eq!(tables.first_occurrence(b'n'), 5);
        assert_eq!(OccurrenceCounts::<u8>::rows(&tables), 7);
    }

    #[test]
    fn first_occurrence_of_absent_symbols_is_insertion_row() {
        let tables = CountTables::build(BANANA);
        assert_eq!(tables.first_occurrence(b'!'), 0);
        assert_eq!(tables.first_occurrence(b'c'), 5);
        assert_eq!(tables.first_occurrence(b'z'), 7);
    }

    #[test]
    fn counts_are_prefix_counts() {
        let tables = CountTables::build(BANANA);
        let expected_a = [0, 1, 1, 1, 1, 1, 2, 3];
        let expected_n = [0, 0, 1, 2, 2, 2, 2, 2];
        for upto in 0..=7 {
            assert_eq!(tables.count(b'a', upto), expected_a[upto]);
            assert_eq!(tables.count(b'n', upto), expected_n[upto]);
            assert_eq!(tables.count(b'x', upto), 0);
        }
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn count_past_end_panics() {
        let tables = CountTables::build(BANANA);
        tables.count(b'a', 8);
    }

    #[test]
    fn on_demand_matches_tables() {
        let tables = CountTables::build(BANANA);
        let on_demand = OnDemandCounts::new(BANANA);
        for symbol in [b'$', b'a', b'b', b'n', b'c', b'z', b'!'] {
            assert_eq!(
                tables.first_occurrence(symbol),
                on_demand.first_occurrence(symbol),
                "first_occurrence({})",
                symbol as char
            );
            for upto in 0..=BANANA.len() {
                assert_eq!(tables.count(symbol, upto), on_demand.count(symbol, upto));
            }
        }
    }

    #[test]
    fn char_transform() {
        let transform: Vec<char> = "ipssm$pissii".chars().collect();
        let tables = CountTables::build(&transform);
        assert_eq!(tables.first_occurrence('$'), 0);
        assert_eq!(tables.first_occurrence('i'), 1);
        assert_eq!(tables.first_occurrence('m'), 5);
        assert_eq!(tables.first_occurrence('p'), 6);
        assert_eq!(tables.first_occurrence('s'), 8);
        assert_eq!(tables.count('s', 12), 4);
        assert_eq!(tables.alphabet().len(), 5);
    }

    #[test]
    fn one_column_per_symbol() {
        let tables = CountTables::build(BANANA);
        assert_eq!(tables.count_entries(), 4 * 8);

        let empty = CountTables::build::<u8>(&[]);
        assert_eq!(empty.count_entries(), 0);
        assert_eq!(OccurrenceCounts::<u8>::rows(&empty), 0);
        assert_eq!(empty.first_occurrence(b'a'), 0);
        assert_eq!(empty.count(b'a', 0), 0);
    }
}

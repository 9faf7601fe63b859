use crate::{Symbol, TerminatedText};

/// Burrows-Wheeler transform of a terminated text, with the suffix array it
/// was derived from.
///
/// Row `i` of the (conceptual) sorted-rotation matrix starts at text offset
/// `suffix_array[i]`; the transform holds the last symbol of every row.
/// Because the terminator is unique, sorting rotations and sorting suffixes
/// give the same order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BwTransform<S: Symbol> {
    transform: Vec<S>,
    suffix_array: Vec<usize>,
}

impl<S: Symbol> BwTransform<S> {
    /// Computes the transform by sorting all suffixes of `text`.
    ///
    /// Comparison is ordinal. This is a reference construction, quadratic in
    /// the worst case (long repeats).
    pub fn build(text: &TerminatedText<S>) -> Self {
        let symbols = text.as_slice();
        let n = symbols.len();

        let mut suffix_array: Vec<usize> = (0..n).collect();
        suffix_array.sort_unstable_by(|&a, &b| symbols[a..].cmp(&symbols[b..]));

        let transform = suffix_array
            .iter()
            .map(|&offset| symbols[(offset + n - 1) % n])
            .collect();

        log::debug!("BWT built over {n} symbols");
        Self {
            transform,
            suffix_array,
        }
    }

    /// The transform string (last column).
    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.transform
    }

    /// Number of rows, equal to the text length with its terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.transform.len()
    }

    /// Always false; a terminated text has at least one row.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transform.is_empty()
    }

    /// Text offset of every row.
    #[inline]
    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    /// Text offset at which row `row` starts.
    #[inline]
    pub fn offset_of_row(&self, row: usize) -> usize {
        self.suffix_array[row]
    }

    /// The sorted text (first column).
    pub fn first_column(&self) -> Vec<S> {
        let mut sorted = self.transform.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Splits into the transform and the suffix array.
    pub fn into_parts(self) -> (Vec<S>, Vec<usize>) {
        (self.transform, self.suffix_array)
    }
}
